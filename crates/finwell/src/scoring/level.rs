use serde::{Deserialize, Serialize};
use std::fmt;

/// Risk-based interpretation of the wellness score, ordered from worst to
/// best. Band lower bounds are left-inclusive: a score of exactly 35.0 is
/// already At Risk, not Critical.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WellnessLevel {
    Critical,
    AtRisk,
    Stable,
    Strong,
    Excellent,
}

impl WellnessLevel {
    /// Total over all reals; out-of-range scores degrade to the extreme
    /// bands.
    pub fn from_score(score: f64) -> Self {
        if score < 35.0 {
            Self::Critical
        } else if score < 55.0 {
            Self::AtRisk
        } else if score < 70.0 {
            Self::Stable
        } else if score < 85.0 {
            Self::Strong
        } else {
            Self::Excellent
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Critical => "Critical",
            Self::AtRisk => "At Risk",
            Self::Stable => "Stable",
            Self::Strong => "Strong",
            Self::Excellent => "Excellent",
        }
    }

    /// Static guidance bundle rendered alongside the score. Critical and
    /// At Risk share the stabilization advice.
    pub fn guidance(&self) -> &'static [&'static str] {
        match self {
            Self::Critical | Self::AtRisk => &[
                "Focus on stabilizing cash flow and building an emergency buffer",
                "Reduce high-interest debt before increasing investments",
            ],
            Self::Stable => &[
                "Increase emergency fund toward 6 months of expenses",
                "Improve savings rate while keeping debt under control",
            ],
            Self::Strong => &[
                "Maintain discipline and optimize long-term investments",
                "Gradually reduce remaining debt exposure",
            ],
            Self::Excellent => &[
                "Financial structure is resilient",
                "Focus on wealth optimization and risk diversification",
            ],
        }
    }
}

impl fmt::Display for WellnessLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Maps a wellness score onto its risk band.
pub fn wellness_label(score: f64) -> WellnessLevel {
    WellnessLevel::from_score(score)
}
