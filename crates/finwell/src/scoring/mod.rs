pub mod domain;
mod explanation;
mod level;
mod rules;

pub use domain::{months_of_cover, DerivedRatios, FinancialSnapshot, InputError};
pub use explanation::score_explanation;
pub use level::{wellness_label, WellnessLevel};
pub use rules::{calculate_wellness_score, score_breakdown, ScoreComponent, ScoreFactor};

use serde::{Deserialize, Serialize};

/// Full result of one scoring pass: the composite score, its risk band, the
/// per-factor breakdown, and the reasons. Derives the ratios exactly once so
/// scoring, labeling, and explanation can never disagree on the inputs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WellnessAssessment {
    pub ratios: DerivedRatios,
    pub score: f64,
    pub level: WellnessLevel,
    pub components: Vec<ScoreComponent>,
    pub reasons: Vec<String>,
}

impl WellnessAssessment {
    pub fn for_snapshot(snapshot: &FinancialSnapshot) -> Self {
        let ratios = DerivedRatios::from_snapshot(snapshot);
        let components = score_breakdown(&ratios);
        let score = calculate_wellness_score(&ratios);

        Self {
            ratios,
            score,
            level: WellnessLevel::from_score(score),
            components,
            reasons: score_explanation(&ratios),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn assessment_ties_score_level_and_reasons_together() {
        let snapshot =
            FinancialSnapshot::new(5000.0, 3000.0, 50000.0, 1000.0, 20000.0).expect("valid");
        let assessment = WellnessAssessment::for_snapshot(&snapshot);

        assert_eq!(assessment.score, 83.67);
        assert_eq!(assessment.level, WellnessLevel::Strong);
        assert_eq!(assessment.components.len(), 4);
        assert!(assessment
            .reasons
            .contains(&"Spending limits long-term growth".to_string()));
    }
}
