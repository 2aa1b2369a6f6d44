use super::domain::DerivedRatios;
use serde::{Deserialize, Serialize};

/// The four weighted dimensions of the wellness score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreFactor {
    ExpenseDiscipline,
    DebtBurden,
    EmergencyReserve,
    SavingsQuality,
}

/// Discrete contribution to the wellness score, allowing transparent audits
/// of where points were gained or lost.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreComponent {
    pub factor: ScoreFactor,
    pub points: f64,
    pub notes: String,
}

// Expense discipline, weighted 25: full credit at a spend ratio of 0.4 or
// below, nothing at 1.0 or above, linear in between.
fn expense_component(expense_to_income: f64) -> ScoreComponent {
    let er = expense_to_income;
    let (points, notes) = if er <= 0.4 {
        (25.0, format!("spend ratio {er:.2} within the 0.40 full-credit band"))
    } else if er >= 1.0 {
        (0.0, format!("spend ratio {er:.2} consumes all income"))
    } else {
        (
            (1.0 - (er - 0.4) / 0.6) * 25.0,
            format!("spend ratio {er:.2} between 0.40 and 1.00"),
        )
    };
    ScoreComponent {
        factor: ScoreFactor::ExpenseDiscipline,
        points,
        notes,
    }
}

// Debt burden, weighted 30: full credit at a debt-to-income ratio of 0.5 or
// below, nothing at 3.0 or above.
fn debt_component(debt_to_income: f64) -> ScoreComponent {
    let dr = debt_to_income;
    let (points, notes) = if dr <= 0.5 {
        (30.0, format!("debt ratio {dr:.2} within the 0.50 full-credit band"))
    } else if dr >= 3.0 {
        (0.0, format!("debt ratio {dr:.2} at or above the 3.00 cutoff"))
    } else {
        (
            (1.0 - (dr - 0.5) / 2.5) * 30.0,
            format!("debt ratio {dr:.2} between 0.50 and 3.00"),
        )
    };
    ScoreComponent {
        factor: ScoreFactor::DebtBurden,
        points,
        notes,
    }
}

// Emergency reserve, weighted 25: full credit at six months of cover,
// proportional below that.
fn emergency_component(months_cover: f64) -> ScoreComponent {
    let (points, notes) = if months_cover >= 6.0 {
        (25.0, format!("{months_cover:.1} months of cover meets the 6-month target"))
    } else {
        (
            months_cover / 6.0 * 25.0,
            format!("{months_cover:.1} months of cover below the 6-month target"),
        )
    };
    ScoreComponent {
        factor: ScoreFactor::EmergencyReserve,
        points,
        notes,
    }
}

// Savings quality, weighted 20: full credit at a 25% savings rate. High debt
// dampens the credit multiplicatively (x0.6 above ratio 1, a further x0.4
// above ratio 2).
fn savings_component(savings_percent: f64, debt_to_income: f64) -> ScoreComponent {
    let mut points = (savings_percent / 25.0).min(1.0) * 20.0;
    let mut notes = format!("savings rate {savings_percent:.1}% against a 25% target");
    if debt_to_income > 1.0 {
        points *= 0.6;
        notes.push_str(", dampened by elevated debt");
    }
    if debt_to_income > 2.0 {
        points *= 0.4;
        notes.push_str(", dampened again by severe debt");
    }
    ScoreComponent {
        factor: ScoreFactor::SavingsQuality,
        points,
        notes,
    }
}

/// Per-factor breakdown of the wellness score. Component points always sum
/// to the unrounded score.
pub fn score_breakdown(ratios: &DerivedRatios) -> Vec<ScoreComponent> {
    vec![
        expense_component(ratios.expense_to_income),
        debt_component(ratios.debt_to_income),
        emergency_component(ratios.months_emergency_cover),
        savings_component(ratios.savings_percent, ratios.debt_to_income),
    ]
}

/// Rule-based financial wellness score in [0, 100], rounded to two decimal
/// places. The range holds by construction: each component is clamped to its
/// weight and the weights sum to 100.
pub fn calculate_wellness_score(ratios: &DerivedRatios) -> f64 {
    let total: f64 = score_breakdown(ratios)
        .iter()
        .map(|component| component.points)
        .sum();
    round2(total)
}

pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
