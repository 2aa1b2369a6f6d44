use super::domain::DerivedRatios;

/// Explains why points were lost, one reason per behavior category in a
/// fixed order: spending, savings, debt, emergency preparedness.
///
/// The trigger thresholds deliberately sit inside the scoring curves (for
/// example spending flags at 0.5/0.7 while the score decays over 0.4–1.0):
/// the reasons are early directional warnings, not a restatement of the
/// score formula. Keep them loose; do not align them with the curve
/// breakpoints.
pub fn score_explanation(ratios: &DerivedRatios) -> Vec<String> {
    let mut reasons = Vec::new();

    if ratios.expense_to_income > 0.7 {
        reasons.push("Spending consumes most of income".to_string());
    } else if ratios.expense_to_income > 0.5 {
        reasons.push("Spending limits long-term growth".to_string());
    }

    if ratios.savings_percent < 10.0 {
        reasons.push("Savings rate is too low".to_string());
    } else if ratios.savings_percent < 20.0 {
        reasons.push("Savings rate could be stronger".to_string());
    }

    if ratios.debt_to_income > 2.0 {
        reasons.push("Debt level is dangerously high".to_string());
    } else if ratios.debt_to_income > 1.0 {
        reasons.push("Debt increases financial risk".to_string());
    }

    if ratios.months_emergency_cover < 1.0 {
        reasons.push("Emergency fund is critically insufficient".to_string());
    } else if ratios.months_emergency_cover < 3.0 {
        reasons.push("Emergency fund is below safety threshold".to_string());
    }

    if reasons.is_empty() {
        reasons.push("Financial behavior is balanced and resilient".to_string());
    }

    reasons
}
