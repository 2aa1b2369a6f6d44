//! End-to-end specifications for the wellness scoring pipeline: raw figures
//! through derived ratios, scoring, labeling, and explanation, exercised via
//! the public API only.

use finwell::clusters::{BehavioralClassifier, BehavioralProfile, FeatureVector};
use finwell::scoring::{
    calculate_wellness_score, score_explanation, wellness_label, DerivedRatios, FinancialSnapshot,
    ScoreFactor, WellnessAssessment, WellnessLevel,
};

fn snapshot(
    monthly_income: f64,
    monthly_spend: f64,
    total_debt: f64,
    savings_amount: f64,
    emergency_fund: f64,
) -> FinancialSnapshot {
    FinancialSnapshot::new(
        monthly_income,
        monthly_spend,
        total_debt,
        savings_amount,
        emergency_fund,
    )
    .expect("valid snapshot")
}

#[test]
fn reference_household_scores_strong() {
    let snapshot = snapshot(5000.0, 3000.0, 50000.0, 1000.0, 20000.0);
    let ratios = DerivedRatios::from_snapshot(&snapshot);

    assert!((ratios.savings_percent - 20.0).abs() < 1e-9);
    assert!((ratios.expense_to_income - 0.6).abs() < 1e-9);
    assert!((ratios.debt_to_income - 0.8333).abs() < 1e-3);
    assert!(ratios.months_emergency_cover > 6.0);

    let score = calculate_wellness_score(&ratios);
    assert_eq!(score, 83.67);
    assert_eq!(wellness_label(score), WellnessLevel::Strong);
}

#[test]
fn assessment_breakdown_matches_reference_subscores() {
    let assessment =
        WellnessAssessment::for_snapshot(&snapshot(5000.0, 3000.0, 50000.0, 1000.0, 20000.0));

    let factor_points = |factor: ScoreFactor| {
        assessment
            .components
            .iter()
            .find(|component| component.factor == factor)
            .map(|component| component.points)
            .expect("factor present")
    };

    assert!((factor_points(ScoreFactor::ExpenseDiscipline) - 16.6667).abs() < 1e-3);
    assert!((factor_points(ScoreFactor::DebtBurden) - 26.0).abs() < 1e-9);
    assert!((factor_points(ScoreFactor::EmergencyReserve) - 25.0).abs() < 1e-9);
    assert!((factor_points(ScoreFactor::SavingsQuality) - 16.0).abs() < 1e-9);
}

#[test]
fn distressed_household_scores_critical_with_full_reasons() {
    // Spending above income, debt over two years of income, no reserves.
    let snapshot = snapshot(2000.0, 2400.0, 60000.0, 0.0, 500.0);
    let assessment = WellnessAssessment::for_snapshot(&snapshot);

    assert!(assessment.score < 35.0);
    assert_eq!(assessment.level, WellnessLevel::Critical);
    assert_eq!(
        assessment.reasons,
        vec![
            "Spending consumes most of income".to_string(),
            "Savings rate is too low".to_string(),
            "Debt level is dangerously high".to_string(),
            "Emergency fund is critically insufficient".to_string(),
        ]
    );
}

#[test]
fn balanced_household_gets_fallback_reason() {
    // Spend ratio 0.4, savings rate 25%, no debt, 10+ months of cover.
    let snapshot = snapshot(6000.0, 2400.0, 0.0, 1500.0, 30000.0);
    let assessment = WellnessAssessment::for_snapshot(&snapshot);

    assert_eq!(assessment.level, WellnessLevel::Excellent);
    assert_eq!(
        assessment.reasons,
        vec!["Financial behavior is balanced and resilient".to_string()]
    );
}

#[test]
fn labeling_and_explanation_share_the_scoring_ratios() {
    let snapshot = snapshot(4000.0, 3900.0, 0.0, 200.0, 1000.0);
    let assessment = WellnessAssessment::for_snapshot(&snapshot);

    // Spend ratio 0.975 sits in the decay band; explanation flags the same
    // direction at its looser 0.7 threshold.
    assert!(assessment.ratios.expense_to_income > 0.7);
    assert!(assessment
        .reasons
        .contains(&"Spending consumes most of income".to_string()));
    assert_eq!(assessment.level, wellness_label(assessment.score));
}

#[test]
fn scoring_needs_no_classifier_but_accepts_one() {
    struct AlwaysUnknown;

    impl BehavioralClassifier for AlwaysUnknown {
        fn classify(&self, _features: &FeatureVector) -> i64 {
            42
        }
    }

    let snapshot = snapshot(5000.0, 3000.0, 50000.0, 1000.0, 20000.0);
    let ratios = DerivedRatios::from_snapshot(&snapshot);

    // Score and reasons are complete without any model involvement.
    assert_eq!(calculate_wellness_score(&ratios), 83.67);
    assert!(!score_explanation(&ratios).is_empty());

    // An out-of-set id from the collaborator degrades to the default name.
    let profile = BehavioralProfile::classify_with(&AlwaysUnknown, &snapshot, &ratios);
    assert_eq!(profile.cluster_name, "Unknown Pattern");
}
