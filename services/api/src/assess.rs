use crate::infra::load_model;
use clap::Args;
use finwell::clusters::BehavioralProfile;
use finwell::error::AppError;
use finwell::scoring::{FinancialSnapshot, WellnessAssessment};
use std::path::PathBuf;

/// One-shot assessment from the command line. Defaults mirror the original
/// intake form so `assess` with no flags produces the reference household.
#[derive(Args, Debug)]
pub(crate) struct AssessArgs {
    /// Monthly income in dollars (must be positive)
    #[arg(long, default_value_t = 5000.0)]
    pub(crate) monthly_income: f64,
    /// Monthly spending in dollars
    #[arg(long, default_value_t = 3000.0)]
    pub(crate) monthly_spend: f64,
    /// Total outstanding debt in dollars
    #[arg(long, default_value_t = 50000.0)]
    pub(crate) total_debt: f64,
    /// Monthly savings in dollars
    #[arg(long, default_value_t = 1000.0)]
    pub(crate) savings: f64,
    /// Emergency fund balance in dollars
    #[arg(long, default_value_t = 20000.0)]
    pub(crate) emergency_fund: f64,
    /// Directory holding the behavioral model artifacts; omit to skip the
    /// behavioral profile section
    #[arg(long)]
    pub(crate) model_dir: Option<PathBuf>,
}

pub(crate) fn run_assess(args: AssessArgs) -> Result<(), AppError> {
    let AssessArgs {
        monthly_income,
        monthly_spend,
        total_debt,
        savings,
        emergency_fund,
        model_dir,
    } = args;

    let snapshot = FinancialSnapshot::new(
        monthly_income,
        monthly_spend,
        total_debt,
        savings,
        emergency_fund,
    )?;
    let assessment = WellnessAssessment::for_snapshot(&snapshot);

    let profile = match model_dir {
        Some(dir) => {
            let classifier = load_model(&dir)?;
            Some(BehavioralProfile::classify_with(
                classifier.as_ref(),
                &snapshot,
                &assessment.ratios,
            ))
        }
        None => None,
    };

    render_assessment(&snapshot, &assessment, profile.as_ref());
    Ok(())
}

fn render_assessment(
    snapshot: &FinancialSnapshot,
    assessment: &WellnessAssessment,
    profile: Option<&BehavioralProfile>,
) {
    println!("Financial wellness assessment");
    println!(
        "  Score: {:.2} / 100 ({})",
        assessment.score,
        assessment.level.label()
    );

    println!("\nScore breakdown");
    for component in &assessment.components {
        println!("  {:>6.2}  {}", component.points, component.notes);
    }

    println!("\nWhy you got this score");
    for reason in &assessment.reasons {
        println!("  - {reason}");
    }

    println!("\nKey metrics");
    println!("  Expense / income:     {:.2}", assessment.ratios.expense_to_income);
    println!("  Debt / income:        {:.2}", assessment.ratios.debt_to_income);
    println!("  Savings rate:         {:.1}%", assessment.ratios.savings_percent);
    println!(
        "  Emergency cover:      {:.1} months",
        assessment.ratios.months_emergency_cover
    );
    println!("  Annual income:        ${:.0}", snapshot.annual_income());

    if let Some(profile) = profile {
        println!("\nBehavioral profile");
        println!(
            "  {} (cluster {}) - descriptive context only, does not affect the score",
            profile.cluster_name, profile.cluster_id
        );
    }

    println!("\nTargeted guidance");
    for line in assessment.level.guidance() {
        println!("  - {line}");
    }
}
