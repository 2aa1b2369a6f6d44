//! Behavioral pattern lookup backed by a pre-trained, externally owned
//! clustering model. The pattern is descriptive context only; it never
//! feeds back into the wellness score.

mod artifact;

pub use artifact::{ClusterModel, ClusterModelError};

use crate::scoring::{DerivedRatios, FinancialSnapshot};
use serde::{Deserialize, Serialize};

/// Number of features the trained artifacts expect, in the order of
/// [`FeatureVector::from_snapshot`].
pub const FEATURE_COUNT: usize = 8;

/// Input to the classifier, in the exact order the model was trained on:
/// annual income, monthly spend, savings percent, emergency fund, total
/// debt, savings amount, expense-to-income, debt-to-income.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FeatureVector(pub [f64; FEATURE_COUNT]);

impl FeatureVector {
    pub fn from_snapshot(snapshot: &FinancialSnapshot, ratios: &DerivedRatios) -> Self {
        Self([
            snapshot.annual_income(),
            snapshot.monthly_spend,
            ratios.savings_percent,
            snapshot.emergency_fund,
            snapshot.total_debt,
            snapshot.savings_amount,
            ratios.expense_to_income,
            ratios.debt_to_income,
        ])
    }
}

/// Black-box contract over the externally trained classifier. Implementors
/// are immutable after load and shared process-wide.
pub trait BehavioralClassifier: Send + Sync {
    fn classify(&self, features: &FeatureVector) -> i64;
}

/// Descriptive names for the trained cluster ids. Ids outside the trained
/// set fall back to "Unknown Pattern" rather than erroring.
pub fn cluster_name(cluster_id: i64) -> &'static str {
    match cluster_id {
        0 => "Tight Budget Pattern",
        1 => "Savings-Oriented Pattern",
        2 => "High Cash Flow Pattern",
        _ => "Unknown Pattern",
    }
}

/// Rendered cluster result for presentation layers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BehavioralProfile {
    pub cluster_id: i64,
    pub cluster_name: String,
}

impl BehavioralProfile {
    pub fn classify_with(
        classifier: &dyn BehavioralClassifier,
        snapshot: &FinancialSnapshot,
        ratios: &DerivedRatios,
    ) -> Self {
        let features = FeatureVector::from_snapshot(snapshot, ratios);
        let cluster_id = classifier.classify(&features);
        Self {
            cluster_id,
            cluster_name: cluster_name(cluster_id).to_string(),
        }
    }
}
