use serde::{Deserialize, Serialize};

/// Raw figures collected from the user. All amounts are monthly dollars
/// except `total_debt` and `emergency_fund`, which are balances.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FinancialSnapshot {
    pub monthly_income: f64,
    pub monthly_spend: f64,
    pub total_debt: f64,
    pub savings_amount: f64,
    pub emergency_fund: f64,
}

/// Rejections applied at the intake boundary. The scoring functions
/// themselves are total and never re-validate.
#[derive(Debug, thiserror::Error)]
pub enum InputError {
    #[error("{field} must be a finite number")]
    NotFinite { field: &'static str },
    #[error("{field} must not be negative")]
    Negative { field: &'static str },
    #[error("monthly income must be greater than zero")]
    ZeroIncome,
}

impl FinancialSnapshot {
    pub fn new(
        monthly_income: f64,
        monthly_spend: f64,
        total_debt: f64,
        savings_amount: f64,
        emergency_fund: f64,
    ) -> Result<Self, InputError> {
        let fields = [
            ("monthly_income", monthly_income),
            ("monthly_spend", monthly_spend),
            ("total_debt", total_debt),
            ("savings_amount", savings_amount),
            ("emergency_fund", emergency_fund),
        ];
        for (field, value) in fields {
            if !value.is_finite() {
                return Err(InputError::NotFinite { field });
            }
            if value < 0.0 {
                return Err(InputError::Negative { field });
            }
        }
        if monthly_income == 0.0 {
            return Err(InputError::ZeroIncome);
        }

        Ok(Self {
            monthly_income,
            monthly_spend,
            total_debt,
            savings_amount,
            emergency_fund,
        })
    }

    pub fn annual_income(&self) -> f64 {
        self.monthly_income * 12.0
    }
}

/// Liquidity-runway proxy: emergency fund divided by (monthly spend + 1).
/// The +1 keeps the ratio defined when spend is zero. Every consumer of
/// months-of-cover goes through this function so the derivation can never
/// drift between scoring and explanation.
pub fn months_of_cover(emergency_fund: f64, monthly_spend: f64) -> f64 {
    emergency_fund / (monthly_spend + 1.0)
}

/// Ratios the scoring curves operate on, derived once per assessment and
/// shared by scoring, labeling, and explanation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DerivedRatios {
    /// Savings as a percentage of monthly income (0–100+).
    pub savings_percent: f64,
    /// Monthly spend divided by monthly income.
    pub expense_to_income: f64,
    /// Total debt divided by annual income.
    pub debt_to_income: f64,
    /// See [`months_of_cover`].
    pub months_emergency_cover: f64,
}

impl DerivedRatios {
    pub fn from_snapshot(snapshot: &FinancialSnapshot) -> Self {
        Self {
            savings_percent: snapshot.savings_amount / snapshot.monthly_income * 100.0,
            expense_to_income: snapshot.monthly_spend / snapshot.monthly_income,
            debt_to_income: snapshot.total_debt / snapshot.annual_income(),
            months_emergency_cover: months_of_cover(
                snapshot.emergency_fund,
                snapshot.monthly_spend,
            ),
        }
    }
}
