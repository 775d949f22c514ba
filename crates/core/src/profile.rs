//! The user profile snapshot the advisor may personalize with.
//!
//! Both fields are optional. Anything absent, non-numeric or non-finite
//! reads as `0.0`, so callers never see `NaN` leaking into advice text.

use serde::{Deserialize, Deserializer, Serialize};

/// Read-only financial snapshot supplied by the caller.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    /// Gross yearly income, currency units
    #[serde(
        default,
        deserialize_with = "lenient_amount",
        skip_serializing_if = "Option::is_none"
    )]
    pub annual_income: Option<f64>,

    /// Current account balance, currency units (may be negative)
    #[serde(
        default,
        deserialize_with = "lenient_amount",
        skip_serializing_if = "Option::is_none"
    )]
    pub current_balance: Option<f64>,
}

impl UserProfile {
    pub fn new(annual_income: Option<f64>, current_balance: Option<f64>) -> Self {
        Self {
            annual_income,
            current_balance,
        }
    }

    /// Annual income, `0.0` when missing or not a finite number.
    pub fn annual_income(&self) -> f64 {
        finite_or_zero(self.annual_income)
    }

    /// Current balance, `0.0` when missing or not a finite number.
    pub fn current_balance(&self) -> f64 {
        finite_or_zero(self.current_balance)
    }

    pub fn monthly_income(&self) -> f64 {
        self.annual_income() / 12.0
    }
}

fn finite_or_zero(value: Option<f64>) -> f64 {
    value.filter(|v| v.is_finite()).unwrap_or(0.0)
}

/// Accept numbers and numeric strings; treat anything else as absent.
fn lenient_amount<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    let amount = match value {
        serde_json::Value::Number(n) => n.as_f64(),
        serde_json::Value::String(s) => s.trim().replace(',', "").parse::<f64>().ok(),
        _ => None,
    };
    Ok(amount.filter(|v| v.is_finite()))
}
