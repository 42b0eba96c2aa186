//! Financial model parameters and named presets

use crate::error::{GoldSwimError, Result};
use crate::types::{Cash, Percentage};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Per-run cost, margin and tax assumptions for the quarterly projection
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinancialModelParams {
    /// Gross margin captured per gram per day
    pub margin_per_gram: Cash,
    /// Operating expenses as a share of margin
    pub operating_exp_percent: Percentage,
    /// Brokerage deducted from the balance each quarter
    pub transaction_brokerage: Percentage,
    /// Storage cost as a share of gross gold value
    pub storage_cost_percent: Percentage,
    /// Insurance cost as a share of gross gold value
    pub insurance_cost_percent: Percentage,
    /// Tax applied to realizable gains
    pub effective_tax_rate: Percentage,
}

impl FinancialModelParams {
    pub const CONSERVATIVE: Self = Self {
        margin_per_gram: 0.60,
        operating_exp_percent: 0.50,
        transaction_brokerage: 0.0025,
        storage_cost_percent: 0.0015,
        insurance_cost_percent: 0.00075,
        effective_tax_rate: 0.30,
    };

    pub const MODERATE: Self = Self {
        margin_per_gram: 1.00,
        operating_exp_percent: 0.25,
        transaction_brokerage: 0.001,
        storage_cost_percent: 0.0005,
        insurance_cost_percent: 0.00025,
        effective_tax_rate: 0.21,
    };

    pub const OPTIMISTIC: Self = Self {
        margin_per_gram: 1.20,
        operating_exp_percent: 0.20,
        transaction_brokerage: 0.001,
        storage_cost_percent: 0.00075,
        insurance_cost_percent: 0.00025,
        effective_tax_rate: 0.1667,
    };

    /// Check that the margin is non-negative and every percentage lies in [0, 1].
    ///
    /// The projection engine never calls this; it is an opt-in check for
    /// callers that accept user-supplied parameters.
    pub fn validate(&self) -> Result<()> {
        if !(self.margin_per_gram >= 0.0) {
            return Err(GoldSwimError::InvalidParameter {
                name: "margin_per_gram".to_string(),
                value: self.margin_per_gram,
            });
        }

        let fractions = [
            ("operating_exp_percent", self.operating_exp_percent),
            ("transaction_brokerage", self.transaction_brokerage),
            ("storage_cost_percent", self.storage_cost_percent),
            ("insurance_cost_percent", self.insurance_cost_percent),
            ("effective_tax_rate", self.effective_tax_rate),
        ];
        for (name, value) in fractions {
            if !(0.0..=1.0).contains(&value) {
                return Err(GoldSwimError::InvalidParameter {
                    name: name.to_string(),
                    value,
                });
            }
        }

        Ok(())
    }
}

/// Named parameter presets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FinancialModel {
    Conservative,
    Moderate,
    Optimistic,
}

/// All presets, in display order
pub const FINANCIAL_MODELS: [FinancialModel; 3] = [
    FinancialModel::Conservative,
    FinancialModel::Moderate,
    FinancialModel::Optimistic,
];

impl FinancialModel {
    /// Lookup key
    pub fn key(&self) -> &'static str {
        match self {
            FinancialModel::Conservative => "conservative",
            FinancialModel::Moderate => "moderate",
            FinancialModel::Optimistic => "optimistic",
        }
    }

    /// Display name
    pub fn name(&self) -> &'static str {
        match self {
            FinancialModel::Conservative => "Conservative",
            FinancialModel::Moderate => "Moderate",
            FinancialModel::Optimistic => "Optimistic",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            FinancialModel::Conservative => "Lower margins, higher costs & taxes",
            FinancialModel::Moderate => "Balanced assumptions (default)",
            FinancialModel::Optimistic => "Higher margins, lower costs & taxes",
        }
    }

    pub fn params(&self) -> FinancialModelParams {
        match self {
            FinancialModel::Conservative => FinancialModelParams::CONSERVATIVE,
            FinancialModel::Moderate => FinancialModelParams::MODERATE,
            FinancialModel::Optimistic => FinancialModelParams::OPTIMISTIC,
        }
    }
}

impl fmt::Display for FinancialModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

impl FromStr for FinancialModel {
    type Err = GoldSwimError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "conservative" => Ok(FinancialModel::Conservative),
            "moderate" => Ok(FinancialModel::Moderate),
            "optimistic" => Ok(FinancialModel::Optimistic),
            other => Err(GoldSwimError::UnknownModel(other.to_string())),
        }
    }
}

/// Look up preset parameters by key
pub fn financial_model(key: &str) -> Option<FinancialModelParams> {
    key.parse::<FinancialModel>().ok().map(|m| m.params())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preset_lookup() {
        assert_eq!(
            financial_model("moderate"),
            Some(FinancialModelParams::MODERATE)
        );
        assert_eq!(
            financial_model("Conservative"),
            Some(FinancialModelParams::CONSERVATIVE)
        );
        assert_eq!(financial_model("aggressive"), None);
    }

    #[test]
    fn test_presets_are_ordered_by_optimism() {
        let c = FinancialModel::Conservative.params();
        let m = FinancialModel::Moderate.params();
        let o = FinancialModel::Optimistic.params();

        assert!(c.margin_per_gram < m.margin_per_gram);
        assert!(m.margin_per_gram < o.margin_per_gram);
        assert!(c.effective_tax_rate > m.effective_tax_rate);
        assert!(m.effective_tax_rate > o.effective_tax_rate);
    }

    #[test]
    fn test_presets_validate() {
        for model in FINANCIAL_MODELS {
            assert!(model.params().validate().is_ok(), "{} invalid", model);
        }
    }

    #[test]
    fn test_validate_rejects_out_of_range() {
        let params = FinancialModelParams {
            effective_tax_rate: 1.5,
            ..FinancialModelParams::MODERATE
        };
        match params.validate() {
            Err(GoldSwimError::InvalidParameter { name, value }) => {
                assert_eq!(name, "effective_tax_rate");
                assert_eq!(value, 1.5);
            }
            other => panic!("expected InvalidParameter, got {:?}", other),
        }

        let negative_margin = FinancialModelParams {
            margin_per_gram: -0.1,
            ..FinancialModelParams::MODERATE
        };
        assert!(negative_margin.validate().is_err());
    }

    #[test]
    fn test_model_display_and_parse() {
        assert_eq!(FinancialModel::Optimistic.to_string(), "optimistic");
        assert_eq!(
            " MODERATE ".parse::<FinancialModel>().unwrap(),
            FinancialModel::Moderate
        );
        assert!("custom".parse::<FinancialModel>().is_err());
    }
}
