//! Projection run configuration (TOML)
//!
//! ```toml
//! spot_price_per_oz = 2650.0
//! exchange_rate = 1.2
//! initial_investment = 10000.0
//! number_of_quarters = 25
//! model = "moderate"
//!
//! [custom]
//! marginPerGram = 1.1
//! operatingExpPercent = 0.25
//! transactionBrokerage = 0.001
//! storageCostPercent = 0.0005
//! insuranceCostPercent = 0.00025
//! effectiveTaxRate = 0.21
//! ```

use crate::constants::{DEFAULT_NUMBER_OF_QUARTERS, FALLBACK_EUR_USD_RATE, FALLBACK_SPOT_PRICE_PER_OZ};
use crate::error::{GoldSwimError, Result};
use crate::model::{FinancialModel, FinancialModelParams};
use crate::types::{Cash, Price};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Inputs for a projection run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectionConfig {
    /// Resolved spot price (USD/oz); the fallback applies when absent
    #[serde(default)]
    pub spot_price_per_oz: Option<Price>,
    /// USD per local currency unit; the fallback applies when absent
    #[serde(default)]
    pub exchange_rate: Option<f64>,
    #[serde(default = "default_initial_investment")]
    pub initial_investment: Cash,
    #[serde(default = "default_number_of_quarters")]
    pub number_of_quarters: u32,
    #[serde(default = "default_model")]
    pub model: String,
    /// Overrides the named preset when present
    #[serde(default)]
    pub custom: Option<FinancialModelParams>,
}

fn default_initial_investment() -> Cash {
    10_000.0
}

fn default_number_of_quarters() -> u32 {
    DEFAULT_NUMBER_OF_QUARTERS
}

fn default_model() -> String {
    FinancialModel::Moderate.key().to_string()
}

impl Default for ProjectionConfig {
    fn default() -> Self {
        Self {
            spot_price_per_oz: None,
            exchange_rate: None,
            initial_investment: default_initial_investment(),
            number_of_quarters: default_number_of_quarters(),
            model: default_model(),
            custom: None,
        }
    }
}

impl ProjectionConfig {
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        Ok(toml::from_str(contents)?)
    }

    /// Read and parse a config file
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|e| {
            GoldSwimError::ConfigError(format!("failed to read {}: {}", path.display(), e))
        })?;
        Self::from_toml_str(&contents)
    }

    /// Spot price to use, falling back to the fixed default
    pub fn spot_price(&self) -> Price {
        self.spot_price_per_oz.unwrap_or_else(|| {
            log::warn!(
                "No spot price configured, using fallback {:.2}",
                FALLBACK_SPOT_PRICE_PER_OZ
            );
            FALLBACK_SPOT_PRICE_PER_OZ
        })
    }

    /// Exchange rate to use, falling back to the fixed default
    pub fn usd_per_local(&self) -> f64 {
        self.exchange_rate.unwrap_or(FALLBACK_EUR_USD_RATE)
    }

    /// Custom parameters if given, otherwise the named preset; both are range-checked
    pub fn resolved_params(&self) -> Result<FinancialModelParams> {
        let params = match self.custom {
            Some(custom) => custom,
            None => self.model.parse::<FinancialModel>()?.params(),
        };
        params.validate()?;
        Ok(params)
    }
}
