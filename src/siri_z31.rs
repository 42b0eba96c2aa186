//! SiriZ31 futures position analyzer
//!
//! Margin requirements, position-limit compliance and exit profit/loss for a
//! gold futures position of 100 oz contracts. Nothing here raises on a limit
//! breach or high utilization; both are reported as flags.

use crate::constants::{
    CONTRACT_SIZE_OZ, FALLBACK_SPOT_PRICE_PER_OZ, HIGH_MARGIN_UTILIZATION, INITIAL_MARGIN_RATE,
    MAINTENANCE_MARGIN_RATE, MAX_CONTRACTS, MODERATE_MARGIN_UTILIZATION,
};
use crate::types::{Cash, Price};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Exit price moves (percent of entry) and their labels, worst to best
pub const EXIT_SCENARIOS: [(&str, i32); 7] = [
    ("Worst Case (-10%)", -10),
    ("Bear Case (-5%)", -5),
    ("Break Even (0%)", 0),
    ("Modest Gain (+5%)", 5),
    ("Target (+10%)", 10),
    ("Bull Case (+15%)", 15),
    ("Best Case (+25%)", 25),
];

/// Position inputs
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiriZ31Params {
    /// Entry price, USD/oz
    pub entry_price: Price,
    pub number_of_contracts: u32,
    /// Capital committed to the position
    pub investment_amount: Cash,
    /// Target exit price, USD/oz
    pub target_exit_price: Price,
}

impl Default for SiriZ31Params {
    fn default() -> Self {
        Self {
            entry_price: FALLBACK_SPOT_PRICE_PER_OZ,
            number_of_contracts: 1,
            investment_amount: 50_000.0,
            target_exit_price: FALLBACK_SPOT_PRICE_PER_OZ * 1.15,
        }
    }
}

/// Margin utilization band
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MarginRisk {
    Conservative,
    Moderate,
    High,
}

impl MarginRisk {
    /// Band a utilization percentage: above 80 is high, above 50 moderate.
    pub fn from_utilization(margin_utilization: f64) -> Self {
        if margin_utilization > HIGH_MARGIN_UTILIZATION {
            MarginRisk::High
        } else if margin_utilization > MODERATE_MARGIN_UTILIZATION {
            MarginRisk::Moderate
        } else {
            MarginRisk::Conservative
        }
    }
}

impl fmt::Display for MarginRisk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            MarginRisk::Conservative => "Conservative",
            MarginRisk::Moderate => "Moderate",
            MarginRisk::High => "High risk",
        };
        write!(f, "{}", label)
    }
}

/// Position analysis output
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiriZ31Analysis {
    pub total_ounces: f64,
    pub position_value: Cash,
    pub initial_margin_required: Cash,
    pub initial_margin_percent: f64,
    pub maintenance_margin_required: Cash,
    pub maintenance_margin_percent: f64,
    pub max_contracts: u32,
    pub is_within_limits: bool,
    /// Initial margin as a percentage of the investment amount
    pub margin_utilization: f64,
    pub margin_risk: MarginRisk,
    pub exit_price: Price,
    pub price_change: Price,
    pub price_change_percent: f64,
    pub profit_loss: Cash,
    pub return_on_investment: f64,
}

/// Profit/loss at one exit price
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExitScenario {
    pub scenario: String,
    pub exit_price: Price,
    pub price_change: Price,
    pub price_change_percent: f64,
    pub profit_loss: Cash,
    pub return_on_investment: f64,
}

/// Ounces covered by a number of contracts
pub fn total_ounces(number_of_contracts: u32) -> f64 {
    f64::from(number_of_contracts) * CONTRACT_SIZE_OZ
}

fn exit_scenario(
    scenario: &str,
    entry_price: Price,
    exit_price: Price,
    number_of_contracts: u32,
    investment_amount: Cash,
) -> ExitScenario {
    let price_change = exit_price - entry_price;
    let price_change_percent = price_change / entry_price * 100.0;
    let profit_loss = price_change * total_ounces(number_of_contracts);
    let return_on_investment = profit_loss / investment_amount * 100.0;

    ExitScenario {
        scenario: scenario.to_string(),
        exit_price,
        price_change,
        price_change_percent,
        profit_loss,
        return_on_investment,
    }
}

/// Analyze a position at its target exit price.
pub fn analyze_position(params: &SiriZ31Params) -> SiriZ31Analysis {
    let total_ounces = total_ounces(params.number_of_contracts);
    let position_value = total_ounces * params.entry_price;
    let initial_margin_required = position_value * INITIAL_MARGIN_RATE;
    let maintenance_margin_required = position_value * MAINTENANCE_MARGIN_RATE;

    let margin_utilization = initial_margin_required / params.investment_amount * 100.0;
    let margin_risk = MarginRisk::from_utilization(margin_utilization);
    let is_within_limits = params.number_of_contracts <= MAX_CONTRACTS;

    if !is_within_limits {
        log::warn!(
            "Position of {} contracts exceeds limit of {}",
            params.number_of_contracts,
            MAX_CONTRACTS
        );
    }
    if margin_risk == MarginRisk::High {
        log::warn!("Margin utilization at {:.1}%", margin_utilization);
    }

    let exit = exit_scenario(
        "Target",
        params.entry_price,
        params.target_exit_price,
        params.number_of_contracts,
        params.investment_amount,
    );

    SiriZ31Analysis {
        total_ounces,
        position_value,
        initial_margin_required,
        initial_margin_percent: INITIAL_MARGIN_RATE * 100.0,
        maintenance_margin_required,
        maintenance_margin_percent: MAINTENANCE_MARGIN_RATE * 100.0,
        max_contracts: MAX_CONTRACTS,
        is_within_limits,
        margin_utilization,
        margin_risk,
        exit_price: exit.exit_price,
        price_change: exit.price_change,
        price_change_percent: exit.price_change_percent,
        profit_loss: exit.profit_loss,
        return_on_investment: exit.return_on_investment,
    }
}

/// Profit/loss at the fixed battery of exit prices, worst case first.
pub fn generate_exit_scenarios(
    entry_price: Price,
    number_of_contracts: u32,
    investment_amount: Cash,
) -> Vec<ExitScenario> {
    EXIT_SCENARIOS
        .iter()
        .map(|(label, percent)| {
            // entry + entry * pct / 100 keeps round prices exact (100 -> 110, not 110.00000000000001)
            exit_scenario(
                label,
                entry_price,
                entry_price + entry_price * f64::from(*percent) / 100.0,
                number_of_contracts,
                investment_amount,
            )
        })
        .collect()
}
