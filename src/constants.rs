//! Market constants and defaults
//!
//! Fixed physical and market constants shared by the quarterly projection
//! and the SiriZ31 futures analyzer.

/// Grams per troy ounce
pub const GRAMS_PER_TROY_OUNCE: f64 = 31.1034768;

/// Spread added to the per-gram spot price to get the initial sourcing cost
pub const SOURCING_SPREAD_PER_GRAM: f64 = 2.0;

/// Per-quarter escalation of sourcing cost and market price (1.977%)
pub const SOURCING_COST_INCREASE: f64 = 0.01977;

/// Premium over per-gram spot used for the market price and subscription price
pub const MARKET_PREMIUM: f64 = 15.0;

/// Per-gram acquisition markup charged once at the start of a run
pub const MARKUP_PER_GRAM: f64 = 13.0;

/// Subscription units per gram (units are 1/100th gram)
pub const UNITS_PER_GRAM: f64 = 100.0;

/// Standard quarter length in days
pub const DAYS_PER_QUARTER: u32 = 65;

/// The closing quarter runs a shorter cycle
pub const CLOSING_QUARTER: u32 = 25;
pub const CLOSING_QUARTER_DAYS: u32 = 53;

/// Default projection horizon
pub const DEFAULT_NUMBER_OF_QUARTERS: u32 = 25;

/// SiriZ31 contract size in troy ounces
pub const CONTRACT_SIZE_OZ: f64 = 100.0;

/// SiriZ31 margin rates, as fractions of notional
pub const INITIAL_MARGIN_RATE: f64 = 0.08;
pub const MAINTENANCE_MARGIN_RATE: f64 = 0.06;

/// SiriZ31 position limit in contracts
pub const MAX_CONTRACTS: u32 = 10;

/// Margin utilization bands (percent of investment)
pub const HIGH_MARGIN_UTILIZATION: f64 = 80.0;
pub const MODERATE_MARGIN_UTILIZATION: f64 = 50.0;

/// Fallback spot price (USD/oz) for callers without a live quote
pub const FALLBACK_SPOT_PRICE_PER_OZ: f64 = 2650.0;

/// Fallback EUR/USD rate (USD per EUR) for callers without a live quote
pub const FALLBACK_EUR_USD_RATE: f64 = 1.2;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constants() {
        assert_eq!(GRAMS_PER_TROY_OUNCE, 31.1034768);
        assert_eq!(DAYS_PER_QUARTER, 65);
        assert_eq!(CLOSING_QUARTER_DAYS, 53);
        assert!(MAINTENANCE_MARGIN_RATE < INITIAL_MARGIN_RATE);
        assert!(MODERATE_MARGIN_UTILIZATION < HIGH_MARGIN_UTILIZATION);
    }
}
