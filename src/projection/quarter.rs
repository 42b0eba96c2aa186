//! Single-quarter state transition
//!
//! A quarter's record depends only on the previous quarter's record (or, for
//! quarter 1, on the spot price and the initial investment). The transition
//! is a pure function; threading records together is the runner's job.

use crate::constants::{
    CLOSING_QUARTER, CLOSING_QUARTER_DAYS, DAYS_PER_QUARTER, GRAMS_PER_TROY_OUNCE,
    MARKET_PREMIUM, MARKUP_PER_GRAM, SOURCING_COST_INCREASE, SOURCING_SPREAD_PER_GRAM,
    UNITS_PER_GRAM,
};
use crate::error::{GoldSwimError, Result};
use crate::model::FinancialModelParams;
use crate::types::{Cash, Grams, Price, Quarter};
use serde::{Deserialize, Serialize};

/// One quarter of a projection run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuarterlyRecord {
    pub quarter: Quarter,
    pub days: u32,
    pub investment_balance_beginning: Cash,
    /// One-time acquisition spread, quarter 1 only
    pub markup: Cash,
    /// Quarter-1 balance net of markup; zero afterwards
    pub investment_balance_net_initial_markup: Cash,
    /// Kept for output compatibility; nothing reads it
    pub investment_balance_net_markup: Cash,
    pub transaction_brokerage: Cash,
    pub investment_for_sourcing: Cash,
    pub sourcing_cost_beginning: Price,
    pub revenue_grams: Grams,
    pub margin: Cash,
    pub operating_exp: Cash,
    pub quarterly_gains: Cash,
    pub sourcing_cost_end: Price,
    pub new_grams_purchasable: Grams,
    pub total_grams_end: Grams,
    pub market_price_end: Price,
    pub gross_value_end: Cash,
    pub storage_cost: Cash,
    pub insurance_cost: Cash,
    pub total_costs: Cash,
    pub realizable_gain_end: Cash,
    pub tax_amount: Cash,
    pub investible_gain_net_tax: Cash,
    pub qtr_end_total_grams: Grams,
    /// Valued at the lower of market price and sourcing cost
    pub qtr_end_total_value: Cash,
    /// Quarter-end value minus the original initial investment
    #[serde(rename = "cumulativeROI")]
    pub cumulative_roi: Cash,
}

/// Days in a quarter: 65, except the closing quarter which runs 53.
pub fn days_for_quarter(quarter: Quarter) -> u32 {
    if quarter == CLOSING_QUARTER {
        CLOSING_QUARTER_DAYS
    } else {
        DAYS_PER_QUARTER
    }
}

/// Initial sourcing cost per gram: spot per gram plus a fixed spread.
pub fn initial_sourcing_cost(spot_price_per_oz: Price) -> Price {
    spot_price_per_oz / GRAMS_PER_TROY_OUNCE + SOURCING_SPREAD_PER_GRAM
}

/// Market price per gram recovered from a sourcing cost: spot per gram plus premium.
pub fn market_price_from_sourcing_cost(sourcing_cost: Price) -> Price {
    (sourcing_cost - SOURCING_SPREAD_PER_GRAM) + MARKET_PREMIUM
}

/// Escalate a per-gram cost or price by one quarter.
pub fn escalate(value: Price) -> Price {
    value * (1.0 + SOURCING_COST_INCREASE)
}

/// Quarter-1 markup charged on the grams the initial investment subscribes to.
///
/// Units are priced at spot per gram plus premium, grossed up for brokerage,
/// and counted in 1/100th grams.
pub fn initial_markup(
    spot_price_per_oz: Price,
    initial_investment: Cash,
    transaction_brokerage: f64,
) -> Cash {
    let net_of_brokerage = 1.0 - transaction_brokerage;
    let price_per_unit = (spot_price_per_oz / GRAMS_PER_TROY_OUNCE + MARKET_PREMIUM) / net_of_brokerage;
    let number_of_units = initial_investment / price_per_unit * UNITS_PER_GRAM;
    let number_of_grams = number_of_units / UNITS_PER_GRAM;

    number_of_grams * MARKUP_PER_GRAM / net_of_brokerage
}

/// Compute one quarter's record from the prior quarter's record.
///
/// `prior` must be `None` for quarter 1 and the record for `quarter - 1`
/// otherwise. Inputs are not range-checked: a zero sourcing cost yields
/// infinite or NaN fields rather than an error.
pub fn transition(
    quarter: Quarter,
    prior: Option<&QuarterlyRecord>,
    spot_price_per_oz: Price,
    initial_investment: Cash,
    params: &FinancialModelParams,
) -> Result<QuarterlyRecord> {
    let days = days_for_quarter(quarter);

    let (investment_balance_beginning, markup, sourcing_cost_beginning, prior_market_price) =
        match (quarter, prior) {
            (1, None) => (
                initial_investment,
                initial_markup(
                    spot_price_per_oz,
                    initial_investment,
                    params.transaction_brokerage,
                ),
                initial_sourcing_cost(spot_price_per_oz),
                None,
            ),
            (q, Some(prev)) if q > 1 && prev.quarter + 1 == q => (
                prev.qtr_end_total_value,
                0.0,
                prev.sourcing_cost_end,
                Some(prev.market_price_end),
            ),
            (q, prev) => {
                return Err(GoldSwimError::InvalidSequence {
                    quarter: q,
                    prior_quarter: prev.map(|p| p.quarter),
                })
            }
        };

    let investment_balance_net_initial_markup = if quarter == 1 {
        investment_balance_beginning - markup
    } else {
        0.0
    };
    let balance = if quarter == 1 {
        investment_balance_net_initial_markup
    } else {
        investment_balance_beginning
    };
    let investment_balance_net_markup = investment_balance_beginning - markup;

    let transaction_brokerage = balance * params.transaction_brokerage;
    let investment_for_sourcing = balance - transaction_brokerage;
    let revenue_grams = investment_for_sourcing / sourcing_cost_beginning;

    let margin = revenue_grams * f64::from(days) * params.margin_per_gram;
    let operating_exp = margin * params.operating_exp_percent;
    let quarterly_gains = margin - operating_exp;

    let sourcing_cost_end = escalate(sourcing_cost_beginning);
    let new_grams_purchasable = quarterly_gains / sourcing_cost_end;
    let total_grams_end = revenue_grams + new_grams_purchasable;

    let market_price_end = match prior_market_price {
        Some(prev) => escalate(prev),
        None => market_price_from_sourcing_cost(sourcing_cost_beginning),
    };

    let gross_value_end = total_grams_end * market_price_end;
    let storage_cost = gross_value_end * params.storage_cost_percent;
    let insurance_cost = gross_value_end * params.insurance_cost_percent;
    let total_costs = storage_cost + insurance_cost;

    let realizable_gain_end = quarterly_gains - total_costs;
    let tax_amount = realizable_gain_end * params.effective_tax_rate;
    let investible_gain_net_tax = realizable_gain_end - tax_amount;

    let qtr_end_total_grams = revenue_grams + investible_gain_net_tax / sourcing_cost_end;
    let qtr_end_total_value = market_price_end.min(sourcing_cost_end) * qtr_end_total_grams;
    let cumulative_roi = qtr_end_total_value - initial_investment;

    Ok(QuarterlyRecord {
        quarter,
        days,
        investment_balance_beginning,
        markup,
        investment_balance_net_initial_markup,
        investment_balance_net_markup,
        transaction_brokerage,
        investment_for_sourcing,
        sourcing_cost_beginning,
        revenue_grams,
        margin,
        operating_exp,
        quarterly_gains,
        sourcing_cost_end,
        new_grams_purchasable,
        total_grams_end,
        market_price_end,
        gross_value_end,
        storage_cost,
        insurance_cost,
        total_costs,
        realizable_gain_end,
        tax_amount,
        investible_gain_net_tax,
        qtr_end_total_grams,
        qtr_end_total_value,
        cumulative_roi,
    })
}
