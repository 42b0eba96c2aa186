//! Projection runner: threads quarter transitions into a full run

use super::quarter::{transition, QuarterlyRecord};
use crate::constants::DEFAULT_NUMBER_OF_QUARTERS;
use crate::error::Result;
use crate::model::{FinancialModel, FinancialModelParams, FINANCIAL_MODELS};
use crate::types::{Cash, Price};
use rayon::prelude::*;

/// Run a projection of `number_of_quarters` quarters.
///
/// Each quarter's record is fed to the next transition. Any transition error
/// aborts the run; no partial sequence is returned.
pub fn run(
    spot_price_per_oz: Price,
    initial_investment: Cash,
    number_of_quarters: u32,
    params: &FinancialModelParams,
) -> Result<Vec<QuarterlyRecord>> {
    log::info!(
        "Starting projection: spot {:.2}/oz, investment {:.2}, {} quarters",
        spot_price_per_oz,
        initial_investment,
        number_of_quarters
    );

    let mut records: Vec<QuarterlyRecord> = Vec::with_capacity(number_of_quarters as usize);

    for quarter in 1..=number_of_quarters {
        let record = transition(
            quarter,
            records.last(),
            spot_price_per_oz,
            initial_investment,
            params,
        )?;
        log::debug!(
            "Q{} ({} days): value {:.2}, cumulative ROI {:.2}",
            record.quarter,
            record.days,
            record.qtr_end_total_value,
            record.cumulative_roi
        );
        records.push(record);
    }

    if let Some(last) = records.last() {
        log::info!(
            "Projection complete: final value {:.2}, cumulative ROI {:.2}",
            last.qtr_end_total_value,
            last.cumulative_roi
        );
    }

    Ok(records)
}

/// Runner bound to a parameter set and horizon
#[derive(Debug, Clone)]
pub struct ProjectionRunner {
    params: FinancialModelParams,
    number_of_quarters: u32,
}

impl ProjectionRunner {
    /// Create a runner over the default 25-quarter horizon
    pub fn new(params: FinancialModelParams) -> Self {
        Self {
            params,
            number_of_quarters: DEFAULT_NUMBER_OF_QUARTERS,
        }
    }

    /// Create a runner for a named preset
    pub fn for_model(model: FinancialModel) -> Self {
        Self::new(model.params())
    }

    pub fn with_quarters(mut self, number_of_quarters: u32) -> Self {
        self.number_of_quarters = number_of_quarters;
        self
    }

    pub fn params(&self) -> &FinancialModelParams {
        &self.params
    }

    pub fn number_of_quarters(&self) -> u32 {
        self.number_of_quarters
    }

    pub fn run(&self, spot_price_per_oz: Price, initial_investment: Cash) -> Result<Vec<QuarterlyRecord>> {
        run(
            spot_price_per_oz,
            initial_investment,
            self.number_of_quarters,
            &self.params,
        )
    }
}

/// Projection result for one preset
#[derive(Debug, Clone)]
pub struct ModelProjection {
    pub model: FinancialModel,
    pub records: Vec<QuarterlyRecord>,
}

/// Run every preset over the same inputs.
///
/// Runs are independent and execute in parallel; results come back in
/// preset order.
pub fn compare_models(
    spot_price_per_oz: Price,
    initial_investment: Cash,
    number_of_quarters: u32,
) -> Result<Vec<ModelProjection>> {
    FINANCIAL_MODELS
        .par_iter()
        .map(|model| -> Result<ModelProjection> {
            let records = run(
                spot_price_per_oz,
                initial_investment,
                number_of_quarters,
                &model.params(),
            )?;
            Ok(ModelProjection {
                model: *model,
                records,
            })
        })
        .collect()
}
