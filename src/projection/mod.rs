//! Quarterly gold-accumulation projection

pub mod quarter;
pub mod runner;
pub mod summary;

pub use quarter::{
    days_for_quarter, initial_markup, initial_sourcing_cost, market_price_from_sourcing_cost,
    transition, QuarterlyRecord,
};
pub use runner::{compare_models, run, ModelProjection, ProjectionRunner};
pub use summary::ProjectionSummary;
