//! # Gold SWIM
//!
//! Deterministic projection engine for quarterly gold accumulation, plus the
//! SiriZ31 futures position analyzer.
//!
//! A projection starts from an initial investment and a resolved spot price,
//! then compounds margin, costs and tax over a fixed cycle of 65-day quarters
//! (the closing 25th quarter runs 53 days). Fetching live prices is the
//! caller's job.
//!
//! ## Example
//!
//! ```rust
//! use gold_swim::prelude::*;
//!
//! let records = run(2650.0, 10_000.0, 25, &FinancialModel::Moderate.params()).unwrap();
//! assert_eq!(records.len(), 25);
//! assert!(records[24].cumulative_roi > 0.0);
//!
//! let scenarios = generate_exit_scenarios(100.0, 10, 50_000.0);
//! assert_eq!(scenarios[2].profit_loss, 0.0);
//! ```

pub mod config;
pub mod constants;
pub mod currency;
pub mod error;
pub mod export;
pub mod model;
pub mod projection;
pub mod siri_z31;
pub mod types;

pub mod prelude {
    //! Commonly used types and functions
    pub use crate::currency::{format_currency, format_grams, Currency};
    pub use crate::error::{GoldSwimError, Result};
    pub use crate::model::{financial_model, FinancialModel, FinancialModelParams, FINANCIAL_MODELS};
    pub use crate::projection::{
        compare_models, run, transition, ProjectionRunner, ProjectionSummary, QuarterlyRecord,
    };
    pub use crate::siri_z31::{
        analyze_position, generate_exit_scenarios, ExitScenario, SiriZ31Analysis, SiriZ31Params,
    };
}
