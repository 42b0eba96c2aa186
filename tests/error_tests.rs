//! Error creation and message formatting

use gold_swim::error::GoldSwimError;
use gold_swim::prelude::*;

#[test]
fn test_invalid_sequence_message() {
    let err = GoldSwimError::InvalidSequence {
        quarter: 4,
        prior_quarter: Some(2),
    };

    let msg = err.to_string();
    assert!(msg.contains("Invalid quarter sequence"));
    assert!(msg.contains("quarter 4"));
    assert!(msg.contains("Some(2)"));
}

#[test]
fn test_invalid_sequence_from_transition() {
    let err = transition(5, None, 2650.0, 10_000.0, &FinancialModel::Moderate.params())
        .unwrap_err();

    let msg = err.to_string();
    assert!(msg.contains("quarter 5"));
    assert!(msg.contains("None"));
}

#[test]
fn test_unknown_model_message() {
    let err = "bullish".parse::<FinancialModel>().unwrap_err();
    assert_eq!(err.to_string(), "Unknown financial model: bullish");
}

#[test]
fn test_invalid_parameter_message() {
    let err = GoldSwimError::InvalidParameter {
        name: "storage_cost_percent".to_string(),
        value: -0.5,
    };
    assert_eq!(err.to_string(), "Invalid parameter storage_cost_percent: -0.5");
}

#[test]
fn test_io_error_conversion() {
    let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
    let err: GoldSwimError = io.into();

    assert!(matches!(err, GoldSwimError::IoError(_)));
    assert!(err.to_string().contains("missing"));
}

#[test]
fn test_non_finite_results_do_not_error() {
    let records = run(-62.2069536, 10_000.0, 3, &FinancialModel::Moderate.params()).unwrap();

    // Spot of -2 per gram cancels the +2 spread: a zero sourcing cost
    assert_eq!(records[0].sourcing_cost_beginning, 0.0);
    assert!(!records[0].revenue_grams.is_finite());
    assert_eq!(records.len(), 3);
}
