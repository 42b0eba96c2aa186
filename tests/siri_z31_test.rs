//! Integration tests for the SiriZ31 position analyzer

use approx::assert_relative_eq;
use gold_swim::prelude::*;

#[test]
fn test_exit_scenario_prices_are_fixed() {
    let scenarios = generate_exit_scenarios(100.0, 10, 50_000.0);
    let prices: Vec<f64> = scenarios.iter().map(|s| s.exit_price).collect();

    assert_eq!(prices, vec![90.0, 95.0, 100.0, 105.0, 110.0, 115.0, 125.0]);
}

#[test]
fn test_break_even_scenario() {
    let scenarios = generate_exit_scenarios(100.0, 10, 50_000.0);

    assert_eq!(scenarios[2].profit_loss, 0.0);
    assert_eq!(scenarios[2].return_on_investment, 0.0);
    assert_eq!(scenarios[2].price_change_percent, 0.0);
}

#[test]
fn test_break_even_at_awkward_price() {
    let scenarios = generate_exit_scenarios(2651.37, 3, 80_000.0);
    assert_eq!(scenarios[2].exit_price, 2651.37);
    assert_eq!(scenarios[2].profit_loss, 0.0);
}

#[test]
fn test_worst_and_best_cases() {
    let scenarios = generate_exit_scenarios(100.0, 10, 50_000.0);
    let worst = scenarios.first().unwrap();
    let best = scenarios.last().unwrap();

    // 10 contracts x 100 oz = 1000 oz
    assert_eq!(worst.profit_loss, -10_000.0);
    assert_relative_eq!(worst.return_on_investment, -20.0, epsilon = 1e-9);
    assert_eq!(best.profit_loss, 25_000.0);
    assert_relative_eq!(best.return_on_investment, 50.0, epsilon = 1e-9);
    assert_relative_eq!(best.price_change_percent, 25.0, epsilon = 1e-9);
}

#[test]
fn test_scenarios_are_monotonic() {
    let scenarios = generate_exit_scenarios(2650.0, 4, 100_000.0);
    assert!(scenarios
        .windows(2)
        .all(|w| w[0].profit_loss < w[1].profit_loss));
}

#[test]
fn test_position_limit_flag() {
    let base = SiriZ31Params {
        entry_price: 2650.0,
        number_of_contracts: 10,
        investment_amount: 500_000.0,
        target_exit_price: 2800.0,
    };
    assert!(analyze_position(&base).is_within_limits);

    let over = SiriZ31Params {
        number_of_contracts: 11,
        ..base
    };
    assert!(!analyze_position(&over).is_within_limits);
}

#[test]
fn test_zero_contracts_is_unguarded() {
    let analysis = analyze_position(&SiriZ31Params {
        entry_price: 2650.0,
        number_of_contracts: 0,
        investment_amount: 10_000.0,
        target_exit_price: 2700.0,
    });

    assert_eq!(analysis.position_value, 0.0);
    assert_eq!(analysis.profit_loss, 0.0);
    assert!(analysis.is_within_limits);

    let scenarios = generate_exit_scenarios(2650.0, 0, 10_000.0);
    assert_eq!(scenarios.len(), 7);
    assert!(scenarios.iter().all(|s| s.profit_loss == 0.0));
}

#[test]
fn test_analysis_matches_scenario_formula() {
    let params = SiriZ31Params {
        entry_price: 2000.0,
        number_of_contracts: 3,
        investment_amount: 60_000.0,
        target_exit_price: 2200.0,
    };
    let analysis = analyze_position(&params);
    let target = &generate_exit_scenarios(2000.0, 3, 60_000.0)[4];

    assert_eq!(target.exit_price, 2200.0);
    assert_eq!(analysis.profit_loss, target.profit_loss);
    assert_eq!(analysis.return_on_investment, target.return_on_investment);
}
