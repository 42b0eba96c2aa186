//! gold-swim CLI - quarterly projection and futures position analysis
//!
//! ## Example Usage
//!
//! ```bash
//! # Project 25 quarters under the moderate preset
//! gold-swim project --spot 2650 --investment 10000 --model moderate
//!
//! # Compare all presets side by side
//! gold-swim compare --spot 2650 --investment 10000
//!
//! # Analyze a SiriZ31 position and its exit scenarios
//! gold-swim position --entry 2650 --contracts 5 --investment 250000 --target 3047.5
//! gold-swim scenarios --entry 2650 --contracts 5 --investment 250000
//! ```

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use gold_swim::config::ProjectionConfig;
use gold_swim::currency::{format_currency, format_grams, usd_to_local, Currency};
use gold_swim::export;
use gold_swim::projection::{compare_models, run, ProjectionSummary, QuarterlyRecord};
use gold_swim::siri_z31::{analyze_position, generate_exit_scenarios, MarginRisk, SiriZ31Params};
use std::path::PathBuf;
use std::process;

/// gold-swim: quarterly gold accumulation projections
#[derive(Parser)]
#[command(name = "gold-swim")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Gold accumulation projection and futures position analyzer", long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file path (TOML)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a quarterly projection
    Project {
        /// Spot price, USD per troy ounce
        #[arg(short = 's', long)]
        spot: Option<f64>,

        /// Initial investment
        #[arg(short = 'i', long)]
        investment: Option<f64>,

        /// Number of quarters
        #[arg(short = 'q', long)]
        quarters: Option<u32>,

        /// Preset: conservative, moderate or optimistic
        #[arg(short = 'm', long)]
        model: Option<String>,

        /// Show values in EUR using this USD-per-EUR rate
        #[arg(long)]
        eur_rate: Option<f64>,

        /// Output file for the quarter table (CSV/JSON)
        #[arg(short = 'o', long)]
        output: Option<PathBuf>,
    },

    /// Compare all presets over the same inputs
    Compare {
        #[arg(short = 's', long)]
        spot: Option<f64>,

        #[arg(short = 'i', long)]
        investment: Option<f64>,

        #[arg(short = 'q', long)]
        quarters: Option<u32>,
    },

    /// Analyze a SiriZ31 futures position
    Position {
        /// Entry price, USD per troy ounce
        #[arg(short = 'e', long)]
        entry: Option<f64>,

        #[arg(short = 'n', long)]
        contracts: Option<u32>,

        #[arg(short = 'i', long)]
        investment: Option<f64>,

        /// Target exit price, USD per troy ounce
        #[arg(short = 't', long)]
        target: Option<f64>,
    },

    /// Show profit/loss across the fixed exit scenarios
    Scenarios {
        #[arg(short = 'e', long)]
        entry: Option<f64>,

        #[arg(short = 'n', long)]
        contracts: Option<u32>,

        #[arg(short = 'i', long)]
        investment: Option<f64>,
    },
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    let config = match cli.config.as_deref() {
        Some(path) => match ProjectionConfig::load(path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("{} {}", "Error:".red().bold(), e);
                process::exit(1);
            }
        },
        None => ProjectionConfig::default(),
    };

    if cli.verbose {
        println!(
            "{} v{}",
            "gold-swim".cyan().bold(),
            env!("CARGO_PKG_VERSION")
        );
    }

    let result = match cli.command {
        Commands::Project {
            spot,
            investment,
            quarters,
            model,
            eur_rate,
            output,
        } => {
            let config = ProjectionConfig {
                spot_price_per_oz: spot.or(config.spot_price_per_oz),
                exchange_rate: eur_rate.or(config.exchange_rate),
                initial_investment: investment.unwrap_or(config.initial_investment),
                number_of_quarters: quarters.unwrap_or(config.number_of_quarters),
                custom: if model.is_some() { None } else { config.custom },
                model: model.unwrap_or(config.model),
            };
            let show_eur = eur_rate.is_some();
            run_projection(&config, show_eur, output, cli.verbose)
        }
        Commands::Compare {
            spot,
            investment,
            quarters,
        } => run_comparison(
            spot.unwrap_or_else(|| config.spot_price()),
            investment.unwrap_or(config.initial_investment),
            quarters.unwrap_or(config.number_of_quarters),
        ),
        Commands::Position {
            entry,
            contracts,
            investment,
            target,
        } => {
            let defaults = SiriZ31Params::default();
            let entry = entry.unwrap_or(defaults.entry_price);
            show_position(SiriZ31Params {
                entry_price: entry,
                number_of_contracts: contracts.unwrap_or(defaults.number_of_contracts),
                investment_amount: investment.unwrap_or(defaults.investment_amount),
                target_exit_price: target.unwrap_or(entry * 1.15),
            });
            Ok(())
        }
        Commands::Scenarios {
            entry,
            contracts,
            investment,
        } => {
            let defaults = SiriZ31Params::default();
            show_scenarios(
                entry.unwrap_or(defaults.entry_price),
                contracts.unwrap_or(defaults.number_of_contracts),
                investment.unwrap_or(defaults.investment_amount),
            );
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("{} {:#}", "Error:".red().bold(), e);
        process::exit(1);
    }
}

fn run_projection(
    config: &ProjectionConfig,
    show_eur: bool,
    output: Option<PathBuf>,
    verbose: bool,
) -> Result<()> {
    let params = config.resolved_params()?;
    let spot = config.spot_price();
    let rate = config.usd_per_local();

    if verbose {
        println!("  {} {:.2}/oz", "Spot:".bold(), spot);
        println!("  {} {:.2}", "Investment:".bold(), config.initial_investment);
        println!("  {} {}", "Quarters:".bold(), config.number_of_quarters);
        println!("  {} {:?}", "Params:".bold(), params);
        println!();
    }

    let records = run(spot, config.initial_investment, config.number_of_quarters, &params)?;

    let (currency, usd_per_unit) = if show_eur {
        (Currency::EUR, rate)
    } else {
        (Currency::USD, 1.0)
    };

    println!("{}", "Quarterly Projection".green().bold());
    println!("{}", "====================".green());
    println!(
        "{:>3} {:>4} {:>18} {:>14} {:>18} {:>18}",
        "Q", "Days", "Begin Balance", "Grams", "End Value", "Cumulative ROI"
    );
    for record in &records {
        print_record(record, currency, usd_per_unit);
    }
    println!();

    let summary = ProjectionSummary::from_records(&records, config.initial_investment);
    print!("{}", summary);

    if let Some(path) = output {
        export::write_file(&records, &path)
            .with_context(|| format!("writing {}", path.display()))?;
        println!();
        println!("{} Results saved to {}", "✓".green().bold(), path.display());
    }

    Ok(())
}

fn print_record(record: &QuarterlyRecord, currency: Currency, usd_per_unit: f64) {
    let convert = |v: f64| usd_to_local(v, usd_per_unit);
    let roi = format_currency(convert(record.cumulative_roi), currency, 2);
    let roi = if record.cumulative_roi >= 0.0 {
        roi.green()
    } else {
        roi.red()
    };
    println!(
        "{:>3} {:>4} {:>18} {:>14} {:>18} {:>18}",
        record.quarter,
        record.days,
        format_currency(convert(record.investment_balance_beginning), currency, 2),
        format_grams(record.qtr_end_total_grams),
        format_currency(convert(record.qtr_end_total_value), currency, 2),
        roi
    );
}

fn run_comparison(spot: f64, investment: f64, quarters: u32) -> Result<()> {
    let results = compare_models(spot, investment, quarters)?;

    println!("{}", "Model Comparison".green().bold());
    println!("{}", "================".green());
    for result in &results {
        let summary = ProjectionSummary::from_records(&result.records, investment);
        println!(
            "  {:<13} {:>20} {:>12}  {}",
            result.model.name().bold(),
            format_currency(summary.final_value, Currency::USD, 2),
            format!("{:+.2}%", summary.roi_percent).cyan(),
            result.model.description().dimmed()
        );
    }
    Ok(())
}

fn show_position(params: SiriZ31Params) {
    let analysis = analyze_position(&params);

    println!("{}", "SiriZ31 Position".green().bold());
    println!("{}", "================".green());
    println!("  Contracts:          {} ({} oz)", params.number_of_contracts, analysis.total_ounces);
    println!(
        "  Position Value:     {}",
        format_currency(analysis.position_value, Currency::USD, 0)
    );
    println!(
        "  Initial Margin:     {} ({:.1}%)",
        format_currency(analysis.initial_margin_required, Currency::USD, 0),
        analysis.initial_margin_percent
    );
    println!(
        "  Maintenance Margin: {} ({:.1}%)",
        format_currency(analysis.maintenance_margin_required, Currency::USD, 0),
        analysis.maintenance_margin_percent
    );

    let utilization = format!("{:.1}% ({})", analysis.margin_utilization, analysis.margin_risk);
    let utilization = match analysis.margin_risk {
        MarginRisk::High => utilization.red().bold(),
        MarginRisk::Moderate => utilization.yellow(),
        MarginRisk::Conservative => utilization.green(),
    };
    println!("  Margin Utilization: {}", utilization);
    println!(
        "  Exit at {}:   {} ({:+.2}% ROI)",
        format_currency(analysis.exit_price, Currency::USD, 2),
        format_currency(analysis.profit_loss, Currency::USD, 0),
        analysis.return_on_investment
    );

    if !analysis.is_within_limits {
        println!();
        println!(
            "{} {} contracts exceeds the position limit of {}",
            "Warning:".yellow().bold(),
            params.number_of_contracts,
            analysis.max_contracts
        );
    }
}

fn show_scenarios(entry: f64, contracts: u32, investment: f64) {
    println!("{}", "Exit Price Scenarios".green().bold());
    println!("{}", "====================".green());
    for scenario in generate_exit_scenarios(entry, contracts, investment) {
        let pnl = format_currency(scenario.profit_loss, Currency::USD, 0);
        let pnl = if scenario.profit_loss > 0.0 {
            pnl.green()
        } else if scenario.profit_loss < 0.0 {
            pnl.red()
        } else {
            pnl.normal()
        };
        println!(
            "  {:<20} {:>12} {:>9} {:>16} {:>9}",
            scenario.scenario,
            format_currency(scenario.exit_price, Currency::USD, 2),
            format!("{:+.2}%", scenario.price_change_percent),
            pnl,
            format!("{:+.2}%", scenario.return_on_investment)
        );
    }
}
