// demos/plot_price_curve.rs
//
// Prices an option from a TOML config (or the defaults) and writes an SVG
// chart of call/put value and payoff at expiration, plus a CSV of the curve.
//
// Usage:
//     cargo run --example plot_price_curve -- [config.toml] [output_stem]
//
// See demos/pricer.toml for the config format. Output files are
// <output_stem>.svg and <output_stem>.csv (default stem: price_curve).

use std::env;

use anyhow::{Context, Result};
use option_pricer_lib::report::{plot_price_curve, summary, write_report_csv};
use option_pricer_lib::{PricerConfig, PricingSession};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args: Vec<String> = env::args().collect();
    let config = match args.get(1) {
        Some(path) => PricerConfig::from_file(path)?,
        None => PricerConfig::default(),
    };
    let stem = args.get(2).map(String::as_str).unwrap_or("price_curve");

    info!(inputs = ?config.inputs, curve = ?config.curve, "loaded configuration");

    let mut session = PricingSession::new(config);
    let report = session
        .recalculate()
        .context("could not price the configured inputs")?
        .clone();

    print!("{}", summary(&report, session.config().show_greeks));

    plot_price_curve(format!("{}.svg", stem), &report, &session.config().plot)?;
    write_report_csv(format!("{}.csv", stem), &report)?;

    println!("Chart saved to {}.svg, data saved to {}.csv", stem, stem);
    Ok(())
}
