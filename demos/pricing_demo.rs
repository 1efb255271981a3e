// demos/pricing_demo.rs

//! Demonstration of Black-Scholes pricing with Greeks
//!
//! This example shows how to:
//! 1. Build validated option parameters
//! 2. Price the call and put with the full set of Greeks
//! 3. Check put-call parity
//! 4. Sweep the underlying price and print a coarse price curve
//! 5. Handle invalid input without crashing

use anyhow::Result;
use option_pricer_lib::report::{format_currency, greeks_table};
use option_pricer_lib::{
    calculate_prices, generate_price_curve, OptionParameters, ParityCheck, PricerError,
};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    println!("Black-Scholes Pricing Demo");
    println!("==========================");

    let params = OptionParameters::new(100.0, 105.0, 1.0, 0.05, 0.20)?;
    println!(
        "S = {}, K = {}, T = {}y, r = {:.1}%, sigma = {:.1}%",
        params.underlying_price,
        params.strike_price,
        params.time_to_expiration,
        params.risk_free_rate * 100.0,
        params.volatility * 100.0
    );

    println!("\nStep 1: Pricing...");
    let prices = calculate_prices(&params)?;
    println!("  Call price: {}", format_currency(prices.call_price));
    println!("  Put price:  {}", format_currency(prices.put_price));

    println!("\nStep 2: Greeks");
    print!("{}", greeks_table(&prices));

    println!("\nStep 3: Put-call parity");
    let parity = ParityCheck::new(&params, &prices);
    println!(
        "  C - P = {:.6}, S - K*exp(-rT) = {:.6}, valid: {}",
        parity.lhs, parity.rhs, parity.is_valid
    );

    println!("\nStep 4: Price curve (S ± 50, 11 points)");
    println!("{:<12} {:<12} {:<12}", "Underlying", "Call", "Put");
    println!("{}", "-".repeat(36));
    for point in generate_price_curve(&params, 50.0, 11)? {
        println!(
            "{:<12.2} {:<12.4} {:<12.4}",
            point.underlying_price, point.call_price, point.put_price
        );
    }

    println!("\nStep 5: Invalid input");
    match OptionParameters::new(100.0, 105.0, 1.0, 0.05, 0.0) {
        Ok(_) => println!("  unexpectedly accepted zero volatility"),
        Err(PricerError::InvalidParameter(msg)) => println!("  rejected: {}", msg),
    }

    Ok(())
}
