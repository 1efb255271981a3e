// demos/default_configs.rs
//
// Prints the session presets and prices the default inputs under each one.
//
// Usage:
//     cargo run --example default_configs

use option_pricer_lib::{default_configs, run_pricing, PricerConfig};

fn describe(name: &str, config: &PricerConfig) {
    println!("{}:", name);
    println!("   Price range: ±{:.0}", config.curve.price_range);
    println!("   Plot points: {}", config.curve.num_points);
    println!("   Plot type: {:?}", config.plot.plot_type);
    println!("   Payoff chart: {}", config.plot.show_payoff);
    println!("   Greeks shown: {}", config.show_greeks);

    match run_pricing(&config.inputs, &config.curve) {
        Ok(report) => println!(
            "   Call {:.4} / Put {:.4} over {} samples\n",
            report.prices.call_price,
            report.prices.put_price,
            report.curve.len()
        ),
        Err(e) => println!("   Pricing failed: {}\n", e),
    }
}

fn main() {
    println!("Option Pricer Default Configuration Examples\n");

    describe("1. Interactive (default)", &default_configs::interactive());
    describe("2. High resolution", &default_configs::high_resolution());
    describe("3. Coarse preview", &default_configs::coarse());

    println!("TOML form of the interactive preset:\n");
    match default_configs::interactive().to_toml_string() {
        Ok(text) => println!("{}", text),
        Err(e) => eprintln!("Could not serialize config: {:#}", e),
    }
}
