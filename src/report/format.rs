//! Text rendering of prices and Greeks.

use std::fmt::Write;

use crate::models::bs::OptionPrices;
use crate::session::types::PricingReport;

/// `12.3456` -> `"$12.35"`
pub fn format_currency(value: f64) -> String {
    format!("${:.2}", value)
}

/// `0.2` -> `"20.00%"`
pub fn format_percentage(value: f64) -> String {
    format!("{:.2}%", value * 100.0)
}

/// Greek / Call / Put table. Gamma and vega are shared by both legs.
pub fn greeks_table(prices: &OptionPrices) -> String {
    let rows = [
        ("Delta", format!("{:.4}", prices.delta_call), format!("{:.4}", prices.delta_put)),
        ("Gamma", format!("{:.6}", prices.gamma), format!("{:.6}", prices.gamma)),
        ("Theta", format!("{:.4}", prices.theta_call), format!("{:.4}", prices.theta_put)),
        ("Vega", format!("{:.4}", prices.vega), format!("{:.4}", prices.vega)),
        ("Rho", format!("{:.4}", prices.rho_call), format!("{:.4}", prices.rho_put)),
    ];

    let mut out = format!("{:<8} {:>12} {:>12}\n", "Greek", "Call", "Put");
    out.push_str(&"-".repeat(34));
    out.push('\n');
    for (name, call, put) in rows {
        let _ = writeln!(out, "{:<8} {:>12} {:>12}", name, call, put);
    }
    out
}

/// Prices, parity status and optionally the Greeks table.
pub fn summary(report: &PricingReport, show_greeks: bool) -> String {
    let p = &report.parameters;
    let mut out = String::new();
    let _ = writeln!(
        out,
        "S={} K={} T={} r={} sigma={}",
        format_currency(p.underlying_price),
        format_currency(p.strike_price),
        p.time_to_expiration,
        format_percentage(p.risk_free_rate),
        format_percentage(p.volatility),
    );
    let _ = writeln!(out, "Call Price: {}", format_currency(report.prices.call_price));
    let _ = writeln!(out, "Put Price:  {}", format_currency(report.prices.put_price));
    if report.parity.is_valid {
        let _ = writeln!(out, "Put-Call Parity Check: valid");
    } else {
        let _ = writeln!(
            out,
            "Put-Call Parity Check: difference {:.4}",
            report.parity.difference
        );
    }
    if show_greeks {
        out.push('\n');
        out.push_str(&greeks_table(&report.prices));
    }
    out
}
