//! # Option-Pricer-Lib: Black-Scholes Pricing, Greeks and Price Curves
//!
//! `option-pricer-lib` computes closed-form European option prices and their
//! sensitivities under the Black-Scholes model, and samples price curves over a
//! range of underlying prices for visualization.
//!
//! ## Core Features
//!
//! - **Validated inputs**: [`OptionParameters`] cannot be built from
//!   non-positive prices, expiry or volatility, or from non-finite values
//! - **Prices and Greeks**: call/put prices, delta, gamma, theta (per day),
//!   vega and rho (per 1%)
//! - **Price curves**: call and put values over `S ± range`
//! - **Front-end support**: TOML configuration, input floors, put-call parity
//!   check, CSV export and SVG charts
//!
//! ## Quick Start
//!
//! ```rust
//! use option_pricer_lib::{calculate_prices, generate_price_curve, OptionParameters};
//!
//! let params = OptionParameters::new(100.0, 105.0, 1.0, 0.05, 0.2)?;
//!
//! let prices = calculate_prices(&params)?;
//! println!("call {:.2} put {:.2}", prices.call_price, prices.put_price);
//!
//! let curve = generate_price_curve(&params, 50.0, 200)?;
//! assert_eq!(curve.len(), 200);
//! # Ok::<(), option_pricer_lib::PricerError>(())
//! ```
//!
//! ## Error Handling
//!
//! The pricing core fails with a single error kind,
//! [`PricerError::InvalidParameter`], naming the violated constraint. The
//! configuration and report layers return `anyhow::Result`.
//!
//! ## Configuration Presets
//!
//! - `interactive()`: 200 curve points over ±50 (default)
//! - `high_resolution()`: 1000 curve points, Greeks shown
//! - `coarse()`: 50 curve points, no payoff chart

// ================================================================================================
// MODULES
// ================================================================================================

pub mod error;
pub mod models;
pub mod report;
pub mod session;

// ================================================================================================
// PUBLIC RE-EXPORTS
// ================================================================================================

pub use error::{PricerError, Result};

// Pricing core
pub use models::bs::{
    calculate_prices, call_price, generate_payoff_curve, generate_price_curve, put_price,
    CurvePoint, OptionParameters, OptionPrices, PayoffPoint,
};
#[cfg(feature = "parallel")]
pub use models::bs::generate_price_curve_par;
pub use models::normal::{norm_cdf, norm_pdf};
pub use models::types::PlotType;

// Session layer
pub use session::{
    config::{CurveConfig, PlotConfig, PricerConfig},
    pipeline::{run_pricing, PricingSession},
    types::{ParityCheck, PricerInputs, PricingReport},
};

// ================================================================================================
// DEFAULT CONFIGURATIONS
// ================================================================================================

/// Pre-configured session settings.
///
/// # Available Configurations
///
/// - [`interactive()`]: Defaults used by an interactive front end
/// - [`high_resolution()`]: Densest curve sampling
/// - [`coarse()`]: Sparse sampling for quick previews
pub mod default_configs {
    use crate::session::config::PricerConfig;

    /// Default configuration for interactive use.
    ///
    /// **Characteristics:**
    /// - Inputs: S=100, K=105, T=1y, r=5%, σ=20%
    /// - Curve: ±50 around S, 200 points
    /// - Auto-calculation on, payoff chart on
    ///
    /// # Example
    ///
    /// ```rust
    /// use option_pricer_lib::default_configs;
    ///
    /// let config = default_configs::interactive();
    /// assert_eq!(config.curve.num_points, 200);
    /// ```
    pub fn interactive() -> PricerConfig {
        PricerConfig::interactive()
    }

    /// Densest curve sampling allowed (1000 points), with the Greeks table.
    ///
    /// # Example
    ///
    /// ```rust
    /// use option_pricer_lib::default_configs;
    ///
    /// let config = default_configs::high_resolution();
    /// assert!(config.show_greeks);
    /// ```
    pub fn high_resolution() -> PricerConfig {
        PricerConfig::high_resolution()
    }

    /// Sparsest curve sampling allowed (50 points), price chart only.
    pub fn coarse() -> PricerConfig {
        PricerConfig::coarse()
    }
}

/// Price a single option from raw inputs.
///
/// Convenience wrapper over [`OptionParameters::new`] and [`calculate_prices`].
///
/// # Example
///
/// ```rust
/// use option_pricer_lib::price_option;
///
/// let prices = price_option(100.0, 105.0, 1.0, 0.05, 0.2)?;
/// assert!((prices.put_price - 7.90).abs() < 0.01);
/// # Ok::<(), option_pricer_lib::PricerError>(())
/// ```
pub fn price_option(
    underlying_price: f64,
    strike_price: f64,
    time_to_expiration: f64,
    risk_free_rate: f64,
    volatility: f64,
) -> Result<OptionPrices> {
    let params = OptionParameters::new(
        underlying_price,
        strike_price,
        time_to_expiration,
        risk_free_rate,
        volatility,
    )?;
    calculate_prices(&params)
}
