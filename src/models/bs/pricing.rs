// src/models/bs/pricing.rs

//! Closed-form Black-Scholes prices and Greeks for European options.
//!
//! With S the underlying price, K the strike, T the time to expiry, r the rate
//! and σ the volatility:
//!
//! d1 = (ln(S/K) + (r + σ²/2)·T) / (σ·√T)
//! d2 = d1 − σ·√T
//! C  = S·N(d1) − K·e^(−rT)·N(d2)
//! P  = K·e^(−rT)·N(−d2) − S·N(−d1)
//!
//! Theta is reported per calendar day, vega and rho per one percentage point
//! move in volatility and rate respectively.

use crate::error::Result;
use crate::models::bs::params::OptionParameters;
use crate::models::normal::{norm_cdf, norm_pdf};
use serde::{Deserialize, Serialize};

/// Calendar days per year used to express theta as daily decay.
pub const DAYS_PER_YEAR: f64 = 365.25;
/// Vega and rho are quoted per 1% move.
pub const PERCENT_POINT: f64 = 100.0;

/// Prices and Greeks of the call and put sharing one set of inputs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OptionPrices {
    /// European call price
    pub call_price: f64,
    /// European put price
    pub put_price: f64,
    /// Call delta, N(d1)
    pub delta_call: f64,
    /// Put delta, N(d1) - 1
    pub delta_put: f64,
    /// Gamma (same for call and put)
    pub gamma: f64,
    /// Call theta, per calendar day
    pub theta_call: f64,
    /// Put theta, per calendar day
    pub theta_put: f64,
    /// Vega per 1% volatility change (same for call and put)
    pub vega: f64,
    /// Call rho per 1% rate change
    pub rho_call: f64,
    /// Put rho per 1% rate change
    pub rho_put: f64,
}

/// d1 term of the Black-Scholes formula.
#[allow(non_snake_case)]
pub fn d1(S: f64, K: f64, T: f64, r: f64, sigma: f64) -> f64 {
    ((S / K).ln() + (r + 0.5 * sigma * sigma) * T) / (sigma * T.sqrt())
}

/// d2 term of the Black-Scholes formula.
#[allow(non_snake_case)]
pub fn d2(d1: f64, sigma: f64, T: f64) -> f64 {
    d1 - sigma * T.sqrt()
}

/// Intermediate values shared by every entry point so that the single-leg
/// prices match the full computation bit for bit.
struct Terms {
    d1: f64,
    d2: f64,
    discount: f64,
}

impl Terms {
    fn new(params: &OptionParameters) -> Result<Self> {
        params.validate()?;

        let d1 = d1(
            params.underlying_price,
            params.strike_price,
            params.time_to_expiration,
            params.risk_free_rate,
            params.volatility,
        );
        let d2 = d2(d1, params.volatility, params.time_to_expiration);

        Ok(Self {
            d1,
            d2,
            discount: params.discount_factor(),
        })
    }

    fn call(&self, params: &OptionParameters) -> f64 {
        params.underlying_price * norm_cdf(self.d1)
            - params.strike_price * self.discount * norm_cdf(self.d2)
    }

    fn put(&self, params: &OptionParameters) -> f64 {
        params.strike_price * self.discount * norm_cdf(-self.d2)
            - params.underlying_price * norm_cdf(-self.d1)
    }
}

/// Prices both legs and computes the full set of Greeks.
///
/// # Errors
///
/// `InvalidParameter` if `params` does not satisfy the model constraints.
///
/// # Example
///
/// ```rust
/// use option_pricer_lib::{calculate_prices, OptionParameters};
///
/// let params = OptionParameters::new(100.0, 105.0, 1.0, 0.05, 0.2)?;
/// let prices = calculate_prices(&params)?;
/// assert!((prices.call_price - 8.02).abs() < 0.01);
/// # Ok::<(), option_pricer_lib::PricerError>(())
/// ```
#[allow(non_snake_case)]
pub fn calculate_prices(params: &OptionParameters) -> Result<OptionPrices> {
    let terms = Terms::new(params)?;

    let S = params.underlying_price;
    let K = params.strike_price;
    let T = params.time_to_expiration;
    let r = params.risk_free_rate;
    let sigma = params.volatility;

    let N_d1 = norm_cdf(terms.d1);
    let N_d2 = norm_cdf(terms.d2);
    let N_neg_d2 = norm_cdf(-terms.d2);
    let phi_d1 = norm_pdf(terms.d1);
    let sqrt_T = T.sqrt();
    let discount = terms.discount;

    let decay = -(S * phi_d1 * sigma) / (2.0 * sqrt_T);
    let theta_call = decay - r * K * discount * N_d2;
    let theta_put = decay + r * K * discount * N_neg_d2;
    let vega = S * phi_d1 * sqrt_T;
    let rho_call = K * T * discount * N_d2;
    let rho_put = -K * T * discount * N_neg_d2;

    Ok(OptionPrices {
        call_price: terms.call(params),
        put_price: terms.put(params),
        delta_call: N_d1,
        delta_put: N_d1 - 1.0,
        gamma: phi_d1 / (S * sigma * sqrt_T),
        theta_call: theta_call / DAYS_PER_YEAR,
        theta_put: theta_put / DAYS_PER_YEAR,
        vega: vega / PERCENT_POINT,
        rho_call: rho_call / PERCENT_POINT,
        rho_put: rho_put / PERCENT_POINT,
    })
}

/// Price of the European call only.
pub fn call_price(params: &OptionParameters) -> Result<f64> {
    let terms = Terms::new(params)?;
    Ok(terms.call(params))
}

/// Price of the European put only.
pub fn put_price(params: &OptionParameters) -> Result<f64> {
    let terms = Terms::new(params)?;
    Ok(terms.put(params))
}
