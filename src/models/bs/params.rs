// src/models/bs/params.rs

//! Validated inputs of the Black-Scholes model.

use crate::error::{PricerError, Result};
use serde::{Deserialize, Serialize};

/// The five Black-Scholes inputs for a single European option.
///
/// Construct through [`OptionParameters::new`], which enforces:
/// - `underlying_price > 0`
/// - `strike_price > 0`
/// - `time_to_expiration > 0` (years)
/// - `volatility > 0` (annualised, as a decimal)
/// - `risk_free_rate` finite (zero and negative rates are allowed)
/// - every field finite
///
/// Fields are public and the type is deserializable, so a value can exist that
/// never went through `new`. Pricing entry points re-validate for that reason.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OptionParameters {
    /// Current price of the underlying asset (S)
    pub underlying_price: f64,
    /// Strike price (K)
    pub strike_price: f64,
    /// Time to expiration in years (T)
    pub time_to_expiration: f64,
    /// Continuously compounded risk-free rate (r)
    pub risk_free_rate: f64,
    /// Volatility of the underlying (σ)
    pub volatility: f64,
}

fn validate_option_params(s: f64, k: f64, t: f64, r: f64, sigma: f64) -> Result<()> {
    if s <= 0.0 || !s.is_finite() {
        return Err(PricerError::invalid(format!(
            "underlying price must be positive and finite (got {})",
            s
        )));
    }
    if k <= 0.0 || !k.is_finite() {
        return Err(PricerError::invalid(format!(
            "strike price must be positive and finite (got {})",
            k
        )));
    }
    if t <= 0.0 || !t.is_finite() {
        return Err(PricerError::invalid(format!(
            "time to expiration must be positive and finite (got {})",
            t
        )));
    }
    if !r.is_finite() {
        return Err(PricerError::invalid(format!(
            "risk-free rate must be finite (got {})",
            r
        )));
    }
    if sigma <= 0.0 || !sigma.is_finite() {
        return Err(PricerError::invalid(format!(
            "volatility must be positive and finite (got {})",
            sigma
        )));
    }
    Ok(())
}

impl OptionParameters {
    /// Creates a validated parameter set.
    pub fn new(
        underlying_price: f64,
        strike_price: f64,
        time_to_expiration: f64,
        risk_free_rate: f64,
        volatility: f64,
    ) -> Result<Self> {
        validate_option_params(
            underlying_price,
            strike_price,
            time_to_expiration,
            risk_free_rate,
            volatility,
        )?;

        Ok(Self {
            underlying_price,
            strike_price,
            time_to_expiration,
            risk_free_rate,
            volatility,
        })
    }

    /// Non-failing validity query.
    pub fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }

    /// Re-checks the invariant, reporting the first violated constraint.
    pub fn validate(&self) -> Result<()> {
        validate_option_params(
            self.underlying_price,
            self.strike_price,
            self.time_to_expiration,
            self.risk_free_rate,
            self.volatility,
        )
    }

    /// Copy of these parameters with a different underlying price.
    pub fn with_underlying_price(&self, underlying_price: f64) -> Result<Self> {
        Self::new(
            underlying_price,
            self.strike_price,
            self.time_to_expiration,
            self.risk_free_rate,
            self.volatility,
        )
    }

    /// Discount factor `exp(-r * T)`.
    pub fn discount_factor(&self) -> f64 {
        (-self.risk_free_rate * self.time_to_expiration).exp()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_option_params_validation() {
        assert!(OptionParameters::new(100.0, 105.0, 1.0, 0.05, 0.2).is_ok());
        assert!(OptionParameters::new(100.0, 105.0, 1.0, 0.0, 0.2).is_ok());
        assert!(OptionParameters::new(100.0, 105.0, 1.0, -0.01, 0.2).is_ok());

        assert!(OptionParameters::new(0.0, 105.0, 1.0, 0.05, 0.2).is_err()); // S = 0
        assert!(OptionParameters::new(100.0, -5.0, 1.0, 0.05, 0.2).is_err()); // K < 0
        assert!(OptionParameters::new(100.0, 105.0, 0.0, 0.05, 0.2).is_err()); // T = 0
        assert!(OptionParameters::new(100.0, 105.0, 1.0, 0.05, 0.0).is_err()); // sigma = 0
        assert!(OptionParameters::new(100.0, 105.0, 1.0, f64::NAN, 0.2).is_err()); // r = NaN
        assert!(OptionParameters::new(f64::INFINITY, 105.0, 1.0, 0.05, 0.2).is_err());
        assert!(OptionParameters::new(100.0, 105.0, 1.0, 0.05, f64::NAN).is_err());
    }

    #[test]
    fn test_error_names_failed_constraint() {
        let err = OptionParameters::new(100.0, 105.0, 1.0, 0.05, 0.0).unwrap_err();
        assert!(err.to_string().contains("volatility must be positive"));

        let err = OptionParameters::new(100.0, 105.0, 1.0, f64::NAN, 0.2).unwrap_err();
        assert!(err.to_string().contains("risk-free rate"));
    }

    #[test]
    fn test_is_valid_on_unchecked_value() {
        let params = OptionParameters {
            underlying_price: 100.0,
            strike_price: 105.0,
            time_to_expiration: -1.0,
            risk_free_rate: 0.05,
            volatility: 0.2,
        };
        assert!(!params.is_valid());
        assert!(params.validate().is_err());
    }

    #[test]
    fn test_with_underlying_price() {
        let base = OptionParameters::new(100.0, 105.0, 1.0, 0.05, 0.2).unwrap();
        let moved = base.with_underlying_price(120.0).unwrap();
        assert_eq!(moved.underlying_price, 120.0);
        assert_eq!(moved.strike_price, base.strike_price);
        assert!(base.with_underlying_price(0.0).is_err());
    }
}
