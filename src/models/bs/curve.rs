// src/models/bs/curve.rs

//! Price curves: call and put values sampled over a range of underlying prices.

use crate::error::{PricerError, Result};
use crate::models::bs::params::OptionParameters;
use crate::models::bs::pricing::{call_price, put_price};
use serde::{Deserialize, Serialize};

/// Lowest underlying price a curve may start at.
pub const MIN_CURVE_PRICE: f64 = 0.01;

/// One sample of a price curve.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CurvePoint {
    pub underlying_price: f64,
    pub call_price: f64,
    pub put_price: f64,
}

impl From<CurvePoint> for (f64, f64, f64) {
    fn from(p: CurvePoint) -> Self {
        (p.underlying_price, p.call_price, p.put_price)
    }
}

impl From<(f64, f64, f64)> for CurvePoint {
    fn from((underlying_price, call_price, put_price): (f64, f64, f64)) -> Self {
        Self {
            underlying_price,
            call_price,
            put_price,
        }
    }
}

/// Intrinsic value of each leg at expiration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PayoffPoint {
    pub underlying_price: f64,
    pub call_payoff: f64,
    pub put_payoff: f64,
}

/// Sampling grid `start + i * step` for `i in 0..n`.
#[derive(Debug, Clone, Copy)]
struct CurveGrid {
    start: f64,
    step: f64,
    n: usize,
}

impl CurveGrid {
    fn new(base: &OptionParameters, price_range: f64, num_points: i32) -> Result<Self> {
        if num_points <= 0 {
            return Err(PricerError::invalid("number of points must be positive"));
        }
        if num_points < 2 {
            return Err(PricerError::invalid("number of points must be at least 2"));
        }
        if price_range <= 0.0 || !price_range.is_finite() {
            return Err(PricerError::invalid(format!(
                "price range must be positive and finite (got {})",
                price_range
            )));
        }
        base.validate()?;

        let start = MIN_CURVE_PRICE.max(base.underlying_price - price_range);
        let end = base.underlying_price + price_range;
        let n = num_points as usize;

        let grid = Self {
            start,
            step: (end - start) / (n - 1) as f64,
            n,
        };
        // Float spacing is coarsest at the top of the grid.
        if grid.price_at(1) <= grid.price_at(0) || grid.price_at(n - 1) <= grid.price_at(n - 2) {
            return Err(PricerError::invalid(
                "price range too narrow for the number of points",
            ));
        }
        Ok(grid)
    }

    fn price_at(&self, i: usize) -> f64 {
        self.start + i as f64 * self.step
    }
}

fn sample(base: &OptionParameters, underlying_price: f64) -> Result<CurvePoint> {
    let params = base.with_underlying_price(underlying_price)?;
    Ok(CurvePoint {
        underlying_price,
        call_price: call_price(&params)?,
        put_price: put_price(&params)?,
    })
}

/// Sweeps the underlying price over `[max(0.01, S - price_range), S + price_range]`
/// with `num_points` evenly spaced samples and prices both legs at each one.
///
/// Strike, expiry, rate and volatility are taken from `base`.
///
/// # Errors
///
/// `InvalidParameter` when `num_points < 2`, when `price_range` is not a
/// positive finite number, when the range is too narrow to give distinct
/// prices at `num_points` samples, or when `base` (or any sample) fails
/// validation.
/// No partial curve is ever returned.
///
/// # Example
///
/// ```rust
/// use option_pricer_lib::{generate_price_curve, OptionParameters};
///
/// let base = OptionParameters::new(100.0, 105.0, 1.0, 0.05, 0.2)?;
/// let curve = generate_price_curve(&base, 50.0, 5)?;
/// assert_eq!(curve.len(), 5);
/// assert_eq!(curve[0].underlying_price, 50.0);
/// # Ok::<(), option_pricer_lib::PricerError>(())
/// ```
pub fn generate_price_curve(
    base: &OptionParameters,
    price_range: f64,
    num_points: i32,
) -> Result<Vec<CurvePoint>> {
    let grid = CurveGrid::new(base, price_range, num_points)?;

    let mut curve = Vec::with_capacity(grid.n);
    for i in 0..grid.n {
        curve.push(sample(base, grid.price_at(i))?);
    }
    Ok(curve)
}

/// Same curve as [`generate_price_curve`], with samples evaluated on the rayon
/// thread pool. Output order is ascending in price.
#[cfg(feature = "parallel")]
pub fn generate_price_curve_par(
    base: &OptionParameters,
    price_range: f64,
    num_points: i32,
) -> Result<Vec<CurvePoint>> {
    use rayon::prelude::*;

    let grid = CurveGrid::new(base, price_range, num_points)?;

    (0..grid.n)
        .into_par_iter()
        .map(|i| sample(base, grid.price_at(i)))
        .collect()
}

/// Payoff at expiration, `max(0, S - K)` and `max(0, K - S)`, for each price.
pub fn generate_payoff_curve(strike_price: f64, prices: &[f64]) -> Vec<PayoffPoint> {
    prices
        .iter()
        .map(|&s| PayoffPoint {
            underlying_price: s,
            call_payoff: (s - strike_price).max(0.0),
            put_payoff: (strike_price - s).max(0.0),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> OptionParameters {
        OptionParameters::new(100.0, 105.0, 1.0, 0.05, 0.2).unwrap()
    }

    #[test]
    fn test_grid_endpoints() {
        let grid = CurveGrid::new(&base(), 50.0, 5).unwrap();
        assert_eq!(grid.price_at(0), 50.0);
        assert_eq!(grid.price_at(4), 150.0);
        assert_eq!(grid.step, 25.0);
    }

    #[test]
    fn test_grid_floor_at_min_price() {
        let grid = CurveGrid::new(&base(), 150.0, 3).unwrap();
        assert_eq!(grid.price_at(0), MIN_CURVE_PRICE);
        assert!((grid.price_at(2) - 250.0).abs() < 1e-9);
    }

    #[test]
    fn test_point_count_errors() {
        let err = generate_price_curve(&base(), 50.0, 0).unwrap_err();
        assert!(err.to_string().contains("number of points must be positive"));
        assert!(generate_price_curve(&base(), 50.0, -1).is_err());
        assert!(generate_price_curve(&base(), 50.0, 1).is_err());
        assert!(generate_price_curve(&base(), 0.0, 10).is_err());
        assert!(generate_price_curve(&base(), f64::NAN, 10).is_err());
    }

    #[test]
    fn test_grid_rejects_indistinct_samples() {
        let err = CurveGrid::new(&base(), 1e-12, 1000).unwrap_err();
        assert!(err.to_string().contains("too narrow"));
        assert!(CurveGrid::new(&base(), 1e-3, 1000).is_ok());
    }

    #[test]
    fn test_payoff_curve() {
        let payoff = generate_payoff_curve(100.0, &[90.0, 100.0, 110.0]);
        assert_eq!(payoff[0].call_payoff, 0.0);
        assert_eq!(payoff[0].put_payoff, 10.0);
        assert_eq!(payoff[1].call_payoff, 0.0);
        assert_eq!(payoff[1].put_payoff, 0.0);
        assert_eq!(payoff[2].call_payoff, 10.0);
        assert_eq!(payoff[2].put_payoff, 0.0);
    }
}
