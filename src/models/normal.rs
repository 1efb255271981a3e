// src/models/normal.rs

//! Standard normal distribution helpers.
//!
//! The CDF uses the Abramowitz & Stegun rational approximation (formula
//! 7.1.26) of the error function, evaluated at `x / sqrt(2)`:
//!
//! N(x) = 0.5 * (1 + sign(x) * erf(|x| / sqrt(2)))
//!
//! Maximum absolute error is about 7.5e-8 over the real line.

const A1: f64 = 0.254829592;
const A2: f64 = -0.284496736;
const A3: f64 = 1.421413741;
const A4: f64 = -1.453152027;
const A5: f64 = 1.061405429;
const P: f64 = 0.3275911;

/// 1 / sqrt(2 * pi)
pub const INV_SQRT_2PI: f64 = 0.3989422804014327;

/// Standard normal cumulative distribution function N(x).
pub fn norm_cdf(x: f64) -> f64 {
    let sign = if x < 0.0 { -1.0 } else { 1.0 };
    let x = x.abs();

    let t = 1.0 / (1.0 + P * x * std::f64::consts::FRAC_1_SQRT_2);
    let y = 1.0 - (((((A5 * t + A4) * t) + A3) * t + A2) * t + A1) * t * (-0.5 * x * x).exp();

    0.5 * (1.0 + sign * y)
}

/// Standard normal probability density function φ(x).
pub fn norm_pdf(x: f64) -> f64 {
    INV_SQRT_2PI * (-0.5 * x * x).exp()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cdf_known_values() {
        // Coefficients sum to 0.999999999, so N(0) sits 5e-10 above one half.
        assert!((norm_cdf(0.0) - 0.5).abs() < 1e-9);
        assert!((norm_cdf(1.0) - 0.841_344_746_068_543).abs() < 1e-7);
        assert!((norm_cdf(-1.96) - 0.024_997_895_148_220).abs() < 1e-7);
        assert!((norm_cdf(3.0) - 0.998_650_101_968_370).abs() < 1e-7);
    }

    #[test]
    fn test_cdf_symmetry() {
        let mut x = -8.0;
        while x <= 8.0 {
            let diff = norm_cdf(-x) - (1.0 - norm_cdf(x));
            assert!(diff.abs() < 1e-8, "N(-x) != 1 - N(x) at x={}", x);
            x += 0.01;
        }
    }

    #[test]
    fn test_cdf_tails_and_monotonicity() {
        assert!(norm_cdf(-40.0) >= 0.0);
        assert!(norm_cdf(-40.0) < 1e-12);
        assert!((norm_cdf(40.0) - 1.0).abs() < 1e-12);

        let mut prev = norm_cdf(-10.0);
        for i in -999..=1000 {
            let cur = norm_cdf(i as f64 / 100.0);
            assert!(cur >= prev - 1e-15);
            prev = cur;
        }
    }

    #[test]
    fn test_pdf_peak_and_positivity() {
        assert_eq!(norm_pdf(0.0), INV_SQRT_2PI);
        for i in -800..=800 {
            let x = i as f64 / 100.0;
            let v = norm_pdf(x);
            assert!(v >= 0.0);
            assert!(v <= norm_pdf(0.0));
            assert_eq!(v, norm_pdf(-x));
        }
    }
}
