mod test_utils;

use option_pricer_lib::{
    call_price, generate_payoff_curve, generate_price_curve, put_price, CurvePoint,
    OptionParameters, PricerError,
};
use test_utils::{random_params, reference_params};

/// S=100, range 50, 5 points: 50, 75, 100, 125, 150.
#[test]
fn test_curve_endpoints_and_count() {
    let curve = generate_price_curve(&reference_params(), 50.0, 5).expect("curve failed");

    assert_eq!(curve.len(), 5);
    assert_eq!(curve[0].underlying_price, 50.0);
    assert_eq!(curve[4].underlying_price, 150.0);
    let prices: Vec<f64> = curve.iter().map(|p| p.underlying_price).collect();
    assert_eq!(prices, vec![50.0, 75.0, 100.0, 125.0, 150.0]);
}

#[test]
fn test_curve_rejects_bad_point_counts() {
    for n in [0, -1, i32::MIN] {
        let err = generate_price_curve(&reference_params(), 50.0, n).unwrap_err();
        assert_eq!(
            err,
            PricerError::InvalidParameter("number of points must be positive".to_string())
        );
    }
    assert!(generate_price_curve(&reference_params(), 50.0, 1).is_err());
}

#[test]
fn test_curve_rejects_bad_range_and_base() {
    assert!(generate_price_curve(&reference_params(), 0.0, 10).is_err());
    assert!(generate_price_curve(&reference_params(), -5.0, 10).is_err());
    assert!(generate_price_curve(&reference_params(), f64::INFINITY, 10).is_err());

    let bad_base = OptionParameters {
        volatility: -0.2,
        ..reference_params()
    };
    assert!(generate_price_curve(&bad_base, 50.0, 10).is_err());
}

/// A step below float resolution at S would repeat prices; the call fails instead.
#[test]
fn test_curve_rejects_range_below_float_resolution() {
    let narrow = PricerError::InvalidParameter(
        "price range too narrow for the number of points".to_string(),
    );

    let err = generate_price_curve(&reference_params(), 1e-12, 1000).unwrap_err();
    assert_eq!(err, narrow);

    let huge = OptionParameters::new(1e17, 1e17, 1.0, 0.05, 0.2).unwrap();
    let err = generate_price_curve(&huge, 1.0, 5).unwrap_err();
    assert_eq!(err, narrow);

    // Narrow but representable ranges still produce strictly increasing prices.
    let curve = generate_price_curve(&reference_params(), 1e-6, 1000).unwrap();
    for pair in curve.windows(2) {
        assert!(pair[1].underlying_price > pair[0].underlying_price);
    }
}

#[test]
fn test_curve_start_is_floored() {
    let base = OptionParameters::new(20.0, 25.0, 0.5, 0.03, 0.4).unwrap();
    let curve = generate_price_curve(&base, 50.0, 100).unwrap();
    assert_eq!(curve.len(), 100);
    assert_eq!(curve[0].underlying_price, 0.01);
    assert!((curve[99].underlying_price - 70.0).abs() < 1e-9);
    assert!(curve.iter().all(|p| p.underlying_price > 0.0));
}

#[test]
fn test_curve_strictly_increasing_and_matches_pricing() {
    for base in random_params(50, 21) {
        let curve = generate_price_curve(&base, base.underlying_price * 0.5, 64).unwrap();
        assert_eq!(curve.len(), 64);

        for pair in curve.windows(2) {
            assert!(pair[1].underlying_price > pair[0].underlying_price);
        }

        for point in curve.iter().step_by(7) {
            let params = base.with_underlying_price(point.underlying_price).unwrap();
            assert_eq!(point.call_price, call_price(&params).unwrap());
            assert_eq!(point.put_price, put_price(&params).unwrap());
        }
    }
}

/// Samples are computed as start + i*step, so the last one lands on S + range.
#[test]
fn test_curve_does_not_drift() {
    let base = reference_params();
    let curve = generate_price_curve(&base, 50.0, 1000).unwrap();
    let start = 50.0;
    let step = 100.0 / 999.0;
    for (i, point) in curve.iter().enumerate() {
        assert_eq!(point.underlying_price, start + i as f64 * step);
    }
    assert!((curve[999].underlying_price - 150.0).abs() < 1e-9);
}

#[test]
fn test_curve_point_tuple_conversion() {
    let point = CurvePoint::from((100.0, 8.02, 7.90));
    let (s, c, p): (f64, f64, f64) = point.into();
    assert_eq!((s, c, p), (100.0, 8.02, 7.90));
}

#[test]
fn test_payoff_curve_over_sampled_prices() {
    let base = reference_params();
    let curve = generate_price_curve(&base, 50.0, 5).unwrap();
    let prices: Vec<f64> = curve.iter().map(|p| p.underlying_price).collect();
    let payoff = generate_payoff_curve(base.strike_price, &prices);

    assert_eq!(payoff.len(), 5);
    assert_eq!(payoff[0].put_payoff, 55.0);
    assert_eq!(payoff[0].call_payoff, 0.0);
    assert_eq!(payoff[4].call_payoff, 45.0);
    assert_eq!(payoff[4].put_payoff, 0.0);

    // Option value never falls below intrinsic value for a call on a
    // non-dividend stock with a non-negative rate.
    for (point, pay) in curve.iter().zip(payoff.iter()) {
        assert!(point.call_price + 1e-9 >= pay.call_payoff);
    }
}

#[cfg(feature = "parallel")]
#[test]
fn test_parallel_curve_matches_sequential() {
    use option_pricer_lib::generate_price_curve_par;

    for base in random_params(20, 5) {
        let seq = generate_price_curve(&base, 40.0, 500).unwrap();
        let par = generate_price_curve_par(&base, 40.0, 500).unwrap();
        assert_eq!(seq, par);
    }
    assert!(generate_price_curve_par(&reference_params(), 40.0, 0).is_err());
}
