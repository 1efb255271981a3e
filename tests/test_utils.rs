use option_pricer_lib::OptionParameters;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// S=100, K=105, T=1y, r=5%, σ=20%
#[allow(dead_code)]
pub fn reference_params() -> OptionParameters {
    OptionParameters::new(100.0, 105.0, 1.0, 0.05, 0.2).expect("reference parameters are valid")
}

/// Deterministic sample of valid parameter sets spanning deep ITM/OTM,
/// short and long expiries, negative rates and high volatility.
#[allow(dead_code)]
pub fn random_params(count: usize, seed: u64) -> Vec<OptionParameters> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count)
        .map(|_| {
            OptionParameters::new(
                rng.gen_range(1.0..500.0),
                rng.gen_range(1.0..500.0),
                rng.gen_range(0.01..5.0),
                rng.gen_range(-0.02..0.15),
                rng.gen_range(0.05..1.5),
            )
            .expect("sampled parameters are valid")
        })
        .collect()
}

#[allow(dead_code)]
pub fn assert_close(actual: f64, expected: f64, tol: f64, what: &str) {
    assert!(
        (actual - expected).abs() <= tol,
        "{}: expected {} ± {}, got {}",
        what,
        expected,
        tol,
        actual
    );
}
