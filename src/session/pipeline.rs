use tracing::{debug, warn};

use crate::error::Result;
use crate::models::bs::{calculate_prices, generate_payoff_curve, generate_price_curve};
use crate::session::config::{CurveConfig, PricerConfig};
use crate::session::types::{ParityCheck, PricerInputs, PricingReport};

/// One full recalculation: clamp inputs, price both legs with Greeks, check
/// put-call parity, and sample the price and payoff curves.
///
/// Inputs and curve settings are clamped to their floors before validation;
/// the report carries the parameters that were actually priced.
pub fn run_pricing(inputs: &PricerInputs, curve: &CurveConfig) -> Result<PricingReport> {
    let clamped = inputs.clamped();
    if clamped != *inputs {
        warn!(?inputs, ?clamped, "inputs clamped to minimum values");
    }
    let parameters = clamped.to_parameters()?;

    let prices = calculate_prices(&parameters)?;
    let parity = ParityCheck::new(&parameters, &prices);
    if !parity.is_valid {
        warn!(
            difference = parity.difference,
            "put-call parity check failed"
        );
    }

    let curve_cfg = curve.clamped();
    if curve_cfg != *curve {
        debug!(?curve, ?curve_cfg, "curve settings clamped");
    }
    let curve = generate_price_curve(&parameters, curve_cfg.price_range, curve_cfg.num_points)?;
    let sample_prices: Vec<f64> = curve.iter().map(|p| p.underlying_price).collect();
    let payoff = generate_payoff_curve(parameters.strike_price, &sample_prices);

    debug!(
        call = prices.call_price,
        put = prices.put_price,
        points = curve.len(),
        "pricing recalculated"
    );

    Ok(PricingReport {
        parameters,
        prices,
        parity,
        curve,
        payoff,
    })
}

/// Holds the current inputs and the last result, recomputing on change when
/// `auto_calculate` is enabled.
///
/// Failures never panic: they clear the report and leave a message in
/// [`PricingSession::last_error`] for display.
#[derive(Debug, Clone)]
pub struct PricingSession {
    config: PricerConfig,
    report: Option<PricingReport>,
    last_error: Option<String>,
    dirty: bool,
}

impl Default for PricingSession {
    fn default() -> Self {
        Self::new(PricerConfig::default())
    }
}

impl PricingSession {
    /// Creates a session. Nothing is computed until the first
    /// [`recalculate`](Self::recalculate) or, with auto-calculation, the first
    /// input change.
    pub fn new(config: PricerConfig) -> Self {
        Self {
            config,
            report: None,
            last_error: None,
            dirty: true,
        }
    }

    pub fn config(&self) -> &PricerConfig {
        &self.config
    }

    pub fn inputs(&self) -> &PricerInputs {
        &self.config.inputs
    }

    /// Result of the last successful recalculation.
    pub fn report(&self) -> Option<&PricingReport> {
        self.report.as_ref()
    }

    /// Message of the last failed recalculation.
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn set_inputs(&mut self, inputs: PricerInputs) {
        if inputs == self.config.inputs {
            return;
        }
        self.config.inputs = inputs;
        self.mark_changed();
    }

    pub fn set_curve(&mut self, curve: CurveConfig) {
        if curve == self.config.curve {
            return;
        }
        self.config.curve = curve;
        self.mark_changed();
    }

    /// Turning auto-calculation on brings a stale report up to date.
    pub fn set_auto_calculate(&mut self, enabled: bool) {
        self.config.auto_calculate = enabled;
        if enabled && self.dirty {
            let _ = self.recalculate();
        }
    }

    /// Prices the current inputs and stores the outcome.
    pub fn recalculate(&mut self) -> Result<&PricingReport> {
        self.dirty = false;
        match run_pricing(&self.config.inputs, &self.config.curve) {
            Ok(report) => {
                self.last_error = None;
                let report = self.report.insert(report);
                Ok(&*report)
            }
            Err(e) => {
                debug!(error = %e, "recalculation failed");
                self.report = None;
                self.last_error = Some(e.to_string());
                Err(e)
            }
        }
    }

    fn mark_changed(&mut self) {
        self.dirty = true;
        if self.config.auto_calculate {
            let _ = self.recalculate();
        }
    }
}
