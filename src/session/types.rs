use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::models::bs::{CurvePoint, OptionParameters, OptionPrices, PayoffPoint};

/// Smallest underlying and strike price accepted from user input.
pub const MIN_PRICE_INPUT: f64 = 0.01;
/// Smallest time to expiration (years) accepted from user input.
pub const MIN_TIME_INPUT: f64 = 0.001;
/// Smallest volatility accepted from user input.
pub const MIN_VOLATILITY_INPUT: f64 = 0.001;
/// Parity holds when |lhs - rhs| is below this.
pub const PARITY_TOLERANCE: f64 = 0.01;

/// Raw user-facing inputs, before clamping and validation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PricerInputs {
    #[serde(default = "default_underlying_price")]
    pub underlying_price: f64,
    #[serde(default = "default_strike_price")]
    pub strike_price: f64,
    /// Years
    #[serde(default = "default_time_to_expiration")]
    pub time_to_expiration: f64,
    /// Decimal, e.g. 0.05 for 5%
    #[serde(default = "default_risk_free_rate")]
    pub risk_free_rate: f64,
    /// Decimal, e.g. 0.2 for 20%
    #[serde(default = "default_volatility")]
    pub volatility: f64,
}

impl Default for PricerInputs {
    fn default() -> Self {
        Self {
            underlying_price: default_underlying_price(),
            strike_price: default_strike_price(),
            time_to_expiration: default_time_to_expiration(),
            risk_free_rate: default_risk_free_rate(),
            volatility: default_volatility(),
        }
    }
}

impl PricerInputs {
    /// Applies the input floors: prices at least 0.01, time and volatility at
    /// least 0.001. The rate is left untouched. NaN inputs stay NaN so that
    /// validation reports them.
    pub fn clamped(&self) -> Self {
        Self {
            underlying_price: floor(self.underlying_price, MIN_PRICE_INPUT),
            strike_price: floor(self.strike_price, MIN_PRICE_INPUT),
            time_to_expiration: floor(self.time_to_expiration, MIN_TIME_INPUT),
            risk_free_rate: self.risk_free_rate,
            volatility: floor(self.volatility, MIN_VOLATILITY_INPUT),
        }
    }

    /// Clamps and validates the inputs into model parameters.
    pub fn to_parameters(&self) -> Result<OptionParameters> {
        let c = self.clamped();
        OptionParameters::new(
            c.underlying_price,
            c.strike_price,
            c.time_to_expiration,
            c.risk_free_rate,
            c.volatility,
        )
    }
}

impl From<OptionParameters> for PricerInputs {
    fn from(p: OptionParameters) -> Self {
        Self {
            underlying_price: p.underlying_price,
            strike_price: p.strike_price,
            time_to_expiration: p.time_to_expiration,
            risk_free_rate: p.risk_free_rate,
            volatility: p.volatility,
        }
    }
}

fn floor(value: f64, min: f64) -> f64 {
    if value.is_nan() {
        value
    } else {
        value.max(min)
    }
}

fn default_underlying_price() -> f64 {
    100.0
}

fn default_strike_price() -> f64 {
    105.0
}

fn default_time_to_expiration() -> f64 {
    1.0
}

fn default_risk_free_rate() -> f64 {
    0.05
}

fn default_volatility() -> f64 {
    0.2
}

/// Put-call parity check: `C - P` against `S - K·e^(-rT)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ParityCheck {
    /// C - P
    pub lhs: f64,
    /// S - K·e^(-rT)
    pub rhs: f64,
    pub difference: f64,
    pub is_valid: bool,
}

impl ParityCheck {
    pub fn new(params: &OptionParameters, prices: &OptionPrices) -> Self {
        let lhs = prices.call_price - prices.put_price;
        let rhs = params.underlying_price - params.strike_price * params.discount_factor();
        let difference = (lhs - rhs).abs();
        Self {
            lhs,
            rhs,
            difference,
            is_valid: difference < PARITY_TOLERANCE,
        }
    }
}

/// Everything one recalculation produces.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricingReport {
    /// The clamped, validated parameters actually priced
    pub parameters: OptionParameters,
    pub prices: OptionPrices,
    pub parity: ParityCheck,
    /// Option values across the underlying price range
    pub curve: Vec<CurvePoint>,
    /// Intrinsic values at expiration over the same prices as `curve`
    pub payoff: Vec<PayoffPoint>,
}
