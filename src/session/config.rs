use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::models::types::PlotType;
use crate::session::types::PricerInputs;

/// Smallest half-width of the curve's price range.
pub const MIN_PRICE_RANGE: f64 = 1.0;
/// Allowed number of curve samples.
pub const MIN_CURVE_POINTS: i32 = 50;
pub const MAX_CURVE_POINTS: i32 = 1000;

/// Price curve sampling settings
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CurveConfig {
    /// Half-width of the sampled range around the underlying price
    #[serde(default = "default_price_range")]
    pub price_range: f64,
    /// Number of samples
    #[serde(default = "default_num_points")]
    pub num_points: i32,
}

impl Default for CurveConfig {
    fn default() -> Self {
        Self {
            price_range: default_price_range(),
            num_points: default_num_points(),
        }
    }
}

impl CurveConfig {
    /// Range at least 1.0, point count within [50, 1000].
    pub fn clamped(&self) -> Self {
        let price_range = if self.price_range.is_nan() {
            self.price_range
        } else {
            self.price_range.max(MIN_PRICE_RANGE)
        };
        Self {
            price_range,
            num_points: self.num_points.clamp(MIN_CURVE_POINTS, MAX_CURVE_POINTS),
        }
    }
}

/// Chart output settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlotConfig {
    #[serde(default)]
    pub plot_type: PlotType,
    #[serde(default = "default_width")]
    pub width: u32,
    #[serde(default = "default_height")]
    pub height: u32,
    /// Draw the payoff-at-expiration chart under the price chart
    #[serde(default = "default_true")]
    pub show_payoff: bool,
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            plot_type: PlotType::default(),
            width: default_width(),
            height: default_height(),
            show_payoff: true,
        }
    }
}

/// Main configuration for a pricing session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricerConfig {
    /// Recalculate as soon as an input changes
    #[serde(default = "default_true")]
    pub auto_calculate: bool,

    /// Include the Greeks table in text output
    #[serde(default)]
    pub show_greeks: bool,

    #[serde(default)]
    pub inputs: PricerInputs,

    #[serde(default)]
    pub curve: CurveConfig,

    #[serde(default)]
    pub plot: PlotConfig,
}

impl Default for PricerConfig {
    fn default() -> Self {
        Self {
            auto_calculate: true,
            show_greeks: false,
            inputs: PricerInputs::default(),
            curve: CurveConfig::default(),
            plot: PlotConfig::default(),
        }
    }
}

impl PricerConfig {
    /// Default settings for interactive use: 200 curve points over ±50.
    pub fn interactive() -> Self {
        Self::default()
    }

    /// Densest sampling the session allows, with Greeks shown.
    pub fn high_resolution() -> Self {
        Self {
            curve: CurveConfig {
                price_range: default_price_range(),
                num_points: MAX_CURVE_POINTS,
            },
            show_greeks: true,
            ..Self::default()
        }
    }

    /// Sparsest sampling, no payoff chart.
    pub fn coarse() -> Self {
        Self {
            curve: CurveConfig {
                price_range: default_price_range(),
                num_points: MIN_CURVE_POINTS,
            },
            plot: PlotConfig {
                show_payoff: false,
                ..PlotConfig::default()
            },
            ..Self::default()
        }
    }

    /// Parses a TOML document. Missing keys take their defaults.
    pub fn from_toml_str(s: &str) -> Result<Self> {
        toml::from_str(s).context("failed to parse pricer config")
    }

    /// Reads and parses a TOML config file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        Self::from_toml_str(&text)
    }

    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).context("failed to serialize pricer config")
    }
}

fn default_price_range() -> f64 {
    50.0
}

fn default_num_points() -> i32 {
    200
}

fn default_width() -> u32 {
    1280
}

fn default_height() -> u32 {
    768
}

fn default_true() -> bool {
    true
}
