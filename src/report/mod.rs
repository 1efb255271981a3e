//! Presentation helpers built on a [`PricingReport`](crate::PricingReport):
//! text tables, CSV export and SVG charts.

pub mod export;
pub mod format;
pub mod plot;

pub use export::{write_curve, write_curve_csv, write_report, write_report_csv};
pub use format::{format_currency, format_percentage, greeks_table, summary};
pub use plot::plot_price_curve;
