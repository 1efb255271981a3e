//! CSV export of sampled curves.

use std::io;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::info;

use crate::models::bs::CurvePoint;
use crate::session::types::PricingReport;

/// One CSV row: option values and intrinsic values at one underlying price.
#[derive(Debug, Serialize)]
struct ReportRow {
    underlying_price: f64,
    call_price: f64,
    put_price: f64,
    call_payoff: f64,
    put_payoff: f64,
}

/// Writes `underlying_price,call_price,put_price` rows with a header.
pub fn write_curve<W: io::Write>(writer: W, curve: &[CurvePoint]) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    for point in curve {
        wtr.serialize(point)?;
    }
    wtr.flush()?;
    Ok(())
}

/// [`write_curve`] into a file.
pub fn write_curve_csv(path: impl AsRef<Path>, curve: &[CurvePoint]) -> Result<()> {
    let path = path.as_ref();
    let file = std::fs::File::create(path)
        .with_context(|| format!("failed to create {}", path.display()))?;
    write_curve(file, curve)?;
    info!(path = %path.display(), rows = curve.len(), "price curve written");
    Ok(())
}

/// Writes the price curve alongside the payoff at expiration.
pub fn write_report<W: io::Write>(writer: W, report: &PricingReport) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    for (point, payoff) in report.curve.iter().zip(report.payoff.iter()) {
        wtr.serialize(ReportRow {
            underlying_price: point.underlying_price,
            call_price: point.call_price,
            put_price: point.put_price,
            call_payoff: payoff.call_payoff,
            put_payoff: payoff.put_payoff,
        })?;
    }
    wtr.flush()?;
    Ok(())
}

/// [`write_report`] into a file.
pub fn write_report_csv(path: impl AsRef<Path>, report: &PricingReport) -> Result<()> {
    let path = path.as_ref();
    let file = std::fs::File::create(path)
        .with_context(|| format!("failed to create {}", path.display()))?;
    write_report(file, report)?;
    info!(path = %path.display(), rows = report.curve.len(), "pricing report written");
    Ok(())
}
