//! SVG charts of option value and payoff against the underlying price.

use std::path::Path;

use anyhow::{anyhow, Result};
use plotters::coord::Shift;
use plotters::prelude::*;
use tracing::info;

use crate::session::config::PlotConfig;
use crate::session::types::PricingReport;

const CALL_COLOR: RGBColor = RGBColor(51, 204, 51);
const PUT_COLOR: RGBColor = RGBColor(204, 51, 51);

/// Renders the price chart, and the payoff chart under it when
/// `config.show_payoff` is set, into an SVG file.
pub fn plot_price_curve(
    path: impl AsRef<Path>,
    report: &PricingReport,
    config: &PlotConfig,
) -> Result<()> {
    let path = path.as_ref();
    if report.curve.len() < 2 {
        return Err(anyhow!("no curve data to plot"));
    }

    let root = SVGBackend::new(path, (config.width, config.height)).into_drawing_area();
    root.fill(&WHITE)?;

    if config.show_payoff {
        let split = (config.height as f64 * 0.6) as i32;
        let (upper, lower) = root.split_vertically(split);
        draw_price_chart(&upper, report, config)?;
        draw_payoff_chart(&lower, report, config)?;
    } else {
        draw_price_chart(&root, report, config)?;
    }

    root.present()?;
    info!(path = %path.display(), "price chart written");
    Ok(())
}

fn x_range(report: &PricingReport) -> std::ops::Range<f64> {
    let first = report.curve[0].underlying_price;
    let last = report.curve[report.curve.len() - 1].underlying_price;
    first..last
}

fn y_upper(values: impl Iterator<Item = f64>) -> f64 {
    let max = values.fold(0.0_f64, f64::max);
    if max > 0.0 {
        max * 1.05
    } else {
        1.0
    }
}

fn draw_price_chart(
    area: &DrawingArea<SVGBackend<'_>, Shift>,
    report: &PricingReport,
    config: &PlotConfig,
) -> Result<()> {
    let kind = config.plot_type;
    let y_max = y_upper(report.curve.iter().flat_map(|p| {
        let call = kind.shows_call().then_some(p.call_price);
        let put = kind.shows_put().then_some(p.put_price);
        call.into_iter().chain(put)
    }));

    let mut chart = ChartBuilder::on(area)
        .margin(20)
        .caption("Option Prices vs Underlying Price", ("sans-serif", 24))
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(x_range(report), 0.0..y_max)?;

    chart
        .configure_mesh()
        .x_desc("Underlying Price ($)")
        .y_desc("Option Price ($)")
        .draw()?;

    if kind.shows_call() {
        chart
            .draw_series(LineSeries::new(
                report.curve.iter().map(|p| (p.underlying_price, p.call_price)),
                CALL_COLOR.stroke_width(2),
            ))?
            .label("Call Price")
            .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], CALL_COLOR));
    }
    if kind.shows_put() {
        chart
            .draw_series(LineSeries::new(
                report.curve.iter().map(|p| (p.underlying_price, p.put_price)),
                PUT_COLOR.stroke_width(2),
            ))?
            .label("Put Price")
            .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], PUT_COLOR));
    }

    // Current underlying price
    let spot = report.parameters.underlying_price;
    chart.draw_series(std::iter::once(PathElement::new(
        vec![(spot, 0.0), (spot, y_max)],
        BLACK.mix(0.4).stroke_width(1),
    )))?;

    chart
        .configure_series_labels()
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()?;
    Ok(())
}

fn draw_payoff_chart(
    area: &DrawingArea<SVGBackend<'_>, Shift>,
    report: &PricingReport,
    config: &PlotConfig,
) -> Result<()> {
    let kind = config.plot_type;
    let y_max = y_upper(report.payoff.iter().flat_map(|p| {
        let call = kind.shows_call().then_some(p.call_payoff);
        let put = kind.shows_put().then_some(p.put_payoff);
        call.into_iter().chain(put)
    }));

    let mut chart = ChartBuilder::on(area)
        .margin(20)
        .caption("Payoff at Expiration", ("sans-serif", 20))
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(x_range(report), 0.0..y_max)?;

    chart
        .configure_mesh()
        .x_desc("Underlying Price ($)")
        .y_desc("Payoff ($)")
        .draw()?;

    if kind.shows_call() {
        chart
            .draw_series(LineSeries::new(
                report.payoff.iter().map(|p| (p.underlying_price, p.call_payoff)),
                CALL_COLOR.mix(0.7).stroke_width(2),
            ))?
            .label("Call Payoff")
            .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], CALL_COLOR));
    }
    if kind.shows_put() {
        chart
            .draw_series(LineSeries::new(
                report.payoff.iter().map(|p| (p.underlying_price, p.put_payoff)),
                PUT_COLOR.mix(0.7).stroke_width(2),
            ))?
            .label("Put Payoff")
            .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], PUT_COLOR));
    }

    chart
        .configure_series_labels()
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()?;
    Ok(())
}
