//! Count histogram with an overlaid density curve

use std::path::Path;

use plotters::prelude::*;

use super::density::{DENSITY_POINTS, density_curve, histogram};
use crate::error::{DashboardError, Result};

/// Histogram of `values` in `bins` bins plus a count-scaled density curve
pub fn draw_histogram(
    path: &Path,
    size: (u32, u32),
    title: &str,
    x_desc: &str,
    values: &[f64],
    bins: usize,
    color: RGBColor,
) -> Result<()> {
    let err = |e| DashboardError::chart(title, e);
    let bins = histogram(values, bins);
    let curve = bins
        .first()
        .map(|bin| density_curve(values, bin.width(), DENSITY_POINTS))
        .unwrap_or_default();

    let (x_min, x_max) = match (bins.first(), bins.last()) {
        (Some(first), Some(last)) => (first.start, last.end),
        _ => (0.0, 1.0),
    };
    let tallest = bins
        .iter()
        .map(|bin| bin.count as f64)
        .chain(curve.iter().map(|(_, y)| *y))
        .fold(1.0, f64::max);

    let root = BitMapBackend::new(path, size).into_drawing_area();
    root.fill(&WHITE).map_err(err)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(title, ("sans-serif", 20))
        .margin(10)
        .x_label_area_size(35)
        .y_label_area_size(45)
        .build_cartesian_2d(x_min..x_max, 0.0..tallest * 1.1)
        .map_err(err)?;

    chart
        .configure_mesh()
        .x_desc(x_desc)
        .y_desc("Count")
        .draw()
        .map_err(err)?;

    chart
        .draw_series(bins.iter().map(|bin| {
            Rectangle::new(
                [(bin.start, 0.0), (bin.end, bin.count as f64)],
                color.mix(0.5).filled(),
            )
        }))
        .map_err(err)?;
    chart
        .draw_series(bins.iter().map(|bin| {
            Rectangle::new([(bin.start, 0.0), (bin.end, bin.count as f64)], color)
        }))
        .map_err(err)?;
    chart
        .draw_series(LineSeries::new(curve, color.stroke_width(2)))
        .map_err(err)?;

    root.present().map_err(err)?;
    Ok(())
}
