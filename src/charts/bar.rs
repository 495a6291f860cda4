//! Vertical and horizontal bar charts over (label, count) pairs

use std::path::Path;

use plotters::coord::combinators::WithKeyPoints;
use plotters::coord::types::RangedCoordf64;
use plotters::prelude::*;

use crate::error::{DashboardError, Result};

/// Share of a category slot left empty on each side of a bar
const BAR_GAP: f64 = 0.1;

/// Category axis with one unit slot per bar, ticks at the slot centers
fn category_axis(count: usize) -> WithKeyPoints<RangedCoordf64> {
    let centers = (0..count).map(|i| i as f64 + 0.5).collect();
    (0.0..count.max(1) as f64).with_key_points(centers)
}

/// Label of the slot containing `value`
fn category_label(labels: &[(String, usize)], value: &f64) -> String {
    if *value < 0.0 {
        return String::new();
    }
    labels
        .get(value.floor() as usize)
        .map(|(label, _)| label.clone())
        .unwrap_or_default()
}

/// Start and end of the bar in slot `index`
fn bar_span(index: usize) -> (f64, f64) {
    let slot = index as f64;
    (slot + BAR_GAP, slot + 1.0 - BAR_GAP)
}

/// Upper bound of the count axis, with some headroom over the tallest bar
fn count_axis_max(bars: &[(String, usize)]) -> u32 {
    let max = bars.iter().map(|(_, count)| *count).max().unwrap_or(0);
    let max = u32::try_from(max).unwrap_or(u32::MAX - 1);
    max.saturating_add(max / 10).max(1)
}

fn bar_height(count: usize) -> u32 {
    u32::try_from(count).unwrap_or(u32::MAX)
}

/// One bar per entry, left to right, colors cycling through `palette`
pub fn draw_vertical_bars(
    path: &Path,
    size: (u32, u32),
    title: &str,
    x_desc: &str,
    bars: &[(String, usize)],
    palette: &[RGBColor],
) -> Result<()> {
    let err = |e| DashboardError::chart(title, e);
    let root = BitMapBackend::new(path, size).into_drawing_area();
    root.fill(&WHITE).map_err(err)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(title, ("sans-serif", 20))
        .margin(10)
        .x_label_area_size(35)
        .y_label_area_size(45)
        .build_cartesian_2d(category_axis(bars.len()), 0u32..count_axis_max(bars))
        .map_err(err)?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_desc(x_desc)
        .y_desc("Count")
        .x_labels(bars.len())
        .x_label_formatter(&|v| category_label(bars, v))
        .draw()
        .map_err(err)?;

    chart
        .draw_series(bars.iter().enumerate().map(|(i, (_, count))| {
            let color = palette[i % palette.len().max(1)];
            let (left, right) = bar_span(i);
            Rectangle::new([(left, 0), (right, bar_height(*count))], color.filled())
        }))
        .map_err(err)?;

    root.present().map_err(err)?;
    Ok(())
}

/// One bar per entry, first entry at the bottom
pub fn draw_horizontal_bars(
    path: &Path,
    size: (u32, u32),
    title: &str,
    x_desc: &str,
    bars: &[(String, usize)],
    color: RGBColor,
) -> Result<()> {
    let err = |e| DashboardError::chart(title, e);
    let root = BitMapBackend::new(path, size).into_drawing_area();
    root.fill(&WHITE).map_err(err)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(title, ("sans-serif", 20))
        .margin(10)
        .x_label_area_size(35)
        .y_label_area_size(90)
        .build_cartesian_2d(0u32..count_axis_max(bars), category_axis(bars.len()))
        .map_err(err)?;

    chart
        .configure_mesh()
        .disable_y_mesh()
        .x_desc(x_desc)
        .y_labels(bars.len())
        .y_label_formatter(&|v| category_label(bars, v))
        .draw()
        .map_err(err)?;

    chart
        .draw_series(bars.iter().enumerate().map(|(i, (_, count))| {
            let (bottom, top) = bar_span(i);
            Rectangle::new([(0, bottom), (bar_height(*count), top)], color.filled())
        }))
        .map_err(err)?;

    root.present().map_err(err)?;
    Ok(())
}
