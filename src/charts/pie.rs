//! Pie chart over (label, count) pairs

use std::path::Path;

use plotters::element::Pie;
use plotters::prelude::*;

use crate::error::{DashboardError, Result};

/// Slice labels: the value followed by its share, one decimal place
#[must_use]
pub fn slice_labels(slices: &[(String, usize)]) -> Vec<String> {
    let total: usize = slices.iter().map(|(_, count)| count).sum();
    slices
        .iter()
        .map(|(label, count)| {
            let share = if total == 0 {
                0.0
            } else {
                *count as f64 * 100.0 / total as f64
            };
            format!("{label} ({share:.1}%)")
        })
        .collect()
}

/// One slice per entry, colors cycling through `palette`
pub fn draw_pie(
    path: &Path,
    size: (u32, u32),
    title: &str,
    slices: &[(String, usize)],
    palette: &[RGBColor],
) -> Result<()> {
    let err = |e| DashboardError::chart(title, e);
    let root = BitMapBackend::new(path, size).into_drawing_area();
    root.fill(&WHITE).map_err(err)?;
    root.titled(title, ("sans-serif", 20)).map_err(err)?;

    if !slices.is_empty() && !palette.is_empty() {
        let (width, height) = root.dim_in_pixel();
        let center = (width as i32 / 2, height as i32 / 2 + 10);
        let radius = f64::from(width.min(height)) * 0.32;
        let sizes: Vec<f64> = slices.iter().map(|(_, count)| *count as f64).collect();
        let colors: Vec<RGBColor> = palette.iter().copied().cycle().take(slices.len()).collect();
        let labels = slice_labels(slices);

        let mut pie = Pie::new(&center, &radius, &sizes, &colors, &labels);
        pie.label_style(("sans-serif", 16).into_font().color(&BLACK));
        root.draw(&pie).map_err(err)?;
    }

    root.present().map_err(err)?;
    Ok(())
}
