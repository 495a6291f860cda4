//! Histogram binning and kernel density estimation
//!
//! Pure numeric helpers behind the billing distribution chart.

/// Number of points the density curve is evaluated at
pub const DENSITY_POINTS: usize = 200;

/// One histogram bin covering `[start, end)`, the last bin closed
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HistogramBin {
    pub start: f64,
    pub end: f64,
    pub count: usize,
}

impl HistogramBin {
    #[must_use]
    pub fn width(&self) -> f64 {
        self.end - self.start
    }
}

/// Smallest and largest finite value
fn bounds(values: &[f64]) -> Option<(f64, f64)> {
    values
        .iter()
        .copied()
        .filter(|v| v.is_finite())
        .fold(None, |acc, v| match acc {
            None => Some((v, v)),
            Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
        })
}

/// Split `[min, max]` of `values` into `bins` equal-width bins and count
///
/// A constant sample is widened to `[v - 0.5, v + 0.5]`. Empty input or zero
/// bins give no bins.
#[must_use]
pub fn histogram(values: &[f64], bins: usize) -> Vec<HistogramBin> {
    let Some((mut lo, mut hi)) = bounds(values) else {
        return Vec::new();
    };
    if bins == 0 {
        return Vec::new();
    }
    if lo == hi {
        lo -= 0.5;
        hi += 0.5;
    }

    let width = (hi - lo) / bins as f64;
    let mut counts = vec![0usize; bins];
    for &v in values.iter().filter(|v| v.is_finite()) {
        let slot = ((v - lo) / width).floor() as usize;
        counts[slot.min(bins - 1)] += 1;
    }

    counts
        .into_iter()
        .enumerate()
        .map(|(i, count)| HistogramBin {
            start: lo + width * i as f64,
            end: if i + 1 == bins { hi } else { lo + width * (i + 1) as f64 },
            count,
        })
        .collect()
}

/// Sample standard deviation (n - 1 denominator)
#[must_use]
pub fn sample_std(values: &[f64]) -> Option<f64> {
    if values.len() < 2 {
        return None;
    }
    let n = values.len() as f64;
    let mean = values.iter().sum::<f64>() / n;
    let var = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / (n - 1.0);
    Some(var.sqrt())
}

/// Scott's rule bandwidth, `std * n^(-1/5)`
///
/// `None` when fewer than two values exist or they are all equal.
#[must_use]
pub fn scott_bandwidth(values: &[f64]) -> Option<f64> {
    let std = sample_std(values)?;
    if std <= 0.0 {
        return None;
    }
    Some(std * (values.len() as f64).powf(-0.2))
}

/// Gaussian kernel density of `values` at `x`
#[must_use]
pub fn gaussian_kde(values: &[f64], bandwidth: f64, x: f64) -> f64 {
    let norm = (2.0 * std::f64::consts::PI).sqrt() * bandwidth * values.len() as f64;
    values
        .iter()
        .map(|v| {
            let z = (x - v) / bandwidth;
            (-0.5 * z * z).exp()
        })
        .sum::<f64>()
        / norm
}

/// Density curve over the data range scaled to histogram counts
///
/// The density is multiplied by `n * bin_width` so it overlays a count
/// histogram. Empty when no bandwidth can be estimated.
#[must_use]
pub fn density_curve(values: &[f64], bin_width: f64, points: usize) -> Vec<(f64, f64)> {
    let (Some(bandwidth), Some((lo, hi))) = (scott_bandwidth(values), bounds(values)) else {
        return Vec::new();
    };
    if points < 2 {
        return Vec::new();
    }
    let scale = values.len() as f64 * bin_width;
    let step = (hi - lo) / (points - 1) as f64;
    (0..points)
        .map(|i| {
            let x = lo + step * i as f64;
            (x, gaussian_kde(values, bandwidth, x) * scale)
        })
        .collect()
}
