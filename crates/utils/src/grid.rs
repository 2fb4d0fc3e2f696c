//! Bin edge generation for tallying sampled values

use crate::error::{Error, Result};

/// Evenly spaced bin edges between `min` and `max`
///
/// Returns `n_bins + 1` edges, with the first and last edges exactly equal to
/// the bounds provided.
///
/// ```rust
/// # use ftools_utils::linear_grid;
/// let edges = linear_grid(0.0, 1.0, 4).unwrap();
/// assert_eq!(edges, vec![0.0, 0.25, 0.5, 0.75, 1.0]);
/// ```
pub fn linear_grid(min: f64, max: f64, n_bins: usize) -> Result<Vec<f64>> {
    check_bounds(min, max, n_bins)?;

    let width = (max - min) / n_bins as f64;
    let mut edges: Vec<f64> = (0..n_bins).map(|i| min + i as f64 * width).collect();
    edges.push(max);
    Ok(edges)
}

/// Logarithmically spaced bin edges between `min` and `max`
///
/// Thermal scattering energies span several decades, so this is usually the
/// more useful grid. Both bounds must be strictly positive.
///
/// ```rust
/// # use ftools_utils::log_grid;
/// let edges = log_grid(1e-3, 1e1, 4).unwrap();
/// assert_eq!(edges.len(), 5);
/// assert_eq!(edges[0], 1e-3);
/// assert_eq!(edges[4], 1e1);
/// assert!((edges[2] - 1e-1).abs() < 1e-12);
///
/// // Zero is not allowed on a log scale
/// assert!(log_grid(0.0, 1.0, 10).is_err());
/// ```
pub fn log_grid(min: f64, max: f64, n_bins: usize) -> Result<Vec<f64>> {
    check_bounds(min, max, n_bins)?;
    if min <= 0.0 {
        return Err(Error::InvalidGridBounds { min, max });
    }

    let (log_min, log_max) = (min.log10(), max.log10());
    let step = (log_max - log_min) / n_bins as f64;

    let mut edges = Vec::with_capacity(n_bins + 1);
    edges.push(min);
    edges.extend((1..n_bins).map(|i| 10f64.powf(log_min + i as f64 * step)));
    edges.push(max);
    Ok(edges)
}

fn check_bounds(min: f64, max: f64, n_bins: usize) -> Result<()> {
    if n_bins == 0 {
        return Err(Error::NoBinsRequested);
    }

    if !min.is_finite() || !max.is_finite() || min >= max {
        return Err(Error::InvalidGridBounds { min, max });
    }

    Ok(())
}
