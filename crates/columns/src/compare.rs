//! Point-by-point comparison of two spectra on the same energy grid
//!
//! Mostly used for checking FaceMC results against an MCNP reference for the
//! same problem.

// standard library
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

// crate modules
use crate::columns::SpectrumPoint;
use crate::error::{Error, Result};

// ftools modules
use ftools_utils::ValueExt;

// external crates
use log::warn;
use serde::Serialize;

/// Comparison of a test value against a reference at one energy
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ComparisonRow {
    /// Shared energy
    pub energy: f64,
    /// Reference value, e.g. MCNP
    pub reference: f64,
    /// Relative error on the reference
    pub reference_error: f64,
    /// Test value, e.g. FaceMC
    pub test: f64,
    /// Relative error on the test value
    pub test_error: f64,
    /// test/reference
    pub ratio: f64,
    /// Absolute uncertainty on the ratio
    pub ratio_error: f64,
    /// Difference in units of the combined standard deviation
    pub sigma: f64,
}

/// Compare a test spectrum against a reference
///
/// Energies must agree within the relative `tolerance`. The ratio error comes
/// from adding the relative errors in quadrature. A zero reference gives a
/// non-finite ratio and a warning rather than an error, empty bins are common
/// in the high energy tail.
///
/// ```rust
/// # use ftools_columns::{compare_spectra, SpectrumPoint};
/// let mcnp = [SpectrumPoint { energy: 1.0, value: 2.0, error: 0.03 }];
/// let facemc = [SpectrumPoint { energy: 1.0, value: 2.2, error: 0.04 }];
///
/// let rows = compare_spectra(&mcnp, &facemc, 1e-6).unwrap();
/// assert!((rows[0].ratio - 1.1).abs() < 1e-12);
/// assert!((rows[0].ratio_error - 1.1 * 0.05).abs() < 1e-12);
/// ```
pub fn compare_spectra(
    reference: &[SpectrumPoint],
    test: &[SpectrumPoint],
    tolerance: f64,
) -> Result<Vec<ComparisonRow>> {
    if reference.len() != test.len() {
        return Err(Error::LengthMismatch {
            reference: reference.len(),
            test: test.len(),
        });
    }

    reference
        .iter()
        .zip(test)
        .enumerate()
        .map(|(index, (r, t))| {
            if !energies_match(r.energy, t.energy, tolerance) {
                return Err(Error::MismatchedEnergy {
                    index,
                    reference: r.energy,
                    test: t.energy,
                });
            }
            Ok(compare_point(r, t))
        })
        .collect()
}

fn energies_match(a: f64, b: f64, tolerance: f64) -> bool {
    let scale = a.abs().max(b.abs());
    scale == 0.0 || (a - b).abs() <= tolerance * scale
}

fn compare_point(r: &SpectrumPoint, t: &SpectrumPoint) -> ComparisonRow {
    let ratio = t.value / r.value;
    if r.value == 0.0 {
        warn!("Zero reference value at {} MeV", r.energy);
    }

    let combined = r.absolute_error().hypot(t.absolute_error());
    let sigma = if combined > 0.0 {
        (t.value - r.value).abs() / combined
    } else {
        0.0
    };

    ComparisonRow {
        energy: r.energy,
        reference: r.value,
        reference_error: r.error,
        test: t.value,
        test_error: t.error,
        ratio,
        ratio_error: (ratio * r.error.hypot(t.error)).abs(),
        sigma,
    }
}

/// Fraction of rows that agree within `n_sigma` standard deviations
pub fn fraction_within(rows: &[ComparisonRow], n_sigma: f64) -> f64 {
    if rows.is_empty() {
        return 0.0;
    }
    rows.iter().filter(|r| r.sigma <= n_sigma).count() as f64 / rows.len() as f64
}

/// Write comparison rows to a fixed width text table
pub fn write_comparison<P: AsRef<Path>>(rows: &[ComparisonRow], path: P) -> Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);

    writeln!(
        writer,
        "{:>13} {:>13} {:>13} {:>13} {:>13} {:>13} {:>13} {:>9}",
        "energy", "reference", "ref_error", "test", "test_error", "ratio", "ratio_error", "sigma"
    )?;

    for r in rows {
        writeln!(
            writer,
            "{:>13} {:>13} {:>13} {:>13} {:>13} {:>13} {:>13} {:>9.3}",
            r.energy.sci(5, 2),
            r.reference.sci(5, 2),
            r.reference_error.sci(5, 2),
            r.test.sci(5, 2),
            r.test_error.sci(5, 2),
            r.ratio.sci(5, 2),
            r.ratio_error.sci(5, 2),
            r.sigma
        )?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point(energy: f64, value: f64, error: f64) -> SpectrumPoint {
        SpectrumPoint {
            energy,
            value,
            error,
        }
    }

    #[test]
    fn sigma_from_absolute_errors() {
        // absolute errors 0.3 and 0.4 combine to 0.5
        let rows = compare_spectra(&[point(1.0, 3.0, 0.1)], &[point(1.0, 4.0, 0.1)], 0.0).unwrap();
        assert!((rows[0].sigma - 2.0).abs() < 1e-12);
    }

    #[test]
    fn zero_errors_give_zero_sigma() {
        let rows = compare_spectra(&[point(1.0, 3.0, 0.0)], &[point(1.0, 3.0, 0.0)], 0.0).unwrap();
        assert_eq!(rows[0].sigma, 0.0);
        assert_eq!(rows[0].ratio, 1.0);
    }

    #[test]
    fn zero_reference() {
        let rows = compare_spectra(&[point(1.0, 0.0, 0.0)], &[point(1.0, 1.0, 0.1)], 0.0).unwrap();
        assert!(rows[0].ratio.is_infinite());
    }

    #[test]
    fn mismatched_grids() {
        let reference = [point(1.0, 1.0, 0.1), point(2.0, 1.0, 0.1)];
        let test = [point(1.0, 1.0, 0.1), point(2.1, 1.0, 0.1)];

        assert!(matches!(
            compare_spectra(&reference, &test, 1e-3),
            Err(Error::MismatchedEnergy { index: 1, .. })
        ));
        assert!(compare_spectra(&reference, &test, 0.1).is_ok());
        assert!(matches!(
            compare_spectra(&reference, &test[..1], 0.1),
            Err(Error::LengthMismatch {
                reference: 2,
                test: 1
            })
        ));
    }

    #[test]
    fn agreement_fraction() {
        let reference = [point(1.0, 3.0, 0.1), point(2.0, 3.0, 0.1)];
        let test = [point(1.0, 3.1, 0.1), point(2.0, 9.0, 0.01)];
        let rows = compare_spectra(&reference, &test, 0.0).unwrap();
        assert_eq!(fraction_within(&rows, 2.0), 0.5);
        assert_eq!(fraction_within(&[], 2.0), 0.0);
    }
}
