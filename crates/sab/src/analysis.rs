//! Summaries and binned distributions of the sampled energies
//!
//! The free gas scripts used to plot the energy distribution after each
//! scatter generation against the Maxwellian it should relax towards. The
//! same numbers are produced here as tables for any plotting tool to use.

// standard library
use std::f64::consts::PI;
use std::path::Path;

// crate modules
use crate::error::{Error, Result};
use crate::histogram::ScatterHistogram;
use crate::writer::init_writer;

// ftools modules
use ftools_utils::{f, SliceExt};

// external crates
use log::{debug, warn};
use rayon::prelude::*;
use serde::Serialize;

/// Basic statistics for the samples of one scatter generation
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GenerationStats {
    /// Generation index
    pub generation: usize,
    /// Number of samples
    pub count: usize,
    /// Mean energy
    pub mean: f64,
    /// Sample standard deviation (n-1), zero for a single sample
    pub std_dev: f64,
    /// Smallest sampled energy
    pub min: f64,
    /// Largest sampled energy
    pub max: f64,
}

impl GenerationStats {
    /// Summarise a single generation
    ///
    /// ```rust
    /// # use ftools_sab::GenerationStats;
    /// let stats = GenerationStats::from_samples(0, &[1.0, 2.0, 3.0]).unwrap();
    /// assert_eq!(stats.mean, 2.0);
    /// assert_eq!(stats.std_dev, 1.0);
    /// assert_eq!((stats.min, stats.max), (1.0, 3.0));
    /// ```
    pub fn from_samples(generation: usize, samples: &[f64]) -> Result<Self> {
        let min = samples.try_min()?;
        let max = samples.try_max()?;

        let count = samples.len();
        let mean = samples.iter().sum::<f64>() / count as f64;
        let std_dev = if count > 1 {
            let ss: f64 = samples.iter().map(|e| (e - mean).powi(2)).sum();
            (ss / (count - 1) as f64).sqrt()
        } else {
            0.0
        };

        Ok(Self {
            generation,
            count,
            mean,
            std_dev,
            min,
            max,
        })
    }
}

impl ScatterHistogram {
    /// Statistics for every generation, computed in parallel
    pub fn statistics(&self) -> Result<Vec<GenerationStats>> {
        self.generations()
            .par_iter()
            .enumerate()
            .map(|(i, samples)| GenerationStats::from_samples(i, samples))
            .collect()
    }

    /// Bin one generation onto the grid given by `edges`
    pub fn energy_histogram(&self, generation: usize, edges: &[f64]) -> Result<EnergyHistogram> {
        let samples = self.try_generation(generation)?;
        let mut histogram = EnergyHistogram::from_samples(samples, edges)?;
        histogram.generation = Some(generation);
        Ok(histogram)
    }
}

/// Sampled energies tallied onto a fixed bin grid
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EnergyHistogram {
    /// Generation the samples came from, if known
    pub generation: Option<usize>,
    /// Ascending bin edges, one more than the number of bins
    pub edges: Vec<f64>,
    /// Number of samples in each bin
    pub counts: Vec<u64>,
    /// Samples that fell outside the grid
    pub outside: u64,
}

impl EnergyHistogram {
    /// Tally `samples` onto the grid given by `edges`
    ///
    /// Bins are `low <= e < high` except the last, which includes its upper
    /// edge.
    ///
    /// ```rust
    /// # use ftools_sab::EnergyHistogram;
    /// let histogram = EnergyHistogram::from_samples(&[0.1, 0.6, 0.7, 2.0], &[0.0, 0.5, 1.0]).unwrap();
    /// assert_eq!(histogram.counts, vec![1, 2]);
    /// assert_eq!(histogram.outside, 1);
    /// assert_eq!(histogram.pdf(), vec![0.5, 1.0]);
    /// ```
    pub fn from_samples(samples: &[f64], edges: &[f64]) -> Result<Self> {
        if edges.len() < 2 {
            return Err(ftools_utils::Error::BelowMinimumSliceLength {
                length: edges.len(),
                minimum_required: 2,
            }
            .into());
        }

        let mut counts = vec![0u64; edges.len() - 1];
        let mut outside = 0;
        for sample in samples {
            match edges.find_bin_exclusive(*sample) {
                Ok(bin) => counts[bin] += 1,
                Err(_) => outside += 1,
            }
        }

        if outside > 0 {
            debug!("{outside} samples outside of the energy grid");
        }

        Ok(Self {
            generation: None,
            edges: edges.to_vec(),
            counts,
            outside,
        })
    }

    /// Total number of samples tallied, including those outside the grid
    pub fn total(&self) -> u64 {
        self.counts.iter().sum::<u64>() + self.outside
    }

    /// Probability density per bin
    ///
    /// Normalised to the total number of samples, so the density integrates to
    /// the fraction of samples inside the grid rather than always to one.
    pub fn pdf(&self) -> Vec<f64> {
        let total = self.total();
        if total == 0 {
            return vec![0.0; self.counts.len()];
        }

        self.counts
            .iter()
            .zip(self.edges.windows(2))
            .map(|(count, bin)| *count as f64 / (total as f64 * (bin[1] - bin[0])))
            .collect()
    }

    /// Bin midpoints
    pub fn midpoints(&self) -> Vec<f64> {
        self.edges.windows(2).map(|b| 0.5 * (b[0] + b[1])).collect()
    }
}

/// Free gas equilibrium energy distribution
///
/// The Maxwellian `2/sqrt(pi) * sqrt(E) / kT^1.5 * exp(-E/kT)` that a neutron
/// population relaxes to after enough scatters in a free gas at temperature
/// `kt` (same units as `energy`).
///
/// ```rust
/// # use ftools_sab::maxwellian_pdf;
/// // peak of the distribution is at E = kT/2
/// let kt = 2.53e-8;
/// assert!(maxwellian_pdf(0.5 * kt, kt) > maxwellian_pdf(0.4 * kt, kt));
/// assert!(maxwellian_pdf(0.5 * kt, kt) > maxwellian_pdf(0.6 * kt, kt));
/// assert_eq!(maxwellian_pdf(-1.0, kt), 0.0);
/// ```
pub fn maxwellian_pdf(energy: f64, kt: f64) -> f64 {
    if energy <= 0.0 || kt <= 0.0 {
        return 0.0;
    }
    2.0 / PI.sqrt() * energy.sqrt() / kt.powf(1.5) * (-energy / kt).exp()
}

/// Write binned distributions as CSV columns for plotting
///
/// Every histogram must share the same bin edges. If `kt` is given, the
/// Maxwellian evaluated at each bin midpoint is included as a final column.
///
/// ```text
/// lower,upper,midpoint,generation_0,generation_5,maxwellian
/// ```
pub fn write_histogram_table<P: AsRef<Path>>(
    path: P,
    histograms: &[EnergyHistogram],
    kt: Option<f64>,
) -> Result<()> {
    let Some(first) = histograms.first() else {
        warn!("No histograms to write");
        return Ok(());
    };

    if histograms.iter().any(|h| h.edges != first.edges) {
        return Err(Error::MismatchedBinEdges);
    }

    let mut writer = csv::Writer::from_writer(init_writer(path)?);

    let mut heading = vec!["lower".to_string(), "upper".into(), "midpoint".into()];
    for (i, histogram) in histograms.iter().enumerate() {
        heading.push(match histogram.generation {
            Some(g) => f!("generation_{g}"),
            None => f!("histogram_{i}"),
        });
    }
    if kt.is_some() {
        heading.push("maxwellian".into());
    }
    writer.write_record(&heading)?;

    let pdfs: Vec<Vec<f64>> = histograms.iter().map(EnergyHistogram::pdf).collect();
    for (bin, midpoint) in first.midpoints().into_iter().enumerate() {
        let mut record = vec![
            f!("{:e}", first.edges[bin]),
            f!("{:e}", first.edges[bin + 1]),
            f!("{midpoint:e}"),
        ];
        record.extend(pdfs.iter().map(|pdf| f!("{:e}", pdf[bin])));
        if let Some(kt) = kt {
            record.push(f!("{:e}", maxwellian_pdf(midpoint, kt)));
        }
        writer.write_record(&record)?;
    }

    writer.flush()?;
    Ok(())
}
