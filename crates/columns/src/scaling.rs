//! Parallel scaling summaries from (cores, wall time) timings

// standard library
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

// crate modules
use crate::columns::ColumnFile;
use crate::error::{Error, Result};

// ftools modules
use ftools_utils::ValueExt;

// external crates
use log::debug;
use serde::Serialize;

/// Timing of a single run with derived scaling figures
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScalingPoint {
    /// Number of cores (threads or MPI ranks)
    pub cores: u32,
    /// Wall time of the run
    pub time: f64,
    /// Speedup relative to the smallest core count
    pub speedup: f64,
    /// Speedup per core, relative to the smallest core count
    pub efficiency: f64,
}

/// Scaling summary from a two column (cores, time) file
///
/// Any further columns are ignored.
///
/// ```rust
/// # use ftools_columns::{parse_columns, scaling_summary};
/// let timings = parse_columns("cores time\n4 25.0\n1 100.0\n2 55.0\n").unwrap();
/// let summary = scaling_summary(&timings).unwrap();
///
/// assert_eq!(summary[0].cores, 1);
/// assert_eq!(summary[2].cores, 4);
/// assert_eq!(summary[2].speedup, 4.0);
/// assert_eq!(summary[2].efficiency, 1.0);
/// ```
pub fn scaling_summary(file: &ColumnFile) -> Result<Vec<ScalingPoint>> {
    let cores = file.column(0)?;
    let times = file.column(1)?;

    let runs = cores
        .into_iter()
        .zip(times)
        .map(|(c, t)| Ok((core_count(c)?, t)))
        .collect::<Result<Vec<(u32, f64)>>>()?;

    scaling_from_runs(&runs)
}

/// Scaling summary from (cores, wall time) pairs in any order
pub fn scaling_from_runs(runs: &[(u32, f64)]) -> Result<Vec<ScalingPoint>> {
    let mut runs = runs.to_vec();
    runs.sort_by_key(|(cores, _)| *cores);

    let &(base_cores, base_time) = runs.first().ok_or(Error::NoRuns)?;

    for &(cores, time) in &runs {
        if cores == 0 {
            return Err(Error::InvalidCoreCount(0.0));
        }
        if !(time.is_finite() && time > 0.0) {
            return Err(Error::InvalidTime(time));
        }
    }

    debug!("Scaling relative to {base_cores} cores at {base_time}");
    Ok(runs
        .into_iter()
        .map(|(cores, time)| {
            let speedup = base_time / time;
            ScalingPoint {
                cores,
                time,
                speedup,
                efficiency: speedup * base_cores as f64 / cores as f64,
            }
        })
        .collect())
}

fn core_count(value: f64) -> Result<u32> {
    if value < 1.0 || value.fract() != 0.0 || value > u32::MAX as f64 {
        return Err(Error::InvalidCoreCount(value));
    }
    Ok(value as u32)
}

/// Write a scaling summary to a fixed width text table
pub fn write_scaling<P: AsRef<Path>>(points: &[ScalingPoint], path: P) -> Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);

    writeln!(
        writer,
        "{:>8} {:>13} {:>10} {:>10}",
        "cores", "time", "speedup", "efficiency"
    )?;

    for p in points {
        writeln!(
            writer,
            "{:>8} {:>13} {:>10.4} {:>10.4}",
            p.cores,
            p.time.sci(5, 2),
            p.speedup,
            p.efficiency
        )?;
    }

    Ok(())
}
