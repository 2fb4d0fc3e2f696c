//! Write operations for ScatterHistogram data

// standard library
use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

// crate modules
use crate::error::Result;
use crate::histogram::{Header, ScatterHistogram};

// ftools modules
use ftools_utils::{f, ValueExt};

// external crates
use itertools::Itertools;
use serde::Serialize;

/// Encode [ScatterHistogram] data back into the binary layout
///
/// The output is byte-for-byte what [read_histogram_file()](crate::read_histogram_file)
/// expects, so any decoded histogram survives a round trip exactly.
///
/// ```rust
/// # use ftools_sab::{decode_histogram, encode_histogram, ScatterHistogram};
/// let histogram = ScatterHistogram::from_generations(vec![vec![1.5, 2.5]]).unwrap();
/// let bytes = encode_histogram(&histogram).unwrap();
///
/// assert_eq!(bytes.len(), 8 + 2 * 8);
/// assert_eq!(decode_histogram(&bytes).unwrap(), histogram);
/// ```
pub fn encode_histogram(histogram: &ScatterHistogram) -> Result<Vec<u8>> {
    let mut bytes = Vec::with_capacity(histogram.header.file_byte_length()?);
    bincode::serialize_into(&mut bytes, &histogram.header)?;
    for sample in &histogram.samples {
        bytes.extend_from_slice(&sample.to_le_bytes());
    }
    Ok(bytes)
}

/// Write [ScatterHistogram] data to a binary file
///
/// ```rust, no_run
/// # use ftools_sab::{write_histogram_file, ScatterHistogram};
/// let histogram = ScatterHistogram::from_generations(vec![vec![1.0, 2.0]]).unwrap();
/// write_histogram_file(&histogram, "./histogram.bin").unwrap();
/// ```
pub fn write_histogram_file<P: AsRef<Path>>(histogram: &ScatterHistogram, path: P) -> Result<()> {
    let mut writer = init_writer(path)?;
    writer.write_all(&encode_histogram(histogram)?)?;
    writer.flush()?;
    Ok(())
}

/// Write raw [ScatterHistogram] data to an ascii text file
///
/// This is a raw conversion with every value converted to ascii and written
/// directly to a text file with no formatting, header counts first. For a
/// more readable text file use [write_ascii_pretty()] instead.
///
/// ```no_run
/// # use ftools_sab::{read_histogram_file, write_ascii};
/// let histogram = read_histogram_file("./histogram.bin").unwrap();
/// write_ascii(&histogram, "./histogram.txt").unwrap();
/// ```
pub fn write_ascii<P: AsRef<Path>>(histogram: &ScatterHistogram, path: P) -> Result<()> {
    let mut writer = init_writer(path)?;

    write!(writer, "{} ", histogram.header.scatter_count)?;
    write!(writer, "{}", histogram.header.sample_count)?;
    for sample in &histogram.samples {
        write!(writer, " {sample:e}")?;
    }
    writeln!(writer)?;

    Ok(())
}

/// Write [ScatterHistogram] data to a human readable text file
///
/// Header metadata first, followed by the samples of every generation
/// wrapped to 80 characters.
///
/// ```no_run
/// # use ftools_sab::{read_histogram_file, write_ascii_pretty};
/// let histogram = read_histogram_file("./histogram.bin").unwrap();
/// write_ascii_pretty(&histogram, "./histogram_pretty.txt").unwrap();
/// ```
pub fn write_ascii_pretty<P: AsRef<Path>>(histogram: &ScatterHistogram, path: P) -> Result<()> {
    let mut writer = init_writer(path)?;

    writeln!(writer, "Scatter generations   : {}", histogram.number_of_generations())?;
    writeln!(writer, "Samples per generation: {}", histogram.number_of_samples())?;
    writeln!(writer, "Total samples         : {}", histogram.samples.len())?;

    for (i, generation) in histogram.generations().iter().enumerate() {
        writeln!(writer, "\nGeneration[{i}] energies (MeV):")?;
        let s = generation.iter().map(|e| e.sci(5, 2)).join(" ");
        writeln!(writer, "{}", textwrap::fill(&s, 80))?;
    }

    Ok(())
}

/// Write [ScatterHistogram] data to a JSON file
///
/// The header counts and a map of generation index to samples.
///
/// ```json
/// {
///   "header": { "scatter_count": 2, "sample_count": 3 },
///   "generations": { "0": [1.0, 2.0, 3.0], "1": [4.0, 5.0, 6.0] }
/// }
/// ```
pub fn write_json<P: AsRef<Path>>(histogram: &ScatterHistogram, path: P) -> Result<()> {
    #[derive(Serialize)]
    struct JsonView {
        header: Header,
        generations: BTreeMap<u32, Vec<f64>>,
    }

    let writer = init_writer(path)?;
    let view = JsonView {
        header: histogram.header,
        generations: histogram.to_map(),
    };
    serde_json::to_writer_pretty(writer, &view)?;
    Ok(())
}

/// Write [ScatterHistogram] data to a CSV file, one column per generation
///
/// ```text
/// sample,generation_0,generation_1
/// 0,1e0,4e0
/// 1,2e0,5e0
/// ```
pub fn write_csv<P: AsRef<Path>>(histogram: &ScatterHistogram, path: P) -> Result<()> {
    let mut writer = csv::Writer::from_writer(init_writer(path)?);
    let generations = histogram.generations();

    let mut heading = vec!["sample".to_string()];
    heading.extend((0..generations.len()).map(|i| f!("generation_{i}")));
    writer.write_record(&heading)?;

    for row in 0..histogram.number_of_samples() {
        let mut record = vec![row.to_string()];
        record.extend(generations.iter().map(|g| f!("{:e}", g[row])));
        writer.write_record(&record)?;
    }

    writer.flush()?;
    Ok(())
}

/// Initialise a writer from anything that can be turned into a path
pub(crate) fn init_writer<P: AsRef<Path>>(path: P) -> Result<BufWriter<File>> {
    let file = File::create(path)?;
    Ok(BufWriter::new(file))
}
