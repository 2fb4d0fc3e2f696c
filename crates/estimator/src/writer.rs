//! Write operations for estimator tables

// standard library
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

// crate modules
use crate::error::Result;
use crate::table::EstimatorTable;

// ftools modules
use ftools_utils::f;

/// Write [EstimatorTable]s to an aligned text file
///
/// Every table gets a heading followed by one row per bin. With bin edges the
/// columns are:
///
/// ```text
///         lower         upper          mean     rel_error     abs_error
/// ```
///
/// Without edges the bounds are replaced by the bin index.
pub fn write_ascii<P: AsRef<Path>>(tables: &[EstimatorTable], path: P) -> Result<()> {
    let mut writer = init_writer(path)?;

    for table in tables {
        writeln!(writer, "# {table}")?;
        let bounds = match table.edges {
            Some(_) => f!("{:>13} {:>13}", "lower", "upper"),
            None => f!("{:>13}", "bin"),
        };
        writeln!(
            writer,
            "{bounds} {:>13} {:>13} {:>13}",
            "mean", "rel_error", "abs_error"
        )?;
        for row in table.text_rows() {
            writeln!(writer, "{row}")?;
        }
        writeln!(writer)?;
    }

    Ok(())
}

/// Write [EstimatorTable]s to a single CSV file
///
/// Missing edges or entity ids are left as empty fields.
///
/// ```text
/// estimator,entity,bin,lower,upper,mean,relative_error
/// ```
pub fn write_csv<P: AsRef<Path>>(tables: &[EstimatorTable], path: P) -> Result<()> {
    let mut writer = csv::Writer::from_writer(init_writer(path)?);
    writer.write_record([
        "estimator",
        "entity",
        "bin",
        "lower",
        "upper",
        "mean",
        "relative_error",
    ])?;

    for table in tables {
        let entity = table.entity_id.map(|e| e.to_string()).unwrap_or_default();
        for (i, bin) in table.bins.iter().enumerate() {
            let (lower, upper) = match &table.edges {
                Some(edges) => (f!("{:e}", edges[i]), f!("{:e}", edges[i + 1])),
                None => (String::new(), String::new()),
            };
            writer.write_record([
                table.estimator_id.to_string(),
                entity.clone(),
                i.to_string(),
                lower,
                upper,
                f!("{:e}", bin.mean),
                f!("{:e}", bin.relative_error),
            ])?;
        }
    }

    writer.flush()?;
    Ok(())
}

/// Write [EstimatorTable]s to a JSON file
pub fn write_json<P: AsRef<Path>>(tables: &[EstimatorTable], path: P) -> Result<()> {
    let writer = init_writer(path)?;
    serde_json::to_writer_pretty(writer, tables)?;
    Ok(())
}

/// Initialise a writer from anything that can be turned into a path
fn init_writer<P: AsRef<Path>>(path: P) -> Result<BufWriter<File>> {
    let file = File::create(path)?;
    Ok(BufWriter::new(file))
}
