// standard library
use std::path::Path;

// crate modules
use crate::error::{Error, Result};
use crate::parsers::row_of_f64;

// external crates
use log::{debug, trace};
use serde::Serialize;

/// Whitespace delimited numerical columns with a single header line
///
/// This is the format of the MCNP and FaceMC spectrum summaries and the core
/// scaling timings. The header line is kept verbatim but never interpreted.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct ColumnFile {
    /// First line of the file
    pub header: String,
    /// Every data row, all with the same number of columns
    pub rows: Vec<Vec<f64>>,
}

impl ColumnFile {
    /// Number of columns in every row, zero for an empty table
    pub fn n_columns(&self) -> usize {
        self.rows.first().map_or(0, Vec::len)
    }

    /// Copy of a single column
    pub fn column(&self, index: usize) -> Result<Vec<f64>> {
        self.require_columns(index + 1)?;
        Ok(self.rows.iter().map(|row| row[index]).collect())
    }

    /// Interpret the first three columns as energy, value and relative error
    ///
    /// ```rust
    /// # use ftools_columns::parse_columns;
    /// let file = parse_columns("energy tally error\n1.0 5.0 0.1\n2.0 4.0 0.2\n").unwrap();
    /// let spectrum = file.spectrum().unwrap();
    ///
    /// assert_eq!(spectrum.len(), 2);
    /// assert_eq!(spectrum[1].energy, 2.0);
    /// assert_eq!(spectrum[1].value, 4.0);
    /// assert_eq!(spectrum[1].error, 0.2);
    /// ```
    pub fn spectrum(&self) -> Result<Vec<SpectrumPoint>> {
        self.require_columns(3)?;
        Ok(self
            .rows
            .iter()
            .map(|row| SpectrumPoint {
                energy: row[0],
                value: row[1],
                error: row[2],
            })
            .collect())
    }

    fn require_columns(&self, required: usize) -> Result<()> {
        let found = self.n_columns();
        if found < required {
            return Err(Error::TooFewColumns { required, found });
        }
        Ok(())
    }
}

/// A single point of a tallied spectrum
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SpectrumPoint {
    /// Bin energy (MeV)
    pub energy: f64,
    /// Tally value
    pub value: f64,
    /// Relative error on the tally value
    pub error: f64,
}

impl SpectrumPoint {
    /// Absolute error on the value
    pub fn absolute_error(&self) -> f64 {
        (self.value * self.error).abs()
    }
}

/// Read a column file from disk
///
/// The `path` may be a [&str], [String], [Path], etc..
///
/// ```rust, no_run
/// # use ftools_columns::read_column_file;
/// let mcnp = read_column_file("./mcnp_spectrum.txt").unwrap();
/// println!("{} rows", mcnp.rows.len());
/// ```
pub fn read_column_file<P: AsRef<Path>>(path: P) -> Result<ColumnFile> {
    debug!("Reading {}", path.as_ref().display());
    let text = std::fs::read_to_string(path)?;
    parse_columns(&text)
}

/// Parse column file content held in memory
///
/// The first line is skipped as a header, blank lines are ignored, and every
/// other line must hold the same number of values.
///
/// ```rust
/// # use ftools_columns::parse_columns;
/// let file = parse_columns("# cores time\n1 100.0\n\n2 51.0\n").unwrap();
/// assert_eq!(file.header, "# cores time");
/// assert_eq!(file.rows, vec![vec![1.0, 100.0], vec![2.0, 51.0]]);
///
/// // A ragged table is an error
/// assert!(parse_columns("header\n1 2\n3\n").is_err());
/// ```
pub fn parse_columns(text: &str) -> Result<ColumnFile> {
    let mut lines = text.lines().enumerate();

    let (_, header) = lines.next().ok_or(Error::EmptyFile)?;
    let mut file = ColumnFile {
        header: header.trim_end().to_string(),
        rows: Vec::new(),
    };

    for (index, line) in lines {
        if line.trim().is_empty() {
            continue;
        }

        // report 1-based line numbers, like any text editor
        let line_number = index + 1;
        let (_, row) = row_of_f64(line).map_err(|_| Error::Parse {
            line: line_number,
            content: line.to_string(),
        })?;

        let expected = file.n_columns();
        if expected != 0 && row.len() != expected {
            return Err(Error::InconsistentColumns {
                line: line_number,
                expected,
                found: row.len(),
            });
        }

        trace!("line {line_number}: {row:?}");
        file.rows.push(row);
    }

    debug!("{} rows of {} columns", file.rows.len(), file.n_columns());
    Ok(file)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_only() {
        let file = parse_columns("Energy Flux Error\n").unwrap();
        assert!(file.rows.is_empty());
        assert_eq!(file.n_columns(), 0);
    }

    #[test]
    fn empty_text() {
        assert!(matches!(parse_columns(""), Err(Error::EmptyFile)));
    }

    #[test]
    fn reports_line_numbers() {
        let text = "header\n1 2 3\n1 2 x\n";
        match parse_columns(text) {
            Err(Error::Parse { line, content }) => {
                assert_eq!(line, 3);
                assert_eq!(content, "1 2 x");
            }
            other => panic!("unexpected result {other:?}"),
        }
    }

    #[test]
    fn spectrum_needs_three_columns() {
        let file = parse_columns("header\n1 2\n").unwrap();
        assert!(matches!(
            file.spectrum(),
            Err(Error::TooFewColumns {
                required: 3,
                found: 2
            })
        ));
        assert_eq!(file.column(1).unwrap(), vec![2.0]);
        assert!(file.column(2).is_err());
    }
}
