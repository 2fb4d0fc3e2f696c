//! Result and Error types for the columns module

/// Type alias for `Result<T, columns::Error>`
pub type Result<T> = core::result::Result<T, Error>;

/// The error type for `ftools-columns`
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// Underlying file I/O error
    #[error("failure in file I/O")]
    Io(#[from] std::io::Error),

    /// Nothing in the file, not even a header line
    #[error("column file is empty")]
    EmptyFile,

    /// Line that is not a list of numbers
    #[error("failed to parse line {line}: \"{content}\"")]
    Parse { line: usize, content: String },

    /// Every row must have the same number of columns
    #[error("line {line} has {found} columns, expected {expected}")]
    InconsistentColumns {
        line: usize,
        expected: usize,
        found: usize,
    },

    /// Not enough columns for the requested interpretation
    #[error("at least {required} columns required, found {found}")]
    TooFewColumns { required: usize, found: usize },

    /// Spectra to compare must have the same number of points
    #[error("reference has {reference} points but test has {test}")]
    LengthMismatch { reference: usize, test: usize },

    /// Spectra to compare must share an energy grid
    #[error("energy mismatch at point {index} ({reference} vs {test})")]
    MismatchedEnergy {
        index: usize,
        reference: f64,
        test: f64,
    },

    /// Core counts must be positive whole numbers
    #[error("invalid core count {0}")]
    InvalidCoreCount(f64),

    /// Wall times must be positive
    #[error("invalid wall time {0}")]
    InvalidTime(f64),

    /// Need something to summarise
    #[error("no scaling runs provided")]
    NoRuns,
}
