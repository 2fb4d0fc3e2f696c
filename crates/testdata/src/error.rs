//! Result and Error types for the testdata module

// standard library
use std::path::PathBuf;

// ftools modules
use ftools_utils::OptionExt;

/// Type alias for `Result<T, testdata::Error>`
pub type Result<T> = core::result::Result<T, Error>;

/// The error type for `ftools-testdata`
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// Underlying file I/O error, including failure to start the generator
    #[error("failure in file I/O")]
    IOError(#[from] std::io::Error),

    /// Generator exited unsuccessfully for a nuclide
    #[error("generation failed for {nuclide} (exit status {})", .code.display())]
    GenerationFailed { nuclide: String, code: Option<i32> },

    /// Generator succeeded but the expected file is not there
    #[error("generator did not write \"{0}\"")]
    MissingOutput(PathBuf),

    /// Nothing to regenerate
    #[error("no fixtures to update")]
    NoFixtures,

    /// Progress bar could not be set up
    #[error("progress bar: {0}")]
    ProgressBar(String),
}
