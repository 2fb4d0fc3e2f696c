//! Result and Error types for the sab module

/// Type alias for `Result<T, sab::Error>`
pub type Result<T> = core::result::Result<T, Error>;

#[derive(thiserror::Error, Debug)]
/// The error type for `ftools-sab`
pub enum Error {
    /// Underlying file I/O error
    #[error("failure in file I/O")]
    IOError(#[from] std::io::Error),

    /// Failure to (de)serialise the binary header
    #[error("failed to (de)serialise binary header")]
    BinaryHeader(#[from] Box<bincode::ErrorKind>),

    /// Failure to serialise to a JSON string
    #[error("failed serde JSON operation")]
    JSONError(#[from] serde_json::Error),

    /// Failure to write CSV records
    #[error("failed CSV operation")]
    CSVError(#[from] csv::Error),

    /// Errors from ftools utilities, e.g. empty or undefined samples
    #[error("utility operation failed: {0}")]
    Utils(#[from] ftools_utils::Error),

    /// Input ended before the length implied by the header
    #[error("truncated input (expected {expected} bytes, found {found})")]
    TruncatedInput { expected: usize, found: usize },

    /// Input continues past the length implied by the header
    #[error("unexpected byte length (expected {expected} bytes, found {found})")]
    UnexpectedByteLength { expected: usize, found: usize },

    /// Header counts describe more data than can be addressed
    #[error("header declares {scatter_count}x{sample_count} samples, too large to address")]
    HeaderOverflow {
        scatter_count: u32,
        sample_count: u32,
    },

    /// More generations or samples than the u32 header fields can record
    #[error("{count} {what} do not fit in a u32 header field")]
    CountOverflow { what: &'static str, count: usize },

    /// Generations of different lengths can not share the fixed layout
    #[error("generation {generation} has {found} samples, expected {expected}")]
    RaggedGenerations {
        generation: usize,
        expected: usize,
        found: usize,
    },

    /// Mapping keys must run 0, 1, 2, ... without gaps
    #[error("generation keys are not contiguous (expected {expected}, found {found})")]
    NonContiguousGenerations { expected: u32, found: u32 },

    /// Requested generation is not in the file
    #[error("generation {index} not found ({available} available)")]
    NoSuchGeneration { index: usize, available: usize },

    /// Histograms tabulated together must share a bin grid
    #[error("histograms do not share the same bin edges")]
    MismatchedBinEdges,
}
