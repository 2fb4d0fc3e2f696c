//! Result and Error types for the estimator module

/// Type alias for `Result<T, estimator::Error>`
pub type Result<T> = core::result::Result<T, Error>;

#[derive(thiserror::Error, Debug)]
/// The error type for `ftools-estimator`
pub enum Error {
    /// Underlying file I/O error
    #[error("failure in file I/O")]
    Io(#[from] std::io::Error),

    /// Failure to serialise to a JSON string
    #[error("failed serde JSON operation")]
    Json(#[from] serde_json::Error),

    /// Failure to write CSV records
    #[error("failed CSV operation")]
    Csv(#[from] csv::Error),

    /// Failure inside the HDF5 library
    #[cfg(feature = "hdf5")]
    #[error("HDF5 operation failed")]
    Hdf5(#[from] hdf5::Error),

    /// Bin edges must bound every bin
    #[error("expected {expected} bin edges for {bins} bins, found {found}")]
    MismatchedEdges {
        bins: usize,
        expected: usize,
        found: usize,
    },

    /// Group name under `Estimators` that is not an id
    #[error("failed to interpret \"{0}\" as an estimator id")]
    InvalidEstimatorId(String),
}
