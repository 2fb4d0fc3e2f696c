//! Result and Error types for the build module

// standard library
use std::path::PathBuf;

/// Type alias for `Result<T, build::Error>`
pub type Result<T> = core::result::Result<T, Error>;

/// The error type for `ftools-build`
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// Underlying file I/O error
    #[error("failure in file I/O")]
    IOError(#[from] std::io::Error),

    /// Path expected to be an existing directory
    #[error("\"{0}\" is not an existing directory")]
    InvalidDirectory(PathBuf),

    /// A real file or directory is in the way of a link
    #[error("\"{0}\" already exists and is not a symbolic link")]
    PathOccupied(PathBuf),

    /// Link names must be a single path component
    #[error("invalid link name \"{0}\"")]
    InvalidLinkName(String),

    /// Symbolic links are only created on unix platforms
    #[error("symbolic links are not supported on this platform")]
    SymlinksUnsupported,
}
