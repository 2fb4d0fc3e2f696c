//! Result and Error types for the endl module

/// Type alias for `Result<T, endl::Error>`
pub type Result<T> = core::result::Result<T, Error>;

/// The error type for `ftools-endl`
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// Underlying file I/O error
    #[error("failure in file I/O")]
    IOError(#[from] std::io::Error),

    /// Element symbol not in the table
    #[error("unknown element symbol \"{0}\"")]
    UnknownSymbol(String),

    /// Atomic number outside of 1-100
    #[error("atomic number {0} outside of the supported range 1-100")]
    UnknownAtomicNumber(u32),

    /// Range with a lower bound above the upper bound
    #[error("invalid element range {lower}-{upper}")]
    InvalidRange { lower: u32, upper: u32 },

    /// Selection string that could not be parsed
    #[error("could not parse element selection \"{0}\"")]
    InvalidSelection(String),

    /// Library name that is not one of eadl, epdl, eedl
    #[error("unknown library \"{0}\", expected one of eadl, epdl, eedl")]
    UnknownLibrary(String),

    /// Nothing would be downloaded
    #[error("no {0} selected for download")]
    EmptyScript(&'static str),
}
