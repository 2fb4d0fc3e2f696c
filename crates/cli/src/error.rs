//! Result and Error types for the command line

/// Type alias for `Result<T, cli::CliError>`
pub type Result<T> = core::result::Result<T, CliError>;

/// Every way a subcommand can fail
#[derive(thiserror::Error, Debug)]
pub enum CliError {
    /// Bad arguments, or a request for help/version text
    #[error(transparent)]
    Usage(#[from] clap::Error),

    #[error(transparent)]
    Sab(#[from] ftools_sab::Error),

    #[error(transparent)]
    Estimator(#[from] ftools_estimator::Error),

    #[error(transparent)]
    Columns(#[from] ftools_columns::Error),

    #[error(transparent)]
    Endl(#[from] ftools_endl::Error),

    #[error(transparent)]
    Build(#[from] ftools_build::Error),

    #[error(transparent)]
    Testdata(#[from] ftools_testdata::Error),

    #[error(transparent)]
    Utils(#[from] ftools_utils::Error),

    #[error("failure in file I/O")]
    IOError(#[from] std::io::Error),

    #[error("could not initialise logging")]
    Logger(#[from] log::SetLoggerError),

    /// Argument combination that clap can not check on its own
    #[error("{0}")]
    InvalidArgument(String),
}

impl CliError {
    /// Process exit status for the error
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Usage(e) => e.exit_code(),
            _ => 1,
        }
    }
}
