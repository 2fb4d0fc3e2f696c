//! Command line interface to the FRENSIE auxiliary tools
//!
#![doc = include_str!("../readme.md")]

mod commands;
mod error;

#[doc(inline)]
pub use error::{CliError, Result};

// standard library
use std::io::Write;

// external crates
use clap::{ArgAction, Parser, Subcommand};
use log::error;

/// Post-processing, data acquisition and build support for FRENSIE
#[derive(Parser, Debug)]
#[command(name = "ftools", version, about, arg_required_else_help = true)]
pub struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Verbose logging (-v, -vv)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Silence all log output
    #[arg(short, long, global = true)]
    quiet: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Convert and summarise a binary scatter histogram dump
    Sab(commands::SabArgs),

    /// Dump processed estimator data from an HDF5 result store
    #[cfg(feature = "hdf5")]
    Estimator(commands::EstimatorArgs),

    /// Compare a test spectrum against a reference spectrum
    Compare(commands::CompareArgs),

    /// Speedup and efficiency from (cores, time) timings
    Scaling(commands::ScalingArgs),

    /// Write a download script for the ENDL data libraries
    Endl(commands::EndlArgs),

    /// Set up an out-of-source build directory
    InitBuild(commands::InitBuildArgs),

    /// Remove empty and repeated entries from a search path
    DedupEnv(commands::DedupEnvArgs),

    /// Regenerate native test data fixtures
    UpdateTestdata(commands::UpdateTestdataArgs),
}

/// Parse the process arguments, set up logging and run
///
/// Returns the exit status for the process.
pub fn run_from_env() -> i32 {
    let cli = match parse_args(std::env::args_os(), &mut std::io::stdout()) {
        Ok(cli) => cli,
        Err(code) => return code,
    };

    if let Err(e) = init_logging(&cli) {
        eprintln!("{e}");
        return e.exit_code();
    }

    let quiet = cli.quiet;
    match dispatch(cli.command) {
        Ok(()) => 0,
        Err(e) if quiet => {
            eprintln!("{e}");
            e.exit_code()
        }
        Err(e) => {
            report(&e);
            e.exit_code()
        }
    }
}

/// Run with explicit arguments, excluding the program name
///
/// Logging is left alone so this can be called any number of times.
pub fn run<I, S>(args: I) -> Result<()>
where
    I: IntoIterator<Item = S>,
    S: Into<std::ffi::OsString>,
{
    let full_args = std::iter::once(std::ffi::OsString::from("ftools"))
        .chain(args.into_iter().map(Into::into));
    let cli = Cli::try_parse_from(full_args)?;
    dispatch(cli.command)
}

/// Parse the full argument list, program name included
///
/// Usage errors are written to `out` and the exit status is returned.
/// Help and version requests land here too, with exit status 0.
fn parse_args<I, S, W>(args: I, out: &mut W) -> std::result::Result<Cli, i32>
where
    I: IntoIterator<Item = S>,
    S: Into<std::ffi::OsString> + Clone,
    W: Write,
{
    Cli::try_parse_from(args).map_err(|e| {
        if e.use_stderr() {
            let _ = write!(out, "{}", e.render());
        } else {
            let _ = e.print();
        }
        e.exit_code()
    })
}

fn dispatch(command: Command) -> Result<()> {
    match command {
        Command::Sab(args) => commands::sab(args),
        #[cfg(feature = "hdf5")]
        Command::Estimator(args) => commands::estimator(args),
        Command::Compare(args) => commands::compare(args),
        Command::Scaling(args) => commands::scaling(args),
        Command::Endl(args) => commands::endl(args),
        Command::InitBuild(args) => commands::init_build(args),
        Command::DedupEnv(args) => commands::dedup_env(args),
        Command::UpdateTestdata(args) => commands::update_testdata(args),
    }
}

fn init_logging(cli: &Cli) -> Result<()> {
    stderrlog::new()
        .modules(vec![
            module_path!(),
            "ftools_build",
            "ftools_columns",
            "ftools_endl",
            "ftools_estimator",
            "ftools_sab",
            "ftools_testdata",
        ])
        .quiet(cli.quiet)
        .verbosity(cli.verbose as usize + 2)
        .show_module_names(cli.verbose > 1)
        .init()?;
    Ok(())
}

/// Log the error and the chain of causes behind it
fn report(e: &CliError) {
    error!("{e}");
    let mut source = std::error::Error::source(e);
    while let Some(cause) = source {
        error!("  caused by: {cause}");
        source = cause.source();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn usage_errors_on_output() {
        let mut out = Vec::new();
        let code = parse_args(["ftools", "init-build"], &mut out).unwrap_err();
        let text = String::from_utf8(out).unwrap();

        assert_eq!(code, 2);
        assert!(text.contains("Usage:"));
        assert!(text.contains("init-build"));
    }

    #[test]
    fn valid_arguments_write_nothing() {
        let mut out = Vec::new();
        let cli = parse_args(["ftools", "-vv", "dedup-env", "/a:/b"], &mut out).unwrap();

        assert_eq!(cli.verbose, 2);
        assert!(out.is_empty());
    }
}
