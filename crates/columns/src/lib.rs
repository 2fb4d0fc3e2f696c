//! Spectrum comparisons and core scaling summaries from column files
//!
#![doc = include_str!("../readme.md")]
//!
//! # Quickstart
//!
//! ```rust, no_run
//! # use ftools_columns::{compare_spectra, read_column_file, write_comparison};
//! let mcnp = read_column_file("./mcnp_spectrum.txt").unwrap();
//! let facemc = read_column_file("./facemc_spectrum.txt").unwrap();
//!
//! // Point by point ratios and sigma differences
//! let rows = compare_spectra(
//!     &mcnp.spectrum().unwrap(),
//!     &facemc.spectrum().unwrap(),
//!     1e-6,
//! )
//! .unwrap();
//!
//! write_comparison(&rows, "./comparison.txt").unwrap();
//! ```

mod columns;
mod compare;
mod error;
mod parsers;
mod scaling;

#[doc(inline)]
pub use error::{Error, Result};

#[doc(inline)]
pub use columns::{parse_columns, read_column_file, ColumnFile, SpectrumPoint};

#[doc(inline)]
pub use compare::{compare_spectra, fraction_within, write_comparison, ComparisonRow};

#[doc(inline)]
pub use scaling::{scaling_from_runs, scaling_summary, write_scaling, ScalingPoint};
