//! Regeneration of native test data fixtures
//!
#![doc = include_str!("../readme.md")]
//!
//! # Quickstart
//!
//! ```rust, no_run
//! # use ftools_testdata::{update, Fixture, Generator};
//! let generator = Generator::new("aepr_generator", "/data/xs", "aepr")
//!     .notes("Regenerated for the unit tests");
//!
//! if let Err(e) = update(&generator, &Fixture::defaults("./test_files")) {
//!     eprintln!("{e}");
//!     std::process::exit(1);
//! }
//! ```

mod error;
mod fixture;
mod generator;
mod update;

#[doc(inline)]
pub use error::{Error, Result};

#[doc(inline)]
pub use fixture::Fixture;

#[doc(inline)]
pub use generator::{Generator, DEFAULT_SUBDIR};

#[doc(inline)]
pub use update::{update, update_fixture};
