//! Module for working with free gas S(alpha,beta) scatter histogram binaries
//!
#![doc = include_str!("../readme.md")]

// Split into subfiles for development, but anything important is re-exported
mod analysis;
mod error;
mod histogram;
mod reader;
mod writer;

// Inline anything important for a nice public API
#[doc(inline)]
pub use histogram::{Header, ScatterHistogram, HEADER_BYTES, SAMPLE_BYTES};

#[doc(inline)]
pub use reader::{decode_histogram, read_histogram_file};

#[doc(inline)]
pub use writer::{
    encode_histogram, write_ascii, write_ascii_pretty, write_csv, write_histogram_file, write_json,
};

#[doc(inline)]
pub use analysis::{maxwellian_pdf, write_histogram_table, EnergyHistogram, GenerationStats};

#[doc(inline)]
pub use error::{Error, Result};
