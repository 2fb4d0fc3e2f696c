//! Common utility for extended `std` types
//!
//! These are left public for convenience.
//!
//! Consistent scientific formatting for result tables, capitalising element
//! symbols, and building energy bin grids are needed by most of the `ftools`
//! crates.

// Alias for the format! macro
pub use std::format as f;

// Modules
mod error;
mod grid;
mod option_ext;
mod slice_ext;
mod string_ext;
mod value_ext;

// Flatten
pub use error::{Error, Result};
pub use grid::{linear_grid, log_grid};
pub use option_ext::OptionExt;
pub use slice_ext::SliceExt;
pub use string_ext::StringExt;
pub use value_ext::ValueExt;
