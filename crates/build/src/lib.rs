//! Build tree bootstrap and search path helpers
//!
#![doc = include_str!("../readme.md")]
//!
//! # Quickstart
//!
//! ```rust, no_run
//! # use ftools_build::{dedup_prefix, BuildTree};
//! BuildTree::new("./FRENSIE", "./build", "/opt/frensie")
//!     .init()
//!     .unwrap();
//!
//! let path = std::env::var("PATH").unwrap_or_default();
//! println!("{}", dedup_prefix(&path, ':'));
//! ```

mod error;
mod prefix;
mod tree;

#[doc(inline)]
pub use error::{Error, Result};

#[doc(inline)]
pub use prefix::{dedup_prefix, prepend_unique};

#[doc(inline)]
pub use tree::{replace_link, BuildTree, LinkStatus, ENV_SCRIPT, SEARCH_PATHS};
