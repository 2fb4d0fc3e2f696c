//! Download script generation for the ENDL data libraries
//!
#![doc = include_str!("../readme.md")]
//!
//! # Quickstart
//!
//! ```rust, no_run
//! # use ftools_endl::{parse_selection, DownloadScript, Library};
//! let elements = parse_selection("1-30, Pb, U").unwrap();
//!
//! DownloadScript::new("https://data.example.org/endl", "./endl_data")
//!     .libraries(&[Library::Epdl, Library::Eedl])
//!     .elements(&elements)
//!     .write_script("./download_endl.sh")
//!     .unwrap();
//! ```

mod element;
mod error;
mod library;
mod parsers;
mod script;
mod selection;

#[doc(inline)]
pub use error::{Error, Result};

#[doc(inline)]
pub use element::{Element, ELEMENTS};

#[doc(inline)]
pub use library::Library;

#[doc(inline)]
pub use script::{DownloadScript, DEFAULT_TEMPLATE};

#[doc(inline)]
pub use selection::parse_selection;
