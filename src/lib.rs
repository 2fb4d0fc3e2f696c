//! `ftools` is a modular toolkit replacing the auxiliary scripts around the
//! FRENSIE Monte Carlo particle transport suite
//!
#![doc = include_str!("../readme.md")]
#![deny(missing_docs, missing_debug_implementations)]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]

// Re-exports of toolkit crates.
#[doc(inline)]
pub use ftools_utils as utils;

#[cfg(feature = "build")]
#[cfg_attr(docsrs, doc(cfg(feature = "build")))]
#[doc(inline)]
pub use ftools_build as build;

#[cfg(feature = "columns")]
#[cfg_attr(docsrs, doc(cfg(feature = "columns")))]
#[doc(inline)]
pub use ftools_columns as columns;

#[cfg(feature = "endl")]
#[cfg_attr(docsrs, doc(cfg(feature = "endl")))]
#[doc(inline)]
pub use ftools_endl as endl;

#[cfg(feature = "estimator")]
#[cfg_attr(docsrs, doc(cfg(feature = "estimator")))]
#[doc(inline)]
pub use ftools_estimator as estimator;

#[cfg(feature = "sab")]
#[cfg_attr(docsrs, doc(cfg(feature = "sab")))]
#[doc(inline)]
pub use ftools_sab as sab;

#[cfg(feature = "testdata")]
#[cfg_attr(docsrs, doc(cfg(feature = "testdata")))]
#[doc(inline)]
pub use ftools_testdata as testdata;
