//! Dump processed estimator results from FRENSIE HDF5 result stores
//!
#![doc = include_str!("../readme.md")]
//!
//! # Quickstart
//!
//! ```rust, no_run
//! # #[cfg(feature = "hdf5")]
//! # {
//! # use ftools_estimator::{read_estimator, write_ascii, EstimatorRequest};
//! // Energy binned results for cell 5 of estimator 1
//! let request = EstimatorRequest::new(1).entity(5).bins("Energy");
//! let table = read_estimator("./simulation.h5", &request).unwrap();
//!
//! // Write an aligned text table
//! write_ascii(&[table], "./estimator_1.txt").unwrap();
//! # }
//! ```

mod error;
#[cfg(feature = "hdf5")]
mod hdf5_store;
mod path;
mod table;
mod writer;

#[doc(inline)]
pub use error::{Error, Result};

#[doc(inline)]
pub use path::{EstimatorPath, EstimatorRequest, ENTITY_BIN_DATA, ESTIMATOR_ROOT, TOTAL_BIN_DATA};

#[doc(inline)]
pub use table::{EstimatorTable, ProcessedBin};

#[doc(inline)]
pub use writer::{write_ascii, write_csv, write_json};

#[cfg(feature = "hdf5")]
#[doc(inline)]
pub use hdf5_store::{list_entities, list_estimators, read_estimator};
