//! Read operations on the HDF5 result store
//!
//! Only compiled with the `hdf5` feature, since it links against the system
//! HDF5 library.

// standard library
use std::path::Path;

// crate modules
use crate::error::{Error, Result};
use crate::path::{EstimatorRequest, ESTIMATOR_ROOT};
use crate::table::EstimatorTable;

// external crates
use hdf5::H5Type;
use log::{debug, info};

/// Compound layout of a stored (mean, relative error) pair
#[derive(H5Type, Debug, Clone, Copy, PartialEq)]
#[repr(C)]
pub(crate) struct PairRecord {
    first: f64,
    second: f64,
}

/// Read the processed data for an estimator request
///
/// Bin edges are attached when the request names a discretisation.
///
/// ```rust, no_run
/// # use ftools_estimator::{read_estimator, EstimatorRequest};
/// let request = EstimatorRequest::new(1).entity(5).bins("Energy");
/// let table = read_estimator("./simulation.h5", &request).unwrap();
/// println!("{table}");
/// ```
pub fn read_estimator<P: AsRef<Path>>(path: P, request: &EstimatorRequest) -> Result<EstimatorTable> {
    info!("Reading {}", path.as_ref().display());
    let file = hdf5::File::open(path)?;

    let location = request.data_location();
    debug!("Processed data from {location}");
    let records = file.dataset(&location)?.read_raw::<PairRecord>()?;
    let table = EstimatorTable::from_pairs(request, records.iter().map(|r| (r.first, r.second)));

    match request.edges_location() {
        Some(location) => {
            debug!("Bin edges from {location}");
            let edges = file.dataset(&location)?.read_raw::<f64>()?;
            table.with_edges(edges)
        }
        None => Ok(table),
    }
}

/// List every estimator id in the result store, ascending
pub fn list_estimators<P: AsRef<Path>>(path: P) -> Result<Vec<u32>> {
    let file = hdf5::File::open(path)?;
    let mut ids = file
        .group(ESTIMATOR_ROOT)?
        .member_names()?
        .into_iter()
        .map(|name| name.parse::<u32>().map_err(|_| Error::InvalidEstimatorId(name)))
        .collect::<Result<Vec<u32>>>()?;
    ids.sort_unstable();
    Ok(ids)
}

/// List the entity ids recorded for an estimator, ascending
///
/// Any member group that is not a number (bin edges, totals) is skipped.
pub fn list_entities<P: AsRef<Path>>(path: P, estimator_id: u32) -> Result<Vec<u64>> {
    let file = hdf5::File::open(path)?;
    let group = file.group(&crate::EstimatorPath::estimator(estimator_id))?;
    let mut ids: Vec<u64> = group
        .member_names()?
        .iter()
        .filter_map(|name| name.parse().ok())
        .collect();
    ids.sort_unstable();
    Ok(ids)
}
