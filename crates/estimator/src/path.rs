//! Dataset locations inside a FRENSIE HDF5 result store

use ftools_utils::f;

/// Root group holding every estimator
pub const ESTIMATOR_ROOT: &str = "Estimators";

/// Dataset name for processed data of a single entity
pub const ENTITY_BIN_DATA: &str = "processed_bin_data";

/// Dataset name for processed data summed over all entities
pub const TOTAL_BIN_DATA: &str = "processed_total_bin_data";

/// Builder for dataset paths
///
/// Every location is relative to the file root and uses the group layout the
/// simulation writes.
///
/// ```rust
/// # use ftools_estimator::EstimatorPath;
/// assert_eq!(
///     EstimatorPath::entity_bin_data(2, 7),
///     "Estimators/2/7/processed_bin_data"
/// );
/// assert_eq!(
///     EstimatorPath::total_bin_data(2),
///     "Estimators/2/processed_total_bin_data"
/// );
/// assert_eq!(EstimatorPath::bin_edges(2, "Energy"), "Estimators/2/Energy");
/// ```
#[derive(Debug)]
pub struct EstimatorPath;

impl EstimatorPath {
    /// Group for a single estimator
    pub fn estimator(estimator_id: u32) -> String {
        f!("{ESTIMATOR_ROOT}/{estimator_id}")
    }

    /// Processed (mean, relative error) data for one entity
    pub fn entity_bin_data(estimator_id: u32, entity_id: u64) -> String {
        f!("{}/{entity_id}/{ENTITY_BIN_DATA}", Self::estimator(estimator_id))
    }

    /// Processed (mean, relative error) data over all entities
    pub fn total_bin_data(estimator_id: u32) -> String {
        f!("{}/{TOTAL_BIN_DATA}", Self::estimator(estimator_id))
    }

    /// Bin edge dataset for a named discretisation, e.g. "Energy"
    pub fn bin_edges(estimator_id: u32, bin_name: &str) -> String {
        f!("{}/{bin_name}", Self::estimator(estimator_id))
    }
}

/// Which processed data to extract from an estimator
///
/// ```rust
/// # use ftools_estimator::{EstimatorRequest, EstimatorPath};
/// let request = EstimatorRequest::new(4).entity(12).bins("Energy");
/// assert_eq!(request.data_location(), EstimatorPath::entity_bin_data(4, 12));
/// assert_eq!(request.edges_location().unwrap(), "Estimators/4/Energy");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EstimatorRequest {
    /// Estimator id
    pub estimator_id: u32,
    /// Entity id (cell, surface, ...), `None` for the total over entities
    pub entity_id: Option<u64>,
    /// Name of the bin edge dataset, if any
    pub bin_name: Option<String>,
}

impl EstimatorRequest {
    /// Request the total bin data of an estimator
    pub fn new(estimator_id: u32) -> Self {
        Self {
            estimator_id,
            entity_id: None,
            bin_name: None,
        }
    }

    /// Restrict to a single entity
    pub fn entity(mut self, entity_id: u64) -> Self {
        self.entity_id = Some(entity_id);
        self
    }

    /// Attach a named set of bin edges
    pub fn bins(mut self, bin_name: &str) -> Self {
        self.bin_name = Some(bin_name.to_string());
        self
    }

    /// Location of the processed data
    pub fn data_location(&self) -> String {
        match self.entity_id {
            Some(entity) => EstimatorPath::entity_bin_data(self.estimator_id, entity),
            None => EstimatorPath::total_bin_data(self.estimator_id),
        }
    }

    /// Location of the bin edges, if requested
    pub fn edges_location(&self) -> Option<String> {
        self.bin_name
            .as_deref()
            .map(|name| EstimatorPath::bin_edges(self.estimator_id, name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn total_request() {
        let request = EstimatorRequest::new(0);
        assert_eq!(request.data_location(), "Estimators/0/processed_total_bin_data");
        assert!(request.edges_location().is_none());
    }
}
