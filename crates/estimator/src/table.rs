// ftools modules
use ftools_utils::{f, OptionExt, ValueExt};

// crate modules
use crate::error::{Error, Result};
use crate::path::EstimatorRequest;

// external crates
use serde::Serialize;

/// Processed result for a single estimator bin
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ProcessedBin {
    /// Estimator mean
    pub mean: f64,
    /// Relative error on the mean
    pub relative_error: f64,
}

impl ProcessedBin {
    /// Absolute error, `mean * relative_error`
    pub fn absolute_error(&self) -> f64 {
        (self.mean * self.relative_error).abs()
    }
}

/// Processed results for one estimator and, optionally, one entity
///
/// The HDF5 store keeps processed data as (mean, relative error) pairs. An optional set of bin edges can be attached
/// for anything discretised in energy, cosine, time, etc.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EstimatorTable {
    /// Estimator id
    pub estimator_id: u32,
    /// Entity id, `None` for the total over all entities
    pub entity_id: Option<u64>,
    /// Name of the discretisation the edges belong to
    pub bin_name: Option<String>,
    /// Bin edges, one more than the number of bins
    pub edges: Option<Vec<f64>>,
    /// Processed data for every bin
    pub bins: Vec<ProcessedBin>,
}

impl EstimatorTable {
    /// Build a table from (mean, relative error) pairs in bin order
    ///
    /// ```rust
    /// # use ftools_estimator::{EstimatorRequest, EstimatorTable};
    /// let request = EstimatorRequest::new(1);
    /// let table = EstimatorTable::from_pairs(&request, [(1.0, 0.1), (2.0, 0.05)]);
    ///
    /// assert_eq!(table.bins.len(), 2);
    /// assert_eq!(table.bins[1].mean, 2.0);
    /// assert_eq!(table.bins[1].relative_error, 0.05);
    /// ```
    pub fn from_pairs<I>(request: &EstimatorRequest, pairs: I) -> Self
    where
        I: IntoIterator<Item = (f64, f64)>,
    {
        let bins = pairs
            .into_iter()
            .map(|(mean, relative_error)| ProcessedBin {
                mean,
                relative_error,
            })
            .collect();

        Self {
            estimator_id: request.estimator_id,
            entity_id: request.entity_id,
            bin_name: request.bin_name.clone(),
            edges: None,
            bins,
        }
    }

    /// Attach bin edges, checking there is one more edge than bins
    pub fn with_edges(mut self, edges: Vec<f64>) -> Result<Self> {
        let expected = self.bins.len() + 1;
        if edges.len() != expected {
            return Err(Error::MismatchedEdges {
                bins: self.bins.len(),
                expected,
                found: edges.len(),
            });
        }
        self.edges = Some(edges);
        Ok(self)
    }

    /// Short label for logs and table headings
    pub fn label(&self) -> String {
        f!(
            "estimator {} (entity {})",
            self.estimator_id,
            self.entity_id.display()
        )
    }

    /// Sum of the bin means
    pub fn total(&self) -> f64 {
        self.bins.iter().map(|b| b.mean).sum()
    }

    /// Rows of formatted text, used by the ascii writer
    pub(crate) fn text_rows(&self) -> Vec<String> {
        self.bins
            .iter()
            .enumerate()
            .map(|(i, bin)| {
                let bounds = match &self.edges {
                    Some(edges) => f!("{:>13} {:>13}", edges[i].sci(5, 2), edges[i + 1].sci(5, 2)),
                    None => f!("{i:>13}"),
                };
                f!(
                    "{bounds} {:>13} {:>13} {:>13}",
                    bin.mean.sci(5, 2),
                    bin.relative_error.sci(5, 2),
                    bin.absolute_error().sci(5, 2)
                )
            })
            .collect()
    }
}

impl std::fmt::Display for EstimatorTable {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{}: {} bins over {}, total {}",
            self.label(),
            self.bins.len(),
            self.bin_name.display(),
            self.total().sci(5, 2)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> EstimatorTable {
        let request = EstimatorRequest::new(3).entity(9).bins("Energy");
        EstimatorTable::from_pairs(&request, [(2.0, 0.5), (4.0, 0.25)])
    }

    #[test]
    fn edges_checked() {
        assert!(matches!(
            table().with_edges(vec![0.0, 1.0]),
            Err(Error::MismatchedEdges {
                bins: 2,
                expected: 3,
                found: 2
            })
        ));
        assert!(table().with_edges(vec![0.0, 1.0, 20.0]).is_ok());
    }

    #[test]
    fn absolute_errors() {
        let t = table();
        assert_eq!(t.bins[0].absolute_error(), 1.0);
        assert_eq!(t.bins[1].absolute_error(), 1.0);
        assert_eq!(t.total(), 6.0);
    }

    #[test]
    fn rows_with_and_without_edges() {
        let plain = table().text_rows();
        assert_eq!(plain.len(), 2);
        assert!(plain[0].trim_start().starts_with('0'));

        let edged = table().with_edges(vec![0.0, 1.0, 20.0]).unwrap().text_rows();
        assert!(edged[1].contains("1.00000e+00"));
        assert!(edged[1].contains("2.00000e+01"));
    }

    #[test]
    fn display_summary() {
        assert_eq!(
            table().to_string(),
            "estimator 3 (entity 9): 2 bins over Energy, total 6.00000e+00"
        );
    }
}
