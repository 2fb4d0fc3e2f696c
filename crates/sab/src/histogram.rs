// standard library
use std::collections::BTreeMap;

// ftools modules
use ftools_utils::f;

// crate modules
use crate::error::{Error, Result};

// external crates
use serde::{Deserialize, Serialize};

/// Size of the two leading u32 counts
pub const HEADER_BYTES: usize = 2 * std::mem::size_of::<u32>();

/// Size of a single energy sample
pub const SAMPLE_BYTES: usize = std::mem::size_of::<f64>();

/// Representation of data in a free gas scatter histogram binary
///
/// The byte layout is very simple. Two counts make up the [Header].
///
/// ```text
/// <scatter_count: u32> <sample_count: u32>
/// ```
///
/// Every sampled energy follows immediately afterwards as one continuous
/// array, stored generation-major as a vector of values (`Vec<f64>`).
///
/// ```text
/// <generation 0, sample 0> <generation 0, sample 1> <generation 0, sample 2> ...
/// <generation 1, sample 0> <generation 1, sample 1> <generation 1, sample 2> ...
/// ... and so on
/// ```
#[derive(Debug, Default, Clone, PartialEq)]
pub struct ScatterHistogram {
    /// The counts given at the start of the file
    pub header: Header,
    /// Every sampled energy, generation-major
    pub samples: Vec<f64>,
}

impl ScatterHistogram {
    /// Build from a list of generations
    ///
    /// Every generation must contain the same number of samples, since the
    /// binary layout only stores a single `sample_count`.
    ///
    /// ```rust
    /// # use ftools_sab::ScatterHistogram;
    /// let histogram = ScatterHistogram::from_generations(vec![
    ///     vec![1.0, 2.0, 3.0],
    ///     vec![4.0, 5.0, 6.0],
    /// ])
    /// .unwrap();
    ///
    /// assert_eq!(histogram.number_of_generations(), 2);
    /// assert_eq!(histogram.generation(1), Some([4.0, 5.0, 6.0].as_slice()));
    /// ```
    pub fn from_generations(generations: Vec<Vec<f64>>) -> Result<Self> {
        let expected = generations.first().map_or(0, Vec::len);

        if let Some((generation, found)) = generations
            .iter()
            .map(Vec::len)
            .enumerate()
            .find(|(_, len)| *len != expected)
        {
            return Err(Error::RaggedGenerations {
                generation,
                expected,
                found,
            });
        }

        let header = Header {
            scatter_count: checked_count("generations", generations.len())?,
            sample_count: checked_count("samples per generation", expected)?,
        };

        Ok(Self {
            header,
            samples: generations.into_iter().flatten().collect(),
        })
    }

    /// Vector of per-generation sample slices, in file order
    pub fn generations(&self) -> Vec<&[f64]> {
        let n = self.number_of_samples();
        if n == 0 {
            return vec![&[] as &[f64]; self.number_of_generations()];
        }
        self.samples.chunks_exact(n).collect()
    }

    /// Samples for a single generation, `None` if out of range
    pub fn generation(&self, index: usize) -> Option<&[f64]> {
        if index >= self.number_of_generations() {
            return None;
        }
        let n = self.number_of_samples();
        self.samples.get(index * n..(index + 1) * n)
    }

    /// Same as [ScatterHistogram::generation()] with an error for bad indices
    pub fn try_generation(&self, index: usize) -> Result<&[f64]> {
        self.generation(index).ok_or(Error::NoSuchGeneration {
            index,
            available: self.number_of_generations(),
        })
    }

    /// Mapping from 0-based generation index to its ordered samples
    ///
    /// This is the shape most plotting scripts expect.
    ///
    /// ```rust
    /// # use ftools_sab::ScatterHistogram;
    /// let histogram = ScatterHistogram::from_generations(vec![vec![0.5], vec![0.25]]).unwrap();
    /// let map = histogram.to_map();
    ///
    /// assert_eq!(map[&0], vec![0.5]);
    /// assert_eq!(map[&1], vec![0.25]);
    /// ```
    pub fn to_map(&self) -> BTreeMap<u32, Vec<f64>> {
        self.generations()
            .into_iter()
            .zip(0u32..)
            .map(|(samples, index)| (index, samples.to_vec()))
            .collect()
    }

    /// Number of scatter generations recorded
    pub fn number_of_generations(&self) -> usize {
        self.header.scatter_count as usize
    }

    /// Number of samples per generation
    pub fn number_of_samples(&self) -> usize {
        self.header.sample_count as usize
    }
}

impl TryFrom<&BTreeMap<u32, Vec<f64>>> for ScatterHistogram {
    type Error = Error;

    /// Rebuild from a generation mapping, keys must run 0..n without gaps
    fn try_from(map: &BTreeMap<u32, Vec<f64>>) -> Result<Self> {
        for (expected, found) in (0u32..).zip(map.keys()) {
            if expected != *found {
                return Err(Error::NonContiguousGenerations {
                    expected,
                    found: *found,
                });
            }
        }
        Self::from_generations(map.values().cloned().collect())
    }
}

impl std::fmt::Display for ScatterHistogram {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let mut s = "ScatterHistogram {\n".to_string();
        s += &f!("    generations: {}\n", self.number_of_generations());
        s += &f!("    samples: {} per generation\n", self.number_of_samples());
        s += &f!(
            "    total: {} ({} bytes)\n}}",
            self.samples.len(),
            HEADER_BYTES + self.samples.len() * SAMPLE_BYTES
        );
        write!(f, "{}", s)
    }
}

/// Counts stored at the start of a [ScatterHistogram] binary
#[derive(Deserialize, Serialize, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Header {
    /// Number of scatter generations recorded
    pub scatter_count: u32,
    /// Number of particle samples per generation
    pub sample_count: u32,
}

impl Header {
    /// Total number of samples expected in the file
    ///
    /// `None` if the product can not be addressed on this platform.
    pub fn number_of_samples(&self) -> Option<usize> {
        (self.scatter_count as usize).checked_mul(self.sample_count as usize)
    }

    /// Expected size of the sample array based on the header counts
    pub fn payload_byte_length(&self) -> Result<usize> {
        self.number_of_samples()
            .and_then(|n| n.checked_mul(SAMPLE_BYTES))
            .ok_or(Error::HeaderOverflow {
                scatter_count: self.scatter_count,
                sample_count: self.sample_count,
            })
    }

    /// Expected size of the whole file, i.e. `8 + scatter * samples * 8`
    pub fn file_byte_length(&self) -> Result<usize> {
        self.payload_byte_length()?
            .checked_add(HEADER_BYTES)
            .ok_or(Error::HeaderOverflow {
                scatter_count: self.scatter_count,
                sample_count: self.sample_count,
            })
    }
}

impl std::fmt::Display for Header {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

fn checked_count(what: &'static str, count: usize) -> Result<u32> {
    u32::try_from(count).map_err(|_| Error::CountOverflow { what, count })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_past_u32_reported_as_given() {
        assert_eq!(checked_count("generations", 7).unwrap(), 7);

        let count = u32::MAX as usize + 1;
        match checked_count("generations", count) {
            Err(Error::CountOverflow { what, count: found }) => {
                assert_eq!(what, "generations");
                assert_eq!(found, count);
            }
            other => panic!("expected a count overflow, got {other:?}"),
        }
    }

    #[test]
    fn ragged_generations_rejected() {
        let result = ScatterHistogram::from_generations(vec![vec![1.0, 2.0], vec![3.0]]);
        assert!(matches!(
            result,
            Err(Error::RaggedGenerations {
                generation: 1,
                expected: 2,
                found: 1
            })
        ));
    }

    #[test]
    fn empty_generations_keep_their_count() {
        let histogram = ScatterHistogram::from_generations(vec![vec![], vec![]]).unwrap();
        assert_eq!(histogram.header.scatter_count, 2);
        assert_eq!(histogram.header.sample_count, 0);
        assert_eq!(histogram.generations(), vec![&[] as &[f64]; 2]);
        assert_eq!(histogram.to_map().len(), 2);
    }

    #[test]
    fn non_contiguous_map() {
        let map = BTreeMap::from([(0, vec![1.0]), (2, vec![2.0])]);
        assert!(matches!(
            ScatterHistogram::try_from(&map),
            Err(Error::NonContiguousGenerations {
                expected: 1,
                found: 2
            })
        ));
    }

    #[test]
    fn header_lengths() {
        let header = Header {
            scatter_count: 2,
            sample_count: 3,
        };
        assert_eq!(header.payload_byte_length().unwrap(), 48);
        assert_eq!(header.file_byte_length().unwrap(), 56);
    }

    #[test]
    fn out_of_range_generation() {
        let histogram = ScatterHistogram::from_generations(vec![vec![1.0]]).unwrap();
        assert!(histogram.generation(1).is_none());
        assert!(matches!(
            histogram.try_generation(3),
            Err(Error::NoSuchGeneration {
                index: 3,
                available: 1
            })
        ));
    }
}
