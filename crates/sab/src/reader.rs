//! Read operations for free gas scatter histogram binaries
//!
//! The file is binary with two u32 counts followed by every sampled energy as
//! a f64, all in little endian byte-ordering. The length implied by the header
//! is checked before anything is decoded.

// standard library
use std::path::Path;

// crate modules
use crate::error::{Error, Result};
use crate::histogram::{Header, ScatterHistogram, HEADER_BYTES, SAMPLE_BYTES};

// external crates
use bincode::deserialize;
use log::{debug, trace};

/// Deserialise a binary scatter histogram file
///
/// Returns a Result containing a [ScatterHistogram] with every generation
/// extracted from the file at `path`. The file is read into memory in one go
/// and closed before decoding.
///
/// ```rust, no_run
/// # use ftools_sab::read_histogram_file;
/// // Read the histogram dump from a free gas run
/// let histogram = read_histogram_file("./free_gas_sab_histogram.bin").unwrap();
///
/// // Print a summary of the data
/// println!("{histogram}");
/// ```
pub fn read_histogram_file<P: AsRef<Path>>(path: P) -> Result<ScatterHistogram> {
    debug!("Reading {}", path.as_ref().display());
    let bytes = std::fs::read(path)?;
    decode_histogram(&bytes)
}

/// Deserialise a scatter histogram already held in memory
///
/// ```rust
/// # use ftools_sab::decode_histogram;
/// let mut bytes = Vec::new();
/// bytes.extend(1u32.to_le_bytes());
/// bytes.extend(2u32.to_le_bytes());
/// bytes.extend(0.5f64.to_le_bytes());
/// bytes.extend(0.25f64.to_le_bytes());
///
/// let histogram = decode_histogram(&bytes).unwrap();
/// assert_eq!(histogram.to_map()[&0], vec![0.5, 0.25]);
/// ```
pub fn decode_histogram(bytes: &[u8]) -> Result<ScatterHistogram> {
    let header = parse_header(bytes)?;
    debug!("Header: {header}");

    let samples = parse_samples(&bytes[HEADER_BYTES..], &header)?;
    trace!("Decoded {} samples", samples.len());

    Ok(ScatterHistogram { header, samples })
}

/// Deserialise the two leading counts
fn parse_header(bytes: &[u8]) -> Result<Header> {
    if bytes.len() < HEADER_BYTES {
        return Err(Error::TruncatedInput {
            expected: HEADER_BYTES,
            found: bytes.len(),
        });
    }

    Ok(deserialize(&bytes[..HEADER_BYTES])?)
}

/// Deserialise the payload into a vector of sample values
fn parse_samples(payload: &[u8], header: &Header) -> Result<Vec<f64>> {
    let expected = header.payload_byte_length()?;

    // report lengths for the whole file, that is what users can check
    if payload.len() < expected {
        return Err(Error::TruncatedInput {
            expected: expected + HEADER_BYTES,
            found: payload.len() + HEADER_BYTES,
        });
    } else if payload.len() > expected {
        return Err(Error::UnexpectedByteLength {
            expected: expected + HEADER_BYTES,
            found: payload.len() + HEADER_BYTES,
        });
    }

    let mut buffer = [0u8; SAMPLE_BYTES];
    Ok(payload
        .chunks_exact(SAMPLE_BYTES)
        .map(|chunk| {
            buffer.copy_from_slice(chunk);
            f64::from_le_bytes(buffer)
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn header_bytes(scatter_count: u32, sample_count: u32) -> Vec<u8> {
        let mut bytes = scatter_count.to_le_bytes().to_vec();
        bytes.extend(sample_count.to_le_bytes());
        bytes
    }

    #[test]
    fn header_uses_bincode_layout() {
        let header = parse_header(&header_bytes(7, 11)).unwrap();
        assert_eq!(
            header,
            Header {
                scatter_count: 7,
                sample_count: 11
            }
        );
    }

    #[test]
    fn short_header() {
        assert!(matches!(
            decode_histogram(&[0u8; 5]),
            Err(Error::TruncatedInput {
                expected: 8,
                found: 5
            })
        ));
    }

    #[test]
    fn trailing_bytes() {
        let mut bytes = header_bytes(1, 1);
        bytes.extend(1.0f64.to_le_bytes());
        bytes.push(0);
        assert!(matches!(
            decode_histogram(&bytes),
            Err(Error::UnexpectedByteLength {
                expected: 16,
                found: 17
            })
        ));
    }

    #[test]
    fn zero_samples_per_generation() {
        let histogram = decode_histogram(&header_bytes(3, 0)).unwrap();
        assert_eq!(histogram.number_of_generations(), 3);
        assert!(histogram.to_map().values().all(Vec::is_empty));
    }
}
