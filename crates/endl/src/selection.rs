// standard library
use std::collections::BTreeSet;

// crate modules
use crate::element::Element;
use crate::error::{Error, Result};
use crate::parsers::{selection, Term};

// external crates
use log::debug;

/// Parse an element selection into an ordered list of unique elements
///
/// Terms are separated by commas and may be `all`, an atomic number, an
/// inclusive range of atomic numbers, or a chemical symbol in any case.
///
/// ```rust
/// # use ftools_endl::parse_selection;
/// let elements = parse_selection("pb, 1-2, He, 26").unwrap();
/// let symbols: Vec<&str> = elements.iter().map(|e| e.symbol).collect();
///
/// assert_eq!(symbols, vec!["H", "He", "Fe", "Pb"]);
/// assert_eq!(parse_selection("all").unwrap().len(), 100);
/// ```
pub fn parse_selection(text: &str) -> Result<Vec<Element>> {
    let (_, terms) =
        selection(text).map_err(|_| Error::InvalidSelection(text.trim().to_string()))?;

    let mut elements = BTreeSet::new();
    for term in terms {
        match term {
            Term::All => elements.extend(Element::all()),
            Term::Z(z) => {
                elements.insert(Element::from_z(z)?);
            }
            Term::Range(lower, upper) => {
                if lower > upper {
                    return Err(Error::InvalidRange { lower, upper });
                }
                for z in lower..=upper {
                    elements.insert(Element::from_z(z)?);
                }
            }
            Term::Symbol(symbol) => {
                elements.insert(Element::from_symbol(symbol)?);
            }
        }
    }

    debug!("Selected {} elements from \"{}\"", elements.len(), text.trim());
    Ok(elements.into_iter().collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicates_removed() {
        let elements = parse_selection("H,1,h,1-1").unwrap();
        assert_eq!(elements.len(), 1);
        assert_eq!(elements[0].z, 1);
    }

    #[test]
    fn bad_ranges() {
        assert!(matches!(
            parse_selection("10-1"),
            Err(Error::InvalidRange {
                lower: 10,
                upper: 1
            })
        ));
        assert!(matches!(
            parse_selection("95-101"),
            Err(Error::UnknownAtomicNumber(101))
        ));
        assert!(matches!(
            parse_selection("H;He"),
            Err(Error::InvalidSelection(_))
        ));
    }
}
