// ftools modules
use ftools_utils::{f, StringExt};

// crate modules
use crate::error::{Error, Result};

/// Chemical symbols for Z = 1 to 100, indexed by Z - 1
#[rustfmt::skip]
pub const ELEMENTS: [&str; 100] = [
    "H",  "He", "Li", "Be", "B",  "C",  "N",  "O",  "F",  "Ne",
    "Na", "Mg", "Al", "Si", "P",  "S",  "Cl", "Ar", "K",  "Ca",
    "Sc", "Ti", "V",  "Cr", "Mn", "Fe", "Co", "Ni", "Cu", "Zn",
    "Ga", "Ge", "As", "Se", "Br", "Kr", "Rb", "Sr", "Y",  "Zr",
    "Nb", "Mo", "Tc", "Ru", "Rh", "Pd", "Ag", "Cd", "In", "Sn",
    "Sb", "Te", "I",  "Xe", "Cs", "Ba", "La", "Ce", "Pr", "Nd",
    "Pm", "Sm", "Eu", "Gd", "Tb", "Dy", "Ho", "Er", "Tm", "Yb",
    "Lu", "Hf", "Ta", "W",  "Re", "Os", "Ir", "Pt", "Au", "Hg",
    "Tl", "Pb", "Bi", "Po", "At", "Rn", "Fr", "Ra", "Ac", "Th",
    "Pa", "U",  "Np", "Pu", "Am", "Cm", "Bk", "Cf", "Es", "Fm",
];

/// An element covered by the ENDL libraries
///
/// ```rust
/// # use ftools_endl::Element;
/// let iron = Element::from_symbol("fe").unwrap();
///
/// assert_eq!(iron.z, 26);
/// assert_eq!(iron.symbol, "Fe");
/// assert_eq!(iron.za(), "za026000");
/// assert_eq!(iron, Element::from_z(26).unwrap());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Element {
    /// Atomic number
    pub z: u8,
    /// Chemical symbol, e.g. "He"
    pub symbol: &'static str,
}

impl Element {
    /// Look up an element by atomic number
    pub fn from_z(z: u32) -> Result<Self> {
        let index = z
            .checked_sub(1)
            .filter(|i| (*i as usize) < ELEMENTS.len())
            .ok_or(Error::UnknownAtomicNumber(z))?;

        Ok(Self {
            z: z as u8,
            symbol: ELEMENTS[index as usize],
        })
    }

    /// Look up an element by symbol, in any case
    pub fn from_symbol(symbol: &str) -> Result<Self> {
        let symbol = symbol.to_symbol();
        ELEMENTS
            .iter()
            .position(|s| *s == symbol)
            .map(|i| Self {
                z: i as u8 + 1,
                symbol: ELEMENTS[i],
            })
            .ok_or(Error::UnknownSymbol(symbol))
    }

    /// Every element in the table
    pub fn all() -> Vec<Self> {
        ELEMENTS
            .iter()
            .enumerate()
            .map(|(i, symbol)| Self {
                z: i as u8 + 1,
                symbol,
            })
            .collect()
    }

    /// Elemental ZA identifier, `za{Z:03}000`
    pub fn za(&self) -> String {
        f!("za{:03}000", self.z)
    }
}

impl std::fmt::Display for Element {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{} (Z={})", self.symbol, self.z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_bounds() {
        assert_eq!(Element::from_z(1).unwrap().symbol, "H");
        assert_eq!(Element::from_z(100).unwrap().symbol, "Fm");
        assert!(matches!(
            Element::from_z(0),
            Err(Error::UnknownAtomicNumber(0))
        ));
        assert!(matches!(
            Element::from_z(101),
            Err(Error::UnknownAtomicNumber(101))
        ));
    }

    #[test]
    fn symbols_any_case() {
        assert_eq!(Element::from_symbol("PB").unwrap().z, 82);
        assert_eq!(Element::from_symbol(" u ").unwrap().z, 92);
        assert!(matches!(
            Element::from_symbol("Xx"),
            Err(Error::UnknownSymbol(_))
        ));
    }

    #[test]
    fn za_identifiers() {
        assert_eq!(Element::from_z(1).unwrap().za(), "za001000");
        assert_eq!(Element::from_z(100).unwrap().za(), "za100000");
    }

    #[test]
    fn all_in_order() {
        let all = Element::all();
        assert_eq!(all.len(), 100);
        assert!(all.windows(2).all(|w| w[0].z + 1 == w[1].z));
        assert_eq!(all[5].to_string(), "C (Z=6)");
    }
}
