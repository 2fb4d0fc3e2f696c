// standard library
use std::path::{Path, PathBuf};

// ftools modules
use ftools_utils::f;

/// A native data file used by the test suite
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fixture {
    /// Element symbol, used in logs and failure reports
    pub symbol: String,
    /// Atomic number, part of the generated file name
    pub z: u32,
    /// Table alias in `cross_sections.xml`
    pub alias: String,
    /// Fixture file to overwrite with the regenerated data
    pub output: PathBuf,
}

impl Fixture {
    pub fn new<P: AsRef<Path>>(symbol: &str, z: u32, alias: &str, output: P) -> Self {
        Self {
            symbol: symbol.to_string(),
            z,
            alias: alias.to_string(),
            output: output.as_ref().to_path_buf(),
        }
    }

    /// Standard set of fixtures under `test_dir`
    ///
    /// Hydrogen, carbon, aluminium and lead, using the `<Symbol>-Native`
    /// aliases and `test_<symbol>_native.xml` file names.
    ///
    /// ```rust
    /// # use ftools_testdata::Fixture;
    /// let fixtures = Fixture::defaults("./test_files");
    /// let symbols: Vec<&str> = fixtures.iter().map(|f| f.symbol.as_str()).collect();
    ///
    /// assert_eq!(symbols, vec!["H", "C", "Al", "Pb"]);
    /// assert_eq!(fixtures[3].alias, "Pb-Native");
    /// assert!(fixtures[3].output.ends_with("test_pb_native.xml"));
    /// ```
    pub fn defaults<P: AsRef<Path>>(test_dir: P) -> Vec<Self> {
        [("H", 1), ("C", 6), ("Al", 13), ("Pb", 82)]
            .into_iter()
            .map(|(symbol, z)| {
                let file = f!("test_{}_native.xml", symbol.to_lowercase());
                Self::new(
                    symbol,
                    z,
                    &f!("{symbol}-Native"),
                    test_dir.as_ref().join(file),
                )
            })
            .collect()
    }
}

impl std::fmt::Display for Fixture {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{} ({})", self.symbol, self.alias)
    }
}
