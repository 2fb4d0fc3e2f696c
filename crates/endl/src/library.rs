// crate modules
use crate::error::{Error, Result};

/// Evaluated data libraries available for download
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Library {
    /// Evaluated Atomic Data Library
    Eadl,
    /// Evaluated Photon Data Library
    Epdl,
    /// Evaluated Electron Data Library
    Eedl,
}

impl Library {
    /// Every library, in the usual download order
    pub const ALL: [Library; 3] = [Library::Eadl, Library::Epdl, Library::Eedl];

    /// Lowercase name used for directories and in URLs
    ///
    /// ```rust
    /// # use ftools_endl::Library;
    /// assert_eq!(Library::Eadl.name(), "eadl");
    /// assert_eq!(Library::Epdl.name(), "epdl");
    /// assert_eq!(Library::Eedl.name(), "eedl");
    /// ```
    pub fn name(&self) -> &'static str {
        match self {
            Library::Eadl => "eadl",
            Library::Epdl => "epdl",
            Library::Eedl => "eedl",
        }
    }
}

impl std::str::FromStr for Library {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "eadl" => Ok(Library::Eadl),
            "epdl" => Ok(Library::Epdl),
            "eedl" => Ok(Library::Eedl),
            _ => Err(Error::UnknownLibrary(s.to_string())),
        }
    }
}

impl std::fmt::Display for Library {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn from_names() {
        assert_eq!(Library::from_str("EPDL").unwrap(), Library::Epdl);
        assert_eq!(Library::from_str(" eedl").unwrap(), Library::Eedl);
        assert!(Library::from_str("endf").is_err());
    }
}
