// standard library
use std::fmt::Write as FmtWrite;
use std::path::{Path, PathBuf};

// crate modules
use crate::element::Element;
use crate::error::{Error, Result};
use crate::library::Library;

// ftools modules
use ftools_utils::f;

// external crates
use itertools::Itertools;
use log::{debug, info};

/// Default remote file layout, one directory per library
pub const DEFAULT_TEMPLATE: &str = "{library}/{za}";

/// A `wget` download script for a set of libraries and elements
///
/// Each remote file is found at `<base_url>/<template>`, with the template
/// tokens substituted for every library and element. Files are saved to
/// `<output_dir>/<library>/<za>`.
///
/// ```rust
/// # use ftools_endl::{parse_selection, DownloadScript, Library};
/// let script = DownloadScript::new("https://data.example.org/endl", "./endl")
///     .libraries(&[Library::Eadl])
///     .elements(&parse_selection("H").unwrap());
///
/// let text = script.render().unwrap();
/// assert!(text.contains(
///     "wget -q -O './endl/eadl/za001000' 'https://data.example.org/endl/eadl/za001000'"
/// ));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct DownloadScript {
    /// Root of the remote archive
    pub base_url: String,
    /// Remote path relative to `base_url`, see [DEFAULT_TEMPLATE]
    pub template: String,
    /// Local directory for the downloaded libraries
    pub output_dir: PathBuf,
    /// Libraries to fetch
    pub libraries: Vec<Library>,
    /// Elements to fetch from every library
    pub elements: Vec<Element>,
}

impl DownloadScript {
    /// All three libraries for every element, using the default template
    pub fn new<P: AsRef<Path>>(base_url: &str, output_dir: P) -> Self {
        Self {
            base_url: base_url.to_string(),
            template: DEFAULT_TEMPLATE.to_string(),
            output_dir: output_dir.as_ref().to_path_buf(),
            libraries: Library::ALL.to_vec(),
            elements: Element::all(),
        }
    }

    /// Replace the URL template
    pub fn template(mut self, template: &str) -> Self {
        self.template = template.to_string();
        self
    }

    /// Replace the set of libraries
    pub fn libraries(mut self, libraries: &[Library]) -> Self {
        self.libraries = libraries.iter().copied().unique().collect();
        self
    }

    /// Replace the set of elements
    pub fn elements(mut self, elements: &[Element]) -> Self {
        self.elements = elements.to_vec();
        self
    }

    /// Remote URL for one library and element
    ///
    /// ```rust
    /// # use ftools_endl::{DownloadScript, Element, Library};
    /// let script = DownloadScript::new("https://host/data/", "out")
    ///     .template("{library}/{symbol}_{z}.{za}.dat");
    /// let lead = Element::from_symbol("Pb").unwrap();
    ///
    /// assert_eq!(
    ///     script.url(Library::Eedl, &lead),
    ///     "https://host/data/eedl/Pb_82.za082000.dat"
    /// );
    /// ```
    pub fn url(&self, library: Library, element: &Element) -> String {
        let remote = self
            .template
            .replace("{library}", library.name())
            .replace("{za}", &element.za())
            .replace("{symbol}", element.symbol)
            .replace("{z}", &element.z.to_string());
        f!("{}/{remote}", self.base_url.trim_end_matches('/'))
    }

    /// Local destination for one library and element
    pub fn destination(&self, library: Library, element: &Element) -> PathBuf {
        self.output_dir.join(library.name()).join(element.za())
    }

    /// Total number of files the script will fetch
    pub fn n_files(&self) -> usize {
        self.libraries.len() * self.elements.len()
    }

    /// Render the full bash script
    pub fn render(&self) -> Result<String> {
        if self.libraries.is_empty() {
            return Err(Error::EmptyScript("libraries"));
        }
        if self.elements.is_empty() {
            return Err(Error::EmptyScript("elements"));
        }

        let mut script = String::new();
        let _ = writeln!(script, "#!/bin/bash");
        let _ = writeln!(
            script,
            "# Download {} for {} elements",
            self.libraries.iter().map(|l| l.name().to_uppercase()).join(", "),
            self.elements.len()
        );
        let _ = writeln!(script, "set -e\n");

        for library in &self.libraries {
            let directory = self.output_dir.join(library.name());
            let _ = writeln!(script, "mkdir -p {}", quote(&directory.display().to_string()));
        }

        for library in &self.libraries {
            let _ = writeln!(script, "\n# {}", library.name().to_uppercase());
            for element in &self.elements {
                let _ = writeln!(
                    script,
                    "wget -q -O {} {}",
                    quote(&self.destination(*library, element).display().to_string()),
                    quote(&self.url(*library, element))
                );
            }
        }

        debug!("Rendered {} downloads", self.n_files());
        Ok(script)
    }

    /// Render and write the script, executable on unix systems
    pub fn write_script<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        std::fs::write(path, self.render()?)?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let mut permissions = std::fs::metadata(path)?.permissions();
            permissions.set_mode(permissions.mode() | 0o755);
            std::fs::set_permissions(path, permissions)?;
        }

        info!("Wrote {} downloads to {}", self.n_files(), path.display());
        Ok(())
    }
}

/// Single quote a word for bash, nothing inside is expanded
fn quote(word: &str) -> String {
    f!("'{}'", word.replace('\'', r"'\''"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn script() -> DownloadScript {
        DownloadScript::new("https://host/endl", "data")
            .libraries(&[Library::Epdl, Library::Eadl, Library::Epdl])
            .elements(&[Element::from_z(1).unwrap(), Element::from_z(2).unwrap()])
    }

    #[test]
    fn duplicate_libraries_dropped() {
        assert_eq!(script().libraries, vec![Library::Epdl, Library::Eadl]);
        assert_eq!(script().n_files(), 4);
    }

    #[test]
    fn template_kept_verbatim() {
        let s = script().template("pub/{library}/{za}?raw=1&z={z}");
        assert_eq!(
            s.url(Library::Eadl, &Element::from_z(2).unwrap()),
            "https://host/endl/pub/eadl/za002000?raw=1&z=2"
        );
    }

    #[test]
    fn shell_words_not_expanded() {
        assert_eq!(quote("plain"), "'plain'");
        assert_eq!(quote("it's"), r"'it'\''s'");

        let text = DownloadScript::new("https://host/$HOME/`id`", "data")
            .template("{library}/{za}'s")
            .libraries(&[Library::Eadl])
            .elements(&[Element::from_z(1).unwrap()])
            .render()
            .unwrap();

        assert!(text.contains(r"'https://host/$HOME/`id`/eadl/za001000'\''s'"));
        assert!(!text.contains('"'));
    }

    #[test]
    fn empty_scripts_rejected() {
        assert!(matches!(
            script().elements(&[]).render(),
            Err(Error::EmptyScript("elements"))
        ));
        assert!(matches!(
            script().libraries(&[]).render(),
            Err(Error::EmptyScript("libraries"))
        ));
    }

    #[test]
    fn script_layout() {
        let text = script().render().unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "#!/bin/bash");
        assert_eq!(lines[1], "# Download EPDL, EADL for 2 elements");
        assert_eq!(lines[2], "set -e");
        assert_eq!(text.matches("mkdir -p").count(), 2);
        assert_eq!(text.matches("wget -q -O").count(), 4);

        // every mkdir comes before the first download
        let last_mkdir = text.rfind("mkdir").unwrap();
        let first_wget = text.find("wget").unwrap();
        assert!(last_mkdir < first_wget);
    }
}
