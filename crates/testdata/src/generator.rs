// standard library
use std::path::{Path, PathBuf};
use std::process::Command;

// crate modules
use crate::fixture::Fixture;

// ftools modules
use ftools_utils::f;

/// Default subdirectory of the cross section directory for native files
pub const DEFAULT_SUBDIR: &str = "native";

/// External native data generator and the options shared by every call
///
/// ```rust
/// # use ftools_testdata::{Fixture, Generator};
/// let generator = Generator::new("aepr_generator", "/data/xs", "aepr")
///     .notes("regenerated test data");
/// let fixture = Fixture::new("H", 1, "H-Native", "test_h_native.xml");
///
/// assert_eq!(
///     generator.args(&fixture),
///     vec![
///         "--cross_sec_dir=/data/xs",
///         "--cross_sec_alias=H-Native",
///         "--subdir=native",
///         "--notes=regenerated test data",
///         "--do_not_modify_cs_xml_file",
///     ]
/// );
/// assert!(generator.generated_file(&fixture).ends_with("native/aepr_1_native.xml"));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Generator {
    /// Generator executable, a name on `PATH` or a full path
    pub executable: PathBuf,
    /// Directory holding `cross_sections.xml`
    pub cross_sec_dir: PathBuf,
    /// Output subdirectory of `cross_sec_dir`
    pub subdir: String,
    /// Notes stored in the generated tables
    pub notes: String,
    /// File name prefix the generator uses, e.g. "aepr"
    pub file_prefix: String,
    /// Let the generator update `cross_sections.xml`
    pub modify_xml: bool,
    /// Any further arguments, passed through untouched
    pub extra_args: Vec<String>,
}

impl Generator {
    pub fn new<E, D>(executable: E, cross_sec_dir: D, file_prefix: &str) -> Self
    where
        E: AsRef<Path>,
        D: AsRef<Path>,
    {
        Self {
            executable: executable.as_ref().to_path_buf(),
            cross_sec_dir: cross_sec_dir.as_ref().to_path_buf(),
            subdir: DEFAULT_SUBDIR.to_string(),
            notes: String::new(),
            file_prefix: file_prefix.to_string(),
            modify_xml: false,
            extra_args: Vec::new(),
        }
    }

    pub fn subdir(mut self, subdir: &str) -> Self {
        self.subdir = subdir.to_string();
        self
    }

    pub fn notes(mut self, notes: &str) -> Self {
        self.notes = notes.to_string();
        self
    }

    pub fn modify_xml(mut self, modify: bool) -> Self {
        self.modify_xml = modify;
        self
    }

    pub fn extra_args(mut self, args: &[String]) -> Self {
        self.extra_args = args.to_vec();
        self
    }

    /// Arguments for a single fixture
    pub fn args(&self, fixture: &Fixture) -> Vec<String> {
        let mut args = vec![
            f!("--cross_sec_dir={}", self.cross_sec_dir.display()),
            f!("--cross_sec_alias={}", fixture.alias),
            f!("--subdir={}", self.subdir),
            f!("--notes={}", self.notes),
        ];

        if !self.modify_xml {
            args.push("--do_not_modify_cs_xml_file".to_string());
        }

        args.extend(self.extra_args.iter().cloned());
        args
    }

    /// Ready to run command for a single fixture
    pub fn command(&self, fixture: &Fixture) -> Command {
        let mut command = Command::new(&self.executable);
        command.args(self.args(fixture));
        command
    }

    /// Where the generator writes the table for a fixture
    pub fn generated_file(&self, fixture: &Fixture) -> PathBuf {
        let name = f!("{}_{}_native.xml", self.file_prefix, fixture.z);
        match self.subdir.is_empty() {
            true => self.cross_sec_dir.join(name),
            false => self.cross_sec_dir.join(&self.subdir).join(name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixture() -> Fixture {
        Fixture::new("Pb", 82, "Pb-Native", "out.xml")
    }

    #[test]
    fn extras_come_last() {
        let generator = Generator::new("gen", "/xs", "epr")
            .modify_xml(true)
            .extra_args(&["--min_photon_energy=1e-3".to_string()]);
        let args = generator.args(&fixture());

        assert_eq!(args.len(), 5);
        assert_eq!(args[4], "--min_photon_energy=1e-3");
        assert!(!args.iter().any(|a| a.contains("do_not_modify")));
    }

    #[test]
    fn empty_subdir() {
        let generator = Generator::new("gen", "/xs", "epr").subdir("");
        assert_eq!(
            generator.generated_file(&fixture()),
            PathBuf::from("/xs/epr_82_native.xml")
        );
        assert_eq!(generator.args(&fixture())[2], "--subdir=");
    }

    #[test]
    fn command_arguments() {
        let generator = Generator::new("/opt/bin/gen", "/xs", "epr");
        let command = generator.command(&fixture());

        assert_eq!(command.get_program(), "/opt/bin/gen");
        assert_eq!(command.get_args().count(), 5);
    }
}
