// standard library
use std::fmt::Write as FmtWrite;
use std::path::{Component, Path, PathBuf};

// crate modules
use crate::error::{Error, Result};
use crate::prefix::prepend_unique;

// external crates
use log::{debug, info, warn};

/// Name of the environment script written to the build directory
pub const ENV_SCRIPT: &str = "frensie_env.sh";

/// Search paths updated by the environment script, relative to the prefix
pub const SEARCH_PATHS: [(&str, &str); 3] = [
    ("PATH", "bin"),
    ("LD_LIBRARY_PATH", "lib"),
    ("PYTHONPATH", "lib/python"),
];

/// What happened to a link during [BuildTree::init]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkStatus {
    /// New link
    Created,
    /// Link already pointed at the right target
    Unchanged,
    /// Link pointed somewhere else and was recreated
    Replaced,
}

/// An out-of-source build directory for a FRENSIE checkout
///
/// ```rust, no_run
/// # use ftools_build::BuildTree;
/// BuildTree::new("./FRENSIE", "./build", "/opt/frensie")
///     .link("data", "/shared/nuclear_data")
///     .init()
///     .unwrap();
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct BuildTree {
    /// Source checkout, linked as `<build>/src`
    pub source: PathBuf,
    /// Build directory, created if missing
    pub build: PathBuf,
    /// Install prefix used for the environment script
    pub prefix: PathBuf,
    /// Additional (name, target) links inside the build directory
    pub links: Vec<(String, PathBuf)>,
}

impl BuildTree {
    pub fn new<S, B, P>(source: S, build: B, prefix: P) -> Self
    where
        S: AsRef<Path>,
        B: AsRef<Path>,
        P: AsRef<Path>,
    {
        Self {
            source: source.as_ref().to_path_buf(),
            build: build.as_ref().to_path_buf(),
            prefix: prefix.as_ref().to_path_buf(),
            links: Vec::new(),
        }
    }

    /// Add a named link to `target` inside the build directory
    pub fn link<P: AsRef<Path>>(mut self, name: &str, target: P) -> Self {
        self.links.push((name.to_string(), target.as_ref().to_path_buf()));
        self
    }

    /// Create the build directory, links and environment script
    ///
    /// Current values of the search path variables are read from the process
    /// environment.
    pub fn init(&self) -> Result<()> {
        if !self.source.is_dir() {
            return Err(Error::InvalidDirectory(self.source.clone()));
        }

        for (name, _) in &self.links {
            validate_link_name(name)?;
        }

        std::fs::create_dir_all(&self.build)?;
        let source = std::fs::canonicalize(&self.source)?;
        debug!("Source tree at {}", source.display());

        self.create_link("src", &source)?;
        for (name, target) in &self.links {
            self.create_link(name, target)?;
        }

        let script = self.env_script(|name| std::env::var(name).ok());
        let path = self.build.join(ENV_SCRIPT);
        std::fs::write(&path, script)?;
        info!("Wrote {}", path.display());

        Ok(())
    }

    fn create_link(&self, name: &str, target: &Path) -> Result<LinkStatus> {
        let status = replace_link(&self.build.join(name), target)?;
        debug!("{name} -> {} ({status:?})", target.display());
        Ok(status)
    }

    /// Environment script content
    ///
    /// `lookup` gives the current value of a variable, if set. Each search
    /// path gets the matching prefix directory at the front with duplicates
    /// removed.
    ///
    /// ```rust
    /// # use ftools_build::BuildTree;
    /// let tree = BuildTree::new("src", "build", "/opt/frensie");
    /// let script = tree.env_script(|name| match name {
    ///     "PATH" => Some("/usr/bin:/opt/frensie/bin".to_string()),
    ///     _ => None,
    /// });
    ///
    /// assert!(script.contains("export PATH=\"/opt/frensie/bin:/usr/bin\""));
    /// assert!(script.contains("export LD_LIBRARY_PATH=\"/opt/frensie/lib\""));
    /// ```
    pub fn env_script<F>(&self, lookup: F) -> String
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut script = String::new();
        let _ = writeln!(script, "#!/bin/bash");
        let _ = writeln!(script, "# FRENSIE environment for {}", self.build.display());

        for (variable, subdir) in SEARCH_PATHS {
            let entry = self.prefix.join(subdir);
            let current = lookup(variable).unwrap_or_default();
            let value = prepend_unique(&current, &entry.to_string_lossy(), ':');
            let _ = writeln!(script, "export {variable}=\"{value}\"");
        }

        script
    }
}

/// Point `link` at `target`, replacing a stale link but never a real file
pub fn replace_link(link: &Path, target: &Path) -> Result<LinkStatus> {
    let status = match std::fs::symlink_metadata(link) {
        Ok(metadata) if metadata.file_type().is_symlink() => {
            if std::fs::read_link(link)? == target {
                return Ok(LinkStatus::Unchanged);
            }
            warn!("Replacing stale link {}", link.display());
            remove_link(link)?;
            LinkStatus::Replaced
        }
        Ok(_) => return Err(Error::PathOccupied(link.to_path_buf())),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => LinkStatus::Created,
        Err(e) => return Err(e.into()),
    };

    symlink(target, link)?;
    Ok(status)
}

fn validate_link_name(name: &str) -> Result<()> {
    let mut components = Path::new(name).components();
    match (components.next(), components.next()) {
        (Some(Component::Normal(_)), None) if name != "src" => Ok(()),
        _ => Err(Error::InvalidLinkName(name.to_string())),
    }
}

#[cfg(unix)]
fn symlink(target: &Path, link: &Path) -> Result<()> {
    Ok(std::os::unix::fs::symlink(target, link)?)
}

#[cfg(unix)]
fn remove_link(link: &Path) -> Result<()> {
    Ok(std::fs::remove_file(link)?)
}

#[cfg(not(unix))]
fn symlink(_target: &Path, _link: &Path) -> Result<()> {
    Err(Error::SymlinksUnsupported)
}

#[cfg(not(unix))]
fn remove_link(_link: &Path) -> Result<()> {
    Err(Error::SymlinksUnsupported)
}
