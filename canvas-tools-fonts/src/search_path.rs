//! Ordered list of directories probed when resolving a font file.
//!
//! Precedence, highest first:
//! 1. The current working directory (optional)
//! 2. System font directories that exist on this machine
//! 3. The library font directory

use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use crate::config::ResolverConfig;

/// Environment variable holding the Windows installation root.
pub const SYSTEM_ROOT_VAR: &str = "SystemRoot";

/// Unix and macOS locations probed when no system root is set.
const UNIX_FONT_DIRS: &[&str] = &[
    // Unix
    "/usr/share/fonts/",
    "/usr/share/X11/fonts/Type1/",
    "/usr/share/X11/fonts/TTF/",
    "/usr/local/share/fonts/",
    // macOS
    "/Library/Fonts/",
];

/// Per-user macOS font directory, relative to the home directory.
const USER_FONT_DIR: &str = "Library/Fonts/";

/// Platform font directory candidates, existing or not.
///
/// With a system root (Windows) the only candidate is `<root>/Fonts/`.
/// Otherwise the common Unix and macOS locations are returned, including the
/// per-user macOS directory when `home` is known.
pub fn candidate_system_font_dirs(
    system_root: Option<&OsStr>,
    home: Option<&Path>,
) -> Vec<PathBuf> {
    if let Some(root) = system_root {
        return vec![Path::new(root).join("Fonts")];
    }

    let mut candidates: Vec<PathBuf> = UNIX_FONT_DIRS.iter().map(PathBuf::from).collect();
    if let Some(home) = home {
        candidates.push(home.join(USER_FONT_DIR));
    }
    candidates
}

/// System font directories present on this machine.
pub fn discover_system_font_dirs() -> Vec<PathBuf> {
    let system_root = std::env::var_os(SYSTEM_ROOT_VAR);
    let home = dirs::home_dir();
    existing_dirs(candidate_system_font_dirs(
        system_root.as_deref(),
        home.as_deref(),
    ))
}

fn existing_dirs(candidates: Vec<PathBuf>) -> Vec<PathBuf> {
    candidates
        .into_iter()
        .filter(|dir| {
            let exists = dir.is_dir();
            if !exists {
                log::debug!("Skipping missing font directory {:?}", dir);
            }
            exists
        })
        .collect()
}

/// The resolver's directory search order, fixed at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchPath {
    include_current_dir: bool,
    system_dirs: Vec<PathBuf>,
    library_dir: PathBuf,
}

impl SearchPath {
    /// Build a search path from already-validated parts.
    pub fn new(
        include_current_dir: bool,
        system_dirs: Vec<PathBuf>,
        library_dir: PathBuf,
    ) -> Self {
        Self {
            include_current_dir,
            system_dirs,
            library_dir,
        }
    }

    /// Build the search path described by `config`, discovering system
    /// font directories unless the config lists them explicitly.
    pub fn from_config(config: &ResolverConfig) -> Self {
        let system_dirs = match &config.system_font_dirs {
            Some(dirs) => existing_dirs(dirs.clone()),
            None => discover_system_font_dirs(),
        };
        log::debug!("System font directories: {:?}", system_dirs);

        Self::new(
            config.search_current_dir,
            system_dirs,
            config.library_font_dir.clone(),
        )
    }

    /// All directories in probe order.
    pub fn dirs(&self) -> impl Iterator<Item = &Path> {
        self.include_current_dir
            .then(|| Path::new("."))
            .into_iter()
            .chain(self.system_dirs.iter().map(PathBuf::as_path))
            .chain(std::iter::once(self.library_dir.as_path()))
    }

    pub fn system_dirs(&self) -> &[PathBuf] {
        &self.system_dirs
    }

    pub fn library_dir(&self) -> &Path {
        &self.library_dir
    }

    pub fn includes_current_dir(&self) -> bool {
        self.include_current_dir
    }
}
