//! Resolver configuration.
//!
//! [`ResolverConfig`] can be built in code with the `with_*` methods or read
//! from a YAML file. Every field has a default, so a partial file is valid:
//!
//! ```yaml
//! library_font_dir: /opt/canvas/Fonts
//! search_current_dir: false
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Where the resolver looks for fonts and where it keeps its alias table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResolverConfig {
    /// Library ("bundled") font directory. Installed fonts are copied here
    /// and the alias table lives here. Searched last.
    pub library_font_dir: PathBuf,

    /// File name of the alias table inside `library_font_dir`.
    pub alias_file_name: String,

    /// Explicit system font directories. `None` discovers the platform
    /// defaults. Non-existent entries are dropped either way.
    pub system_font_dirs: Option<Vec<PathBuf>>,

    /// Probe the current working directory before anything else.
    pub search_current_dir: bool,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            library_font_dir: defaults::library_font_dir(),
            alias_file_name: defaults::alias_file_name(),
            system_font_dirs: None,
            search_current_dir: defaults::search_current_dir(),
        }
    }
}

impl ResolverConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_library_font_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.library_font_dir = dir.into();
        self
    }

    pub fn with_alias_file_name(mut self, name: impl Into<String>) -> Self {
        self.alias_file_name = name.into();
        self
    }

    pub fn with_system_font_dirs<I, P>(mut self, dirs: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        self.system_font_dirs = Some(dirs.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_search_current_dir(mut self, enabled: bool) -> Self {
        self.search_current_dir = enabled;
        self
    }

    /// Full path of the alias table file.
    pub fn alias_file_path(&self) -> PathBuf {
        self.library_font_dir.join(&self.alias_file_name)
    }

    /// Load configuration from a YAML file.
    pub fn load(path: &Path) -> Result<Self> {
        log::info!("Loading resolver config from {:?}", path);
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read resolver config {:?}", path))?;
        let config: Self = serde_yaml_ng::from_str(&contents)
            .with_context(|| format!("Failed to parse resolver config {:?}", path))?;
        Ok(config)
    }

    /// Load configuration from `path` if it exists, defaults otherwise.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if path.exists() {
            Self::load(path)
        } else {
            log::info!("Resolver config {:?} not found, using defaults", path);
            Ok(Self::default())
        }
    }

    /// Save configuration to a YAML file.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        let yaml = serde_yaml_ng::to_string(self)?;

        // Atomic save: write to temp file then rename
        let temp_path = path.with_extension("yaml.tmp");
        fs::write(&temp_path, &yaml)?;
        fs::rename(&temp_path, path)?;

        Ok(())
    }
}

/// Default values for [`ResolverConfig`] fields.
pub mod defaults {
    use std::path::PathBuf;

    /// `<data-local-dir>/canvas-tools/Fonts`, or `Fonts` relative to the
    /// working directory when the platform has no data directory.
    pub fn library_font_dir() -> PathBuf {
        if let Some(data_dir) = dirs::data_local_dir() {
            data_dir.join("canvas-tools").join("Fonts")
        } else {
            PathBuf::from("Fonts")
        }
    }

    pub fn alias_file_name() -> String {
        "fontmap.txt".to_string()
    }

    pub fn search_current_dir() -> bool {
        true
    }
}
