//! Font name → font file resolution.

use std::fs;
use std::path::{Component, Path, PathBuf};

use crate::alias_store::{FontAliasStore, extension_of};
use crate::config::ResolverConfig;
use crate::error::{FontError, InstallOutcome};
use crate::locator::SystemFontLocator;
use crate::search_path::SearchPath;

/// Font type assumed when the caller does not ask for a specific one.
pub const DEFAULT_FONT_TYPE: &str = ".ttf";

/// Resolves logical font names to font files and registers new fonts.
///
/// Construct one per application at startup and share it (see
/// [`crate::SharedFontResolver`] for multi-threaded use). Alias changes made
/// by [`install`](Self::install) are held in memory until
/// [`flush`](Self::flush) or [`close`](Self::close) writes them out.
#[derive(Debug)]
pub struct FontResolver {
    config: ResolverConfig,
    search_path: SearchPath,
    aliases: FontAliasStore,
}

impl FontResolver {
    /// Discover the search path and load the alias table described by `config`.
    pub fn new(config: ResolverConfig) -> Self {
        let search_path = SearchPath::from_config(&config);
        Self::with_search_path(config, search_path)
    }

    /// Create a resolver with an explicit search path, loading the alias
    /// table from `config`.
    pub fn with_search_path(config: ResolverConfig, search_path: SearchPath) -> Self {
        let aliases = FontAliasStore::load(&config.alias_file_path());
        log::info!(
            "Font resolver ready: {} aliases, {} search directories",
            aliases.len(),
            search_path.dirs().count()
        );
        Self {
            config,
            search_path,
            aliases,
        }
    }

    /// Resolve `name` to an existing font file of type `font_type`.
    ///
    /// The alias table is consulted first; without an alias the name itself
    /// is used as the file name. `font_type` is appended unless the file name
    /// already ends with it. Each search directory is probed in order and the
    /// first existing file wins. The returned path uses `/` separators.
    ///
    /// Returns `None` when no search directory contains the file.
    pub fn resolve(&self, name: &str, font_type: &str) -> Option<String> {
        let font_type = font_type.to_lowercase();

        let mut candidate = self
            .aliases
            .lookup(name, &font_type)
            .unwrap_or(name)
            .to_string();
        if !candidate.ends_with(&font_type) {
            candidate.push_str(&font_type);
        }

        if !is_contained(Path::new(&candidate)) {
            log::warn!(
                "Refusing to resolve font '{}': '{}' escapes the search path",
                name,
                candidate
            );
            return None;
        }

        let found = self
            .search_path
            .dirs()
            .map(|dir| dir.join(&candidate))
            .find(|path| path.is_file());

        match found {
            Some(path) => {
                log::debug!("Resolved font '{}' ({}) to {:?}", name, font_type, path);
                Some(normalize_separators(&path))
            }
            None => {
                log::debug!("Font '{}' ({}) not found on search path", name, font_type);
                None
            }
        }
    }

    /// [`resolve`](Self::resolve) with [`DEFAULT_FONT_TYPE`].
    pub fn resolve_default(&self, name: &str) -> Option<String> {
        self.resolve(name, DEFAULT_FONT_TYPE)
    }

    /// [`resolve`](Self::resolve), falling back to an external font locator.
    ///
    /// The locator's answer is accepted only if its extension matches
    /// `font_type`. Unlike `resolve`, the result may lie outside the search
    /// path.
    pub fn resolve_or_locate(
        &self,
        name: &str,
        font_type: &str,
        locator: &dyn SystemFontLocator,
    ) -> Option<String> {
        if let Some(path) = self.resolve(name, font_type) {
            return Some(path);
        }

        let font_type = font_type.to_lowercase();
        let path = locator.locate(name)?;
        let matches_type = path
            .file_name()
            .and_then(|f| f.to_str())
            .and_then(extension_of)
            .is_some_and(|ext| ext == font_type);

        if matches_type {
            log::debug!("Located font '{}' via system locator: {:?}", name, path);
            Some(normalize_separators(&path))
        } else {
            log::debug!(
                "System locator found {:?} for '{}', but it is not a {} file",
                path,
                name,
                font_type
            );
            None
        }
    }

    /// Copy the font at `source` into the library font directory and register
    /// it under `name`.
    ///
    /// The font type is the extension of the source file name. An explicit
    /// `font_type` must match it (case-insensitively, leading `.` included).
    /// If an alias for `name` and that type already exists, nothing is copied
    /// and [`InstallOutcome::AlreadyInstalled`] is returned. A source already
    /// inside the library font directory is registered without copying. The
    /// alias is recorded only after the copy succeeds.
    pub fn install(
        &mut self,
        name: &str,
        source: impl AsRef<Path>,
        font_type: Option<&str>,
    ) -> Result<InstallOutcome, FontError> {
        let source = source.as_ref();
        let filename = source
            .file_name()
            .and_then(|f| f.to_str())
            .ok_or_else(|| FontError::InvalidSource(source.to_path_buf()))?;

        let extension = extension_of(filename);
        let font_type = match (font_type, extension) {
            (Some(requested), Some(ext)) if requested.to_lowercase() == ext => ext,
            (Some(requested), _) => {
                return Err(FontError::TypeMismatch {
                    filename: filename.to_string(),
                    font_type: requested.to_string(),
                });
            }
            (None, Some(ext)) => ext,
            (None, None) => return Err(FontError::UnknownFontType(filename.to_string())),
        };

        if self.aliases.contains(name, &font_type) {
            log::info!("Font '{}' ({}) is already installed", name, font_type);
            return Ok(InstallOutcome::AlreadyInstalled);
        }

        let library_dir = self.search_path.library_dir();
        fs::create_dir_all(library_dir).map_err(|e| FontError::io(library_dir, e))?;

        let target = library_dir.join(filename);
        if is_same_file(source, &target) {
            log::debug!("Font {:?} is already in the library directory", target);
        } else {
            if target.exists() {
                log::warn!(
                    "Replacing library font {:?} with {:?}; aliases to it now use the new file",
                    target,
                    source
                );
            }
            fs::copy(source, &target).map_err(|e| FontError::Copy {
                from: source.to_path_buf(),
                to: target.clone(),
                source: e,
            })?;
        }

        self.aliases.insert(name, &font_type, filename);
        log::info!("Installed font '{}' ({}) as {:?}", name, font_type, target);
        Ok(InstallOutcome::Installed { path: target })
    }

    /// Write the alias table if it has unsaved changes.
    ///
    /// Returns `true` if the file was written.
    pub fn flush(&mut self) -> Result<bool, FontError> {
        if !self.aliases.is_dirty() {
            return Ok(false);
        }
        self.aliases.save(&self.alias_file_path())?;
        self.aliases.mark_clean();
        Ok(true)
    }

    /// Flush pending alias changes and release the resolver.
    pub fn close(mut self) -> Result<(), FontError> {
        self.flush().map(|_| ())
    }

    pub fn config(&self) -> &ResolverConfig {
        &self.config
    }

    pub fn search_path(&self) -> &SearchPath {
        &self.search_path
    }

    pub fn aliases(&self) -> &FontAliasStore {
        &self.aliases
    }

    pub fn library_font_dir(&self) -> &Path {
        self.search_path.library_dir()
    }

    pub fn alias_file_path(&self) -> PathBuf {
        self.config.alias_file_path()
    }
}

impl Drop for FontResolver {
    fn drop(&mut self) {
        if self.aliases.is_dirty() {
            log::warn!(
                "Font resolver dropped with unsaved aliases; {:?} was not updated",
                self.alias_file_path()
            );
        }
    }
}

/// Whether `candidate` stays inside whatever directory it is joined to.
fn is_contained(candidate: &Path) -> bool {
    candidate
        .components()
        .all(|component| matches!(component, Component::Normal(_) | Component::CurDir))
}

/// Whether `a` and `b` name the same existing file.
fn is_same_file(a: &Path, b: &Path) -> bool {
    match (fs::canonicalize(a), fs::canonicalize(b)) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}

fn normalize_separators(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}
