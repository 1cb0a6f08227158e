//! Persisted font alias table.
//!
//! The table maps a font name to the file that provides it for each font
//! type (file extension), e.g. `"Courier New" -> {".ttf": "cour.ttf"}`.
//! On disk it is a CSV file with one record per font name:
//!
//! ```text
//! Courier New,cour.ttf,cour.pfb
//! Arial,arial.ttf
//! ```
//!
//! The extension of each filename (including the leading dot, lower-cased)
//! is the lookup key when the file is read back.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::FontError;

/// Font type → filename for a single font name.
pub type FontVariants = BTreeMap<String, String>;

/// In-memory alias table with a dirty flag tracking unsaved changes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FontAliasStore {
    entries: BTreeMap<String, FontVariants>,
    dirty: bool,
}

impl FontAliasStore {
    /// Create an empty, clean table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load the table from `path`.
    ///
    /// A missing file is a normal cold start and yields an empty table.
    /// Unreadable files and malformed records are logged and skipped, so this
    /// never fails. Filenames without an extension are skipped.
    pub fn load(path: &Path) -> Self {
        let mut store = Self::new();
        if !path.exists() {
            log::debug!("Font alias file {:?} not found, starting empty", path);
            return store;
        }

        let mut reader = match csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .trim(csv::Trim::All)
            .from_path(path)
        {
            Ok(reader) => reader,
            Err(e) => {
                log::warn!("Failed to open font alias file {:?}: {}", path, e);
                return store;
            }
        };

        for (line, record) in reader.records().enumerate() {
            let record = match record {
                Ok(record) => record,
                Err(e) => {
                    log::warn!(
                        "Skipping malformed record {} in {:?}: {}",
                        line + 1,
                        path,
                        e
                    );
                    continue;
                }
            };

            let mut fields = record.iter();
            let Some(name) = fields.next().filter(|name| !name.is_empty()) else {
                continue;
            };

            for filename in fields.filter(|f| !f.is_empty()) {
                match extension_of(filename) {
                    Some(ext) => {
                        store
                            .entries
                            .entry(name.to_string())
                            .or_default()
                            .insert(ext, filename.to_string());
                    }
                    None => log::warn!(
                        "Skipping alias '{}' -> '{}' in {:?}: filename has no extension",
                        name,
                        filename,
                        path
                    ),
                }
            }
        }

        log::debug!("Loaded {} font aliases from {:?}", store.len(), path);
        store
    }

    /// Write the table to `path`, replacing any existing file.
    ///
    /// The parent directory is created if needed and the file is written
    /// atomically (temp file, then rename). The dirty flag is left untouched;
    /// callers that persist on behalf of the table clear it themselves.
    pub fn save(&self, path: &Path) -> Result<(), FontError> {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).map_err(|e| FontError::io(parent, e))?;
        }

        let temp_path = temp_path_for(path);
        let alias_err = |source: csv::Error| FontError::AliasFile {
            path: path.to_path_buf(),
            source,
        };

        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_path(&temp_path)
            .map_err(alias_err)?;
        for (name, variants) in &self.entries {
            let record =
                std::iter::once(name.as_str()).chain(variants.values().map(String::as_str));
            writer.write_record(record).map_err(alias_err)?;
        }
        writer.flush().map_err(|e| FontError::io(&temp_path, e))?;
        drop(writer);

        fs::rename(&temp_path, path).map_err(|e| {
            let _ = fs::remove_file(&temp_path);
            FontError::io(path, e)
        })?;
        log::debug!("Saved {} font aliases to {:?}", self.len(), path);
        Ok(())
    }

    /// Filename registered for `name` and `font_type`, if any.
    pub fn lookup(&self, name: &str, font_type: &str) -> Option<&str> {
        self.entries
            .get(name)
            .and_then(|variants| variants.get(font_type))
            .map(String::as_str)
    }

    /// Whether an alias exists for `name` and `font_type`.
    pub fn contains(&self, name: &str, font_type: &str) -> bool {
        self.lookup(name, font_type).is_some()
    }

    /// All registered variants of `name`.
    pub fn variants(&self, name: &str) -> Option<&FontVariants> {
        self.entries.get(name)
    }

    /// Register `filename` for `name` and `font_type`.
    ///
    /// Existing aliases are never overwritten: returns `false` and leaves the
    /// table unchanged if one is present. A successful insert marks the table
    /// dirty.
    pub fn insert(&mut self, name: &str, font_type: &str, filename: &str) -> bool {
        let variants = self.entries.entry(name.to_string()).or_default();
        if variants.contains_key(font_type) {
            return false;
        }
        variants.insert(font_type.to_string(), filename.to_string());
        self.dirty = true;
        true
    }

    /// Registered font names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Number of font names in the table.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Whether the table changed since it was loaded or last saved.
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub fn mark_clean(&mut self) {
        self.dirty = false;
    }
}

/// Font type of `filename`: the substring from the last `.`, lower-cased.
///
/// Returns `None` when the name contains no `.`.
pub fn extension_of(filename: &str) -> Option<String> {
    filename
        .rfind('.')
        .map(|pos| filename[pos..].to_lowercase())
}

fn temp_path_for(path: &Path) -> PathBuf {
    let mut temp = path.as_os_str().to_owned();
    temp.push(".tmp");
    PathBuf::from(temp)
}
