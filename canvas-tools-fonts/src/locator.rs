//! External system font lookup used when the search path has no match.

use std::path::PathBuf;

use fontdb::{Database, Family, Query, Source};

/// Finds the file backing a font family anywhere on the system.
pub trait SystemFontLocator {
    /// Path of a file providing `family`, if one is known.
    fn locate(&self, family: &str) -> Option<PathBuf>;
}

/// [`SystemFontLocator`] backed by a fontdb database of the system fonts.
pub struct FontdbLocator {
    font_db: Database,
}

impl FontdbLocator {
    /// Create a locator over all fonts installed on the system.
    pub fn new() -> Self {
        let mut font_db = Database::new();
        font_db.load_system_fonts();
        log::info!("Loaded {} system fonts", font_db.len());
        Self { font_db }
    }

    /// Create a locator over an already populated database.
    pub fn from_database(font_db: Database) -> Self {
        Self { font_db }
    }
}

impl Default for FontdbLocator {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for FontdbLocator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FontdbLocator")
            .field("faces", &self.font_db.len())
            .finish()
    }
}

impl SystemFontLocator for FontdbLocator {
    fn locate(&self, family: &str) -> Option<PathBuf> {
        let query = Query {
            families: &[Family::Name(family)],
            weight: fontdb::Weight::NORMAL,
            style: fontdb::Style::Normal,
            ..Query::default()
        };

        let id = self.font_db.query(&query)?;
        match &self.font_db.face(id)?.source {
            Source::File(path) => Some(path.clone()),
            _ => {
                log::debug!("Font '{}' is not backed by a file", family);
                None
            }
        }
    }
}
