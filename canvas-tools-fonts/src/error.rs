//! Typed error types for canvas-tools-fonts.
//!
//! Resolution misses are not errors: [`crate::FontResolver::resolve`] returns
//! `None` for them. The variants here cover requested mutations that did not
//! happen (alias-table writes, font installs) so callers can match on the
//! failure instead of inspecting log output.

use std::path::PathBuf;

use thiserror::Error;

/// Errors produced while installing fonts or persisting the alias table.
#[derive(Debug, Error)]
pub enum FontError {
    /// A filesystem operation on `path` failed.
    #[error("I/O error on '{}': {source}", path.display())]
    Io {
        /// Path the operation was applied to.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Copying a font file into the library font directory failed.
    #[error("Failed to copy font '{}' to '{}': {source}", from.display(), to.display())]
    Copy {
        /// Source font file.
        from: PathBuf,
        /// Destination inside the library font directory.
        to: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The alias table could not be encoded or written as CSV.
    #[error("Alias file '{}' could not be written: {source}", path.display())]
    AliasFile {
        /// Alias file path.
        path: PathBuf,
        /// Underlying CSV error.
        #[source]
        source: csv::Error,
    },

    /// The install source path has no file name component.
    #[error("Font source '{}' does not name a file", .0.display())]
    InvalidSource(PathBuf),

    /// No font type was given and none could be derived from the file name.
    #[error("Cannot determine font type of '{0}': no extension and no explicit type")]
    UnknownFontType(String),

    /// An explicit font type does not match the file's extension. The alias
    /// table keys each file by its extension, so such an alias would not
    /// survive a reload.
    #[error("Font '{filename}' cannot be installed as type '{font_type}'")]
    TypeMismatch {
        /// Base name of the source file.
        filename: String,
        /// Requested font type.
        font_type: String,
    },
}

impl FontError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        FontError::Io {
            path: path.into(),
            source,
        }
    }
}

/// Result of [`crate::FontResolver::install`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InstallOutcome {
    /// The font was copied into the library directory and registered.
    Installed {
        /// Location of the copied file.
        path: PathBuf,
    },
    /// An alias for this name and type already exists; nothing was changed.
    AlreadyInstalled,
}

impl InstallOutcome {
    /// Returns `true` if this call copied and registered a font.
    pub fn is_installed(&self) -> bool {
        matches!(self, InstallOutcome::Installed { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_display_includes_path() {
        let err = FontError::io(
            "/fonts/fontmap.txt",
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        );
        let msg = err.to_string();
        assert!(msg.contains("/fonts/fontmap.txt"));
        assert!(msg.contains("denied"));
    }

    #[test]
    fn test_copy_error_has_source() {
        use std::error::Error;

        let err = FontError::Copy {
            from: PathBuf::from("/tmp/a.ttf"),
            to: PathBuf::from("/lib/a.ttf"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
        };
        assert!(err.source().is_some());
        assert!(err.to_string().contains("/tmp/a.ttf"));
    }

    #[test]
    fn test_install_outcome_is_installed() {
        let installed = InstallOutcome::Installed {
            path: PathBuf::from("Fonts/foo.otf"),
        };
        assert!(installed.is_installed());
        assert!(!InstallOutcome::AlreadyInstalled.is_installed());
    }

    #[test]
    fn test_type_mismatch_display() {
        let err = FontError::TypeMismatch {
            filename: "cour".to_string(),
            font_type: ".pfb".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("cour"));
        assert!(msg.contains(".pfb"));
    }
}
