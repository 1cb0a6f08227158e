//! Shared integration test helpers for canvas-tools.
//!
//! Include this module at the top of each test file that needs it:
//!
//! ```ignore
//! mod common;
//! use common::FontDirs;
//! ```
//!
//! The `#[allow(dead_code)]` attribute suppresses warnings when only a subset
//! of helpers are used per file.

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use canvas_tools::fonts::ResolverConfig;
use tempfile::TempDir;

/// A temporary font directory tree:
///
/// ```text
/// <tmp>/
///   system/        # stand-in system font directory
///   Fonts/         # library font directory
///   resolver.yaml  # written by `write_config`
/// ```
///
/// The `TempDir` must be kept alive for the duration of the test.
pub struct FontDirs {
    pub temp_dir: TempDir,
}

impl FontDirs {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        fs::create_dir_all(temp_dir.path().join("system")).expect("Failed to create system dir");
        fs::create_dir_all(temp_dir.path().join("Fonts")).expect("Failed to create Fonts dir");
        Self { temp_dir }
    }

    pub fn system_dir(&self) -> PathBuf {
        self.temp_dir.path().join("system")
    }

    pub fn library_dir(&self) -> PathBuf {
        self.temp_dir.path().join("Fonts")
    }

    pub fn config_path(&self) -> PathBuf {
        self.temp_dir.path().join("resolver.yaml")
    }

    /// Config isolated from the working directory and the real system fonts.
    pub fn config(&self) -> ResolverConfig {
        ResolverConfig::new()
            .with_library_font_dir(self.library_dir())
            .with_system_font_dirs([self.system_dir()])
            .with_search_current_dir(false)
    }

    pub fn write_config(&self) -> PathBuf {
        let path = self.config_path();
        self.config().save(&path).expect("Failed to write resolver config");
        path
    }

    /// Write a stub font file (contents are never inspected).
    pub fn write_font(&self, dir: &Path, filename: &str) -> PathBuf {
        let path = dir.join(filename);
        fs::write(&path, b"stub font").expect("Failed to write stub font");
        path
    }
}
