//! Font file resolution for canvas drawing.
//!
//! This crate provides:
//! - A persisted alias table mapping font names to font files per type
//! - Discovery of the platform's system font directories
//! - Name → file resolution over an ordered search path
//! - Installation of new fonts into a library font directory
//! - An optional fontdb-backed locator for fonts outside the search path
//!
//! # Architecture
//!
//! The `FontResolver` resolves a `(name, type)` pair by:
//! 1. Replacing the name with its aliased filename, if the alias table has one
//! 2. Appending the type extension when missing
//! 3. Probing the current directory, system font directories and the library
//!    font directory, in that order
//!
//! Alias changes are written back only when the owner calls `flush` or
//! `close`. `SharedFontResolver` wraps one resolver for multi-threaded use.

pub mod alias_store;
pub mod config;
pub mod error;
pub mod locator;
pub mod resolver;
pub mod search_path;
pub mod shared;

// Re-export main types for convenience
pub use alias_store::{FontAliasStore, FontVariants};
pub use config::ResolverConfig;
pub use error::{FontError, InstallOutcome};
pub use locator::{FontdbLocator, SystemFontLocator};
pub use resolver::{DEFAULT_FONT_TYPE, FontResolver};
pub use search_path::{SearchPath, discover_system_font_dirs};
pub use shared::SharedFontResolver;
