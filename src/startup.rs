//! Construction of the application's font resolver.
//!
//! The resolver is built once by the application's startup sequence and
//! handed to whatever needs font lookup; these helpers bundle the config
//! loading that normally precedes it.

use std::path::Path;

use anyhow::Result;
use canvas_tools_fonts::{FontResolver, ResolverConfig, SharedFontResolver};

/// Load the resolver config at `config_path` (defaults if the file does not
/// exist) and build a resolver from it.
pub fn open_font_resolver(config_path: &Path) -> Result<FontResolver> {
    let config = ResolverConfig::load_or_default(config_path)?;
    log::info!(
        "Opening font resolver with library directory {:?}",
        config.library_font_dir
    );
    Ok(FontResolver::new(config))
}

/// [`open_font_resolver`], wrapped for sharing between threads.
pub fn open_shared_font_resolver(config_path: &Path) -> Result<SharedFontResolver> {
    open_font_resolver(config_path).map(SharedFontResolver::new)
}
