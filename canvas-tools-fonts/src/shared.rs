//! Thread-safe handle to a single [`FontResolver`].

use std::path::Path;
use std::sync::Arc;

use parking_lot::Mutex;

use crate::error::{FontError, InstallOutcome};
use crate::resolver::FontResolver;

/// Cloneable handle sharing one resolver between components and threads.
///
/// Every clone refers to the same resolver; cloning never rediscovers the
/// search path or reloads the alias table. All access goes through one lock,
/// so installs and alias-file writes are serialized.
#[derive(Debug, Clone)]
pub struct SharedFontResolver {
    inner: Arc<Mutex<FontResolver>>,
}

impl SharedFontResolver {
    pub fn new(resolver: FontResolver) -> Self {
        Self {
            inner: Arc::new(Mutex::new(resolver)),
        }
    }

    /// See [`FontResolver::resolve`].
    pub fn resolve(&self, name: &str, font_type: &str) -> Option<String> {
        self.inner.lock().resolve(name, font_type)
    }

    /// See [`FontResolver::install`].
    pub fn install(
        &self,
        name: &str,
        source: impl AsRef<Path>,
        font_type: Option<&str>,
    ) -> Result<InstallOutcome, FontError> {
        self.inner.lock().install(name, source, font_type)
    }

    /// See [`FontResolver::flush`].
    pub fn flush(&self) -> Result<bool, FontError> {
        self.inner.lock().flush()
    }

    /// Run `f` with exclusive access to the resolver.
    pub fn with<R>(&self, f: impl FnOnce(&mut FontResolver) -> R) -> R {
        f(&mut self.inner.lock())
    }

    /// Whether both handles share the same resolver.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }

    /// Flush pending alias changes. Other clones stay usable.
    pub fn close(self) -> Result<(), FontError> {
        self.flush().map(|_| ())
    }
}

impl From<FontResolver> for SharedFontResolver {
    fn from(resolver: FontResolver) -> Self {
        Self::new(resolver)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ResolverConfig;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn shared(temp_dir: &TempDir) -> SharedFontResolver {
        let config = ResolverConfig::new()
            .with_library_font_dir(temp_dir.path().join("Fonts"))
            .with_system_font_dirs(Vec::<PathBuf>::new())
            .with_search_current_dir(false);
        FontResolver::new(config).into()
    }

    #[test]
    fn test_clones_share_state() {
        let temp_dir = TempDir::new().unwrap();
        let first = shared(&temp_dir);
        let second = first.clone();
        assert!(first.ptr_eq(&second));

        let source = temp_dir.path().join("shared.ttf");
        std::fs::write(&source, b"font").unwrap();
        first.install("Shared", &source, None).unwrap();

        assert!(second.with(|r| r.aliases().is_dirty()));
        assert!(second.resolve("Shared", ".ttf").is_some());
    }

    #[test]
    fn test_concurrent_installs_register_once() {
        let temp_dir = TempDir::new().unwrap();
        let resolver = shared(&temp_dir);
        let source = temp_dir.path().join("race.ttf");
        std::fs::write(&source, b"font").unwrap();

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let resolver = resolver.clone();
                let source = source.clone();
                std::thread::spawn(move || resolver.install("Race", &source, None).unwrap())
            })
            .collect();
        let installed = handles
            .into_iter()
            .map(|h| h.join().unwrap())
            .filter(InstallOutcome::is_installed)
            .count();

        assert_eq!(installed, 1);
        assert!(resolver.flush().unwrap());
    }

    #[test]
    fn test_separate_handles_are_distinct() {
        let temp_a = TempDir::new().unwrap();
        let temp_b = TempDir::new().unwrap();
        assert!(!shared(&temp_a).ptr_eq(&shared(&temp_b)));
    }
}
