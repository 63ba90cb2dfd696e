//! Downloaded path registry

use parking_lot::RwLock;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Insertion-ordered set of downloaded sound paths.
///
/// Clones share the same registry, so the downloader and its owner can each
/// hold a handle.
#[derive(Debug, Default)]
pub struct PathCache {
    paths: Arc<RwLock<Vec<PathBuf>>>,
}

impl PathCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a path. Returns `false` if it was already cached.
    pub fn add(&self, path: impl Into<PathBuf>) -> bool {
        let path = path.into();
        let mut paths = self.paths.write();

        if paths.contains(&path) {
            return false;
        }

        tracing::debug!(path = %path.display(), "Cached sound path");
        paths.push(path);
        true
    }

    /// Forget a path without touching the file.
    pub fn remove(&self, path: &Path) -> bool {
        let mut paths = self.paths.write();
        match paths.iter().position(|p| p == path) {
            Some(index) => {
                paths.remove(index);
                true
            }
            None => false,
        }
    }

    pub fn contains(&self, path: &Path) -> bool {
        self.paths.read().iter().any(|p| p == path)
    }

    /// Snapshot of the cached paths in insertion order
    pub fn list(&self) -> Vec<PathBuf> {
        self.paths.read().clone()
    }

    pub fn len(&self) -> usize {
        self.paths.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.read().is_empty()
    }

    /// Empty the registry and delete every cached file.
    ///
    /// Deletion is best-effort: a file that cannot be removed is dropped from
    /// the registry anyway. Returns how many files were actually deleted.
    pub fn purge(&self) -> usize {
        let paths = std::mem::take(&mut *self.paths.write());

        let mut removed = 0;
        for path in &paths {
            match std::fs::remove_file(path) {
                Ok(()) => removed += 1,
                Err(e) => {
                    tracing::debug!(path = %path.display(), error = %e, "Could not delete cached sound");
                }
            }
        }

        tracing::info!(cached = paths.len(), removed, "Cleared sound cache");

        removed
    }
}

impl Clone for PathCache {
    fn clone(&self) -> Self {
        Self {
            paths: Arc::clone(&self.paths),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_keeps_insertion_order() {
        let cache = PathCache::new();

        assert!(cache.add("/tmp/b.wav"));
        assert!(cache.add("/tmp/a.wav"));
        assert!(cache.add("/tmp/c.wav"));

        assert_eq!(
            cache.list(),
            vec![
                PathBuf::from("/tmp/b.wav"),
                PathBuf::from("/tmp/a.wav"),
                PathBuf::from("/tmp/c.wav"),
            ]
        );
    }

    #[test]
    fn test_add_ignores_duplicates() {
        let cache = PathCache::new();

        assert!(cache.add("/tmp/click.wav"));
        assert!(!cache.add("/tmp/click.wav"));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_remove() {
        let cache = PathCache::new();
        cache.add("/tmp/click.wav");
        cache.add("/tmp/beep.wav");

        assert!(cache.remove(Path::new("/tmp/click.wav")));
        assert!(!cache.remove(Path::new("/tmp/click.wav")));
        assert!(!cache.contains(Path::new("/tmp/click.wav")));
        assert_eq!(cache.list(), vec![PathBuf::from("/tmp/beep.wav")]);
    }

    #[test]
    fn test_clones_share_registry() {
        let cache = PathCache::new();
        let handle = cache.clone();

        handle.add("/tmp/click.wav");

        assert!(cache.contains(Path::new("/tmp/click.wav")));
    }

    #[test]
    fn test_purge_deletes_files() {
        let dir = tempfile::tempdir().unwrap();
        let cache = PathCache::new();

        for name in ["one.wav", "two.wav", "three.wav"] {
            let path = dir.path().join(name);
            std::fs::write(&path, b"RIFF").unwrap();
            cache.add(path);
        }

        let files = cache.list();
        assert_eq!(cache.purge(), 3);

        assert!(cache.is_empty());
        for path in files {
            assert!(!path.exists());
        }
    }

    #[test]
    fn test_purge_ignores_missing_files() {
        let dir = tempfile::tempdir().unwrap();
        let cache = PathCache::new();

        let present = dir.path().join("present.wav");
        std::fs::write(&present, b"RIFF").unwrap();
        cache.add(&present);
        cache.add(dir.path().join("gone.wav"));

        assert_eq!(cache.purge(), 1);
        assert!(cache.is_empty());
        assert!(!present.exists());
    }
}
