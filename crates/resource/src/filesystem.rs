//! Filesystem-based resource provider for native platforms.
//!
//! Resources resolve relative to a base path, typically the directory of the
//! source document. Resolved paths are validated to stay inside the base
//! directory, so a document cannot embed files from elsewhere on disk.

use galley_traits::{ResourceError, ResourceProvider, SharedResourceData};
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// A resource provider that loads image embeds from the local filesystem.
#[derive(Debug)]
pub struct FilesystemResourceProvider {
    base_path: PathBuf,
    /// Canonicalized base path for containment checks.
    canonical_base: Option<PathBuf>,
}

impl FilesystemResourceProvider {
    /// Creates a provider rooted at `base_path`. The base is canonicalized
    /// up front; canonicalization may fail if the directory does not exist
    /// yet, in which case only the component check below applies.
    pub fn new<P: AsRef<Path>>(base_path: P) -> Self {
        let base = base_path.as_ref().to_path_buf();
        let canonical = base.canonicalize().ok();
        Self {
            base_path: base,
            canonical_base: canonical,
        }
    }

    pub fn base(&self) -> &Path {
        &self.base_path
    }

    /// Resolves a resource path relative to the base path.
    ///
    /// Returns `None` for absolute paths and paths that would escape the
    /// base directory.
    fn resolve_contained(&self, path: &str) -> Option<PathBuf> {
        if Path::new(path).is_absolute() {
            return None;
        }

        let full_path = self.base_path.join(path);

        if let Ok(canonical) = full_path.canonicalize()
            && let Some(ref base) = self.canonical_base
        {
            if canonical.starts_with(base) {
                return Some(canonical);
            }
            return None;
        }

        // Canonicalization failed (file missing); reject any ".." component.
        for component in Path::new(path).components() {
            if let std::path::Component::ParentDir = component {
                return None;
            }
        }

        Some(full_path)
    }
}

impl ResourceProvider for FilesystemResourceProvider {
    fn load(&self, path: &str) -> Result<SharedResourceData, ResourceError> {
        let full_path = self
            .resolve_contained(path)
            .ok_or_else(|| ResourceError::NotFound(path.to_string()))?;

        log::debug!("loading resource from {}", full_path.display());
        std::fs::read(&full_path).map(Arc::new).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                ResourceError::NotFound(path.to_string())
            } else {
                ResourceError::LoadFailed {
                    path: path.to_string(),
                    message: e.to_string(),
                }
            }
        })
    }

    fn exists(&self, path: &str) -> bool {
        self.resolve_contained(path)
            .map(|p| p.exists())
            .unwrap_or(false)
    }

    fn name(&self) -> &'static str {
        "FilesystemResourceProvider"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_load_existing_file() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("figure.png"), b"png bytes").unwrap();

        let provider = FilesystemResourceProvider::new(dir.path());
        let data = provider.load("figure.png").unwrap();
        assert_eq!(&*data, b"png bytes");
    }

    #[test]
    fn test_missing_file_is_not_found() {
        let dir = tempdir().unwrap();
        let provider = FilesystemResourceProvider::new(dir.path());

        let result = provider.load("nonexistent.png");
        assert!(matches!(result, Err(ResourceError::NotFound(_))));
    }

    #[test]
    fn test_exists() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("there.png"), b"").unwrap();

        let provider = FilesystemResourceProvider::new(dir.path());
        assert!(provider.exists("there.png"));
        assert!(!provider.exists("elsewhere.png"));
    }

    #[test]
    fn test_blocks_path_traversal() {
        let dir = tempdir().unwrap();
        let provider = FilesystemResourceProvider::new(dir.path());

        assert!(provider.load("../../../etc/passwd").is_err());
        assert!(!provider.exists("../../../etc/passwd"));
        assert!(!provider.exists("foo/../../bar.png"));
    }

    #[test]
    fn test_blocks_absolute_paths() {
        let dir = tempdir().unwrap();
        let provider = FilesystemResourceProvider::new(dir.path());

        assert!(provider.load("/etc/passwd").is_err());
    }

    #[test]
    fn test_allows_nested_paths() {
        let dir = tempdir().unwrap();
        fs::create_dir(dir.path().join("img")).unwrap();
        fs::write(dir.path().join("img/nested.png"), b"nested").unwrap();

        let provider = FilesystemResourceProvider::new(dir.path());
        let data = provider.load("img/nested.png").unwrap();
        assert_eq!(&*data, b"nested");
    }
}
