//! ResourceProvider trait for abstracting binary resource loading.
//!
//! The conversion engine reads embedded images through this trait so it is
//! never tied to filesystem access.

use std::fmt::Debug;
use std::sync::Arc;
use thiserror::Error;

/// Error type for resource loading operations.
#[derive(Error, Debug, Clone)]
pub enum ResourceError {
    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Failed to load resource '{path}': {message}")]
    LoadFailed { path: String, message: String },

    #[error("I/O error: {0}")]
    Io(String),
}

impl From<std::io::Error> for ResourceError {
    fn from(err: std::io::Error) -> Self {
        ResourceError::Io(err.to_string())
    }
}

/// Shared resource data type (reference-counted bytes).
pub type SharedResourceData = Arc<Vec<u8>>;

/// A trait for loading binary resources from various sources.
///
/// Implementations exist for the local filesystem
/// (`FilesystemResourceProvider` in the platform crate) and pre-populated
/// memory ([`InMemoryResourceProvider`], always available).
pub trait ResourceProvider: Send + Sync + Debug {
    /// Load a resource by its path. Fails with [`ResourceError::NotFound`]
    /// when the path does not resolve.
    fn load(&self, path: &str) -> Result<SharedResourceData, ResourceError>;

    /// Check whether a resource exists without loading it.
    fn exists(&self, path: &str) -> bool;

    /// Returns a human-readable name for this provider (for logging).
    fn name(&self) -> &'static str;
}

/// An in-memory resource provider.
///
/// Resources must be pre-populated before use. This is the simplest provider
/// and the one conversion tests run against.
#[derive(Debug, Default)]
pub struct InMemoryResourceProvider {
    resources: std::sync::RwLock<std::collections::HashMap<String, SharedResourceData>>,
}

impl InMemoryResourceProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a resource to the in-memory store.
    ///
    /// # Errors
    ///
    /// Returns `ResourceError::LoadFailed` if the internal lock is poisoned.
    pub fn add(&self, path: impl Into<String>, data: Vec<u8>) -> Result<(), ResourceError> {
        let path_string = path.into();
        let mut resources = self
            .resources
            .write()
            .map_err(|_| ResourceError::LoadFailed {
                path: path_string.clone(),
                message: "resource store lock poisoned".to_string(),
            })?;
        resources.insert(path_string, Arc::new(data));
        Ok(())
    }

    /// Get the number of resources in the store. Returns 0 if the lock is
    /// poisoned.
    pub fn len(&self) -> usize {
        self.resources.read().map(|r| r.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.resources.read().map(|r| r.is_empty()).unwrap_or(true)
    }
}

impl ResourceProvider for InMemoryResourceProvider {
    fn load(&self, path: &str) -> Result<SharedResourceData, ResourceError> {
        let resources = self
            .resources
            .read()
            .map_err(|_| ResourceError::LoadFailed {
                path: path.to_string(),
                message: "resource store lock poisoned".to_string(),
            })?;
        resources
            .get(path)
            .cloned()
            .ok_or_else(|| ResourceError::NotFound(path.to_string()))
    }

    fn exists(&self, path: &str) -> bool {
        self.resources
            .read()
            .map(|r| r.contains_key(path))
            .unwrap_or(false)
    }

    fn name(&self) -> &'static str {
        "InMemoryResourceProvider"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_in_memory_provider_add_and_load() {
        let provider = InMemoryResourceProvider::new();
        provider.add("diagram.png", b"not a real png".to_vec()).unwrap();

        let data = provider.load("diagram.png").unwrap();
        assert_eq!(&*data, b"not a real png");
    }

    #[test]
    fn test_in_memory_provider_not_found() {
        let provider = InMemoryResourceProvider::new();
        let result = provider.load("nonexistent.png");
        assert!(matches!(result, Err(ResourceError::NotFound(_))));
    }

    #[test]
    fn test_in_memory_provider_exists() {
        let provider = InMemoryResourceProvider::new();
        provider.add("exists.bin", vec![]).unwrap();

        assert!(provider.exists("exists.bin"));
        assert!(!provider.exists("not_exists.bin"));
    }

    #[test]
    fn test_in_memory_provider_overwrite() {
        let provider = InMemoryResourceProvider::new();
        provider.add("img.png", b"original".to_vec()).unwrap();
        provider.add("img.png", b"updated".to_vec()).unwrap();

        let data = provider.load("img.png").unwrap();
        assert_eq!(&*data, b"updated");
        assert_eq!(provider.len(), 1);
    }

    #[test]
    fn test_resource_error_display() {
        let err = ResourceError::NotFound("missing.png".to_string());
        assert!(err.to_string().contains("missing.png"));

        let err = ResourceError::LoadFailed {
            path: "file.bin".to_string(),
            message: "permission denied".to_string(),
        };
        assert!(err.to_string().contains("file.bin"));
        assert!(err.to_string().contains("permission denied"));
    }

    #[test]
    fn test_resource_error_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let resource_err: ResourceError = io_err.into();
        assert!(matches!(resource_err, ResourceError::Io(_)));
    }
}
