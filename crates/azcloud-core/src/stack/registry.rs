//! Registries that resolve an Azure Stack environment by name

use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

use parking_lot::RwLock;

use crate::env::EnvSnapshot;
use super::error::{RegistryError, RegistryResult};
use super::metadata::StackEnvironment;

/// Source of Azure Stack endpoint metadata
///
/// Implementations:
/// - `FileEnvironmentRegistry`: the JSON document at `AZURE_ENVIRONMENT_FILEPATH`
/// - `MemoryEnvironmentRegistry`: environments registered in memory
pub trait EnvironmentRegistry: Send + Sync {
    /// Human-readable name of this registry
    fn name(&self) -> &str;

    /// Look up the environment called `name`
    fn lookup(&self, name: &str, env: &EnvSnapshot) -> RegistryResult<StackEnvironment>;
}

/// Reads the Azure Stack environment document named by the snapshot
///
/// The file is read on every lookup. The `name` argument is not matched
/// against the document: whatever the file describes is the stack cloud.
#[derive(Debug, Default, Clone, Copy)]
pub struct FileEnvironmentRegistry;

impl FileEnvironmentRegistry {
    pub fn new() -> Self {
        Self
    }
}

impl EnvironmentRegistry for FileEnvironmentRegistry {
    fn name(&self) -> &str {
        "file"
    }

    fn lookup(&self, name: &str, env: &EnvSnapshot) -> RegistryResult<StackEnvironment> {
        let path = env
            .environment_filepath()
            .map(PathBuf::from)
            .ok_or(RegistryError::EnvironmentFileNotSet)?;

        crate::debug_log!("Loading environment {} from {}", name, path.display());

        let content = fs::read_to_string(&path).map_err(|source| RegistryError::Io {
            path: path.clone(),
            source,
        })?;
        let content = content.trim_start_matches('\u{feff}');

        serde_json::from_str(content).map_err(|source| RegistryError::Parse { path, source })
    }
}

/// In-memory registry keyed by environment name, case-insensitive
///
/// # Example
///
/// ```
/// use azcloud_core::env::EnvSnapshot;
/// use azcloud_core::stack::{EnvironmentRegistry, MemoryEnvironmentRegistry, StackEnvironment};
///
/// let registry = MemoryEnvironmentRegistry::new();
/// registry.register(StackEnvironment {
///     name: "AzureStackCloud".to_string(),
///     resource_manager_endpoint: "https://management.local.azurestack.external/".to_string(),
///     ..Default::default()
/// });
///
/// let env = registry.lookup("azurestackcloud", &EnvSnapshot::default()).unwrap();
/// assert_eq!(env.name, "AzureStackCloud");
/// ```
#[derive(Debug, Default)]
pub struct MemoryEnvironmentRegistry {
    environments: RwLock<HashMap<String, StackEnvironment>>,
}

impl MemoryEnvironmentRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an environment under its own name, replacing any previous entry
    pub fn register(&self, environment: StackEnvironment) {
        self.environments
            .write()
            .insert(environment.name.to_lowercase(), environment);
    }

    pub fn unregister(&self, name: &str) -> Option<StackEnvironment> {
        self.environments.write().remove(&name.to_lowercase())
    }

    pub fn len(&self) -> usize {
        self.environments.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl EnvironmentRegistry for MemoryEnvironmentRegistry {
    fn name(&self) -> &str {
        "memory"
    }

    fn lookup(&self, name: &str, _env: &EnvSnapshot) -> RegistryResult<StackEnvironment> {
        self.environments
            .read()
            .get(&name.to_lowercase())
            .cloned()
            .ok_or_else(|| RegistryError::NotFound(name.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::ENVIRONMENT_FILEPATH;
    use tempfile::TempDir;

    fn write_stack_file(dir: &TempDir, content: &str) -> PathBuf {
        let path = dir.path().join("stack.json");
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_file_registry_requires_path() {
        let err = FileEnvironmentRegistry::new()
            .lookup("AzureStackCloud", &EnvSnapshot::default())
            .unwrap_err();
        assert!(matches!(err, RegistryError::EnvironmentFileNotSet));
    }

    #[test]
    fn test_file_registry_reads_document() {
        let dir = TempDir::new().unwrap();
        let path = write_stack_file(
            &dir,
            "\u{feff}{\"name\": \"AzureStackCloud\", \"resourceManagerEndpoint\": \"https://management.local/\"}",
        );
        let env = EnvSnapshot::builder()
            .var(ENVIRONMENT_FILEPATH, path.to_string_lossy())
            .build();

        let stack = FileEnvironmentRegistry::new().lookup("AzureStackCloud", &env).unwrap();
        assert_eq!(stack.resource_manager_endpoint, "https://management.local/");
    }

    #[test]
    fn test_file_registry_missing_file() {
        let dir = TempDir::new().unwrap();
        let env = EnvSnapshot::builder()
            .var(ENVIRONMENT_FILEPATH, dir.path().join("absent.json").to_string_lossy())
            .build();

        let err = FileEnvironmentRegistry::new().lookup("AzureStackCloud", &env).unwrap_err();
        assert!(matches!(err, RegistryError::Io { .. }));
    }

    #[test]
    fn test_file_registry_invalid_json() {
        let dir = TempDir::new().unwrap();
        let path = write_stack_file(&dir, "not json");
        let env = EnvSnapshot::builder()
            .var(ENVIRONMENT_FILEPATH, path.to_string_lossy())
            .build();

        let err = FileEnvironmentRegistry::new().lookup("AzureStackCloud", &env).unwrap_err();
        assert!(matches!(err, RegistryError::Parse { .. }));
    }

    #[test]
    fn test_memory_registry() {
        let registry = MemoryEnvironmentRegistry::new();
        assert!(registry.is_empty());

        registry.register(StackEnvironment {
            name: "AzureStackCloud".to_string(),
            ..Default::default()
        });
        assert!(registry.lookup("AZURESTACKCLOUD", &EnvSnapshot::default()).is_ok());

        registry.unregister("azurestackcloud");
        let err = registry.lookup("AzureStackCloud", &EnvSnapshot::default()).unwrap_err();
        assert!(matches!(err, RegistryError::NotFound(ref n) if n == "AzureStackCloud"));
    }
}
