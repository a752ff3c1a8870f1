//! Cloud configuration resolution
//!
//! Maps a cloud name signal to a [`CloudConfiguration`]:
//! 1. Explicit name passed by the caller
//! 2. `AZURE_ENVIRONMENT` from the snapshot (or the config file's `cloud`)
//! 3. `AzurePublicCloud` when both are absent or empty
//!
//! Public, China and US Government come from compiled-in tables. Azure Stack
//! is looked up in an [`EnvironmentRegistry`] behind the same entry point.

use std::fmt;
use std::sync::Arc;

use crate::env::EnvSnapshot;
use crate::stack::{EnvironmentRegistry, FileEnvironmentRegistry};
use crate::types::{CloudConfiguration, CloudIdentifier};
use super::error::{ResolutionError, ResolutionResult};

/// Resolves the cloud a process should target
///
/// Holds no state besides the Azure Stack registry; every call works only
/// from the snapshot it is given.
///
/// # Example
///
/// ```
/// use azcloud_core::env::{EnvSnapshot, CLOUD_ENVIRONMENT};
/// use azcloud_core::resolver::CloudConfigResolver;
///
/// let env = EnvSnapshot::builder().var(CLOUD_ENVIRONMENT, "azurechinacloud").build();
/// let cloud = CloudConfigResolver::new().resolve(&env).unwrap();
/// assert_eq!(
///     cloud.resource_manager().unwrap().endpoint,
///     "https://management.chinacloudapi.cn"
/// );
/// ```
#[derive(Clone)]
pub struct CloudConfigResolver {
    registry: Arc<dyn EnvironmentRegistry>,
}

impl CloudConfigResolver {
    /// Create a resolver that reads Azure Stack metadata from `AZURE_ENVIRONMENT_FILEPATH`
    pub fn new() -> Self {
        Self::with_registry(Arc::new(FileEnvironmentRegistry::new()))
    }

    /// Create a resolver with a custom Azure Stack registry
    pub fn with_registry(registry: Arc<dyn EnvironmentRegistry>) -> Self {
        Self { registry }
    }

    /// Resolve the cloud named by the snapshot
    pub fn resolve(&self, env: &EnvSnapshot) -> ResolutionResult<CloudConfiguration> {
        self.resolve_name(env.cloud_name(), env)
    }

    /// Resolve an explicitly supplied cloud name
    ///
    /// `None` or an empty name resolves to the public cloud. The snapshot is
    /// only consulted for Azure Stack lookups.
    pub fn resolve_name(
        &self,
        name: Option<&str>,
        env: &EnvSnapshot,
    ) -> ResolutionResult<CloudConfiguration> {
        let identifier = CloudIdentifier::from_name(name);
        crate::debug_log!("Resolving cloud {}", identifier);

        let config = match identifier {
            CloudIdentifier::Public => CloudConfiguration::azure_public(),
            CloudIdentifier::China => CloudConfiguration::azure_china(),
            CloudIdentifier::Government => CloudConfiguration::azure_government(),
            CloudIdentifier::Stack => {
                // The registry sees the caller's spelling, like the SDK lookup does
                let stack_name = name.unwrap_or(crate::types::AZURE_STACK_CLOUD);
                self.resolve_stack(stack_name, env)?
            }
            CloudIdentifier::Unrecognized(name) => {
                crate::warn_log!("Unrecognized cloud name: {:?}", name);
                return Err(ResolutionError::unrecognized_cloud_name(name));
            }
        };

        Ok(config)
    }

    fn resolve_stack(&self, name: &str, env: &EnvSnapshot) -> ResolutionResult<CloudConfiguration> {
        let stack = self.registry.lookup(name, env)?;

        if let Some(field) = stack.missing_field() {
            return Err(ResolutionError::IncompleteStackEnvironment {
                name: name.to_string(),
                field,
            });
        }

        crate::info_log!(
            "Azure Stack {} resolved via {} registry: {}",
            name,
            self.registry.name(),
            stack.resource_manager_endpoint
        );
        Ok(stack.to_cloud_configuration())
    }
}

impl Default for CloudConfigResolver {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for CloudConfigResolver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CloudConfigResolver")
            .field("registry", &self.registry.name())
            .finish()
    }
}
