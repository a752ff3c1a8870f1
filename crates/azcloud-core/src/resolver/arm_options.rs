//! Options and endpoints for callers that build their own ARM clients

use crate::env::EnvSnapshot;
use crate::types::{ArmClientOptions, ServiceName};
use super::cloud_config::CloudConfigResolver;
use super::error::{ResolutionError, ResolutionResult};

/// Projects the resolved cloud into client options
///
/// # Example
///
/// ```
/// use azcloud_core::env::EnvSnapshot;
/// use azcloud_core::resolver::ArmOptionsBuilder;
///
/// let builder = ArmOptionsBuilder::new();
/// let endpoint = builder.build_endpoint(&EnvSnapshot::default()).unwrap();
/// assert_eq!(endpoint, "https://management.azure.com");
/// ```
#[derive(Debug, Clone, Default)]
pub struct ArmOptionsBuilder {
    resolver: CloudConfigResolver,
}

impl ArmOptionsBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_resolver(resolver: CloudConfigResolver) -> Self {
        Self { resolver }
    }

    /// Client options configured for the current cloud
    pub fn build_options(&self, env: &EnvSnapshot) -> ResolutionResult<ArmClientOptions> {
        let cloud = self.resolver.resolve(env)?;
        Ok(ArmClientOptions::new(cloud))
    }

    /// Resource Manager endpoint of the current cloud
    pub fn build_endpoint(&self, env: &EnvSnapshot) -> ResolutionResult<String> {
        let cloud = self.resolver.resolve(env)?;
        cloud
            .resource_manager()
            .map(|rm| rm.endpoint.clone())
            .ok_or_else(|| ResolutionError::service_not_configured(ServiceName::RESOURCE_MANAGER))
    }
}
