//! Client options for callers that build their own Resource Manager clients

use serde::{Deserialize, Serialize};

use super::cloud::{CloudConfiguration, ServiceConfiguration};

/// Options handed to downstream ARM client constructors
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArmClientOptions {
    /// Cloud the client should talk to
    pub cloud: CloudConfiguration,
}

impl ArmClientOptions {
    pub fn new(cloud: CloudConfiguration) -> Self {
        Self { cloud }
    }

    /// The resource-manager entry of the wrapped cloud
    pub fn resource_manager(&self) -> Option<&ServiceConfiguration> {
        self.cloud.resource_manager()
    }
}

impl From<CloudConfiguration> for ArmClientOptions {
    fn from(cloud: CloudConfiguration) -> Self {
        Self::new(cloud)
    }
}
