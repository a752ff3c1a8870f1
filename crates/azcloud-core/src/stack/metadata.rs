//! Azure Stack environment document

use serde::{Deserialize, Serialize};

use crate::types::{CloudConfiguration, ServiceConfiguration, ServiceName};

/// Endpoint metadata for an Azure Stack deployment
///
/// Mirrors the JSON document the Azure SDKs read from
/// `AZURE_ENVIRONMENT_FILEPATH`. Only the fields this crate uses are kept;
/// unknown fields are ignored and missing ones default to empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StackEnvironment {
    pub name: String,
    #[serde(rename = "managementPortalURL")]
    pub management_portal_url: String,
    pub resource_manager_endpoint: String,
    pub active_directory_endpoint: String,
    pub graph_endpoint: String,
    pub key_vault_endpoint: String,
    pub storage_endpoint_suffix: String,
    pub token_audience: String,
}

impl StackEnvironment {
    /// Name of the first required field that is empty, if any
    pub fn missing_field(&self) -> Option<&'static str> {
        if self.resource_manager_endpoint.trim().is_empty() {
            Some("resourceManagerEndpoint")
        } else if self.active_directory_endpoint.trim().is_empty() {
            Some("activeDirectoryEndpoint")
        } else {
            None
        }
    }

    /// Cloud configuration with a single resource-manager entry
    pub fn to_cloud_configuration(&self) -> CloudConfiguration {
        CloudConfiguration::new(self.active_directory_endpoint.clone()).with_service(
            ServiceName::RESOURCE_MANAGER,
            ServiceConfiguration::new(
                self.token_audience.clone(),
                self.resource_manager_endpoint.clone(),
            ),
        )
    }
}
