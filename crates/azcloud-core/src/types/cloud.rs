//! Cloud identifiers and per-cloud endpoint configuration

use std::borrow::Cow;
use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Canonical name of the Azure public cloud
pub const AZURE_PUBLIC_CLOUD: &str = "AzurePublicCloud";
/// Canonical name of the Azure China cloud
pub const AZURE_CHINA_CLOUD: &str = "AzureChinaCloud";
/// Canonical name of the Azure US Government cloud
pub const AZURE_US_GOVERNMENT_CLOUD: &str = "AzureUSGovernmentCloud";
/// Canonical name of an Azure Stack deployment
pub const AZURE_STACK_CLOUD: &str = "AzureStackCloud";

/// Every cloud name the resolver accepts, in the order they are reported to users
pub const RECOGNIZED_CLOUD_NAMES: [&str; 4] = [
    AZURE_PUBLIC_CLOUD,
    AZURE_US_GOVERNMENT_CLOUD,
    AZURE_CHINA_CLOUD,
    AZURE_STACK_CLOUD,
];

/// Which Azure cloud a name signal refers to
///
/// Parsing is total: names outside the fixed vocabulary become
/// `Unrecognized` and are rejected later by the resolver, so the offending
/// value can be reported back to the user.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub enum CloudIdentifier {
    /// Azure public (commercial) cloud
    #[default]
    Public,
    /// Azure operated by 21Vianet
    China,
    /// Azure US Government
    Government,
    /// Azure Stack, endpoints come from a runtime registry
    Stack,
    /// Anything else, kept verbatim
    Unrecognized(String),
}

impl CloudIdentifier {
    /// Parse a cloud name signal
    ///
    /// `None` and the empty string default to `Public`. Any other value,
    /// including whitespace, must match a known name case-insensitively.
    pub fn from_name(name: Option<&str>) -> Self {
        let name = match name {
            Some(n) if !n.is_empty() => n,
            _ => return CloudIdentifier::Public,
        };

        match name.to_uppercase().as_str() {
            "AZUREPUBLICCLOUD" => CloudIdentifier::Public,
            "AZURECHINACLOUD" => CloudIdentifier::China,
            "AZUREUSGOVERNMENTCLOUD" => CloudIdentifier::Government,
            "AZURESTACKCLOUD" => CloudIdentifier::Stack,
            _ => CloudIdentifier::Unrecognized(name.to_string()),
        }
    }

    /// The canonical spelling, or the raw value for unrecognized names
    pub fn as_str(&self) -> &str {
        match self {
            CloudIdentifier::Public => AZURE_PUBLIC_CLOUD,
            CloudIdentifier::China => AZURE_CHINA_CLOUD,
            CloudIdentifier::Government => AZURE_US_GOVERNMENT_CLOUD,
            CloudIdentifier::Stack => AZURE_STACK_CLOUD,
            CloudIdentifier::Unrecognized(name) => name,
        }
    }

    pub fn is_recognized(&self) -> bool {
        !matches!(self, CloudIdentifier::Unrecognized(_))
    }
}

impl fmt::Display for CloudIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Key of a service entry in a [`CloudConfiguration`]
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ServiceName(Cow<'static, str>);

impl ServiceName {
    /// Azure Resource Manager, the control-plane API
    pub const RESOURCE_MANAGER: ServiceName = ServiceName(Cow::Borrowed("resourceManager"));

    pub fn new(name: impl Into<String>) -> Self {
        Self(Cow::Owned(name.into()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ServiceName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Audience and endpoint of one service within a cloud
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceConfiguration {
    /// Token audience for the service
    pub audience: String,
    /// Base URL of the service
    pub endpoint: String,
}

impl ServiceConfiguration {
    pub fn new(audience: impl Into<String>, endpoint: impl Into<String>) -> Self {
        Self {
            audience: audience.into(),
            endpoint: endpoint.into(),
        }
    }
}

/// Authority host plus per-service endpoints for one Azure cloud
///
/// Values are built fresh on every call; the three fixed clouds come from
/// the constructors below, Azure Stack from
/// [`StackEnvironment::to_cloud_configuration`](crate::stack::StackEnvironment::to_cloud_configuration).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CloudConfiguration {
    /// Identity provider that issues tokens for this cloud
    pub authority_host: String,
    /// Configured services
    #[serde(default)]
    pub services: HashMap<ServiceName, ServiceConfiguration>,
}

impl CloudConfiguration {
    /// Create a configuration with no services
    pub fn new(authority_host: impl Into<String>) -> Self {
        Self {
            authority_host: authority_host.into(),
            services: HashMap::new(),
        }
    }

    /// Add or replace a service entry
    pub fn with_service(mut self, name: ServiceName, service: ServiceConfiguration) -> Self {
        self.services.insert(name, service);
        self
    }

    /// Azure public cloud
    pub fn azure_public() -> Self {
        Self::new("https://login.microsoftonline.com/").with_service(
            ServiceName::RESOURCE_MANAGER,
            ServiceConfiguration::new(
                "https://management.core.windows.net/",
                "https://management.azure.com",
            ),
        )
    }

    /// Azure China cloud
    pub fn azure_china() -> Self {
        Self::new("https://login.chinacloudapi.cn/").with_service(
            ServiceName::RESOURCE_MANAGER,
            ServiceConfiguration::new(
                "https://management.core.chinacloudapi.cn",
                "https://management.chinacloudapi.cn",
            ),
        )
    }

    /// Azure US Government cloud
    pub fn azure_government() -> Self {
        Self::new("https://login.microsoftonline.us/").with_service(
            ServiceName::RESOURCE_MANAGER,
            ServiceConfiguration::new(
                "https://management.core.usgovcloudapi.net",
                "https://management.usgovcloudapi.net",
            ),
        )
    }

    /// Look up a service entry
    pub fn service(&self, name: &ServiceName) -> Option<&ServiceConfiguration> {
        self.services.get(name)
    }

    /// The resource-manager entry, if present
    pub fn resource_manager(&self) -> Option<&ServiceConfiguration> {
        self.service(&ServiceName::RESOURCE_MANAGER)
    }
}
