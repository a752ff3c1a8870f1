//! Resolution error types

use thiserror::Error;

use crate::config::ConfigError;
use crate::stack::RegistryError;
use crate::types::ServiceName;

/// Errors that can occur while resolving the target cloud
#[derive(Error, Debug)]
pub enum ResolutionError {
    /// The cloud name is not one of the recognized names
    #[error(
        "no cloud environment matching the name: {name}. Available values are: \
         AzurePublicCloud (default), AzureUSGovernmentCloud, AzureChinaCloud or AzureStackCloud"
    )]
    UnrecognizedCloudName {
        name: String,
        recognized: Vec<&'static str>,
    },

    /// Looking up the Azure Stack environment failed
    #[error("Azure Stack environment lookup failed: {0}")]
    Stack(#[from] RegistryError),

    /// The Azure Stack environment lacks a field the configuration needs
    #[error("Azure Stack environment {name} is missing {field}")]
    IncompleteStackEnvironment { name: String, field: &'static str },

    /// The resolved configuration has no entry for a required service
    #[error("no {service} service configuration found for the current cloud")]
    ServiceNotConfigured { service: ServiceName },

    /// The config file could not be loaded
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

impl ResolutionError {
    pub fn unrecognized_cloud_name(name: impl Into<String>) -> Self {
        Self::UnrecognizedCloudName {
            name: name.into(),
            recognized: crate::types::RECOGNIZED_CLOUD_NAMES.to_vec(),
        }
    }

    pub fn service_not_configured(service: ServiceName) -> Self {
        Self::ServiceNotConfigured { service }
    }
}

pub type ResolutionResult<T> = Result<T, ResolutionError>;
