//! azcloud Core
//!
//! Resolves which Azure cloud a process targets and produces credentials and
//! endpoints scoped to it, without tying callers to a particular Azure SDK.
//!
//! ## Resolution
//!
//! Everything works from an [`EnvSnapshot`], an immutable capture of the
//! environment variables (and optional config file) that matter:
//!
//! ```rust,ignore
//! use azcloud_core::{load_environment, CloudConfigResolver, CredentialSelector};
//!
//! let env = load_environment()?;
//!
//! // Endpoints for the cloud named by AZURE_ENVIRONMENT
//! let cloud = CloudConfigResolver::new().resolve(&env)?;
//!
//! // A credential scoped to that cloud
//! let credential = CredentialSelector::new().acquire(&env)?;
//! ```
//!
//! The free functions at the crate root capture a fresh snapshot on every
//! call; nothing is cached between calls.

pub mod types;
pub mod env;
pub mod logging;
pub mod config;
pub mod stack;
pub mod resolver;
pub mod credentials;

// Re-export commonly used types
pub use types::{
    CloudIdentifier, CloudConfiguration, ServiceConfiguration, ServiceName,
    CredentialStrategy, ArmClientOptions,
};

pub use env::{EnvSource, EnvSnapshot, ProcessEnv, MemoryEnv};

pub use logging::{Logger, SharedLogger, NoOpLogger, ConsoleLogger};

pub use config::{ConfigFile, FileConfigProvider, ConfigError, ConfigResult};

pub use stack::{
    EnvironmentRegistry, FileEnvironmentRegistry, MemoryEnvironmentRegistry,
    StackEnvironment, RegistryError, RegistryResult,
};

pub use resolver::{CloudConfigResolver, ArmOptionsBuilder, ResolutionError, ResolutionResult};

pub use credentials::{
    CredentialSelector, CredentialFactory, DefaultCredentialFactory,
    Credential, Authorizer, CredentialScope, CredentialSource, AuthFile,
    AcquisitionError, AcquisitionResult,
};

/// Capture the process environment, filling gaps from the config file
pub fn load_environment() -> ResolutionResult<EnvSnapshot> {
    let env = EnvSnapshot::from_process();
    let config = FileConfigProvider::locate(&env).load()?;
    Ok(env.with_config(&config))
}

/// Cloud configuration for the current process
pub fn resolve_cloud() -> ResolutionResult<CloudConfiguration> {
    CloudConfigResolver::new().resolve(&load_environment()?)
}

/// ARM client options for the current process
pub fn arm_client_options() -> ResolutionResult<ArmClientOptions> {
    ArmOptionsBuilder::new().build_options(&load_environment()?)
}

/// Resource Manager endpoint for the current process
pub fn arm_endpoint() -> ResolutionResult<String> {
    ArmOptionsBuilder::new().build_endpoint(&load_environment()?)
}

/// Credential for the current process, scoped to its cloud
pub fn new_azure_credential() -> AcquisitionResult<Credential> {
    CredentialSelector::new().acquire(&load_environment()?)
}

/// Legacy authorizer for the current process
#[deprecated(note = "use `new_azure_credential`")]
#[allow(deprecated)]
pub fn new_authorizer() -> AcquisitionResult<Authorizer> {
    CredentialSelector::new().acquire_authorizer(&load_environment()?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env as process_env;

    // The only test that touches AZURE_ENVIRONMENT in the real process environment
    #[test]
    fn test_process_functions_reread_environment() {
        let dir = tempfile::TempDir::new().unwrap();
        let original = process_env::var(env::CLOUD_ENVIRONMENT).ok();
        process_env::set_var(env::CONFIG_PATH, dir.path().join("absent.yaml"));

        process_env::remove_var(env::CLOUD_ENVIRONMENT);
        assert_eq!(arm_endpoint().unwrap(), "https://management.azure.com");
        assert_eq!(resolve_cloud().unwrap(), CloudConfiguration::azure_public());

        process_env::set_var(env::CLOUD_ENVIRONMENT, "AzureChinaCloud");
        assert_eq!(arm_endpoint().unwrap(), "https://management.chinacloudapi.cn");
        assert_eq!(
            arm_client_options().unwrap().cloud,
            CloudConfiguration::azure_china()
        );

        process_env::set_var(env::CLOUD_ENVIRONMENT, "InvalidCloud");
        let err = arm_endpoint().unwrap_err();
        assert!(err.to_string().contains("no cloud environment matching the name"));

        match original {
            Some(value) => process_env::set_var(env::CLOUD_ENVIRONMENT, value),
            None => process_env::remove_var(env::CLOUD_ENVIRONMENT),
        }
        process_env::remove_var(env::CONFIG_PATH);
    }

    #[test]
    fn test_config_file_supplies_default_cloud() {
        let dir = tempfile::TempDir::new().unwrap();
        let provider = FileConfigProvider::new(dir.path().join("config.yaml"));
        provider
            .save(&ConfigFile {
                cloud: Some("AzureUSGovernmentCloud".to_string()),
                ..Default::default()
            })
            .unwrap();

        let env = EnvSnapshot::builder().build().with_config(&provider.load().unwrap());
        assert_eq!(
            ArmOptionsBuilder::new().build_endpoint(&env).unwrap(),
            "https://management.usgovcloudapi.net"
        );
    }
}
