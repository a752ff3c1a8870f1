//! Immutable capture of every signal the resolvers consult

use std::collections::HashMap;
use std::fmt;

use crate::config::ConfigFile;
use super::traits::EnvSource;
use super::process::ProcessEnv;

/// Client (application) id of a service principal or managed identity
pub const CLIENT_ID: &str = "AZURE_CLIENT_ID";
/// Directory (tenant) id
pub const TENANT_ID: &str = "AZURE_TENANT_ID";
/// Path of an SDK auth file
pub const AUTH_LOCATION: &str = "AZURE_AUTH_LOCATION";
/// Target cloud name
pub const CLOUD_ENVIRONMENT: &str = "AZURE_ENVIRONMENT";
/// Path of the Azure Stack environment document
pub const ENVIRONMENT_FILEPATH: &str = "AZURE_ENVIRONMENT_FILEPATH";
pub const CLIENT_SECRET: &str = "AZURE_CLIENT_SECRET";
pub const CLIENT_CERTIFICATE_PATH: &str = "AZURE_CLIENT_CERTIFICATE_PATH";
pub const CLIENT_CERTIFICATE_PASSWORD: &str = "AZURE_CLIENT_CERTIFICATE_PASSWORD";
pub const USERNAME: &str = "AZURE_USERNAME";
pub const PASSWORD: &str = "AZURE_PASSWORD";
/// Executable search path, used to find the Azure CLI
pub const PATH: &str = "PATH";
/// Override for the config file location
pub const CONFIG_PATH: &str = "AZCLOUD_CONFIG";

/// Variables captured into a snapshot
pub const TRACKED_VARS: &[&str] = &[
    CLIENT_ID,
    TENANT_ID,
    AUTH_LOCATION,
    CLOUD_ENVIRONMENT,
    ENVIRONMENT_FILEPATH,
    CLIENT_SECRET,
    CLIENT_CERTIFICATE_PATH,
    CLIENT_CERTIFICATE_PASSWORD,
    USERNAME,
    PASSWORD,
    PATH,
    CONFIG_PATH,
];

const SENSITIVE_VARS: &[&str] = &[CLIENT_SECRET, CLIENT_CERTIFICATE_PASSWORD, PASSWORD];

/// Point-in-time view of the process signals
///
/// Resolvers take a snapshot instead of reading `std::env` themselves, so a
/// resolution is a pure function of its input. Capture a new snapshot for
/// every call to pick up changes.
///
/// # Example
///
/// ```
/// use azcloud_core::env::{EnvSnapshot, CLOUD_ENVIRONMENT};
///
/// let env = EnvSnapshot::builder()
///     .var(CLOUD_ENVIRONMENT, "AzureUSGovernmentCloud")
///     .build();
/// assert_eq!(env.cloud_name(), Some("AzureUSGovernmentCloud"));
/// ```
#[derive(Clone, Default, PartialEq, Eq)]
pub struct EnvSnapshot {
    vars: HashMap<String, String>,
}

impl EnvSnapshot {
    /// Start an empty snapshot
    pub fn builder() -> EnvSnapshotBuilder {
        EnvSnapshotBuilder::default()
    }

    /// Capture the tracked variables from a source
    pub fn capture(source: &dyn EnvSource) -> Self {
        let vars = TRACKED_VARS
            .iter()
            .filter_map(|key| source.get(key).map(|value| (key.to_string(), value)))
            .collect();
        Self { vars }
    }

    /// Capture the tracked variables from the process environment
    pub fn from_process() -> Self {
        Self::capture(&ProcessEnv::new())
    }

    /// Fill signals the environment left unset from a config file
    ///
    /// Environment variables always win over config file values.
    pub fn with_config(mut self, config: &ConfigFile) -> Self {
        let fallbacks = [
            (CLOUD_ENVIRONMENT, config.cloud.clone()),
            (
                ENVIRONMENT_FILEPATH,
                config.environment_file.as_ref().map(|p| p.to_string_lossy().into_owned()),
            ),
            (
                AUTH_LOCATION,
                config.auth_location.as_ref().map(|p| p.to_string_lossy().into_owned()),
            ),
        ];
        for (key, value) in fallbacks {
            if let Some(value) = value {
                self.vars.entry(key.to_string()).or_insert(value);
            }
        }
        self
    }

    /// Raw value of a captured variable
    pub fn get(&self, key: &str) -> Option<&str> {
        self.vars.get(key).map(String::as_str)
    }

    /// Value of a captured variable, treating empty as unset
    pub fn get_non_empty(&self, key: &str) -> Option<&str> {
        self.get(key).filter(|v| !v.trim().is_empty())
    }

    pub fn contains(&self, key: &str) -> bool {
        self.vars.contains_key(key)
    }

    /// Cloud name signal, `None` when unset
    pub fn cloud_name(&self) -> Option<&str> {
        self.get(CLOUD_ENVIRONMENT)
    }

    pub fn has_client_id(&self) -> bool {
        self.contains(CLIENT_ID)
    }

    pub fn has_tenant_id(&self) -> bool {
        self.contains(TENANT_ID)
    }

    pub fn client_id(&self) -> Option<&str> {
        self.get(CLIENT_ID)
    }

    pub fn tenant_id(&self) -> Option<&str> {
        self.get(TENANT_ID)
    }

    pub fn auth_location(&self) -> Option<&str> {
        self.get(AUTH_LOCATION)
    }

    pub fn environment_filepath(&self) -> Option<&str> {
        self.get_non_empty(ENVIRONMENT_FILEPATH)
    }

    pub fn search_path(&self) -> Option<&str> {
        self.get(PATH)
    }

    pub fn len(&self) -> usize {
        self.vars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }
}

impl fmt::Debug for EnvSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut keys: Vec<&String> = self.vars.keys().collect();
        keys.sort();
        let mut map = f.debug_map();
        for key in keys {
            if SENSITIVE_VARS.contains(&key.as_str()) {
                map.entry(key, &"<redacted>");
            } else {
                map.entry(key, &self.vars[key]);
            }
        }
        map.finish()
    }
}

/// Builder for snapshots assembled by hand
#[derive(Debug, Default)]
pub struct EnvSnapshotBuilder {
    vars: HashMap<String, String>,
}

impl EnvSnapshotBuilder {
    /// Set a variable, tracked or not
    pub fn var(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.vars.insert(key.into(), value.into());
        self
    }

    pub fn build(self) -> EnvSnapshot {
        EnvSnapshot { vars: self.vars }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use crate::env::MemoryEnv;

    #[test]
    fn test_capture_only_tracked_vars() {
        let source = MemoryEnv::with_vars([
            (CLOUD_ENVIRONMENT, "AzureChinaCloud"),
            (CLIENT_ID, ""),
            ("UNRELATED_VAR", "x"),
        ]);
        let env = EnvSnapshot::capture(&source);

        assert_eq!(env.cloud_name(), Some("AzureChinaCloud"));
        assert!(env.has_client_id());
        assert!(!env.has_tenant_id());
        assert_eq!(env.get("UNRELATED_VAR"), None);
        assert_eq!(env.len(), 2);
    }

    #[test]
    fn test_capture_is_point_in_time() {
        let source = MemoryEnv::with_vars([(CLOUD_ENVIRONMENT, "AzureChinaCloud")]);
        let before = EnvSnapshot::capture(&source);
        source.set(CLOUD_ENVIRONMENT, "AzurePublicCloud");
        let after = EnvSnapshot::capture(&source);

        assert_eq!(before.cloud_name(), Some("AzureChinaCloud"));
        assert_eq!(after.cloud_name(), Some("AzurePublicCloud"));
    }

    #[test]
    fn test_config_fills_only_unset_vars() {
        let config = ConfigFile {
            cloud: Some("AzureUSGovernmentCloud".to_string()),
            environment_file: Some(PathBuf::from("/etc/azure/stack.json")),
            auth_location: None,
        };

        let env = EnvSnapshot::builder()
            .var(CLOUD_ENVIRONMENT, "AzureChinaCloud")
            .build()
            .with_config(&config);
        assert_eq!(env.cloud_name(), Some("AzureChinaCloud"));
        assert_eq!(env.environment_filepath(), Some("/etc/azure/stack.json"));
        assert_eq!(env.auth_location(), None);

        let env = EnvSnapshot::builder().build().with_config(&config);
        assert_eq!(env.cloud_name(), Some("AzureUSGovernmentCloud"));
    }

    #[test]
    fn test_debug_redacts_secrets() {
        let env = EnvSnapshot::builder()
            .var(CLIENT_ID, "client")
            .var(CLIENT_SECRET, "hunter2")
            .var(PASSWORD, "swordfish")
            .build();
        let debug = format!("{:?}", env);
        assert!(debug.contains("client"));
        assert!(!debug.contains("hunter2"));
        assert!(!debug.contains("swordfish"));
    }

    #[test]
    fn test_get_non_empty() {
        let env = EnvSnapshot::builder().var(ENVIRONMENT_FILEPATH, " ").build();
        assert!(env.contains(ENVIRONMENT_FILEPATH));
        assert_eq!(env.environment_filepath(), None);
    }
}
