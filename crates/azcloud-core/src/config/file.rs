//! File-based configuration provider (YAML)
//!
//! Located at `$AZCLOUD_CONFIG`, or `<config dir>/azcloud/config.yaml`
//! (~/.config/azcloud/config.yaml on Linux).

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::env::{EnvSnapshot, CONFIG_PATH};
use super::error::{ConfigError, ConfigResult};

/// Configuration file structure
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigFile {
    /// Default cloud name, used when `AZURE_ENVIRONMENT` is unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cloud: Option<String>,

    /// Azure Stack environment document, used when `AZURE_ENVIRONMENT_FILEPATH` is unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub environment_file: Option<PathBuf>,

    /// SDK auth file, used when `AZURE_AUTH_LOCATION` is unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auth_location: Option<PathBuf>,
}

/// Reads the config file from disk
///
/// The file is read on every [`load`](Self::load); a missing file is an
/// empty config.
///
/// # Example
///
/// ```no_run
/// use azcloud_core::config::FileConfigProvider;
///
/// let config = FileConfigProvider::user().load().unwrap();
/// println!("default cloud: {:?}", config.cloud);
/// ```
#[derive(Debug, Clone)]
pub struct FileConfigProvider {
    path: PathBuf,
}

impl FileConfigProvider {
    /// Create a provider for a specific path
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Create a user-level config provider (~/.config/azcloud/config.yaml)
    pub fn user() -> Self {
        // XDG config directory on Linux, ~/Library/Application Support on macOS
        let config_dir = dirs::config_dir()
            .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")).join(".config"));
        Self::new(config_dir.join("azcloud").join("config.yaml"))
    }

    /// Honor `AZCLOUD_CONFIG` when set, otherwise the user-level file
    pub fn locate(env: &EnvSnapshot) -> Self {
        match env.get_non_empty(CONFIG_PATH) {
            Some(path) => Self::new(path),
            None => Self::user(),
        }
    }

    /// Get the config file path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Check if the config file exists
    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Load config from file
    pub fn load(&self) -> ConfigResult<ConfigFile> {
        if !self.path.exists() {
            return Ok(ConfigFile::default());
        }

        let content = fs::read_to_string(&self.path).map_err(|source| ConfigError::Io {
            path: self.path.clone(),
            source,
        })?;

        if content.trim().is_empty() {
            return Ok(ConfigFile::default());
        }

        serde_yaml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: self.path.clone(),
            source,
        })
    }

    /// Save config to file
    pub fn save(&self, config: &ConfigFile) -> ConfigResult<()> {
        let io_err = |source| ConfigError::Io {
            path: self.path.clone(),
            source,
        };

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(io_err)?;
        }

        let content = serde_yaml::to_string(config).map_err(|source| ConfigError::Parse {
            path: self.path.clone(),
            source,
        })?;

        fs::write(&self.path, content).map_err(io_err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_is_empty_config() {
        let dir = TempDir::new().unwrap();
        let provider = FileConfigProvider::new(dir.path().join("config.yaml"));

        assert!(!provider.exists());
        assert_eq!(provider.load().unwrap(), ConfigFile::default());
    }

    #[test]
    fn test_load_config_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.yaml");
        fs::write(
            &path,
            "cloud: AzureChinaCloud\nenvironment_file: /etc/azure/stack.json\n",
        )
        .unwrap();

        let config = FileConfigProvider::new(&path).load().unwrap();
        assert_eq!(config.cloud.as_deref(), Some("AzureChinaCloud"));
        assert_eq!(config.environment_file, Some(PathBuf::from("/etc/azure/stack.json")));
        assert_eq!(config.auth_location, None);
    }

    #[test]
    fn test_empty_file_is_empty_config() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.yaml");
        fs::write(&path, "\n").unwrap();

        assert_eq!(FileConfigProvider::new(&path).load().unwrap(), ConfigFile::default());
    }

    #[test]
    fn test_invalid_yaml_is_parse_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.yaml");
        fs::write(&path, "cloud: [unterminated").unwrap();

        let err = FileConfigProvider::new(&path).load().unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn test_save_then_load() {
        let dir = TempDir::new().unwrap();
        let provider = FileConfigProvider::new(dir.path().join("nested").join("config.yaml"));
        let config = ConfigFile {
            cloud: Some("AzureStackCloud".to_string()),
            environment_file: None,
            auth_location: Some(PathBuf::from("/tmp/auth.json")),
        };

        provider.save(&config).unwrap();
        assert_eq!(provider.load().unwrap(), config);
    }

    #[test]
    fn test_locate_honors_override() {
        let env = EnvSnapshot::builder().var(CONFIG_PATH, "/opt/azcloud.yaml").build();
        assert_eq!(FileConfigProvider::locate(&env).path(), Path::new("/opt/azcloud.yaml"));
    }
}
