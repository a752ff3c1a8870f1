//! Optional YAML configuration file
//!
//! The file supplies defaults for signals the environment leaves unset:
//!
//! ```yaml
//! cloud: AzureUSGovernmentCloud
//! environment_file: /etc/azure/stack.json
//! auth_location: /etc/azure/sdk-auth.json
//! ```

mod error;
mod file;

pub use error::{ConfigError, ConfigResult};
pub use file::{FileConfigProvider, ConfigFile};
