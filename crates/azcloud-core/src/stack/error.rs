//! Azure Stack registry errors

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while looking up an Azure Stack environment
#[derive(Error, Debug)]
pub enum RegistryError {
    #[error("AZURE_ENVIRONMENT_FILEPATH is not set; it must point at the Azure Stack environment file")]
    EnvironmentFileNotSet,

    #[error("Failed to read environment file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse environment file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Environment not registered: {0}")]
    NotFound(String),
}

pub type RegistryResult<T> = Result<T, RegistryError>;
