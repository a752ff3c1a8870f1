//! Credential acquisition errors

use std::path::PathBuf;

use thiserror::Error;

use crate::resolver::ResolutionError;

/// Errors that can occur while acquiring a credential
///
/// Each variant is a single failed attempt; nothing here is retried.
#[derive(Error, Debug)]
pub enum AcquisitionError {
    /// The target cloud could not be resolved
    #[error(transparent)]
    Resolution(#[from] ResolutionError),

    /// A required variable is set but empty
    #[error("{0} is set but empty")]
    EmptyVariable(&'static str),

    /// Client and tenant ids are set but no secret material is
    #[error(
        "AZURE_CLIENT_ID and AZURE_TENANT_ID are set, but none of AZURE_CLIENT_SECRET, \
         AZURE_CLIENT_CERTIFICATE_PATH or AZURE_USERNAME/AZURE_PASSWORD is"
    )]
    MissingEnvironmentCredential,

    #[error("Failed to read auth file {path}: {source}")]
    AuthFileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse auth file {path}: {source}")]
    AuthFileParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Malformed auth file {path}: {reason}")]
    MalformedAuthFile { path: PathBuf, reason: String },

    /// No Azure CLI to delegate interactive login to
    #[error("Azure CLI (az) not found on PATH; run `az login` or set AZURE_CLIENT_ID and AZURE_TENANT_ID")]
    InteractiveLoginUnavailable,

    /// Failure reported by a custom credential factory
    #[error("Credential factory error: {0}")]
    Factory(String),
}

impl AcquisitionError {
    pub fn malformed_auth_file(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        Self::MalformedAuthFile {
            path: path.into(),
            reason: reason.into(),
        }
    }
}

pub type AcquisitionResult<T> = Result<T, AcquisitionError>;
