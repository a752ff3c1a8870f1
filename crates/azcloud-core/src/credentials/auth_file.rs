//! SDK auth files
//!
//! The JSON document written by `az ad sp create-for-rbac --sdk-auth` and
//! referenced by `AZURE_AUTH_LOCATION`.

use std::fmt;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::error::{AcquisitionError, AcquisitionResult};

// Public cloud base URIs an auth file can be asked to map
const PUBLIC_SERVICE_MANAGEMENT: &str = "https://management.core.windows.net/";
const PUBLIC_RESOURCE_MANAGER: &str = "https://management.azure.com/";
const PUBLIC_ACTIVE_DIRECTORY: &str = "https://login.microsoftonline.com/";
const PUBLIC_GALLERY: &str = "https://gallery.azure.com/";
const PUBLIC_GRAPH: &str = "https://graph.windows.net/";

/// Parsed SDK auth file
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AuthFile {
    pub client_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_secret: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_certificate: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_certificate_password: Option<String>,
    pub subscription_id: String,
    pub tenant_id: String,
    pub active_directory_endpoint_url: String,
    pub resource_manager_endpoint_url: String,
    pub active_directory_graph_resource_id: String,
    pub sql_management_endpoint_url: String,
    pub gallery_endpoint_url: String,
    pub management_endpoint_url: String,
}

impl AuthFile {
    /// Read and validate an auth file
    pub fn load(path: &Path) -> AcquisitionResult<Self> {
        let content = fs::read_to_string(path).map_err(|source| AcquisitionError::AuthFileRead {
            path: path.to_path_buf(),
            source,
        })?;

        let file: AuthFile = serde_json::from_str(content.trim_start_matches('\u{feff}'))
            .map_err(|source| AcquisitionError::AuthFileParse {
                path: path.to_path_buf(),
                source,
            })?;

        file.validate(path)?;
        Ok(file)
    }

    fn validate(&self, path: &Path) -> AcquisitionResult<()> {
        if self.client_id.trim().is_empty() {
            return Err(AcquisitionError::malformed_auth_file(path, "clientId is missing"));
        }
        if self.tenant_id.trim().is_empty() {
            return Err(AcquisitionError::malformed_auth_file(path, "tenantId is missing"));
        }
        let has_secret = self.client_secret.as_deref().is_some_and(|s| !s.is_empty());
        let has_certificate = self.client_certificate.as_deref().is_some_and(|s| !s.is_empty());
        if !has_secret && !has_certificate {
            return Err(AcquisitionError::malformed_auth_file(
                path,
                "neither clientSecret nor clientCertificate is set",
            ));
        }
        Ok(())
    }

    /// Map a public-cloud base URI to the matching endpoint recorded in the file
    ///
    /// Returns `None` when the base URI is not one of the known public
    /// endpoints or the file leaves the matching field empty.
    pub fn resource_for(&self, base_uri: &str) -> Option<&str> {
        let mut normalized = base_uri.trim().to_string();
        if !normalized.ends_with('/') {
            normalized.push('/');
        }

        let value = match normalized.as_str() {
            PUBLIC_SERVICE_MANAGEMENT => &self.management_endpoint_url,
            PUBLIC_RESOURCE_MANAGER => &self.resource_manager_endpoint_url,
            PUBLIC_ACTIVE_DIRECTORY => &self.active_directory_endpoint_url,
            PUBLIC_GALLERY => &self.gallery_endpoint_url,
            PUBLIC_GRAPH => &self.active_directory_graph_resource_id,
            _ => return None,
        };
        Some(value.as_str()).filter(|v| !v.is_empty())
    }
}

impl fmt::Debug for AuthFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthFile")
            .field("client_id", &self.client_id)
            .field("client_secret", &self.client_secret.as_ref().map(|_| "<redacted>"))
            .field("client_certificate", &self.client_certificate)
            .field(
                "client_certificate_password",
                &self.client_certificate_password.as_ref().map(|_| "<redacted>"),
            )
            .field("subscription_id", &self.subscription_id)
            .field("tenant_id", &self.tenant_id)
            .field("resource_manager_endpoint_url", &self.resource_manager_endpoint_url)
            .finish()
    }
}
