//! Acquired credentials

use std::fmt;
use std::path::PathBuf;

use crate::types::{CloudConfiguration, CredentialStrategy};
use super::auth_file::AuthFile;

/// Where tokens should be requested and for which resource
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CredentialScope {
    /// Identity provider to request tokens from
    pub authority_host: String,
    /// Resource (audience or endpoint) tokens are issued for
    pub resource: String,
}

impl CredentialScope {
    pub fn new(authority_host: impl Into<String>, resource: impl Into<String>) -> Self {
        Self {
            authority_host: authority_host.into(),
            resource: resource.into(),
        }
    }

    /// OAuth scope string for the resource, e.g. `https://management.azure.com/.default`
    pub fn token_scope(&self) -> String {
        format!("{}/.default", self.resource.trim_end_matches('/'))
    }
}

/// Credential material produced by a [`CredentialFactory`](super::CredentialFactory)
#[derive(Clone, PartialEq, Eq)]
pub enum CredentialSource {
    /// Service principal with a client secret
    ClientSecret {
        tenant_id: String,
        client_id: String,
        client_secret: String,
    },
    /// Service principal with a certificate on disk
    ClientCertificate {
        tenant_id: String,
        client_id: String,
        certificate_path: PathBuf,
        certificate_password: Option<String>,
    },
    /// User account with username and password
    UsernamePassword {
        tenant_id: String,
        client_id: String,
        username: String,
        password: String,
    },
    /// Service principal described by an SDK auth file
    AuthFile {
        path: PathBuf,
        /// Resource the file maps the requested scope to
        resource: String,
        file: AuthFile,
    },
    /// Tokens obtained through `az account get-access-token`
    AzureCli {
        executable: PathBuf,
        tenant_id: Option<String>,
    },
}

impl CredentialSource {
    /// Short label for logs
    pub fn kind(&self) -> &'static str {
        match self {
            CredentialSource::ClientSecret { .. } => "client-secret",
            CredentialSource::ClientCertificate { .. } => "client-certificate",
            CredentialSource::UsernamePassword { .. } => "username-password",
            CredentialSource::AuthFile { .. } => "auth-file",
            CredentialSource::AzureCli { .. } => "azure-cli",
        }
    }
}

impl fmt::Debug for CredentialSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CredentialSource::ClientSecret { tenant_id, client_id, .. } => f
                .debug_struct("ClientSecret")
                .field("tenant_id", tenant_id)
                .field("client_id", client_id)
                .field("client_secret", &"<redacted>")
                .finish(),
            CredentialSource::ClientCertificate {
                tenant_id,
                client_id,
                certificate_path,
                certificate_password,
            } => f
                .debug_struct("ClientCertificate")
                .field("tenant_id", tenant_id)
                .field("client_id", client_id)
                .field("certificate_path", certificate_path)
                .field("certificate_password", &certificate_password.as_ref().map(|_| "<redacted>"))
                .finish(),
            CredentialSource::UsernamePassword { tenant_id, client_id, username, .. } => f
                .debug_struct("UsernamePassword")
                .field("tenant_id", tenant_id)
                .field("client_id", client_id)
                .field("username", username)
                .field("password", &"<redacted>")
                .finish(),
            CredentialSource::AuthFile { path, resource, file } => f
                .debug_struct("AuthFile")
                .field("path", path)
                .field("resource", resource)
                .field("file", file)
                .finish(),
            CredentialSource::AzureCli { executable, tenant_id } => f
                .debug_struct("AzureCli")
                .field("executable", executable)
                .field("tenant_id", tenant_id)
                .finish(),
        }
    }
}

/// Credential scoped to the resolved cloud
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credential {
    pub strategy: CredentialStrategy,
    /// Cloud the credential was scoped to
    pub cloud: CloudConfiguration,
    pub scope: CredentialScope,
    pub source: CredentialSource,
}

/// Result of the legacy acquisition path
///
/// Carries no cloud configuration: the auth-file branch of the legacy path
/// never resolves one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Authorizer {
    pub strategy: CredentialStrategy,
    pub scope: CredentialScope,
    pub source: CredentialSource,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_scope() {
        let scope = CredentialScope::new(
            "https://login.microsoftonline.com/",
            "https://management.core.windows.net/",
        );
        assert_eq!(scope.token_scope(), "https://management.core.windows.net/.default");

        let scope = CredentialScope::new("https://login.chinacloudapi.cn/", "https://management.core.chinacloudapi.cn");
        assert_eq!(scope.token_scope(), "https://management.core.chinacloudapi.cn/.default");
    }

    #[test]
    fn test_source_debug_redacts() {
        let source = CredentialSource::UsernamePassword {
            tenant_id: "tenant".to_string(),
            client_id: "client".to_string(),
            username: "user@example.com".to_string(),
            password: "swordfish".to_string(),
        };
        let debug = format!("{:?}", source);
        assert!(debug.contains("user@example.com"));
        assert!(!debug.contains("swordfish"));
        assert_eq!(source.kind(), "username-password");
    }
}
