//! Credential factories
//!
//! A factory turns a selected strategy plus its scoping into credential
//! material. Token exchange itself happens downstream.

use std::path::{Path, PathBuf};

use crate::env::{
    EnvSnapshot, CLIENT_CERTIFICATE_PASSWORD, CLIENT_CERTIFICATE_PATH, CLIENT_ID, CLIENT_SECRET,
    PASSWORD, TENANT_ID, USERNAME,
};
use super::auth_file::AuthFile;
use super::cli::find_azure_cli;
use super::credential::{CredentialScope, CredentialSource};
use super::error::{AcquisitionError, AcquisitionResult};

/// Builds credential material for each strategy
///
/// Implement this to plug in a different identity library or a test double.
pub trait CredentialFactory: Send + Sync {
    /// Human-readable name of this factory
    fn name(&self) -> &str;

    /// Credentials from `AZURE_CLIENT_ID`, `AZURE_TENANT_ID` and friends
    fn from_environment(
        &self,
        env: &EnvSnapshot,
        scope: &CredentialScope,
    ) -> AcquisitionResult<CredentialSource>;

    /// Credentials from the SDK auth file at `path`
    fn from_auth_file(
        &self,
        path: &Path,
        scope: &CredentialScope,
    ) -> AcquisitionResult<CredentialSource>;

    /// Credentials delegated to an interactive (CLI) login
    fn from_interactive_login(
        &self,
        env: &EnvSnapshot,
        scope: &CredentialScope,
    ) -> AcquisitionResult<CredentialSource>;
}

/// Factory that reads environment variables, auth files and the Azure CLI
///
/// Environment credentials are tried in this order:
/// 1. `AZURE_CLIENT_SECRET`
/// 2. `AZURE_CLIENT_CERTIFICATE_PATH` (+ `AZURE_CLIENT_CERTIFICATE_PASSWORD`)
/// 3. `AZURE_USERNAME` + `AZURE_PASSWORD`
#[derive(Debug, Default, Clone, Copy)]
pub struct DefaultCredentialFactory;

impl DefaultCredentialFactory {
    pub fn new() -> Self {
        Self
    }
}

fn required<'a>(env: &'a EnvSnapshot, key: &'static str) -> AcquisitionResult<&'a str> {
    env.get_non_empty(key).ok_or(AcquisitionError::EmptyVariable(key))
}

impl CredentialFactory for DefaultCredentialFactory {
    fn name(&self) -> &str {
        "default"
    }

    fn from_environment(
        &self,
        env: &EnvSnapshot,
        _scope: &CredentialScope,
    ) -> AcquisitionResult<CredentialSource> {
        let client_id = required(env, CLIENT_ID)?.to_string();
        let tenant_id = required(env, TENANT_ID)?.to_string();

        if let Some(client_secret) = env.get_non_empty(CLIENT_SECRET) {
            return Ok(CredentialSource::ClientSecret {
                tenant_id,
                client_id,
                client_secret: client_secret.to_string(),
            });
        }

        if let Some(certificate_path) = env.get_non_empty(CLIENT_CERTIFICATE_PATH) {
            return Ok(CredentialSource::ClientCertificate {
                tenant_id,
                client_id,
                certificate_path: PathBuf::from(certificate_path),
                certificate_password: env.get_non_empty(CLIENT_CERTIFICATE_PASSWORD).map(str::to_string),
            });
        }

        match (env.get_non_empty(USERNAME), env.get(PASSWORD)) {
            (Some(username), Some(password)) => Ok(CredentialSource::UsernamePassword {
                tenant_id,
                client_id,
                username: username.to_string(),
                password: password.to_string(),
            }),
            _ => Err(AcquisitionError::MissingEnvironmentCredential),
        }
    }

    fn from_auth_file(
        &self,
        path: &Path,
        scope: &CredentialScope,
    ) -> AcquisitionResult<CredentialSource> {
        let file = AuthFile::load(path)?;
        // Public-cloud base URIs map onto the file's own endpoints; anything
        // else is already cloud specific and used as is
        let resource = file
            .resource_for(&scope.resource)
            .unwrap_or(scope.resource.as_str())
            .to_string();

        Ok(CredentialSource::AuthFile {
            path: path.to_path_buf(),
            resource,
            file,
        })
    }

    fn from_interactive_login(
        &self,
        env: &EnvSnapshot,
        _scope: &CredentialScope,
    ) -> AcquisitionResult<CredentialSource> {
        let executable = find_azure_cli(env.search_path())
            .ok_or(AcquisitionError::InteractiveLoginUnavailable)?;

        Ok(CredentialSource::AzureCli {
            executable,
            tenant_id: env.get_non_empty(TENANT_ID).map(str::to_string),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;
    use crate::env::PATH;

    fn scope() -> CredentialScope {
        CredentialScope::new("https://login.microsoftonline.com/", "https://management.azure.com")
    }

    fn pair() -> crate::env::EnvSnapshotBuilder {
        EnvSnapshot::builder().var(CLIENT_ID, "client").var(TENANT_ID, "tenant")
    }

    #[test]
    fn test_environment_client_secret_first() {
        let env = pair()
            .var(CLIENT_SECRET, "secret")
            .var(CLIENT_CERTIFICATE_PATH, "/certs/sp.pem")
            .build();
        let source = DefaultCredentialFactory::new().from_environment(&env, &scope()).unwrap();
        assert!(matches!(
            source,
            CredentialSource::ClientSecret { ref client_secret, .. } if client_secret == "secret"
        ));
    }

    #[test]
    fn test_environment_certificate() {
        let env = pair()
            .var(CLIENT_CERTIFICATE_PATH, "/certs/sp.pem")
            .var(CLIENT_CERTIFICATE_PASSWORD, "pw")
            .build();
        let source = DefaultCredentialFactory::new().from_environment(&env, &scope()).unwrap();
        assert_eq!(
            source,
            CredentialSource::ClientCertificate {
                tenant_id: "tenant".to_string(),
                client_id: "client".to_string(),
                certificate_path: PathBuf::from("/certs/sp.pem"),
                certificate_password: Some("pw".to_string()),
            }
        );
    }

    #[test]
    fn test_environment_username_password() {
        let env = pair().var(USERNAME, "user@example.com").var(PASSWORD, "pw").build();
        let source = DefaultCredentialFactory::new().from_environment(&env, &scope()).unwrap();
        assert_eq!(source.kind(), "username-password");
    }

    #[test]
    fn test_environment_missing_material() {
        let env = pair().build();
        let err = DefaultCredentialFactory::new().from_environment(&env, &scope()).unwrap_err();
        assert!(matches!(err, AcquisitionError::MissingEnvironmentCredential));
    }

    #[test]
    fn test_environment_empty_ids() {
        let env = EnvSnapshot::builder()
            .var(CLIENT_ID, "")
            .var(TENANT_ID, "tenant")
            .var(CLIENT_SECRET, "secret")
            .build();
        let err = DefaultCredentialFactory::new().from_environment(&env, &scope()).unwrap_err();
        assert!(matches!(err, AcquisitionError::EmptyVariable("AZURE_CLIENT_ID")));
    }

    #[test]
    fn test_auth_file_maps_resource() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("auth.json");
        fs::write(
            &path,
            r#"{"clientId": "c", "clientSecret": "s", "tenantId": "t",
                "resourceManagerEndpointUrl": "https://management.azure.com/"}"#,
        )
        .unwrap();

        let factory = DefaultCredentialFactory::new();
        match factory.from_auth_file(&path, &scope()).unwrap() {
            CredentialSource::AuthFile { resource, file, .. } => {
                assert_eq!(resource, "https://management.azure.com/");
                assert_eq!(file.tenant_id, "t");
            }
            other => panic!("unexpected source: {other:?}"),
        }

        let china = CredentialScope::new(
            "https://login.chinacloudapi.cn/",
            "https://management.core.chinacloudapi.cn",
        );
        match factory.from_auth_file(&path, &china).unwrap() {
            CredentialSource::AuthFile { resource, .. } => {
                assert_eq!(resource, "https://management.core.chinacloudapi.cn");
            }
            other => panic!("unexpected source: {other:?}"),
        }
    }

    #[test]
    fn test_interactive_login() {
        let dir = TempDir::new().unwrap();
        crate::credentials::cli::tests::fake_cli(dir.path());
        let env = EnvSnapshot::builder()
            .var(PATH, dir.path().to_string_lossy())
            .var(TENANT_ID, "tenant")
            .build();

        match DefaultCredentialFactory::new().from_interactive_login(&env, &scope()).unwrap() {
            CredentialSource::AzureCli { executable, tenant_id } => {
                assert!(executable.starts_with(dir.path()));
                assert_eq!(tenant_id.as_deref(), Some("tenant"));
            }
            other => panic!("unexpected source: {other:?}"),
        }
    }

    #[test]
    fn test_interactive_login_unavailable() {
        let dir = TempDir::new().unwrap();
        let env = EnvSnapshot::builder().var(PATH, dir.path().to_string_lossy()).build();
        let err = DefaultCredentialFactory::new()
            .from_interactive_login(&env, &scope())
            .unwrap_err();
        assert!(matches!(err, AcquisitionError::InteractiveLoginUnavailable));
    }
}
