//! Credential strategy selection

use std::fmt;

use crate::env::EnvSnapshot;

/// How a credential is going to be acquired
///
/// Exactly one strategy is chosen per call. Priority, first match wins:
///
/// 1. `FromExplicitEnvPair` when both `AZURE_CLIENT_ID` and `AZURE_TENANT_ID` are set
/// 2. `FromAuthFile` when `AZURE_AUTH_LOCATION` is set
/// 3. `FromInteractiveLogin` otherwise
///
/// A variable counts as set even when its value is empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CredentialStrategy {
    /// Service principal or user credentials taken from environment variables
    FromExplicitEnvPair,
    /// SDK auth file referenced by `AZURE_AUTH_LOCATION`
    FromAuthFile,
    /// Delegate to the Azure CLI login session
    FromInteractiveLogin,
}

impl CredentialStrategy {
    /// Pick the strategy for a snapshot. Never fails.
    pub fn select(env: &EnvSnapshot) -> Self {
        if env.has_client_id() && env.has_tenant_id() {
            CredentialStrategy::FromExplicitEnvPair
        } else if env.auth_location().is_some() {
            CredentialStrategy::FromAuthFile
        } else {
            CredentialStrategy::FromInteractiveLogin
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            CredentialStrategy::FromExplicitEnvPair => "environment",
            CredentialStrategy::FromAuthFile => "auth-file",
            CredentialStrategy::FromInteractiveLogin => "interactive",
        }
    }
}

impl fmt::Display for CredentialStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
