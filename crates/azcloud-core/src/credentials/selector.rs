//! Credential strategy selection and acquisition
//!
//! Strategy priority (first match wins):
//! 1. `AZURE_CLIENT_ID` + `AZURE_TENANT_ID` → environment credentials
//! 2. `AZURE_AUTH_LOCATION` → SDK auth file
//! 3. Azure CLI login
//!
//! The current entry point, [`CredentialSelector::acquire`], resolves the
//! cloud first and scopes every strategy to it. The legacy
//! [`CredentialSelector::acquire_authorizer`] keeps the auth-file branch
//! pinned to the public cloud for existing callers.

use std::fmt;
use std::path::Path;
use std::sync::Arc;

use crate::env::EnvSnapshot;
use crate::logging::file_logger as log;
use crate::logging::{NoOpLogger, SharedLogger};
use crate::resolver::{CloudConfigResolver, ResolutionError};
use crate::types::{CloudConfiguration, CredentialStrategy, ServiceName};
use super::credential::{Authorizer, Credential, CredentialScope, CredentialSource};
use super::error::AcquisitionResult;
use super::factory::{CredentialFactory, DefaultCredentialFactory};

/// Picks a credential strategy and acquires a credential with it
///
/// Each call makes exactly one attempt; errors from the factory are returned
/// unchanged inside [`AcquisitionError`](super::AcquisitionError).
///
/// # Example
///
/// ```no_run
/// use azcloud_core::credentials::CredentialSelector;
/// use azcloud_core::env::EnvSnapshot;
///
/// let selector = CredentialSelector::new();
/// let credential = selector.acquire(&EnvSnapshot::from_process()).unwrap();
/// println!("using {} against {}", credential.strategy, credential.scope.authority_host);
/// ```
#[derive(Clone)]
pub struct CredentialSelector {
    resolver: CloudConfigResolver,
    factory: Arc<dyn CredentialFactory>,
    logger: SharedLogger,
}

impl CredentialSelector {
    /// Selector with the default resolver and factory, logging nowhere
    pub fn new() -> Self {
        Self {
            resolver: CloudConfigResolver::new(),
            factory: Arc::new(DefaultCredentialFactory::new()),
            logger: Arc::new(NoOpLogger::new()),
        }
    }

    pub fn with_resolver(mut self, resolver: CloudConfigResolver) -> Self {
        self.resolver = resolver;
        self
    }

    pub fn with_factory(mut self, factory: Arc<dyn CredentialFactory>) -> Self {
        self.factory = factory;
        self
    }

    pub fn with_logger(mut self, logger: SharedLogger) -> Self {
        self.logger = logger;
        self
    }

    /// The strategy a call with this snapshot would use
    pub fn select(&self, env: &EnvSnapshot) -> CredentialStrategy {
        CredentialStrategy::select(env)
    }

    /// Acquire a credential scoped to the resolved cloud
    pub fn acquire(&self, env: &EnvSnapshot) -> AcquisitionResult<Credential> {
        let cloud = self.resolver.resolve(env)?;
        let resource_manager = cloud.resource_manager().ok_or_else(|| {
            ResolutionError::service_not_configured(ServiceName::RESOURCE_MANAGER)
        })?;
        let scope = CredentialScope::new(cloud.authority_host.clone(), resource_manager.audience.clone());

        let strategy = self.select(env);
        crate::log_debug!(
            self.logger,
            "Acquiring credential via {} for {}",
            strategy,
            scope.authority_host
        );

        let source = self.run(strategy, env, &scope)?;
        Ok(Credential {
            strategy,
            cloud,
            scope,
            source,
        })
    }

    /// Legacy acquisition returning an authorizer
    ///
    /// Environment and CLI credentials target the resolved cloud's Resource
    /// Manager endpoint. Auth-file credentials always target the public
    /// cloud and do not resolve the cloud at all.
    #[deprecated(note = "use `acquire`, which scopes every strategy to the resolved cloud")]
    pub fn acquire_authorizer(&self, env: &EnvSnapshot) -> AcquisitionResult<Authorizer> {
        let strategy = self.select(env);

        let cloud = match strategy {
            CredentialStrategy::FromAuthFile => CloudConfiguration::azure_public(),
            CredentialStrategy::FromExplicitEnvPair | CredentialStrategy::FromInteractiveLogin => {
                self.resolver.resolve(env)?
            }
        };
        let endpoint = cloud
            .resource_manager()
            .map(|rm| rm.endpoint.clone())
            .ok_or_else(|| ResolutionError::service_not_configured(ServiceName::RESOURCE_MANAGER))?;
        let scope = CredentialScope::new(cloud.authority_host, endpoint);

        crate::log_debug!(
            self.logger,
            "Acquiring legacy authorizer via {} for {}",
            strategy,
            scope.resource
        );
        if strategy == CredentialStrategy::FromAuthFile {
            crate::log_warn!(
                self.logger,
                "Legacy auth-file credentials always target the public cloud; use acquire() to honour AZURE_ENVIRONMENT"
            );
        }

        let source = self.run(strategy, env, &scope)?;
        Ok(Authorizer {
            strategy,
            scope,
            source,
        })
    }

    fn run(
        &self,
        strategy: CredentialStrategy,
        env: &EnvSnapshot,
        scope: &CredentialScope,
    ) -> AcquisitionResult<CredentialSource> {
        let result = match strategy {
            CredentialStrategy::FromExplicitEnvPair => self.factory.from_environment(env, scope),
            CredentialStrategy::FromAuthFile => {
                // Selection guarantees the variable is present
                let location = env.auth_location().unwrap_or_default();
                self.factory.from_auth_file(Path::new(location), scope)
            }
            CredentialStrategy::FromInteractiveLogin => {
                self.factory.from_interactive_login(env, scope)
            }
        };

        match &result {
            Ok(source) => {
                crate::log_info!(self.logger, "Acquired {} credential via {}", source.kind(), strategy);
                log::debug(
                    "credentials",
                    &format!(
                        "{} factory produced {} credential",
                        self.factory.name(),
                        source.kind()
                    ),
                );
            }
            Err(e) => {
                crate::log_error!(self.logger, "Credential acquisition via {} failed: {}", strategy, e);
                log::error("credentials", &format!("{} acquisition failed: {}", strategy, e));
            }
        }
        result
    }
}

impl Default for CredentialSelector {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for CredentialSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CredentialSelector")
            .field("resolver", &self.resolver)
            .field("factory", &self.factory.name())
            .finish()
    }
}
