//! Credential selection and acquisition
//!
//! - [`CredentialStrategy`](crate::types::CredentialStrategy) decides how to authenticate
//! - [`CredentialSelector`] resolves the cloud and runs the strategy
//! - [`CredentialFactory`] is the seam to the identity library that does the work

mod error;
mod auth_file;
mod cli;
mod credential;
mod factory;
mod selector;

pub use error::{AcquisitionError, AcquisitionResult};
pub use auth_file::AuthFile;
pub use cli::find_azure_cli;
pub use credential::{Authorizer, Credential, CredentialScope, CredentialSource};
pub use factory::{CredentialFactory, DefaultCredentialFactory};
pub use selector::CredentialSelector;
