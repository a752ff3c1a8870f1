//! Azure Stack environment lookup
//!
//! Azure Stack endpoints are not compiled in. They come from an
//! [`EnvironmentRegistry`], by default the JSON document named by
//! `AZURE_ENVIRONMENT_FILEPATH`.

mod error;
mod metadata;
mod registry;

pub use error::{RegistryError, RegistryResult};
pub use metadata::StackEnvironment;
pub use registry::{EnvironmentRegistry, FileEnvironmentRegistry, MemoryEnvironmentRegistry};
