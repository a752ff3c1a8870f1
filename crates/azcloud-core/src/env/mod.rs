//! Process signal capture
//!
//! Resolvers never read `std::env` directly. An [`EnvSnapshot`] is captured
//! from an [`EnvSource`] (the process, or an in-memory map) and passed in.

mod traits;
mod process;
mod memory;
mod snapshot;

pub use traits::EnvSource;
pub use process::ProcessEnv;
pub use memory::MemoryEnv;
pub use snapshot::{
    EnvSnapshot, EnvSnapshotBuilder, TRACKED_VARS,
    CLIENT_ID, TENANT_ID, AUTH_LOCATION, CLOUD_ENVIRONMENT, ENVIRONMENT_FILEPATH,
    CLIENT_SECRET, CLIENT_CERTIFICATE_PATH, CLIENT_CERTIFICATE_PASSWORD,
    USERNAME, PASSWORD, PATH, CONFIG_PATH,
};
