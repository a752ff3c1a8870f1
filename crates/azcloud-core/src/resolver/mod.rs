//! Cloud resolution
//!
//! [`CloudConfigResolver`] turns the cloud name signal into endpoints;
//! [`ArmOptionsBuilder`] projects that into client options.

mod error;
mod cloud_config;
mod arm_options;

pub use error::{ResolutionError, ResolutionResult};
pub use cloud_config::CloudConfigResolver;
pub use arm_options::ArmOptionsBuilder;
