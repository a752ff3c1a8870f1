//! Core types shared by the resolvers
//!
//! This module contains the cloud model, the credential strategy and the
//! client options record.

mod cloud;
mod options;
mod strategy;

pub use cloud::{
    CloudIdentifier, CloudConfiguration, ServiceConfiguration, ServiceName,
    AZURE_PUBLIC_CLOUD, AZURE_CHINA_CLOUD, AZURE_US_GOVERNMENT_CLOUD, AZURE_STACK_CLOUD,
    RECOGNIZED_CLOUD_NAMES,
};
pub use options::ArmClientOptions;
pub use strategy::CredentialStrategy;
