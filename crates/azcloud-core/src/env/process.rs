//! Process environment source

use std::env;

use super::traits::EnvSource;

/// Reads from the live process environment
///
/// Every call goes to `std::env`, nothing is cached. Variables whose value is
/// not valid Unicode are treated as unset.
///
/// # Example
///
/// ```
/// use azcloud_core::env::{EnvSource, ProcessEnv};
///
/// let env = ProcessEnv::new();
/// let _cloud = env.get("AZURE_ENVIRONMENT");
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct ProcessEnv {
    _private: (),
}

impl ProcessEnv {
    pub fn new() -> Self {
        Self { _private: () }
    }
}

impl EnvSource for ProcessEnv {
    fn name(&self) -> &str {
        "process"
    }

    fn get(&self, key: &str) -> Option<String> {
        env::var(key).ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_process_env_name() {
        assert_eq!(ProcessEnv::new().name(), "process");
    }

    #[test]
    fn test_process_env_reads_live_values() {
        let env = ProcessEnv::new();
        env::set_var("AZCLOUD_TEST_PROCESS_ENV_1", "first");
        assert_eq!(env.get("AZCLOUD_TEST_PROCESS_ENV_1"), Some("first".to_string()));

        env::set_var("AZCLOUD_TEST_PROCESS_ENV_1", "second");
        assert_eq!(env.get("AZCLOUD_TEST_PROCESS_ENV_1"), Some("second".to_string()));

        env::remove_var("AZCLOUD_TEST_PROCESS_ENV_1");
        assert!(!env.contains("AZCLOUD_TEST_PROCESS_ENV_1"));
    }

    #[test]
    fn test_process_env_empty_value_is_present() {
        env::set_var("AZCLOUD_TEST_PROCESS_ENV_EMPTY", "");
        let env = ProcessEnv::new();
        assert!(env.contains("AZCLOUD_TEST_PROCESS_ENV_EMPTY"));
        env::remove_var("AZCLOUD_TEST_PROCESS_ENV_EMPTY");
    }
}
