//! In-memory environment source

use std::collections::HashMap;

use parking_lot::RwLock;

use super::traits::EnvSource;

/// In-memory environment for tests and for hosts that manage their own settings
///
/// Values can be changed between captures, which makes it easy to check
/// that nothing downstream caches a previous resolution.
///
/// # Example
///
/// ```
/// use azcloud_core::env::{EnvSource, MemoryEnv};
///
/// let env = MemoryEnv::new();
/// env.set("AZURE_ENVIRONMENT", "AzureChinaCloud");
/// assert_eq!(env.get("AZURE_ENVIRONMENT"), Some("AzureChinaCloud".to_string()));
/// ```
#[derive(Debug, Default)]
pub struct MemoryEnv {
    vars: RwLock<HashMap<String, String>>,
}

impl MemoryEnv {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a memory environment with initial values
    pub fn with_vars<I, K, V>(vars: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            vars: RwLock::new(vars.into_iter().map(|(k, v)| (k.into(), v.into())).collect()),
        }
    }

    pub fn set(&self, key: impl Into<String>, value: impl Into<String>) {
        self.vars.write().insert(key.into(), value.into());
    }

    pub fn remove(&self, key: &str) -> Option<String> {
        self.vars.write().remove(key)
    }

    pub fn clear(&self) {
        self.vars.write().clear();
    }

    pub fn len(&self) -> usize {
        self.vars.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl EnvSource for MemoryEnv {
    fn name(&self) -> &str {
        "memory"
    }

    fn get(&self, key: &str) -> Option<String> {
        self.vars.read().get(key).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_env_set_get_remove() {
        let env = MemoryEnv::new();
        assert!(env.is_empty());

        env.set("KEY", "value");
        assert_eq!(env.get("KEY"), Some("value".to_string()));
        assert_eq!(env.len(), 1);

        assert_eq!(env.remove("KEY"), Some("value".to_string()));
        assert_eq!(env.get("KEY"), None);
    }

    #[test]
    fn test_memory_env_with_vars() {
        let env = MemoryEnv::with_vars([("A", "1"), ("B", "")]);
        assert_eq!(env.get("A"), Some("1".to_string()));
        assert!(env.contains("B"));
        assert!(!env.contains("C"));

        env.clear();
        assert!(env.is_empty());
    }
}
