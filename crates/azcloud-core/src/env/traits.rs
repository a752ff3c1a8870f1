//! Source of environment variables

/// Something that can answer environment variable lookups
///
/// Implementations:
/// - `ProcessEnv`: the real process environment
/// - `MemoryEnv`: an in-memory map for hosts and tests
///
/// Lookups return the raw value, empty strings included. Callers that care
/// about presence rather than content rely on that.
pub trait EnvSource: Send + Sync {
    /// Human-readable name of this source
    fn name(&self) -> &str;

    /// Read a variable
    fn get(&self, key: &str) -> Option<String>;

    /// Check whether a variable is set, even to an empty value
    fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }
}
