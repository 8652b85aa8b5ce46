//! Secret store port
//!
//! API keys are looked up by name (`GEMINI_API_KEY`, ...) at call time.

/// Key-value lookup for credentials
pub trait SecretStore: Send + Sync {
    /// Value for `key`, or `None` when absent or blank
    fn get(&self, key: &str) -> Option<String>;
}
