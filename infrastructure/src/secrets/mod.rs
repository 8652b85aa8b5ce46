//! Secret store adapters
//!
//! API keys come from the process environment or from configuration.
//! Blank values count as absent.

use sansu_application::SecretStore;
use std::collections::HashMap;
use std::sync::Arc;

fn non_blank(value: String) -> Option<String> {
    if value.trim().is_empty() {
        None
    } else {
        Some(value)
    }
}

/// Reads process environment variables
#[derive(Debug, Clone, Copy, Default)]
pub struct EnvSecretStore;

impl SecretStore for EnvSecretStore {
    fn get(&self, key: &str) -> Option<String> {
        std::env::var(key).ok().and_then(non_blank)
    }
}

/// Fixed key/value map, used for keys given inline in config
#[derive(Debug, Clone, Default)]
pub struct StaticSecretStore {
    values: HashMap<String, String>,
}

impl StaticSecretStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.values.insert(key.into(), value.into());
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl SecretStore for StaticSecretStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned().and_then(non_blank)
    }
}

/// Consults each store in order and returns the first hit
#[derive(Clone, Default)]
pub struct ChainedSecretStore {
    stores: Vec<Arc<dyn SecretStore>>,
}

impl ChainedSecretStore {
    pub fn new(stores: Vec<Arc<dyn SecretStore>>) -> Self {
        Self { stores }
    }

    pub fn push(mut self, store: Arc<dyn SecretStore>) -> Self {
        self.stores.push(store);
        self
    }
}

impl SecretStore for ChainedSecretStore {
    fn get(&self, key: &str) -> Option<String> {
        self.stores.iter().find_map(|store| store.get(key))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_static_store_treats_blank_as_missing() {
        let store = StaticSecretStore::new()
            .with("GEMINI_API_KEY", "abc")
            .with("OPENAI_API_KEY", "  ");
        assert_eq!(store.get("GEMINI_API_KEY").as_deref(), Some("abc"));
        assert_eq!(store.get("OPENAI_API_KEY"), None);
        assert_eq!(store.get("CLAUDE_API_KEY"), None);
    }

    #[test]
    fn test_chain_prefers_earlier_stores() {
        let first = StaticSecretStore::new().with("GEMINI_API_KEY", "from-config");
        let second = StaticSecretStore::new()
            .with("GEMINI_API_KEY", "from-env")
            .with("CLAUDE_API_KEY", "claude");
        let chain = ChainedSecretStore::new(vec![Arc::new(first), Arc::new(second)]);

        assert_eq!(chain.get("GEMINI_API_KEY").as_deref(), Some("from-config"));
        assert_eq!(chain.get("CLAUDE_API_KEY").as_deref(), Some("claude"));
        assert_eq!(chain.get("OPENAI_API_KEY"), None);
    }

    #[test]
    fn test_env_store_missing_variable() {
        assert_eq!(EnvSecretStore.get("SANSU_TEST_SURELY_UNSET_VARIABLE"), None);
    }
}
