//! # Secret Sources
//!
//! Named-secret lookup used when building configuration.
//! Production reads the process environment; tests use a fixed map.

use std::collections::HashMap;

/// Capability: retrieve a named secret.
///
/// Empty values are reported as absent.
pub trait SecretSource: Send + Sync {
    /// Raw lookup, may return an empty string
    fn lookup(&self, name: &str) -> Option<String>;

    /// Non-empty value for `name`
    fn secret(&self, name: &str) -> Option<String> {
        self.lookup(name).filter(|v| !v.is_empty())
    }
}

/// Reads secrets from environment variables.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnvSecrets;

impl EnvSecrets {
    /// Load a `.env` file if present, then read from the environment
    pub fn load() -> Self {
        dotenvy::dotenv().ok();
        Self
    }
}

impl SecretSource for EnvSecrets {
    fn lookup(&self, name: &str) -> Option<String> {
        std::env::var(name).ok()
    }
}

/// Fixed in-memory secrets.
#[derive(Debug, Clone, Default)]
pub struct StaticSecrets {
    values: HashMap<String, String>,
}

impl StaticSecrets {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: add a secret
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.values.insert(name.into(), value.into());
        self
    }
}

impl SecretSource for StaticSecrets {
    fn lookup(&self, name: &str) -> Option<String> {
        self.values.get(name).cloned()
    }
}
