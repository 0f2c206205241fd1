use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;
use serde_json::Value;

/// UI setting that turns on long numeral handling for backend responses.
pub const DATA_WITH_LONG_NUMERALS: &str = "data:withLongNumerals";

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SettingsError {
    #[error("settings unavailable: {0}")]
    Unavailable(String),
}

/// Asynchronous key/value lookup over the UI settings.
#[async_trait]
pub trait SettingsReader: Send + Sync {
    /// `Ok(None)` when the key has no value.
    async fn get(&self, key: &str) -> Result<Option<Value>, SettingsError>;
}

/// In-memory settings.
#[derive(Debug, Default)]
pub struct MemorySettings {
    values: RwLock<HashMap<String, Value>>,
}

impl MemorySettings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.set(key, value);
        self
    }

    pub fn set(&self, key: impl Into<String>, value: impl Into<Value>) {
        let mut values = self.values.write().unwrap_or_else(|e| e.into_inner());
        values.insert(key.into(), value.into());
    }
}

#[async_trait]
impl SettingsReader for MemorySettings {
    async fn get(&self, key: &str) -> Result<Option<Value>, SettingsError> {
        let values = self.values.read().unwrap_or_else(|e| e.into_inner());
        Ok(values.get(key).cloned())
    }
}

/// Read a boolean setting. Lookup failures and non-boolean values count as
/// unset.
pub async fn read_flag(reader: &dyn SettingsReader, key: &str) -> Option<bool> {
    match reader.get(key).await {
        Ok(Some(Value::Bool(flag))) => Some(flag),
        Ok(Some(other)) => {
            tracing::debug!(key, value = %other, "ignoring non-boolean setting");
            None
        }
        Ok(None) => None,
        Err(err) => {
            tracing::warn!(key, error = %err, "settings lookup failed; treating as unset");
            None
        }
    }
}
