use anyhow::Result;
use std::collections::HashMap;

use super::KeyValueStore;

/// Volatile key-value store for tests.
#[derive(Debug, Clone, Default)]
pub(crate) struct MemoryStore {
    entries: HashMap<String, String>,
    pub writes: usize,
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.writes += 1;
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
