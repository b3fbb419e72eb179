use std::collections::HashMap;

use parking_lot::Mutex;
use serde_json::Value;

/// Key-value persistence for user rule lists.
///
/// The engine only reads and writes through this capability; the hosting
/// environment decides where values actually live (userscript storage, a
/// file, memory).
pub trait RuleStore: Send + Sync {
    fn get(&self, key: &str) -> Option<Value>;
    fn set(&self, key: &str, value: Value);
}

/// In-memory store for embedders without persistence and for tests.
#[derive(Debug, Default)]
pub struct MemoryRuleStore {
    values: Mutex<HashMap<String, Value>>,
}

impl MemoryRuleStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl RuleStore for MemoryRuleStore {
    fn get(&self, key: &str) -> Option<Value> {
        self.values.lock().get(key).cloned()
    }

    fn set(&self, key: &str, value: Value) {
        self.values.lock().insert(key.to_string(), value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn set_then_get_roundtrips() {
        let store = MemoryRuleStore::new();
        assert_eq!(store.get("blockUser"), None);

        store.set("blockUser", json!(["alice", "bob"]));
        assert_eq!(store.get("blockUser"), Some(json!(["alice", "bob"])));

        store.set("blockUser", json!([]));
        assert_eq!(store.get("blockUser"), Some(json!([])));
    }
}
