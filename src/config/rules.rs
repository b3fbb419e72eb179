use std::collections::HashMap;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::RuleStore;

pub const BLOCK_USER: &str = "blockUser";
pub const BLOCK_KEYWORD: &str = "blockKeyword";
pub const MUTE_CATEGORY: &str = "muteCategory";
pub const HIDE_NOTICE: &str = "hideNotice";

#[derive(Debug, Error)]
pub enum RuleError {
    #[error("stored value for `{key}` is malformed: {source}")]
    Malformed {
        key: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

/// Per-category mute flags, persisted per channel.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CategoryRule {
    pub mute_preview: bool,
    pub mute_article: bool,
}

pub type ChannelCategories = HashMap<String, CategoryRule>;
pub type MuteCategoryMap = HashMap<String, ChannelCategories>;

/// All rule lists read at the start of a pass.
///
/// Loaded fresh every pass so that rule edits between passes always take
/// effect; nothing here is cached across passes.
#[derive(Debug, Clone, Default)]
pub struct RuleSnapshot {
    pub blocked_users: Vec<String>,
    pub blocked_keywords: Vec<String>,
    pub muted_categories: MuteCategoryMap,
    pub collapse_notices: bool,
}

impl RuleSnapshot {
    pub fn load(store: &dyn RuleStore) -> Self {
        Self {
            blocked_users: read_or_default(store, BLOCK_USER),
            blocked_keywords: read_or_default(store, BLOCK_KEYWORD),
            muted_categories: read_or_default(store, MUTE_CATEGORY),
            collapse_notices: read_or_default(store, HIDE_NOTICE),
        }
    }
}

/// Reads one rule key, falling back to the default when the key is absent or
/// its stored value fails to decode. A malformed value only degrades the
/// source that carries it.
pub fn read_or_default<T>(store: &dyn RuleStore, key: &'static str) -> T
where
    T: DeserializeOwned + Default,
{
    let Some(value) = store.get(key) else {
        return T::default();
    };
    match serde_json::from_value(value) {
        Ok(decoded) => decoded,
        Err(source) => {
            let err = RuleError::Malformed { key, source };
            tracing::warn!(target: "rules", error = %err, "ignoring malformed rule value");
            T::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MemoryRuleStore;
    use serde_json::json;

    #[test]
    fn snapshot_defaults_when_store_is_empty() {
        let store = MemoryRuleStore::new();
        let snapshot = RuleSnapshot::load(&store);

        assert!(snapshot.blocked_users.is_empty());
        assert!(snapshot.blocked_keywords.is_empty());
        assert!(snapshot.muted_categories.is_empty());
        assert!(!snapshot.collapse_notices);
    }

    #[test]
    fn snapshot_reads_persisted_values() {
        let store = MemoryRuleStore::new();
        store.set(BLOCK_USER, json!(["^Alice$"]));
        store.set(BLOCK_KEYWORD, json!(["spam", "free money"]));
        store.set(HIDE_NOTICE, json!(true));
        store.set(
            MUTE_CATEGORY,
            json!({"c1": {"notice": {"mutePreview": true, "muteArticle": true}}}),
        );

        let snapshot = RuleSnapshot::load(&store);
        assert_eq!(snapshot.blocked_users, vec!["^Alice$"]);
        assert_eq!(snapshot.blocked_keywords.len(), 2);
        assert!(snapshot.collapse_notices);

        let rule = snapshot.muted_categories["c1"]["notice"];
        assert!(rule.mute_preview);
        assert!(rule.mute_article);
    }

    #[test]
    fn malformed_value_degrades_to_default() {
        let store = MemoryRuleStore::new();
        store.set(BLOCK_USER, json!("not a list"));
        store.set(BLOCK_KEYWORD, json!(["still fine"]));

        let snapshot = RuleSnapshot::load(&store);
        assert!(snapshot.blocked_users.is_empty());
        assert_eq!(snapshot.blocked_keywords, vec!["still fine"]);
    }

    #[test]
    fn category_rule_uses_camel_case_keys() {
        let rule: CategoryRule =
            serde_json::from_value(json!({"mutePreview": true, "muteArticle": false})).unwrap();
        assert!(rule.mute_preview);
        assert!(!rule.mute_article);

        let value = serde_json::to_value(CategoryRule {
            mute_preview: false,
            mute_article: true,
        })
        .unwrap();
        assert_eq!(value, json!({"mutePreview": false, "muteArticle": true}));
    }
}
