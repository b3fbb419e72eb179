use std::collections::HashMap;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::page::ItemNode;

static IP_TAG: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\([0-9]*\.[0-9]*\)").expect("valid ip tag regex"));

/// Normalized author identity for rule matching.
///
/// The identity is the author element's tag string; anonymous authors carry
/// an IP-derived tag like `(172.22)`, which is prefixed with the display
/// name so rules can target `Name(172.22)`. An item without a tag falls
/// back to the display name alone.
pub fn normalize_identity(item: &ItemNode) -> String {
    if item.author_tag.is_empty() {
        return item.author_display.clone();
    }
    if IP_TAG.is_match(&item.author_tag) {
        return format!("{}{}", item.author_display, item.author_tag);
    }
    item.author_tag.clone()
}

/// Pass-scoped cache of normalized identities, keyed by item id. Dropped
/// with the pass; identities are never attached to page state.
#[derive(Debug, Default)]
pub struct IdentityCache {
    entries: HashMap<u64, String>,
}

impl IdentityCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn identity(&mut self, item: &ItemNode) -> String {
        self.entries
            .entry(item.id)
            .or_insert_with(|| normalize_identity(item))
            .clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tag_is_the_identity_for_registered_authors() {
        let item = ItemNode::new(1, "Alice", "hello").with_tag("Alice#1234");
        assert_eq!(normalize_identity(&item), "Alice#1234");
    }

    #[test]
    fn ip_tags_are_prefixed_with_the_display_name() {
        let item = ItemNode::new(1, "Alice", "hello").with_tag("(172.22)");
        assert_eq!(normalize_identity(&item), "Alice(172.22)");
    }

    #[test]
    fn missing_tag_falls_back_to_display_name() {
        let item = ItemNode::new(1, "Alice", "hello");
        assert_eq!(normalize_identity(&item), "Alice");
    }

    #[test]
    fn cache_reuses_the_first_computation() {
        let mut cache = IdentityCache::new();
        let mut item = ItemNode::new(7, "Alice", "hello").with_tag("Alice#1234");

        assert_eq!(cache.identity(&item), "Alice#1234");
        // Same id wins even if the node text changed mid-pass.
        item.author_tag = "Bob#9".to_string();
        assert_eq!(cache.identity(&item), "Alice#1234");
    }
}
