use serde_json::Value;

use crate::config::{rules, RuleStore, BLOCK_USER};

/// Builds the blocked-user pattern for a one-click author mute.
///
/// Parentheses and periods in the identity are escaped so IP-style suffixes
/// match literally. The pattern is anchored at the end, and at the start
/// only when the author has no distinguishing suffix (display name and
/// identity are literally identical).
pub fn author_mute_pattern(display: &str, identity: &str) -> String {
    let escaped = identity
        .replace('(', "\\(")
        .replace(')', "\\)")
        .replace('.', "\\.");
    let lead = if display == identity { "^" } else { "" };
    format!("{lead}{escaped}$")
}

/// Whether the one-click pattern for this author is already on the list.
pub fn is_author_muted(store: &dyn RuleStore, display: &str, identity: &str) -> bool {
    let users: Vec<String> = rules::read_or_default(store, BLOCK_USER);
    users.contains(&author_mute_pattern(display, identity))
}

/// Appends the author's pattern to the blocked-user list. Returns false when
/// the pattern was already present.
pub fn mute_author(store: &dyn RuleStore, display: &str, identity: &str) -> bool {
    let pattern = author_mute_pattern(display, identity);
    let mut users: Vec<String> = rules::read_or_default(store, BLOCK_USER);
    if users.contains(&pattern) {
        return false;
    }
    users.push(pattern);
    store.set(BLOCK_USER, Value::from(users));
    true
}

/// Removes the author's pattern from the blocked-user list. Returns false
/// when the pattern was not present.
pub fn unmute_author(store: &dyn RuleStore, display: &str, identity: &str) -> bool {
    let pattern = author_mute_pattern(display, identity);
    let mut users: Vec<String> = rules::read_or_default(store, BLOCK_USER);
    let before = users.len();
    users.retain(|entry| entry != &pattern);
    if users.len() == before {
        return false;
    }
    store.set(BLOCK_USER, Value::from(users));
    true
}
