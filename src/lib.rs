//! Client-side content moderation for community board views.
//!
//! The engine classifies rendered board rows and comments against
//! user-defined rule lists (blocked authors, blocked keywords, per-channel
//! category mutes, deleted items), annotates matches with CSS-equivalent
//! markers plus a togglable summary header, and collapses redundant pinned
//! notices. Passes are re-entrant and idempotent: the host fires a
//! [`scheduler::ReapplyScheduler`] event whenever the page content is
//! swapped, and every registered pass recomputes from the current page
//! state.
//!
//! Rendering, persistence, and mutation detection stay with the host; the
//! engine only sees them through [`config::RuleStore`], [`page::Page`], and
//! the scheduler's `fire` contract.

pub mod config;
pub mod domain;
pub mod engine;
pub mod infrastructure;
pub mod page;
pub mod scheduler;

pub use config::{MemoryRuleStore, RuleSnapshot, RuleStore};
pub use domain::{ContentItem, CountKey, FilterState, Reason, ReasonCounts, ViewKind};
pub use engine::{author_mute_pattern, mute_author, unmute_author, Matcher, Moderator};
pub use page::{Container, Document, ItemNode, Page};
pub use scheduler::{EventKind, ReapplyScheduler};
