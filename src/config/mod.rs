pub mod rules;
mod store;

pub use rules::{
    CategoryRule, ChannelCategories, MuteCategoryMap, RuleError, RuleSnapshot, BLOCK_KEYWORD,
    BLOCK_USER, HIDE_NOTICE, MUTE_CATEGORY,
};
pub use store::{MemoryRuleStore, RuleStore};
