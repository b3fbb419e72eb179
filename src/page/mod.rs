mod context;
mod view;

pub use context::{normalize_identity, IdentityCache};
pub use view::{
    ClassList, Container, Document, FilterHeader, FilterToggle, ItemNode, LiveRules, Page,
    RevealControl, FILTERED, FILTERED_NOTICE, SHOW_FILTERED_NOTICE,
};
