pub mod item;
pub mod types;

pub use item::{ContentItem, ViewKind, GENERAL_CATEGORY};
pub use types::{CountKey, FilterState, Reason, ReasonCounts};
