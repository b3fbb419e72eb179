pub mod annotator;
pub mod classifier;
pub mod matcher;
pub mod moderator;
pub mod mute;
pub mod notices;
pub mod preview;

pub use classifier::{classify, Classification, ClassifyContext};
pub use matcher::Matcher;
pub use moderator::Moderator;
pub use mute::{author_mute_pattern, is_author_muted, mute_author, unmute_author};
