use crate::config::ChannelCategories;
use crate::domain::{ContentItem, FilterState, Reason, ReasonCounts};
use crate::engine::Matcher;

/// Matchers and category rules in effect for one pass, already resolved to
/// the current channel.
pub struct ClassifyContext<'a> {
    pub keyword: &'a Matcher,
    pub user: &'a Matcher,
    pub categories: Option<&'a ChannelCategories>,
}

pub struct Classification {
    pub per_item: Vec<FilterState>,
    pub counts: ReasonCounts,
}

/// Evaluates every item against all rule sources.
///
/// All four checks run unconditionally for every item; reasons are not
/// mutually exclusive. `counts.all` grows once per matched reason, so a
/// single item can contribute several units to it.
pub fn classify(items: &[ContentItem], ctx: &ClassifyContext) -> Classification {
    let mut counts = ReasonCounts::default();
    let per_item = items
        .iter()
        .map(|item| {
            let mut state = FilterState::default();

            if ctx.keyword.test(&item.text) {
                state.set(Reason::Keyword);
                counts.record(Reason::Keyword);
            }
            if ctx.user.test(&item.author_identity) {
                state.set(Reason::User);
                counts.record(Reason::User);
            }
            let category_muted = ctx
                .categories
                .and_then(|config| config.get(&item.category))
                .map_or(false, |rule| rule.mute_article);
            if category_muted {
                state.set(Reason::Category);
                counts.record(Reason::Category);
            }
            if item.is_deleted {
                state.set(Reason::Deleted);
                counts.record(Reason::Deleted);
            }

            state
        })
        .collect();

    Classification { per_item, counts }
}
