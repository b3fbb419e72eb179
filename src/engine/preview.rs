use crate::config::ChannelCategories;
use crate::domain::GENERAL_CATEGORY;
use crate::page::Container;

/// Strips preview thumbnails from board rows whose category has preview
/// muting enabled. Notices keep their previews, as do rows without a badge;
/// only an empty badge maps to the general category.
pub fn mute_previews(container: &mut Container, categories: &ChannelCategories) {
    for item in container
        .items
        .iter_mut()
        .filter(|item| !item.is_notice && item.has_preview)
    {
        let Some(category) = item.category.as_deref() else {
            continue;
        };
        let label = if category.is_empty() {
            GENERAL_CATEGORY
        } else {
            category
        };
        let muted = categories
            .get(label)
            .map_or(false, |rule| rule.mute_preview);
        if muted {
            item.has_preview = false;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CategoryRule;
    use crate::page::ItemNode;
    use std::collections::HashMap;

    fn preview_muted(category: &str) -> ChannelCategories {
        let mut categories: ChannelCategories = HashMap::new();
        categories.insert(
            category.to_string(),
            CategoryRule {
                mute_preview: true,
                mute_article: false,
            },
        );
        categories
    }

    #[test]
    fn only_configured_categories_lose_previews() {
        let categories = preview_muted("media");

        let mut container = Container::new(vec![
            ItemNode::new(0, "a", "one").with_category("media").with_preview(),
            ItemNode::new(1, "b", "two").with_category("chat").with_preview(),
            ItemNode::new(2, "c", "three")
                .with_category("media")
                .with_preview()
                .notice(),
        ]);

        mute_previews(&mut container, &categories);

        assert!(!container.items[0].has_preview);
        assert!(container.items[1].has_preview);
        assert!(container.items[2].has_preview);
    }

    #[test]
    fn empty_badge_maps_to_the_general_category() {
        let categories = preview_muted("general");

        let mut container = Container::new(vec![ItemNode::new(0, "a", "one")
            .with_category("")
            .with_preview()]);
        mute_previews(&mut container, &categories);
        assert!(!container.items[0].has_preview);
    }

    #[test]
    fn rows_without_a_badge_keep_their_preview() {
        let categories = preview_muted("general");

        let mut container =
            Container::new(vec![ItemNode::new(0, "a", "one").with_preview()]);
        mute_previews(&mut container, &categories);
        assert!(container.items[0].has_preview);
    }
}
