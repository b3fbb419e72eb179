use crate::page::{Container, RevealControl, FILTERED, FILTERED_NOTICE};

/// Collapses all pinned notices except the last one.
///
/// The last notice stays visible and is followed by a single reveal
/// affordance carrying the collapsed tally. The affordance is created at
/// most once per container; once the user activates it the container stays
/// revealed for the rest of the page's lifetime, so later passes re-mark
/// the notices but never re-hide them.
pub fn collapse(container: &mut Container) {
    let notice_indices: Vec<usize> = container
        .items
        .iter()
        .enumerate()
        .filter(|(_, item)| item.is_notice)
        .map(|(index, _)| index)
        .collect();
    let Some((_, collapsed_indices)) = notice_indices.split_last() else {
        return;
    };

    let mut collapsed = 0u32;
    for &index in collapsed_indices {
        let item = &mut container.items[index];
        item.classes.add(FILTERED);
        item.classes.add(FILTERED_NOTICE);
        collapsed += 1;
    }

    if collapsed > 0 && container.notice_reveal.is_none() {
        container.notice_reveal = Some(RevealControl {
            count: collapsed,
            visible: true,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::ItemNode;

    fn board_with_notices(n: u64) -> Container {
        let mut items: Vec<ItemNode> = (0..n)
            .map(|i| ItemNode::new(i, "admin", format!("notice {i}")).notice())
            .collect();
        items.push(ItemNode::new(n, "user", "regular post"));
        Container::new(items)
    }

    #[test]
    fn all_but_the_last_notice_collapse() {
        let mut container = board_with_notices(4);
        collapse(&mut container);

        let collapsed: Vec<bool> = container
            .items
            .iter()
            .filter(|i| i.is_notice)
            .map(|i| i.classes.contains(FILTERED_NOTICE))
            .collect();
        assert_eq!(collapsed, vec![true, true, true, false]);

        let reveal = container.notice_reveal.as_ref().unwrap();
        assert_eq!(reveal.count, 3);
        assert!(reveal.visible);
    }

    #[test]
    fn single_notice_creates_no_affordance() {
        let mut container = board_with_notices(1);
        collapse(&mut container);

        assert!(container.notice_reveal.is_none());
        assert!(container
            .items
            .iter()
            .all(|i| !i.classes.contains(FILTERED_NOTICE)));
    }

    #[test]
    fn no_notices_is_a_no_op() {
        let mut container = Container::new(vec![ItemNode::new(0, "user", "post")]);
        collapse(&mut container);
        assert!(container.notice_reveal.is_none());
    }

    #[test]
    fn repeat_passes_keep_one_affordance_and_respect_reveal() {
        let mut container = board_with_notices(3);
        collapse(&mut container);
        container.reveal_notices();

        collapse(&mut container);

        let reveal = container.notice_reveal.as_ref().unwrap();
        assert_eq!(reveal.count, 2);
        assert!(!reveal.visible);
        assert!(container.classes.contains(crate::page::SHOW_FILTERED_NOTICE));
    }
}
