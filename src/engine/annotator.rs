use crate::domain::{CountKey, FilterState, Reason, ReasonCounts};
use crate::page::{Container, FilterHeader, FilterToggle, FILTERED};

/// Applies per-item filter markers and rebuilds the summary header.
///
/// `targets` maps each entry of `per_item` to an index into the container's
/// item list; a pass classifies only a subset of the rendered nodes (board
/// passes exclude pinned notices). Stale markers from earlier passes are
/// cleared first so repeated passes converge on the same visible state.
pub fn annotate(
    container: &mut Container,
    targets: &[usize],
    per_item: &[FilterState],
    counts: &ReasonCounts,
) {
    for (&index, state) in targets.iter().zip(per_item) {
        let Some(item) = container.items.get_mut(index) else {
            continue;
        };

        item.classes.remove(FILTERED);
        for reason in Reason::ALL {
            item.classes.remove(reason.marker_class());
        }

        if state.filtered() {
            item.classes.add(FILTERED);
            for reason in state.reasons() {
                item.classes.add(reason.marker_class());
            }
        }
    }

    // Any header from a previous pass is replaced, never accumulated.
    container.header = None;
    if counts.all == 0 {
        return;
    }

    let toggles = CountKey::ORDERED
        .into_iter()
        .filter(|key| counts.get(*key) > 0)
        .map(|key| FilterToggle {
            key,
            label: key.label(),
            count: counts.get(key),
            active: container.classes.contains(key.show_class()),
        })
        .collect();
    container.header = Some(FilterHeader { toggles });
}
