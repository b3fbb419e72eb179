use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::Arc;

use parking_lot::Mutex;

/// Page-mutation events that re-trigger registered passes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    ArticleChanged,
    CommentChanged,
}

type Callback = Arc<dyn Fn() + Send + Sync>;

struct Entry {
    priority: i32,
    callback: Callback,
}

#[derive(Default)]
struct Registry {
    article: Vec<Entry>,
    comment: Vec<Entry>,
}

impl Registry {
    fn entries_mut(&mut self, kind: EventKind) -> &mut Vec<Entry> {
        match kind {
            EventKind::ArticleChanged => &mut self.article,
            EventKind::CommentChanged => &mut self.comment,
        }
    }
}

/// Priority-ordered callback registry for page-mutation events.
///
/// External mutation detectors call [`fire`](Self::fire); features register
/// their re-apply passes once per page session. Registration is append-only
/// for the page's lifetime.
#[derive(Default)]
pub struct ReapplyScheduler {
    registry: Mutex<Registry>,
}

impl ReapplyScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&self, kind: EventKind, priority: i32, callback: impl Fn() + Send + Sync + 'static) {
        self.registry.lock().entries_mut(kind).push(Entry {
            priority,
            callback: Arc::new(callback),
        });
    }

    /// Invokes all callbacks for `kind` in ascending priority order, ties in
    /// registration order. A panicking callback is logged and skipped; its
    /// siblings still run. The registry lock is released before invocation,
    /// so callbacks may fire further events.
    pub fn fire(&self, kind: EventKind) {
        let mut snapshot: Vec<(i32, Callback)> = {
            let registry = self.registry.lock();
            let entries = match kind {
                EventKind::ArticleChanged => &registry.article,
                EventKind::CommentChanged => &registry.comment,
            };
            entries
                .iter()
                .map(|entry| (entry.priority, entry.callback.clone()))
                .collect()
        };
        snapshot.sort_by_key(|(priority, _)| *priority);

        for (priority, callback) in snapshot {
            if catch_unwind(AssertUnwindSafe(|| callback())).is_err() {
                tracing::error!(
                    target: "scheduler",
                    ?kind,
                    priority,
                    "registered callback panicked; continuing with remaining callbacks"
                );
            }
        }
    }
}
