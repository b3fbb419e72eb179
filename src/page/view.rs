use std::collections::BTreeSet;

use parking_lot::Mutex;

use crate::domain::{CountKey, ViewKind};

/// Marker class for any filtered item.
pub const FILTERED: &str = "filtered";
/// Marker class for a collapsed pinned notice.
pub const FILTERED_NOTICE: &str = "filtered-notice";
/// Container class that reveals collapsed notices.
pub const SHOW_FILTERED_NOTICE: &str = "show-filtered-notice";

/// CSS-equivalent state markers on a rendered node.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassList(BTreeSet<String>);

impl ClassList {
    pub fn add(&mut self, class: &str) {
        self.0.insert(class.to_string());
    }

    pub fn remove(&mut self, class: &str) {
        self.0.remove(class);
    }

    pub fn contains(&self, class: &str) -> bool {
        self.0.contains(class)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

/// One rendered board row or comment node.
#[derive(Debug, Clone)]
pub struct ItemNode {
    /// Stable identifier within the page; pass-scoped caches key on it.
    pub id: u64,
    pub author_display: String,
    /// Profile-title string of the author element, e.g. `Alice#1234` or an
    /// anonymous suffix like `(172.22)`. Empty when the rendering carries
    /// only the display name.
    pub author_tag: String,
    pub text: String,
    pub category: Option<String>,
    pub is_notice: bool,
    pub is_deleted: bool,
    pub has_preview: bool,
    pub classes: ClassList,
}

impl ItemNode {
    pub fn new(id: u64, author_display: impl Into<String>, text: impl Into<String>) -> Self {
        let author_display = author_display.into();
        Self {
            id,
            author_tag: String::new(),
            author_display,
            text: text.into(),
            category: None,
            is_notice: false,
            is_deleted: false,
            has_preview: false,
            classes: ClassList::default(),
        }
    }

    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.author_tag = tag.into();
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn notice(mut self) -> Self {
        self.is_notice = true;
        self
    }

    pub fn deleted(mut self) -> Self {
        self.is_deleted = true;
        self
    }

    pub fn with_preview(mut self) -> Self {
        self.has_preview = true;
        self
    }

    /// Badge label with the sentinel fallback for missing or empty badges.
    pub fn category_label(&self) -> &str {
        match self.category.as_deref() {
            Some(category) if !category.is_empty() => category,
            _ => crate::domain::GENERAL_CATEGORY,
        }
    }
}

/// One toggle in the filter summary header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterToggle {
    pub key: CountKey,
    pub label: &'static str,
    pub count: u32,
    pub active: bool,
}

/// The dismissible summary header above a filtered item list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterHeader {
    pub toggles: Vec<FilterToggle>,
}

/// The "reveal collapsed notices" affordance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RevealControl {
    pub count: u32,
    pub visible: bool,
}

/// The subtree of the page holding one view kind's items.
#[derive(Debug, Clone, Default)]
pub struct Container {
    pub classes: ClassList,
    pub items: Vec<ItemNode>,
    pub header: Option<FilterHeader>,
    pub notice_reveal: Option<RevealControl>,
}

impl Container {
    pub fn new(items: Vec<ItemNode>) -> Self {
        Self {
            items,
            ..Self::default()
        }
    }

    /// Flips visibility of items filtered under `key`. Each key toggles
    /// independently of the others; this is pure UI state, never persisted.
    pub fn toggle_filter(&mut self, key: CountKey) {
        let Some(header) = self.header.as_mut() else {
            return;
        };
        let Some(toggle) = header.toggles.iter_mut().find(|t| t.key == key) else {
            return;
        };

        let class = key.show_class();
        if self.classes.contains(class) {
            self.classes.remove(class);
            toggle.active = false;
        } else {
            self.classes.add(class);
            toggle.active = true;
        }
    }

    /// Reveals collapsed notices for the remainder of the page's lifetime
    /// and hides the affordance itself.
    pub fn reveal_notices(&mut self) {
        let Some(reveal) = self.notice_reveal.as_mut() else {
            return;
        };
        self.classes.add(SHOW_FILTERED_NOTICE);
        reveal.visible = false;
    }
}

/// Channel-supplied extra mute lists merged into the stored lists each pass.
#[derive(Debug, Clone, Default)]
pub struct LiveRules {
    pub users: Vec<String>,
    pub keywords: Vec<String>,
}

type LoadHook = Box<dyn FnOnce() + Send>;

/// The current state of the augmented page, as the host keeps it in sync.
///
/// Containers are wholesale-replaced by the host on pagination or live
/// updates; passes re-scope themselves to whatever is present when they run.
pub struct Document {
    pub channel_id: String,
    /// Channel category labels, filled in by the host's metadata parser.
    /// The engine never reads this; it is surfaced for the settings UI,
    /// which builds its per-category mute form from it.
    pub categories: Vec<String>,
    pub live_rules: Option<LiveRules>,
    pub board: Option<Container>,
    pub comments: Option<Container>,
    ready: bool,
    on_load: Vec<LoadHook>,
}

impl Document {
    pub fn new(channel_id: impl Into<String>) -> Self {
        Self {
            channel_id: channel_id.into(),
            categories: Vec::new(),
            live_rules: None,
            board: None,
            comments: None,
            ready: false,
            on_load: Vec::new(),
        }
    }

    /// Whether the host page's load lifecycle has completed.
    pub fn is_ready(&self) -> bool {
        self.ready
    }

    pub fn container(&self, view: ViewKind) -> Option<&Container> {
        match view {
            ViewKind::Board => self.board.as_ref(),
            ViewKind::Comment => self.comments.as_ref(),
        }
    }

    pub fn container_mut(&mut self, view: ViewKind) -> Option<&mut Container> {
        match view {
            ViewKind::Board => self.board.as_mut(),
            ViewKind::Comment => self.comments.as_mut(),
        }
    }

    /// Registers a one-shot hook run when the host signals page load.
    pub fn defer_on_load(&mut self, hook: LoadHook) {
        self.on_load.push(hook);
    }

    fn take_load_hooks(&mut self) -> Vec<LoadHook> {
        self.ready = true;
        std::mem::take(&mut self.on_load)
    }
}

impl std::fmt::Debug for Document {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Document")
            .field("channel_id", &self.channel_id)
            .field("ready", &self.ready)
            .field("board", &self.board)
            .field("comments", &self.comments)
            .field("deferred", &self.on_load.len())
            .finish()
    }
}

/// Shared handle to the document, usable from scheduler callbacks.
pub struct Page {
    doc: Mutex<Document>,
}

impl Page {
    pub fn new(doc: Document) -> Self {
        Self {
            doc: Mutex::new(doc),
        }
    }

    pub fn with<R>(&self, f: impl FnOnce(&mut Document) -> R) -> R {
        f(&mut self.doc.lock())
    }

    /// Marks the page load lifecycle complete and runs hooks deferred by
    /// early pass invocations. Hooks run outside the document lock so they
    /// can re-enter the page.
    pub fn notify_loaded(&self) {
        let hooks = self.doc.lock().take_load_hooks();
        for hook in hooks {
            hook();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_filter_flips_container_class_independently() {
        let mut container = Container::new(Vec::new());
        container.header = Some(FilterHeader {
            toggles: vec![
                FilterToggle {
                    key: CountKey::Keyword,
                    label: CountKey::Keyword.label(),
                    count: 2,
                    active: false,
                },
                FilterToggle {
                    key: CountKey::All,
                    label: CountKey::All.label(),
                    count: 2,
                    active: false,
                },
            ],
        });

        container.toggle_filter(CountKey::Keyword);
        assert!(container.classes.contains("show-filtered-keyword"));
        assert!(!container.classes.contains("show-filtered"));

        container.toggle_filter(CountKey::All);
        assert!(container.classes.contains("show-filtered-keyword"));
        assert!(container.classes.contains("show-filtered"));

        container.toggle_filter(CountKey::Keyword);
        assert!(!container.classes.contains("show-filtered-keyword"));
        assert!(container.classes.contains("show-filtered"));
    }

    #[test]
    fn toggle_without_header_is_a_no_op() {
        let mut container = Container::new(Vec::new());
        container.toggle_filter(CountKey::All);
        assert!(!container.classes.contains("show-filtered"));
    }

    #[test]
    fn reveal_notices_is_permanent_and_hides_the_control() {
        let mut container = Container::new(Vec::new());
        container.notice_reveal = Some(RevealControl {
            count: 3,
            visible: true,
        });

        container.reveal_notices();
        assert!(container.classes.contains(SHOW_FILTERED_NOTICE));
        assert!(!container.notice_reveal.as_ref().unwrap().visible);
    }

    #[test]
    fn notify_loaded_runs_deferred_hooks_once() {
        use std::sync::atomic::{AtomicU32, Ordering};
        use std::sync::Arc;

        let page = Arc::new(Page::new(Document::new("c1")));
        let ran = Arc::new(AtomicU32::new(0));

        let counter = ran.clone();
        page.with(|doc| {
            assert!(!doc.is_ready());
            doc.defer_on_load(Box::new(move || {
                counter.fetch_add(1, Ordering::SeqCst);
            }));
        });

        page.notify_loaded();
        assert_eq!(ran.load(Ordering::SeqCst), 1);
        assert!(page.with(|doc| doc.is_ready()));

        page.notify_loaded();
        assert_eq!(ran.load(Ordering::SeqCst), 1);
    }
}
