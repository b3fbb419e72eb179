use std::collections::HashSet;
use std::sync::Arc;

use crate::config::{rules, RuleSnapshot, RuleStore, HIDE_NOTICE, MUTE_CATEGORY};
use crate::domain::{ContentItem, ViewKind};
use crate::engine::{annotator, classify, notices, preview, ClassifyContext, Matcher};
use crate::page::{Document, IdentityCache, LiveRules, Page};
use crate::scheduler::{EventKind, ReapplyScheduler};

/// Drives the moderation passes against the shared page document.
///
/// Every pass re-reads the rule store and re-scopes itself to the current
/// page state, so firing the same event repeatedly converges on the same
/// visible result regardless of what the host swapped in between.
#[derive(Clone)]
pub struct Moderator {
    store: Arc<dyn RuleStore>,
    page: Arc<Page>,
}

impl Moderator {
    pub fn new(store: Arc<dyn RuleStore>, page: Arc<Page>) -> Self {
        Self { store, page }
    }

    /// Runs the initial passes for whatever the page currently shows and
    /// registers the re-apply callbacks.
    pub fn install(&self, scheduler: &ReapplyScheduler) {
        let (has_board, has_comments) = self
            .page
            .with(|doc| (doc.board.is_some(), doc.comments.is_some()));
        if has_board {
            self.collapse_notices();
            self.mute_previews();
            self.apply(ViewKind::Board);
        }
        if has_comments {
            self.apply(ViewKind::Comment);
        }

        let board = self.clone();
        scheduler.register(EventKind::ArticleChanged, 100, move || {
            board.collapse_notices();
            board.mute_previews();
            board.apply(ViewKind::Board);
        });
        let comments = self.clone();
        scheduler.register(EventKind::CommentChanged, 100, move || {
            comments.apply(ViewKind::Comment);
        });
    }

    /// One classification+annotation pass over the given view. Deferred to
    /// page load when invoked before the host finished rendering; a missing
    /// container is expected on views without that scope and returns
    /// silently.
    pub fn apply(&self, view: ViewKind) {
        self.page.with(|doc| {
            if !doc.is_ready() {
                let moderator = self.clone();
                doc.defer_on_load(Box::new(move || moderator.apply(view)));
                return;
            }
            self.apply_now(doc, view);
        });
    }

    fn apply_now(&self, doc: &mut Document, view: ViewKind) {
        let snapshot = RuleSnapshot::load(self.store.as_ref());
        let (users, keywords) = merged_rules(&snapshot, doc.live_rules.as_ref());
        let channel = doc.channel_id.clone();
        let categories = snapshot.muted_categories.get(&channel);

        let Some(container) = doc.container_mut(view) else {
            return;
        };

        let mut cache = IdentityCache::new();
        let mut targets = Vec::new();
        let mut items = Vec::new();
        for (index, node) in container.items.iter().enumerate() {
            if node.is_notice {
                continue;
            }
            targets.push(index);
            items.push(ContentItem {
                author_identity: cache.identity(node),
                text: node.text.clone(),
                category: node.category_label().to_string(),
                is_deleted: node.is_deleted,
            });
        }

        let keyword = compile_source("blockKeyword", &keywords);
        let user = compile_source("blockUser", &users);
        let result = classify(
            &items,
            &ClassifyContext {
                keyword: &keyword,
                user: &user,
                categories,
            },
        );
        annotator::annotate(container, &targets, &result.per_item, &result.counts);

        tracing::debug!(
            target: "mute",
            ?view,
            channel = %channel,
            items = items.len(),
            matched = result.counts.all,
            "moderation pass complete"
        );
    }

    /// Collapses pinned notices on the board, when the toggle is on.
    pub fn collapse_notices(&self) {
        if !rules::read_or_default::<bool>(self.store.as_ref(), HIDE_NOTICE) {
            return;
        }
        self.page.with(|doc| {
            if !doc.is_ready() {
                let moderator = self.clone();
                doc.defer_on_load(Box::new(move || moderator.collapse_notices()));
                return;
            }
            let Some(board) = doc.board.as_mut() else {
                return;
            };
            notices::collapse(board);
        });
    }

    /// Strips previews from board rows in preview-muted categories.
    pub fn mute_previews(&self) {
        let config: crate::config::MuteCategoryMap =
            rules::read_or_default(self.store.as_ref(), MUTE_CATEGORY);
        self.page.with(|doc| {
            let Some(categories) = config.get(doc.channel_id.as_str()) else {
                return;
            };
            let Some(board) = doc.board.as_mut() else {
                return;
            };
            preview::mute_previews(board, categories);
        });
    }
}

fn compile_source(source: &'static str, patterns: &[String]) -> Matcher {
    match Matcher::compile(patterns) {
        Ok(matcher) => matcher,
        Err(error) => {
            tracing::warn!(
                target: "mute",
                source,
                %error,
                "rule source failed to compile; skipping it for this pass"
            );
            Matcher::never()
        }
    }
}

/// Stored lists merged with channel-supplied live lists, duplicates removed
/// while keeping first-seen order.
fn merged_rules(snapshot: &RuleSnapshot, live: Option<&LiveRules>) -> (Vec<String>, Vec<String>) {
    let mut users = snapshot.blocked_users.clone();
    let mut keywords = snapshot.blocked_keywords.clone();
    if let Some(live) = live {
        users.extend(live.users.iter().cloned());
        keywords.extend(live.keywords.iter().cloned());
        dedup_preserving(&mut users);
        dedup_preserving(&mut keywords);
    }
    (users, keywords)
}

fn dedup_preserving(list: &mut Vec<String>) {
    let mut seen = HashSet::new();
    list.retain(|entry| seen.insert(entry.clone()));
}
