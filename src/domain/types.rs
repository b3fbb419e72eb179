/// Why a content item was filtered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Reason {
    Keyword,
    User,
    Category,
    Deleted,
}

impl Reason {
    pub const ALL: [Reason; 4] = [
        Reason::Keyword,
        Reason::User,
        Reason::Category,
        Reason::Deleted,
    ];

    /// Marker class applied to a matched item.
    pub fn marker_class(self) -> &'static str {
        match self {
            Reason::Keyword => "filtered-keyword",
            Reason::User => "filtered-user",
            Reason::Category => "filtered-category",
            Reason::Deleted => "filtered-deleted",
        }
    }
}

/// A per-reason counter key, plus the aggregate `All`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CountKey {
    Keyword,
    User,
    Category,
    Deleted,
    All,
}

impl CountKey {
    /// Summary-header order.
    pub const ORDERED: [CountKey; 5] = [
        CountKey::Keyword,
        CountKey::User,
        CountKey::Category,
        CountKey::Deleted,
        CountKey::All,
    ];

    pub fn label(self) -> &'static str {
        match self {
            CountKey::Keyword => "Keyword",
            CountKey::User => "User",
            CountKey::Category => "Category",
            CountKey::Deleted => "Deleted",
            CountKey::All => "All",
        }
    }

    /// Container class that reveals items filtered under this key.
    pub fn show_class(self) -> &'static str {
        match self {
            CountKey::Keyword => "show-filtered-keyword",
            CountKey::User => "show-filtered-user",
            CountKey::Category => "show-filtered-category",
            CountKey::Deleted => "show-filtered-deleted",
            CountKey::All => "show-filtered",
        }
    }
}

impl From<Reason> for CountKey {
    fn from(reason: Reason) -> Self {
        match reason {
            Reason::Keyword => CountKey::Keyword,
            Reason::User => CountKey::User,
            Reason::Category => CountKey::Category,
            Reason::Deleted => CountKey::Deleted,
        }
    }
}

/// Match reasons for one item. `filtered()` holds exactly when any reason is
/// set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FilterState {
    pub keyword: bool,
    pub user: bool,
    pub category: bool,
    pub deleted: bool,
}

impl FilterState {
    pub fn set(&mut self, reason: Reason) {
        match reason {
            Reason::Keyword => self.keyword = true,
            Reason::User => self.user = true,
            Reason::Category => self.category = true,
            Reason::Deleted => self.deleted = true,
        }
    }

    pub fn has(&self, reason: Reason) -> bool {
        match reason {
            Reason::Keyword => self.keyword,
            Reason::User => self.user,
            Reason::Category => self.category,
            Reason::Deleted => self.deleted,
        }
    }

    pub fn filtered(&self) -> bool {
        self.keyword || self.user || self.category || self.deleted
    }

    pub fn reasons(&self) -> impl Iterator<Item = Reason> + '_ {
        Reason::ALL.into_iter().filter(|reason| self.has(*reason))
    }
}

/// Counters accumulated over one pass. `all` increments once per matched
/// reason, so an item matching two reasons contributes two units to `all`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReasonCounts {
    pub keyword: u32,
    pub user: u32,
    pub category: u32,
    pub deleted: u32,
    pub all: u32,
}

impl ReasonCounts {
    pub fn record(&mut self, reason: Reason) {
        match reason {
            Reason::Keyword => self.keyword += 1,
            Reason::User => self.user += 1,
            Reason::Category => self.category += 1,
            Reason::Deleted => self.deleted += 1,
        }
        self.all += 1;
    }

    pub fn get(&self, key: CountKey) -> u32 {
        match key {
            CountKey::Keyword => self.keyword,
            CountKey::User => self.user,
            CountKey::Category => self.category,
            CountKey::Deleted => self.deleted,
            CountKey::All => self.all,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filtered_tracks_reasons() {
        let mut state = FilterState::default();
        assert!(!state.filtered());

        state.set(Reason::Keyword);
        state.set(Reason::User);
        assert!(state.filtered());
        assert_eq!(
            state.reasons().collect::<Vec<_>>(),
            vec![Reason::Keyword, Reason::User]
        );
    }

    #[test]
    fn all_counts_once_per_reason() {
        let mut counts = ReasonCounts::default();
        counts.record(Reason::Keyword);
        counts.record(Reason::User);
        counts.record(Reason::User);

        assert_eq!(counts.keyword, 1);
        assert_eq!(counts.user, 2);
        assert_eq!(counts.all, 3);
        assert_eq!(counts.get(CountKey::All), 3);
    }
}
