//! High score ledger
//!
//! Keeps the best player scores of past sessions. Storage lives behind the
//! [`LedgerStore`] trait so the ledger itself never touches the filesystem.

/// Maximum number of entries kept in the ledger
pub const MAX_HIGH_SCORES: usize = 5;

/// Persistence backend for the high score ledger.
///
/// Implementations swallow their own failures: a store that cannot be read
/// yields an empty list, and a store that cannot be written drops the write.
pub trait LedgerStore {
    /// Load the persisted entries
    fn load(&mut self) -> Vec<u32>;

    /// Persist the given entries, replacing whatever was stored
    fn save(&mut self, entries: &[u32]);
}

/// In-memory store, used by tests and when persistence is disabled
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryStore {
    pub entries: Vec<u32>,
    /// Number of times `save` has been called
    pub saves: usize,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entries(entries: Vec<u32>) -> Self {
        Self { entries, saves: 0 }
    }
}

impl LedgerStore for MemoryStore {
    fn load(&mut self) -> Vec<u32> {
        self.entries.clone()
    }

    fn save(&mut self, entries: &[u32]) {
        self.entries = entries.to_vec();
        self.saves += 1;
    }
}

impl<S: LedgerStore + ?Sized> LedgerStore for Box<S> {
    fn load(&mut self) -> Vec<u32> {
        (**self).load()
    }

    fn save(&mut self, entries: &[u32]) {
        (**self).save(entries)
    }
}

/// Descending list of distinct positive scores, at most [`MAX_HIGH_SCORES`] long
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HighScores {
    entries: Vec<u32>,
}

impl HighScores {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a ledger from untrusted entries (e.g. loaded from disk).
    ///
    /// Zeros are dropped, duplicates collapsed, and the result is sorted
    /// descending and truncated.
    pub fn from_entries(entries: impl IntoIterator<Item = u32>) -> Self {
        let mut ledger = Self {
            entries: entries.into_iter().filter(|&s| s > 0).collect(),
        };
        ledger.normalize();
        ledger
    }

    /// Offer a finished session's player score to the ledger.
    ///
    /// Returns true if the ledger changed. A score already present is not
    /// added a second time.
    pub fn retire(&mut self, score: u32) -> bool {
        if score == 0 || self.entries.contains(&score) {
            return false;
        }
        if self.entries.len() >= MAX_HIGH_SCORES && self.lowest().is_some_and(|low| score < low) {
            return false;
        }
        self.entries.push(score);
        self.normalize();
        self.entries.contains(&score)
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn entries(&self) -> &[u32] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn lowest(&self) -> Option<u32> {
        self.entries.last().copied()
    }

    fn normalize(&mut self) {
        self.entries.sort_unstable_by(|a, b| b.cmp(a));
        self.entries.dedup();
        self.entries.truncate(MAX_HIGH_SCORES);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_retire_into_empty() {
        let mut ledger = HighScores::new();
        assert!(ledger.retire(3));
        assert_eq!(ledger.entries(), &[3]);
    }

    #[test]
    fn test_zero_never_recorded() {
        let mut ledger = HighScores::new();
        assert!(!ledger.retire(0));
        assert!(ledger.is_empty());
    }

    #[test]
    fn test_sorted_descending() {
        let mut ledger = HighScores::new();
        for s in [2, 7, 4] {
            ledger.retire(s);
        }
        assert_eq!(ledger.entries(), &[7, 4, 2]);
        assert_eq!(ledger.entries().first(), Some(&7));
    }

    #[test]
    fn test_duplicate_collapses() {
        let mut ledger = HighScores::from_entries([5, 4, 3, 2, 1]);
        assert!(!ledger.retire(3));
        assert_eq!(ledger.entries(), &[5, 4, 3, 2, 1]);
        assert_eq!(ledger.len(), 5);
    }

    #[test]
    fn test_full_ledger_drops_lowest() {
        let mut ledger = HighScores::from_entries([10, 8, 6, 4, 2]);
        assert!(ledger.retire(5));
        assert_eq!(ledger.entries(), &[10, 8, 6, 5, 4]);
    }

    #[test]
    fn test_full_ledger_rejects_small_score() {
        let mut ledger = HighScores::from_entries([10, 8, 6, 4, 2]);
        assert!(!ledger.retire(1));
        assert_eq!(ledger.entries(), &[10, 8, 6, 4, 2]);
    }

    #[test]
    fn test_from_entries_sanitizes() {
        let ledger = HighScores::from_entries([0, 3, 9, 3, 1, 12, 7, 2]);
        assert_eq!(ledger.entries(), &[12, 9, 7, 3, 2]);
    }

    #[test]
    fn test_clear() {
        let mut ledger = HighScores::from_entries([3, 2]);
        ledger.clear();
        assert!(ledger.is_empty());
        assert_eq!(ledger.entries().first(), None);
    }

    #[test]
    fn test_memory_store_counts_saves() {
        let mut store = MemoryStore::with_entries(vec![4, 1]);
        assert_eq!(store.load(), vec![4, 1]);
        store.save(&[9]);
        assert_eq!(store.entries, vec![9]);
        assert_eq!(store.saves, 1);
    }

    proptest! {
        #[test]
        fn prop_ledger_invariants(scores in prop::collection::vec(0u32..20, 0..40)) {
            let mut ledger = HighScores::new();
            for s in scores {
                ledger.retire(s);
                let e = ledger.entries();
                prop_assert!(e.len() <= MAX_HIGH_SCORES);
                prop_assert!(e.iter().all(|&x| x > 0));
                prop_assert!(e.windows(2).all(|w| w[0] > w[1]));
            }
        }

        #[test]
        fn prop_retire_matches_naive_model(
            start in prop::collection::vec(0u32..30, 0..10),
            score in 0u32..30
        ) {
            let mut ledger = HighScores::from_entries(start.clone());
            let before = ledger.clone();
            let changed = ledger.retire(score);

            let mut model: Vec<u32> = before.entries().to_vec();
            if score > 0 {
                model.push(score);
            }
            model.sort_unstable_by(|a, b| b.cmp(a));
            model.dedup();
            model.truncate(MAX_HIGH_SCORES);

            prop_assert_eq!(ledger.entries(), model.as_slice());
            prop_assert_eq!(changed, ledger != before);
        }
    }
}
