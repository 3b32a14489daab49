use std::collections::BTreeSet;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Insertion {
    Added,
    AlreadyKnown,
}

/// Clues collected during a session: unique, kept in ascending byte order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClueLedger {
    clues: BTreeSet<String>,
}

impl ClueLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Empty or already-recorded clues are absorbed as [`Insertion::AlreadyKnown`].
    pub fn insert(&mut self, clue: &str) -> Insertion {
        if clue.is_empty() || self.clues.contains(clue) {
            return Insertion::AlreadyKnown;
        }
        self.clues.insert(clue.to_string());
        debug!(clue, total = self.clues.len(), "Clue added to ledger");
        Insertion::Added
    }

    pub fn iter_sorted(&self) -> impl Iterator<Item = &str> + '_ {
        self.clues.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.clues.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clues.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn iterates_in_ascending_order() {
        let mut ledger = ClueLedger::new();
        for clue in ["pear", "apple", "Zebra", "banana", "apple pie"] {
            ledger.insert(clue);
        }
        let sorted: Vec<&str> = ledger.iter_sorted().collect();
        // byte order: uppercase before lowercase
        assert_eq!(sorted, vec!["Zebra", "apple", "apple pie", "banana", "pear"]);
    }

    #[test]
    fn duplicate_insert_keeps_size() {
        let mut ledger = ClueLedger::new();
        assert_eq!(ledger.insert("knife"), Insertion::Added);
        assert_eq!(ledger.insert("knife"), Insertion::AlreadyKnown);
        assert_eq!(ledger.len(), 1);
    }

    #[test]
    fn comparison_is_case_sensitive() {
        let mut ledger = ClueLedger::new();
        assert_eq!(ledger.insert("Knife"), Insertion::Added);
        assert_eq!(ledger.insert("knife"), Insertion::Added);
        assert_eq!(ledger.len(), 2);
    }

    #[test]
    fn empty_clue_is_ignored() {
        let mut ledger = ClueLedger::new();
        assert_eq!(ledger.insert(""), Insertion::AlreadyKnown);
        assert!(ledger.is_empty());
    }

    #[test]
    fn iteration_is_restartable() {
        let mut ledger = ClueLedger::new();
        ledger.insert("b");
        ledger.insert("a");
        let first: Vec<&str> = ledger.iter_sorted().collect();
        let second: Vec<&str> = ledger.iter_sorted().collect();
        assert_eq!(first, second);
    }

    #[test]
    fn many_insertions_stay_sorted_and_unique() {
        let mut ledger = ClueLedger::new();
        for i in 0..200u32 {
            ledger.insert(&format!("clue-{}", (i * 37) % 50));
        }
        assert_eq!(ledger.len(), 50);
        let sorted: Vec<&str> = ledger.iter_sorted().collect();
        assert!(sorted.windows(2).all(|w| w[0] < w[1]));
    }
}
