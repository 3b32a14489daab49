use crate::clue_ledger::ClueLedger;
use crate::suspect_index::SuspectIndex;
use serde::Serialize;
use std::fmt;

pub const DEFAULT_THRESHOLD: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum Verdict {
    InsufficientEvidence,
    Cancelled,
    Sustained { matching: usize },
    NotSustained { matching: usize },
}

impl Verdict {
    /// Number of collected clues pointing at the accused, when a count was taken.
    pub fn matching(&self) -> Option<usize> {
        match self {
            Verdict::Sustained { matching } | Verdict::NotSustained { matching } => Some(*matching),
            Verdict::InsufficientEvidence | Verdict::Cancelled => None,
        }
    }

    pub fn is_sustained(&self) -> bool {
        matches!(self, Verdict::Sustained { .. })
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verdict::InsufficientEvidence => write!(f, "insufficient evidence"),
            Verdict::Cancelled => write!(f, "accusation cancelled"),
            Verdict::Sustained { .. } => write!(f, "sustained"),
            Verdict::NotSustained { .. } => write!(f, "not sustained"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Adjudicator {
    threshold: usize,
}

impl Default for Adjudicator {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
        }
    }
}

impl Adjudicator {
    /// A threshold of zero is raised to one so that an accusation always needs evidence.
    pub fn new(threshold: usize) -> Self {
        Self {
            threshold: threshold.max(1),
        }
    }

    pub fn threshold(&self) -> usize {
        self.threshold
    }

    /// Rules on `accused` from the collected clues.
    ///
    /// An empty ledger is judged before the name is looked at; an empty name
    /// cancels the accusation without counting. Names match exactly.
    pub fn judge(&self, ledger: &ClueLedger, index: &SuspectIndex, accused: &str) -> Verdict {
        if ledger.is_empty() {
            return Verdict::InsufficientEvidence;
        }
        if accused.is_empty() {
            return Verdict::Cancelled;
        }

        let matching = count_matching(ledger, index, accused);
        if matching >= self.threshold {
            Verdict::Sustained { matching }
        } else {
            Verdict::NotSustained { matching }
        }
    }
}

pub fn count_matching(ledger: &ClueLedger, index: &SuspectIndex, accused: &str) -> usize {
    ledger
        .iter_sorted()
        .filter(|clue| index.lookup(clue) == Some(accused))
        .count()
}

/// Rules with the default threshold.
pub fn judge(ledger: &ClueLedger, index: &SuspectIndex, accused: &str) -> Verdict {
    Adjudicator::default().judge(ledger, index, accused)
}
