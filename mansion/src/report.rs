use crate::adjudicator::Verdict;
use crate::clue_ledger::ClueLedger;
use serde::Serialize;

/// End-of-session summary, printed with `--json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionReport {
    pub title: String,
    pub clues: Vec<String>,
    pub accused: Option<String>,
    /// Clues pointing at the accused; absent when no count was taken.
    pub matching: Option<usize>,
    pub verdict: Verdict,
}

impl SessionReport {
    pub fn new(title: &str, ledger: &ClueLedger, accused: Option<&str>, verdict: Verdict) -> Self {
        Self {
            title: title.to_string(),
            clues: ledger.iter_sorted().map(str::to_string).collect(),
            accused: accused.filter(|name| !name.is_empty()).map(str::to_string),
            matching: verdict.matching(),
            verdict,
        }
    }
}
