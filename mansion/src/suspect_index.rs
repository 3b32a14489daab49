use crate::dataset::MansionDataset;
use crate::room_map::BuildError;
use std::collections::HashMap;
use tracing::{info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Association {
    Registered,
    Overwritten,
    Rejected,
}

/// Clue text → suspect name. Keys match by exact text.
#[derive(Debug, Clone, Default)]
pub struct SuspectIndex {
    by_clue: HashMap<String, String>,
}

impl SuspectIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_dataset(dataset: &MansionDataset) -> Result<Self, BuildError> {
        let mut index = Self::new();
        index
            .by_clue
            .try_reserve(dataset.suspects.len())
            .map_err(|e| BuildError::Allocation("suspect index", e))?;

        for entry in &dataset.suspects {
            if index.associate(&entry.clue, &entry.suspect) == Association::Overwritten {
                warn!(
                    clue = %entry.clue,
                    suspect = %entry.suspect,
                    "Clue associated twice; keeping the later suspect"
                );
            }
        }
        for clue in dataset.unattributed_clues() {
            warn!(clue, "Clue has no suspect association");
        }

        info!(associations = index.len(), "Suspect index built");
        Ok(index)
    }

    pub fn associate(&mut self, clue: &str, suspect: &str) -> Association {
        if clue.is_empty() {
            return Association::Rejected;
        }
        match self.by_clue.insert(clue.to_string(), suspect.to_string()) {
            Some(_) => Association::Overwritten,
            None => Association::Registered,
        }
    }

    /// `None` means the suspect is unknown.
    pub fn lookup(&self, clue: &str) -> Option<&str> {
        if clue.is_empty() {
            return None;
        }
        self.by_clue.get(clue).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.by_clue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_clue.is_empty()
    }

    /// Distinct suspect names, sorted.
    pub fn suspects(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.by_clue.values().map(String::as_str).collect();
        names.sort_unstable();
        names.dedup();
        names
    }
}
