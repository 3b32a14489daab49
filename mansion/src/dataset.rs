//! Mansion dataset: the room layout and the clue → suspect table.
//!
//! Everything the game needs at startup is described here and handed to
//! [`RoomMap::build`](crate::room_map::RoomMap::build) and
//! [`SuspectIndex::from_dataset`](crate::suspect_index::SuspectIndex::from_dataset).

use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet, VecDeque};
use std::path::Path;

const BUILTIN_JSON: &str = include_str!("../data/mansion.json");

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomSpec {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub clue: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub left: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub right: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuspectSpec {
    pub clue: String,
    pub suspect: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MansionDataset {
    #[serde(default = "default_title")]
    pub title: String,
    pub root: String,
    pub rooms: Vec<RoomSpec>,
    #[serde(default)]
    pub suspects: Vec<SuspectSpec>,
}

fn default_title() -> String {
    "Detective Quest".to_string()
}

#[derive(Debug, thiserror::Error)]
pub enum DatasetError {
    #[error("Failed to read dataset {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to parse dataset JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Dataset has no rooms")]
    NoRooms,
    #[error("Room name must not be empty")]
    EmptyRoomName,
    #[error("Duplicate room name: {0:?}")]
    DuplicateRoom(String),
    #[error("Root room {0:?} is not defined")]
    UnknownRoot(String),
    #[error("Room {room:?} links to undefined room {target:?}")]
    UnknownChild { room: String, target: String },
    #[error("Room {0:?} is linked as a child more than once")]
    SharedChild(String),
    #[error("Root room {0:?} cannot be a child of another room")]
    RootIsChild(String),
    #[error("Room {0:?} is not reachable from the root")]
    Unreachable(String),
}

impl MansionDataset {
    /// The mansion shipped with the game.
    pub fn builtin() -> Result<Self, DatasetError> {
        Self::from_json_str(BUILTIN_JSON)
    }

    pub fn from_json_str(json: &str) -> Result<Self, DatasetError> {
        let dataset: Self = serde_json::from_str(json)?;
        dataset.validate()?;
        Ok(dataset)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, DatasetError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| DatasetError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    /// Checks that the rooms form a single binary tree hanging from `root`.
    pub fn validate(&self) -> Result<(), DatasetError> {
        if self.rooms.is_empty() {
            return Err(DatasetError::NoRooms);
        }

        let mut by_name: HashMap<&str, &RoomSpec> = HashMap::new();
        for room in &self.rooms {
            if room.name.is_empty() {
                return Err(DatasetError::EmptyRoomName);
            }
            if by_name.insert(room.name.as_str(), room).is_some() {
                return Err(DatasetError::DuplicateRoom(room.name.clone()));
            }
        }

        if !by_name.contains_key(self.root.as_str()) {
            return Err(DatasetError::UnknownRoot(self.root.clone()));
        }

        let mut linked: HashSet<&str> = HashSet::new();
        for room in &self.rooms {
            for target in room.left.iter().chain(room.right.iter()) {
                if !by_name.contains_key(target.as_str()) {
                    return Err(DatasetError::UnknownChild {
                        room: room.name.clone(),
                        target: target.clone(),
                    });
                }
                if *target == self.root {
                    return Err(DatasetError::RootIsChild(target.clone()));
                }
                if !linked.insert(target.as_str()) {
                    return Err(DatasetError::SharedChild(target.clone()));
                }
            }
        }

        // Every room has at most one parent and the root has none, so a BFS
        // from the root either reaches every room or leaves a detached cycle.
        let mut seen: HashSet<&str> = HashSet::new();
        let mut queue = VecDeque::from([self.root.as_str()]);
        while let Some(name) = queue.pop_front() {
            if !seen.insert(name) {
                continue;
            }
            let room = by_name[name];
            queue.extend(room.left.iter().map(String::as_str));
            queue.extend(room.right.iter().map(String::as_str));
        }
        if let Some(lost) = self.rooms.iter().find(|r| !seen.contains(r.name.as_str())) {
            return Err(DatasetError::Unreachable(lost.name.clone()));
        }

        Ok(())
    }

    /// Clues placed in rooms that have no suspect association.
    pub fn unattributed_clues(&self) -> Vec<&str> {
        let attributed: HashSet<&str> = self.suspects.iter().map(|s| s.clue.as_str()).collect();
        self.rooms
            .iter()
            .filter_map(|r| r.clue.as_deref())
            .filter(|clue| !clue.is_empty() && !attributed.contains(clue))
            .collect()
    }
}
