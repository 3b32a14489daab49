use crate::dataset::{DatasetError, MansionDataset};
use std::collections::HashMap;
use std::collections::TryReserveError;
use tracing::{debug, info};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RoomId(usize);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Direction::Left => write!(f, "left"),
            Direction::Right => write!(f, "right"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Room {
    name: String,
    clue: Option<String>,
    left: Option<RoomId>,
    right: Option<RoomId>,
}

impl Room {
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The clue still lying in this room, if it has not been collected.
    pub fn clue(&self) -> Option<&str> {
        self.clue.as_deref()
    }
}

#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    #[error(transparent)]
    Dataset(#[from] DatasetError),
    #[error("Out of memory while building the {0}")]
    Allocation(&'static str, #[source] TryReserveError),
}

/// Fixed-shape binary tree of rooms stored in an arena.
///
/// The links never change after [`RoomMap::build`]; the only mutation is
/// [`RoomMap::consume_clue`], which moves a clue from present to absent.
#[derive(Debug, Clone)]
pub struct RoomMap {
    rooms: Vec<Room>,
    root: RoomId,
}

impl RoomMap {
    pub fn build(dataset: &MansionDataset) -> Result<Self, BuildError> {
        dataset.validate()?;

        let mut rooms: Vec<Room> = Vec::new();
        rooms
            .try_reserve_exact(dataset.rooms.len())
            .map_err(|e| BuildError::Allocation("room map", e))?;

        let ids: HashMap<&str, RoomId> = dataset
            .rooms
            .iter()
            .enumerate()
            .map(|(i, spec)| (spec.name.as_str(), RoomId(i)))
            .collect();
        // validate() guarantees every referenced name is present
        let link = |name: &Option<String>| name.as_deref().and_then(|n| ids.get(n).copied());

        for spec in &dataset.rooms {
            rooms.push(Room {
                name: spec.name.clone(),
                clue: spec.clue.clone().filter(|c| !c.is_empty()),
                left: link(&spec.left),
                right: link(&spec.right),
            });
        }

        let root = ids[dataset.root.as_str()];
        info!(rooms = rooms.len(), root = %dataset.root, "Room map built");
        Ok(Self { rooms, root })
    }

    pub fn root(&self) -> RoomId {
        self.root
    }

    pub fn len(&self) -> usize {
        self.rooms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }

    pub fn room(&self, id: RoomId) -> &Room {
        &self.rooms[id.0]
    }

    pub fn find(&self, name: &str) -> Option<RoomId> {
        self.rooms.iter().position(|r| r.name == name).map(RoomId)
    }

    pub fn left_of(&self, id: RoomId) -> Option<RoomId> {
        self.rooms[id.0].left
    }

    pub fn right_of(&self, id: RoomId) -> Option<RoomId> {
        self.rooms[id.0].right
    }

    pub fn child(&self, id: RoomId, direction: Direction) -> Option<RoomId> {
        match direction {
            Direction::Left => self.left_of(id),
            Direction::Right => self.right_of(id),
        }
    }

    /// Takes the clue out of a room. A second call on the same room returns `None`.
    pub fn consume_clue(&mut self, id: RoomId) -> Option<String> {
        let room = &mut self.rooms[id.0];
        let clue = room.clue.take();
        if clue.is_some() {
            debug!(room = %room.name, "Clue consumed");
        }
        clue
    }

    pub fn rooms(&self) -> impl Iterator<Item = (RoomId, &Room)> {
        self.rooms.iter().enumerate().map(|(i, r)| (RoomId(i), r))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::RoomSpec;

    fn small_dataset() -> MansionDataset {
        MansionDataset {
            title: "small".to_string(),
            root: "Hall".to_string(),
            rooms: vec![
                RoomSpec {
                    name: "Hall".to_string(),
                    clue: Some("X".to_string()),
                    left: Some("Study".to_string()),
                    right: None,
                },
                RoomSpec {
                    name: "Study".to_string(),
                    clue: Some(String::new()),
                    left: None,
                    right: None,
                },
            ],
            suspects: vec![],
        }
    }

    #[test]
    fn builds_links_from_names() {
        let map = RoomMap::build(&small_dataset()).unwrap();
        let root = map.root();
        assert_eq!(map.room(root).name(), "Hall");
        let study = map.left_of(root).unwrap();
        assert_eq!(map.room(study).name(), "Study");
        assert_eq!(map.right_of(root), None);
        assert_eq!(map.child(study, Direction::Left), None);
        assert_eq!(map.find("Study"), Some(study));
        assert_eq!(map.len(), 2);
    }

    #[test]
    fn empty_clue_text_means_no_clue() {
        let map = RoomMap::build(&small_dataset()).unwrap();
        let study = map.find("Study").unwrap();
        assert_eq!(map.room(study).clue(), None);
    }

    #[test]
    fn consuming_twice_yields_clue_then_nothing() {
        let mut map = RoomMap::build(&small_dataset()).unwrap();
        let root = map.root();
        assert_eq!(map.consume_clue(root).as_deref(), Some("X"));
        assert_eq!(map.consume_clue(root), None);
        assert_eq!(map.room(root).clue(), None);
    }

    #[test]
    fn invalid_dataset_is_rejected() {
        let mut dataset = small_dataset();
        dataset.root = "Nowhere".to_string();
        assert!(matches!(
            RoomMap::build(&dataset),
            Err(BuildError::Dataset(DatasetError::UnknownRoot(_)))
        ));
    }

    #[test]
    fn builtin_mansion_shape() {
        let map = RoomMap::build(&MansionDataset::builtin().unwrap()).unwrap();
        let hall = map.root();
        let living = map.left_of(hall).unwrap();
        let library = map.left_of(living).unwrap();
        let attic = map.left_of(library).unwrap();
        assert_eq!(map.room(attic).name(), "Attic");
        assert_eq!(map.left_of(attic), None);
        assert_eq!(map.right_of(attic), None);
        assert_eq!(map.rooms().count(), 8);
    }
}
