use crate::dataset::MansionDataset;
use crate::explorer::Explorer;
use crate::room_map::{BuildError, RoomMap};
use crate::suspect_index::SuspectIndex;

/// Everything built once at startup: the map to walk and the suspect table.
#[derive(Debug, Clone)]
pub struct Mansion {
    pub title: String,
    pub map: RoomMap,
    pub index: SuspectIndex,
}

impl Mansion {
    /// Builds both structures or neither.
    pub fn from_dataset(dataset: &MansionDataset) -> Result<Self, BuildError> {
        let map = RoomMap::build(dataset)?;
        let index = SuspectIndex::from_dataset(dataset)?;
        Ok(Self {
            title: dataset.title.clone(),
            map,
            index,
        })
    }

    pub fn explorer(&mut self) -> Explorer<'_> {
        Explorer::new(&mut self.map)
    }
}
