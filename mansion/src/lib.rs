//! Mansion investigation engine.
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`dataset`] | Room layout and clue → suspect table (JSON, built-in default) |
//! | [`room_map`] | Fixed binary tree of rooms, clue consumption |
//! | [`clue_ledger`] | Sorted, duplicate-free set of collected clues |
//! | [`suspect_index`] | Clue text → suspect lookup |
//! | [`command`] | Player command parsing and input sources |
//! | [`explorer`] | Walk state machine driving clue collection |
//! | [`adjudicator`] | Verdict for a named suspect |
//! | [`report`] | Serializable end-of-session summary |

pub mod adjudicator;
pub mod clue_ledger;
pub mod command;
pub mod dataset;
pub mod explorer;
pub mod game;
pub mod report;
pub mod room_map;
pub mod suspect_index;


pub use adjudicator::{Adjudicator, Verdict};
pub use clue_ledger::{ClueLedger, Insertion};
pub use command::{Command, CommandSource, ScriptedCommands};
pub use dataset::{DatasetError, MansionDataset};
pub use explorer::{Discovery, Event, Explorer, ExplorerState};
pub use game::Mansion;
pub use report::SessionReport;
pub use room_map::{BuildError, Direction, RoomId, RoomMap};
pub use suspect_index::{Association, SuspectIndex};
