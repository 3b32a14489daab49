//! Exploration controller.
//!
//! Walks the room map one room at a time, collecting each room's clue into
//! the ledger on entry. The walk only descends; no path history is kept.

use crate::clue_ledger::{ClueLedger, Insertion};
use crate::command::{Command, CommandSource};
use crate::room_map::{Direction, RoomId, RoomMap};
use anyhow::Result;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExplorerState {
    /// Standing in a room that has not been searched yet.
    AtRoom,
    /// Room searched, waiting for the next command.
    Exploring,
    Finished,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Discovery {
    Clue { text: String, insertion: Insertion },
    Nothing,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    Entered {
        room: RoomId,
        name: String,
        discovery: Discovery,
    },
    NoPath { direction: Direction },
    InvalidChoice { input: String },
    Finished { clues: usize },
}

pub struct Explorer<'m> {
    map: &'m mut RoomMap,
    current: RoomId,
    ledger: ClueLedger,
    state: ExplorerState,
}

impl<'m> Explorer<'m> {
    pub fn new(map: &'m mut RoomMap) -> Self {
        Self::resume(map, ClueLedger::new())
    }

    /// Starts a new walk from the root, keeping clues collected earlier.
    pub fn resume(map: &'m mut RoomMap, ledger: ClueLedger) -> Self {
        let current = map.root();
        Self {
            map,
            current,
            ledger,
            state: ExplorerState::AtRoom,
        }
    }

    pub fn state(&self) -> ExplorerState {
        self.state
    }

    pub fn current_room(&self) -> RoomId {
        self.current
    }

    pub fn current_name(&self) -> &str {
        self.map.room(self.current).name()
    }

    pub fn ledger(&self) -> &ClueLedger {
        &self.ledger
    }

    /// Searches the current room: a clue still lying there is taken and recorded.
    pub fn enter(&mut self) -> Event {
        let discovery = match self.map.consume_clue(self.current) {
            Some(text) => {
                let insertion = self.ledger.insert(&text);
                Discovery::Clue { text, insertion }
            }
            None => Discovery::Nothing,
        };
        self.state = ExplorerState::Exploring;

        let name = self.map.room(self.current).name().to_string();
        debug!(room = %name, ?discovery, "Entered room");
        Event::Entered {
            room: self.current,
            name,
            discovery,
        }
    }

    /// Applies one command. Returns `None` unless the explorer is waiting for input.
    pub fn step(&mut self, command: Command) -> Option<Event> {
        if self.state != ExplorerState::Exploring {
            return None;
        }
        let event = match command {
            Command::Go(direction) => match self.map.child(self.current, direction) {
                Some(next) => {
                    debug!(from = %self.current_name(), %direction, "Moving");
                    self.current = next;
                    self.state = ExplorerState::AtRoom;
                    self.enter()
                }
                None => Event::NoPath { direction },
            },
            Command::Exit => self.finish_walk(),
            Command::Invalid(input) => Event::InvalidChoice { input },
        };
        Some(event)
    }

    /// Drives the walk until the player exits or the input runs out.
    pub fn run<S, F>(mut self, source: &mut S, mut on_event: F) -> Result<ClueLedger>
    where
        S: CommandSource + ?Sized,
        F: FnMut(&Event),
    {
        if self.state == ExplorerState::AtRoom {
            let event = self.enter();
            on_event(&event);
        }

        while self.state != ExplorerState::Finished {
            let event = match source.next_line()? {
                Some(line) => self.step(Command::parse(&line)),
                None => {
                    debug!("Input exhausted; ending exploration");
                    Some(self.finish_walk())
                }
            };
            if let Some(event) = event {
                on_event(&event);
            }
        }

        Ok(self.ledger)
    }

    fn finish_walk(&mut self) -> Event {
        self.state = ExplorerState::Finished;
        Event::Finished {
            clues: self.ledger.len(),
        }
    }
}
