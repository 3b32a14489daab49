use crate::room_map::Direction;
use anyhow::Result;
use std::collections::VecDeque;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Go(Direction),
    Exit,
    Invalid(String),
}

impl Command {
    /// Accepts single letters or words, any case: `l`/`left`, `r`/`right`,
    /// `x`/`exit`/`q`/`quit`.
    pub fn parse(input: &str) -> Self {
        let trimmed = input.trim();
        match trimmed.to_ascii_lowercase().as_str() {
            "l" | "left" => Command::Go(Direction::Left),
            "r" | "right" => Command::Go(Direction::Right),
            "x" | "exit" | "q" | "quit" => Command::Exit,
            _ => Command::Invalid(trimmed.to_string()),
        }
    }
}

/// Where the explorer gets the player's next line from.
pub trait CommandSource {
    /// `Ok(None)` means the input is exhausted.
    fn next_line(&mut self) -> Result<Option<String>>;
}

/// Replays a fixed list of lines, then reports end of input.
#[derive(Debug, Clone, Default)]
pub struct ScriptedCommands {
    lines: VecDeque<String>,
}

impl ScriptedCommands {
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
        }
    }
}

impl CommandSource for ScriptedCommands {
    fn next_line(&mut self) -> Result<Option<String>> {
        Ok(self.lines.pop_front())
    }
}
