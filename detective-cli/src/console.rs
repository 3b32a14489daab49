use anyhow::{Context, Result};
use mansion::{ClueLedger, CommandSource, Discovery, Event, Insertion, Mansion, RoomId, Verdict};
use std::io::{self, BufRead, StdinLock, Write};

/// Line input from the player. Bytes that are not valid UTF-8 are replaced,
/// so a garbled line reads as an unknown command rather than an error.
pub struct ConsoleInput<R> {
    reader: R,
}

impl ConsoleInput<StdinLock<'static>> {
    pub fn stdin() -> Self {
        Self::new(io::stdin().lock())
    }
}

impl<R: BufRead> ConsoleInput<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }

    fn read_line(&mut self, prompt: &str) -> Result<Option<String>> {
        print!("{}", prompt);
        io::stdout().flush().context("Failed to flush stdout")?;

        let mut buf = Vec::new();
        let read = self
            .reader
            .read_until(b'\n', &mut buf)
            .context("Failed to read from stdin")?;
        if read == 0 {
            return Ok(None);
        }
        let line = String::from_utf8_lossy(&buf);
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    /// End of input counts as an empty name.
    pub fn ask_accused(&mut self) -> Result<String> {
        let line = self.read_line("\nName the suspect you accuse (exact name): ")?;
        Ok(line.map(|l| l.trim().to_string()).unwrap_or_default())
    }
}

impl<R: BufRead> CommandSource for ConsoleInput<R> {
    fn next_line(&mut self) -> Result<Option<String>> {
        self.read_line("Choice: ")
    }
}

pub fn print_banner(title: &str, start: &str) {
    println!("============================================");
    println!("   {}", title);
    println!("============================================");
    println!("You start in the {}. Explore the mansion and collect clues.", start);
}

pub fn print_tables(mansion: &Mansion) {
    let map = &mansion.map;
    let name_of = move |id: Option<RoomId>| id.map(|id| map.room(id).name()).unwrap_or("-");

    println!("\nRooms:");
    for (id, room) in map.rooms() {
        println!(
            "  {:<16} left: {:<16} right: {}",
            room.name(),
            name_of(map.left_of(id)),
            name_of(map.right_of(id))
        );
    }
    println!("\nSuspects: {}", mansion.index.suspects().join(", "));
}

pub fn print_event(event: &Event) {
    match event {
        Event::Entered { name, discovery, .. } => {
            println!("\nYou are in: {}", name);
            match discovery {
                Discovery::Clue {
                    text,
                    insertion: Insertion::Added,
                } => println!("Clue found: \"{}\"", text),
                Discovery::Clue {
                    text,
                    insertion: Insertion::AlreadyKnown,
                } => println!("Clue found: \"{}\" (already in your notes)", text),
                Discovery::Nothing => println!("No clue here."),
            }
            println!("Where to?");
            println!(" (l) left");
            println!(" (r) right");
            println!(" (x) exit exploration");
        }
        Event::NoPath { direction } => println!("There is no path to the {}.", direction),
        Event::InvalidChoice { input } => {
            println!("Invalid choice {:?}. Use 'l', 'r' or 'x'.", input)
        }
        Event::Finished { clues } => {
            println!("Exploration ended with {} clue(s) collected.", clues)
        }
    }
}

pub fn print_clues(ledger: &ClueLedger) {
    if ledger.is_empty() {
        println!("\nNo clues collected. There is no basis for an accusation.");
        return;
    }
    println!("\n========================================");
    println!("Collected clues (A -> Z):");
    for clue in ledger.iter_sorted() {
        println!(" - {}", clue);
    }
    println!("========================================");
}

pub fn print_verdict(accused: Option<&str>, verdict: &Verdict) {
    match (verdict.matching(), accused) {
        (Some(matching), Some(name)) => {
            println!("\n{} clue(s) connect to the suspect \"{}\".", matching, name);
            println!("Verdict: accusation {}.", verdict);
            if verdict.is_sustained() {
                println!("\"{}\" is found guilty on the evidence.", name);
            }
        }
        _ => println!("Verdict: {}.", verdict),
    }
}
