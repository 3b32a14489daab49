mod console;

use anyhow::{Context, Result};
use clap::Parser;
use console::ConsoleInput;
use mansion::{
    Adjudicator, ClueLedger, Mansion, MansionDataset, SessionReport, SuspectIndex, Verdict,
};
use std::io::BufRead;
use std::path::PathBuf;
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "detective")]
#[command(about = "Explore the mansion, collect clues and accuse a suspect", long_about = None)]
struct Args {
    /// Mansion dataset JSON (defaults to MANSION_DATASET, then the built-in mansion)
    #[arg(short, long)]
    dataset: Option<PathBuf>,

    /// Matching clues needed to sustain an accusation
    #[arg(short, long, default_value = "2", value_parser = clap::value_parser!(u32).range(1..))]
    threshold: u32,

    /// Also print the session report as JSON
    #[arg(long)]
    json: bool,

    /// Skip the room and suspect tables at startup
    #[arg(long)]
    no_tables: bool,
}

fn load_dataset(path: Option<PathBuf>) -> Result<MansionDataset> {
    let path = path.or_else(|| std::env::var_os("MANSION_DATASET").map(PathBuf::from));
    match path {
        Some(path) => {
            info!(path = %path.display(), "Loading dataset");
            MansionDataset::from_path(&path)
                .with_context(|| format!("Failed to load dataset from {}", path.display()))
        }
        None => {
            info!("Using built-in dataset");
            MansionDataset::builtin().context("Built-in mansion dataset is invalid")
        }
    }
}

/// Asks for the accused unless there is nothing to judge.
fn accuse<R: BufRead>(
    input: &mut ConsoleInput<R>,
    ledger: &ClueLedger,
    index: &SuspectIndex,
    adjudicator: &Adjudicator,
) -> Result<(Option<String>, Verdict)> {
    if ledger.is_empty() {
        return Ok((None, Verdict::InsufficientEvidence));
    }
    let accused = input.ask_accused()?;
    let verdict = adjudicator.judge(ledger, index, &accused);
    Ok((Some(accused), verdict))
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let dataset = load_dataset(args.dataset)?;
    let mut mansion = Mansion::from_dataset(&dataset).context("Failed to build the mansion")?;
    let adjudicator = Adjudicator::new(args.threshold as usize);

    console::print_banner(&mansion.title, mansion.map.room(mansion.map.root()).name());
    if !args.no_tables {
        console::print_tables(&mansion);
    }

    let mut input = ConsoleInput::stdin();
    let ledger = mansion.explorer().run(&mut input, console::print_event)?;

    console::print_clues(&ledger);

    let (accused, verdict) = accuse(&mut input, &ledger, &mansion.index, &adjudicator)?;
    console::print_verdict(accused.as_deref(), &verdict);

    if args.json {
        let report = SessionReport::new(&mansion.title, &ledger, accused.as_deref(), verdict);
        println!("{}", serde_json::to_string_pretty(&report)?);
    }

    println!("\nThanks for playing.");
    Ok(())
}
