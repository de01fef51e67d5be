#![deny(
    clippy::all,
    clippy::nursery,
    clippy::pedantic,
    clippy::style,
    clippy::complexity,
    clippy::perf,
    clippy::correctness,
    clippy::suspicious,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(
    clippy::similar_names,
    clippy::missing_safety_doc,
    clippy::missing_panics_doc,
    clippy::missing_errors_doc
)]

use clap::Parser;
use linerdate_config::Config;
use linerdate_core::RecordingDateExtractor;
use linerdate_dates::NaturalDateParser;
use linerdate_ner::RuleRecognizer;
use tracing::{debug, info};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[derive(Parser)]
#[command(name = "linerdate")]
#[command(about = "Extract the recording date from album liner notes", long_about = None)]
struct Cli {
    /// Liner-note text, or a path to a .txt file containing it
    input: String,

    /// IANA timezone for year-less dates (overrides the config file)
    #[arg(long)]
    timezone: Option<String>,
}

fn main() -> anyhow::Result<()> {
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    let cli = Cli::parse();
    let config = Config::load_or_default()?;

    let tz = match cli.timezone {
        Some(name) => name
            .parse()
            .map_err(|e| anyhow::anyhow!("Invalid --timezone {name:?}: {e}"))?,
        None => config.extractor.reference_timezone()?,
    };
    debug!(%tz, "reference timezone");

    let recognizer = Box::new(RuleRecognizer::with_defaults()?);
    let parser = Box::new(NaturalDateParser::new(tz)?);

    let extractor = match &config.extractor.cue_words {
        Some(cues) => RecordingDateExtractor::with_cue_words(recognizer, parser, cues)?,
        None => RecordingDateExtractor::new(recognizer, parser)?,
    };

    let note = if cli.input.ends_with(".txt") {
        info!(path = %cli.input, "reading note from file");
        std::fs::read_to_string(&cli.input)?
    } else {
        cli.input
    };

    match extractor.extract(note.trim()) {
        Some(date) => println!("{date}"),
        None => debug!("no recording date found"),
    }

    Ok(())
}
