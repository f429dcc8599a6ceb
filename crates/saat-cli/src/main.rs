use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use saat_bot::BotDifficulty;
use saat_cli::config::DecisionConfig;
use saat_cli::logging::init_logging;
use saat_cli::narrator::TextNarrator;
use saat_cli::runner::DecisionRunner;

/// Picks the next card to lay in a game of Badaam Saat.
#[derive(Debug, Parser)]
#[command(
    name = "badaam-saat",
    author,
    version,
    about = "Seven of Hearts move selector"
)]
struct Cli {
    /// Path to a YAML decision file (played ranges and hand).
    /// Without it the built-in demo deal is used.
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Override the difficulty from the config (easy or normal).
    /// Falls back to `SAAT_BOT_DIFFICULTY`, then to the config.
    #[arg(long, value_name = "LEVEL")]
    difficulty: Option<BotDifficulty>,

    /// Print the decision as JSON instead of narrating it.
    #[arg(long)]
    json: bool,

    /// Decide without narrating.
    #[arg(short, long)]
    quiet: bool,

    /// Exit after validating the configuration (no decision is made).
    #[arg(long)]
    validate_only: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let difficulty = cli.difficulty.or_else(BotDifficulty::from_env);
    let config = match cli.config.as_ref() {
        Some(path) => DecisionConfig::from_path_with(path, difficulty)?,
        None => DecisionConfig::demo().with_difficulty(difficulty),
    };

    if cli.validate_only {
        let (played, hand) = config.deal()?;
        println!(
            "Configuration valid: {} opened suite{}, {} card{} in hand.",
            played.len(),
            if played.len() == 1 { "" } else { "s" },
            hand.card_count(),
            if hand.card_count() == 1 { "" } else { "s" },
        );
        return Ok(());
    }

    let _logging_guard = init_logging(&config.logging)?;

    let mut runner = DecisionRunner::new(&config)?;

    if cli.json {
        let (_, report) = runner.decide()?;
        let json = serde_json::to_string_pretty(&report).context("serializing decision")?;
        println!("{json}");
        return Ok(());
    }

    if cli.quiet {
        runner.decide()?;
        return Ok(());
    }

    let mut narrator = TextNarrator::stdout();
    runner.decide_and_narrate(&mut narrator)?;
    Ok(())
}
