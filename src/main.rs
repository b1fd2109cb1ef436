//! Brick by Brick - CLI
//!
//! Word-guessing game with TUI and CLI modes. Guess the word before your
//! mistakes finish building the house.

use anyhow::{Context, Result, ensure};
use brick_by_brick::{
    commands::{run_simple, run_words},
    core::Difficulty,
    storage::{FileStore, HighScoreStore, MemoryStore},
    wordlists::{PoolSet, loader::load_from_file},
};
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "brick_by_brick",
    about = "Build-a-house word guessing game (TUI and CLI modes)",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Difficulty: easy (default, 1 pt), medium (2 pt), hard (3 pt)
    #[arg(short, long, global = true, default_value = "easy")]
    difficulty: String,

    /// Wordlist: 'embedded' (default) or path to a custom pool file
    #[arg(short = 'w', long, global = true, default_value = "embedded")]
    wordlist: String,

    /// File holding the persisted high score
    #[arg(long, global = true, default_value = ".brick_by_brick_highscore")]
    high_score_file: String,

    /// Don't persist the high score across sessions
    #[arg(long, global = true)]
    no_persist: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (plain text, no TUI)
    Simple,

    /// List the word pools per difficulty
    Words,
}

/// Load word pools based on the -w flag
///
/// "embedded" uses the built-in per-difficulty pools; a path loads one custom
/// pool used for every difficulty tier.
fn load_pools(wordlist_mode: &str) -> Result<PoolSet> {
    match wordlist_mode {
        "embedded" => Ok(PoolSet::embedded()),
        path => {
            let entries = load_from_file(path)
                .with_context(|| format!("Failed to load wordlist from {path}"))?;
            ensure!(!entries.is_empty(), "Wordlist {path} contains no valid words");
            Ok(PoolSet::uniform(entries))
        }
    }
}

fn make_store(cli: &Cli) -> Box<dyn HighScoreStore> {
    if cli.no_persist {
        Box::new(MemoryStore::default())
    } else {
        Box::new(FileStore::new(&cli.high_score_file))
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let pools = load_pools(&cli.wordlist)?;
    let difficulty = Difficulty::from_name(&cli.difficulty);

    // Default to Play mode if no command given
    let command = cli.command.as_ref().unwrap_or(&Commands::Play);

    match command {
        Commands::Play => run_play_command(&cli, &pools, difficulty),
        Commands::Simple => {
            let mut store = make_store(&cli);
            run_simple(&pools, store.as_mut(), difficulty).map_err(|e| anyhow::anyhow!(e))
        }
        Commands::Words => {
            run_words(&pools);
            Ok(())
        }
    }
}

fn run_play_command(cli: &Cli, pools: &PoolSet, difficulty: Difficulty) -> Result<()> {
    use brick_by_brick::interactive::{App, KeyboardLayout, run_tui};

    let app = App::new(pools, make_store(cli), difficulty, KeyboardLayout::default());
    run_tui(app)
}
