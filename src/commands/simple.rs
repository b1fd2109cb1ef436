//! Simple interactive CLI mode
//!
//! Text-based game loop without TUI

use crate::core::{Difficulty, Game, Letter, Outcome, WordPool};
use crate::output::{print_banner, print_loss, print_round, print_win};
use crate::storage::HighScoreStore;
use std::io::{self, Write};

/// Run the simple interactive CLI mode
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input or saving the
/// high score.
pub fn run_simple<P: WordPool>(
    pool: &P,
    store: &mut dyn HighScoreStore,
    difficulty: Difficulty,
) -> Result<(), String> {
    print_banner(difficulty);

    let mut game = Game::new(pool, difficulty, store.load());

    loop {
        print_round(&game);

        let input = get_user_input("Guess a letter (or command)")?.to_lowercase();

        let outcome = match input.as_str() {
            "quit" | "q" | "exit" => {
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            }
            "new" | "n" => {
                game.start_new_game();
                println!("\n🔄 New round started!\n");
                continue;
            }
            "easy" | "medium" | "hard" => {
                let difficulty = Difficulty::from_name(&input);
                game.set_difficulty(difficulty);
                println!(
                    "\n🔄 Difficulty set to {difficulty} ({} points per win), new round!\n",
                    difficulty.points()
                );
                continue;
            }
            "hint" | "?" => {
                let outcome = game.hint();
                if outcome == Outcome::Ignored {
                    println!("\nNo hint available: the last life can't be spent on one.");
                }
                outcome
            }
            _ => {
                let mut chars = input.chars();
                match (chars.next().and_then(|c| Letter::new(c).ok()), chars.next()) {
                    (Some(letter), None) => {
                        let outcome = game.guess(letter);
                        if outcome == Outcome::Ignored {
                            println!("\nAlready guessed '{letter}'.");
                        }
                        outcome
                    }
                    _ => {
                        println!("\n❌ Enter a single letter, or a command (hint/new/quit).");
                        continue;
                    }
                }
            }
        };

        if let Outcome::Hinted { letter } = outcome {
            println!("\n💡 Hint revealed '{letter}' for one life.");
        }

        if outcome.signals_persist() {
            store
                .save(game.high_score())
                .map_err(|e| format!("Failed to save high score: {e}"))?;
        }

        match outcome {
            Outcome::Won {
                points,
                high_score_beaten,
            } => {
                print_win(&game.display(), points, high_score_beaten);
                if !ask_play_again()? {
                    return Ok(());
                }
                game.start_new_game();
            }
            Outcome::Lost => {
                print_loss(game.target().text());
                if !ask_play_again()? {
                    return Ok(());
                }
                game.start_new_game();
            }
            _ => {}
        }
    }
}

fn ask_play_again() -> Result<bool, String> {
    match get_user_input("Play again? (yes/no)")?.to_lowercase().as_str() {
        "no" | "n" | "quit" | "q" => {
            println!("\n👋 Thanks for playing!\n");
            Ok(false)
        }
        _ => {
            println!("\n🔄 New round started!\n");
            Ok(true)
        }
    }
}

/// Get user input with a prompt
fn get_user_input(prompt: &str) -> Result<String, String> {
    print!("{prompt}: ");
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .map_err(|e| e.to_string())?;

    Ok(input.trim().to_string())
}
