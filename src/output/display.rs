//! Display functions for the plain CLI mode

use super::formatters::{BUILDING_PIECES, house_art, lives_hearts};
use crate::core::{DisplayState, Difficulty, Game, Letter, LetterState, WordPool};
use colored::Colorize;

/// Print the current round: house, masked word, clue, totals
pub fn print_round<P: WordPool>(game: &Game<'_, P>) {
    let state = game.display();

    println!("\n{}", house_art(game.mistakes()).bright_white());

    let pieces = game.mistakes() as usize;
    if pieces > 0 {
        println!(
            "  {} {}",
            "Built:".bright_black(),
            BUILDING_PIECES[..pieces.min(BUILDING_PIECES.len())]
                .join(", ")
                .bright_black()
        );
    }
    println!();
    println!("  {}", state.masked_word.bright_yellow().bold());

    if let Some(clue) = &state.clue {
        println!("  {} {}", "Clue:".bright_cyan(), clue);
    }

    println!(
        "\n  Lives: {}   Score: {}   High: {}   [{}]",
        lives_hearts(state.lives).red(),
        state.score.to_string().bright_yellow(),
        state.high_score.to_string().bright_yellow(),
        game.difficulty().to_string().bright_cyan()
    );

    println!("  {}", alphabet_status(game));
}

/// One line showing every letter: tried letters colored by hit or miss
fn alphabet_status<P: WordPool>(game: &Game<'_, P>) -> String {
    ('A'..='Z')
        .filter_map(|c| {
            let letter = Letter::new(c).ok()?;
            Some(match game.letter_state(letter) {
                LetterState::Untried => c.to_string().bright_white().to_string(),
                LetterState::Hit => c.to_string().green().bold().to_string(),
                LetterState::Miss => c.to_string().bright_black().strikethrough().to_string(),
            })
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Print the win banner with the points just earned
pub fn print_win(state: &DisplayState, points: u32, high_score_beaten: bool) {
    println!("\n{}", "═".repeat(60).bright_cyan());
    println!(
        "{}",
        format!("  🎉 You won! +{points} points  ").green().bold()
    );
    if high_score_beaten {
        println!(
            "{}",
            format!("  🏆 New high score: {}  ", state.high_score)
                .bright_yellow()
                .bold()
        );
    }
    println!("{}", "═".repeat(60).bright_cyan());
}

/// Print the loss banner, revealing the target word
pub fn print_loss(target: &str) {
    println!("\n{}", "═".repeat(60).bright_cyan());
    println!(
        "{}",
        format!("  💥 Game over! The word was: {target}  ")
            .red()
            .bold()
    );
    println!("  Score resets to 0.");
    println!("{}", "═".repeat(60).bright_cyan());
}

/// Print the rules and available commands
pub fn print_banner(difficulty: Difficulty) {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║            Brick by Brick - Word Guessing Game               ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("Guess the word one letter at a time. Every wrong guess adds a");
    println!("piece to the house; when the house is finished, you lose.\n");
    println!("  - Type a single letter to guess it");
    println!("  - 'hint' reveals a letter at the cost of one life");
    println!("  - 'easy', 'medium', 'hard' switch difficulty (new round)");
    println!("  - 'new' starts a fresh round, 'quit' exits\n");
    println!("Difficulty: {difficulty} ({} points per win)\n", difficulty.points());
}
