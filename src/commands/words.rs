//! Word pool listing command
//!
//! Prints every eligible word per difficulty tier with its clue and point
//! value.

use crate::core::{Difficulty, WordPool};
use colored::Colorize;

/// Print the contents of every difficulty pool
pub fn run_words<P: WordPool>(pool: &P) {
    for difficulty in Difficulty::ALL {
        let entries = pool.entries(difficulty);

        println!("\n{}", "═".repeat(60).cyan());
        println!(
            " {} — {} words, {} per win ",
            difficulty.to_string().to_uppercase().bright_cyan().bold(),
            entries.len(),
            format!("{} pt", difficulty.points()).bright_yellow()
        );
        println!("{}", "═".repeat(60).cyan());

        for entry in entries {
            match entry.clue() {
                Some(clue) => println!(
                    "  {:<16} {}",
                    entry.word().text().bright_white().bold(),
                    clue.bright_black()
                ),
                None => println!("  {}", entry.word().text().bright_white().bold()),
            }
        }
    }
    println!();
}
