//! Core domain types for the guessing game
//!
//! This module contains the round state machine and its value types. All
//! types here are pure and synchronous: no rendering, no storage, no I/O.

mod game;
mod word;

pub use game::{
    Difficulty, DisplayState, Game, LetterState, MAX_LIVES, Outcome, Status, WordPool,
};
pub use word::{Letter, LetterError, TargetWord, TargetWordError, WordEntry};
