//! Brick by Brick
//!
//! A word-guessing game: reveal the word before your wrong guesses finish
//! building the house. The rules live in a pure core with injected word-pool
//! and persistence collaborators; TUI and CLI front ends render it.
//!
//! # Quick Start
//!
//! ```rust
//! use brick_by_brick::core::{Difficulty, Game, Letter};
//! use brick_by_brick::wordlists::PoolSet;
//!
//! let pools = PoolSet::embedded();
//! let mut game = Game::new(&pools, Difficulty::Easy, 0);
//!
//! let state = game.display();
//! assert_eq!(state.lives, 6);
//!
//! game.guess(Letter::new('A').unwrap());
//! ```

// Core domain types
pub mod core;

// Word pools
pub mod wordlists;

// High score persistence
pub mod storage;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
