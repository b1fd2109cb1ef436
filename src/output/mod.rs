//! Terminal output formatting
//!
//! Display utilities for the plain CLI mode and shared art/formatting.

pub mod display;
pub mod formatters;

pub use display::{print_banner, print_loss, print_round, print_win};
pub use formatters::{BUILDING_PIECES, house_art, latest_piece, lives_hearts};
