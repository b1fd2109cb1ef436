//! Formatting utilities for terminal output

use crate::core::MAX_LIVES;

/// Building pieces revealed one per life spent, in order
pub const BUILDING_PIECES: [&str; 6] = [
    "house body",
    "roof",
    "chimney",
    "left window",
    "right window",
    "door",
];

/// Render the house with the first `pieces` building pieces in place
///
/// The house grows as lives are spent: body, roof, chimney, windows, door.
/// Returns a fixed-height block so the surrounding layout never shifts.
#[must_use]
pub fn house_art(pieces: u8) -> String {
    let pieces = pieces.min(MAX_LIVES);

    let mut lines: Vec<String> = Vec::with_capacity(8);

    // Chimney
    if pieces >= 3 {
        lines.push("         ___".to_string());
        lines.push("        |___|".to_string());
    } else {
        lines.push(String::new());
        lines.push(String::new());
    }

    // Roof
    if pieces >= 2 {
        lines.push("      /      \\".to_string());
        lines.push("     /________\\".to_string());
    } else {
        lines.push(String::new());
        lines.push(String::new());
    }

    // Body, windows, door
    if pieces >= 1 {
        let lw = if pieces >= 4 { "[]" } else { "  " };
        let rw = if pieces >= 5 { "[]" } else { "  " };
        let door_top = if pieces >= 6 { "__" } else { "  " };
        let base = if pieces >= 6 {
            "     |__|  |__|"
        } else {
            "     |________|"
        };

        lines.push("     |        |".to_string());
        lines.push(format!("     | {lw}  {rw} |"));
        lines.push(format!("     |   {door_top}   |"));
        lines.push(base.to_string());
    } else {
        lines.push(String::new());
        lines.push(String::new());
        lines.push(String::new());
        lines.push("     ‾‾‾‾‾‾‾‾‾‾".to_string());
    }

    lines.join("\n")
}

/// Format remaining lives as filled and hollow hearts
#[must_use]
pub fn lives_hearts(lives: u8) -> String {
    let lives = lives.min(MAX_LIVES) as usize;
    let spent = MAX_LIVES as usize - lives;
    format!("{}{}", "♥".repeat(lives), "♡".repeat(spent))
}

/// The building piece added by the most recently spent life, if any
#[must_use]
pub fn latest_piece(pieces: u8) -> Option<&'static str> {
    if pieces == 0 {
        None
    } else {
        BUILDING_PIECES.get(pieces as usize - 1).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn house_art_empty_lot() {
        let art = house_art(0);
        assert!(!art.contains('|'), "no walls before the first mistake");
        assert_eq!(art.lines().count(), 8);
    }

    #[test]
    fn house_art_grows_with_pieces() {
        // Body only
        assert!(house_art(1).contains("|________|"));
        // Roof appears at two pieces
        assert!(!house_art(1).contains('/'));
        assert!(house_art(2).contains("/________\\"));
        // Windows at four and five
        assert!(!house_art(3).contains("[]"));
        assert!(house_art(4).contains("[]"));
        // Door replaces part of the base
        assert!(house_art(6).contains("|__|  |__|"));
    }

    #[test]
    fn house_art_fixed_height() {
        for pieces in 0..=MAX_LIVES {
            assert_eq!(house_art(pieces).lines().count(), 8, "pieces = {pieces}");
        }
    }

    #[test]
    fn house_art_clamps_overshoot() {
        assert_eq!(house_art(9), house_art(MAX_LIVES));
    }

    #[test]
    fn lives_hearts_full_and_empty() {
        assert_eq!(lives_hearts(6), "♥♥♥♥♥♥");
        assert_eq!(lives_hearts(0), "♡♡♡♡♡♡");
        assert_eq!(lives_hearts(4), "♥♥♥♥♡♡");
    }

    #[test]
    fn building_pieces_match_lives() {
        assert_eq!(BUILDING_PIECES.len(), MAX_LIVES as usize);
    }

    #[test]
    fn latest_piece_follows_the_build_order() {
        assert_eq!(latest_piece(0), None);
        assert_eq!(latest_piece(1), Some("house body"));
        assert_eq!(latest_piece(2), Some("roof"));
        assert_eq!(latest_piece(6), Some("door"));
        // Past the last piece there is nothing left to build
        assert_eq!(latest_piece(9), None);
    }
}
