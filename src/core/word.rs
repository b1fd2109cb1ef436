//! Target word representation
//!
//! A `TargetWord` stores the word being guessed along with its distinct letter
//! set for fast membership and win checks.

use rustc_hash::FxHashSet;
use std::fmt;

/// A single guessable letter (uppercase ASCII A-Z)
///
/// Construction validates and normalizes input, so the rest of the game never
/// deals with case or non-alphabetic characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Letter(u8);

/// Error type for invalid letters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LetterError(pub char);

impl fmt::Display for LetterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "'{}' is not an ASCII letter", self.0)
    }
}

impl std::error::Error for LetterError {}

impl Letter {
    /// Create a `Letter` from a character, normalizing to uppercase
    ///
    /// # Errors
    /// Returns `LetterError` if the character is not an ASCII letter.
    ///
    /// # Examples
    /// ```
    /// use brick_by_brick::core::Letter;
    ///
    /// let letter = Letter::new('a').unwrap();
    /// assert_eq!(letter.as_char(), 'A');
    ///
    /// assert!(Letter::new('3').is_err());
    /// assert!(Letter::new('é').is_err());
    /// ```
    pub fn new(c: char) -> Result<Self, LetterError> {
        if c.is_ascii_alphabetic() {
            Ok(Self(c.to_ascii_uppercase() as u8))
        } else {
            Err(LetterError(c))
        }
    }

    /// Get the letter as an uppercase character
    #[inline]
    #[must_use]
    pub const fn as_char(self) -> char {
        self.0 as char
    }

    /// Get the letter as an uppercase ASCII byte
    #[inline]
    #[must_use]
    pub const fn as_byte(self) -> u8 {
        self.0
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// The word being guessed in a round
///
/// Stores the uppercase text and a set of its distinct letters. Immutable once
/// selected for a round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetWord {
    text: String,
    distinct: FxHashSet<u8>,
}

/// Error type for invalid target words
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TargetWordError {
    Empty,
    NonAscii,
    InvalidCharacters,
}

impl fmt::Display for TargetWordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Word must not be empty"),
            Self::NonAscii => write!(f, "Word must contain only ASCII letters"),
            Self::InvalidCharacters => write!(f, "Word contains invalid characters"),
        }
    }
}

impl std::error::Error for TargetWordError {}

impl TargetWord {
    /// Create a new `TargetWord` from a string
    ///
    /// # Errors
    /// Returns `TargetWordError` if:
    /// - The string is empty
    /// - It contains non-ASCII characters
    /// - It contains non-alphabetic characters
    ///
    /// # Examples
    /// ```
    /// use brick_by_brick::core::TargetWord;
    ///
    /// let word = TargetWord::new("revit").unwrap();
    /// assert_eq!(word.text(), "REVIT");
    ///
    /// assert!(TargetWord::new("").is_err());
    /// assert!(TargetWord::new("w0rd").is_err());
    /// ```
    pub fn new(text: impl Into<String>) -> Result<Self, TargetWordError> {
        let text: String = text.into().to_uppercase();

        if text.is_empty() {
            return Err(TargetWordError::Empty);
        }

        if !text.is_ascii() {
            return Err(TargetWordError::NonAscii);
        }

        if !text.chars().all(|c| c.is_ascii_uppercase()) {
            return Err(TargetWordError::InvalidCharacters);
        }

        let distinct: FxHashSet<u8> = text.bytes().collect();

        Ok(Self { text, distinct })
    }

    /// Get the word as an uppercase string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Number of letters in the word
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Always false: target words are validated non-empty
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Iterate over the word's letters in word order
    pub fn letters(&self) -> impl Iterator<Item = Letter> + '_ {
        self.text.bytes().map(Letter)
    }

    /// Check if the word contains a specific letter
    #[inline]
    #[must_use]
    pub fn has_letter(&self, letter: Letter) -> bool {
        self.distinct.contains(&letter.as_byte())
    }

    /// The set of distinct letters in the word
    ///
    /// Used for the win check: the round is won once every distinct letter
    /// has been guessed.
    #[inline]
    pub(crate) fn distinct_letters(&self) -> &FxHashSet<u8> {
        &self.distinct
    }
}

impl fmt::Display for TargetWord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

/// A word eligible for selection, with an optional clue
///
/// Immutable once selected for a round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordEntry {
    word: TargetWord,
    clue: Option<String>,
}

impl WordEntry {
    /// Pair a target word with an optional clue
    #[must_use]
    pub fn new(word: TargetWord, clue: Option<String>) -> Self {
        Self { word, clue }
    }

    /// The target word
    #[inline]
    #[must_use]
    pub const fn word(&self) -> &TargetWord {
        &self.word
    }

    /// The clue text, if this entry has one
    #[inline]
    #[must_use]
    pub fn clue(&self) -> Option<&str> {
        self.clue.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn letter_creation_normalizes_case() {
        assert_eq!(Letter::new('a').unwrap().as_char(), 'A');
        assert_eq!(Letter::new('Z').unwrap().as_char(), 'Z');
    }

    #[test]
    fn letter_creation_rejects_non_alphabetic() {
        assert_eq!(Letter::new('3'), Err(LetterError('3')));
        assert_eq!(Letter::new(' '), Err(LetterError(' ')));
        assert_eq!(Letter::new('!'), Err(LetterError('!')));
        assert!(Letter::new('ß').is_err());
    }

    #[test]
    fn word_creation_valid() {
        let word = TargetWord::new("CAD").unwrap();
        assert_eq!(word.text(), "CAD");
        assert_eq!(word.len(), 3);
    }

    #[test]
    fn word_creation_lowercase_normalized() {
        let word = TargetWord::new("revit").unwrap();
        assert_eq!(word.text(), "REVIT");

        let word2 = TargetWord::new("ReViT").unwrap();
        assert_eq!(word2.text(), "REVIT");
    }

    #[test]
    fn word_creation_empty() {
        assert!(matches!(TargetWord::new(""), Err(TargetWordError::Empty)));
    }

    #[test]
    fn word_creation_invalid_characters() {
        assert!(TargetWord::new("CAD3").is_err()); // Number
        assert!(TargetWord::new("C AD").is_err()); // Space
        assert!(TargetWord::new("CAD!").is_err()); // Punctuation
    }

    #[test]
    fn word_has_letter() {
        let word = TargetWord::new("CAD").unwrap();
        assert!(word.has_letter(Letter::new('c').unwrap()));
        assert!(word.has_letter(Letter::new('A').unwrap()));
        assert!(!word.has_letter(Letter::new('Z').unwrap()));
    }

    #[test]
    fn word_letters_in_order() {
        let word = TargetWord::new("CAD").unwrap();
        let letters: Vec<char> = word.letters().map(Letter::as_char).collect();
        assert_eq!(letters, vec!['C', 'A', 'D']);
    }

    #[test]
    fn word_distinct_letters_deduplicated() {
        let word = TargetWord::new("BLOCKCHAIN").unwrap();
        // B L O C K H A I N - 'C' appears twice but counts once
        assert_eq!(word.distinct_letters().len(), 9);
    }

    #[test]
    fn word_display() {
        let word = TargetWord::new("rhino").unwrap();
        assert_eq!(format!("{word}"), "RHINO");
    }

    #[test]
    fn word_equality_case_insensitive() {
        let word1 = TargetWord::new("CLOUD").unwrap();
        let word2 = TargetWord::new("cloud").unwrap();
        let word3 = TargetWord::new("SCOPE").unwrap();

        assert_eq!(word1, word2);
        assert_ne!(word1, word3);
    }

    #[test]
    fn entry_clue_optional() {
        let with_clue = WordEntry::new(
            TargetWord::new("BIM").unwrap(),
            Some("Building Information Modeling".to_string()),
        );
        assert_eq!(with_clue.clue(), Some("Building Information Modeling"));

        let without = WordEntry::new(TargetWord::new("BIM").unwrap(), None);
        assert_eq!(without.clue(), None);
    }
}
