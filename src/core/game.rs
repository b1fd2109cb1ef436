//! Round state machine
//!
//! `Game` enforces the rules of one guessing round and computes the
//! display-relevant state after each input. It owns no rendering and no
//! storage: the word pool is injected, and persist-worthy events (win, loss)
//! are reported through `Outcome` for the host to act on.

use super::word::{Letter, TargetWord, WordEntry};
use rand::prelude::IndexedRandom;
use rustc_hash::FxHashSet;
use std::fmt;

/// Lives at the start of every round
pub const MAX_LIVES: u8 = 6;

/// Difficulty tier, selecting the eligible word pool and the points awarded
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    /// All tiers, in ascending order
    pub const ALL: [Self; 3] = [Self::Easy, Self::Medium, Self::Hard];

    /// Points awarded for winning a round at this tier
    #[must_use]
    pub const fn points(self) -> u32 {
        match self {
            Self::Easy => 1,
            Self::Medium => 2,
            Self::Hard => 3,
        }
    }

    /// Create a difficulty from a name string
    ///
    /// Supported names: "easy", "medium", "hard". Defaults to easy if the
    /// name is unrecognized.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            "medium" => Self::Medium,
            "hard" => Self::Hard,
            _ => Self::Easy,
        }
    }

    /// Lowercase tier name
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Easy => "easy",
            Self::Medium => "medium",
            Self::Hard => "hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Round status: `InProgress` is initial, the other two terminal until the
/// next round starts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    InProgress,
    Won,
    Lost,
}

/// What a `guess` or `hint` call did
///
/// `Won` and `Lost` are the persist-worthy events: session totals changed and
/// the host should durably store the high score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Input was a duplicate, arrived after a terminal state, or a hint was
    /// refused. State is unchanged.
    Ignored,
    /// Correct letter revealed; round continues
    Revealed,
    /// Wrong letter; one life lost; round continues
    Missed,
    /// A hint revealed this letter; round continues
    Hinted { letter: Letter },
    /// Round won; points were added to the score
    Won { points: u32, high_score_beaten: bool },
    /// Round lost; score was reset to 0
    Lost,
}

impl Outcome {
    /// Did this input end the round?
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Won { .. } | Self::Lost)
    }

    /// Should the host persist the high score now?
    #[must_use]
    pub const fn signals_persist(self) -> bool {
        self.is_terminal()
    }
}

/// How a letter relates to the current round
///
/// Lets a presentation layer color its letter controls without reaching into
/// round internals.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LetterState {
    Untried,
    Hit,
    Miss,
}

/// Per-difficulty supplier of word entries
///
/// Pools are read-only, already-validated input: non-empty per difficulty.
pub trait WordPool {
    /// The ordered entries eligible at `difficulty`
    fn entries(&self, difficulty: Difficulty) -> &[WordEntry];
}

/// Side-effect-free projection of everything a renderer needs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayState {
    /// Guessed letters shown, unguessed as `_`, single-space separated
    pub masked_word: String,
    pub clue: Option<String>,
    pub lives: u8,
    pub score: u32,
    pub high_score: u32,
    pub status: Status,
}

/// One round's mutable state, exclusively owned by a `Game`
#[derive(Debug, Clone)]
struct Round {
    target: TargetWord,
    clue: Option<String>,
    guessed: FxHashSet<u8>,
    lives: u8,
    status: Status,
}

impl Round {
    fn new(entry: &WordEntry) -> Self {
        Self {
            target: entry.word().clone(),
            clue: entry.clue().map(str::to_string),
            guessed: FxHashSet::default(),
            lives: MAX_LIVES,
            status: Status::InProgress,
        }
    }

    /// Every distinct letter of the target has been guessed
    fn is_revealed(&self) -> bool {
        self.target
            .distinct_letters()
            .iter()
            .all(|b| self.guessed.contains(b))
    }

    /// First letter of the target, in word order, not yet guessed
    fn first_unguessed(&self) -> Option<Letter> {
        self.target
            .letters()
            .find(|l| !self.guessed.contains(&l.as_byte()))
    }

    fn masked(&self) -> String {
        let shown: Vec<String> = self
            .target
            .letters()
            .map(|l| {
                if self.guessed.contains(&l.as_byte()) {
                    l.as_char().to_string()
                } else {
                    "_".to_string()
                }
            })
            .collect();
        shown.join(" ")
    }
}

/// One word-guessing session: the active round plus session totals
///
/// Constructed with an injected word pool and the last-persisted high score.
/// The session keeps a running score across rounds, resetting it on loss.
pub struct Game<'a, P: WordPool> {
    pool: &'a P,
    difficulty: Difficulty,
    round: Round,
    score: u32,
    high_score: u32,
}

impl<'a, P: WordPool> Game<'a, P> {
    /// Start a session at `difficulty`, seeding the high score from the
    /// persistence collaborator, and begin the first round
    ///
    /// # Panics
    /// Panics if the pool for `difficulty` is empty, which violates the
    /// provider contract.
    #[must_use]
    pub fn new(pool: &'a P, difficulty: Difficulty, high_score: u32) -> Self {
        let round = Round::new(Self::pick(pool, difficulty));
        Self {
            pool,
            difficulty,
            round,
            score: 0,
            high_score,
        }
    }

    fn pick(pool: &'a P, difficulty: Difficulty) -> &'a WordEntry {
        pool.entries(difficulty)
            .choose(&mut rand::rng())
            .expect("word pools are non-empty by contract")
    }

    /// Discard the current round and start a fresh one at the same difficulty
    ///
    /// Lives return to the maximum, guessed letters reset, status returns to
    /// `InProgress`. Session totals are untouched.
    pub fn start_new_game(&mut self) {
        self.round = Round::new(Self::pick(self.pool, self.difficulty));
    }

    /// Change difficulty and restart the round
    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        self.difficulty = difficulty;
        self.start_new_game();
    }

    /// Guess a letter
    ///
    /// Duplicate letters and input after a terminal state are silent no-ops,
    /// not errors: they are normal UI races (a stale button click), so the
    /// current state is simply left unchanged.
    pub fn guess(&mut self, letter: Letter) -> Outcome {
        if self.round.status != Status::InProgress
            || self.round.guessed.contains(&letter.as_byte())
        {
            return Outcome::Ignored;
        }

        self.round.guessed.insert(letter.as_byte());
        let hit = self.round.target.has_letter(letter);
        if !hit {
            self.round.lives = self.round.lives.saturating_sub(1);
        }

        self.settle(hit)
    }

    /// Spend a life to reveal the first unguessed letter of the target
    ///
    /// Refused (no-op) when the round is over, when only one life remains
    /// (the last life may not be spent on a hint), or when the word is
    /// already fully revealed. A hint can win the round; it can never lose
    /// it, since the reveal itself costs nothing.
    pub fn hint(&mut self) -> Outcome {
        if self.round.status != Status::InProgress || self.round.lives <= 1 {
            return Outcome::Ignored;
        }

        let Some(letter) = self.round.first_unguessed() else {
            return Outcome::Ignored;
        };

        self.round.lives -= 1;
        self.round.guessed.insert(letter.as_byte());

        match self.settle(true) {
            Outcome::Revealed => Outcome::Hinted { letter },
            terminal => terminal,
        }
    }

    /// Evaluate end conditions after a reveal
    ///
    /// Win check runs first: completing the word never costs a life, so the
    /// two terminal states cannot both fire from one input; the ordering is a
    /// tie-break for non-standard word/life configurations.
    fn settle(&mut self, hit: bool) -> Outcome {
        if self.round.is_revealed() {
            self.round.status = Status::Won;
            let points = self.difficulty.points();
            self.score += points;
            let high_score_beaten = self.score > self.high_score;
            if high_score_beaten {
                self.high_score = self.score;
            }
            return Outcome::Won {
                points,
                high_score_beaten,
            };
        }

        if self.round.lives == 0 {
            self.round.status = Status::Lost;
            self.score = 0;
            return Outcome::Lost;
        }

        if hit { Outcome::Revealed } else { Outcome::Missed }
    }

    /// Snapshot of the display-relevant state
    #[must_use]
    pub fn display(&self) -> DisplayState {
        DisplayState {
            masked_word: self.round.masked(),
            clue: self.round.clue.clone(),
            lives: self.round.lives,
            score: self.score,
            high_score: self.high_score,
            status: self.round.status,
        }
    }

    /// How a letter relates to the current round
    #[must_use]
    pub fn letter_state(&self, letter: Letter) -> LetterState {
        if !self.round.guessed.contains(&letter.as_byte()) {
            LetterState::Untried
        } else if self.round.target.has_letter(letter) {
            LetterState::Hit
        } else {
            LetterState::Miss
        }
    }

    /// The active round's target word (e.g., to reveal it on loss)
    #[must_use]
    pub fn target(&self) -> &TargetWord {
        &self.round.target
    }

    #[must_use]
    pub const fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    #[must_use]
    pub const fn status(&self) -> Status {
        self.round.status
    }

    #[must_use]
    pub const fn lives(&self) -> u8 {
        self.round.lives
    }

    /// Lives spent so far this round (wrong guesses plus hints)
    #[must_use]
    pub const fn mistakes(&self) -> u8 {
        MAX_LIVES - self.round.lives
    }

    #[must_use]
    pub const fn score(&self) -> u32 {
        self.score
    }

    #[must_use]
    pub const fn high_score(&self) -> u32 {
        self.high_score
    }

    /// Replace the active round with a fixed entry (deterministic tests)
    #[cfg(test)]
    fn force_round(&mut self, entry: &WordEntry) {
        self.round = Round::new(entry);
    }
}
