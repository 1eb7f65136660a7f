use std::io;
use std::slice;

use thiserror::Error;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The result of a given letter at a specific location.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LetterResult {
    /// The letter exactly as it was guessed, before any case folding.
    pub letter: char,
    /// The letter matches the objective word at this location.
    pub in_correct_position: bool,
    /// The letter appears somewhere in the objective word.
    pub in_word: bool,
}

impl LetterResult {
    /// Whether this letter is in the word, but somewhere else.
    pub fn is_misplaced(&self) -> bool {
        self.in_word && !self.in_correct_position
    }
}

/// The result of a single word guess: one [`LetterResult`] per guessed letter, in the same order
/// as in the guess.
#[derive(Debug, Clone, Default, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Attempt {
    pub letters: Vec<LetterResult>,
}

impl Attempt {
    /// The number of letters in this attempt.
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    pub fn iter(&self) -> slice::Iter<'_, LetterResult> {
        self.letters.iter()
    }

    /// Reassembles the guessed word from its letters.
    pub fn guess(&self) -> String {
        self.letters.iter().map(|lr| lr.letter).collect()
    }

    /// Returns `true` iff every letter is in its correct position.
    ///
    /// An empty attempt is never complete.
    pub fn is_complete(&self) -> bool {
        !self.letters.is_empty() && self.letters.iter().all(|lr| lr.in_correct_position)
    }
}

impl<'a> IntoIterator for &'a Attempt {
    type Item = &'a LetterResult;
    type IntoIter = slice::Iter<'a, LetterResult>;

    fn into_iter(self) -> Self::IntoIter {
        self.letters.iter()
    }
}

/// Where a game stands.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum GameStatus {
    /// More guesses may be made.
    #[default]
    InProgress,
    /// The objective word was guessed.
    Won,
    /// Every attempt was used without guessing the objective word.
    Lost,
}

impl GameStatus {
    /// Returns `true` if no more guesses are accepted.
    pub fn is_over(&self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }
}

/// Indicates that an error occurred while setting up or playing a game.
#[derive(Debug, Error)]
pub enum WordleError {
    /// Indicates that a word was empty where a word is required.
    #[error("words must not be empty")]
    EmptyWord,
    /// Indicates that a word did not have the expected length. Contains the expected length.
    #[error("words must have {0} letters")]
    WordLength(usize),
    /// Indicates that a game was configured without any attempts.
    #[error("games must allow at least one attempt")]
    NoAttempts,
    /// Indicates that a saved game is inconsistent. Contains the reason.
    #[error("invalid game: {0}")]
    InvalidGame(&'static str),
    /// Indicates that the game has already been won or lost.
    #[error("the game is over, no more guesses are accepted")]
    GameOver,
    /// Indicates that there were no words to choose from.
    #[error("no words available to choose from")]
    NoWords,
    /// Indicates that a word list could not be read.
    #[error("failed to read words: {0}")]
    Io(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, WordleError>;

#[cfg(test)]
mod tests {
    use super::*;

    fn letter(letter: char, in_correct_position: bool, in_word: bool) -> LetterResult {
        LetterResult {
            letter,
            in_correct_position,
            in_word,
        }
    }

    #[test]
    fn attempt_guess_keeps_original_case() {
        let attempt = Attempt {
            letters: vec![
                letter('V', false, false),
                letter('l', false, true),
                letter('a', true, true),
            ],
        };

        assert_eq!(attempt.guess(), "Vla");
        assert!(!attempt.is_complete());
        assert_eq!(attempt.iter().filter(|lr| lr.is_misplaced()).count(), 1);
    }

    #[test]
    fn empty_attempt_is_not_complete() {
        assert!(!Attempt::default().is_complete());
    }

    #[test]
    fn game_status_is_over() {
        assert!(!GameStatus::InProgress.is_over());
        assert!(GameStatus::Won.is_over());
        assert!(GameStatus::Lost.is_over());
    }
}
