use crate::data::WordBank;
use crate::evaluator;
use crate::results::*;
use rand::Rng;
use std::sync::Arc;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The default number of guesses allowed per game.
pub const DEFAULT_MAX_ATTEMPTS: usize = 6;
/// The default number of letters in the objective word.
pub const DEFAULT_WORD_LENGTH: usize = 5;

/// Fixed settings for a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GameConfig {
    pub max_attempts: usize,
    pub word_length: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            word_length: DEFAULT_WORD_LENGTH,
        }
    }
}

/// The state of a single game: the objective word and every guess made against it so far.
///
/// Each session owns its own `GameState`. Guesses are scored with [`evaluator::evaluate`] and
/// recorded in order until the word is guessed or `max_attempts` guesses have been made.
///
/// ```
/// use wordle_game::*;
///
/// let mut game = GameState::new(GameConfig::default(), "apple")?;
///
/// assert_eq!(game.record_attempt("crane"), GameStatus::InProgress);
/// assert_eq!(game.record_attempt("APPLE"), GameStatus::Won);
/// assert_eq!(game.attempt_count(), 2);
/// # Ok::<(), WordleError>(())
/// ```
///
/// Saved games are checked when deserialized: the objective word, the number of attempts, the
/// letter results and the status must all be consistent with each other.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "SavedGame"))]
pub struct GameState {
    config: GameConfig,
    secret_word: Arc<str>,
    attempts: Vec<Attempt>,
    status: GameStatus,
}

impl GameState {
    /// Starts a new game with the given objective word, which is converted to lower case.
    ///
    /// Fails if the word is empty or does not have `config.word_length` letters, or if
    /// `config.max_attempts` is zero.
    pub fn new(config: GameConfig, secret_word: &str) -> Result<GameState> {
        let secret_word = validate_secret(&config, secret_word)?;
        log::info!(
            "Starting a game with {} letters and {} attempts",
            config.word_length,
            config.max_attempts
        );
        Ok(GameState {
            config,
            secret_word,
            attempts: Vec::with_capacity(config.max_attempts),
            status: GameStatus::InProgress,
        })
    }

    /// Starts a new game with an objective word chosen at random from the bank.
    ///
    /// The word length is taken from the bank, so only `max_attempts` is read from `config`.
    pub fn from_bank<R: Rng + ?Sized>(
        config: GameConfig,
        bank: &WordBank,
        rng: &mut R,
    ) -> Result<GameState> {
        let secret_word = bank.choose_random(rng).ok_or(WordleError::NoWords)?;
        let config = GameConfig {
            word_length: bank.word_length(),
            ..config
        };
        GameState::new(config, &secret_word)
    }

    /// Scores the guess against the objective word and records it as the next attempt.
    ///
    /// Nothing is recorded once the game is won or lost, or when all attempts are used; these
    /// calls are ignored. The guess is not validated, see [`GameState::check_guess`].
    ///
    /// Returns the status after the guess.
    pub fn record_attempt(&mut self, guess: &str) -> GameStatus {
        if self.attempts.len() >= self.config.max_attempts || self.status.is_over() {
            log::warn!(
                "Ignoring guess {:?}: game is {:?} after {} of {} attempts",
                guess,
                self.status,
                self.attempts.len(),
                self.config.max_attempts
            );
            return self.status;
        }

        let attempt = evaluator::evaluate(&self.secret_word, guess);
        log::debug!(
            "Attempt {}: {:?} has {} correct and {} misplaced letters",
            self.attempts.len() + 1,
            guess,
            attempt.iter().filter(|lr| lr.in_correct_position).count(),
            attempt.iter().filter(|lr| lr.is_misplaced()).count()
        );
        self.attempts.push(attempt);

        if self.is_complete(guess) {
            self.status = GameStatus::Won;
        } else if self.attempts.len() >= self.config.max_attempts {
            self.status = GameStatus::Lost;
        }
        if self.status.is_over() {
            log::info!(
                "Game {:?} after {} attempts",
                self.status,
                self.attempts.len()
            );
        }
        self.status
    }

    /// Returns `true` iff the guess is the objective word, ignoring case.
    pub fn is_complete(&self, guess: &str) -> bool {
        evaluator::is_complete(&self.secret_word, guess)
    }

    /// Checks that a guess may be recorded: the game must still be in progress and the guess must
    /// have as many letters as the objective word.
    ///
    /// Callers collecting guesses should use this to reject bad input before calling
    /// [`GameState::record_attempt`].
    pub fn check_guess(&self, guess: &str) -> Result<()> {
        if self.status.is_over() || self.attempts.len() >= self.config.max_attempts {
            return Err(WordleError::GameOver);
        }
        if guess.chars().count() != self.word_length() {
            return Err(WordleError::WordLength(self.word_length()));
        }
        Ok(())
    }

    /// Starts over with a new objective word, discarding all attempts.
    pub fn reset(&mut self, secret_word: &str) -> Result<()> {
        self.secret_word = validate_secret(&self.config, secret_word)?;
        log::info!(
            "Resetting {:?} game after {} attempts",
            self.status,
            self.attempts.len()
        );
        self.attempts.clear();
        self.status = GameStatus::InProgress;
        Ok(())
    }

    /// Starts over with an objective word chosen at random from the bank.
    ///
    /// The bank's words must have the same length as the current objective word.
    pub fn reset_from<R: Rng + ?Sized>(&mut self, bank: &WordBank, rng: &mut R) -> Result<()> {
        let secret_word = bank.choose_random(rng).ok_or(WordleError::NoWords)?;
        self.reset(&secret_word)
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// The objective word, in lower case.
    pub fn secret_word(&self) -> &str {
        &self.secret_word
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// The number of guesses recorded so far.
    pub fn attempt_count(&self) -> usize {
        self.attempts.len()
    }

    pub fn max_attempts(&self) -> usize {
        self.config.max_attempts
    }

    pub fn word_length(&self) -> usize {
        self.config.word_length
    }

    /// The number of guesses that can still be recorded.
    pub fn remaining_attempts(&self) -> usize {
        if self.status.is_over() {
            return 0;
        }
        self.config.max_attempts.saturating_sub(self.attempts.len())
    }

    /// The recorded attempts, oldest first.
    pub fn attempts(&self) -> &[Attempt] {
        &self.attempts
    }

    pub fn last_attempt(&self) -> Option<&Attempt> {
        self.attempts.last()
    }

    /// The most recent guess, as it was entered.
    pub fn last_guess(&self) -> Option<String> {
        self.last_attempt().map(Attempt::guess)
    }

    /// Every guess made so far, oldest first. Empty guesses are skipped.
    pub fn guesses(&self) -> Vec<String> {
        self.attempts
            .iter()
            .filter(|attempt| !attempt.is_empty())
            .map(Attempt::guess)
            .collect()
    }

    /// Every guessed letter, in the order they were entered.
    pub fn letters(&self) -> Vec<char> {
        self.attempts
            .iter()
            .flat_map(|attempt| attempt.iter().map(|lr| lr.letter))
            .collect()
    }

    /// Exactly `max_attempts` rows for display: the recorded attempts followed by `None` for each
    /// attempt not yet made.
    pub fn rows(&self) -> impl Iterator<Item = Option<&Attempt>> + '_ {
        let unplayed = self.config.max_attempts.saturating_sub(self.attempts.len());
        self.attempts
            .iter()
            .map(Some)
            .chain(std::iter::repeat(None).take(unplayed))
    }
}

fn validate_secret(config: &GameConfig, secret_word: &str) -> Result<Arc<str>> {
    if config.max_attempts == 0 {
        return Err(WordleError::NoAttempts);
    }
    let secret_word = evaluator::fold_word(secret_word.trim());
    if secret_word.is_empty() {
        return Err(WordleError::EmptyWord);
    }
    if secret_word.chars().count() != config.word_length {
        return Err(WordleError::WordLength(config.word_length));
    }
    Ok(Arc::from(secret_word.as_str()))
}

/// The serialized form of a [`GameState`], before it is checked.
#[cfg(feature = "serde")]
#[derive(Deserialize)]
struct SavedGame {
    config: GameConfig,
    secret_word: Arc<str>,
    attempts: Vec<Attempt>,
    status: GameStatus,
}

#[cfg(feature = "serde")]
impl TryFrom<SavedGame> for GameState {
    type Error = WordleError;

    fn try_from(saved: SavedGame) -> Result<GameState> {
        let secret_word = validate_secret(&saved.config, &saved.secret_word)?;
        if saved.attempts.len() > saved.config.max_attempts {
            return Err(WordleError::InvalidGame("more attempts than allowed"));
        }
        let mut status = GameStatus::InProgress;
        for attempt in &saved.attempts {
            if status.is_over() {
                return Err(WordleError::InvalidGame("attempts recorded after the game ended"));
            }
            if evaluator::evaluate(&secret_word, &attempt.guess()) != *attempt {
                return Err(WordleError::InvalidGame(
                    "letter results do not match the objective word",
                ));
            }
            if evaluator::is_complete(&secret_word, &attempt.guess()) {
                status = GameStatus::Won;
            }
        }
        if status == GameStatus::InProgress && saved.attempts.len() >= saved.config.max_attempts {
            status = GameStatus::Lost;
        }
        if status != saved.status {
            return Err(WordleError::InvalidGame("status does not match the attempts"));
        }
        Ok(GameState {
            config: saved.config,
            secret_word,
            attempts: saved.attempts,
            status,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_lowercases_secret_word() -> Result<()> {
        let game = GameState::new(GameConfig::default(), "ApPlE")?;

        assert_eq!(game.secret_word(), "apple");
        assert_eq!(game.status(), GameStatus::InProgress);
        assert_eq!(game.attempt_count(), 0);
        assert_eq!(game.remaining_attempts(), 6);
        Ok(())
    }

    #[test]
    fn rows_pads_unplayed_attempts() -> Result<()> {
        let mut game = GameState::new(GameConfig::default(), "apple")?;
        game.record_attempt("crane");

        let rows: Vec<Option<&Attempt>> = game.rows().collect();

        assert_eq!(rows.len(), 6);
        assert_eq!(rows[0].map(Attempt::guess), Some("crane".to_string()));
        assert!(rows[1..].iter().all(Option::is_none));
        Ok(())
    }

    #[test]
    fn record_attempt_ignored_after_win() -> Result<()> {
        let mut game = GameState::new(GameConfig::default(), "apple")?;

        assert_eq!(game.record_attempt("apple"), GameStatus::Won);
        assert_eq!(game.record_attempt("crane"), GameStatus::Won);
        assert_eq!(game.attempt_count(), 1);
        assert_eq!(game.remaining_attempts(), 0);
        Ok(())
    }

    #[test]
    fn win_on_last_attempt_is_not_a_loss() -> Result<()> {
        let mut game = GameState::new(
            GameConfig {
                max_attempts: 2,
                word_length: 5,
            },
            "apple",
        )?;

        assert_eq!(game.record_attempt("crane"), GameStatus::InProgress);
        assert_eq!(game.record_attempt("apple"), GameStatus::Won);
        Ok(())
    }
}
