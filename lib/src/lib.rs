//! Plays Wordle-style games: scores guesses letter by letter against an objective word and tracks
//! the attempts made in a single game.
//!
//! ```
//! use wordle_game::*;
//!
//! let bank = WordBank::from_iterator(["apple", "crane"])?;
//! let mut game = GameState::new(GameConfig::default(), "apple")?;
//! assert!(bank.contains(game.secret_word()));
//!
//! game.check_guess("appla")?;
//! game.record_attempt("appla");
//! assert_eq!(game.last_guess().as_deref(), Some("appla"));
//! # Ok::<(), WordleError>(())
//! ```

mod data;
mod evaluator;
mod game;
mod results;

pub use data::WordBank;
pub use evaluator::*;
pub use game::*;
pub use results::*;
