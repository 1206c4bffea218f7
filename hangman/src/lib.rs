//! # Hangman
//!
//! A hangman game engine implemented as a small deterministic state machine.
//!
//! This library provides the complete game logic with no I/O: a host (a
//! terminal loop or a web server) owns word selection entropy, state storage,
//! and presentation, and drives the engine through a handful of pure
//! operations.
//!
//! ## Architecture
//!
//! A game is a single [`GameState`] value that moves through three statuses:
//!
//! - **InProgress**: the player is still guessing
//! - **Won**: every letter of the secret word has been guessed
//! - **Lost**: the wrong-guess count reached its limit
//!
//! Both terminal statuses are absorbing; once a game is over, further guesses
//! are rejected without mutating the state.
//!
//! ## Core Modules
//!
//! - [`game`]: Game state machine, word list, and drawing stages
//!
//! ## Example
//!
//! ```
//! use hangman::{GameStatus, start_game};
//!
//! let mut rng = rand::rng();
//! let game = start_game(hangman::constants::WORDS, &mut rng).unwrap();
//! assert_eq!(game.status(), GameStatus::InProgress);
//! ```

/// Core game logic, word list, and state machine.
pub mod game;
pub use game::{
    GameError, GameState, GameStatus, GuessError, GuessOutcome,
    constants::{self, MAX_WRONG_GUESSES},
    drawing::{drawing_stage, stage_lines},
    start_game, start_random_game,
};
