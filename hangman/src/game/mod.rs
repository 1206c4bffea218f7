//! Hangman game engine - core state machine and game logic.
//!
//! This module provides the foundational hangman implementation including:
//! - The [`GameState`] value type and its guess-transition function
//! - The built-in word list and wrong-guess limit
//! - The gallows drawing-stage mapping shared by all hosts

// Submodules
pub mod constants;
pub mod drawing;

mod state_machine;

pub use state_machine::{
    GameError, GameState, GameStatus, GuessError, GuessOutcome, start_game, start_random_game,
};
