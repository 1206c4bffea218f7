//! A hangman terminal client.
//!
//! Plays locally against the engine by default, or against a hangman web
//! server over its JSON API with `--server`.

pub mod api_client;
pub mod prompt;
