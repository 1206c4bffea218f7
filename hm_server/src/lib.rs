//! Web host for the hangman engine.
//!
//! Serves the game page and a small JSON API, keeping one
//! [`hangman::GameState`] per browser session in an in-memory store. The
//! engine stays a pure function of the state it is given; everything here is
//! routing, session plumbing, and rendering.

pub mod api;
pub mod config;
pub mod logging;
pub mod store;
