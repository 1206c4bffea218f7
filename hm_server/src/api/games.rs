//! Game API handlers.
//!
//! This module provides the JSON endpoints for playing hangman in a browser
//! session: starting a game, submitting letter guesses, and fetching the
//! current state. All three exchange the same [`GameResponse`] payload.
//!
//! # Examples
//!
//! Start a game:
//! ```bash
//! curl -X POST -c jar http://localhost:7777/new_game
//! ```
//!
//! Guess a letter:
//! ```bash
//! curl -X POST -b jar http://localhost:7777/guess \
//!   -H "Content-Type: application/json" \
//!   -d '{"letter": "e"}'
//! ```

use axum::{Json, extract::State, http::StatusCode};
use hangman::{GameState, GameStatus, GuessOutcome, drawing_stage, stage_lines, start_random_game};
use serde::{Deserialize, Serialize};

use super::{AppState, session::SessionId};

/// Snapshot of a session's game, shared by every game endpoint
#[derive(Debug, Serialize)]
pub struct GameResponse {
    /// Letter count of the secret word; reported on `/new_game` only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub word_length: Option<usize>,
    pub word_display: Vec<char>,
    pub guessed_letters: Vec<char>,
    pub wrong_guesses: u8,
    pub max_wrong_guesses: u8,
    pub hangman_drawing: Vec<String>,
    pub game_over: bool,
    pub won: bool,
    pub message: String,
}

#[derive(Debug, Deserialize)]
pub struct GuessRequest {
    pub letter: String,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

type ApiError = (StatusCode, Json<ErrorResponse>);

fn api_error(status: StatusCode, error: impl ToString) -> ApiError {
    (
        status,
        Json(ErrorResponse {
            error: error.to_string(),
        }),
    )
}

fn game_response(game: &GameState, message: String) -> GameResponse {
    let stage = drawing_stage(game.wrong_count(), game.max_wrong());
    GameResponse {
        word_length: None,
        word_display: game.render_mask(),
        guessed_letters: game.guessed_letters().to_vec(),
        wrong_guesses: game.wrong_count(),
        max_wrong_guesses: game.max_wrong(),
        hangman_drawing: stage_lines(stage).iter().map(|s| s.to_string()).collect(),
        game_over: game.is_over(),
        won: game.is_won(),
        message,
    }
}

fn outcome_message(game: &GameState, outcome: GuessOutcome) -> String {
    match outcome {
        GuessOutcome::Hit(letter) => format!("Good guess! '{letter}' is in the word."),
        GuessOutcome::Miss(letter) => format!("Sorry, '{letter}' is not in the word."),
        GuessOutcome::Won(_) => format!(
            "Congratulations! You won! The word was '{}'.",
            game.secret_word()
        ),
        GuessOutcome::Lost(_) => {
            format!("Game over! You lost. The word was '{}'.", game.secret_word())
        }
    }
}

fn status_message(game: &GameState) -> String {
    match game.status() {
        GameStatus::InProgress => "Game in progress.".to_string(),
        GameStatus::Won => format!("You won! The word was '{}'.", game.secret_word()),
        GameStatus::Lost => format!("You lost. The word was '{}'.", game.secret_word()),
    }
}

/// Start a new game for the session.
///
/// Picks a fresh secret word and replaces any game the session already had.
///
/// # Response
///
/// Returns `200 OK` with the initial [`GameResponse`]; `word_length` is set
/// so the page can announce the word size.
///
/// # Errors
///
/// - `503 Service Unavailable`: session store is at capacity
pub async fn new_game(
    State(state): State<AppState>,
    session: SessionId,
) -> Result<Json<GameResponse>, ApiError> {
    let game = start_random_game(state.words.as_slice())
        .map_err(|e| api_error(StatusCode::INTERNAL_SERVER_ERROR, e))?;

    state
        .store
        .put(session.0, game.clone())
        .await
        .map_err(|e| api_error(StatusCode::SERVICE_UNAVAILABLE, e))?;

    tracing::info!(session_id = %session.0, "Started new game");

    let word_length = game.secret_word().len();
    let message = format!("New game started! The word has {word_length} letters.");
    let mut response = game_response(&game, message);
    response.word_length = Some(word_length);
    Ok(Json(response))
}

/// Submit a letter guess for the session's game.
///
/// # Request Body
///
/// ```json
/// {"letter": "e"}
/// ```
///
/// The raw string is trimmed and uppercased by the engine; anything other
/// than a single letter is rejected.
///
/// # Errors
///
/// - `404 Not Found`: no game in progress for this session
/// - `400 Bad Request`: invalid input, duplicate letter, or finished game;
///   the body carries the reason and the state is unchanged
pub async fn guess(
    State(state): State<AppState>,
    session: SessionId,
    Json(request): Json<GuessRequest>,
) -> Result<Json<GameResponse>, ApiError> {
    let Some(mut game) = state.store.get(session.0).await else {
        return Err(api_error(StatusCode::NOT_FOUND, "no game in progress"));
    };

    match game.submit_guess(&request.letter) {
        Ok(outcome) => {
            state
                .store
                .put(session.0, game.clone())
                .await
                .map_err(|e| api_error(StatusCode::SERVICE_UNAVAILABLE, e))?;
            let message = outcome_message(&game, outcome);
            Ok(Json(game_response(&game, message)))
        }
        Err(e) => Err(api_error(StatusCode::BAD_REQUEST, e)),
    }
}

/// Fetch the current state of the session's game.
///
/// # Errors
///
/// - `404 Not Found`: no game in progress for this session
pub async fn game_state(
    State(state): State<AppState>,
    session: SessionId,
) -> Result<Json<GameResponse>, ApiError> {
    let Some(game) = state.store.get(session.0).await else {
        return Err(api_error(StatusCode::NOT_FOUND, "no game in progress"));
    };

    let message = status_message(&game);
    Ok(Json(game_response(&game, message)))
}
