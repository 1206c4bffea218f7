//! HTTP API client for the hangman server.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// API client for communicating with a hangman server.
///
/// The server tracks the game per browser session via a cookie; this client
/// captures the `Set-Cookie` from `/new_game` and replays it on every later
/// request so all calls land on the same session.
pub struct ApiClient {
    base_url: String,
    client: reqwest::Client,
    session_cookie: Option<String>,
}

#[derive(Debug, Serialize)]
struct GuessRequest {
    letter: String,
}

/// Snapshot of the session's game as reported by the server
#[derive(Debug, Deserialize)]
pub struct GameSnapshot {
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
struct ErrorBody {
    error: String,
}

/// Outcome of a guess request: an updated snapshot, or a rejection message
/// with the server-side state unchanged
#[derive(Debug)]
pub enum GuessReply {
    State(GameSnapshot),
    Rejected(String),
}

impl ApiClient {
    /// Create a new API client
    pub fn new(base_url: String) -> Self {
        Self {
            base_url,
            client: reqwest::Client::new(),
            session_cookie: None,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Remember the session cookie handed out by the server
    fn capture_session(&mut self, response: &reqwest::Response) {
        let pair = response
            .headers()
            .get(reqwest::header::SET_COOKIE)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.split(';').next());
        if let Some(pair) = pair {
            self.session_cookie = Some(pair.to_string());
        }
    }

    /// Start a new game, replacing any game the session already had
    pub async fn new_game(&mut self) -> Result<GameSnapshot> {
        let mut request = self.client.post(format!("{}/new_game", self.base_url));
        if let Some(cookie) = &self.session_cookie {
            request = request.header(reqwest::header::COOKIE, cookie);
        }

        let response = request
            .send()
            .await
            .context("Failed to send new game request")?;

        self.capture_session(&response);

        if !response.status().is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|e| format!("Failed to read error response: {}", e));
            anyhow::bail!("Starting a game failed: {}", error_text);
        }

        response
            .json()
            .await
            .context("Failed to parse new game response")
    }

    /// Submit a letter guess for the session's game.
    ///
    /// Rejections the player can fix (bad input, duplicate letter, finished
    /// game) come back as [`GuessReply::Rejected`]; transport and protocol
    /// failures are errors.
    pub async fn guess(&self, letter: &str) -> Result<GuessReply> {
        let cookie = self
            .session_cookie
            .as_ref()
            .context("Not in a game; start one first")?;

        let request = GuessRequest {
            letter: letter.to_string(),
        };

        let response = self
            .client
            .post(format!("{}/guess", self.base_url))
            .header(reqwest::header::COOKIE, cookie)
            .json(&request)
            .send()
            .await
            .context("Failed to send guess request")?;

        if response.status().is_success() {
            let snapshot = response
                .json()
                .await
                .context("Failed to parse guess response")?;
            Ok(GuessReply::State(snapshot))
        } else {
            let body: ErrorBody = response
                .json()
                .await
                .context("Failed to parse error response")?;
            Ok(GuessReply::Rejected(body.error))
        }
    }

    /// Fetch the session's current game
    pub async fn game_state(&self) -> Result<GameSnapshot> {
        let cookie = self
            .session_cookie
            .as_ref()
            .context("Not in a game; start one first")?;

        let response = self
            .client
            .get(format!("{}/game_state", self.base_url))
            .header(reqwest::header::COOKIE, cookie)
            .send()
            .await
            .context("Failed to send game state request")?;

        if !response.status().is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|e| format!("Failed to read error response: {}", e));
            anyhow::bail!("Fetching game state failed: {}", error_text);
        }

        response
            .json()
            .await
            .context("Failed to parse game state response")
    }
}
