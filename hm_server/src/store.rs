//! In-memory session store mapping browser sessions to games.
//!
//! One [`GameState`] per session id. Reads hand out clones and writes replace
//! the stored value, so overlapping requests for the same session resolve as
//! last-write-wins; a single player is not expected to issue overlapping
//! requests.

use hangman::GameState;
use std::collections::HashMap;
use thiserror::Error;
use tokio::sync::RwLock;
use uuid::Uuid;

/// Errors that can occur on store writes
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("server is full")]
    Capacity,
}

/// Keyed store of per-session games
#[derive(Debug)]
pub struct SessionStore {
    games: RwLock<HashMap<Uuid, GameState>>,
    max_sessions: usize,
}

impl SessionStore {
    /// Create a store bounded to `max_sessions` concurrent sessions
    #[must_use]
    pub fn new(max_sessions: usize) -> Self {
        Self {
            games: RwLock::new(HashMap::new()),
            max_sessions,
        }
    }

    /// Get a clone of the session's game, if one exists
    pub async fn get(&self, session_id: Uuid) -> Option<GameState> {
        self.games.read().await.get(&session_id).cloned()
    }

    /// Store the session's game, replacing any previous one.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Capacity`] when the store is full and
    /// `session_id` is not already present. Existing sessions can always be
    /// updated.
    pub async fn put(&self, session_id: Uuid, game: GameState) -> Result<(), StoreError> {
        let mut games = self.games.write().await;
        if games.len() >= self.max_sessions && !games.contains_key(&session_id) {
            return Err(StoreError::Capacity);
        }
        games.insert(session_id, game);
        Ok(())
    }

    /// Number of sessions currently holding a game
    pub async fn session_count(&self) -> usize {
        self.games.read().await.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn game() -> GameState {
        GameState::new("cat").unwrap()
    }

    #[tokio::test]
    async fn test_get_missing_session() {
        let store = SessionStore::new(10);
        assert!(store.get(Uuid::new_v4()).await.is_none());
    }

    #[tokio::test]
    async fn test_put_then_get() {
        let store = SessionStore::new(10);
        let id = Uuid::new_v4();
        store.put(id, game()).await.unwrap();
        assert_eq!(store.get(id).await.unwrap(), game());
        assert_eq!(store.session_count().await, 1);
    }

    #[tokio::test]
    async fn test_put_replaces_existing_game() {
        let store = SessionStore::new(10);
        let id = Uuid::new_v4();
        store.put(id, game()).await.unwrap();

        let mut updated = game();
        updated.submit_guess("c").unwrap();
        store.put(id, updated.clone()).await.unwrap();

        assert_eq!(store.get(id).await.unwrap(), updated);
        assert_eq!(store.session_count().await, 1);
    }

    #[tokio::test]
    async fn test_capacity_rejects_new_sessions_only() {
        let store = SessionStore::new(1);
        let first = Uuid::new_v4();
        store.put(first, game()).await.unwrap();

        let err = store.put(Uuid::new_v4(), game()).await.unwrap_err();
        assert!(matches!(err, StoreError::Capacity));

        // The existing session can still be updated.
        assert!(store.put(first, game()).await.is_ok());
    }
}
