//! Hangman game state machine.
//!
//! A game is a single [`GameState`] value mutated only by
//! [`GameState::submit_guess`]. Rejected guesses leave the state untouched,
//! and terminal states (won or lost) are absorbing.

use log::debug;
use rand::Rng;
use rand::seq::IndexedRandom;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::constants::MAX_WRONG_GUESSES;

/// Errors that can occur when starting a game
#[derive(Debug, Deserialize, Eq, Error, PartialEq, Serialize)]
pub enum GameError {
    #[error("word list is empty")]
    EmptyWordList,
    #[error("word {0:?} is not a purely alphabetic word")]
    InvalidWord(String),
}

/// Errors that reject a guess without mutating the game state
#[derive(Clone, Debug, Deserialize, Eq, Error, PartialEq, Serialize)]
pub enum GuessError {
    #[error("the game is already over")]
    GameAlreadyOver,
    #[error("please enter a single letter")]
    InvalidInput,
    #[error("you already guessed that letter")]
    DuplicateGuess,
}

/// Lifecycle status of a game
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum GameStatus {
    InProgress,
    Won,
    Lost,
}

/// Result of a valid guess, carrying the normalized letter so hosts can
/// phrase their own messages
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum GuessOutcome {
    /// The letter is in the secret word.
    Hit(char),
    /// The letter is not in the secret word.
    Miss(char),
    /// The guess revealed the last remaining letter.
    Won(char),
    /// The guess was the final wrong one.
    Lost(char),
}

/// A single hangman game.
///
/// Fields are private so the invariants hold for the game's lifetime:
/// `wrong_count` always equals the number of guessed letters absent from the
/// secret word, and a terminal status freezes all further mutation.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct GameState {
    /// Uppercase A-Z, length >= 1, fixed at game start.
    secret_word: String,
    /// Distinct uppercase letters in first-guess order.
    guessed_letters: Vec<char>,
    wrong_count: u8,
    max_wrong: u8,
    status: GameStatus,
}

impl GameState {
    /// Create a game for the given word with the default wrong-guess limit.
    ///
    /// The word is uppercased; it must be non-empty and purely ASCII
    /// alphabetic.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::InvalidWord`] if the word is empty or contains a
    /// non-alphabetic character.
    pub fn new(word: &str) -> Result<Self, GameError> {
        Self::with_max_wrong(word, MAX_WRONG_GUESSES)
    }

    /// Create a game with an explicit wrong-guess limit.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::InvalidWord`] if the word is empty or contains a
    /// non-alphabetic character.
    pub fn with_max_wrong(word: &str, max_wrong: u8) -> Result<Self, GameError> {
        if word.is_empty() || !word.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(GameError::InvalidWord(word.to_string()));
        }
        Ok(Self {
            secret_word: word.to_ascii_uppercase(),
            guessed_letters: Vec::new(),
            wrong_count: 0,
            max_wrong,
            status: GameStatus::InProgress,
        })
    }

    /// The secret word, uppercase.
    #[must_use]
    pub fn secret_word(&self) -> &str {
        &self.secret_word
    }

    /// Distinct guessed letters in first-guess order.
    #[must_use]
    pub fn guessed_letters(&self) -> &[char] {
        &self.guessed_letters
    }

    #[must_use]
    pub fn wrong_count(&self) -> u8 {
        self.wrong_count
    }

    #[must_use]
    pub fn max_wrong(&self) -> u8 {
        self.max_wrong
    }

    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Whether the game reached a terminal status.
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.status != GameStatus::InProgress
    }

    #[must_use]
    pub fn is_won(&self) -> bool {
        self.status == GameStatus::Won
    }

    /// Submit a raw guess string.
    ///
    /// The input is trimmed and uppercased, then validated in order: a
    /// finished game rejects with [`GuessError::GameAlreadyOver`], anything
    /// other than a single ASCII letter with [`GuessError::InvalidInput`],
    /// and a repeated letter with [`GuessError::DuplicateGuess`]. Rejections
    /// leave the state byte-for-byte unchanged.
    ///
    /// A valid new letter is recorded, a miss increments the wrong-guess
    /// count, and the status is recomputed: revealing the last letter wins,
    /// reaching the wrong-guess limit loses.
    pub fn submit_guess(&mut self, raw: &str) -> Result<GuessOutcome, GuessError> {
        if self.status != GameStatus::InProgress {
            return Err(GuessError::GameAlreadyOver);
        }

        let trimmed = raw.trim();
        let mut chars = trimmed.chars();
        let letter = match (chars.next(), chars.next()) {
            (Some(c), None) if c.is_ascii_alphabetic() => c.to_ascii_uppercase(),
            _ => return Err(GuessError::InvalidInput),
        };

        if self.guessed_letters.contains(&letter) {
            return Err(GuessError::DuplicateGuess);
        }

        self.guessed_letters.push(letter);
        let hit = self.secret_word.contains(letter);
        if !hit {
            self.wrong_count += 1;
        }

        if self.all_letters_revealed() {
            self.status = GameStatus::Won;
            debug!("game won with {} wrong guesses", self.wrong_count);
            return Ok(GuessOutcome::Won(letter));
        }
        if self.wrong_count >= self.max_wrong {
            self.status = GameStatus::Lost;
            debug!("game lost, the word was {}", self.secret_word);
            return Ok(GuessOutcome::Lost(letter));
        }

        Ok(if hit {
            GuessOutcome::Hit(letter)
        } else {
            GuessOutcome::Miss(letter)
        })
    }

    /// The masked word: each secret letter if guessed, `_` otherwise.
    ///
    /// Output length always equals the secret word's length, order preserved.
    #[must_use]
    pub fn render_mask(&self) -> Vec<char> {
        self.secret_word
            .chars()
            .map(|c| {
                if self.guessed_letters.contains(&c) {
                    c
                } else {
                    '_'
                }
            })
            .collect()
    }

    fn all_letters_revealed(&self) -> bool {
        self.secret_word
            .chars()
            .all(|c| self.guessed_letters.contains(&c))
    }
}

/// Start a new game by picking a word uniformly at random from `words`.
///
/// The word is normalized to uppercase at selection time. The random source
/// is injected so hosts can use the thread-local RNG while tests use a
/// seeded one.
///
/// # Errors
///
/// Returns [`GameError::EmptyWordList`] for an empty list, or
/// [`GameError::InvalidWord`] if the selected word is not purely alphabetic.
pub fn start_game<S, R>(words: &[S], rng: &mut R) -> Result<GameState, GameError>
where
    S: AsRef<str>,
    R: Rng + ?Sized,
{
    let word = words.choose(rng).ok_or(GameError::EmptyWordList)?;
    GameState::new(word.as_ref())
}

/// Start a new game using the thread-local RNG.
///
/// # Errors
///
/// Same conditions as [`start_game`].
pub fn start_random_game<S: AsRef<str>>(words: &[S]) -> Result<GameState, GameError> {
    start_game(words, &mut rand::rng())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_start_game_picks_from_list() {
        let words = ["apple", "banana", "cherry"];
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..50 {
            let game = start_game(&words, &mut rng).unwrap();
            assert!(
                words
                    .iter()
                    .any(|w| w.to_ascii_uppercase() == game.secret_word())
            );
            assert_eq!(game.status(), GameStatus::InProgress);
            assert_eq!(game.wrong_count(), 0);
            assert!(game.guessed_letters().is_empty());
        }
    }

    #[test]
    fn test_start_game_empty_list() {
        let words: [&str; 0] = [];
        let mut rng = StdRng::seed_from_u64(0);
        let result = start_game(&words, &mut rng);
        assert_eq!(result.unwrap_err(), GameError::EmptyWordList);
    }

    #[test]
    fn test_new_rejects_non_alphabetic_word() {
        assert!(matches!(
            GameState::new("not a word"),
            Err(GameError::InvalidWord(_))
        ));
        assert!(matches!(GameState::new(""), Err(GameError::InvalidWord(_))));
    }

    #[test]
    fn test_hit_does_not_increase_wrong_count() {
        let mut game = GameState::new("cat").unwrap();
        assert_eq!(game.submit_guess("c"), Ok(GuessOutcome::Hit('C')));
        assert_eq!(game.wrong_count(), 0);
    }

    #[test]
    fn test_miss_increases_wrong_count_by_one() {
        let mut game = GameState::new("cat").unwrap();
        assert_eq!(game.submit_guess("z"), Ok(GuessOutcome::Miss('Z')));
        assert_eq!(game.wrong_count(), 1);
        assert_eq!(game.status(), GameStatus::InProgress);
    }

    #[test]
    fn test_duplicate_guess_leaves_state_unchanged() {
        let mut game = GameState::new("cat").unwrap();
        game.submit_guess("z").unwrap();
        let before = game.clone();
        assert_eq!(game.submit_guess("z"), Err(GuessError::DuplicateGuess));
        assert_eq!(game, before);
        // A hit letter repeats the same way.
        game.submit_guess("c").unwrap();
        let before = game.clone();
        assert_eq!(game.submit_guess("C"), Err(GuessError::DuplicateGuess));
        assert_eq!(game, before);
    }

    #[test]
    fn test_invalid_input_variants() {
        let mut game = GameState::new("cat").unwrap();
        let before = game.clone();
        assert_eq!(game.submit_guess("5"), Err(GuessError::InvalidInput));
        assert_eq!(game.submit_guess("ab"), Err(GuessError::InvalidInput));
        assert_eq!(game.submit_guess(""), Err(GuessError::InvalidInput));
        assert_eq!(game.submit_guess("  "), Err(GuessError::InvalidInput));
        assert_eq!(game.submit_guess("!"), Err(GuessError::InvalidInput));
        assert_eq!(game, before);
    }

    #[test]
    fn test_input_is_trimmed_and_uppercased() {
        let mut game = GameState::new("cat").unwrap();
        assert_eq!(game.submit_guess("  c \n"), Ok(GuessOutcome::Hit('C')));
        assert_eq!(game.guessed_letters(), &['C']);
    }

    #[test]
    fn test_win_scenario_cat() {
        let mut game = GameState::new("cat").unwrap();
        assert_eq!(game.submit_guess("C"), Ok(GuessOutcome::Hit('C')));
        assert_eq!(game.render_mask(), vec!['C', '_', '_']);
        assert_eq!(game.submit_guess("A"), Ok(GuessOutcome::Hit('A')));
        assert_eq!(game.render_mask(), vec!['C', 'A', '_']);
        assert_eq!(game.submit_guess("T"), Ok(GuessOutcome::Won('T')));
        assert_eq!(game.render_mask(), vec!['C', 'A', 'T']);
        assert_eq!(game.status(), GameStatus::Won);
    }

    #[test]
    fn test_loss_scenario_dog() {
        let mut game = GameState::with_max_wrong("dog", 1).unwrap();
        assert_eq!(game.submit_guess("Z"), Ok(GuessOutcome::Lost('Z')));
        assert_eq!(game.wrong_count(), 1);
        assert_eq!(game.status(), GameStatus::Lost);
        let before = game.clone();
        assert_eq!(game.submit_guess("D"), Err(GuessError::GameAlreadyOver));
        assert_eq!(game, before);
    }

    #[test]
    fn test_terminal_state_is_frozen_after_win() {
        let mut game = GameState::new("a").unwrap();
        assert_eq!(game.submit_guess("a"), Ok(GuessOutcome::Won('A')));
        let before = game.clone();
        assert_eq!(game.submit_guess("b"), Err(GuessError::GameAlreadyOver));
        assert_eq!(game, before);
    }

    #[test]
    fn test_won_and_lost_never_both() {
        // Last wrong guess and full reveal cannot coincide, but a winning
        // guess at max_wrong - 1 wrong guesses must win, not lose.
        let mut game = GameState::with_max_wrong("a", 2).unwrap();
        game.submit_guess("x").unwrap();
        assert_eq!(game.submit_guess("a"), Ok(GuessOutcome::Won('A')));
        assert_eq!(game.status(), GameStatus::Won);
    }

    #[test]
    fn test_mask_repeated_letters() {
        let mut game = GameState::new("lull").unwrap();
        game.submit_guess("l").unwrap();
        assert_eq!(game.render_mask(), vec!['L', '_', 'L', 'L']);
    }
}
