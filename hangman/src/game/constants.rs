//! Game constants.

/// Number of wrong guesses that loses the game.
pub const MAX_WRONG_GUESSES: u8 = 6;

/// Built-in word list. Words are stored lowercase and normalized to
/// uppercase when a game starts.
pub const WORDS: &[&str] = &[
    "python",
    "hangman",
    "computer",
    "programming",
    "game",
    "challenge",
    "word",
    "letter",
    "guess",
    "puzzle",
    "mystery",
    "solution",
    "keyboard",
    "alphabet",
    "victory",
    "defeat",
    "player",
    "score",
];
