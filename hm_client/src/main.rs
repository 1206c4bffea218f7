//! A hangman client for the terminal.
//!
//! Runs the game loop locally against the engine, or against a hangman web
//! server's JSON API when `--server` is given. Both modes share the same
//! prompt loop: draw the gallows, show the masked word and guess history,
//! read a letter, repeat.

use anyhow::{Context, Result};
use pico_args::Arguments;

use hangman::{
    GameState, GameStatus, GuessOutcome, constants, drawing_stage, stage_lines, start_random_game,
};
use hm_client::api_client::{ApiClient, GameSnapshot, GuessReply};
use hm_client::prompt;

const HELP: &str = "\
Play hangman in the terminal

USAGE:
  hm_client [OPTIONS]

OPTIONS:
  --server URL          Play against a hangman server instead of locally
                        (e.g., http://localhost:7777)

FLAGS:
  -h, --help            Print help information
";

#[tokio::main]
async fn main() -> Result<()> {
    let mut pargs = Arguments::from_env();

    if pargs.contains(["-h", "--help"]) {
        print!("{HELP}");
        std::process::exit(0);
    }

    let server: Option<String> = pargs.opt_value_from_str("--server").ok().flatten();

    match server {
        Some(url) => play_remote(url).await,
        None => play_local(),
    }
}

/// Game loop against the in-process engine
fn play_local() -> Result<()> {
    println!("Welcome to Hangman!");
    println!("Try to guess the word letter by letter.");

    loop {
        let mut game = start_random_game(constants::WORDS)?;
        println!("The word has {} letters.", game.secret_word().len());

        loop {
            print_board(&game);

            if game.is_over() {
                match game.status() {
                    GameStatus::Won => println!("Congratulations! You won!"),
                    _ => println!("Game over! You lost."),
                }
                println!("The word was: {}", game.secret_word());
                break;
            }

            let input = prompt::read_line("Guess a letter: ")?;
            match game.submit_guess(&input) {
                Ok(GuessOutcome::Hit(letter)) => {
                    println!("Good guess! '{letter}' is in the word.");
                }
                Ok(GuessOutcome::Miss(letter)) => {
                    println!("Sorry, '{letter}' is not in the word.");
                }
                // Win and loss are announced after the final board.
                Ok(_) => {}
                Err(e) => println!("{e}"),
            }
        }

        if !ask_play_again()? {
            break;
        }
        println!();
    }

    Ok(())
}

/// Game loop against a hangman server
async fn play_remote(server_url: String) -> Result<()> {
    let mut client = ApiClient::new(server_url);
    println!("Playing against {}", client.base_url());

    loop {
        let mut snapshot = client
            .new_game()
            .await
            .context("Failed to start a game")?;
        print_snapshot(&snapshot);

        while !snapshot.game_over {
            let input = prompt::read_line("Guess a letter: ")?;
            match client.guess(&input).await? {
                GuessReply::State(updated) => {
                    snapshot = updated;
                    print_snapshot(&snapshot);
                }
                GuessReply::Rejected(reason) => println!("{reason}"),
            }
        }

        if !ask_play_again()? {
            break;
        }
        println!();
    }

    Ok(())
}

fn ask_play_again() -> Result<bool> {
    let answer = prompt::read_line("\nWould you like to play again? (y/n): ")?;
    let again = prompt::parse_yes_no(&answer);
    if !again {
        println!("Thanks for playing!");
    }
    Ok(again)
}

fn print_board(game: &GameState) {
    println!();
    for line in stage_lines(drawing_stage(game.wrong_count(), game.max_wrong())) {
        println!("{line}");
    }
    println!();
    println!("Word: {}", spaced(&game.render_mask()));
    println!(
        "Wrong guesses: {}/{}",
        game.wrong_count(),
        game.max_wrong()
    );
    let mut guessed = game.guessed_letters().to_vec();
    guessed.sort_unstable();
    println!("Guessed letters: {}", joined(&guessed));
}

fn print_snapshot(snapshot: &GameSnapshot) {
    println!();
    for line in &snapshot.hangman_drawing {
        println!("{line}");
    }
    println!();
    println!("Word: {}", spaced(&snapshot.word_display));
    println!(
        "Wrong guesses: {}/{}",
        snapshot.wrong_guesses, snapshot.max_wrong_guesses
    );
    let mut guessed = snapshot.guessed_letters.clone();
    guessed.sort_unstable();
    println!("Guessed letters: {}", joined(&guessed));
    println!("{}", snapshot.message);
}

fn spaced(letters: &[char]) -> String {
    letters
        .iter()
        .map(|c| c.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

fn joined(letters: &[char]) -> String {
    letters
        .iter()
        .map(|c| c.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}
