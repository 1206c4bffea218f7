//! Terminal input helpers.

use std::io::{self, Write};

/// Print a prompt and read one trimmed line from stdin
pub fn read_line(prompt: &str) -> io::Result<String> {
    print!("{prompt}");
    io::stdout().flush()?;
    let mut input = String::new();
    io::stdin().read_line(&mut input)?;
    Ok(input.trim().to_string())
}

/// Interpret a play-again answer; `y` or `yes` in any case means yes,
/// anything else means no
#[must_use]
pub fn parse_yes_no(input: &str) -> bool {
    matches!(input.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}
