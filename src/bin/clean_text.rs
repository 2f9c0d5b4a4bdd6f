//! Standalone text sanitizer
//!
//! Reads stdin, strips Unicode control (Cc) and format (Cf) code points
//! except newline and tab, and writes the result to stdout.

use std::io::{IsTerminal, Read, Write};
use unicode_general_category::{get_general_category, GeneralCategory};

/// Remove control and format code points, keeping `\n` and `\t`
fn sanitize(text: &str) -> String {
    text.chars()
        .filter(|&ch| {
            if ch == '\n' || ch == '\t' {
                return true;
            }
            !matches!(
                get_general_category(ch),
                GeneralCategory::Control | GeneralCategory::Format
            )
        })
        .collect()
}

fn main() -> std::io::Result<()> {
    let mut stdin = std::io::stdin();
    if stdin.is_terminal() {
        eprintln!("usage: clean-text < input.txt > output.txt");
        return Ok(());
    }

    let mut input = String::new();
    stdin.read_to_string(&mut input)?;

    let mut stdout = std::io::stdout();
    stdout.write_all(sanitize(&input).as_bytes())?;
    stdout.flush()
}
