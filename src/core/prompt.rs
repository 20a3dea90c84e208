//! Numbered interactive menus on the terminal.
//!
//! Commands only prompt when stdin is a terminal; see [`is_interactive`].
//! Menus are written to stderr so that stdout can be redirected while the
//! user still sees the question.

use crate::core::error::{GitignoreError, Result};
use colored::*;
use std::io::{self, BufRead, IsTerminal, Write};

pub fn is_interactive() -> bool {
    io::stdin().is_terminal()
}

/// Show `choices` as a numbered menu and return the 0-based index picked
pub fn select(title: &str, choices: &[String]) -> Result<usize> {
    select_from(&mut io::stdin().lock(), &mut io::stderr(), title, choices)
}

/// Ask for a single line of text, trimmed
pub fn read_line(prompt: &str) -> Result<String> {
    read_line_from(&mut io::stdin().lock(), &mut io::stderr(), prompt)
}

pub fn select_from<R: BufRead, W: Write>(
    reader: &mut R,
    writer: &mut W,
    title: &str,
    choices: &[String],
) -> Result<usize> {
    writeln!(writer, "\n{}:\n", title.white())?;
    for (index, choice) in choices.iter().enumerate() {
        writeln!(
            writer,
            "   {} {}",
            format!("[{}]", index + 1).bright_black(),
            choice.white()
        )?;
    }

    let answer = read_line_from(reader, writer, &format!("\nChoose 1-{}:", choices.len()))?;
    match answer.parse::<usize>() {
        Ok(number) if (1..=choices.len()).contains(&number) => Ok(number - 1),
        _ => Err(GitignoreError::invalid_selection(answer, choices.len())),
    }
}

pub fn read_line_from<R: BufRead, W: Write>(
    reader: &mut R,
    writer: &mut W,
    prompt: &str,
) -> Result<String> {
    write!(writer, "{} ", prompt.blue())?;
    writer.flush()?;

    let mut input = String::new();
    reader.read_line(&mut input)?;
    Ok(input.trim().to_string())
}
