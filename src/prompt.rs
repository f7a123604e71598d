use std::io::{BufRead, Write};

use anyhow::Result;
use tracing::warn;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountInput {
    Default,
    Value(usize),
    Invalid,
}

/// Blank means default; anything that is not a non-negative integer is invalid.
pub fn parse_count(input: &str) -> CountInput {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return CountInput::Default;
    }
    match trimmed.parse::<usize>() {
        Ok(n) => CountInput::Value(n),
        Err(_) => CountInput::Invalid,
    }
}

/// Ask for the number of records. Invalid input falls back to `default` with a warning.
pub fn prompt_count<R: BufRead, W: Write>(input: &mut R, out: &mut W, default: usize) -> Result<usize> {
    write!(out, "Enter the number of records to generate (default {default}): ")?;
    out.flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;

    Ok(match parse_count(&line) {
        CountInput::Default => default,
        CountInput::Value(n) => n,
        CountInput::Invalid => {
            warn!(input = line.trim(), default, "invalid record count");
            writeln!(out, "Invalid input, defaulting to {default} records.")?;
            default
        }
    })
}
