//! Reading a player's column choice from a line-based input stream

use anyhow::Result;

use std::io::BufRead;

/// One line of player input
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum MoveInput {
    /// A number, not yet checked against the board width
    Column(usize),
    /// Anything that isn't a number, including bytes that aren't UTF-8
    Malformed(String),
    /// End of input
    Closed,
}

/// Reads the next line of `input` as a column number
///
/// Only I/O failures are errors; unreadable text is reported as
/// [`MoveInput::Malformed`] so the caller can ask again.
pub fn read_move<R: BufRead>(input: &mut R) -> Result<MoveInput> {
    let mut line = Vec::new();
    if input.read_until(b'\n', &mut line)? == 0 {
        return Ok(MoveInput::Closed);
    }

    let text = String::from_utf8_lossy(&line);
    let text = text.trim();
    Ok(match text.parse::<usize>() {
        Ok(column) => MoveInput::Column(column),
        Err(_) => MoveInput::Malformed(text.to_string()),
    })
}
