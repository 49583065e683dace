//! Parsing of what a player types at the prompt.

use thiserror::Error;

use crate::config::BOARD_SIZE;
use crate::position::Position;

/// A line of player input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Fire(Position),
    Board,
    Fleet,
    Status,
    Help,
    Quit,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InputError {
    #[error("empty input")]
    Empty,
    #[error("invalid column '{0}', expected a letter A-J")]
    Column(char),
    #[error("invalid row '{0}', expected a number")]
    Row(String),
    #[error("invalid column '{0}', expected a number")]
    ColumnNumber(String),
    #[error("unrecognised input '{0}', type 'help' for commands")]
    Unrecognised(String),
}

/// Parse one line of input.
///
/// Targets are either `A5` style (column letter, 1-based row) or two
/// 0-based numbers `row col`. Numeric targets are passed through unchecked so
/// the game decides whether they are valid.
pub fn parse_command(line: &str) -> Result<Command, InputError> {
    let line = line.trim();
    match line.to_ascii_lowercase().as_str() {
        "" => return Err(InputError::Empty),
        "board" | "b" => return Ok(Command::Board),
        "fleet" | "f" => return Ok(Command::Fleet),
        "status" | "s" => return Ok(Command::Status),
        "help" | "h" | "?" => return Ok(Command::Help),
        "quit" | "q" | "exit" => return Ok(Command::Quit),
        _ => {}
    }
    let mut parts = line.split_whitespace();
    match (parts.next(), parts.next(), parts.next()) {
        (Some(row), Some(col), None) => {
            let row: i32 = row.parse().map_err(|_| InputError::Row(row.to_string()))?;
            let col: i32 = col
                .parse()
                .map_err(|_| InputError::ColumnNumber(col.to_string()))?;
            Ok(Command::Fire(Position::new(row, col)))
        }
        (Some(token), None, None) => parse_label(token).map(Command::Fire),
        _ => Err(InputError::Unrecognised(line.to_string())),
    }
}

/// Parse an `A5` style label into a 0-based position.
pub fn parse_label(token: &str) -> Result<Position, InputError> {
    let mut chars = token.chars();
    let col_ch = chars.next().ok_or(InputError::Empty)?.to_ascii_uppercase();
    if !col_ch.is_ascii_alphabetic() {
        return Err(InputError::Unrecognised(token.to_string()));
    }
    let col = (col_ch as u8 - b'A') as i32;
    if col >= BOARD_SIZE {
        return Err(InputError::Column(col_ch));
    }
    let row_str = chars.as_str();
    let row: i32 = row_str
        .parse()
        .map_err(|_| InputError::Row(row_str.to_string()))?;
    let row = row
        .checked_sub(1)
        .ok_or_else(|| InputError::Row(row_str.to_string()))?;
    Ok(Position::new(row, col))
}
