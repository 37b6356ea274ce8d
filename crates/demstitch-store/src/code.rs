//! Tile identification.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error returned when a tile code is not a single ASCII letter.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("invalid tile code {0:?} (expected a single ASCII letter)")]
pub struct ParseTileCodeError(pub String);

/// Identifier of one tile of the source dataset: a single ASCII letter,
/// normalized to lowercase.
///
/// Global one-km elevation datasets of this family label their tiles `a`
/// through `p`, four rows of four covering the globe from the north-west.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TileCode(char);

impl TileCode {
    /// Create a tile code from a letter.
    pub fn new(letter: char) -> Result<Self, ParseTileCodeError> {
        if letter.is_ascii_alphabetic() {
            Ok(TileCode(letter.to_ascii_lowercase()))
        } else {
            Err(ParseTileCodeError(letter.to_string()))
        }
    }

    /// The normalized letter form.
    pub fn letter(&self) -> char {
        self.0
    }
}

impl fmt::Display for TileCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for TileCode {
    type Err = ParseTileCodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(letter), None) => {
                TileCode::new(letter).map_err(|_| ParseTileCodeError(s.to_string()))
            }
            _ => Err(ParseTileCodeError(s.to_string())),
        }
    }
}

impl TryFrom<String> for TileCode {
    type Error = ParseTileCodeError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<TileCode> for String {
    fn from(code: TileCode) -> String {
        code.0.to_string()
    }
}
