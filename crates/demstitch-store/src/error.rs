//! Error types for tile stores.

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

use crate::TileCode;

/// The two artifacts that make up a tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArtifactKind {
    /// Text header (`.hdr`).
    Header,
    /// Binary sample buffer (`.dem`).
    Tile,
}

impl fmt::Display for ArtifactKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArtifactKind::Header => write!(f, "header"),
            ArtifactKind::Tile => write!(f, "tile"),
        }
    }
}

/// Errors that can occur when fetching tile artifacts.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The store has no such artifact.
    #[error("tile {code} has no {kind} artifact at {path}", path = .path.display())]
    MissingArtifact {
        /// Tile being fetched.
        code: TileCode,
        /// Which companion artifact was missing.
        kind: ArtifactKind,
        /// Where the store looked.
        path: PathBuf,
    },

    /// The artifact exists but could not be read.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The header artifact is not valid UTF-8 text.
    #[error("tile {code} header is not UTF-8 text")]
    HeaderNotText {
        /// Tile whose header was rejected.
        code: TileCode,
    },
}
