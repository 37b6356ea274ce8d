//! # demstitch-store
//!
//! Tile identification and artifact access for the stitching pipeline.
//!
//! Every tile of the source dataset is addressed by a single-letter
//! [`TileCode`] and consists of two artifacts: a text header and a binary
//! sample buffer. A [`TileStore`] resolves a code to those artifacts;
//! [`DirStore`] does so from a local directory.
//!
//! ```no_run
//! use demstitch_store::{DirStore, TileStore};
//!
//! let store = DirStore::new("./globe_data");
//! let header = store.fetch_header("a".parse()?)?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod code;
mod error;
mod store;

pub use code::{ParseTileCodeError, TileCode};
pub use error::{ArtifactKind, FetchError};
pub use store::{DirStore, TileStore};

/// Result type for store operations.
pub type Result<T> = std::result::Result<T, FetchError>;
