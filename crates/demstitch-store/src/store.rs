//! Tile artifact access.
//!
//! Retrieval transport is an external collaborator: the pipeline only ever
//! asks a [`TileStore`] for a tile's header text and sample buffer. The
//! store shipped here reads a local directory; a network-backed store
//! implements the same trait and owns its own transport concerns (client
//! timeouts, retries, decompression of downloaded archives).

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::{ArtifactKind, FetchError, Result, TileCode};

/// Source of tile artifacts, addressed by tile code.
pub trait TileStore {
    /// Fetch the text header for a tile.
    fn fetch_header(&self, code: TileCode) -> Result<String>;

    /// Fetch the binary sample buffer for a tile.
    fn fetch_tile(&self, code: TileCode) -> Result<Vec<u8>>;
}

/// Store backed by a local directory of `<code>.hdr` / `<code>.dem` files.
#[derive(Debug, Clone)]
pub struct DirStore {
    root: PathBuf,
}

impl DirStore {
    /// Create a store rooted at a directory.
    pub fn new<P: AsRef<Path>>(root: P) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    /// Root directory the store reads from.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path of one artifact of a tile.
    pub fn artifact_path(&self, code: TileCode, kind: ArtifactKind) -> PathBuf {
        let ext = match kind {
            ArtifactKind::Header => "hdr",
            ArtifactKind::Tile => "dem",
        };
        self.root.join(format!("{code}.{ext}"))
    }

    /// Whether both artifacts of a tile are present.
    pub fn has_tile(&self, code: TileCode) -> bool {
        self.artifact_path(code, ArtifactKind::Header).exists()
            && self.artifact_path(code, ArtifactKind::Tile).exists()
    }

    fn read(&self, code: TileCode, kind: ArtifactKind) -> Result<Vec<u8>> {
        let path = self.artifact_path(code, kind);
        if !path.exists() {
            return Err(FetchError::MissingArtifact { code, kind, path });
        }
        let bytes = fs::read(&path)?;
        debug!(%code, %kind, bytes = bytes.len(), "read tile artifact");
        Ok(bytes)
    }
}

impl TileStore for DirStore {
    fn fetch_header(&self, code: TileCode) -> Result<String> {
        let bytes = self.read(code, ArtifactKind::Header)?;
        String::from_utf8(bytes).map_err(|_| FetchError::HeaderNotText { code })
    }

    fn fetch_tile(&self, code: TileCode) -> Result<Vec<u8>> {
        self.read(code, ArtifactKind::Tile)
    }
}
