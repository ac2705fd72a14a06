//! Where dataset bytes come from.

use std::collections::HashMap;
use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

use crate::key::TileKey;

pub const MANIFEST_FILE: &str = "manifest.json";
pub const TILES_DIR: &str = "tiles";
pub const TILE_FILE: &str = "tile.json";

/// A named piece of the dataset.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Resource {
    Manifest,
    Tile(TileKey),
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Manifest => f.write_str("manifest"),
            Self::Tile(key) => write!(f, "tile {key}"),
        }
    }
}

/// Raw read access to a dataset. Implementations only fetch bytes; parsing is
/// the loader's job.
///
/// A resource that does not exist must be reported as
/// [`io::ErrorKind::NotFound`].
pub trait TileSource: Send + Sync + fmt::Debug {
    /// ## Summary
    /// Reads the stored bytes of one resource.
    ///
    /// ## Errors
    /// Returns an I/O error if the resource is missing or unreadable.
    fn read(&self, resource: &Resource) -> io::Result<Vec<u8>>;
}

/// A dataset laid out on disk:
///
/// ```text
/// <root>/manifest.json
/// <root>/tiles/tile.json            root tile
/// <root>/tiles/a/d/c/tile.json      tile "adc"
/// ```
#[derive(Debug, Clone)]
pub struct DirectorySource {
    root: PathBuf,
}

impl DirectorySource {
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// File backing a resource.
    #[must_use]
    pub fn path_for(&self, resource: &Resource) -> PathBuf {
        match resource {
            Resource::Manifest => self.root.join(MANIFEST_FILE),
            Resource::Tile(key) => {
                let mut path = self.root.join(TILES_DIR);
                for quadrant in key.quadrants() {
                    path.push(quadrant.letter().to_string());
                }
                path.push(TILE_FILE);
                path
            }
        }
    }
}

impl TileSource for DirectorySource {
    fn read(&self, resource: &Resource) -> io::Result<Vec<u8>> {
        let path = self.path_for(resource);
        tracing::trace!(path = %path.display(), "Reading dataset file");
        std::fs::read(path)
    }
}

/// A dataset held in memory, for embedding a dataset in the binary or
/// building one in tests.
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    manifest: Vec<u8>,
    tiles: HashMap<TileKey, Vec<u8>>,
}

impl MemorySource {
    #[must_use]
    pub fn new(manifest: impl Into<Vec<u8>>) -> Self {
        Self {
            manifest: manifest.into(),
            tiles: HashMap::new(),
        }
    }

    #[must_use]
    pub fn with_tile(mut self, key: TileKey, bytes: impl Into<Vec<u8>>) -> Self {
        self.insert_tile(key, bytes);
        self
    }

    pub fn insert_tile(&mut self, key: TileKey, bytes: impl Into<Vec<u8>>) {
        self.tiles.insert(key, bytes.into());
    }
}

impl TileSource for MemorySource {
    fn read(&self, resource: &Resource) -> io::Result<Vec<u8>> {
        match resource {
            Resource::Manifest => Ok(self.manifest.clone()),
            Resource::Tile(key) => self.tiles.get(key).cloned().ok_or_else(|| {
                io::Error::new(io::ErrorKind::NotFound, format!("no tile {key}"))
            }),
        }
    }
}
