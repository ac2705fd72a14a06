use thiserror::Error;

use crate::key::TileKey;
use crate::source::Resource;

/// The dataset is broken: a tile cannot be read or parsed, or the tile tree
/// is deeper than its manifest allows.
///
/// None of these are caller mistakes and none are recoverable by retrying;
/// the dataset is static.
#[derive(Error, Debug)]
pub enum DatasetError {
    #[error("Tile {key} is delegated to but missing from the dataset")]
    MissingTile { key: TileKey },

    #[error("I/O error reading {resource}: {source}")]
    Io {
        resource: Resource,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed {resource}: {source}")]
    Malformed {
        resource: Resource,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid geometry in tile {key}: {reason}")]
    InvalidGeometry { key: TileKey, reason: String },

    #[error("Tile {key} exceeds the maximum tiling depth of {max_depth}")]
    DepthExceeded { key: TileKey, max_depth: usize },

    #[error("Invalid manifest: {0}")]
    Manifest(String),
}

pub type DatasetResult<T> = std::result::Result<T, DatasetError>;
