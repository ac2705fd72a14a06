use std::io;
use std::sync::Arc;

use crate::error::{DatasetError, DatasetResult};
use crate::format::{self, model::Manifest};
use crate::key::TileKey;
use crate::source::{Resource, TileSource};
use crate::tile::Tile;

/// Reads tiles out of a [`TileSource`] and parses them.
///
/// Stateless apart from the manifest read at construction; every call to
/// [`TileLoader::load`] goes back to the source.
#[derive(Debug, Clone)]
pub struct TileLoader {
    source: Arc<dyn TileSource>,
    manifest: Manifest,
}

impl TileLoader {
    /// ## Summary
    /// Opens a dataset by reading and validating its manifest.
    ///
    /// ## Errors
    /// Returns an error if the manifest cannot be read or is invalid.
    #[tracing::instrument(skip(source))]
    pub fn open(source: Arc<dyn TileSource>) -> DatasetResult<Self> {
        let bytes = read(source.as_ref(), &Resource::Manifest)?;
        let manifest = format::parse_manifest(&bytes)?;

        tracing::debug!(
            format_version = manifest.format_version,
            max_depth = manifest.max_depth,
            "Dataset opened"
        );

        Ok(Self { source, manifest })
    }

    #[must_use]
    pub const fn manifest(&self) -> &Manifest {
        &self.manifest
    }

    /// Deepest tile key the dataset may contain.
    #[must_use]
    pub const fn max_depth(&self) -> usize {
        self.manifest.max_depth
    }

    /// ## Summary
    /// Reads and parses one tile.
    ///
    /// ## Errors
    /// Returns `DatasetError::DepthExceeded` for a key deeper than the
    /// manifest allows, `DatasetError::MissingTile` if the source has no such
    /// tile, and a parse or I/O error otherwise.
    #[tracing::instrument(skip(self, key), fields(key = %key))]
    pub fn load(&self, key: &TileKey) -> DatasetResult<Tile> {
        if key.depth() > self.max_depth() {
            tracing::warn!(max_depth = self.max_depth(), "Tile key too deep");
            return Err(DatasetError::DepthExceeded {
                key: key.clone(),
                max_depth: self.max_depth(),
            });
        }

        let bytes = read(self.source.as_ref(), &Resource::Tile(key.clone()))?;
        let tile = format::parse_tile(key.clone(), &bytes).inspect_err(|e| {
            tracing::warn!(error = %e, "Failed to parse tile");
        })?;

        tracing::debug!(
            bytes = bytes.len(),
            features = tile.features().len(),
            "Tile loaded"
        );

        Ok(tile)
    }
}

fn read(source: &dyn TileSource, resource: &Resource) -> DatasetResult<Vec<u8>> {
    source.read(resource).map_err(|e| {
        tracing::warn!(resource = %resource, error = %e, "Failed to read dataset");
        match resource {
            Resource::Tile(key) if e.kind() == io::ErrorKind::NotFound => {
                DatasetError::MissingTile { key: key.clone() }
            }
            _ => DatasetError::Io {
                resource: resource.clone(),
                source: e,
            },
        }
    })
}
