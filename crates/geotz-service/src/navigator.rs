//! Descent through the tile quadtree.

use std::sync::Arc;

use geotz_core::{Coordinate, ZoneId};
use geotz_data::{DatasetError, DatasetResult, QuadrantSlot, Tile, TileBounds, TileKey};

use crate::cache::TileCache;

/// Everything the descent learned about a coordinate.
#[derive(Debug, Clone, Default)]
pub struct TilePath {
    /// Visited tiles, root first. Each one's local features are candidates.
    pub tiles: Vec<Arc<Tile>>,
    /// Zones that cover the coordinate's whole quadrant, so they match
    /// without any geometry test.
    pub exact_zones: Vec<ZoneId>,
}

/// ## Summary
/// Walks from the root tile down to the deepest tile covering `coordinate`.
///
/// At each tile the coordinate picks a quadrant. An empty quadrant or one
/// with precomputed zones ends the walk; a delegated quadrant continues into
/// the child tile.
///
/// ## Errors
/// Returns `DatasetError::DepthExceeded` if the dataset delegates below its
/// declared maximum depth, or any error from loading a tile.
#[tracing::instrument(skip(cache), fields(coordinate = %coordinate))]
pub fn resolve(cache: &TileCache, coordinate: &Coordinate) -> DatasetResult<TilePath> {
    let max_depth = cache.loader().max_depth();
    let mut path = TilePath::default();
    let mut key = TileKey::root();
    let mut bounds = TileBounds::WORLD;

    loop {
        let tile = cache.get(&key)?;
        let quadrant = bounds.quadrant_of(coordinate);

        let next = match tile.slot(quadrant) {
            None => None,
            Some(QuadrantSlot::Zones(zones)) => {
                path.exact_zones.extend_from_slice(zones);
                None
            }
            Some(QuadrantSlot::Delegate) => Some(key.child(quadrant)),
        };
        tracing::trace!(key = %key, quadrant = ?quadrant, "Visited tile");
        path.tiles.push(tile);

        let Some(child) = next else {
            return Ok(path);
        };
        if child.depth() > max_depth {
            tracing::warn!(key = %child, max_depth, "Dataset delegates past its maximum depth");
            return Err(DatasetError::DepthExceeded {
                key: child,
                max_depth,
            });
        }

        bounds = bounds.quadrant(quadrant);
        key = child;
    }
}
