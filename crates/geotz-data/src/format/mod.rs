//! Dataset file format.
//!
//! The manifest is a small JSON object; every tile is a GeoJSON
//! `FeatureCollection` whose features carry the zone in `properties.tzid`,
//! extended with an optional `quadrants` object describing the four quarters
//! of the tile:
//!
//! ```json
//! {
//!   "type": "FeatureCollection",
//!   "features": [
//!     { "type": "Feature",
//!       "properties": { "tzid": "Antarctica/Troll", "side": "left" },
//!       "geometry": { "type": "LineString", "coordinates": [[0, -60], [0, -90]] } }
//!   ],
//!   "quadrants": {
//!     "a": { "kind": "tile" },
//!     "b": { "kind": "zones", "zones": ["America/Cambridge_Bay"] }
//!   }
//! }
//! ```

pub mod model;

use geo::{Coord, LineString, MultiPolygon, Polygon};
use geotz_core::constants::{DATASET_FORMAT_VERSION, MAX_SUPPORTED_DEPTH};

use crate::error::{DatasetError, DatasetResult};
use crate::key::TileKey;
use crate::source::Resource;
use crate::tile::{DividingLine, Feature, Geometry, QuadrantSlot, Side, Tile};
use model::{GeometryDocument, Manifest, Position, SlotDocument, TileDocument};

/// ## Summary
/// Parses and validates the dataset manifest.
///
/// ## Errors
/// Returns `DatasetError::Malformed` if the bytes are not a manifest, or
/// `DatasetError::Manifest` for an unsupported version or depth.
pub fn parse_manifest(bytes: &[u8]) -> DatasetResult<Manifest> {
    let manifest: Manifest =
        serde_json::from_slice(bytes).map_err(|source| DatasetError::Malformed {
            resource: Resource::Manifest,
            source,
        })?;

    if manifest.format_version != DATASET_FORMAT_VERSION {
        return Err(DatasetError::Manifest(format!(
            "unsupported format version {} (expected {DATASET_FORMAT_VERSION})",
            manifest.format_version
        )));
    }
    if manifest.max_depth > MAX_SUPPORTED_DEPTH {
        return Err(DatasetError::Manifest(format!(
            "max_depth {} exceeds the supported {MAX_SUPPORTED_DEPTH}",
            manifest.max_depth
        )));
    }

    Ok(manifest)
}

/// ## Summary
/// Parses one tile document.
///
/// ## Errors
/// Returns `DatasetError::Malformed` if the JSON does not follow the tile
/// schema, or `DatasetError::InvalidGeometry` if a position is short or not
/// finite.
pub fn parse_tile(key: TileKey, bytes: &[u8]) -> DatasetResult<Tile> {
    let document: TileDocument =
        serde_json::from_slice(bytes).map_err(|source| DatasetError::Malformed {
            resource: Resource::Tile(key.clone()),
            source,
        })?;

    let features = document
        .features
        .into_iter()
        .map(|feature| {
            let side = feature.properties.side;
            Ok(Feature {
                zone: feature.properties.tzid,
                geometry: convert_geometry(&key, feature.geometry, side)?,
            })
        })
        .collect::<DatasetResult<Vec<_>>>()?;

    let quadrants = document.quadrants;
    let slots = [quadrants.a, quadrants.b, quadrants.c, quadrants.d].map(|slot| {
        slot.map(|slot| match slot {
            SlotDocument::Zones { zones } => QuadrantSlot::Zones(zones),
            SlotDocument::Tile => QuadrantSlot::Delegate,
        })
    });

    Ok(Tile::new(key, features, slots))
}

fn convert_geometry(
    key: &TileKey,
    document: GeometryDocument,
    side: Side,
) -> DatasetResult<Geometry> {
    Ok(match document {
        GeometryDocument::Polygon { coordinates } => {
            Geometry::Polygon(convert_polygon(key, coordinates)?)
        }
        GeometryDocument::MultiPolygon { coordinates } => Geometry::MultiPolygon(MultiPolygon::new(
            coordinates
                .into_iter()
                .map(|rings| convert_polygon(key, rings))
                .collect::<DatasetResult<_>>()?,
        )),
        GeometryDocument::LineString { coordinates } => Geometry::Line(DividingLine {
            line: convert_line(key, coordinates)?,
            side,
        }),
        GeometryDocument::MultiLineString { coordinates } => Geometry::Collection(
            coordinates
                .into_iter()
                .map(|line| {
                    Ok(Geometry::Line(DividingLine {
                        line: convert_line(key, line)?,
                        side,
                    }))
                })
                .collect::<DatasetResult<_>>()?,
        ),
        GeometryDocument::GeometryCollection { geometries } => Geometry::Collection(
            geometries
                .into_iter()
                .map(|member| convert_geometry(key, member, side))
                .collect::<DatasetResult<_>>()?,
        ),
    })
}

fn convert_polygon(key: &TileKey, rings: Vec<Vec<Position>>) -> DatasetResult<Polygon<f64>> {
    let mut rings = rings
        .into_iter()
        .map(|ring| convert_line(key, ring))
        .collect::<DatasetResult<Vec<_>>>()?
        .into_iter();

    // A polygon without rings is legal and simply matches nothing.
    let exterior = rings.next().unwrap_or_else(|| LineString::new(Vec::new()));
    Ok(Polygon::new(exterior, rings.collect()))
}

fn convert_line(key: &TileKey, positions: Vec<Position>) -> DatasetResult<LineString<f64>> {
    positions
        .into_iter()
        .map(|position| convert_position(key, &position))
        .collect::<DatasetResult<Vec<_>>>()
        .map(LineString::new)
}

fn convert_position(key: &TileKey, position: &[f64]) -> DatasetResult<Coord<f64>> {
    let &[x, y, ..] = position else {
        return Err(DatasetError::InvalidGeometry {
            key: key.clone(),
            reason: format!("position {position:?} has fewer than two ordinates"),
        });
    };
    if !x.is_finite() || !y.is_finite() {
        return Err(DatasetError::InvalidGeometry {
            key: key.clone(),
            reason: format!("position {position:?} is not finite"),
        });
    }
    Ok(Coord { x, y })
}
