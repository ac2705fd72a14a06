//! Serde mirror of the stored JSON. Nothing here is validated; see the parent
//! module for the conversion into [`crate::tile::Tile`].

use geotz_core::ZoneId;
use serde::Deserialize;

use crate::tile::Side;

#[derive(Debug, Clone, Deserialize)]
pub struct Manifest {
    pub format_version: u32,
    pub max_depth: usize,
}

/// A GeoJSON `FeatureCollection` extended with quadrant slots.
#[derive(Debug, Deserialize)]
pub struct TileDocument {
    #[serde(default)]
    pub features: Vec<FeatureDocument>,
    #[serde(default)]
    pub quadrants: QuadrantsDocument,
}

#[derive(Debug, Default, Deserialize)]
pub struct QuadrantsDocument {
    pub a: Option<SlotDocument>,
    pub b: Option<SlotDocument>,
    pub c: Option<SlotDocument>,
    pub d: Option<SlotDocument>,
}

#[derive(Debug, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SlotDocument {
    Zones { zones: Vec<ZoneId> },
    Tile,
}

#[derive(Debug, Deserialize)]
pub struct FeatureDocument {
    pub properties: PropertiesDocument,
    pub geometry: GeometryDocument,
}

#[derive(Debug, Deserialize)]
pub struct PropertiesDocument {
    pub tzid: ZoneId,
    #[serde(default)]
    pub side: Side,
}

/// `[longitude, latitude, ...]`; extra ordinates are ignored.
pub type Position = Vec<f64>;

#[derive(Debug, Deserialize)]
#[serde(tag = "type")]
pub enum GeometryDocument {
    Polygon {
        coordinates: Vec<Vec<Position>>,
    },
    MultiPolygon {
        coordinates: Vec<Vec<Vec<Position>>>,
    },
    LineString {
        coordinates: Vec<Position>,
    },
    MultiLineString {
        coordinates: Vec<Vec<Position>>,
    },
    GeometryCollection {
        geometries: Vec<GeometryDocument>,
    },
}
