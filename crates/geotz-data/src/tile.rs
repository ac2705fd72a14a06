//! Parsed tile content.

use geo::{Coord, LineString, MultiPolygon, Polygon};
use geotz_core::ZoneId;
use serde::Deserialize;

use crate::key::{Quadrant, TileKey};

/// Which side of a dividing line, walking its vertices in order, a zone
/// occupies.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    #[default]
    Left,
    Right,
}

/// A line that splits its tile in two, with the zone on one side of it.
///
/// The dataset uses these where an area boundary degenerates into a line,
/// e.g. meridians converging on the poles.
#[derive(Debug, Clone, PartialEq)]
pub struct DividingLine {
    pub line: LineString<f64>,
    pub side: Side,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Geometry {
    Polygon(Polygon<f64>),
    MultiPolygon(MultiPolygon<f64>),
    Line(DividingLine),
    Collection(Vec<Geometry>),
}

impl Geometry {
    /// ## Summary
    /// Every vertex of the geometry, rings and members included.
    #[must_use]
    pub fn vertices(&self) -> Vec<Coord<f64>> {
        let mut out = Vec::new();
        self.collect_vertices(&mut out);
        out
    }

    fn collect_vertices(&self, out: &mut Vec<Coord<f64>>) {
        match self {
            Self::Polygon(polygon) => push_polygon(polygon, out),
            Self::MultiPolygon(multi) => {
                for polygon in multi {
                    push_polygon(polygon, out);
                }
            }
            Self::Line(divider) => out.extend(divider.line.coords().copied()),
            Self::Collection(members) => {
                for member in members {
                    member.collect_vertices(out);
                }
            }
        }
    }

    /// Whether this geometry is, or contains, a dividing line or collection.
    #[must_use]
    pub const fn is_line_or_collection(&self) -> bool {
        matches!(self, Self::Line(_) | Self::Collection(_))
    }
}

fn push_polygon(polygon: &Polygon<f64>, out: &mut Vec<Coord<f64>>) {
    out.extend(polygon.exterior().coords().copied());
    for interior in polygon.interiors() {
        out.extend(interior.coords().copied());
    }
}

/// One geometry tagged with the zone it belongs to.
#[derive(Debug, Clone, PartialEq)]
pub struct Feature {
    pub zone: ZoneId,
    pub geometry: Geometry,
}

/// What a tile says about one of its quadrants beyond its own features.
#[derive(Debug, Clone, PartialEq)]
pub enum QuadrantSlot {
    /// The quadrant lies entirely within these zones.
    Zones(Vec<ZoneId>),
    /// The quadrant's geometry lives in the child tile.
    Delegate,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Tile {
    key: TileKey,
    features: Vec<Feature>,
    quadrants: [Option<QuadrantSlot>; 4],
}

impl Tile {
    #[must_use]
    pub const fn new(
        key: TileKey,
        features: Vec<Feature>,
        quadrants: [Option<QuadrantSlot>; 4],
    ) -> Self {
        Self {
            key,
            features,
            quadrants,
        }
    }

    #[must_use]
    pub const fn key(&self) -> &TileKey {
        &self.key
    }

    #[must_use]
    pub fn features(&self) -> &[Feature] {
        &self.features
    }

    #[must_use]
    pub const fn slot(&self, quadrant: Quadrant) -> Option<&QuadrantSlot> {
        self.quadrants[quadrant.index()].as_ref()
    }

    /// Keys of the child tiles this tile delegates to.
    pub fn delegated_children(&self) -> impl Iterator<Item = TileKey> + '_ {
        Quadrant::ALL.into_iter().filter_map(|quadrant| {
            matches!(self.slot(quadrant), Some(QuadrantSlot::Delegate))
                .then(|| self.key.child(quadrant))
        })
    }

    /// A leaf tile delegates nothing.
    #[must_use]
    pub fn is_leaf(&self) -> bool {
        self.delegated_children().next().is_none()
    }
}
