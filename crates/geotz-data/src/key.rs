//! Quadtree addressing of dataset tiles.

use std::fmt;
use std::str::FromStr;

use geotz_core::Coordinate;
use geotz_core::constants::{MAX_LATITUDE, MAX_LONGITUDE, MIN_LATITUDE, MIN_LONGITUDE};

/// One quarter of a tile, split at the tile's centre.
///
/// Points on a split line belong to the northern and eastern quarters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Quadrant {
    /// `a`
    NorthEast,
    /// `b`
    NorthWest,
    /// `c`
    SouthWest,
    /// `d`
    SouthEast,
}

impl Quadrant {
    pub const ALL: [Self; 4] = [
        Self::NorthEast,
        Self::NorthWest,
        Self::SouthWest,
        Self::SouthEast,
    ];

    #[must_use]
    pub const fn letter(self) -> char {
        match self {
            Self::NorthEast => 'a',
            Self::NorthWest => 'b',
            Self::SouthWest => 'c',
            Self::SouthEast => 'd',
        }
    }

    #[must_use]
    pub const fn from_letter(letter: char) -> Option<Self> {
        match letter {
            'a' => Some(Self::NorthEast),
            'b' => Some(Self::NorthWest),
            'c' => Some(Self::SouthWest),
            'd' => Some(Self::SouthEast),
            _ => None,
        }
    }

    /// Position of this quadrant in [`Quadrant::ALL`].
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::NorthEast => 0,
            Self::NorthWest => 1,
            Self::SouthWest => 2,
            Self::SouthEast => 3,
        }
    }

    const fn is_north(self) -> bool {
        matches!(self, Self::NorthEast | Self::NorthWest)
    }

    const fn is_east(self) -> bool {
        matches!(self, Self::NorthEast | Self::SouthEast)
    }
}

/// Address of a tile: the path of quadrants taken from the root tile.
///
/// The empty path is the root, which covers the whole globe. Each step halves
/// both the latitude and longitude span, so the key alone determines the
/// tile's bounds and a child key is always strictly deeper than its parent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TileKey(Vec<Quadrant>);

impl TileKey {
    #[must_use]
    pub const fn root() -> Self {
        Self(Vec::new())
    }

    #[must_use]
    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of delegation steps from the root.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn quadrants(&self) -> &[Quadrant] {
        &self.0
    }

    #[must_use]
    pub fn child(&self, quadrant: Quadrant) -> Self {
        let mut path = Vec::with_capacity(self.0.len() + 1);
        path.extend_from_slice(&self.0);
        path.push(quadrant);
        Self(path)
    }

    /// ## Summary
    /// The area this tile covers.
    #[must_use]
    pub fn bounds(&self) -> TileBounds {
        self.0
            .iter()
            .fold(TileBounds::WORLD, |bounds, quadrant| bounds.quadrant(*quadrant))
    }
}

impl fmt::Display for TileKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_root() {
            return f.write_str("root");
        }
        for quadrant in &self.0 {
            write!(f, "{}", quadrant.letter())?;
        }
        Ok(())
    }
}

/// Error returned when parsing a tile key with a letter outside `a`-`d`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Invalid tile key: {0}")]
pub struct TileKeyParseError(String);

impl FromStr for TileKey {
    type Err = TileKeyParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "root" {
            return Ok(Self::root());
        }
        s.chars()
            .map(Quadrant::from_letter)
            .collect::<Option<Vec<_>>>()
            .map(Self)
            .ok_or_else(|| TileKeyParseError(s.to_string()))
    }
}

/// A latitude/longitude box, inclusive on all sides.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TileBounds {
    pub south: f64,
    pub north: f64,
    pub west: f64,
    pub east: f64,
}

impl TileBounds {
    pub const WORLD: Self = Self {
        south: MIN_LATITUDE,
        north: MAX_LATITUDE,
        west: MIN_LONGITUDE,
        east: MAX_LONGITUDE,
    };

    #[must_use]
    pub fn mid_latitude(&self) -> f64 {
        f64::midpoint(self.south, self.north)
    }

    #[must_use]
    pub fn mid_longitude(&self) -> f64 {
        f64::midpoint(self.west, self.east)
    }

    /// ## Summary
    /// Picks the quadrant of this box a coordinate falls in. Pure bucketing
    /// against the centre lines; the coordinate need not lie inside the box.
    #[must_use]
    pub fn quadrant_of(&self, coordinate: &Coordinate) -> Quadrant {
        let north = coordinate.latitude() >= self.mid_latitude();
        let east = coordinate.longitude() >= self.mid_longitude();
        match (north, east) {
            (true, true) => Quadrant::NorthEast,
            (true, false) => Quadrant::NorthWest,
            (false, false) => Quadrant::SouthWest,
            (false, true) => Quadrant::SouthEast,
        }
    }

    /// The sub-box covered by one quadrant.
    #[must_use]
    pub fn quadrant(&self, quadrant: Quadrant) -> Self {
        let mid_lat = self.mid_latitude();
        let mid_lon = self.mid_longitude();
        let (south, north) = if quadrant.is_north() {
            (mid_lat, self.north)
        } else {
            (self.south, mid_lat)
        };
        let (west, east) = if quadrant.is_east() {
            (mid_lon, self.east)
        } else {
            (self.west, mid_lon)
        };
        Self {
            south,
            north,
            west,
            east,
        }
    }

    #[must_use]
    pub fn contains(&self, coordinate: &Coordinate) -> bool {
        (self.south..=self.north).contains(&coordinate.latitude())
            && (self.west..=self.east).contains(&coordinate.longitude())
    }
}
