use std::fmt;
use std::sync::Arc;

use serde::Deserialize;

use crate::constants::{MAX_LATITUDE, MAX_LONGITUDE, MIN_LATITUDE, MIN_LONGITUDE};
use crate::error::{CoreError, CoreResult};

/// A point on the globe in degrees.
///
/// Construction is lenient: out-of-range values are clamped into
/// `[-90, 90]` x `[-180, 180]` instead of rejected. Longitude `180` names the
/// same meridian as `-180` and is stored as `-180`, so every coordinate has
/// exactly one representation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinate {
    latitude: f64,
    longitude: f64,
    clamped_longitude: f64,
}

impl Coordinate {
    /// ## Summary
    /// Builds a coordinate, clamping latitude and longitude into range.
    ///
    /// ## Errors
    /// Returns `CoreError::InvalidInput` if either value is `NaN`.
    pub fn new(latitude: f64, longitude: f64) -> CoreResult<Self> {
        if latitude.is_nan() || longitude.is_nan() {
            return Err(CoreError::InvalidInput(format!(
                "coordinate ({latitude}, {longitude}) is not a number"
            )));
        }

        let latitude = latitude.clamp(MIN_LATITUDE, MAX_LATITUDE);
        let clamped_longitude = longitude.clamp(MIN_LONGITUDE, MAX_LONGITUDE);
        let longitude = if clamped_longitude >= MAX_LONGITUDE {
            MIN_LONGITUDE
        } else {
            clamped_longitude
        };

        Ok(Self {
            latitude,
            longitude,
            clamped_longitude,
        })
    }

    #[must_use]
    pub const fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Longitude in `[-180, 180)`, or exactly `180` for an
    /// [`Coordinate::antimeridian_twin`].
    #[must_use]
    pub const fn longitude(&self) -> f64 {
        self.longitude
    }

    /// ## Summary
    /// The caller's longitude after clamping but before the antimeridian is
    /// folded, i.e. `180` stays `180`.
    #[must_use]
    pub const fn clamped_longitude(&self) -> f64 {
        self.clamped_longitude
    }

    /// ## Summary
    /// For a coordinate on the antimeridian, the same point seen from the
    /// east edge of the map (longitude `180`). Boundaries that follow the
    /// antimeridian may be drawn on either edge, so both views are tested.
    /// `None` anywhere else.
    #[must_use]
    pub fn antimeridian_twin(&self) -> Option<Self> {
        (self.longitude <= MIN_LONGITUDE).then_some(Self {
            longitude: MAX_LONGITUDE,
            ..*self
        })
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.latitude, self.longitude)
    }
}

/// An IANA timezone identifier such as `America/Los_Angeles`.
///
/// Tiles repeat the same handful of names thousands of times, so the string
/// is shared rather than copied.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize)]
#[serde(from = "String")]
pub struct ZoneId(Arc<str>);

impl ZoneId {
    #[must_use]
    pub fn new(name: &str) -> Self {
        Self(Arc::from(name))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for ZoneId {
    fn from(name: String) -> Self {
        Self(Arc::from(name))
    }
}

impl From<&str> for ZoneId {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl AsRef<str> for ZoneId {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl PartialEq<str> for ZoneId {
    fn eq(&self, other: &str) -> bool {
        self.as_str() == other
    }
}

impl PartialEq<&str> for ZoneId {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}

impl fmt::Display for ZoneId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
