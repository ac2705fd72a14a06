//! Coordinate to timezone resolution.
//!
//! [`GeoTz`] is the entry point. It owns a [`TileCache`] over one boundary
//! dataset and answers `lookup(latitude, longitude)` with every zone whose
//! boundary contains the point, or an ocean zone when none does:
//!
//! ```no_run
//! use geotz_service::GeoTz;
//!
//! # fn main() -> Result<(), geotz_service::LookupError> {
//! let geotz = GeoTz::open("/usr/share/geotz")?;
//! let zones = geotz.lookup(47.650_499, -122.350_07)?;
//! assert!(zones.iter().any(|z| z == "America/Los_Angeles"));
//! # Ok(())
//! # }
//! ```
//!
//! Tiles are loaded on first use and kept for the life of the engine. Batch
//! callers can call [`GeoTz::precache`] up front to load the whole dataset
//! once instead of paying I/O on the first lookups.

pub mod cache;
pub mod error;
pub mod lookup;
pub mod matcher;
pub mod navigator;
pub mod ocean;

pub use cache::{CacheStats, PrecacheReport, TileCache};
pub use error::{LookupError, LookupResult};
pub use lookup::GeoTz;
