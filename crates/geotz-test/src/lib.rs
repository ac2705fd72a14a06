//! geotz - integration test support.
//!
//! Locates the fixture dataset shipped with this crate and opens engines over
//! it, so tests in `tests/` exercise the real directory layout end to end.

use std::path::PathBuf;

use geotz_service::{GeoTz, LookupResult};

pub use geotz_core::config::{OceanMode, Settings};
pub use geotz_data::{DirectorySource, MemorySource, Resource, TileKey, TileSource};
pub use geotz_service::{CacheStats, LookupError, PrecacheReport};

/// Number of tiles in the fixture dataset.
pub const FIXTURE_TILE_COUNT: usize = 10;

/// Directory holding `manifest.json` and `tiles/` for the fixture dataset.
#[must_use]
pub fn fixture_dataset_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("fixtures")
        .join("dataset")
}

/// ## Summary
/// Opens a fresh engine over the fixture dataset with an empty cache.
///
/// ## Errors
/// Returns an error if the fixture manifest cannot be read.
pub fn open_fixture() -> LookupResult<GeoTz> {
    GeoTz::open(fixture_dataset_path())
}

/// ## Summary
/// Reads one fixture file into memory, keyed the same way a
/// [`DirectorySource`] would find it.
///
/// ## Errors
/// Returns an error if the file does not exist.
pub fn read_fixture(resource: &Resource) -> std::io::Result<Vec<u8>> {
    DirectorySource::new(fixture_dataset_path()).read(resource)
}
