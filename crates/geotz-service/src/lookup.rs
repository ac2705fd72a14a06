use std::collections::BTreeSet;
use std::path::PathBuf;
use std::sync::Arc;
use std::sync::atomic::AtomicBool;

use geo::Coord;
use geotz_core::config::{OceanMode, Settings};
use geotz_core::{Coordinate, ZoneId};
use geotz_data::{DirectorySource, TileLoader, TileSource};

use crate::cache::{CacheStats, PrecacheReport, TileCache};
use crate::error::LookupResult;
use crate::{matcher, navigator, ocean};

/// Resolves coordinates to IANA timezone identifiers.
///
/// Cheap to share: wrap it in an `Arc` and call [`GeoTz::lookup`] from as
/// many threads as needed. Tiles are loaded into the shared cache on first
/// use.
#[derive(Debug)]
pub struct GeoTz {
    cache: TileCache,
    ocean: OceanMode,
}

impl GeoTz {
    /// ## Summary
    /// Opens the dataset stored under `path`.
    ///
    /// ## Errors
    /// Returns `LookupError::DatasetCorruption` if the manifest is missing or
    /// invalid.
    pub fn open(path: impl Into<PathBuf>) -> LookupResult<Self> {
        Self::with_source(Arc::new(DirectorySource::new(path)))
    }

    /// ## Summary
    /// Opens a dataset read through any [`TileSource`].
    ///
    /// ## Errors
    /// Returns `LookupError::DatasetCorruption` if the manifest is missing or
    /// invalid.
    pub fn with_source(source: Arc<dyn TileSource>) -> LookupResult<Self> {
        let loader = TileLoader::open(source)?;
        Ok(Self {
            cache: TileCache::new(loader),
            ocean: OceanMode::default(),
        })
    }

    /// ## Summary
    /// Builds an engine as described by loaded [`Settings`], precaching the
    /// dataset if configured to.
    ///
    /// ## Errors
    /// Returns `LookupError::DatasetCorruption` if the dataset cannot be
    /// opened or a tile fails to load during precaching.
    #[tracing::instrument(skip(settings), fields(path = %settings.dataset.path.display()))]
    pub fn from_settings(settings: &Settings) -> LookupResult<Self> {
        let geotz =
            Self::open(settings.dataset.path.clone())?.with_ocean_mode(settings.lookup.ocean);
        if settings.lookup.precache {
            geotz.precache()?;
        }
        tracing::info!(ocean = ?geotz.ocean, "Timezone lookup ready");
        Ok(geotz)
    }

    #[must_use]
    pub const fn with_ocean_mode(mut self, ocean: OceanMode) -> Self {
        self.ocean = ocean;
        self
    }

    #[must_use]
    pub const fn ocean_mode(&self) -> OceanMode {
        self.ocean
    }

    /// ## Summary
    /// Every zone whose boundary contains the point, sorted and without
    /// duplicates. Out-of-range input is clamped. A point on the antimeridian
    /// is tested at both `-180` and `180`. When no boundary contains the
    /// point the result is the single ocean zone.
    ///
    /// ## Errors
    /// Returns `LookupError::InvalidCoordinate` for `NaN` input and
    /// `LookupError::DatasetCorruption` if a needed tile cannot be loaded.
    pub fn lookup(&self, latitude: f64, longitude: f64) -> LookupResult<Vec<String>> {
        let coordinate = Coordinate::new(latitude, longitude)?;
        self.lookup_coordinate(&coordinate)
    }

    /// ## Summary
    /// [`GeoTz::lookup`] for an already validated coordinate.
    ///
    /// ## Errors
    /// Returns `LookupError::DatasetCorruption` if a needed tile cannot be
    /// loaded.
    #[tracing::instrument(skip(self), fields(coordinate = %coordinate))]
    pub fn lookup_coordinate(&self, coordinate: &Coordinate) -> LookupResult<Vec<String>> {
        let mut zones: BTreeSet<ZoneId> = BTreeSet::new();
        let mut tiles = 0;
        for view in std::iter::once(*coordinate).chain(coordinate.antimeridian_twin()) {
            let path = navigator::resolve(&self.cache, &view)?;
            let point = Coord {
                x: view.longitude(),
                y: view.latitude(),
            };

            zones.extend(path.exact_zones);
            for tile in &path.tiles {
                zones.extend(
                    matcher::matching_zones(point, tile.features())
                        .into_iter()
                        .cloned(),
                );
            }
            tiles += path.tiles.len();
        }

        if zones.is_empty() {
            let zone = ocean::ocean_zone(self.ocean, coordinate);
            tracing::debug!(zone = %zone, "No boundary matched, using ocean zone");
            return Ok(vec![zone.to_string()]);
        }

        tracing::debug!(tiles, zones = zones.len(), "Coordinate resolved");
        Ok(zones.iter().map(ToString::to_string).collect())
    }

    /// ## Summary
    /// Loads the whole dataset into the cache. See [`TileCache::precache`].
    ///
    /// ## Errors
    /// Returns `LookupError::DatasetCorruption` if any tile fails to load.
    pub fn precache(&self) -> LookupResult<PrecacheReport> {
        Ok(self.cache.precache()?)
    }

    /// ## Summary
    /// Cancellable [`GeoTz::precache`]; stops once `cancel` is set.
    ///
    /// ## Errors
    /// Returns `LookupError::DatasetCorruption` if any tile fails to load.
    pub fn precache_until(&self, cancel: &AtomicBool) -> LookupResult<PrecacheReport> {
        Ok(self.cache.precache_until(cancel)?)
    }

    #[must_use]
    pub fn cache_stats(&self) -> CacheStats {
        self.cache.stats()
    }

    #[must_use]
    pub const fn cache(&self) -> &TileCache {
        &self.cache
    }
}
