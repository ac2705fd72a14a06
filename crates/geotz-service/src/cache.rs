//! Shared tile cache.
//!
//! Every key maps to a once-cell so concurrent readers of the same missing
//! tile block on a single load instead of racing the source. A failed load
//! leaves its cell empty and the next caller retries.

use std::collections::{HashMap, VecDeque};
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, PoisonError, RwLock};

use geotz_data::{DatasetResult, Tile, TileKey, TileLoader};
use once_cell::sync::OnceCell;

type Slot = Arc<OnceCell<Arc<Tile>>>;

/// Snapshot of cache counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheStats {
    /// Tiles currently held in memory.
    pub cached_tiles: usize,
    /// Calls made into the loader, including failed ones.
    pub loads: u64,
    /// Requests served without touching the loader.
    pub hits: u64,
    /// Whether a precache pass has run to completion.
    pub precached: bool,
}

/// Outcome of a precache pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrecacheReport {
    /// Tiles visited by this pass, whether or not they were already cached.
    pub tiles: usize,
    /// `false` when the pass was cancelled before reaching every tile.
    pub complete: bool,
}

/// Process-lifetime cache of parsed tiles, safe to share between threads.
#[derive(Debug)]
pub struct TileCache {
    loader: TileLoader,
    slots: RwLock<HashMap<TileKey, Slot>>,
    loads: AtomicU64,
    hits: AtomicU64,
    precached: AtomicBool,
}

impl TileCache {
    #[must_use]
    pub fn new(loader: TileLoader) -> Self {
        Self {
            loader,
            slots: RwLock::new(HashMap::new()),
            loads: AtomicU64::new(0),
            hits: AtomicU64::new(0),
            precached: AtomicBool::new(false),
        }
    }

    #[must_use]
    pub const fn loader(&self) -> &TileLoader {
        &self.loader
    }

    /// ## Summary
    /// Returns the tile for `key`, loading it on first request.
    ///
    /// Concurrent requests for the same uncached key wait for one load rather
    /// than issuing their own.
    ///
    /// ## Errors
    /// Returns the loader's error if the tile cannot be read or parsed. The
    /// failure is not cached.
    pub fn get(&self, key: &TileKey) -> DatasetResult<Arc<Tile>> {
        let slot = self.slot(key);

        if let Some(tile) = slot.get() {
            self.hits.fetch_add(1, Ordering::Relaxed);
            return Ok(Arc::clone(tile));
        }

        let tile = slot.get_or_try_init(|| {
            self.loads.fetch_add(1, Ordering::Relaxed);
            self.loader.load(key).map(Arc::new)
        })?;

        Ok(Arc::clone(tile))
    }

    fn slot(&self, key: &TileKey) -> Slot {
        if let Some(slot) = self
            .slots
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(key)
        {
            return Arc::clone(slot);
        }

        let mut slots = self.slots.write().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(slots.entry(key.clone()).or_default())
    }

    /// ## Summary
    /// Loads every tile reachable from the root.
    ///
    /// Calling this again after a complete pass is a no-op.
    ///
    /// ## Errors
    /// Returns the first load error encountered. Tiles loaded before the
    /// failure stay cached.
    pub fn precache(&self) -> DatasetResult<PrecacheReport> {
        self.precache_until(&AtomicBool::new(false))
    }

    /// ## Summary
    /// Like [`TileCache::precache`], but checks `cancel` before each tile and
    /// stops early once it is set. Tiles already loaded stay cached and a
    /// later pass resumes from the root without reloading them.
    ///
    /// ## Errors
    /// Returns the first load error encountered.
    #[tracing::instrument(skip_all)]
    pub fn precache_until(&self, cancel: &AtomicBool) -> DatasetResult<PrecacheReport> {
        if self.precached.load(Ordering::Acquire) {
            tracing::debug!("Dataset already precached");
            return Ok(PrecacheReport {
                tiles: 0,
                complete: true,
            });
        }

        let mut queue = VecDeque::from([TileKey::root()]);
        let mut tiles = 0;

        while let Some(key) = queue.pop_front() {
            if cancel.load(Ordering::Relaxed) {
                tracing::info!(tiles, "Precache cancelled");
                return Ok(PrecacheReport {
                    tiles,
                    complete: false,
                });
            }

            let tile = self.get(&key)?;
            tiles += 1;
            queue.extend(tile.delegated_children());
        }

        self.precached.store(true, Ordering::Release);
        tracing::info!(tiles, "Precache complete");

        Ok(PrecacheReport {
            tiles,
            complete: true,
        })
    }

    #[must_use]
    pub fn stats(&self) -> CacheStats {
        let cached_tiles = self
            .slots
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .values()
            .filter(|slot| slot.get().is_some())
            .count();

        CacheStats {
            cached_tiles,
            loads: self.loads.load(Ordering::Relaxed),
            hits: self.hits.load(Ordering::Relaxed),
            precached: self.precached.load(Ordering::Acquire),
        }
    }

    /// Tiles currently held, in key order.
    #[must_use]
    pub fn cached_tiles(&self) -> Vec<Arc<Tile>> {
        let mut tiles: Vec<Arc<Tile>> = self
            .slots
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .values()
            .filter_map(|slot| slot.get().map(Arc::clone))
            .collect();
        tiles.sort_by(|a, b| a.key().cmp(b.key()));
        tiles
    }

    /// Keys of the tiles currently held, in key order.
    #[must_use]
    pub fn cached_keys(&self) -> Vec<TileKey> {
        let mut keys: Vec<TileKey> = self
            .slots
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .filter(|(_, slot)| slot.get().is_some())
            .map(|(key, _)| key.clone())
            .collect();
        keys.sort();
        keys
    }
}
