//! One engine shared between threads.

use std::collections::HashMap;
use std::io;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Duration;

use super::helpers::*;

const PLACES: [(f64, f64); 8] = [
    (47.650_499, -122.350_07),
    (49.0, -120.0),
    (35.689_5, 139.691_7),
    (1.44, 104.04),
    (69.117, -105.06),
    (-75.0, 0.0),
    (52.0, 180.0),
    (0.0, -30.0),
];

/// Fixture copy that counts tile reads and slows each one down so
/// concurrent lookups pile up on the same cold tiles.
#[derive(Debug)]
struct SlowSource {
    inner: MemorySource,
    reads: Mutex<HashMap<Resource, usize>>,
}

impl SlowSource {
    fn new() -> Self {
        Self {
            inner: fixture_source_with(&[]),
            reads: Mutex::new(HashMap::new()),
        }
    }

    fn max_reads(&self) -> usize {
        self.reads
            .lock()
            .expect("reads lock")
            .values()
            .copied()
            .max()
            .unwrap_or(0)
    }
}

impl TileSource for SlowSource {
    fn read(&self, resource: &Resource) -> io::Result<Vec<u8>> {
        *self
            .reads
            .lock()
            .expect("reads lock")
            .entry(resource.clone())
            .or_default() += 1;
        thread::sleep(Duration::from_millis(5));
        self.inner.read(resource)
    }
}

/// ## Summary
/// Parallel lookups agree with sequential ones and never load a tile twice.
#[test_log::test]
fn parallel_lookups_share_one_cache() {
    let expected: Vec<Vec<String>> = {
        let reference = fixture();
        PLACES
            .iter()
            .map(|&(lat, lon)| zones(&reference, lat, lon))
            .collect()
    };

    let source = Arc::new(SlowSource::new());
    let shared: Arc<dyn TileSource> = source.clone();
    let geotz = Arc::new(GeoTz::with_source(shared).expect("manifest is intact"));

    thread::scope(|s| {
        for worker in 0..8 {
            let geotz = Arc::clone(&geotz);
            let expected = &expected;
            s.spawn(move || {
                for round in 0..PLACES.len() {
                    let i = (worker + round) % PLACES.len();
                    let (lat, lon) = PLACES[i];
                    assert_eq!(zones(&geotz, lat, lon), expected[i], "({lat}, {lon})");
                }
            });
        }
    });

    assert_eq!(source.max_reads(), 1);
    let stats = geotz.cache_stats();
    assert_eq!(stats.loads, stats.cached_tiles as u64);
}

/// ## Summary
/// Precache running alongside lookups still loads each tile exactly once.
#[test]
fn precache_alongside_lookups() {
    let source = Arc::new(SlowSource::new());
    let shared: Arc<dyn TileSource> = source.clone();
    let geotz = GeoTz::with_source(shared).expect("manifest is intact");

    thread::scope(|s| {
        s.spawn(|| geotz.precache().expect("fixture precaches"));
        for &(lat, lon) in &PLACES {
            let geotz = &geotz;
            s.spawn(move || zones(geotz, lat, lon));
        }
    });

    assert_eq!(source.max_reads(), 1);
    let stats = geotz.cache_stats();
    assert!(stats.precached);
    assert_eq!(stats.loads, FIXTURE_TILE_COUNT as u64);
}

/// Holds the read of one tile until the cancel flag is raised, so the
/// precache pass is guaranteed to still be running when it is cancelled.
#[derive(Debug)]
struct GatedSource {
    inner: MemorySource,
    gate: Resource,
    cancel: Arc<AtomicBool>,
}

impl TileSource for GatedSource {
    fn read(&self, resource: &Resource) -> io::Result<Vec<u8>> {
        if *resource == self.gate {
            while !self.cancel.load(Ordering::Relaxed) {
                thread::sleep(Duration::from_millis(1));
            }
        }
        self.inner.read(resource)
    }
}

/// ## Summary
/// Another thread can stop a running precache.
#[test]
fn precache_cancelled_from_another_thread() {
    let cancel = Arc::new(AtomicBool::new(false));
    let source = GatedSource {
        inner: fixture_source_with(&[]),
        gate: Resource::Tile(key("a")),
        cancel: Arc::clone(&cancel),
    };
    let geotz = GeoTz::with_source(Arc::new(source)).expect("manifest is intact");

    let report = thread::scope(|s| {
        let worker = s.spawn(|| geotz.precache_until(&cancel));
        cancel.store(true, Ordering::Relaxed);
        worker.join().expect("precache thread")
    })
    .expect("cancellation is not an error");

    // Depending on timing the pass stops before the root or right after `a`.
    assert!(!report.complete);
    assert!(report.tiles <= 2, "visited {} tiles", report.tiles);
    assert_eq!(geotz.cache_stats().cached_tiles, report.tiles);
    assert!(!geotz.cache_stats().precached);
}
