//! Lookups of named places in the fixture.

use super::helpers::*;

/// ## Summary
/// A point inside one zone returns exactly that zone.
#[test_log::test]
fn lookup_inside_single_zone() {
    let geotz = fixture();

    assert_eq!(zones(&geotz, 47.650_499, -122.350_07), ["America/Los_Angeles"]);
    assert_eq!(zones(&geotz, 1.44, 104.04), ["Asia/Singapore"]);
    assert_eq!(zones(&geotz, 3.139, 101.687), ["Asia/Kuala_Lumpur"]);
    assert_eq!(zones(&geotz, 55.0, -125.0), ["America/Vancouver"]);
}

/// ## Summary
/// Overlapping polygons of one zone in different tiles collapse to one entry.
#[test_log::test]
fn lookup_deduplicates_across_tiles() {
    let geotz = fixture();

    // Matched by the multipolygon in `a` and the polygon in `ad`.
    assert_eq!(zones(&geotz, 35.689_5, 139.691_7), ["Asia/Tokyo"]);
    // Hokkaido part of the multipolygon only.
    assert_eq!(zones(&geotz, 43.06, 141.35), ["Asia/Tokyo"]);
}

/// ## Summary
/// A point on a border shared by two zones returns both, sorted.
#[test]
fn lookup_on_shared_border() {
    let geotz = fixture();

    assert_eq!(
        zones(&geotz, 49.0, -120.0),
        ["America/Los_Angeles", "America/Vancouver"]
    );
}

/// ## Summary
/// A quadrant covered by a precomputed zone list needs no geometry.
#[test]
fn lookup_in_covered_quadrant() {
    let geotz = fixture();

    assert_eq!(zones(&geotz, 69.117, -105.06), ["America/Cambridge_Bay"]);
    assert_eq!(zones(&geotz, 89.0, -91.0), ["America/Cambridge_Bay"]);
}

/// ## Summary
/// Dividing lines split Antarctica along the prime meridian.
#[test_log::test]
fn lookup_against_dividing_lines() {
    let geotz = fixture();

    assert_eq!(zones(&geotz, -75.0, 10.0), ["Antarctica/Troll"]);
    assert_eq!(zones(&geotz, -75.0, -10.0), ["Antarctica/McMurdo"]);
    assert_eq!(
        zones(&geotz, -75.0, 0.0),
        ["Antarctica/McMurdo", "Antarctica/Troll"]
    );
}

/// ## Summary
/// A zone split by the antimeridian is found from either side, and
/// longitude 180 resolves like -180.
#[test]
fn lookup_across_antimeridian() {
    let geotz = fixture();

    assert_eq!(zones(&geotz, 52.0, 179.0), ["America/Adak"]);
    assert_eq!(zones(&geotz, 52.0, -178.0), ["America/Adak"]);
    assert_eq!(zones(&geotz, 52.0, 180.0), ["America/Adak"]);
    assert_eq!(zones(&geotz, 52.0, 180.0), zones(&geotz, 52.0, -180.0));
}

/// ## Summary
/// Points no boundary claims fall back to the ocean zone.
#[test]
fn lookup_ocean_fallback() {
    let geotz = fixture();

    assert_eq!(zones(&geotz, 0.0, -30.0), ["Etc/GMT"]);
    assert_eq!(zones(&geotz, -40.0, -140.0), ["Etc/GMT"]);
    assert_eq!(zones(&geotz, 20.0, 60.0), ["Etc/GMT"]);
}

/// ## Summary
/// Nautical ocean mode names the longitude band instead.
#[test]
fn lookup_nautical_ocean_zones() {
    let geotz = fixture().with_ocean_mode(OceanMode::Nautical);

    assert_eq!(zones(&geotz, 0.0, -30.0), ["Etc/GMT+2"]);
    assert_eq!(zones(&geotz, -40.0, -140.0), ["Etc/GMT+9"]);
    assert_eq!(zones(&geotz, 20.0, 60.0), ["Etc/GMT-4"]);
    // Land lookups do not change.
    assert_eq!(zones(&geotz, 1.44, 104.04), ["Asia/Singapore"]);
}

/// ## Summary
/// Results are never empty and always sorted without duplicates.
#[test]
fn lookup_results_are_sorted_sets() {
    let geotz = fixture();

    for latitude in (-90..=90).step_by(15) {
        for longitude in (-180..=180).step_by(15) {
            let result = zones(&geotz, f64::from(latitude), f64::from(longitude));
            assert!(!result.is_empty(), "({latitude}, {longitude})");
            assert!(
                result.windows(2).all(|pair| pair[0] < pair[1]),
                "({latitude}, {longitude}) gave {result:?}"
            );
        }
    }
}

/// ## Summary
/// The null island sits in open ocean.
#[test]
fn lookup_null_island() {
    assert_eq!(zones(&fixture(), 0.0, 0.0), ["Etc/GMT"]);
    assert_eq!(
        zones(&fixture().with_ocean_mode(OceanMode::Nautical), 0.0, 0.0),
        ["Etc/GMT"]
    );
}

/// ## Summary
/// Named places resolved through every structural feature of the dataset.
#[test]
fn lookup_reference_points() {
    let geotz = fixture();

    let adak = zones(&geotz, 52.031_192, 178.913_872);
    assert!(adak.contains(&"America/Adak".to_owned()), "{adak:?}");

    let pole = zones(&geotz, -86.0, 0.0);
    for zone in ["Antarctica/McMurdo", "Antarctica/Troll"] {
        assert!(pole.contains(&zone.to_owned()), "{pole:?}");
    }
}
