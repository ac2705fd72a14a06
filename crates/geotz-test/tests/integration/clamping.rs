//! Out-of-range and non-numeric input.

use super::helpers::*;

/// ## Summary
/// Out-of-range coordinates answer like the nearest in-range coordinate.
#[test_log::test]
fn out_of_range_is_clamped() {
    let geotz = fixture();

    assert_eq!(zones(&geotz, 95.0, 200.0), zones(&geotz, 90.0, 180.0));
    assert_eq!(zones(&geotz, 95.0, 200.0), zones(&geotz, 90.0, -180.0));
    assert_eq!(zones(&geotz, -100.0, 0.0), zones(&geotz, -90.0, 0.0));
    assert_eq!(zones(&geotz, 52.0, -500.0), ["America/Adak"]);
    assert_eq!(
        zones(&geotz, f64::INFINITY, f64::NEG_INFINITY),
        zones(&geotz, 90.0, -180.0)
    );
}

/// ## Summary
/// The south pole lies on both Antarctic dividing lines.
#[test]
fn south_pole_matches_both_sides() {
    let geotz = fixture();

    assert_eq!(
        zones(&geotz, -90.0, 0.0),
        ["Antarctica/McMurdo", "Antarctica/Troll"]
    );
}

/// ## Summary
/// Nautical bands use the clamped longitude, so 180 stays in the far east
/// band even though lookups treat it as -180.
#[test]
fn nautical_band_uses_clamped_longitude() {
    let geotz = fixture().with_ocean_mode(OceanMode::Nautical);

    assert_eq!(zones(&geotz, 0.0, 180.0), ["Etc/GMT-12"]);
    assert_eq!(zones(&geotz, 0.0, 500.0), ["Etc/GMT-12"]);
    assert_eq!(zones(&geotz, 0.0, -180.0), ["Etc/GMT+12"]);
}

/// ## Summary
/// `NaN` is the one input that cannot be clamped.
#[test]
fn nan_is_invalid_coordinate() {
    let geotz = fixture();

    for (latitude, longitude) in [(f64::NAN, 0.0), (0.0, f64::NAN), (f64::NAN, f64::NAN)] {
        let err = geotz.lookup(latitude, longitude).unwrap_err();
        assert!(matches!(err, LookupError::InvalidCoordinate(_)), "{err}");
    }
    assert_eq!(geotz.cache_stats().loads, 0);
}
