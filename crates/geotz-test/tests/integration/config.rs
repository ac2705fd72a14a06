//! Building an engine from configuration.

use super::helpers::*;

fn settings(extra: &str) -> anyhow::Result<Settings> {
    let path = fixture_dataset_path();
    let path = path.to_str().ok_or_else(|| anyhow::anyhow!("non UTF-8 fixture path"))?;
    Settings::from_toml_str(&format!("[dataset]\npath = {path:?}\n{extra}"))
}

/// ## Summary
/// Defaults give a lazy engine with the fixed ocean zone.
#[test_log::test]
fn engine_from_default_settings() -> anyhow::Result<()> {
    let geotz = GeoTz::from_settings(&settings("")?)?;

    assert_eq!(geotz.ocean_mode(), OceanMode::Fixed);
    assert_eq!(geotz.cache_stats().cached_tiles, 0);
    assert_eq!(zones(&geotz, 0.0, -30.0), ["Etc/GMT"]);
    Ok(())
}

/// ## Summary
/// Lookup settings choose the ocean mode and precache at startup.
#[test]
fn engine_from_lookup_settings() -> anyhow::Result<()> {
    let geotz = GeoTz::from_settings(&settings(
        "[lookup]\nocean = \"nautical\"\nprecache = true\n",
    )?)?;

    let stats = geotz.cache_stats();
    assert!(stats.precached);
    assert_eq!(stats.cached_tiles, FIXTURE_TILE_COUNT);
    assert_eq!(zones(&geotz, 0.0, -30.0), ["Etc/GMT+2"]);
    Ok(())
}

/// ## Summary
/// A dataset path without a dataset fails at startup, not on first lookup.
#[test]
fn engine_from_settings_with_bad_path() -> anyhow::Result<()> {
    let settings = Settings::from_toml_str("[dataset]\npath = \"/nonexistent/geotz\"\n")?;

    let err = GeoTz::from_settings(&settings).unwrap_err();
    assert!(matches!(err, LookupError::DatasetCorruption(_)));
    Ok(())
}
