//! Zones for coordinates no boundary claims.

use geotz_core::config::OceanMode;
use geotz_core::constants::{MAX_NAUTICAL_OFFSET, NAUTICAL_ZONE_WIDTH, OCEAN_ZONE};
use geotz_core::{Coordinate, ZoneId};

/// The fallback zone for `coordinate` under `mode`.
#[must_use]
pub fn ocean_zone(mode: OceanMode, coordinate: &Coordinate) -> ZoneId {
    match mode {
        OceanMode::Fixed => ZoneId::new(OCEAN_ZONE),
        OceanMode::Nautical => nautical_zone(coordinate.clamped_longitude()),
    }
}

/// ## Summary
/// The nautical band for a longitude in `[-180, 180]`.
///
/// Bands are 15 degrees wide and centred on multiples of 15; a longitude on
/// a band edge belongs to the eastern band. The `Etc` names invert the sign,
/// so east of Greenwich is `Etc/GMT-n`.
#[must_use]
pub fn nautical_zone(longitude: f64) -> ZoneId {
    let limit = f64::from(MAX_NAUTICAL_OFFSET);
    let band = ((longitude + NAUTICAL_ZONE_WIDTH / 2.0) / NAUTICAL_ZONE_WIDTH)
        .floor()
        .clamp(-limit, limit);

    #[expect(
        clippy::cast_possible_truncation,
        reason = "band is an integer within +/-12"
    )]
    let hours = band as i8;

    match hours {
        0 => ZoneId::new(OCEAN_ZONE),
        east if east > 0 => ZoneId::from(format!("{OCEAN_ZONE}-{east}")),
        west => ZoneId::from(format!("{OCEAN_ZONE}+{}", west.unsigned_abs())),
    }
}
