/// Zone reported for coordinates no boundary claims (international waters).
pub const OCEAN_ZONE: &str = "Etc/GMT";

pub const MIN_LATITUDE: f64 = -90.0;
pub const MAX_LATITUDE: f64 = 90.0;
pub const MIN_LONGITUDE: f64 = -180.0;
pub const MAX_LONGITUDE: f64 = 180.0;

/// Width in degrees of one nautical timezone band.
pub const NAUTICAL_ZONE_WIDTH: f64 = 15.0;

/// Highest nautical offset in hours (`Etc/GMT-12` / `Etc/GMT+12`).
pub const MAX_NAUTICAL_OFFSET: i8 = 12;

/// Dataset format understood by the loader.
pub const DATASET_FORMAT_VERSION: u32 = 1;

/// Upper bound on quadtree depth any manifest may declare.
pub const MAX_SUPPORTED_DEPTH: usize = 32;
