//! Boundary dataset access: tile addressing, the on-disk tile format and the
//! loader that turns stored bytes into [`tile::Tile`] values.
//!
//! The dataset is a quadtree. The root tile covers the globe; any of its four
//! quadrants may be delegated to a child tile holding finer geometry, and so
//! on down to the depth declared by the dataset manifest. This crate only
//! reads that tree. Deciding which tiles a coordinate needs, caching them and
//! matching geometry happen in `geotz-service`.

pub mod error;
pub mod format;
pub mod key;
pub mod loader;
pub mod source;
pub mod tile;

pub use error::{DatasetError, DatasetResult};
pub use key::{Quadrant, TileBounds, TileKey};
pub use loader::TileLoader;
pub use source::{DirectorySource, MemorySource, Resource, TileSource};
pub use tile::{DividingLine, Feature, Geometry, QuadrantSlot, Side, Tile};
