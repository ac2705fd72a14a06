//! Shared types, errors and configuration for the geotz workspace.
//!
//! Nothing in this crate touches the boundary dataset; it only defines the
//! vocabulary the data and service crates agree on.

pub mod config;
pub mod constants;
pub mod error;
pub mod types;

pub use error::{CoreError, CoreResult};
pub use types::{Coordinate, ZoneId};
