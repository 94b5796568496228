//! Topocentric SEZ frame transform for ECEF positions.
//!
//! This crate converts a ground-station position and a target object
//! position, both given in Earth-Centered-Earth-Fixed (ECEF) Cartesian
//! coordinates, into the South-East-Zenith (SEZ) frame centered at the
//! station. Geodetic latitude is solved iteratively against a reference
//! ellipsoid; the station-to-object difference vector is then rotated
//! about the Z axis by longitude and about the rotated E axis by latitude.
//!
//! # Design principles
//!
//! - **Synchronous**: Pure functions, no async, no shared state
//! - **Caller-controlled parallelism**: All inputs are `Copy` values, so
//!   calls are safe from any threading context
//! - **Explicit model**: The reference ellipsoid is a value passed in, not
//!   ambient global state
//!
//! # Example
//!
//! ```
//! use glam::DVec3;
//! use topoframe::{Ellipsoid, ecef_to_sez};
//!
//! let station_km = DVec3::new(6378.137, 0.0, 0.0);
//! let object_km = DVec3::new(6378.137, 100.0, 0.0);
//!
//! let sez = ecef_to_sez(station_km, object_km, &Ellipsoid::WGS84)?;
//! assert!(sez.s_km.abs() < 1e-9);
//! assert!(sez.e_km < 0.0);
//! # Ok::<(), topoframe::GeodeticError>(())
//! ```

mod ellipsoid;
mod error;
mod geodetic;
mod sez;

pub use ellipsoid::Ellipsoid;
pub use error::{GeodeticError, GeodeticResult};
pub use geodetic::{Geodetic, ecef_to_geodetic};
pub use sez::{SezVector, ecef_to_sez, rotate_to_sez};
