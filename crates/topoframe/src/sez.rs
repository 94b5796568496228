//! Rotation of ECEF-frame vectors into the topocentric SEZ frame.

use glam::DVec3;

use crate::ellipsoid::Ellipsoid;
use crate::error::GeodeticResult;
use crate::geodetic::{Geodetic, ecef_to_geodetic};

/// A vector expressed in the South-East-Zenith frame, in kilometers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SezVector {
    /// Component toward geodetic south.
    pub s_km: f64,
    /// Component toward east.
    pub e_km: f64,
    /// Component toward zenith, along the ellipsoid normal.
    pub z_km: f64,
}

/// Rotate an ECEF-axis vector into the SEZ frame at `geo`.
///
/// Applies the inverse rotation pair: about the Z axis by longitude, then
/// about the rotated E axis by latitude.
#[must_use]
pub fn rotate_to_sez(relative_km: DVec3, geo: Geodetic) -> SezVector {
    let (sin_lat, cos_lat) = geo.lat_rad.sin_cos();
    let (sin_lon, cos_lon) = geo.lon_rad.sin_cos();

    SezVector {
        s_km: relative_km.x * sin_lat * cos_lon + relative_km.y * sin_lat * sin_lon
            - relative_km.z * cos_lat,
        e_km: relative_km.y * cos_lon - relative_km.x * sin_lon,
        z_km: relative_km.x * cos_lon * cos_lat
            + relative_km.y * cos_lat * sin_lon
            + relative_km.z * sin_lat,
    }
}

/// Express the vector from `object_km` to `station_km` in the SEZ frame.
///
/// Geodetic coordinates for the rotation are solved from the object
/// position, matching the reference convention this crate preserves.
///
/// # Arguments
///
/// * `station_km` - Ground-station ECEF position in kilometers
/// * `object_km` - Object ECEF position in kilometers
/// * `ellipsoid` - Reference ellipsoid model
///
/// # Errors
///
/// Returns [`GeodeticError`](crate::GeodeticError) when the object position
/// is degenerate (the zero vector, or on the polar axis).
pub fn ecef_to_sez(
    station_km: DVec3,
    object_km: DVec3,
    ellipsoid: &Ellipsoid,
) -> GeodeticResult<SezVector> {
    let geo = ecef_to_geodetic(object_km, ellipsoid)?;
    Ok(rotate_to_sez(station_km - object_km, geo))
}
