//! Iterative geodetic-latitude solution from an ECEF position.

use glam::DVec3;

use crate::ellipsoid::Ellipsoid;
use crate::error::{GeodeticError, GeodeticResult};

/// Maximum number of latitude refinement passes.
///
/// A fixed cap, not a convergence guarantee: five passes of the fixed-point
/// relation agree to well under a millimeter at terrestrial latitudes, and
/// the bound keeps the solve deterministic and O(1).
const MAX_ITERATIONS: u32 = 5;

/// Convergence tolerance between successive latitude estimates, in radians.
const CONVERGENCE_TOLERANCE_RAD: f64 = 1e-6;

/// Geodetic coordinates relative to a reference ellipsoid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Geodetic {
    /// Geodetic latitude in radians, in `(-pi/2, pi/2)`.
    pub lat_rad: f64,
    /// Longitude in radians, in `(-pi, pi]`.
    pub lon_rad: f64,
    /// Height above the ellipsoid in kilometers.
    pub height_km: f64,
}

impl Geodetic {
    /// Geodetic latitude in degrees.
    #[must_use]
    pub fn lat_deg(&self) -> f64 {
        self.lat_rad.to_degrees()
    }

    /// Longitude in degrees.
    #[must_use]
    pub fn lon_deg(&self) -> f64 {
        self.lon_rad.to_degrees()
    }
}

/// Solve geodetic latitude, longitude, and height from an ECEF position.
///
/// Longitude is closed-form (`atan2`). Latitude starts from the spherical
/// approximation and is refined by a fixed-point iteration over the
/// ellipsoid relation, stopping on convergence or after five passes,
/// whichever comes first. At least one pass always runs. Height above the
/// ellipsoid uses the radius of curvature from the last pass performed.
///
/// # Arguments
///
/// * `position_km` - ECEF position in kilometers
/// * `ellipsoid` - Reference ellipsoid model
///
/// # Errors
///
/// Returns [`GeodeticError::ZeroPosition`] for the zero vector, and
/// [`GeodeticError::PolarAxis`] for positions with `x = y = 0`, where
/// longitude is undefined.
pub fn ecef_to_geodetic(position_km: DVec3, ellipsoid: &Ellipsoid) -> GeodeticResult<Geodetic> {
    let magnitude_km = position_km.length();
    if magnitude_km == 0.0 {
        return Err(GeodeticError::ZeroPosition);
    }

    // Radial distance from the polar axis; the iteration divides by this.
    let r_lon_km = position_km.x.hypot(position_km.y);
    if r_lon_km == 0.0 {
        return Err(GeodeticError::PolarAxis {
            z_km: position_km.z,
        });
    }

    let lon_rad = position_km.y.atan2(position_km.x);

    // Spherical starting guess for the latitude.
    let mut lat_rad = (position_km.z / magnitude_km).asin();

    let e2 = ellipsoid.eccentricity * ellipsoid.eccentricity;
    let mut c_e_km = ellipsoid.equatorial_radius_km;
    let mut delta_rad = f64::INFINITY;
    let mut passes = 0;

    for _ in 0..MAX_ITERATIONS {
        c_e_km = ellipsoid.prime_vertical_radius_km(lat_rad);
        let next_rad = ((position_km.z + c_e_km * e2 * lat_rad.sin()) / r_lon_km).atan();
        delta_rad = (next_rad - lat_rad).abs();
        lat_rad = next_rad;
        passes += 1;

        if delta_rad <= CONVERGENCE_TOLERANCE_RAD {
            break;
        }
    }

    tracing::trace!(passes, delta_rad, "latitude iteration finished");

    let height_km = r_lon_km / lat_rad.cos() - c_e_km;

    Ok(Geodetic {
        lat_rad,
        lon_rad,
        height_km,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::{FRAC_PI_2, PI};

    #[test]
    fn test_equator_surface_point() {
        let geo =
            ecef_to_geodetic(DVec3::new(6378.137, 0.0, 0.0), &Ellipsoid::WGS84).unwrap();

        assert!(geo.lat_rad.abs() < 1e-4);
        assert!(geo.lon_rad.abs() < 1e-12);
        assert!(geo.height_km.abs() < 1e-4);
    }

    #[test]
    fn test_near_north_pole() {
        // Just off the polar axis at roughly the polar radius.
        let geo =
            ecef_to_geodetic(DVec3::new(0.001, 0.0, 6356.752), &Ellipsoid::WGS84).unwrap();

        assert!((geo.lat_rad - FRAC_PI_2).abs() < 1e-3);
        assert!(geo.height_km.abs() < 1e-3);
    }

    #[test]
    fn test_mid_latitude_regression() {
        // Captured from the reference implementation; converges in 3 passes.
        let geo =
            ecef_to_geodetic(DVec3::new(4000.0, 3000.0, 4000.0), &Ellipsoid::WGS84).unwrap();

        assert!((geo.lat_rad - 0.678_002_761_651_313_5).abs() < 1e-9);
        assert!((geo.lon_rad - 0.643_501_108_793_284_4).abs() < 1e-12);
        assert!((geo.height_km - 33.357_958_733_535_27).abs() < 1e-6);
    }

    #[test]
    fn test_degrees_accessors() {
        let geo =
            ecef_to_geodetic(DVec3::new(6378.137, 0.0, 0.0), &Ellipsoid::WGS84).unwrap();

        assert!(geo.lat_deg().abs() < 1e-2);
        assert!(geo.lon_deg().abs() < 1e-10);
    }

    #[test]
    fn test_z_sign_symmetry() {
        let wgs84 = Ellipsoid::WGS84;
        let north = ecef_to_geodetic(DVec3::new(4000.0, 3000.0, 4000.0), &wgs84).unwrap();
        let south = ecef_to_geodetic(DVec3::new(4000.0, 3000.0, -4000.0), &wgs84).unwrap();

        assert!((north.lat_rad + south.lat_rad).abs() < 1e-12);
        assert!((north.lon_rad - south.lon_rad).abs() < 1e-12);
        assert!((north.height_km - south.height_km).abs() < 1e-9);
    }

    #[test]
    fn test_zero_position_rejected() {
        let result = ecef_to_geodetic(DVec3::ZERO, &Ellipsoid::WGS84);
        assert!(matches!(result, Err(GeodeticError::ZeroPosition)));
    }

    #[test]
    fn test_polar_axis_rejected() {
        let result = ecef_to_geodetic(DVec3::new(0.0, 0.0, 6356.752), &Ellipsoid::WGS84);
        assert!(matches!(result, Err(GeodeticError::PolarAxis { .. })));
    }

    #[test]
    fn test_iteration_cap_terminates() {
        // A pathological eccentricity > 1 never converges; the fixed cap
        // must still return a finite result instead of looping.
        let pathological = Ellipsoid {
            equatorial_radius_km: 6378.137,
            eccentricity: 1.5,
        };

        let geo = ecef_to_geodetic(DVec3::new(6378.137, 0.0, 1.0), &pathological).unwrap();
        assert!(geo.lat_rad.is_finite());
        assert!(geo.height_km.is_finite());
    }

    mod props {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn solved_angles_stay_in_range(
                x in -42_000.0f64..42_000.0,
                y in -42_000.0f64..42_000.0,
                z in -42_000.0f64..42_000.0,
            ) {
                // Stay clear of the polar-axis degenerate case.
                prop_assume!(x.hypot(y) > 1.0);

                let geo =
                    ecef_to_geodetic(DVec3::new(x, y, z), &Ellipsoid::WGS84).unwrap();

                prop_assert!(geo.lat_rad > -FRAC_PI_2 && geo.lat_rad < FRAC_PI_2);
                prop_assert!(geo.lon_rad > -PI && geo.lon_rad <= PI);
            }

            #[test]
            fn negating_z_negates_latitude(
                x in -42_000.0f64..42_000.0,
                y in -42_000.0f64..42_000.0,
                z in -42_000.0f64..42_000.0,
            ) {
                prop_assume!(x.hypot(y) > 1.0);

                let wgs84 = Ellipsoid::WGS84;
                let north = ecef_to_geodetic(DVec3::new(x, y, z), &wgs84).unwrap();
                let south = ecef_to_geodetic(DVec3::new(x, y, -z), &wgs84).unwrap();

                prop_assert!((north.lat_rad + south.lat_rad).abs() < 1e-9);
                prop_assert!((north.lon_rad - south.lon_rad).abs() < 1e-12);
                prop_assert!((north.height_km - south.height_km).abs() < 1e-6);
            }
        }
    }
}
