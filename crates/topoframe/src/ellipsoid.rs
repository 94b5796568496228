//! Reference ellipsoid model.

/// A reference ellipsoid for geodetic computations.
///
/// Immutable value type. Pass [`Ellipsoid::WGS84`] for Earth, or construct
/// alternate constants when testing against a different model.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ellipsoid {
    /// Equatorial radius (semi-major axis) in kilometers.
    pub equatorial_radius_km: f64,
    /// First eccentricity (dimensionless).
    pub eccentricity: f64,
}

impl Ellipsoid {
    /// WGS84 Earth model.
    pub const WGS84: Self = Self {
        equatorial_radius_km: 6378.137,
        eccentricity: 0.081_819_221_456,
    };

    /// Radius of curvature in the prime vertical at `lat_rad`, in kilometers.
    ///
    /// `a / sqrt(1 - e^2 * sin^2(lat))` — the scale factor used by the
    /// latitude iteration and the height-above-ellipsoid computation.
    #[must_use]
    pub fn prime_vertical_radius_km(&self, lat_rad: f64) -> f64 {
        let e2 = self.eccentricity * self.eccentricity;
        let sin_lat = lat_rad.sin();
        self.equatorial_radius_km / (1.0 - e2 * sin_lat * sin_lat).sqrt()
    }
}
