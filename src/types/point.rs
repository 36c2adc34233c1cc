/// A geographic coordinate in degrees
///
/// Latitude is in `[-90, 90]`. Longitude is conventionally in `[-180, 180]`,
/// but points produced in a shifted reference frame may temporarily lie
/// outside that range (see [`GeoPoint::normalized`]).
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GeoPoint {
    /// Latitude in degrees
    pub lat: f64,
    /// Longitude in degrees
    pub lon: f64,
}

impl GeoPoint {
    pub const fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Alias of [`GeoPoint::new`] that spells out the argument order
    pub const fn lat_lon(lat: f64, lon: f64) -> Self {
        Self::new(lat, lon)
    }

    /// Check that both coordinates are finite and within range
    pub fn is_valid(&self) -> bool {
        self.lat.is_finite()
            && self.lon.is_finite()
            && (-90.0..=90.0).contains(&self.lat)
            && (-180.0..=180.0).contains(&self.lon)
    }

    /// Same point with its longitude wrapped into `[-180, 180)`
    pub fn normalized(&self) -> Self {
        Self::new(self.lat, wrap_longitude(self.lon))
    }

    /// Same latitude with the longitude replaced
    pub(crate) fn with_lon(&self, lon: f64) -> Self {
        Self::new(self.lat, lon)
    }
}

/// Wrap a longitude into `[-180, 180)`
pub(crate) fn wrap_longitude(lon: f64) -> f64 {
    (lon + 540.0).rem_euclid(360.0) - 180.0
}

impl From<GeoPoint> for geo::Point<f64> {
    fn from(point: GeoPoint) -> Self {
        geo::Point::new(point.lon, point.lat)
    }
}

impl From<geo::Point<f64>> for GeoPoint {
    fn from(point: geo::Point<f64>) -> Self {
        Self::new(point.y(), point.x())
    }
}
