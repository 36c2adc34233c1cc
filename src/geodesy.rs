//! Geodesic math providers
//!
//! The sampler and corrector only need two operations from the underlying
//! earth model: the destination point along a bearing, and the distance
//! between two points. Both are expressed by the [`Geodesy`] trait.

use crate::error::{Error, Result};
use crate::types::GeoPoint;
use geo::{Destination, Distance, Geodesic, Haversine, Point};

/// Earth model used to sample and analyze a circle
pub trait Geodesy {
    /// Point reached by travelling `distance_meters` from `origin` along the
    /// initial bearing `bearing_degrees` (clockwise from north)
    fn destination(
        &self,
        origin: GeoPoint,
        distance_meters: f64,
        bearing_degrees: f64,
    ) -> Result<GeoPoint>;

    /// Shortest distance between two points, in meters
    fn distance(&self, a: GeoPoint, b: GeoPoint) -> Result<f64>;
}

impl<G: Geodesy + ?Sized> Geodesy for &G {
    fn destination(
        &self,
        origin: GeoPoint,
        distance_meters: f64,
        bearing_degrees: f64,
    ) -> Result<GeoPoint> {
        (**self).destination(origin, distance_meters, bearing_degrees)
    }

    fn distance(&self, a: GeoPoint, b: GeoPoint) -> Result<f64> {
        (**self).distance(a, b)
    }
}

/// Geodesics on the WGS84 ellipsoid (Karney's algorithm)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Wgs84;

impl Geodesy for Wgs84 {
    fn destination(
        &self,
        origin: GeoPoint,
        distance_meters: f64,
        bearing_degrees: f64,
    ) -> Result<GeoPoint> {
        check_input(origin)?;
        let point = Geodesic.destination(Point::from(origin), bearing_degrees, distance_meters);
        check_output(point)
    }

    fn distance(&self, a: GeoPoint, b: GeoPoint) -> Result<f64> {
        check_input(a)?;
        check_input(b)?;
        Ok(Geodesic.distance(Point::from(a), Point::from(b)))
    }
}

/// Great circles on a sphere with the mean earth radius
///
/// Faster than [`Wgs84`], with errors of up to ~0.5%.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Spherical;

impl Geodesy for Spherical {
    fn destination(
        &self,
        origin: GeoPoint,
        distance_meters: f64,
        bearing_degrees: f64,
    ) -> Result<GeoPoint> {
        check_input(origin)?;
        let point = Haversine.destination(Point::from(origin), bearing_degrees, distance_meters);
        check_output(point)
    }

    fn distance(&self, a: GeoPoint, b: GeoPoint) -> Result<f64> {
        check_input(a)?;
        check_input(b)?;
        Ok(Haversine.distance(Point::from(a), Point::from(b)))
    }
}

fn check_input(point: GeoPoint) -> Result<()> {
    if !point.is_valid() {
        return Err(Error::InvalidGeometry { point });
    }
    Ok(())
}

fn check_output(point: Point<f64>) -> Result<GeoPoint> {
    let point = GeoPoint::from(point);
    if !(point.lat.is_finite() && point.lon.is_finite()) {
        return Err(Error::InvalidGeometry { point });
    }
    Ok(point)
}
