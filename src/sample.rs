use crate::error::{Error, Result};
use crate::geodesy::Geodesy;
use crate::types::{BoundaryRing, GeoPoint};

/// Sample the boundary of a geodesic circle
///
/// Produces `segments` points evenly spaced by bearing around `center`, each
/// exactly `radius_meters` away from it. Point `i` lies on the initial
/// bearing `i * 360 / segments`, so the ring runs clockwise starting due
/// north.
///
/// # Errors
///
/// * [`Error::InvalidSegmentCount`] if `segments < 3`
/// * [`Error::InvalidRadius`] if `radius_meters` is negative or NaN
/// * [`Error::InvalidGeometry`] if `center` is out of range or the provider
///   fails
pub fn sample_boundary<G: Geodesy>(
    geodesy: &G,
    center: GeoPoint,
    radius_meters: f64,
    segments: usize,
) -> Result<BoundaryRing> {
    if segments < 3 {
        return Err(Error::InvalidSegmentCount { segments });
    }
    if radius_meters.is_nan() || radius_meters < 0.0 {
        return Err(Error::InvalidRadius {
            radius: radius_meters,
        });
    }
    if !center.is_valid() {
        return Err(Error::InvalidGeometry { point: center });
    }

    let points = (0..segments)
        .map(|i| {
            let bearing = i as f64 * 360.0 / segments as f64;
            geodesy.destination(center, radius_meters, bearing)
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(BoundaryRing::new(points))
}
