//! Shape computation and the stateful [`GreatCircle`] wrapper

use crate::correct::Corrector;
use crate::error::{Error, Result, Warning};
use crate::geodesy::{Geodesy, Wgs84};
use crate::options::Options;
use crate::sample::sample_boundary;
use crate::types::{GeoPoint, MultiPolygon};

/// Compute the polygon shape of a geodesic circle on the WGS84 ellipsoid
///
/// Radii above `options.max_radius_meters` are silently clamped. Use
/// [`compute_shape_with`] to pick a different earth model or to observe
/// warnings.
///
/// ```
/// use great_circle::{GeoPoint, Options, compute_shape};
///
/// let shape = compute_shape(GeoPoint::new(52.5, 13.4), 250_000.0, &Options::default()).unwrap();
/// assert_eq!(shape.len(), 1);
/// assert_eq!(shape.point_count(), 120);
/// ```
pub fn compute_shape(
    center: GeoPoint,
    radius_meters: f64,
    options: &Options,
) -> Result<MultiPolygon> {
    compute_shape_with(&Wgs84, center, radius_meters, options, &mut Vec::new())
}

/// Compute the polygon shape of a geodesic circle using a custom earth model
///
/// Non-fatal issues (radius clamping, unresolved crossings) are pushed to
/// `warnings`.
pub fn compute_shape_with<G: Geodesy>(
    geodesy: &G,
    center: GeoPoint,
    radius_meters: f64,
    options: &Options,
    warnings: &mut Vec<Warning>,
) -> Result<MultiPolygon> {
    let radius_meters = effective_radius(radius_meters, options, warnings)?;
    build(geodesy, center, radius_meters, options, warnings)
}

/// Validate inputs and apply the radius cap
fn effective_radius(radius: f64, options: &Options, warnings: &mut Vec<Warning>) -> Result<f64> {
    options.validate()?;

    if radius.is_nan() || radius < 0.0 {
        return Err(Error::InvalidRadius { radius });
    }

    match options.clamp_radius(radius) {
        Some(applied) => {
            warnings.push(Warning::RadiusClamped {
                requested: radius,
                applied,
            });
            Ok(applied)
        }
        None => Ok(radius),
    }
}

/// Sample and correct, with an already clamped radius
fn build<G: Geodesy>(
    geodesy: &G,
    center: GeoPoint,
    radius_meters: f64,
    options: &Options,
    warnings: &mut Vec<Warning>,
) -> Result<MultiPolygon> {
    let ring = sample_boundary(geodesy, center, radius_meters, options.segments)?;
    Corrector::from(options).correct(geodesy, &ring, center, radius_meters, warnings)
}

/// A geodesic circle with its corrected shape
///
/// Recomputes the full shape whenever the center or radius changes. A failed
/// update leaves the circle unchanged.
///
/// ```
/// use great_circle::{GeoPoint, GreatCircle, Options};
///
/// let mut circle = GreatCircle::new(GeoPoint::new(0.0, 0.0), 1000.0, Options::default()).unwrap();
/// circle.set_radius(2e7).unwrap();
/// assert_eq!(circle.radius(), 1e7);
/// ```
#[derive(Debug, Clone)]
pub struct GreatCircle<G = Wgs84> {
    geodesy: G,
    options: Options,
    center: GeoPoint,
    radius: f64,
    shape: MultiPolygon,
    warnings: Vec<Warning>,
}

impl GreatCircle<Wgs84> {
    /// Create a circle on the WGS84 ellipsoid
    pub fn new(center: GeoPoint, radius_meters: f64, options: Options) -> Result<Self> {
        Self::with_geodesy(Wgs84, center, radius_meters, options)
    }
}

impl<G: Geodesy> GreatCircle<G> {
    /// Create a circle using a custom earth model
    pub fn with_geodesy(
        geodesy: G,
        center: GeoPoint,
        radius_meters: f64,
        options: Options,
    ) -> Result<Self> {
        let mut warnings = Vec::new();
        let radius = effective_radius(radius_meters, &options, &mut warnings)?;
        let shape = build(&geodesy, center, radius, &options, &mut warnings)?;

        Ok(Self {
            geodesy,
            options,
            center,
            radius,
            shape,
            warnings,
        })
    }

    /// Move the circle and recompute its shape
    pub fn set_center(&mut self, center: GeoPoint) -> Result<&MultiPolygon> {
        let mut warnings = Vec::new();
        let shape = build(
            &self.geodesy,
            center,
            self.radius,
            &self.options,
            &mut warnings,
        )?;

        self.center = center;
        self.shape = shape;
        self.warnings = warnings;
        Ok(&self.shape)
    }

    /// Resize the circle and recompute its shape
    ///
    /// The radius is clamped to `max_radius_meters`.
    pub fn set_radius(&mut self, radius_meters: f64) -> Result<&MultiPolygon> {
        let mut warnings = Vec::new();
        let radius = effective_radius(radius_meters, &self.options, &mut warnings)?;
        let shape = build(
            &self.geodesy,
            self.center,
            radius,
            &self.options,
            &mut warnings,
        )?;

        self.radius = radius;
        self.shape = shape;
        self.warnings = warnings;
        Ok(&self.shape)
    }

    pub fn center(&self) -> GeoPoint {
        self.center
    }

    /// Radius in meters, after clamping
    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn shape(&self) -> &MultiPolygon {
        &self.shape
    }

    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Warnings raised by the most recent computation
    pub fn warnings(&self) -> &[Warning] {
        &self.warnings
    }

    pub fn into_shape(self) -> MultiPolygon {
        self.shape
    }
}
