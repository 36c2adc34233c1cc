use crate::error::{Error, Result};

/// Default number of boundary segments
pub const DEFAULT_SEGMENTS: usize = 120;

/// Default radius cap (10,000 km)
///
/// Larger radii approach the antipode, where every bearing's destination
/// becomes numerically unstable and wraparound detection breaks down.
pub const DEFAULT_MAX_RADIUS_METERS: f64 = 10.0 * 1000.0 * 1000.0;

/// Default longitude jump (degrees) treated as a pole or antimeridian wrap
pub const DEFAULT_LONGITUDE_DELTA_WRAP_CUTOFF: f64 = 90.0;

/// Longitude jump cutoff used by the legacy preset
pub const LEGACY_LONGITUDE_DELTA_WRAP_CUTOFF: f64 = 120.0;

/// Configuration for computing a great circle shape
///
/// Built with [`Options::default`] and refined with the `with_*` methods:
///
/// ```
/// use great_circle::Options;
///
/// let options = Options::default()
///     .with_segments(360)
///     .with_prevent_antimeridian_wrapping(false);
///
/// assert_eq!(options.segments, 360);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct Options {
    /// Number of line segments around the circle. Extra vertices may be
    /// added when wrapping around a pole or the antimeridian.
    pub segments: usize,

    /// Radius cap; larger radii are silently clamped
    pub max_radius_meters: f64,

    /// Longitude jump (degrees) between adjacent points that is considered
    /// a polar or antimeridian wrap
    pub longitude_delta_wrap_cutoff: f64,

    /// Compute in a reference frame centered on the circle's longitude, so
    /// that small circles near the antimeridian are not split. Set to
    /// `false` to make shapes wrap exactly at the antimeridian.
    pub prevent_antimeridian_wrapping: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            segments: DEFAULT_SEGMENTS,
            max_radius_meters: DEFAULT_MAX_RADIUS_METERS,
            longitude_delta_wrap_cutoff: DEFAULT_LONGITUDE_DELTA_WRAP_CUTOFF,
            prevent_antimeridian_wrapping: true,
        }
    }
}

impl Options {
    /// Preset reproducing the historical behaviour: no reference frame
    /// shift and a wider wrap cutoff
    pub fn legacy() -> Self {
        Self {
            longitude_delta_wrap_cutoff: LEGACY_LONGITUDE_DELTA_WRAP_CUTOFF,
            prevent_antimeridian_wrapping: false,
            ..Self::default()
        }
    }

    pub fn with_segments(mut self, segments: usize) -> Self {
        self.segments = segments;
        self
    }

    pub fn with_max_radius_meters(mut self, max_radius_meters: f64) -> Self {
        self.max_radius_meters = max_radius_meters;
        self
    }

    pub fn with_longitude_delta_wrap_cutoff(mut self, cutoff: f64) -> Self {
        self.longitude_delta_wrap_cutoff = cutoff;
        self
    }

    pub fn with_prevent_antimeridian_wrapping(mut self, prevent: bool) -> Self {
        self.prevent_antimeridian_wrapping = prevent;
        self
    }

    /// Check that the options describe a computable shape
    pub fn validate(&self) -> Result<()> {
        if self.segments < 3 {
            return Err(Error::InvalidSegmentCount {
                segments: self.segments,
            });
        }
        if !(self.max_radius_meters.is_finite() && self.max_radius_meters > 0.0) {
            return Err(Error::InvalidOptions(format!(
                "max_radius_meters must be positive and finite, got {}",
                self.max_radius_meters
            )));
        }
        if !(self.longitude_delta_wrap_cutoff.is_finite() && self.longitude_delta_wrap_cutoff > 0.0)
        {
            return Err(Error::InvalidOptions(format!(
                "longitude_delta_wrap_cutoff must be positive and finite, got {}",
                self.longitude_delta_wrap_cutoff
            )));
        }
        Ok(())
    }

    /// Apply the radius cap
    ///
    /// Returns the radius to compute with, or `None` if no clamping was
    /// necessary.
    pub(crate) fn clamp_radius(&self, radius: f64) -> Option<f64> {
        (radius > self.max_radius_meters).then_some(self.max_radius_meters)
    }
}
