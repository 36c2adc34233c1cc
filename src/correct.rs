use crate::error::{Result, Warning};
use crate::geodesy::Geodesy;
use crate::options::{DEFAULT_LONGITUDE_DELTA_WRAP_CUTOFF, Options};
use crate::types::{BoundaryRing, GeoPoint, MultiPolygon, wrap_longitude};

/// Reference point for the north pole enclosure test
pub const NORTH_POLE: GeoPoint = GeoPoint::new(90.0, -180.0);

/// Reference point for the south pole enclosure test
pub const SOUTH_POLE: GeoPoint = GeoPoint::new(-90.0, 180.0);

/// Rewrites a sampled boundary ring into polygon parts that render correctly
/// in a flat longitude/latitude projection
///
/// Adjacent ring points whose longitudes differ by more than
/// `cutoff_degrees` mark a discontinuity. If the circle encloses the pole on
/// that side, the ring is routed over the pole along the ±180° seam.
/// Otherwise the circle crosses the antimeridian and is split into two
/// parts, one per side.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Corrector {
    /// Longitude jump (degrees) treated as a discontinuity
    pub cutoff_degrees: f64,
    /// Work in a frame centered on the circle's longitude
    pub shift_frame: bool,
    pub north_pole: GeoPoint,
    pub south_pole: GeoPoint,
}

impl Default for Corrector {
    fn default() -> Self {
        Self {
            cutoff_degrees: DEFAULT_LONGITUDE_DELTA_WRAP_CUTOFF,
            shift_frame: true,
            north_pole: NORTH_POLE,
            south_pole: SOUTH_POLE,
        }
    }
}

impl From<&Options> for Corrector {
    fn from(options: &Options) -> Self {
        Self {
            cutoff_degrees: options.longitude_delta_wrap_cutoff,
            shift_frame: options.prevent_antimeridian_wrapping,
            ..Self::default()
        }
    }
}

/// Direction of a longitude discontinuity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Jump {
    East,
    West,
}

impl Jump {
    /// Seam longitude on the side the ring leaves from
    fn exit_lon(self) -> f64 {
        match self {
            Jump::East => -180.0,
            Jump::West => 180.0,
        }
    }

    /// Seam longitude on the side the ring re-enters at
    fn entry_lon(self) -> f64 {
        -self.exit_lon()
    }

    fn pole_lat(self) -> f64 {
        match self {
            Jump::East => 90.0,
            Jump::West => -90.0,
        }
    }
}

impl Corrector {
    pub fn new(cutoff_degrees: f64, shift_frame: bool) -> Self {
        Self {
            cutoff_degrees,
            shift_frame,
            ..Self::default()
        }
    }

    /// Correct projection wraparound of a sampled ring
    ///
    /// Returns one part, or two if the ring was split at the antimeridian.
    /// Pole enclosure is only evaluated when a discontinuity is found, and
    /// at most once per pole. A pole at exactly `radius_meters` from
    /// `center` counts as not enclosed.
    ///
    /// Rings with more than two discontinuities are not resolved; a
    /// [`Warning::ExcessCrossings`] is pushed in that case.
    pub fn correct<G: Geodesy>(
        &self,
        geodesy: &G,
        ring: &BoundaryRing,
        center: GeoPoint,
        radius_meters: f64,
        warnings: &mut Vec<Warning>,
    ) -> Result<MultiPolygon> {
        let shift = if self.shift_frame { center.lon } else { 0.0 };
        let coords: Vec<GeoPoint> = if self.shift_frame {
            ring.points()
                .iter()
                .map(|c| c.with_lon(wrap_longitude(c.lon - shift)))
                .collect()
        } else {
            ring.points().to_vec()
        };
        let ring = BoundaryRing::new(coords);

        let mut north_enclosed = None;
        let mut south_enclosed = None;

        let mut shape = MultiPolygon::new(vec![Vec::with_capacity(ring.len() + 4)]);
        let mut part = 0;
        let mut crossings = 0;

        for (c0, c1) in ring.pairs() {
            let delta_lon = c1.lon - c0.lon;
            let jump = if delta_lon > self.cutoff_degrees {
                Some(Jump::East)
            } else if delta_lon < -self.cutoff_degrees {
                Some(Jump::West)
            } else {
                None
            };

            if let Some(jump) = jump {
                crossings += 1;

                let (cached, pole) = match jump {
                    Jump::East => (&mut north_enclosed, self.north_pole),
                    Jump::West => (&mut south_enclosed, self.south_pole),
                };
                let enclosed = match *cached {
                    Some(enclosed) => enclosed,
                    None => *cached.insert(geodesy.distance(center, pole)? < radius_meters),
                };

                let parts = shape.parts_mut();
                if enclosed {
                    let pole_lat = jump.pole_lat();
                    parts[part].extend([
                        c0.with_lon(jump.exit_lon()),
                        GeoPoint::new(pole_lat, jump.exit_lon()),
                        GeoPoint::new(pole_lat, jump.entry_lon()),
                        c1.with_lon(jump.entry_lon()),
                    ]);
                } else {
                    parts[part].push(c0.with_lon(jump.exit_lon()));
                    part = 1 - part;
                    if parts.len() <= part {
                        parts.push(Vec::with_capacity(ring.len()));
                    }
                    parts[part].push(c1.with_lon(jump.entry_lon()));
                }
            }

            shape.parts_mut()[part].push(c1);
        }

        if crossings > 2 {
            warnings.push(Warning::ExcessCrossings { count: crossings });
        }

        if self.shift_frame {
            for point in shape.parts_mut().iter_mut().flatten() {
                point.lon += shift;
            }
        }

        Ok(shape)
    }
}
