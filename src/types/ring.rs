use crate::types::GeoPoint;

/// Ordered, cyclic sequence of boundary points
///
/// The last point implicitly connects back to the first. Produced by
/// [`sample_boundary`](crate::sample_boundary) and consumed by the
/// [`Corrector`](crate::Corrector).
#[derive(Debug, Clone, PartialEq)]
pub struct BoundaryRing {
    points: Vec<GeoPoint>,
}

impl BoundaryRing {
    pub fn new(points: Vec<GeoPoint>) -> Self {
        Self { points }
    }

    pub fn points(&self) -> &[GeoPoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn into_points(self) -> Vec<GeoPoint> {
        self.points
    }

    /// Consecutive point pairs, including the closing pair `(last, first)`
    ///
    /// Yields exactly `len()` pairs.
    pub fn pairs(&self) -> impl Iterator<Item = (GeoPoint, GeoPoint)> + '_ {
        let successors = self.points.iter().skip(1).chain(self.points.first());
        self.points.iter().copied().zip(successors.copied())
    }
}

impl From<Vec<GeoPoint>> for BoundaryRing {
    fn from(points: Vec<GeoPoint>) -> Self {
        Self::new(points)
    }
}
