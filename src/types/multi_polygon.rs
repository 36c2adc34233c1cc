use crate::types::{BoundingBox, GeoPoint};

/// One simple ring of the final shape
///
/// The ring is open; renderers are expected to close it.
pub type PolygonPart = Vec<GeoPoint>;

/// Corrected shape of a great circle
///
/// Contains a single part in the common case, and two parts when the circle
/// was split at the antimeridian.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MultiPolygon {
    parts: Vec<PolygonPart>,
}

impl MultiPolygon {
    pub fn new(parts: Vec<PolygonPart>) -> Self {
        Self { parts }
    }

    pub fn parts(&self) -> &[PolygonPart] {
        &self.parts
    }

    /// Number of parts
    pub fn len(&self) -> usize {
        self.parts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }

    pub fn into_parts(self) -> Vec<PolygonPart> {
        self.parts
    }

    /// Total number of points across all parts
    pub fn point_count(&self) -> usize {
        self.parts.iter().map(Vec::len).sum()
    }

    /// One bounding box per non-empty part
    pub fn bounding_boxes(&self) -> Vec<BoundingBox> {
        self.parts
            .iter()
            .filter_map(|part| BoundingBox::from_points(part))
            .collect()
    }

    /// Parts as closed `[lon, lat]` rings, e.g. for GeoJSON coordinates
    pub fn to_lon_lat_rings(&self) -> Vec<Vec<[f64; 2]>> {
        self.parts
            .iter()
            .map(|part| {
                let mut ring: Vec<[f64; 2]> = part.iter().map(|p| [p.lon, p.lat]).collect();
                if let Some(first) = ring.first().copied()
                    && ring.last() != Some(&first)
                {
                    ring.push(first);
                }
                ring
            })
            .collect()
    }

    pub(crate) fn parts_mut(&mut self) -> &mut Vec<PolygonPart> {
        &mut self.parts
    }
}
