use crate::types::GeoPoint;

/// Errors that prevent a shape from being computed
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Invalid radius: {radius} (expected a non-negative number of meters)")]
    InvalidRadius { radius: f64 },

    #[error("Invalid segment count: {segments} (at least 3 are needed to form a ring)")]
    InvalidSegmentCount { segments: usize },

    #[error("Invalid geometry: ({}, {}) is not a valid coordinate", .point.lat, .point.lon)]
    InvalidGeometry { point: GeoPoint },

    #[error("Invalid options: {0}")]
    InvalidOptions(String),
}

/// Non-fatal issues encountered while computing a shape
#[derive(Debug, Clone, PartialEq)]
pub enum Warning {
    /// Requested radius exceeded `max_radius_meters` and was clamped
    RadiusClamped { requested: f64, applied: f64 },

    /// Ring had more discontinuities than the corrector can resolve;
    /// the resulting parts may overlap
    ExcessCrossings { count: usize },
}

pub type Result<T> = std::result::Result<T, Error>;
