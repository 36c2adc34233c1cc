mod bounding_box;
mod multi_polygon;
mod point;
mod ring;

pub use bounding_box::*;
pub use multi_polygon::*;
pub use point::GeoPoint;
pub(crate) use point::wrap_longitude;
pub use ring::*;
