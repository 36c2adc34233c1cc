#![doc = include_str!("../README.md")]

pub use crate::correct::{Corrector, NORTH_POLE, SOUTH_POLE};
pub use crate::error::{Error, Result, Warning};
pub use crate::geodesy::{Geodesy, Spherical, Wgs84};
pub use crate::options::Options;
pub use crate::sample::sample_boundary;
pub use crate::shape::{GreatCircle, compute_shape, compute_shape_with};
pub use crate::types::*;

mod correct;
mod error;
pub mod geodesy;
pub mod options;
mod sample;
mod shape;
mod types;
