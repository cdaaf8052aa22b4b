//! Dual-precision 3D analytic geometry: vector algebra, lines, planes,
//! triangles and convex polygons, for particle simulation setup code.
//!
//! Every operation is generic over [`Real`] (`f32` or `f64`) and pure.

pub mod error;
pub mod geometry;
pub mod math;

pub use error::{GeometryError, Result};
pub use math::{Point3, Real, Vector3};
