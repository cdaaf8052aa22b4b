pub mod vector;

pub use vector::{
    normal_correct, normal_correct_with, point_correct, point_correct_with, point_dist,
    points_dist, product_scalar, product_vec, vec_correct, vec_correct_with, vec_module,
    vec_orthogonal, vec_orthogonal2, vec_unitary, vectors_angle,
};

use nalgebra::RealField;

/// 3D point type at precision `T`.
pub type Point3<T> = nalgebra::Point3<T>;

/// 3D vector type at precision `T`.
pub type Vector3<T> = nalgebra::Vector3<T>;

/// Single-precision point.
pub type Point3f = Point3<f32>;

/// Double-precision point.
pub type Point3d = Point3<f64>;

/// Single-precision vector.
pub type Vector3f = Vector3<f32>;

/// Double-precision vector.
pub type Vector3d = Vector3<f64>;

/// Default multiplier of the machine epsilon used by [`point_correct`] and
/// [`normal_correct`].
pub const DEFAULT_CORRECT_MULTIPLIER: u32 = 10;

mod sealed {
    pub trait Sealed {}

    impl Sealed for f32 {}
    impl Sealed for f64 {}
}

/// Floating-point scalar the kernel is instantiated for.
///
/// Implemented for `f32` and `f64` only. Widening to `f64` is exact for both;
/// [`from_wide`](Real::from_wide) narrows with a plain `as` conversion.
pub trait Real: RealField + Copy + sealed::Sealed {
    /// Machine epsilon of this precision.
    const EPSILON: Self;

    /// Largest finite value of this precision.
    const MAX: Self;

    /// Exact conversion to `f64`.
    fn to_wide(self) -> f64;

    /// Conversion from `f64`; lossy and unchecked for `f32`.
    fn from_wide(value: f64) -> Self;
}

impl Real for f32 {
    const EPSILON: Self = f32::EPSILON;
    const MAX: Self = f32::MAX;

    fn to_wide(self) -> f64 {
        f64::from(self)
    }

    #[allow(clippy::cast_possible_truncation)]
    fn from_wide(value: f64) -> Self {
        value as f32
    }
}

impl Real for f64 {
    const EPSILON: Self = f64::EPSILON;
    const MAX: Self = f64::MAX;

    fn to_wide(self) -> f64 {
        self
    }

    fn from_wide(value: f64) -> Self {
        value
    }
}

/// Converts a scalar between precisions.
#[must_use]
pub fn cast_scalar<T: Real, U: Real>(value: T) -> U {
    U::from_wide(value.to_wide())
}

/// Converts a point between precisions.
///
/// `f32 -> f64` is exact; `f64 -> f32` rounds each coordinate.
#[must_use]
pub fn cast_point<T: Real, U: Real>(p: &Point3<T>) -> Point3<U> {
    p.map(cast_scalar::<T, U>)
}

/// Converts a vector between precisions.
#[must_use]
pub fn cast_vector<T: Real, U: Real>(v: &Vector3<T>) -> Vector3<U> {
    v.map(cast_scalar::<T, U>)
}

/// Builds a `T` constant from an `f64` literal.
#[inline]
pub(crate) fn lit<T: Real>(value: f64) -> T {
    T::from_wide(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn widening_is_exact() {
        let p = Point3f::new(0.1, -3.7, 1.0e-30);
        let wide: Point3d = cast_point(&p);
        assert_eq!(wide.x, f64::from(0.1_f32));
        assert_eq!(wide.y, f64::from(-3.7_f32));
        assert_eq!(wide.z, f64::from(1.0e-30_f32));
        let back: Point3f = cast_point(&wide);
        assert_eq!(back, p);
    }

    #[test]
    fn narrowing_rounds() {
        let v = Vector3d::new(0.1, 1.0 + 1e-12, -2.5);
        let narrow: Vector3f = cast_vector(&v);
        assert_eq!(narrow, Vector3f::new(0.1, 1.0, -2.5));
    }

    #[test]
    fn precision_constants() {
        assert_eq!(<f32 as Real>::EPSILON, f32::EPSILON);
        assert_eq!(<f64 as Real>::MAX, f64::MAX);
        assert_eq!(cast_scalar::<f64, f32>(f64::MAX), f32::INFINITY);
    }
}
