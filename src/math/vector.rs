use super::{lit, Point3, Real, Vector3, DEFAULT_CORRECT_MULTIPLIER};

/// Returns the scalar product of two vectors.
#[must_use]
pub fn product_scalar<T: Real>(v1: &Vector3<T>, v2: &Vector3<T>) -> T {
    v1.dot(v2)
}

/// Returns the right-handed vector product `v1 × v2`.
///
/// The result is the zero vector when the inputs are parallel or either is zero.
#[must_use]
pub fn product_vec<T: Real>(v1: &Vector3<T>, v2: &Vector3<T>) -> Vector3<T> {
    v1.cross(v2)
}

/// Returns the length of `v` (its distance from the origin).
#[must_use]
pub fn point_dist<T: Real>(v: &Vector3<T>) -> T {
    v.norm()
}

/// Returns the distance between two points.
#[must_use]
pub fn points_dist<T: Real>(p1: &Point3<T>, p2: &Point3<T>) -> T {
    (p1 - p2).norm()
}

/// Returns `v` scaled to unit length.
///
/// The zero vector is returned unchanged.
#[must_use]
pub fn vec_unitary<T: Real>(v: &Vector3<T>) -> Vector3<T> {
    let m = v.norm();
    if m.is_zero() {
        *v
    } else {
        v / m
    }
}

/// Returns `v` scaled to length `module`.
///
/// The zero vector is returned unchanged whatever `module` is.
#[must_use]
pub fn vec_module<T: Real>(v: &Vector3<T>, module: T) -> Vector3<T> {
    let m = v.norm();
    if m.is_zero() {
        *v
    } else {
        v * (module / m)
    }
}

#[inline]
fn snap<T: Real>(value: T, threshold: T) -> T {
    if value.abs() < threshold {
        T::zero()
    } else {
        value
    }
}

#[inline]
fn correct_threshold<T: Real>(multiplier: u32) -> T {
    T::EPSILON * lit::<T>(f64::from(multiplier))
}

/// Snaps every component whose magnitude is below
/// `multiplier × machine epsilon` to exactly zero.
#[must_use]
pub fn vec_correct_with<T: Real>(v: &Vector3<T>, multiplier: u32) -> Vector3<T> {
    let threshold = correct_threshold::<T>(multiplier);
    v.map(|c| snap(c, threshold))
}

/// [`vec_correct_with`] using [`DEFAULT_CORRECT_MULTIPLIER`].
#[must_use]
pub fn vec_correct<T: Real>(v: &Vector3<T>) -> Vector3<T> {
    vec_correct_with(v, DEFAULT_CORRECT_MULTIPLIER)
}

/// Returns the point with precision noise removed: coordinates below
/// `multiplier × machine epsilon` in magnitude become exactly zero.
#[must_use]
pub fn point_correct_with<T: Real>(p: &Point3<T>, multiplier: u32) -> Point3<T> {
    Point3::from(vec_correct_with(&p.coords, multiplier))
}

/// [`point_correct_with`] using [`DEFAULT_CORRECT_MULTIPLIER`].
#[must_use]
pub fn point_correct<T: Real>(p: &Point3<T>) -> Point3<T> {
    point_correct_with(p, DEFAULT_CORRECT_MULTIPLIER)
}

/// Snaps near-zero components of a normal, then normalizes it.
#[must_use]
pub fn normal_correct_with<T: Real>(n: &Vector3<T>, multiplier: u32) -> Vector3<T> {
    vec_unitary(&vec_correct_with(n, multiplier))
}

/// [`normal_correct_with`] using [`DEFAULT_CORRECT_MULTIPLIER`].
#[must_use]
pub fn normal_correct<T: Real>(n: &Vector3<T>) -> Vector3<T> {
    normal_correct_with(n, DEFAULT_CORRECT_MULTIPLIER)
}

/// Returns a vector orthogonal to `v` with length `module`.
///
/// The first non-zero component of `v` selects the closed-form solution.
/// For the zero vector the result is the zero vector.
#[must_use]
pub fn vec_orthogonal<T: Real>(v: &Vector3<T>, module: T) -> Vector3<T> {
    let one = T::one();
    let r = if !v.x.is_zero() {
        Vector3::new((-v.y - v.z) / v.x, one, one)
    } else if !v.y.is_zero() {
        Vector3::new(one, (-v.x - v.z) / v.y, one)
    } else if !v.z.is_zero() {
        Vector3::new(one, one, (-v.x - v.y) / v.z)
    } else {
        Vector3::zeros()
    };
    vec_module(&r, module)
}

/// Returns one of two independent vectors orthogonal to `v`, scaled to
/// `module`. `first` picks which one; calling with both values yields two
/// directions spanning the plane normal to `v`.
///
/// For the zero vector the result is the zero vector.
#[must_use]
pub fn vec_orthogonal2<T: Real>(v: &Vector3<T>, module: T, first: bool) -> Vector3<T> {
    let zero = T::zero();
    // (a,b,c) with a != 0 => span{(-b,a,0), (-c,0,a)}, and cyclically.
    let r = if !v.x.is_zero() {
        if first {
            Vector3::new(-v.z, zero, v.x)
        } else {
            Vector3::new(-v.y, v.x, zero)
        }
    } else if !v.y.is_zero() {
        if first {
            Vector3::new(zero, -v.z, v.y)
        } else {
            Vector3::new(v.y, -v.x, zero)
        }
    } else if !v.z.is_zero() {
        if first {
            Vector3::new(v.z, zero, -v.x)
        } else {
            Vector3::new(zero, v.z, -v.y)
        }
    } else {
        Vector3::zeros()
    };
    vec_module(&r, module)
}

/// Returns the angle between two vectors in degrees.
///
/// Either vector being zero yields NaN.
#[must_use]
pub fn vectors_angle<T: Real>(v1: &Vector3<T>, v2: &Vector3<T>) -> T {
    let cos = product_scalar(v1, v2) / (point_dist(v1) * point_dist(v2));
    cos.acos() * lit::<T>(180.0) / T::pi()
}
