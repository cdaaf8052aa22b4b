use tracing::debug;

use crate::error::{GeometryError, Result};
use crate::math::{
    cast_scalar, point_dist, product_scalar, product_vec, vec_unitary, vectors_angle, Point3,
    Real, Vector3,
};

use super::triangle::triangle_normal;

/// An infinite plane in implicit form `a·x + b·y + c·z + d = 0`.
///
/// `(a, b, c)` is the plane normal. It is unit length only when the plane was
/// built with [`Plane::from_point_vec`]; every distance query below accounts
/// for the normal's length, except [`Plane::evaluate`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Plane<T: Real> {
    pub a: T,
    pub b: T,
    pub c: T,
    pub d: T,
}

/// Single-precision plane.
pub type Planef = Plane<f32>;

/// Double-precision plane.
pub type Planed = Plane<f64>;

impl<T: Real> Plane<T> {
    /// Creates a plane from its implicit coefficients.
    #[must_use]
    pub fn new(a: T, b: T, c: T, d: T) -> Self {
        Self { a, b, c, d }
    }

    /// Plane with normal `normal` passing through `pt`. `normal` is used as is.
    fn through(pt: &Point3<T>, normal: &Vector3<T>) -> Self {
        Self::new(
            normal.x,
            normal.y,
            normal.z,
            -normal.x * pt.x - normal.y * pt.y - normal.z * pt.z,
        )
    }

    /// Creates the plane containing three points.
    ///
    /// The normal is [`triangle_normal`] of the points, not normalized.
    #[must_use]
    pub fn from_points(p1: &Point3<T>, p2: &Point3<T>, p3: &Point3<T>) -> Self {
        Self::through(p1, &triangle_normal(p1, p2, p3))
    }

    /// Creates the plane through `pt` with normal direction `vec`.
    ///
    /// The normal is normalized first, so [`evaluate`](Self::evaluate)
    /// already returns the metric signed distance.
    #[must_use]
    pub fn from_point_vec(pt: &Point3<T>, vec: &Vector3<T>) -> Self {
        Self::through(pt, &vec_unitary(vec))
    }

    /// Returns the normal vector `(a, b, c)`.
    #[must_use]
    pub fn normal(&self) -> Vector3<T> {
        Vector3::new(self.a, self.b, self.c)
    }

    /// Raw evaluation `a·x + b·y + c·z + d`, in units of the normal's length.
    #[must_use]
    pub fn evaluate(&self, pt: &Point3<T>) -> T {
        self.a * pt.x + self.b * pt.y + self.c * pt.z + self.d
    }

    /// Signed Euclidean distance from `pt`; positive on the normal side.
    #[must_use]
    pub fn dist_sign(&self, pt: &Point3<T>) -> T {
        self.evaluate(pt) / point_dist(&self.normal())
    }

    /// Euclidean distance from `pt`.
    #[must_use]
    pub fn dist(&self, pt: &Point3<T>) -> T {
        self.dist_sign(pt).abs()
    }

    /// Angle between the normals of two planes, in degrees.
    #[must_use]
    pub fn angle(&self, other: &Self) -> T {
        vectors_angle(&self.normal(), &other.normal())
    }

    /// Orthogonal projection of `pt` on the plane.
    #[must_use]
    pub fn orthogonal_point(&self, pt: &Point3<T>) -> Point3<T> {
        let n = self.normal();
        let t = -self.evaluate(pt) / product_scalar(&n, &n);
        pt + n * t
    }

    /// Moves the plane `dist` along its own normal (metric, whatever the
    /// normal's length).
    #[must_use]
    pub fn offset(&self, dist: T) -> Self {
        Self {
            d: self.d - dist * point_dist(&self.normal()),
            ..*self
        }
    }

    /// Half-space test: `true` when `pt` is on the plane or on the side
    /// opposite to the normal.
    #[must_use]
    pub fn is_inner(&self, pt: &Point3<T>) -> bool {
        self.evaluate(pt) <= T::zero()
    }

    /// Converts the plane to another precision.
    #[must_use]
    pub fn cast<U: Real>(&self) -> Plane<U> {
        Plane::new(
            cast_scalar(self.a),
            cast_scalar(self.b),
            cast_scalar(self.c),
            cast_scalar(self.d),
        )
    }
}

/// Intersection point of three planes.
///
/// The planes must be pairwise non-parallel. A singular system is not
/// detected: the result has infinite or NaN coordinates. Use
/// [`try_planes_intersec`] to get an error instead.
#[must_use]
pub fn planes_intersec<T: Real>(pla1: &Plane<T>, pla2: &Plane<T>, pla3: &Plane<T>) -> Point3<T> {
    let (n1, n2, n3) = (pla1.normal(), pla2.normal(), pla3.normal());
    let n23 = product_vec(&n2, &n3);
    let n31 = product_vec(&n3, &n1);
    let n12 = product_vec(&n1, &n2);
    let det = product_scalar(&n1, &n23);
    // Cramer's rule on n_i · x = -d_i.
    let num = -(n23 * pla1.d + n31 * pla2.d + n12 * pla3.d);
    Point3::new(num.x / det, num.y / det, num.z / det)
}

/// Checked [`planes_intersec`].
///
/// # Errors
///
/// Returns [`GeometryError::SingularPlanes`] when the planes do not meet at a
/// single finite point.
pub fn try_planes_intersec<T: Real>(
    pla1: &Plane<T>,
    pla2: &Plane<T>,
    pla3: &Plane<T>,
) -> Result<Point3<T>> {
    let pt = planes_intersec(pla1, pla2, pla3);
    if pt.iter().all(|c| c.is_finite()) {
        Ok(pt)
    } else {
        debug!(?pla1, ?pla2, ?pla3, "singular three-plane intersection");
        Err(GeometryError::SingularPlanes)
    }
}

/// Intersection of a plane with the infinite line through `pt1` and `pt2`.
///
/// A line parallel to the plane divides by zero; use
/// [`try_plane_line_intersec`] to get an error instead.
#[must_use]
pub fn plane_line_intersec<T: Real>(pla: &Plane<T>, pt1: &Point3<T>, pt2: &Point3<T>) -> Point3<T> {
    let v = pt2 - pt1;
    let t = -pla.evaluate(pt1) / product_scalar(&pla.normal(), &v);
    pt1 + v * t
}

/// Checked [`plane_line_intersec`].
///
/// # Errors
///
/// Returns [`GeometryError::ParallelLine`] when the line does not cross the
/// plane at a single finite point.
pub fn try_plane_line_intersec<T: Real>(
    pla: &Plane<T>,
    pt1: &Point3<T>,
    pt2: &Point3<T>,
) -> Result<Point3<T>> {
    let pt = plane_line_intersec(pla, pt1, pt2);
    if pt.iter().all(|c| c.is_finite()) {
        Ok(pt)
    } else {
        debug!(?pla, ?pt1, ?pt2, "line does not cross plane");
        Err(GeometryError::ParallelLine)
    }
}
