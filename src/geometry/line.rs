use crate::math::{
    cast_point, cast_vector, lit, points_dist, product_scalar, vec_unitary, Point3, Real, Vector3,
};

use super::triangle::triangle_area;

/// An infinite line defined by a point and a unit direction.
///
/// The parametric form is: `P(t) = point + t * direction`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Line3<T: Real> {
    point: Point3<T>,
    direction: Vector3<T>,
}

/// Single-precision line.
pub type Line3f = Line3<f32>;

/// Double-precision line.
pub type Line3d = Line3<f64>;

impl<T: Real> Line3<T> {
    /// Creates the line through `p1` and `p2`, directed from `p1` to `p2`.
    ///
    /// Coincident points give a zero direction.
    #[must_use]
    pub fn from_points(p1: &Point3<T>, p2: &Point3<T>) -> Self {
        Self {
            point: *p1,
            direction: vec_unitary(&(p2 - p1)),
        }
    }

    /// Creates the line through `point` along `vec`. The direction is normalized.
    #[must_use]
    pub fn from_point_vec(point: &Point3<T>, vec: &Vector3<T>) -> Self {
        Self {
            point: *point,
            direction: vec_unitary(vec),
        }
    }

    /// Returns the reference point of the line.
    #[must_use]
    pub fn point(&self) -> &Point3<T> {
        &self.point
    }

    /// Returns the unit direction vector of the line.
    #[must_use]
    pub fn direction(&self) -> &Vector3<T> {
        &self.direction
    }

    /// Evaluates the line at parameter `t`.
    #[must_use]
    pub fn point_at(&self, t: T) -> Point3<T> {
        self.point + self.direction * t
    }

    /// The point returned by the coordinate queries when no single solution
    /// exists: every coordinate set to [`Real::MAX`].
    #[must_use]
    pub fn no_solution() -> Point3<T> {
        Point3::new(T::MAX, T::MAX, T::MAX)
    }

    /// Returns the point of the line with the given X coordinate, or
    /// [`no_solution`](Self::no_solution) when the line is perpendicular to X.
    #[must_use]
    pub fn point_at_x(&self, x: T) -> Point3<T> {
        self.checked_point_at_x(x).unwrap_or_else(Self::no_solution)
    }

    /// Returns the point of the line with the given Y coordinate, or
    /// [`no_solution`](Self::no_solution) when the line is perpendicular to Y.
    #[must_use]
    pub fn point_at_y(&self, y: T) -> Point3<T> {
        self.checked_point_at_y(y).unwrap_or_else(Self::no_solution)
    }

    /// Returns the point of the line with the given Z coordinate, or
    /// [`no_solution`](Self::no_solution) when the line is perpendicular to Z.
    #[must_use]
    pub fn point_at_z(&self, z: T) -> Point3<T> {
        self.checked_point_at_z(z).unwrap_or_else(Self::no_solution)
    }

    /// Like [`point_at_x`](Self::point_at_x) but `None` instead of the sentinel.
    #[must_use]
    pub fn checked_point_at_x(&self, x: T) -> Option<Point3<T>> {
        self.solve_axis(0, x)
    }

    /// Like [`point_at_y`](Self::point_at_y) but `None` instead of the sentinel.
    #[must_use]
    pub fn checked_point_at_y(&self, y: T) -> Option<Point3<T>> {
        self.solve_axis(1, y)
    }

    /// Like [`point_at_z`](Self::point_at_z) but `None` instead of the sentinel.
    #[must_use]
    pub fn checked_point_at_z(&self, z: T) -> Option<Point3<T>> {
        self.solve_axis(2, z)
    }

    fn solve_axis(&self, axis: usize, value: T) -> Option<Point3<T>> {
        let dir = self.direction[axis];
        if dir.is_zero() {
            return None;
        }
        let f = (value - self.point[axis]) / dir;
        let mut r = self.point_at(f);
        // Exact on the requested axis, whatever the rounding of `f`.
        r[axis] = value;
        Some(r)
    }

    /// Converts the line to another precision.
    #[must_use]
    pub fn cast<U: Real>(&self) -> Line3<U> {
        Line3 {
            point: cast_point(&self.point),
            direction: cast_vector(&self.direction),
        }
    }
}

/// Distance from `pt` to the infinite line through `pr1` and `pr2`.
///
/// `pr1 == pr2` divides by zero.
#[must_use]
pub fn line_point_dist<T: Real>(pt: &Point3<T>, pr1: &Point3<T>, pr2: &Point3<T>) -> T {
    let area = triangle_area(pt, pr1, pr2);
    let base = points_dist(pr1, pr2);
    (area * lit::<T>(2.0)) / base
}

/// Position of the orthogonal projection of `pt` on the line `(pr1, pr2)`,
/// as a fraction of the segment: `0` at `pr1`, `1` at `pr2`, outside `[0, 1]`
/// beyond the endpoints.
#[must_use]
pub fn line_orthogonal_point_from_pr1<T: Real>(
    pt: &Point3<T>,
    pr1: &Point3<T>,
    pr2: &Point3<T>,
) -> T {
    let seg = pr2 - pr1;
    product_scalar(&(pt - pr1), &seg) / product_scalar(&seg, &seg)
}

/// Orthogonal projection of `pt` on the infinite line `(pr1, pr2)`.
#[must_use]
pub fn line_orthogonal_point<T: Real>(
    pt: &Point3<T>,
    pr1: &Point3<T>,
    pr2: &Point3<T>,
) -> Point3<T> {
    let t = line_orthogonal_point_from_pr1(pt, pr1, pr2);
    pr1 + (pr2 - pr1) * t
}

/// Point of the closed segment `[pr1, pr2]` closest to `pt`.
#[must_use]
pub fn line_nearest_point<T: Real>(pt: &Point3<T>, pr1: &Point3<T>, pr2: &Point3<T>) -> Point3<T> {
    let t = line_orthogonal_point_from_pr1(pt, pr1, pr2);
    if t <= T::zero() {
        *pr1
    } else if t >= T::one() {
        *pr2
    } else {
        pr1 + (pr2 - pr1) * t
    }
}
