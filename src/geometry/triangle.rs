use crate::math::{cast_point, cast_scalar, lit, point_dist, product_vec, Point3, Real, Vector3};

use super::plane::{planes_intersec, Plane};

/// Returns the area of the triangle `(p1, p2, p3)`. Zero for collinear points.
#[must_use]
pub fn triangle_area<T: Real>(p1: &Point3<T>, p2: &Point3<T>, p3: &Point3<T>) -> T {
    point_dist(&product_vec(&(p2 - p1), &(p3 - p1))) * lit::<T>(0.5)
}

/// Returns the normal `(p1 - p2) × (p2 - p3)` of a triangle.
///
/// Not normalized: its length is twice the area. The direction follows the
/// vertex order.
#[must_use]
pub fn triangle_normal<T: Real>(p1: &Point3<T>, p2: &Point3<T>, p3: &Point3<T>) -> Vector3<T> {
    product_vec(&(p1 - p2), &(p2 - p3))
}

/// Bounding plane of the edge `a -> b`, perpendicular to the face with
/// normal `normal` and facing away from the interior, opened by `opening`.
pub(crate) fn edge_plane<T: Real>(
    a: &Point3<T>,
    b: &Point3<T>,
    normal: &Vector3<T>,
    opening: T,
) -> Plane<T> {
    Plane::from_point_vec(a, &product_vec(&(b - a), normal)).offset(opening)
}

/// Returns the three planes bounding the triangle, one per edge
/// (`p1p2`, `p2p3`, `p3p1`), each containing its edge and the triangle normal.
///
/// Plane normals are unit length and point away from the interior whatever
/// the winding. `opening` moves every plane outward (positive) or inward
/// (negative) by that distance.
#[must_use]
pub fn triangle_normal_planes<T: Real>(
    p1: &Point3<T>,
    p2: &Point3<T>,
    p3: &Point3<T>,
    opening: T,
) -> [Plane<T>; 3] {
    let n = triangle_normal(p1, p2, p3);
    [
        edge_plane(p1, p2, &n, opening),
        edge_plane(p2, p3, &n, opening),
        edge_plane(p3, p1, &n, opening),
    ]
}

/// [`triangle_normal_planes`] computed in `f64` and narrowed on return.
#[must_use]
pub fn triangle_normal_planes_promoted<T: Real>(
    p1: &Point3<T>,
    p2: &Point3<T>,
    p3: &Point3<T>,
    opening: T,
) -> [Plane<T>; 3] {
    triangle_normal_planes::<f64>(
        &cast_point(p1),
        &cast_point(p2),
        &cast_point(p3),
        cast_scalar(opening),
    )
    .map(|pla| pla.cast())
}

/// `true` when `pt` is on the inner side (or on) all three bounding planes.
#[must_use]
pub fn triangle_inside<T: Real>(pt: &Point3<T>, planes: &[Plane<T>; 3]) -> bool {
    let [pla1, pla2, pla3] = planes;
    pla1.is_inner(pt) && pla2.is_inner(pt) && pla3.is_inner(pt)
}

/// Returns the vertices of the triangle whose edges are the original edges
/// moved `opening` outward (positive) or inward (negative) within its plane.
///
/// The result is the original scaled about its incenter, so each vertex
/// slides along the bisector of its angle. The centroid stays fixed only when
/// it coincides with the incenter (equilateral input). Collinear input has no
/// solution and yields non-finite points.
#[must_use]
pub fn triangle_open<T: Real>(
    p1: &Point3<T>,
    p2: &Point3<T>,
    p3: &Point3<T>,
    opening: T,
) -> [Point3<T>; 3] {
    let [pla12, pla23, pla31] = triangle_normal_planes(p1, p2, p3, opening);
    let face = Plane::from_points(p1, p2, p3);
    [
        planes_intersec(&face, &pla31, &pla12),
        planes_intersec(&face, &pla12, &pla23),
        planes_intersec(&face, &pla23, &pla31),
    ]
}

/// [`triangle_open`] computed in `f64` and narrowed on return.
#[must_use]
pub fn triangle_open_promoted<T: Real>(
    p1: &Point3<T>,
    p2: &Point3<T>,
    p3: &Point3<T>,
    opening: T,
) -> [Point3<T>; 3] {
    triangle_open::<f64>(
        &cast_point(p1),
        &cast_point(p2),
        &cast_point(p3),
        cast_scalar(opening),
    )
    .map(|pt| cast_point(&pt))
}

/// A triangle given by its three vertices, in winding order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle<T: Real> {
    pub p1: Point3<T>,
    pub p2: Point3<T>,
    pub p3: Point3<T>,
}

/// Single-precision triangle.
pub type Trianglef = Triangle<f32>;

/// Double-precision triangle.
pub type Triangled = Triangle<f64>;

impl<T: Real> Triangle<T> {
    /// Creates a triangle from its vertices in winding order.
    #[must_use]
    pub fn new(p1: Point3<T>, p2: Point3<T>, p3: Point3<T>) -> Self {
        Self { p1, p2, p3 }
    }

    /// See [`triangle_area`].
    #[must_use]
    pub fn area(&self) -> T {
        triangle_area(&self.p1, &self.p2, &self.p3)
    }

    /// See [`triangle_normal`].
    #[must_use]
    pub fn normal(&self) -> Vector3<T> {
        triangle_normal(&self.p1, &self.p2, &self.p3)
    }

    /// Mean of the three vertices.
    #[must_use]
    pub fn centroid(&self) -> Point3<T> {
        Point3::from((self.p1.coords + self.p2.coords + self.p3.coords) / lit::<T>(3.0))
    }

    /// The plane containing the triangle.
    #[must_use]
    pub fn plane(&self) -> Plane<T> {
        Plane::from_points(&self.p1, &self.p2, &self.p3)
    }

    /// See [`triangle_normal_planes`].
    #[must_use]
    pub fn normal_planes(&self, opening: T) -> [Plane<T>; 3] {
        triangle_normal_planes(&self.p1, &self.p2, &self.p3, opening)
    }

    /// See [`triangle_normal_planes_promoted`].
    #[must_use]
    pub fn normal_planes_promoted(&self, opening: T) -> [Plane<T>; 3] {
        triangle_normal_planes_promoted(&self.p1, &self.p2, &self.p3, opening)
    }

    /// See [`triangle_open`]. The result shares this triangle's incenter.
    #[must_use]
    pub fn open(&self, opening: T) -> Self {
        let [p1, p2, p3] = triangle_open(&self.p1, &self.p2, &self.p3, opening);
        Self { p1, p2, p3 }
    }

    /// See [`triangle_open_promoted`].
    #[must_use]
    pub fn open_promoted(&self, opening: T) -> Self {
        let [p1, p2, p3] = triangle_open_promoted(&self.p1, &self.p2, &self.p3, opening);
        Self { p1, p2, p3 }
    }

    /// Converts the triangle to another precision.
    #[must_use]
    pub fn cast<U: Real>(&self) -> Triangle<U> {
        Triangle::new(cast_point(&self.p1), cast_point(&self.p2), cast_point(&self.p3))
    }
}
