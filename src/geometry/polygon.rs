use tracing::debug;

use crate::error::{GeometryError, Result};
use crate::math::{cast_point, cast_scalar, product_vec, Point3, Real, Vector3};

use super::plane::Plane;
use super::triangle::edge_plane;

/// Normal of a planar vertex loop: the sum of the fan cross products from the
/// first vertex. Its length is twice the enclosed area and its direction
/// follows the winding.
#[must_use]
pub fn polygon_normal<T: Real>(vertices: &[Point3<T>]) -> Vector3<T> {
    let Some(o) = vertices.first() else {
        return Vector3::zeros();
    };
    vertices
        .windows(2)
        .skip(1)
        .fold(Vector3::zeros(), |acc, w| acc + product_vec(&(w[0] - o), &(w[1] - o)))
}

/// Returns the planes bounding a convex polygon, one per edge including the
/// closing edge from the last vertex back to the first.
///
/// The vertices must be coplanar and form a convex loop; neither is checked.
/// Plane normals are unit length and face away from the interior. `opening`
/// moves every plane outward (positive) or inward (negative).
#[must_use]
pub fn polygon_normal_planes<T: Real>(vertices: &[Point3<T>], opening: T) -> Vec<Plane<T>> {
    let n = polygon_normal(vertices);
    vertices
        .iter()
        .zip(vertices.iter().cycle().skip(1))
        .map(|(a, b)| edge_plane(a, b, &n, opening))
        .collect()
}

/// [`polygon_normal_planes`] computed in `f64` and narrowed on return.
#[must_use]
pub fn polygon_normal_planes_promoted<T: Real>(
    vertices: &[Point3<T>],
    opening: T,
) -> Vec<Plane<T>> {
    let wide: Vec<Point3<f64>> = vertices.iter().map(cast_point).collect();
    polygon_normal_planes(&wide, cast_scalar(opening))
        .iter()
        .map(Plane::cast)
        .collect()
}

/// `true` when `pt` is on the inner side (or on) every plane.
///
/// An empty plane set contains every point.
#[must_use]
pub fn polygon_inside<T: Real>(pt: &Point3<T>, planes: &[Plane<T>]) -> bool {
    planes.iter().all(|pla| pla.is_inner(pt))
}

/// [`polygon_inside`] over the first `count` planes only.
#[must_use]
pub fn polygon_inside_count<T: Real>(pt: &Point3<T>, count: usize, planes: &[Plane<T>]) -> bool {
    planes.iter().take(count).all(|pla| pla.is_inner(pt))
}

/// A convex, planar polygon given as an ordered vertex loop.
///
/// Only the vertex count is validated; convexity and coplanarity are up to
/// the caller.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon<T: Real> {
    vertices: Vec<Point3<T>>,
}

/// Single-precision polygon.
pub type Polygonf = Polygon<f32>;

/// Double-precision polygon.
pub type Polygond = Polygon<f64>;

impl<T: Real> Polygon<T> {
    /// Creates a polygon from its vertex loop.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::TooFewVertices`] with fewer than 3 vertices.
    pub fn new(vertices: Vec<Point3<T>>) -> Result<Self> {
        if vertices.len() < 3 {
            debug!(count = vertices.len(), "rejecting polygon");
            return Err(GeometryError::TooFewVertices(vertices.len()));
        }
        Ok(Self { vertices })
    }

    /// The vertex loop, in the order given to [`Polygon::new`].
    #[must_use]
    pub fn vertices(&self) -> &[Point3<T>] {
        &self.vertices
    }

    /// See [`polygon_normal`].
    #[must_use]
    pub fn normal(&self) -> Vector3<T> {
        polygon_normal(&self.vertices)
    }

    /// See [`polygon_normal_planes`].
    #[must_use]
    pub fn normal_planes(&self, opening: T) -> Vec<Plane<T>> {
        polygon_normal_planes(&self.vertices, opening)
    }

    /// See [`polygon_normal_planes_promoted`].
    #[must_use]
    pub fn normal_planes_promoted(&self, opening: T) -> Vec<Plane<T>> {
        polygon_normal_planes_promoted(&self.vertices, opening)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::geometry::triangle::{triangle_inside, triangle_normal, triangle_normal_planes};
    use crate::math::{Point3d, Point3f, Vector3d};
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    fn p(x: f64, y: f64, z: f64) -> Point3d {
        Point3d::new(x, y, z)
    }

    fn unit_square() -> Vec<Point3d> {
        vec![
            p(0.0, 0.0, 0.0),
            p(1.0, 0.0, 0.0),
            p(1.0, 1.0, 0.0),
            p(0.0, 1.0, 0.0),
        ]
    }

    /// Regular hexagon of circumradius 2 in the plane x + y + z = 3.
    fn tilted_hexagon() -> Vec<Point3d> {
        let center = p(1.0, 1.0, 1.0);
        let u = Vector3d::new(1.0, -1.0, 0.0).normalize();
        let w = Vector3d::new(1.0, 1.0, -2.0).normalize();
        (0..6)
            .map(|i| {
                let a = f64::from(i) * std::f64::consts::FRAC_PI_3;
                center + u * (2.0 * a.cos()) + w * (2.0 * a.sin())
            })
            .collect()
    }

    // ── normal ──

    #[test]
    fn square_normal() {
        assert_eq!(polygon_normal(&unit_square()), Vector3d::new(0.0, 0.0, 2.0));
        let mut reversed = unit_square();
        reversed.reverse();
        assert_eq!(polygon_normal(&reversed), Vector3d::new(0.0, 0.0, -2.0));
    }

    #[test]
    fn polygon_normal_of_triangle_matches_triangle_normal() {
        let tri = [p(1.0, 0.0, 2.0), p(4.0, 1.0, 0.0), p(0.0, 3.0, 1.0)];
        assert_relative_eq!(
            polygon_normal(&tri),
            triangle_normal(&tri[0], &tri[1], &tri[2]),
            epsilon = 1e-12
        );
    }

    // ── bounding planes ──

    #[test]
    fn one_plane_per_edge_including_closing_edge() {
        let sq = unit_square();
        let planes = polygon_normal_planes(&sq, 0.0);
        assert_eq!(planes.len(), 4);
        // Closing edge (0,1) -> (0,0) lies on x = 0.
        assert_abs_diff_eq!(planes[3].evaluate(&sq[3]), 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(planes[3].evaluate(&sq[0]), 0.0, epsilon = 1e-12);
        assert_relative_eq!(planes[3].normal(), Vector3d::new(-1.0, 0.0, 0.0), epsilon = 1e-12);
    }

    #[test]
    fn square_containment() {
        let planes = polygon_normal_planes(&unit_square(), 0.0);
        assert!(polygon_inside(&p(0.5, 0.5, 0.0), &planes));
        assert!(polygon_inside(&p(0.5, 0.5, -3.0), &planes));
        assert!(polygon_inside(&p(1.0, 1.0, 0.0), &planes));
        assert!(!polygon_inside(&p(1.5, 0.5, 0.0), &planes));
        assert!(!polygon_inside(&p(0.5, -0.01, 0.0), &planes));
    }

    #[test]
    fn opening_dilates_and_erodes() {
        let sq = unit_square();
        let outside = p(1.05, 0.5, 0.0);
        assert!(!polygon_inside(&outside, &polygon_normal_planes(&sq, 0.0)));
        assert!(polygon_inside(&outside, &polygon_normal_planes(&sq, 0.1)));
        let center = p(0.5, 0.5, 0.0);
        assert!(polygon_inside(&center, &polygon_normal_planes(&sq, -0.4)));
        assert!(!polygon_inside(&center, &polygon_normal_planes(&sq, -0.6)));
    }

    #[test]
    fn winding_does_not_flip_inside() {
        let mut reversed = unit_square();
        reversed.reverse();
        let planes = polygon_normal_planes(&reversed, 0.0);
        assert!(polygon_inside(&p(0.25, 0.75, 0.0), &planes));
        assert!(!polygon_inside(&p(-0.25, 0.75, 0.0), &planes));
    }

    #[test]
    fn tilted_hexagon_containment() {
        let hex = tilted_hexagon();
        let planes = polygon_normal_planes(&hex, 0.0);
        assert_eq!(planes.len(), 6);
        let center = p(1.0, 1.0, 1.0);
        assert!(polygon_inside(&center, &planes));
        // Inradius of the hexagon is sqrt(3).
        let u = Vector3d::new(1.0, -1.0, 0.0).normalize();
        let edge_mid_dir = u * (std::f64::consts::FRAC_PI_6.cos());
        let w = Vector3d::new(1.0, 1.0, -2.0).normalize();
        let dir = edge_mid_dir + w * std::f64::consts::FRAC_PI_6.sin();
        assert!(polygon_inside(&(center + dir * 1.7), &planes));
        assert!(!polygon_inside(&(center + dir * 1.8), &planes));
        for pla in &planes {
            assert_relative_eq!(pla.dist_sign(&center), -(3.0_f64.sqrt()), epsilon = 1e-9);
        }
    }

    #[test]
    fn matches_triangle_inside() {
        let (a, b, c) = (p(1.0, 0.0, 2.0), p(4.0, 1.0, 0.0), p(0.0, 3.0, 1.0));
        for opening in [0.0, 0.3, -0.3] {
            let tri_planes = triangle_normal_planes(&a, &b, &c, opening);
            for i in -4..=10 {
                for j in -4..=10 {
                    let (s, t) = (f64::from(i) * 0.1, f64::from(j) * 0.1);
                    let q = a + (b - a) * s + (c - a) * t + Vector3d::new(0.0, 0.0, 0.3);
                    assert_eq!(
                        polygon_inside(&q, &tri_planes),
                        triangle_inside(&q, &tri_planes),
                        "q = {q:?}"
                    );
                }
            }
        }
    }

    #[test]
    fn polygon_planes_of_triangle_match_triangle_planes() {
        let (a, b, c) = (p(1.0, 0.0, 2.0), p(4.0, 1.0, 0.0), p(0.0, 3.0, 1.0));
        let tri_planes = triangle_normal_planes(&a, &b, &c, 0.2);
        let poly_planes = polygon_normal_planes(&[a, b, c], 0.2);
        for (tp, pp) in tri_planes.iter().zip(&poly_planes) {
            assert_relative_eq!(tp.normal(), pp.normal(), epsilon = 1e-12);
            assert_relative_eq!(tp.d, pp.d, epsilon = 1e-12);
        }
    }

    #[test]
    fn count_overload_limits_planes() {
        let planes = polygon_normal_planes(&unit_square(), 0.0);
        let right = p(1.5, 0.5, 0.0);
        // Plane 1 is the x = 1 edge.
        assert!(polygon_inside_count(&right, 1, &planes));
        assert!(!polygon_inside_count(&right, 2, &planes));
        assert_eq!(
            polygon_inside_count(&right, planes.len(), &planes),
            polygon_inside(&right, &planes)
        );
        assert!(polygon_inside_count(&right, 0, &planes));
        assert!(polygon_inside(&right, &[]));
    }

    // ── Polygon ──

    #[test]
    fn polygon_rejects_short_loops() {
        assert_eq!(
            Polygon::new(vec![p(0.0, 0.0, 0.0), p(1.0, 0.0, 0.0)]),
            Err(GeometryError::TooFewVertices(2))
        );
        assert_eq!(
            Polygon::<f64>::new(Vec::new()),
            Err(GeometryError::TooFewVertices(0))
        );
    }

    #[test]
    fn polygon_value_type() {
        let poly = Polygon::new(unit_square()).unwrap();
        assert_eq!(poly.vertices().len(), 4);
        assert_eq!(poly.normal(), Vector3d::new(0.0, 0.0, 2.0));
        assert!(polygon_inside(&p(0.9, 0.1, 0.0), &poly.normal_planes(0.0)));
    }

    #[test]
    fn promoted_planes_single_precision() {
        let square: Vec<Point3f> = unit_square().iter().map(cast_point).collect();
        let poly = Polygonf::new(square).unwrap();
        let planes = poly.normal_planes_promoted(0.05);
        assert_eq!(planes.len(), 4);
        assert!(polygon_inside(&Point3f::new(1.04, 0.5, 0.0), &planes));
        assert!(!polygon_inside(&Point3f::new(1.06, 0.5, 0.0), &planes));
        assert_eq!(planes, poly.normal_planes(0.05));
    }
}
