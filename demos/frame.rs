//! Walks a few particles through the kernel: builds a local frame around an
//! inlet normal, bounds a triangular inlet, and classifies particle positions.
//!
//! ```text
//! cargo run --example frame
//! RUST_LOG=sphgeo=debug cargo run --example frame   # show rejected queries
//! ```

use sphgeo::geometry::{triangle_inside, try_planes_intersec, Line3, Plane, Polygon, Triangle};
use sphgeo::math::{normal_correct, vec_orthogonal2, Point3d, Vector3d};
use sphgeo::Result;
use tracing::{info, warn};

fn main() -> Result<()> {
    // Default: WARN for everything, DEBUG for sphgeo.
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("frame=info".parse().unwrap_or_default())
        .add_directive("sphgeo=debug".parse().unwrap_or_default());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let normal = normal_correct(&Vector3d::new(1e-17, 0.0, 2.0));
    let u = vec_orthogonal2(&normal, 1.0, true);
    let v = vec_orthogonal2(&normal, 1.0, false);
    info!(?normal, ?u, ?v, "local frame");

    let inlet = Triangle::new(
        Point3d::new(0.0, 0.0, 0.0),
        Point3d::new(2.0, 0.0, 0.0),
        Point3d::new(0.0, 2.0, 0.0),
    );
    let planes = inlet.normal_planes(0.05);
    for pt in [
        Point3d::new(0.5, 0.5, 0.3),
        Point3d::new(1.02, 1.02, 0.0),
        Point3d::new(2.0, 2.0, 0.0),
    ] {
        info!(?pt, inside = triangle_inside(&pt, &planes), "particle");
    }

    let axis = Line3::from_points(&Point3d::new(0.0, 0.0, -1.0), &Point3d::new(0.0, 0.0, 1.0));
    info!(at_z = ?axis.point_at_z(0.5), at_x = ?axis.point_at_x(0.5), "axis queries");

    let square = Polygon::new(vec![
        Point3d::new(0.0, 0.0, 1.0),
        Point3d::new(1.0, 0.0, 1.0),
        Point3d::new(1.0, 1.0, 1.0),
        Point3d::new(0.0, 1.0, 1.0),
    ])?;
    info!(planes = square.normal_planes(0.0).len(), "outlet");

    let floor = Plane::from_point_vec(&Point3d::origin(), &Vector3d::z());
    let lid = Plane::from_point_vec(&Point3d::new(0.0, 0.0, 3.0), &Vector3d::z());
    let wall = Plane::from_point_vec(&Point3d::origin(), &Vector3d::x());
    match try_planes_intersec(&floor, &lid, &wall) {
        Ok(pt) => info!(?pt, "corner"),
        Err(err) => warn!(%err, "no corner"),
    }

    Ok(())
}
