pub mod line;
pub mod plane;
pub mod polygon;
pub mod triangle;

pub use line::{
    line_nearest_point, line_orthogonal_point, line_orthogonal_point_from_pr1, line_point_dist,
    Line3, Line3d, Line3f,
};
pub use plane::{
    plane_line_intersec, planes_intersec, try_plane_line_intersec, try_planes_intersec, Plane,
    Planed, Planef,
};
pub use polygon::{
    polygon_inside, polygon_inside_count, polygon_normal, polygon_normal_planes,
    polygon_normal_planes_promoted, Polygon, Polygond, Polygonf,
};
pub use triangle::{
    triangle_area, triangle_inside, triangle_normal, triangle_normal_planes,
    triangle_normal_planes_promoted, triangle_open, triangle_open_promoted, Triangle, Triangled,
    Trianglef,
};
