use crate::bounding_volume::BoundingSphere;
use crate::math::{Isometry, Real};
use crate::query::PointQuery;

/// Intersection test between a bounding sphere and a shape implementing the `PointQuery` trait.
///
/// `pos12` is the position of the shape's frame relative to the sphere's frame.
pub fn intersection_test_sphere_point_query<P: ?Sized + PointQuery>(
    pos12: &Isometry<Real>,
    sphere1: &BoundingSphere,
    point_query2: &P,
) -> bool {
    intersection_test_point_query_sphere(&pos12.inverse(), point_query2, sphere1)
}

/// Intersection test between a shape implementing the `PointQuery` trait and a bounding sphere.
///
/// `pos12` is the position of the sphere's frame relative to the shape's frame.
pub fn intersection_test_point_query_sphere<P: ?Sized + PointQuery>(
    pos12: &Isometry<Real>,
    point_query1: &P,
    sphere2: &BoundingSphere,
) -> bool {
    let local_center2_1 = pos12 * sphere2.center;
    let proj = point_query1.project_local_point(&local_center2_1, true);
    proj.is_inside
        || na::distance_squared(&local_center2_1, &proj.point) <= sphere2.radius * sphere2.radius
}
