use crate::bounding_volume::Aabb;
use crate::math::{Point, Real};
use na::ComplexField;

/// Computes the bounding sphere of a set of point, given its center.
///
/// The radius is the largest distance between `center` and any of the points, or zero if
/// `pts` is empty.
#[inline]
pub fn point_cloud_bounding_sphere_with_center(
    pts: &[Point<Real>],
    center: Point<Real>,
) -> (Point<Real>, Real) {
    let mut sqradius = 0.0;

    for pt in pts.iter() {
        let distance_squared = na::distance_squared(pt, &center);

        if distance_squared > sqradius {
            sqradius = distance_squared
        }
    }

    (center, ComplexField::sqrt(sqradius))
}

/// Computes a bounding sphere of the specified set of point.
///
/// The center is the center of the points' AABB, not their barycenter. This is not the
/// smallest enclosing sphere, but it always contains every point.
#[inline]
pub fn point_cloud_bounding_sphere(pts: &[Point<Real>]) -> (Point<Real>, Real) {
    let center = Aabb::from_points(pts.iter().copied()).center();
    point_cloud_bounding_sphere_with_center(pts, center)
}
