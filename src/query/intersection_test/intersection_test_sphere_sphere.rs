use crate::bounding_volume::BoundingSphere;
use crate::math::{Isometry, Real};

/// Intersection test between bounding spheres expressed in different frames.
///
/// `pos12` is the position of the second sphere's frame relative to the first one.
#[inline]
pub fn intersection_test_sphere_sphere(
    pos12: &Isometry<Real>,
    s1: &BoundingSphere,
    s2: &BoundingSphere,
) -> bool {
    s1.intersects_sphere(&s2.transform_by(pos12))
}
