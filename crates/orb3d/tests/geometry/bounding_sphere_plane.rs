use na::{Point3, Unit, Vector3};
use orb3d::bounding_volume::BoundingSphere;
use orb3d::shape::Plane;

#[test]
fn sphere_plane_intersection() {
    let plane = Plane::xy();

    assert!(!BoundingSphere::new(Point3::new(0.0, 0.0, 2.0), 1.0).intersects_plane(&plane));
    assert!(BoundingSphere::new(Point3::new(0.0, 0.0, 2.0), 2.0).intersects_plane(&plane));
    assert!(BoundingSphere::new(Point3::new(5.0, 5.0, -0.5), 1.0).intersects_plane(&plane));
    assert!(!BoundingSphere::new(Point3::new(5.0, 5.0, -3.0), 1.0).intersects_plane(&plane));
}

#[test]
fn plane_orientation_does_not_matter() {
    let normal = Unit::new_normalize(Vector3::new(1.0, 1.0, 0.0));
    let plane = Plane::from_normal_and_point(normal, &Point3::new(1.0, 1.0, 0.0));
    let sphere = BoundingSphere::new(Point3::new(-1.0, -1.0, 7.0), 2.8);

    assert_eq!(
        sphere.intersects_plane(&plane),
        sphere.intersects_plane(&plane.flipped())
    );
    assert!(!sphere.intersects_plane(&plane));
    assert!(BoundingSphere::new(sphere.center, 2.85).intersects_plane(&plane));
}
