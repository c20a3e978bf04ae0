use na::{Point3, Vector3};
use orb3d::bounding_volume::details::point_cloud_bounding_sphere;
use orb3d::bounding_volume::BoundingSphere;

#[test]
fn four_points_on_the_unit_circle() {
    let pts = [
        Point3::new(1.0, 0.0, 0.0),
        Point3::new(-1.0, 0.0, 0.0),
        Point3::new(0.0, 1.0, 0.0),
        Point3::new(0.0, -1.0, 0.0),
    ];
    let mut sphere = BoundingSphere::default();
    let _ = sphere.set_from_points(&pts, None);

    assert_eq!(sphere.center, Point3::origin());
    assert_eq!(sphere.radius, 1.0);
    assert_eq!(sphere, BoundingSphere::from_points(&pts));
}

#[test]
fn random_point_clouds_are_enclosed() {
    let mut rng = oorandom::Rand32::new(42);

    for _ in 0..100 {
        let offset = Vector3::from_fn(|_, _| rng.rand_float() * 20.0 - 10.0);
        let pts: Vec<_> = (0..50)
            .map(|_| Point3::from(Vector3::from_fn(|_, _| rng.rand_float() * 4.0 - 2.0) + offset))
            .collect();

        let sphere = BoundingSphere::from_points(&pts);
        let (center, radius) = point_cloud_bounding_sphere(&pts);
        assert_eq!(sphere.center, center);
        assert_eq!(sphere.radius, radius);

        for pt in &pts {
            assert!(sphere.distance_to_point(pt) <= 1.0e-4);
        }

        // The radius is attained by at least one of the points.
        let farthest = pts
            .iter()
            .map(|pt| na::distance(pt, &sphere.center))
            .fold(0.0, f32::max);
        assert_eq!(farthest, sphere.radius);
    }
}

#[test]
fn explicit_center_is_kept() {
    let pts = [Point3::new(1.0, 1.0, 1.0), Point3::new(-1.0, 2.0, 0.0)];
    let center = Point3::new(5.0, 0.0, 0.0);
    let mut sphere = BoundingSphere::new(Point3::new(-8.0, 3.0, 1.0), 42.0);
    let _ = sphere.set_from_points(&pts, Some(center));

    assert_eq!(sphere.center, center);
    approx::assert_relative_eq!(sphere.radius, 40.0f32.sqrt());
}

#[test]
fn empty_point_cloud_resets_the_radius() {
    let mut sphere = BoundingSphere::new(Point3::new(1.0, 2.0, 3.0), 7.0);
    let _ = sphere.set_from_points(&[], None);
    assert_eq!(sphere.center, Point3::origin());
    assert_eq!(sphere.radius, 0.0);
    assert!(sphere.is_empty());
}
