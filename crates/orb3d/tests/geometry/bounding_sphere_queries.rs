use na::{Point3, Vector3};
use orb3d::bounding_volume::{Aabb, BoundingSphere};

fn random_sphere(rng: &mut oorandom::Rand32) -> BoundingSphere {
    let center = Point3::from(Vector3::from_fn(|_, _| rng.rand_float() * 10.0 - 5.0));
    BoundingSphere::new(center, rng.rand_float() * 3.0)
}

fn random_point(rng: &mut oorandom::Rand32) -> Point3<f32> {
    Point3::from(Vector3::from_fn(|_, _| rng.rand_float() * 16.0 - 8.0))
}

#[test]
fn contains_point_agrees_with_distance_to_point() {
    let mut rng = oorandom::Rand32::new(7);

    for _ in 0..1000 {
        let sphere = random_sphere(&mut rng);
        let pt = random_point(&mut rng);
        let dist = sphere.distance_to_point(&pt);

        // Stay clear of the rounding band at the surface.
        if dist.abs() > 1.0e-3 {
            assert_eq!(sphere.contains_point(&pt), dist <= 0.0);
        }
    }
}

#[test]
fn surface_points_are_contained() {
    let sphere = BoundingSphere::new(Point3::new(1.0, 0.0, 0.0), 2.0);
    assert!(sphere.contains_point(&Point3::new(3.0, 0.0, 0.0)));
    assert!(!sphere.contains_point(&Point3::new(3.001, 0.0, 0.0)));
    assert_eq!(sphere.distance_to_point(&Point3::new(3.0, 0.0, 0.0)), 0.0);
    assert_eq!(sphere.distance_to_point(&Point3::new(1.0, 0.0, 0.0)), -2.0);
    assert_eq!(sphere.distance_to_point(&Point3::new(1.0, 0.0, 5.0)), 3.0);
}

#[test]
fn empty_iff_non_positive_radius() {
    for radius in [-2.0, -0.0, 0.0, 1.0e-6, 3.0] {
        let sphere = BoundingSphere::new(Point3::new(1.0, -1.0, 0.5), radius);
        assert_eq!(sphere.is_empty(), radius <= 0.0);
    }
}

#[test]
fn clone_equals_original() {
    let mut rng = oorandom::Rand32::new(3);

    for _ in 0..100 {
        let sphere = random_sphere(&mut rng);
        #[allow(clippy::clone_on_copy)]
        let cloned = sphere.clone();
        assert_eq!(cloned, sphere);

        let mut copied = BoundingSphere::default();
        let _ = copied.copy_from(&sphere);
        assert_eq!(copied, sphere);
    }

    let a = BoundingSphere::new(Point3::origin(), 1.0);
    assert_ne!(a, BoundingSphere::new(Point3::origin(), 1.0 + f32::EPSILON));
    assert_ne!(a, BoundingSphere::new(Point3::new(0.0, 0.0, 1.0e-7), 1.0));
}

#[test]
fn intersects_sphere_is_symmetric() {
    let mut rng = oorandom::Rand32::new(11);

    for _ in 0..1000 {
        let a = random_sphere(&mut rng);
        let b = random_sphere(&mut rng);
        assert_eq!(a.intersects_sphere(&b), b.intersects_sphere(&a));
    }
}

#[test]
fn touching_spheres_intersect() {
    let a = BoundingSphere::new(Point3::origin(), 1.0);
    let b = BoundingSphere::new(Point3::new(0.0, 3.0, 0.0), 2.0);
    let c = BoundingSphere::new(Point3::new(0.0, 3.5, 0.0), 2.0);
    assert!(a.intersects_sphere(&b));
    assert!(!a.intersects_sphere(&c));
}

#[test]
fn clamp_point_onto_the_surface() {
    let sphere = BoundingSphere::new(Point3::origin(), 2.0);
    assert_eq!(
        sphere.clamp_point(&Point3::new(10.0, 0.0, 0.0)),
        Point3::new(2.0, 0.0, 0.0)
    );

    let mut out = Point3::new(-1.0, -1.0, -1.0);
    let res = *sphere.clamp_point_to(&Point3::new(0.0, -7.0, 0.0), &mut out);
    assert_eq!(res, Point3::new(0.0, -2.0, 0.0));
    assert_eq!(out, res);
}

#[test]
fn clamped_points_are_contained() {
    let mut rng = oorandom::Rand32::new(1234);

    for _ in 0..1000 {
        let sphere = random_sphere(&mut rng);
        let pt = random_point(&mut rng);
        let clamped = sphere.clamp_point(&pt);

        assert!(sphere.distance_to_point(&clamped) <= 1.0e-4);

        if sphere.contains_point(&pt) {
            assert_eq!(clamped, pt);
        }
    }
}

#[test]
fn bounding_box_of_a_sphere() {
    let sphere = BoundingSphere::new(Point3::origin(), 5.0);
    let aabb = sphere.aabb();
    assert_eq!(aabb.mins, Point3::new(-5.0, -5.0, -5.0));
    assert_eq!(aabb.maxs, Point3::new(5.0, 5.0, 5.0));

    let mut out = Aabb::new_invalid();
    assert_eq!(*sphere.aabb_to(&mut out), aabb);
}

#[test]
fn bounding_box_of_an_empty_sphere_is_its_center() {
    let sphere = BoundingSphere::new(Point3::new(1.0, 2.0, 3.0), 0.0);
    let aabb = sphere.aabb();
    assert_eq!(aabb.mins, sphere.center);
    assert_eq!(aabb.maxs, sphere.center);
}
