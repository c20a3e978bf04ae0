extern crate nalgebra as na;

use na::{Matrix4, Point3, Unit, Vector3};
use orb3d::bounding_volume::{BoundingSphere, BoundingVolume};
use orb3d::shape::Plane;

/// An axis-aligned "view box" made of six inward-facing planes.
fn view_box(half_extents: Vector3<f32>) -> [Plane; 6] {
    let mut planes = [Plane::xy(); 6];

    for i in 0..3 {
        let axis = Unit::new_unchecked(Vector3::ith(i, 1.0));
        planes[i * 2] = Plane::from_normal_and_point(axis, &Point3::from(-half_extents));
        planes[i * 2 + 1] = Plane::from_normal_and_point(-axis, &Point3::from(half_extents));
    }

    planes
}

fn is_visible(planes: &[Plane], sphere: &BoundingSphere) -> bool {
    planes
        .iter()
        .all(|plane| plane.signed_distance(&sphere.center) >= -sphere.radius)
}

fn main() {
    let planes = view_box(Vector3::new(10.0, 5.0, 20.0));

    /*
     * Compute the bounding sphere of a small point cloud.
     */
    let pts = [
        Point3::new(1.0, 0.0, 0.0),
        Point3::new(-1.0, 0.0, 0.0),
        Point3::new(0.0, 1.0, 0.0),
        Point3::new(0.0, -1.0, 0.5),
    ];
    let model = BoundingSphere::from_points(&pts);
    println!("Model bounds: {:?}", model);

    /*
     * Place instances of the model in the world and cull them.
     */
    for x in [-30.0, -10.5, 0.0, 9.0, 12.0] {
        let world = Matrix4::new_translation(&Vector3::new(x, 0.0, 0.0))
            * Matrix4::new_nonuniform_scaling(&Vector3::new(1.0, 2.0, 1.0));
        let mut instance = model;
        let _ = instance.apply_matrix4(&world);

        let straddles = planes.iter().any(|plane| instance.intersects_plane(plane));
        println!(
            "instance at x = {x:>6}: radius = {:.2}, visible = {}, straddles a side = {}",
            instance.radius,
            is_visible(&planes, &instance),
            straddles
        );
    }

    /*
     * Merge every visible instance into a single bounding sphere.
     */
    let merged = [0.0, 4.0, 8.0]
        .iter()
        .map(|x| model.transform_by(&na::Isometry3::translation(*x, 0.0, 0.0)))
        .reduce(|acc, sphere| acc.merged(&sphere));

    if let Some(merged) = merged {
        println!("Merged bounds: {:?} ({:?})", merged, merged.aabb());
    }
}
