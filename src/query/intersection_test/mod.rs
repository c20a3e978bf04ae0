//! Implementation details of the intersection tests.

pub use self::intersection_test_sphere_point_query::{
    intersection_test_point_query_sphere, intersection_test_sphere_point_query,
};
pub use self::intersection_test_sphere_sphere::intersection_test_sphere_sphere;

mod intersection_test_sphere_point_query;
mod intersection_test_sphere_sphere;
