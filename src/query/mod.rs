//! Non-persistent geometric queries.
//!
//! Point projection and inclusion are available through the [`PointQuery`] trait,
//! implemented by every bounding volume and by [`Plane`](crate::shape::Plane).
//!
//! The functions exported by the `details` submodule test bounding spheres against other
//! objects placed in different frames. They have the form
//! `intersection_test_[shape1]_[shape2]()`.

pub use self::point::{PointProjection, PointQuery};

mod intersection_test;
pub mod point;

/// Queries dedicated to specific pairs of shapes.
pub mod details {
    pub use super::intersection_test::*;
}
