//! Point inclusion and projection.

#[doc(inline)]
pub use self::point_query::{PointProjection, PointQuery};

mod point_aabb;
mod point_bounding_sphere;
mod point_plane;
#[doc(hidden)]
pub mod point_query;
