//! Shapes the bounding volumes can be tested against.

pub use self::plane::Plane;

mod plane;
