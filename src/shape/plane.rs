//! Infinite plane shape.
use crate::math::{Point, Real, Vector};
use na::Unit;

/// An infinite plane in 3D.
///
/// The plane is the set of points `p` such that `normal.dot(p) + constant == 0`. The
/// signed distance of a point to the plane is positive on the side `normal` points to and
/// negative on the other side.
#[derive(PartialEq, Debug, Clone, Copy)]
#[repr(C)]
pub struct Plane {
    /// The plane's unit normal.
    pub normal: Unit<Vector<Real>>,
    /// The signed distance from the origin to the plane, measured along `-normal`.
    pub constant: Real,
}

impl Plane {
    /// Builds a new plane from its unit normal and constant.
    #[inline]
    pub fn new(normal: Unit<Vector<Real>>, constant: Real) -> Plane {
        Plane { normal, constant }
    }

    /// Builds the plane with the given unit normal and passing through `point`.
    #[inline]
    pub fn from_normal_and_point(normal: Unit<Vector<Real>>, point: &Point<Real>) -> Plane {
        let constant = -normal.dot(&point.coords);
        Plane { normal, constant }
    }

    /// The plane `z = 0` with a normal pointing toward `+z`.
    #[inline]
    pub fn xy() -> Plane {
        Plane::new(Vector::z_axis(), 0.0)
    }

    /// The signed distance from `pt` to this plane.
    #[inline]
    pub fn signed_distance(&self, pt: &Point<Real>) -> Real {
        self.normal.dot(&pt.coords) + self.constant
    }

    /// Returns this plane with the orientation of its normal reversed.
    #[inline]
    #[must_use]
    pub fn flipped(&self) -> Plane {
        Plane::new(-self.normal, -self.constant)
    }
}
