//! Bounding sphere.

use crate::bounding_volume::{Aabb, BoundingVolume};
use crate::math::{Isometry, Matrix, Point, Real, Vector};
use crate::shape::Plane;
use crate::utils::MatrixOps;
use approx::{AbsDiffEq, RelativeEq};
use num::Zero;

#[cfg(not(feature = "std"))]
use na::ComplexField; // for .abs()

/// A Bounding Sphere.
///
/// The sphere is described by its `center` and its `radius`. Any radius is accepted at
/// construction, but a radius smaller than or equal to zero denotes an empty sphere (see
/// [`BoundingSphere::is_empty`]).
///
/// Every containment or intersection test compares squared distances against a squared
/// radius so no square root is computed unless the result is itself a distance.
///
/// Methods that modify the sphere in-place return `&mut Self` so they can be chained:
///
/// ```
/// # #[cfg(all(feature = "dim3", feature = "f32"))] {
/// use orb3d::bounding_volume::BoundingSphere;
/// use orb3d::math::{Point, Vector};
///
/// let mut sphere = BoundingSphere::default();
/// sphere
///     .set(Point::new(1.0, 0.0, 0.0), 2.0)
///     .translate(&Vector::new(0.0, 3.0, 0.0));
///
/// assert_eq!(sphere.center, Point::new(1.0, 3.0, 0.0));
/// assert!(sphere.contains_point(&Point::new(1.0, 4.5, 0.0)));
/// # }
/// ```
#[derive(Debug, PartialEq, Copy, Clone)]
pub struct BoundingSphere {
    /// The center of the sphere.
    pub center: Point<Real>,
    /// The radius of the sphere.
    pub radius: Real,
}

/// Error returned by [`BoundingSphere::try_new`].
#[derive(thiserror::Error, Copy, Clone, Debug, PartialEq)]
pub enum BoundingSphereError {
    /// The radius is NaN or infinite.
    #[error("the bounding sphere radius must be finite (got {0})")]
    InvalidRadius(Real),
    /// At least one coordinate of the center is NaN or infinite.
    #[error("the bounding sphere center must have finite coordinates")]
    NonFiniteCenter,
}

impl Default for BoundingSphere {
    /// An empty sphere centered at the origin.
    fn default() -> Self {
        BoundingSphere::new(Point::origin(), 0.0)
    }
}

impl BoundingSphere {
    /// Creates a new bounding sphere.
    ///
    /// No validation is performed on the arguments. Use [`BoundingSphere::try_new`] to reject
    /// non-finite inputs.
    pub fn new(center: Point<Real>, radius: Real) -> BoundingSphere {
        BoundingSphere { center, radius }
    }

    /// Creates a new bounding sphere after checking that its center and radius are finite.
    pub fn try_new(
        center: Point<Real>,
        radius: Real,
    ) -> Result<BoundingSphere, BoundingSphereError> {
        if !radius.is_finite() {
            return Err(BoundingSphereError::InvalidRadius(radius));
        }

        if center.coords.iter().any(|e| !e.is_finite()) {
            return Err(BoundingSphereError::NonFiniteCenter);
        }

        Ok(BoundingSphere::new(center, radius))
    }

    /// Computes a bounding sphere of the given points.
    ///
    /// See [`BoundingSphere::set_from_points`] for details.
    pub fn from_points(pts: &[Point<Real>]) -> BoundingSphere {
        let mut res = BoundingSphere::default();
        let _ = res.set_from_points(pts, None);
        res
    }

    /// Computes the bounding sphere of the given points with the given center.
    pub fn from_points_with_center(pts: &[Point<Real>], center: Point<Real>) -> BoundingSphere {
        let mut res = BoundingSphere::default();
        let _ = res.set_from_points(pts, Some(center));
        res
    }

    /// The bounding sphere center.
    #[inline]
    pub fn center(&self) -> &Point<Real> {
        &self.center
    }

    /// The bounding sphere radius.
    #[inline]
    pub fn radius(&self) -> Real {
        self.radius
    }

    /// Sets both the center and the radius of this sphere.
    #[inline]
    pub fn set(&mut self, center: Point<Real>, radius: Real) -> &mut Self {
        self.center = center;
        self.radius = radius;
        self
    }

    /// Copies the center and radius of `other` into `self`.
    #[inline]
    pub fn copy_from(&mut self, other: &BoundingSphere) -> &mut Self {
        self.set(other.center, other.radius)
    }

    /// Makes this sphere enclose all the given points.
    ///
    /// If `center` is `None`, the center of the points' AABB is used. That center is not
    /// their barycenter and the result is not the smallest enclosing sphere, but every point
    /// is contained in it. The radius is the largest distance between the center and any
    /// point, or zero if `pts` is empty.
    pub fn set_from_points(
        &mut self,
        pts: &[Point<Real>],
        center: Option<Point<Real>>,
    ) -> &mut Self {
        if pts.is_empty() {
            log::debug!("Bounding sphere of an empty point cloud: its radius is set to zero.");
        }

        let center = center.unwrap_or_else(|| Aabb::from_points(pts.iter().copied()).center());
        let (center, radius) =
            super::bounding_sphere_utils::point_cloud_bounding_sphere_with_center(pts, center);

        self.set(center, radius)
    }

    /// Is this sphere empty, i.e., is its radius smaller than or equal to zero?
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.radius <= 0.0
    }

    /// Checks if `pt` is inside of this sphere. Points on its surface are included.
    #[inline]
    pub fn contains_point(&self, pt: &Point<Real>) -> bool {
        na::distance_squared(pt, &self.center) <= self.radius * self.radius
    }

    /// The signed distance between `pt` and the surface of this sphere.
    ///
    /// The result is negative if the point is inside of the sphere.
    #[inline]
    pub fn distance_to_point(&self, pt: &Point<Real>) -> Real {
        na::distance(pt, &self.center) - self.radius
    }

    /// Tests if this sphere intersects `other`. Touching spheres intersect.
    #[inline]
    pub fn intersects_sphere(&self, other: &BoundingSphere) -> bool {
        let sum_radius = self.radius + other.radius;
        na::distance_squared(&other.center, &self.center) <= sum_radius * sum_radius
    }

    /// Tests if this sphere intersects the given AABB.
    ///
    /// Always gives the same result as `aabb.intersects_sphere(self)`.
    #[inline]
    pub fn intersects_aabb(&self, aabb: &Aabb) -> bool {
        aabb.intersects_sphere(self)
    }

    /// Tests if this sphere intersects the given plane.
    #[inline]
    pub fn intersects_plane(&self, plane: &Plane) -> bool {
        plane.signed_distance(&self.center).abs() <= self.radius
    }

    /// Clamps `pt` into this sphere.
    ///
    /// Points inside of the sphere are returned unchanged. Points outside of it are moved to
    /// the sphere surface along the ray from the center to the point.
    #[inline]
    pub fn clamp_point(&self, pt: &Point<Real>) -> Point<Real> {
        let mut res = *pt;
        let _ = self.clamp_point_to(pt, &mut res);
        res
    }

    /// Clamps `pt` into this sphere and writes the result to `out`.
    ///
    /// Computes the same result as [`BoundingSphere::clamp_point`].
    #[inline]
    pub fn clamp_point_to<'a>(
        &self,
        pt: &Point<Real>,
        out: &'a mut Point<Real>,
    ) -> &'a mut Point<Real> {
        let distance_squared = na::distance_squared(&self.center, pt);
        *out = *pt;

        if distance_squared > self.radius * self.radius {
            let dir = (*pt - self.center).normalize();
            *out = self.center + dir * self.radius;
        }

        out
    }

    /// The smallest AABB enclosing this sphere.
    #[inline]
    pub fn aabb(&self) -> Aabb {
        Aabb::from_half_extents(self.center, Vector::repeat(self.radius))
    }

    /// Computes the smallest AABB enclosing this sphere and writes it to `out`.
    #[inline]
    pub fn aabb_to<'a>(&self, out: &'a mut Aabb) -> &'a mut Aabb {
        *out = self.aabb();
        out
    }

    /// Transforms this sphere by the homogeneous matrix `m`.
    ///
    /// The center is transformed as a point. The radius is multiplied by the largest scaling
    /// factor of `m` along its three axes. Non-uniform scaling thus gives a sphere that may be
    /// larger than the tightest bounding sphere of the transformed volume.
    pub fn apply_matrix4(&mut self, m: &Matrix<Real>) -> &mut Self {
        if !m.is_affine() {
            log::debug!("Bounding sphere transformed by a projective matrix.");
        }

        self.center = m.transform_point(&self.center);
        self.radius *= m.max_scale_on_axis();
        self
    }

    /// Translates this sphere by `offset`.
    #[inline]
    pub fn translate(&mut self, offset: &Vector<Real>) -> &mut Self {
        self.center += offset;
        self
    }

    /// Transforms this bounding sphere by `m`.
    ///
    /// Isometries do not change the radius.
    #[inline]
    pub fn transform_by(&self, m: &Isometry<Real>) -> BoundingSphere {
        BoundingSphere::new(m * self.center, self.radius)
    }
}

impl BoundingVolume for BoundingSphere {
    #[inline]
    fn center(&self) -> Point<Real> {
        *self.center()
    }

    #[inline]
    fn intersects(&self, other: &BoundingSphere) -> bool {
        self.intersects_sphere(other)
    }

    #[inline]
    fn contains(&self, other: &BoundingSphere) -> bool {
        let distance = na::distance(&other.center, &self.center);
        distance + other.radius <= self.radius
    }

    #[inline]
    fn merge(&mut self, other: &BoundingSphere) {
        let mut dir = other.center - self.center;
        let norm = dir.normalize_mut();

        if norm.is_zero() {
            if other.radius > self.radius {
                self.radius = other.radius
            }
        } else {
            let s_center_dir = self.center.coords.dot(&dir);
            let o_center_dir = other.center.coords.dot(&dir);

            let right = if s_center_dir + self.radius > o_center_dir + other.radius {
                self.center + dir * self.radius
            } else {
                other.center + dir * other.radius
            };

            let left = if -s_center_dir + self.radius > -o_center_dir + other.radius {
                self.center - dir * self.radius
            } else {
                other.center - dir * other.radius
            };

            self.center = na::center(&left, &right);
            self.radius = na::distance(&right, &self.center);
        }
    }

    #[inline]
    fn merged(&self, other: &BoundingSphere) -> BoundingSphere {
        let mut res = *self;
        res.merge(other);
        res
    }

    #[inline]
    fn loosen(&mut self, amount: Real) {
        assert!(amount >= 0.0, "The loosening margin must be positive.");
        self.radius += amount
    }

    #[inline]
    fn loosened(&self, amount: Real) -> BoundingSphere {
        let mut res = *self;
        res.loosen(amount);
        res
    }

    #[inline]
    fn tighten(&mut self, amount: Real) {
        assert!(amount >= 0.0, "The tightening margin must be positive.");
        assert!(amount <= self.radius, "The tightening margin is to large.");
        self.radius -= amount
    }

    #[inline]
    fn tightened(&self, amount: Real) -> BoundingSphere {
        let mut res = *self;
        res.tighten(amount);
        res
    }
}

impl AbsDiffEq for BoundingSphere {
    type Epsilon = Real;

    #[inline]
    fn default_epsilon() -> Real {
        Real::default_epsilon()
    }

    #[inline]
    fn abs_diff_eq(&self, other: &Self, epsilon: Real) -> bool {
        self.center.abs_diff_eq(&other.center, epsilon)
            && self.radius.abs_diff_eq(&other.radius, epsilon)
    }
}

impl RelativeEq for BoundingSphere {
    #[inline]
    fn default_max_relative() -> Real {
        Real::default_max_relative()
    }

    #[inline]
    fn relative_eq(&self, other: &Self, epsilon: Real, max_relative: Real) -> bool {
        self.center.relative_eq(&other.center, epsilon, max_relative)
            && self.radius.relative_eq(&other.radius, epsilon, max_relative)
    }
}
