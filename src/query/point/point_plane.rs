use crate::math::{Point, Real};
use crate::query::{PointProjection, PointQuery};
use crate::shape::Plane;

/// The plane is seen as the boundary of the half-space its normal points away from: points
/// with a negative signed distance are inside.
impl PointQuery for Plane {
    #[inline]
    fn project_local_point(&self, pt: &Point<Real>, solid: bool) -> PointProjection {
        let d = self.signed_distance(pt);
        let inside = d <= 0.0;

        if inside && solid {
            PointProjection::new(true, *pt)
        } else {
            PointProjection::new(inside, *pt + (-*self.normal * d))
        }
    }

    #[inline]
    fn distance_to_local_point(&self, pt: &Point<Real>, solid: bool) -> Real {
        let dist = self.signed_distance(pt);

        if dist < 0.0 && solid {
            0.0
        } else {
            // This will automatically be negative if the point is inside.
            dist
        }
    }

    #[inline]
    fn contains_local_point(&self, pt: &Point<Real>) -> bool {
        self.signed_distance(pt) <= 0.0
    }
}
