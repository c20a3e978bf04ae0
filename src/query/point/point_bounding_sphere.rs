use crate::bounding_volume::BoundingSphere;
use crate::math::{Point, Real, Vector};
use crate::query::{PointProjection, PointQuery};

impl PointQuery for BoundingSphere {
    #[inline]
    fn project_local_point(&self, pt: &Point<Real>, solid: bool) -> PointProjection {
        let inside = self.contains_point(pt);

        if !inside || solid {
            return PointProjection::new(inside, self.clamp_point(pt));
        }

        // Hollow sphere: push the point back to the surface.
        let dir = (pt - self.center)
            .try_normalize(0.0)
            .unwrap_or_else(Vector::x);
        PointProjection::new(true, self.center + dir * self.radius)
    }

    #[inline]
    fn distance_to_local_point(&self, pt: &Point<Real>, solid: bool) -> Real {
        let dist = self.distance_to_point(pt);

        if solid && dist < 0.0 {
            0.0
        } else {
            dist
        }
    }

    #[inline]
    fn contains_local_point(&self, pt: &Point<Real>) -> bool {
        self.contains_point(pt)
    }
}
