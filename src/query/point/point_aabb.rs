use crate::bounding_volume::Aabb;
use crate::math::{Point, Real, Vector, DIM};
use crate::query::{PointProjection, PointQuery};

impl Aabb {
    fn do_project_local_point(&self, pt: &Point<Real>, solid: bool) -> (bool, Point<Real>) {
        let mins_pt = self.mins - pt;
        let pt_maxs = pt - self.maxs;
        let shift = mins_pt.sup(&na::zero()) - pt_maxs.sup(&na::zero());

        let inside = shift == Vector::zeros();

        if !inside {
            (false, pt + shift)
        } else if solid {
            (true, *pt)
        } else {
            // Inside of a hollow box: move to the closest face.
            let mut best = -Real::MAX;
            let mut is_mins = false;
            let mut best_id = 0;

            for i in 0..DIM {
                if mins_pt[i] < pt_maxs[i] {
                    if pt_maxs[i] > best {
                        best_id = i;
                        is_mins = false;
                        best = pt_maxs[i]
                    }
                } else if mins_pt[i] > best {
                    best_id = i;
                    is_mins = true;
                    best = mins_pt[i]
                }
            }

            let mut shift: Vector<Real> = na::zero();

            if is_mins {
                shift[best_id] = best;
            } else {
                shift[best_id] = -best;
            }

            (inside, pt + shift)
        }
    }
}

impl PointQuery for Aabb {
    #[inline]
    fn project_local_point(&self, pt: &Point<Real>, solid: bool) -> PointProjection {
        let (inside, ls_pt) = self.do_project_local_point(pt, solid);
        PointProjection::new(inside, ls_pt)
    }

    #[inline]
    fn contains_local_point(&self, pt: &Point<Real>) -> bool {
        Aabb::contains_local_point(self, pt)
    }
}
