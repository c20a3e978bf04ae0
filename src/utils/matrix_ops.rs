use crate::math::{Matrix, Real};
use na::ComplexField;

/// Extra operations with homogeneous 4x4 matrices.
pub trait MatrixOps {
    /// The largest scaling factor this matrix applies along any of the three axes.
    ///
    /// This is the norm of the longest column of the upper-left 3x3 block. Rotations and
    /// translations leave it unaffected.
    fn max_scale_on_axis(&self) -> Real;

    /// Checks that the last row of this matrix is `[0, 0, 0, 1]`, i.e., that it encodes an
    /// affine transformation without any perspective component.
    fn is_affine(&self) -> bool;
}

impl MatrixOps for Matrix<Real> {
    #[inline]
    fn max_scale_on_axis(&self) -> Real {
        let sq_scale_x = self.fixed_view::<3, 1>(0, 0).norm_squared();
        let sq_scale_y = self.fixed_view::<3, 1>(0, 1).norm_squared();
        let sq_scale_z = self.fixed_view::<3, 1>(0, 2).norm_squared();

        ComplexField::sqrt(sq_scale_x.max(sq_scale_y).max(sq_scale_z))
    }

    #[inline]
    fn is_affine(&self) -> bool {
        self[(3, 0)] == 0.0 && self[(3, 1)] == 0.0 && self[(3, 2)] == 0.0 && self[(3, 3)] == 1.0
    }
}
