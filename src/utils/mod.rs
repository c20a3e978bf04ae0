//! Various unsorted geometrical and logical operators.

pub use self::matrix_ops::MatrixOps;

mod matrix_ops;
