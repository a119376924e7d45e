//! Factories for the affine transforms applied to a particle's point set.
//!
//! Rotation and scaling act about the origin and are applied by left
//! multiplication; translation is a 2×n matrix that is added to the points.

use crate::matrix::Matrix;

/// Counter-clockwise rotation by `theta` radians.
pub fn rotation_matrix(theta: f64) -> Matrix {
    let (sin, cos) = theta.sin_cos();
    Matrix::from_rows(&[[cos, -sin], [sin, cos]])
}

/// Uniform scale by `c`.
pub fn scaling_matrix(c: f64) -> Matrix {
    Matrix::from_rows(&[[c, 0.0], [0.0, c]])
}

/// 2×`cols` matrix whose every column is `(dx, dy)`.
pub fn translation_matrix(dx: f64, dy: f64, cols: usize) -> Matrix {
    let mut t = Matrix::zeros(2, cols);
    for col in 0..cols {
        t[(0, col)] = dx;
        t[(1, col)] = dy;
    }
    t
}
