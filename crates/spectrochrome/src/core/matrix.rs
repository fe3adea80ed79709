//! Exact 3 by 3 linear algebra for conversion matrices.

use crate::Float;

/// A 3 by 3 matrix in row-major order.
pub type Matrix = [[Float; 3]; 3];

/// The relative magnitude below which a determinant counts as zero.
///
/// The determinant is compared against the product of the column norms, which
/// bounds its magnitude by Hadamard's inequality. That makes the test
/// independent of the overall scale of the matrix.
const SINGULARITY_THRESHOLD: Float = 1e-10;

/// Multiply the 3 by 3 matrix and 3-element vector with each other, producing a
/// new 3-element vector.
#[inline]
pub(crate) fn multiply(matrix: &Matrix, vector: &[Float; 3]) -> [Float; 3] {
    let [row1, row2, row3] = matrix;

    [
        row1[0].mul_add(vector[0], row1[1].mul_add(vector[1], row1[2] * vector[2])),
        row2[0].mul_add(vector[0], row2[1].mul_add(vector[1], row2[2] * vector[2])),
        row3[0].mul_add(vector[0], row3[1].mul_add(vector[1], row3[2] * vector[2])),
    ]
}

/// Multiply two 3 by 3 matrices with each other.
#[cfg(test)]
pub(crate) fn multiply_matrices(left: &Matrix, right: &Matrix) -> Matrix {
    let mut product = [[0.0; 3]; 3];
    for (row, left_row) in product.iter_mut().zip(left.iter()) {
        for (column, entry) in row.iter_mut().enumerate() {
            *entry = left_row[0].mul_add(
                right[0][column],
                left_row[1].mul_add(right[1][column], left_row[2] * right[2][column]),
            );
        }
    }
    product
}

/// Assemble a matrix whose columns are the given vectors.
pub(crate) fn column_stack(columns: &[[Float; 3]; 3]) -> Matrix {
    let [c1, c2, c3] = columns;
    [
        [c1[0], c2[0], c3[0]],
        [c1[1], c2[1], c3[1]],
        [c1[2], c2[2], c3[2]],
    ]
}

/// Compute the matrix's determinant by cofactor expansion along the first row.
pub(crate) fn determinant(matrix: &Matrix) -> Float {
    let [[a, b, c], [d, e, f], [g, h, i]] = *matrix;
    a * (e * i - f * h) - b * (d * i - f * g) + c * (d * h - e * g)
}

/// Determine whether the matrix is singular or numerically too close to it.
pub(crate) fn is_singular(matrix: &Matrix) -> bool {
    let det = determinant(matrix);
    if !det.is_finite() {
        return true;
    }

    let mut scale = 1.0;
    for column in 0..3 {
        let norm = (matrix[0][column] * matrix[0][column]
            + matrix[1][column] * matrix[1][column]
            + matrix[2][column] * matrix[2][column])
            .sqrt();
        scale *= norm;
    }

    scale == 0.0 || det.abs() <= SINGULARITY_THRESHOLD * scale
}

/// Invert the matrix.
///
/// This function computes the exact inverse as the adjugate divided by the
/// determinant. It returns `None` for singular matrices.
pub(crate) fn invert(matrix: &Matrix) -> Option<Matrix> {
    if is_singular(matrix) {
        return None;
    }

    let [[a, b, c], [d, e, f], [g, h, i]] = *matrix;
    let det = determinant(matrix);

    Some([
        [(e * i - f * h) / det, (c * h - b * i) / det, (b * f - c * e) / det],
        [(f * g - d * i) / det, (a * i - c * g) / det, (c * d - a * f) / det],
        [(d * h - e * g) / det, (b * g - a * h) / det, (a * e - b * d) / det],
    ])
}

/// Solve the linear system `matrix · x = rhs` for `x`.
///
/// This function uses Cramer's rule and returns `None` for singular matrices.
pub(crate) fn solve(matrix: &Matrix, rhs: &[Float; 3]) -> Option<[Float; 3]> {
    if is_singular(matrix) {
        return None;
    }

    let det = determinant(matrix);
    let mut solution = [0.0; 3];
    for (column, value) in solution.iter_mut().enumerate() {
        let mut replaced = *matrix;
        for row in 0..3 {
            replaced[row][column] = rhs[row];
        }
        *value = determinant(&replaced) / det;
    }

    Some(solution)
}
