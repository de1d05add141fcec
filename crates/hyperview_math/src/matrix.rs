//! Small dense matrices
//!
//! Matrices are row-major and sized at runtime. Every product checks its
//! operand shapes and reports a [`MatrixError`] instead of panicking, so the
//! callers decide whether a mismatch is fatal.

use std::fmt;

/// (rows, columns)
pub type Shape = (usize, usize);

/// Error type for matrix construction and arithmetic
#[derive(Debug, Clone, PartialEq)]
pub enum MatrixError {
    /// `left.columns != right.rows` in a product
    DimensionMismatch { left: Shape, right: Shape },
    /// The value buffer does not hold exactly `rows * columns` entries
    BufferSize { rows: usize, columns: usize, len: usize },
}

impl fmt::Display for MatrixError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatrixError::DimensionMismatch { left, right } => write!(
                f,
                "Invalid matrix multiplication: {}x{} * {}x{}",
                left.0, left.1, right.0, right.1
            ),
            MatrixError::BufferSize { rows, columns, len } => write!(
                f,
                "Matrix buffer of {} values does not fit a {}x{} matrix",
                len, rows, columns
            ),
        }
    }
}

impl std::error::Error for MatrixError {}

/// Check that `left * right` is defined.
///
/// The contract is `left.columns == right.rows`.
pub fn check_product(left: Shape, right: Shape) -> Result<(), MatrixError> {
    if left.1 != right.0 {
        return Err(MatrixError::DimensionMismatch { left, right });
    }
    Ok(())
}

/// Row-major matrix of `f64`
#[derive(Clone, Debug, PartialEq)]
pub struct Matrix {
    rows: usize,
    columns: usize,
    values: Vec<f64>,
}

impl Matrix {
    /// Create a matrix from row-major values
    pub fn new(rows: usize, columns: usize, values: Vec<f64>) -> Result<Self, MatrixError> {
        if values.len() != rows * columns {
            return Err(MatrixError::BufferSize { rows, columns, len: values.len() });
        }
        Ok(Self { rows, columns, values })
    }

    /// All-zero matrix
    pub fn zeros(rows: usize, columns: usize) -> Self {
        Self {
            rows,
            columns,
            values: vec![0.0; rows * columns],
        }
    }

    /// Square identity matrix
    pub fn identity(n: usize) -> Self {
        let mut m = Self::zeros(n, n);
        for i in 0..n {
            m.set(i, i, 1.0);
        }
        m
    }

    /// Diagonal matrix from the given entries
    pub fn diagonal(entries: &[f64]) -> Self {
        let mut m = Self::zeros(entries.len(), entries.len());
        for (i, &v) in entries.iter().enumerate() {
            m.set(i, i, v);
        }
        m
    }

    /// Build from fixed-width rows
    pub fn from_rows<const N: usize>(rows: &[[f64; N]]) -> Self {
        Self {
            rows: rows.len(),
            columns: N,
            values: rows.iter().flatten().copied().collect(),
        }
    }

    /// Column vector (n x 1)
    pub fn column(values: &[f64]) -> Self {
        Self {
            rows: values.len(),
            columns: 1,
            values: values.to_vec(),
        }
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn columns(&self) -> usize {
        self.columns
    }

    #[inline]
    pub fn shape(&self) -> Shape {
        (self.rows, self.columns)
    }

    /// Entry at (row, column)
    ///
    /// Panics if out of bounds, like slice indexing.
    #[inline]
    pub fn get(&self, row: usize, column: usize) -> f64 {
        assert!(row < self.rows && column < self.columns, "matrix index out of bounds");
        self.values[row * self.columns + column]
    }

    #[inline]
    pub fn set(&mut self, row: usize, column: usize, value: f64) {
        assert!(row < self.rows && column < self.columns, "matrix index out of bounds");
        self.values[row * self.columns + column] = value;
    }

    /// Matrix product `self * rhs`
    pub fn multiply(&self, rhs: &Matrix) -> Result<Matrix, MatrixError> {
        check_product(self.shape(), rhs.shape())?;

        let mut out = Matrix::zeros(self.rows, rhs.columns);
        for row in 0..self.rows {
            for col in 0..rhs.columns {
                let mut sum = 0.0;
                for k in 0..self.columns {
                    sum += self.get(row, k) * rhs.get(k, col);
                }
                out.set(row, col, sum);
            }
        }
        Ok(out)
    }
}

/// Free-function form of [`Matrix::multiply`]
pub fn multiply(a: &Matrix, b: &Matrix) -> Result<Matrix, MatrixError> {
    a.multiply(b)
}

/// Debug print, one bracketed row per line
impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.rows {
            write!(f, "[")?;
            for col in 0..self.columns {
                write!(f, "{} ", self.get(row, col))?;
            }
            writeln!(f, "]")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-12;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < EPSILON
    }

    #[test]
    fn test_new_rejects_wrong_buffer() {
        let err = Matrix::new(2, 2, vec![1.0, 2.0, 3.0]).unwrap_err();
        assert_eq!(err, MatrixError::BufferSize { rows: 2, columns: 2, len: 3 });
    }

    #[test]
    fn test_identity() {
        let m = Matrix::identity(3);
        for i in 0..3 {
            for j in 0..3 {
                assert_eq!(m.get(i, j), if i == j { 1.0 } else { 0.0 });
            }
        }
    }

    #[test]
    fn test_multiply_2x3_by_3x2() {
        let a = Matrix::from_rows(&[[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]]);
        let b = Matrix::from_rows(&[[7.0, 8.0], [9.0, 10.0], [11.0, 12.0]]);
        let c = a.multiply(&b).unwrap();

        assert_eq!(c.shape(), (2, 2));
        assert!(approx_eq(c.get(0, 0), 58.0));
        assert!(approx_eq(c.get(0, 1), 64.0));
        assert!(approx_eq(c.get(1, 0), 139.0));
        assert!(approx_eq(c.get(1, 1), 154.0));
    }

    #[test]
    fn test_row_times_column_is_scalar() {
        let row = Matrix::from_rows(&[[1.0, 2.0, 3.0]]);
        let col = Matrix::column(&[4.0, 5.0, 6.0]);
        let dot = row.multiply(&col).unwrap();
        assert_eq!(dot.shape(), (1, 1));
        assert!(approx_eq(dot.get(0, 0), 32.0));
    }

    #[test]
    fn test_column_times_row_is_outer_product() {
        let row = Matrix::from_rows(&[[1.0, 2.0, 3.0]]);
        let col = Matrix::column(&[4.0, 5.0, 6.0]);
        let outer = col.multiply(&row).unwrap();
        assert_eq!(outer.shape(), (3, 3));
        assert!(approx_eq(outer.get(2, 0), 6.0));
        assert!(approx_eq(outer.get(0, 2), 12.0));
        assert!(approx_eq(outer.get(1, 1), 10.0));
    }

    #[test]
    fn test_dimension_mismatch_reports_both_shapes() {
        let a = Matrix::zeros(2, 3);
        let b = Matrix::zeros(2, 3);
        let err = a.multiply(&b).unwrap_err();
        assert_eq!(err, MatrixError::DimensionMismatch { left: (2, 3), right: (2, 3) });

        let msg = format!("{}", err);
        assert!(msg.contains("2x3 * 2x3"));
    }

    #[test]
    fn test_rows_equal_columns_contract_is_rejected() {
        // 2x3 * 4x2 satisfies rows(a) == columns(b) but has no defined product.
        let a = Matrix::zeros(2, 3);
        let b = Matrix::zeros(4, 2);
        assert_eq!(a.rows(), b.columns());
        assert!(check_product(a.shape(), b.shape()).is_err());
        assert!(a.multiply(&b).is_err());

        // 1x3 * 3x4 is a valid product even though rows(a) != columns(b).
        let c = Matrix::zeros(1, 3);
        let d = Matrix::zeros(3, 4);
        assert_ne!(c.rows(), d.columns());
        assert_eq!(c.multiply(&d).unwrap().shape(), (1, 4));
    }

    #[test]
    fn test_identity_is_neutral() {
        let a = Matrix::from_rows(&[[1.0, 2.0], [3.0, 4.0]]);
        assert_eq!(Matrix::identity(2).multiply(&a).unwrap(), a);
        assert_eq!(a.multiply(&Matrix::identity(2)).unwrap(), a);
    }

    #[test]
    fn test_display_format() {
        let m = Matrix::from_rows(&[[1.0, 2.5], [3.0, 4.0]]);
        assert_eq!(format!("{}", m), "[1 2.5 ]\n[3 4 ]\n");
    }

    #[test]
    fn test_diagonal() {
        let m = Matrix::diagonal(&[2.0, 3.0]);
        assert_eq!(m, Matrix::from_rows(&[[2.0, 0.0], [0.0, 3.0]]));
    }
}
