use crate::error::{TdmaError, TdmaResult};

/// A dense, row-major, square matrix.
///
/// Returned by [`TridiagonalMatrix::to_dense`](crate::TridiagonalMatrix::to_dense).
///
/// # Examples
///
/// ```
/// let m = tdma::TridiagonalMatrix::new(vec![3., 1., 1., 4., 2., 2., 5.]).unwrap();
/// let dense = m.to_dense();
/// assert_eq!(dense.nrows(), 3);
/// assert_eq!(dense.row(1), Some(&[1., 4., 2.][..]));
/// assert_eq!(dense.row(2), Some(&[0., 2., 5.][..]));
/// assert!(dense.row(3).is_none());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct DenseMatrix {
    data: Vec<f64>,
    nrows: usize,
}

impl DenseMatrix {
    /// An `nrows` x `nrows` matrix of zeros.
    pub fn zeros(nrows: usize) -> Self {
        Self {
            data: vec![0.0; nrows * nrows],
            nrows,
        }
    }

    fn index(&self, row: usize, column: usize) -> Option<usize> {
        if row < self.nrows && column < self.nrows {
            Some(row * self.nrows + column)
        } else {
            None
        }
    }

    /// Get the element at `(row, column)`.
    ///
    /// Returns `None` if either index is out of range.
    pub fn get(&self, row: usize, column: usize) -> Option<f64> {
        self.index(row, column).map(|i| self.data[i])
    }

    /// Set the element at `(row, column)`.
    ///
    /// # Panics
    ///
    /// If either index is out of range.
    pub fn set(&mut self, row: usize, column: usize, value: f64) {
        match self.index(row, column) {
            Some(i) => self.data[i] = value,
            None => panic!(
                "index ({row}, {column}) out of range for {} x {} matrix",
                self.nrows, self.nrows
            ),
        }
    }

    /// A row of the matrix.
    ///
    /// Returns `None` if `row` is out of range.
    pub fn row(&self, row: usize) -> Option<&[f64]> {
        if row < self.nrows {
            let start = row * self.nrows;
            Some(&self.data[start..start + self.nrows])
        } else {
            None
        }
    }

    /// Number of rows (and columns)
    pub fn nrows(&self) -> usize {
        self.nrows
    }

    /// Compute `self * x`.
    ///
    /// # Errors
    ///
    /// [`TdmaError::VectorLengthError`] if `x.len() != self.nrows()`.
    pub fn mul_vec(&self, x: &[f64]) -> TdmaResult<Vec<f64>> {
        if x.len() != self.nrows {
            return Err(TdmaError::VectorLengthError {
                expected: self.nrows,
                got: x.len(),
            });
        }
        Ok((0..self.nrows)
            .map(|i| {
                let start = i * self.nrows;
                self.data[start..start + self.nrows]
                    .iter()
                    .zip(x.iter())
                    .fold(0.0, |acc, (a, b)| acc + a * b)
            })
            .collect())
    }
}
