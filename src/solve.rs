use crate::error::{TdmaFailure, TdmaResult};
use crate::matrix::TridiagonalMatrix;

// Checks for diag(row) == sub(row) * c[row - 1] before subtracting,
// so that an exact zero pivot is never used as a divisor.
fn check_pivot(matrix: &TridiagonalMatrix, row: usize, previous: f64) -> Result<(), TdmaFailure> {
    let diagonal = matrix.diag_at(row);
    let subdiagonal = matrix.sub_at(row);
    if diagonal == subdiagonal * previous {
        Err(TdmaFailure::DegeneratePivot {
            row,
            diagonal,
            subdiagonal,
            previous,
        })
    } else {
        Ok(())
    }
}

fn modified_superdiagonal(matrix: &TridiagonalMatrix) -> Result<Vec<f64>, TdmaFailure> {
    let n = matrix.size();
    if matrix.diag_at(0) == 0.0 {
        return Err(TdmaFailure::ZeroPivot);
    }
    let mut c = Vec::with_capacity(n - 1);
    if n == 1 {
        return Ok(c);
    }
    c.push(matrix.sup_at(0) / matrix.diag_at(0));
    for i in 1..n - 1 {
        check_pivot(matrix, i, c[i - 1])?;
        c.push(matrix.sup_at(i) / (matrix.diag_at(i) - matrix.sub_at(i) * c[i - 1]));
    }
    check_pivot(matrix, n - 1, c[n - 2])?;
    Ok(c)
}

impl TridiagonalMatrix {
    /// Solve `self * x = r` using the tridiagonal matrix algorithm
    /// (Thomas algorithm).
    ///
    /// Runs in `O(n)` time, allocating two work vectors.
    /// No pivoting is done.
    ///
    /// # Errors
    ///
    /// [`TdmaError::TdmaFailure`](crate::TdmaError::TdmaFailure) when:
    ///
    /// * `r.len() != self.size()`, see [`TdmaFailure::RhsLength`].
    /// * The diagonal entry of row 0 is zero, see [`TdmaFailure::ZeroPivot`].
    /// * Forward elimination reaches an exact zero pivot,
    ///   see [`TdmaFailure::DegeneratePivot`].
    ///
    /// # Notes
    ///
    /// * Only exact zero pivots are detected.
    ///   A pivot that is merely close to zero gives
    ///   a result that may be numerically poor.
    /// * Some non-singular systems cannot be solved without
    ///   reordering rows, which this function does not do.
    ///
    /// # Examples
    ///
    /// ```
    /// let m = tdma::TridiagonalMatrix::new(vec![
    ///     2., 1.,
    ///     1., 2., 1.,
    ///     1., 2., 1.,
    ///     1., 2.,
    /// ]).unwrap();
    /// let x = m.solve(&[4., 8., 12., 11.]).unwrap();
    /// for (xi, expected) in x.iter().zip([1., 2., 3., 4.]) {
    ///     assert!((xi - expected).abs() < 1e-12);
    /// }
    /// ```
    pub fn solve(&self, r: &[f64]) -> TdmaResult<Vec<f64>> {
        let n = self.size();
        if r.len() != n {
            return Err(TdmaFailure::RhsLength {
                expected: n,
                got: r.len(),
            }
            .into());
        }
        let c = modified_superdiagonal(self)?;

        let mut d = Vec::with_capacity(n);
        d.push(r[0] / self.diag_at(0));
        for i in 1..n {
            let sub = self.sub_at(i);
            d.push((r[i] - sub * d[i - 1]) / (self.diag_at(i) - sub * c[i - 1]));
        }

        let mut x = vec![0.0; n];
        x[n - 1] = d[n - 1];
        for i in (0..n - 1).rev() {
            x[i] = d[i] - c[i] * x[i + 1];
        }
        Ok(x)
    }
}

/// Solve `matrix * x = r`.
///
/// See [`TridiagonalMatrix::solve`].
pub fn solve(matrix: &TridiagonalMatrix, r: &[f64]) -> TdmaResult<Vec<f64>> {
    matrix.solve(r)
}
