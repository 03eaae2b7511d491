use crate::matrix::TridiagonalMatrix;

impl TridiagonalMatrix {
    /// The determinant of the matrix.
    ///
    /// Uses the three-term recurrence over leading principal
    /// submatrices,
    /// `det(k) = diag(k) * det(k - 1) - sub(k) * sup(k - 1) * det(k - 2)`,
    /// evaluated from the top-left corner down.
    /// No division is done, so there is no error path.
    ///
    /// # Notes
    ///
    /// * The result may be zero, or very large or small in
    ///   magnitude. Deciding whether a matrix is singular
    ///   requires a tolerance chosen by the caller.
    ///
    /// # Examples
    ///
    /// ```
    /// let m = tdma::TridiagonalMatrix::new(vec![1., 2., 3., 4.]).unwrap();
    /// assert_eq!(m.determinant(), 4. * 1. - 3. * 2.);
    /// ```
    pub fn determinant(&self) -> f64 {
        let mut previous = self.diag_at(0);
        if self.size() == 1 {
            return previous;
        }
        let mut current = self.diag_at(1) * previous - self.sub_at(1) * self.sup_at(0);
        for k in 2..self.size() {
            let next =
                self.diag_at(k) * current - self.sub_at(k) * self.sup_at(k - 1) * previous;
            previous = current;
            current = next;
        }
        current
    }
}

/// The determinant of `matrix`.
///
/// See [`TridiagonalMatrix::determinant`].
pub fn determinant(matrix: &TridiagonalMatrix) -> f64 {
    matrix.determinant()
}
