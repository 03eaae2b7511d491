use thiserror::Error;

/// Error type for this crate.
///
/// # Example
///
/// A tridiagonal matrix of size `n` needs exactly `3n - 2`
/// coefficients.
///
/// ```
/// let coefficients = vec![2.0, 1.0, 1.0];
/// assert!(matches!(
///     tdma::TridiagonalMatrix::new(coefficients),
///     Err(tdma::TdmaError::InvalidTridiagonalMatrix(3))
/// ));
/// ```
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum TdmaError {
    /// The number of coefficients is not `3n - 2` for any `n >= 1`.
    /// Stores the offending length.
    #[error("invalid tridiagonal matrix: length {0} must be 3n-2")]
    InvalidTridiagonalMatrix(usize),
    /// The bands passed to
    /// [`TridiagonalMatrix::from_bands`](crate::TridiagonalMatrix::from_bands)
    /// do not have lengths `n - 1`, `n`, and `n - 1`.
    #[error("invalid bands: subdiagonal {subdiagonal}, diagonal {diagonal}, superdiagonal {superdiagonal}")]
    BandLengthError {
        /// Length of the sub-diagonal band
        subdiagonal: usize,
        /// Length of the main diagonal band
        diagonal: usize,
        /// Length of the super-diagonal band
        superdiagonal: usize,
    },
    /// The Thomas algorithm could not solve the system.
    #[error("TDMA failure: {0}")]
    TdmaFailure(#[from] TdmaFailure),
    /// A vector does not match the matrix dimension.
    #[error("vector must have exactly {expected} elements, got {got}")]
    VectorLengthError {
        /// The matrix dimension
        expected: usize,
        /// The length of the vector
        got: usize,
    },
    /// Errors in a deserialized matrix record.
    #[error("{0:?}")]
    InputError(String),
    #[error(transparent)]
    /// Errors coming from `serde_yaml`.
    YamlError(#[from] serde_yaml::Error),
    #[cfg(feature = "json")]
    #[cfg_attr(doc_cfg, doc(cfg(feature = "json")))]
    #[error(transparent)]
    /// Errors coming from `serde_json`.
    JsonError(#[from] serde_json::Error),
}

/// Reasons for [`TdmaError::TdmaFailure`].
///
/// None of these are recoverable by calling
/// [`solve`](crate::TridiagonalMatrix::solve) again with
/// the same input.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
#[non_exhaustive]
pub enum TdmaFailure {
    /// The right-hand side does not have `n` elements.
    #[error("r must have exactly {expected} elements, got {got}")]
    RhsLength {
        /// The matrix dimension
        expected: usize,
        /// The length of the right-hand side
        got: usize,
    },
    /// The diagonal entry of row 0 is zero.
    #[error("zero pivot at row 0")]
    ZeroPivot,
    /// Forward elimination produced a zero pivot at `row`, that is
    /// `diagonal == subdiagonal * previous`.
    #[error("zero pivot at row {row}: diagonal {diagonal} == subdiagonal {subdiagonal} * c[{}] {previous}", .row.saturating_sub(1))]
    DegeneratePivot {
        /// The row index
        row: usize,
        /// The diagonal entry of `row`
        diagonal: f64,
        /// The sub-diagonal entry of `row`
        subdiagonal: f64,
        /// The modified super-diagonal coefficient of `row - 1`
        previous: f64,
    },
}

impl TdmaFailure {
    /// The row at which elimination stopped, if any.
    pub fn row(&self) -> Option<usize> {
        match self {
            TdmaFailure::RhsLength { .. } => None,
            TdmaFailure::ZeroPivot => Some(0),
            TdmaFailure::DegeneratePivot { row, .. } => Some(*row),
        }
    }
}

/// Result type for this crate.
pub type TdmaResult<T> = Result<T, TdmaError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failure_rows() {
        assert_eq!(
            TdmaFailure::RhsLength {
                expected: 3,
                got: 2
            }
            .row(),
            None
        );
        assert_eq!(TdmaFailure::ZeroPivot.row(), Some(0));
        let f = TdmaFailure::DegeneratePivot {
            row: 2,
            diagonal: 1.0,
            subdiagonal: 2.0,
            previous: 0.5,
        };
        assert_eq!(f.row(), Some(2));
    }

    #[test]
    fn test_display() {
        let e = TdmaError::InvalidTridiagonalMatrix(5);
        assert_eq!(
            e.to_string(),
            "invalid tridiagonal matrix: length 5 must be 3n-2"
        );
        let e = TdmaError::from(TdmaFailure::DegeneratePivot {
            row: 1,
            diagonal: 1.0,
            subdiagonal: 2.0,
            previous: 0.5,
        });
        assert_eq!(
            e.to_string(),
            "TDMA failure: zero pivot at row 1: diagonal 1 == subdiagonal 2 * c[0] 0.5"
        );
    }

    #[test]
    fn test_display_degenerate_pivot_at_row_0() {
        let f = TdmaFailure::DegeneratePivot {
            row: 0,
            diagonal: 0.0,
            subdiagonal: 1.0,
            previous: 0.0,
        };
        assert_eq!(
            f.to_string(),
            "zero pivot at row 0: diagonal 0 == subdiagonal 1 * c[0] 0"
        );
    }
}
