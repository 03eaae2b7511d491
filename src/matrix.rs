use crate::dense::DenseMatrix;
use crate::error::{TdmaError, TdmaResult};
use serde::{Deserialize, Serialize};

/// An `n` x `n` tridiagonal matrix.
///
/// The matrix is stored as `3n - 2` coefficients, row by row:
///
/// ```text
///     (n=4)
///     +-                   -+
///     | m[0] m[1]         0 |
///     | m[2] m[3] m[4]      |
///     |      m[5] m[6] m[7] |
///     |    0      m[8] m[9] |
///     +-                   -+
/// ```
///
/// For row `i`, the diagonal entry is `m[3i]`, the sub-diagonal
/// entry is `m[3i - 1]` (`i > 0`) and the super-diagonal
/// entry is `m[3i + 1]` (`i < n - 1`).
///
/// A matrix is immutable once created.
/// Only the shape is validated: a matrix with zeros on the
/// diagonal is valid, and errors about singular pivots
/// are reported by [`TridiagonalMatrix::solve`].
///
/// # Examples
///
/// ## Using rust code
///
/// ```
/// let m = tdma::TridiagonalMatrix::new(vec![
///     2., 1.,
///     1., 2., 1.,
///     1., 2., 1.,
///     1., 2.,
/// ]).unwrap();
/// assert_eq!(m.size(), 4);
/// assert_eq!(m.get(2, 1), Some(1.0));
/// assert_eq!(m.get(3, 0), Some(0.0));
/// ```
///
/// ## In a `YAML` record
///
/// ```
/// let yaml = "
/// coefficients: [3, 1,
///                1, 4, 2,
///                   2, 5]
/// ";
/// let m = tdma::loads(yaml).unwrap();
/// assert_eq!(m.size(), 3);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "InputTridiagonalMatrix", into = "InputTridiagonalMatrix")]
pub struct TridiagonalMatrix {
    n: usize,
    m: Vec<f64>,
}

impl TridiagonalMatrix {
    /// Create a matrix from its coefficients.
    ///
    /// The coefficients are stored as given.
    ///
    /// # Errors
    ///
    /// [`TdmaError::InvalidTridiagonalMatrix`] if the length of
    /// `coefficients` is not `3n - 2` for some `n >= 1`.
    pub fn new(coefficients: Vec<f64>) -> TdmaResult<Self> {
        if coefficients.len() % 3 != 1 {
            return Err(TdmaError::InvalidTridiagonalMatrix(coefficients.len()));
        }
        Ok(Self {
            n: (coefficients.len() - 1) / 3 + 1,
            m: coefficients,
        })
    }

    /// Create a matrix from its three bands.
    ///
    /// `subdiagonal[i]` is the entry at `(i + 1, i)` and
    /// `superdiagonal[i]` is the entry at `(i, i + 1)`.
    ///
    /// # Errors
    ///
    /// [`TdmaError::BandLengthError`] unless `diagonal` is not
    /// empty and both other bands are one element shorter.
    ///
    /// # Examples
    ///
    /// ```
    /// let m = tdma::TridiagonalMatrix::from_bands(&[1., 2.], &[3., 4., 5.], &[1., 2.]).unwrap();
    /// assert_eq!(m.coefficients(), &[3., 1., 1., 4., 2., 2., 5.]);
    /// ```
    pub fn from_bands(
        subdiagonal: &[f64],
        diagonal: &[f64],
        superdiagonal: &[f64],
    ) -> TdmaResult<Self> {
        let n = diagonal.len();
        if n == 0 || subdiagonal.len() != n - 1 || superdiagonal.len() != n - 1 {
            return Err(TdmaError::BandLengthError {
                subdiagonal: subdiagonal.len(),
                diagonal: n,
                superdiagonal: superdiagonal.len(),
            });
        }
        let mut m = Vec::with_capacity(3 * n - 2);
        for (i, d) in diagonal.iter().enumerate() {
            if i > 0 {
                m.push(subdiagonal[i - 1]);
            }
            m.push(*d);
            if i + 1 < n {
                m.push(superdiagonal[i]);
            }
        }
        Ok(Self { n, m })
    }

    /// The dimension `n` of the `n` x `n` matrix.
    pub fn size(&self) -> usize {
        self.n
    }

    /// The `3n - 2` coefficients.
    pub fn coefficients(&self) -> &[f64] {
        &self.m
    }

    /// Consume the matrix, returning the coefficients.
    pub fn into_coefficients(self) -> Vec<f64> {
        self.m
    }

    pub(crate) fn diag_at(&self, row: usize) -> f64 {
        self.m[3 * row]
    }

    pub(crate) fn sub_at(&self, row: usize) -> f64 {
        self.m[3 * row - 1]
    }

    pub(crate) fn sup_at(&self, row: usize) -> f64 {
        self.m[3 * row + 1]
    }

    /// The diagonal entry of `row`.
    pub fn diagonal(&self, row: usize) -> Option<f64> {
        if row < self.n {
            Some(self.diag_at(row))
        } else {
            None
        }
    }

    /// The sub-diagonal entry of `row`, at column `row - 1`.
    ///
    /// Returns `None` for row 0.
    pub fn subdiagonal(&self, row: usize) -> Option<f64> {
        if row > 0 && row < self.n {
            Some(self.sub_at(row))
        } else {
            None
        }
    }

    /// The super-diagonal entry of `row`, at column `row + 1`.
    ///
    /// Returns `None` for the last row.
    pub fn superdiagonal(&self, row: usize) -> Option<f64> {
        if row + 1 < self.n {
            Some(self.sup_at(row))
        } else {
            None
        }
    }

    /// The entry at `(row, column)` of the dense matrix.
    ///
    /// Entries outside of the three bands are `0.0`.
    /// Returns `None` if either index is out of range.
    pub fn get(&self, row: usize, column: usize) -> Option<f64> {
        if row >= self.n || column >= self.n {
            return None;
        }
        if row == column {
            Some(self.diag_at(row))
        } else if column == row + 1 {
            Some(self.sup_at(row))
        } else if row == column + 1 {
            Some(self.sub_at(row))
        } else {
            Some(0.0)
        }
    }

    /// Compute `self * x`.
    ///
    /// # Errors
    ///
    /// [`TdmaError::VectorLengthError`] if `x.len() != self.size()`.
    ///
    /// # Examples
    ///
    /// ```
    /// let m = tdma::TridiagonalMatrix::new(vec![3., 1., 1., 4., 2., 2., 5.]).unwrap();
    /// assert_eq!(m.mul_vec(&[1., 2., 3.]).unwrap(), vec![5., 15., 19.]);
    /// ```
    pub fn mul_vec(&self, x: &[f64]) -> TdmaResult<Vec<f64>> {
        if x.len() != self.n {
            return Err(TdmaError::VectorLengthError {
                expected: self.n,
                got: x.len(),
            });
        }
        Ok((0..self.n)
            .map(|i| {
                let mut rv = self.diag_at(i) * x[i];
                if i > 0 {
                    rv += self.sub_at(i) * x[i - 1];
                }
                if i + 1 < self.n {
                    rv += self.sup_at(i) * x[i + 1];
                }
                rv
            })
            .collect())
    }

    /// Expand into a [`DenseMatrix`].
    pub fn to_dense(&self) -> DenseMatrix {
        let mut dense = DenseMatrix::zeros(self.n);
        for i in 0..self.n {
            if i > 0 {
                dense.set(i, i - 1, self.sub_at(i));
            }
            dense.set(i, i, self.diag_at(i));
            if i + 1 < self.n {
                dense.set(i, i + 1, self.sup_at(i));
            }
        }
        dense
    }

    /// Return a representation of the matrix as a string.
    ///
    /// The format is YAML.
    ///
    /// # Error
    ///
    /// Will return an error if `serde_yaml::to_string`
    /// returns an error.
    pub fn as_string(&self) -> TdmaResult<String> {
        match serde_yaml::to_string(self) {
            Ok(string) => Ok(string),
            Err(e) => Err(e.into()),
        }
    }

    /// Return a representation of the matrix as a string.
    ///
    /// The format is JSON.
    ///
    /// # Error
    ///
    /// Will return an error if `serde_json::to_string`
    /// returns an error.
    #[cfg(feature = "json")]
    #[cfg_attr(doc_cfg, doc(cfg(feature = "json")))]
    pub fn as_json_string(&self) -> TdmaResult<String> {
        match serde_json::to_string(self) {
            Ok(string) => Ok(string),
            Err(e) => Err(e.into()),
        }
    }
}

impl TryFrom<Vec<f64>> for TridiagonalMatrix {
    type Error = TdmaError;

    fn try_from(value: Vec<f64>) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&[f64]> for TridiagonalMatrix {
    type Error = TdmaError;

    fn try_from(value: &[f64]) -> Result<Self, Self::Error> {
        Self::new(value.to_vec())
    }
}

impl std::fmt::Display for TridiagonalMatrix {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.as_string() {
            Ok(string) => write!(f, "{string}"),
            Err(_) => Err(std::fmt::Error),
        }
    }
}

/// Input record for a [`TridiagonalMatrix`], used when
/// loading matrices from `YAML` or `JSON`.
///
/// Exactly one of two forms must be given:
///
/// * `coefficients`, the `3n - 2` coefficients
///   in the layout of [`TridiagonalMatrix`].
/// * `subdiagonal`, `diagonal`, and `superdiagonal`,
///   as in [`TridiagonalMatrix::from_bands`].
///
/// # Examples
///
/// ```
/// let yaml = "
/// subdiagonal: [1, 2]
/// diagonal: [3, 4, 5]
/// superdiagonal: [1, 2]
/// ";
/// let from_bands = tdma::loads(yaml).unwrap();
/// let yaml = "
/// coefficients: [3, 1, 1, 4, 2, 2, 5]
/// ";
/// let from_coefficients = tdma::loads(yaml).unwrap();
/// assert_eq!(from_bands, from_coefficients);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct InputTridiagonalMatrix {
    /// Flat coefficients
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coefficients: Option<Vec<f64>>,
    /// The sub-diagonal band
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subdiagonal: Option<Vec<f64>>,
    /// The main diagonal
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub diagonal: Option<Vec<f64>>,
    /// The super-diagonal band
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub superdiagonal: Option<Vec<f64>>,
}

impl TryFrom<InputTridiagonalMatrix> for TridiagonalMatrix {
    type Error = TdmaError;

    fn try_from(value: InputTridiagonalMatrix) -> Result<Self, Self::Error> {
        let has_bands =
            value.subdiagonal.is_some() || value.diagonal.is_some() || value.superdiagonal.is_some();
        match value.coefficients {
            Some(coefficients) => {
                if has_bands {
                    return Err(TdmaError::InputError(
                        "coefficients cannot be combined with bands".to_string(),
                    ));
                }
                Self::new(coefficients)
            }
            None => match (value.subdiagonal, value.diagonal, value.superdiagonal) {
                (Some(sub), Some(diag), Some(sup)) => Self::from_bands(&sub, &diag, &sup),
                // A 1 x 1 matrix has empty off-diagonal bands
                (None, Some(diag), None) if diag.len() == 1 => Self::new(diag),
                (None, None, None) => Err(TdmaError::InputError(
                    "coefficients or bands must be given".to_string(),
                )),
                _ => Err(TdmaError::InputError(
                    "subdiagonal, diagonal, and superdiagonal must all be given".to_string(),
                )),
            },
        }
    }
}

impl From<TridiagonalMatrix> for InputTridiagonalMatrix {
    fn from(value: TridiagonalMatrix) -> Self {
        Self {
            coefficients: Some(value.m),
            ..Default::default()
        }
    }
}
