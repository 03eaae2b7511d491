//! # Tridiagonal matrix algorithm
//!
//! Solve `M * x = r` where `M` is an `n` x `n` tridiagonal matrix,
//! using the Thomas algorithm in `O(n)` time,
//! and compute the determinant of `M`.
//!
//! ## Example
//!
//! ```
//! let m = tdma::TridiagonalMatrix::new(vec![
//!     3., 1.,
//!     1., 4., 2.,
//!         2., 5.,
//! ]).unwrap();
//! let x = m.solve(&[5., 15., 19.]).unwrap();
//! for (xi, expected) in x.iter().zip([1., 2., 3.]) {
//!     assert!((xi - expected).abs() < 1e-12);
//! }
//! assert_eq!(m.determinant(), 5. * (4. * 3. - 1. * 1.) - 2. * 2. * 3.);
//! ```
//!
//! ## Loading matrices
//!
//! Matrices may be read from `YAML`, see [`loads`] and [`load`].
//! With the `json` feature, [`loads_json`] and [`load_json`]
//! read `JSON`.

#![warn(missing_docs)]
#![warn(rustdoc::broken_intra_doc_links)]
#![cfg_attr(doc_cfg, feature(doc_cfg))]

mod dense;
mod determinant;
mod error;
mod matrix;
mod solve;

pub use dense::DenseMatrix;
pub use determinant::determinant;
pub use error::{TdmaError, TdmaFailure, TdmaResult};
pub use matrix::{InputTridiagonalMatrix, TridiagonalMatrix};
pub use solve::solve;

/// Build a [`TridiagonalMatrix`] from a YAML string.
///
/// # Errors
///
/// [`TdmaError::YamlError`] if the input is not a valid
/// [`InputTridiagonalMatrix`] record, which includes
/// the record failing validation.
///
/// # Examples
///
/// ```
/// let yaml = "
/// coefficients: [2, 1,
///                1, 2]
/// ";
/// let m = tdma::loads(yaml).unwrap();
/// assert_eq!(m.determinant(), 3.0);
/// ```
pub fn loads(yaml: &str) -> TdmaResult<TridiagonalMatrix> {
    let matrix: TridiagonalMatrix = serde_yaml::from_str(yaml)?;
    Ok(matrix)
}

/// Build a [`TridiagonalMatrix`] from a YAML reader.
///
/// # Errors
///
/// See [`loads`].
pub fn load<T: std::io::Read>(reader: T) -> TdmaResult<TridiagonalMatrix> {
    let matrix: TridiagonalMatrix = serde_yaml::from_reader(reader)?;
    Ok(matrix)
}

/// Build a [`TridiagonalMatrix`] from a JSON string.
///
/// # Errors
///
/// [`TdmaError::JsonError`] if the input is not a valid
/// [`InputTridiagonalMatrix`] record.
#[cfg(feature = "json")]
#[cfg_attr(doc_cfg, doc(cfg(feature = "json")))]
pub fn loads_json(json: &str) -> TdmaResult<TridiagonalMatrix> {
    let matrix: TridiagonalMatrix = serde_json::from_str(json)?;
    Ok(matrix)
}

/// Build a [`TridiagonalMatrix`] from a JSON reader.
///
/// # Errors
///
/// See [`loads_json`].
#[cfg(feature = "json")]
#[cfg_attr(doc_cfg, doc(cfg(feature = "json")))]
pub fn load_json<T: std::io::Read>(reader: T) -> TdmaResult<TridiagonalMatrix> {
    let matrix: TridiagonalMatrix = serde_json::from_reader(reader)?;
    Ok(matrix)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_loads_bad_length() {
        let yaml = "
coefficients: [1, 2]
";
        assert!(matches!(loads(yaml), Err(TdmaError::YamlError(_))));
    }

    #[test]
    fn test_loads_unknown_field() {
        let yaml = "
coefficients: [1]
size: 1
";
        assert!(loads(yaml).is_err());
    }

    #[test]
    fn test_yaml_round_trip() {
        let m = TridiagonalMatrix::new(vec![3., 1., 1., 4., 2., 2., 5.]).unwrap();
        let yaml = m.as_string().unwrap();
        assert_eq!(loads(&yaml).unwrap(), m);
        assert_eq!(format!("{m}"), yaml);
    }

    #[cfg(feature = "json")]
    #[test]
    fn test_json_round_trip() {
        let m = TridiagonalMatrix::new(vec![3., 1., 1., 4., 2., 2., 5.]).unwrap();
        let json = m.as_json_string().unwrap();
        assert_eq!(json, "{\"coefficients\":[3.0,1.0,1.0,4.0,2.0,2.0,5.0]}");
        assert_eq!(loads_json(&json).unwrap(), m);
        let bad = "{\"coefficients\":[3.0,1.0]}";
        assert!(matches!(loads_json(bad), Err(TdmaError::JsonError(_))));
    }
}
