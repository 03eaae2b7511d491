//! Property-based tests using proptest.

use proptest::prelude::*;
use tdma::{TdmaError, TdmaFailure, TridiagonalMatrix};

// Strictly diagonally dominant systems never hit a zero pivot.
fn dominant_matrix(sizes: std::ops::Range<usize>) -> impl Strategy<Value = TridiagonalMatrix> {
    sizes.prop_flat_map(|n| {
        (
            prop::collection::vec(-1.0f64..1.0, n - 1),
            prop::collection::vec(2.5f64..10.0, n),
            prop::collection::vec(-1.0f64..1.0, n - 1),
            prop::collection::vec(any::<bool>(), n),
        )
            .prop_map(|(sub, diag, sup, signs)| {
                let diag = diag
                    .iter()
                    .zip(signs.iter())
                    .map(|(d, s)| if *s { *d } else { -*d })
                    .collect::<Vec<_>>();
                TridiagonalMatrix::from_bands(&sub, &diag, &sup).unwrap()
            })
    })
}

fn matrix_and_vector() -> impl Strategy<Value = (TridiagonalMatrix, Vec<f64>)> {
    dominant_matrix(1..40).prop_flat_map(|m| {
        let n = m.size();
        (Just(m), prop::collection::vec(-100.0f64..100.0, n))
    })
}

fn recursive_determinant(c: &[f64], k: usize) -> f64 {
    match k {
        0 => c[0],
        1 => c[3] * c[0] - c[2] * c[1],
        _ => {
            let i = 3 * k;
            c[i] * recursive_determinant(c, k - 1)
                - c[i - 1] * c[i - 2] * recursive_determinant(c, k - 2)
        }
    }
}

proptest! {
    #[test]
    fn construction_succeeds_iff_length_is_3n_minus_2(len in 0usize..200) {
        let rv = TridiagonalMatrix::new(vec![1.0; len]);
        if len >= 1 && (len - 1) % 3 == 0 {
            prop_assert_eq!(rv.unwrap().size(), (len - 1) / 3 + 1);
        } else {
            prop_assert!(matches!(rv, Err(TdmaError::InvalidTridiagonalMatrix(l)) if l == len));
        }
    }

    #[test]
    fn solve_inverts_mul_vec((m, x) in matrix_and_vector()) {
        let r = m.mul_vec(&x).unwrap();
        let solved = m.solve(&r).unwrap();
        for (i, (a, b)) in solved.iter().zip(x.iter()).enumerate() {
            prop_assert!((a - b).abs() < 1e-6, "x[{}]: got {}, want {}", i, a, b);
        }
    }

    #[test]
    fn mul_vec_matches_dense((m, x) in matrix_and_vector()) {
        let banded = m.mul_vec(&x).unwrap();
        let dense = m.to_dense().mul_vec(&x).unwrap();
        for (a, b) in banded.iter().zip(dense.iter()) {
            prop_assert!((a - b).abs() < 1e-9);
        }
    }

    #[test]
    fn solve_is_deterministic((m, r) in matrix_and_vector()) {
        let x1 = m.solve(&r).unwrap();
        let x2 = m.solve(&r).unwrap();
        prop_assert!(x1.iter().zip(x2.iter()).all(|(a, b)| a.to_bits() == b.to_bits()));
    }

    #[test]
    fn wrong_rhs_length_fails((m, r) in matrix_and_vector(), extra in 1usize..4) {
        let mut longer = r.clone();
        longer.extend(std::iter::repeat(1.0).take(extra));
        let e = m.solve(&longer).unwrap_err();
        let is_rhs_length = matches!(e, TdmaError::TdmaFailure(TdmaFailure::RhsLength { .. }));
        prop_assert!(is_rhs_length);
        let e = m.solve(&r[..r.len() - 1]).unwrap_err();
        let is_rhs_length = matches!(e, TdmaError::TdmaFailure(TdmaFailure::RhsLength { .. }));
        prop_assert!(is_rhs_length);
    }

    #[test]
    fn determinant_matches_recursion(m in dominant_matrix(1..16)) {
        let expected = recursive_determinant(m.coefficients(), m.size() - 1);
        prop_assert_eq!(m.determinant().to_bits(), expected.to_bits());
    }

    #[test]
    fn dominant_matrices_are_not_singular(m in dominant_matrix(1..40)) {
        prop_assert!(m.determinant() != 0.0);
    }

    #[test]
    fn zero_first_diagonal_fails(m in dominant_matrix(1..40), r in prop::collection::vec(-1.0f64..1.0, 40)) {
        let mut coefficients = m.into_coefficients();
        coefficients[0] = 0.0;
        let m = TridiagonalMatrix::new(coefficients).unwrap();
        let n = m.size();
        match m.solve(&r[..n]) {
            Err(TdmaError::TdmaFailure(f)) => prop_assert_eq!(f.row(), Some(0)),
            other => prop_assert!(false, "unexpected result: {:?}", other),
        }
    }
}
