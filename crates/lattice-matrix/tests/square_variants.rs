//! Integration tests for SquareMatrix and its symmetric, diagonal and identity variants.

use lattice_matrix::{
    DiagonalMatrix, Grid, IdentityMatrix, MatrixError, OneDimensionalMatrix, SquareMatrix,
    SymmetricMatrix, WritePolicy,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

// ---------------------------------------------------------------------------
// OneDimensionalMatrix
// ---------------------------------------------------------------------------

#[test]
fn vector_items_are_one_indexed() {
    let mut v = OneDimensionalMatrix::from_vec(vec![10, 20, 30]);
    assert_eq!(v.len(), 3);
    assert_eq!(v.shape(), (1, 3));
    assert_eq!(v.get_item(1).unwrap(), 10);
    assert_eq!(v.get_item(3).unwrap(), 30);
    assert!(v.get_item(0).is_err());
    assert!(v.get_item(4).is_err());

    v.set_item(2, 5).unwrap();
    assert_eq!(v.to_vec(), vec![10, 5, 30]);
    assert_eq!(v.get(1, 2).unwrap(), 5);
}

#[test]
fn vector_dot_product() {
    let a = OneDimensionalMatrix::from_vec(vec![1, 2, 3]);
    let b = OneDimensionalMatrix::from_vec(vec![4, 5, 6]);
    assert_eq!(a.dot(&b).unwrap(), 32);
    assert!(a.dot(&OneDimensionalMatrix::new(2)).is_err());
}

#[test]
fn vector_from_grid_requires_single_row() {
    let row = Grid::from_rows(vec![vec![1, 2, 3]]).unwrap();
    assert!(OneDimensionalMatrix::try_from(row).is_ok());
    let tall: Grid<i32> = Grid::new(2, 3);
    assert!(OneDimensionalMatrix::try_from(tall).is_err());
}

// ---------------------------------------------------------------------------
// SquareMatrix
// ---------------------------------------------------------------------------

#[test]
fn square_from_non_square_grid_fails() {
    let g: Grid<i32> = Grid::new(2, 3);
    assert!(matches!(
        SquareMatrix::try_from(g),
        Err(MatrixError::Dimension { .. })
    ));
}

#[test]
fn transpose_is_involutive() {
    let mut rng = StdRng::seed_from_u64(3);
    for size in 0..6 {
        let values = (0..size)
            .map(|_| (0..size).map(|_| rng.gen_range(-9..10)).collect())
            .collect();
        let original: SquareMatrix<i32> = SquareMatrix::from_rows(values).unwrap();
        let mut m = original.clone();
        m.transpose();
        for i in 1..=size {
            for j in 1..=size {
                assert_eq!(m.get(i, j).unwrap(), original.get(j, i).unwrap());
            }
        }
        m.transpose();
        assert_eq!(m, original);
    }
}

#[test]
fn set_diagonal_leaves_off_diagonal_alone() {
    let mut m = SquareMatrix::from_rows(vec![vec![0, 4, 5], vec![6, 0, 7], vec![8, 9, 0]])
        .unwrap();
    m.set_diagonal(&OneDimensionalMatrix::from_vec(vec![1, 2, 3]))
        .unwrap();
    assert_eq!(m.get_diagonal().to_vec(), vec![1, 2, 3]);
    assert_eq!(
        m.to_rows(),
        vec![vec![1, 4, 5], vec![6, 2, 7], vec![8, 9, 3]]
    );
    assert_eq!(m.trace(), 6);
}

#[test]
fn set_diagonal_length_must_match() {
    let mut m: SquareMatrix<i32> = SquareMatrix::new(3);
    let err = m
        .set_diagonal(&OneDimensionalMatrix::from_vec(vec![1, 2]))
        .unwrap_err();
    assert!(matches!(err, MatrixError::Dimension { operation: "set_diagonal", .. }));
}

// ---------------------------------------------------------------------------
// SymmetricMatrix
// ---------------------------------------------------------------------------

fn assert_symmetric(m: &SymmetricMatrix<i32>) {
    let n = m.size();
    for i in 1..=n {
        for j in 1..=n {
            assert_eq!(m.get(i, j).unwrap(), m.get(j, i).unwrap());
        }
    }
}

#[test]
fn symmetric_writes_are_mirrored() {
    let mut m = SymmetricMatrix::new(3);
    m.set(1, 3, 4).unwrap();
    assert_eq!(m.get(3, 1).unwrap(), 4);
    m.set(2, 2, 9).unwrap();
    assert_eq!(m.get(2, 2).unwrap(), 9);
    assert_eq!(m.policy(), WritePolicy::Symmetric);
}

#[test]
fn symmetric_holds_after_random_writes() {
    let mut rng = StdRng::seed_from_u64(42);
    let mut m = SymmetricMatrix::new(5);
    for _ in 0..200 {
        let i = rng.gen_range(1..=5);
        let j = rng.gen_range(1..=5);
        m.set(i, j, rng.gen_range(-100..100)).unwrap();
        assert_symmetric(&m);
    }
    m.set_row(2, &OneDimensionalMatrix::from_vec(vec![1, 2, 3, 4, 5]))
        .unwrap();
    m.set_diagonal(&OneDimensionalMatrix::from_vec(vec![0, 0, 0, 0, 0]))
        .unwrap();
    m.multiply_scalar(3).unwrap();
    m.add_scalar(1).unwrap();
    m.transpose();
    assert_symmetric(&m);
}

#[test]
fn symmetric_rejects_swaps_of_distinct_rows() {
    let mut m = SymmetricMatrix::from_rows(vec![vec![1, 2], vec![2, 3]]).unwrap();
    assert!(matches!(
        m.swap_rows(1, 2),
        Err(MatrixError::InvalidOperation { kind: "symmetric", .. })
    ));
    assert!(m.swap_cols(1, 1).is_ok());
    assert_eq!(m.to_rows(), vec![vec![1, 2], vec![2, 3]]);
}

#[test]
fn symmetric_from_rows_checks_values() {
    assert!(SymmetricMatrix::from_rows(vec![vec![1, 2], vec![3, 4]]).is_err());
}

// ---------------------------------------------------------------------------
// DiagonalMatrix
// ---------------------------------------------------------------------------

#[test]
fn diagonal_off_diagonal_writes_become_zero() {
    let mut m = DiagonalMatrix::new(3);
    m.set(1, 1, 5).unwrap();
    m.set(1, 2, 8).unwrap();
    assert_eq!(m.get(1, 1).unwrap(), 5);
    assert_eq!(m.get(1, 2).unwrap(), 0);
}

#[test]
fn diagonal_stays_diagonal_after_random_writes() {
    let mut rng = StdRng::seed_from_u64(5);
    let mut m = DiagonalMatrix::new(4);
    for _ in 0..200 {
        let i = rng.gen_range(1..=4);
        let j = rng.gen_range(1..=4);
        m.set(i, j, rng.gen_range(1..100)).unwrap();
    }
    m.set_col(3, &OneDimensionalMatrix::from_vec(vec![1, 2, 3, 4]))
        .unwrap();
    m.multiply_scalar(2).unwrap();
    for i in 1..=4 {
        for j in (1..=4).filter(|&j| j != i) {
            assert_eq!(m.get(i, j).unwrap(), 0);
        }
    }
    assert_eq!(m.get(3, 3).unwrap(), 6);
}

#[test]
fn diagonal_rejects_scalar_shift() {
    let mut m = DiagonalMatrix::from_diagonal(&OneDimensionalMatrix::from_vec(vec![1, 2]));
    assert!(m.add_scalar(1).is_err());
    assert!(m.subtract_scalar(1).is_err());
    assert!(m.add_scalar(0).is_ok());
    assert_eq!(m.to_rows(), vec![vec![1, 0], vec![0, 2]]);
}

// ---------------------------------------------------------------------------
// IdentityMatrix
// ---------------------------------------------------------------------------

#[test]
fn identity_has_ones_on_diagonal_and_zeros_elsewhere() {
    for n in 1..6 {
        let id: IdentityMatrix<i32> = IdentityMatrix::new(n);
        for i in 1..=n {
            for j in 1..=n {
                let expected = if i == j { 1 } else { 0 };
                assert_eq!(id.get(i, j).unwrap(), expected);
            }
        }
    }
}

#[test]
fn identity_is_immutable() {
    let mut id: IdentityMatrix<f64> = IdentityMatrix::new(3);
    let original = id.clone();

    assert!(id.set(2, 2, 1.0).is_ok());
    assert!(id.set(1, 3, 0.0).is_ok());
    assert!(matches!(
        id.set(2, 2, 4.0),
        Err(MatrixError::InvalidOperation { kind: "identity", .. })
    ));
    assert!(id.set(1, 2, 4.0).is_err());
    assert!(id
        .set_diagonal(&OneDimensionalMatrix::from_vec(vec![1.0, 5.0, 1.0]))
        .is_err());
    assert!(id.multiply_scalar(2.0).is_err());
    assert!(id.add_scalar(1.0).is_err());
    assert!(id.swap_rows(1, 2).is_err());
    id.transpose();
    assert_eq!(id, original);
}

#[test]
fn binary_operations_on_variants_return_general_grids() {
    let a = DiagonalMatrix::from_diagonal(&OneDimensionalMatrix::from_vec(vec![2, 3]));
    let b = SymmetricMatrix::from_rows(vec![vec![1, 1], vec![1, 1]]).unwrap();
    let sum = a.add_matrix(b.as_grid()).unwrap();
    assert_eq!(sum.policy(), WritePolicy::Unconstrained);
    assert_eq!(sum.to_rows(), vec![vec![3, 1], vec![1, 4]]);
    let product = a.multiply_matrix(b.as_grid()).unwrap();
    assert_eq!(product.to_rows(), vec![vec![2, 2], vec![3, 3]]);
}

// ---------------------------------------------------------------------------
// Policy and shape survive every mutating entry point
// ---------------------------------------------------------------------------

fn vector(values: &[i32]) -> OneDimensionalMatrix<i32> {
    OneDimensionalMatrix::from_vec(values.to_vec())
}

#[test]
fn symmetric_keeps_policy_and_shape_through_all_mutators() {
    let mut m = SymmetricMatrix::from_rows(vec![vec![1, 2, 3], vec![2, 4, 5], vec![3, 5, 6]])
        .unwrap();
    let _ = m.set(1, 2, 9);
    let _ = m.set_row(3, &vector(&[7, 8, 9]));
    let _ = m.set_col(1, &vector(&[1, 1, 1]));
    let _ = m.swap_rows(1, 3);
    let _ = m.swap_cols(2, 3);
    let _ = m.add_scalar(2);
    let _ = m.subtract_scalar(1);
    let _ = m.multiply_scalar(3);
    let _ = m.set_diagonal(&vector(&[0, 0, 0]));
    m.transpose();

    assert_eq!(m.policy(), WritePolicy::Symmetric);
    assert_eq!(m.shape(), (3, 3));
    assert_symmetric(&m);
    assert_eq!(m.get_diagonal().len(), 3);
}

#[test]
fn diagonal_keeps_policy_and_shape_through_all_mutators() {
    let mut m = DiagonalMatrix::from_diagonal(&vector(&[1, 2, 3]));
    let _ = m.set(1, 3, 9);
    let _ = m.set_row(2, &vector(&[4, 5, 6]));
    let _ = m.set_col(3, &vector(&[7, 8, 9]));
    let _ = m.swap_rows(1, 2);
    let _ = m.swap_cols(1, 2);
    let _ = m.add_scalar(2);
    let _ = m.subtract_scalar(1);
    let _ = m.multiply_scalar(3);
    let _ = m.set_diagonal(&vector(&[1, 1, 1]));
    m.transpose();

    assert_eq!(m.policy(), WritePolicy::Diagonal);
    assert_eq!(m.shape(), (3, 3));
    for i in 1..=3 {
        for j in (1..=3).filter(|&j| j != i) {
            assert_eq!(m.get(i, j).unwrap(), 0);
        }
    }
}

#[test]
fn identity_keeps_policy_shape_and_values_through_all_mutators() {
    let mut m: IdentityMatrix<i32> = IdentityMatrix::new(3);
    let original = m.clone();
    assert!(m.set(1, 2, 9).is_err());
    assert!(m.set_row(2, &vector(&[4, 5, 6])).is_err());
    assert!(m.set_col(3, &vector(&[7, 8, 9])).is_err());
    assert!(m.swap_rows(1, 2).is_err());
    assert!(m.swap_cols(1, 2).is_err());
    assert!(m.add_scalar(2).is_err());
    assert!(m.subtract_scalar(1).is_err());
    assert!(m.multiply_scalar(3).is_err());
    assert!(m.set_diagonal(&vector(&[2, 2, 2])).is_err());
    m.transpose();

    assert_eq!(m.policy(), WritePolicy::Identity);
    assert_eq!(m.shape(), (3, 3));
    assert_eq!(m, original);
    assert_eq!(m.get_diagonal().to_vec(), vec![1, 1, 1]);
}

#[test]
fn square_keeps_shape_through_all_mutators() {
    let mut m: SquareMatrix<i32> = SquareMatrix::new(2);
    m.set(1, 2, 4).unwrap();
    m.set_row(2, &vector(&[5, 6])).unwrap();
    m.set_col(1, &vector(&[1, 2])).unwrap();
    m.swap_rows(1, 2).unwrap();
    m.swap_cols(1, 2).unwrap();
    m.add_scalar(1).unwrap();
    m.subtract_scalar(1).unwrap();
    m.multiply_scalar(2).unwrap();
    assert!(m.set_row(1, &vector(&[1, 2, 3])).is_err());

    assert_eq!(m.shape(), (2, 2));
    assert_eq!(m.policy(), WritePolicy::Unconstrained);
    assert_eq!(m.to_rows(), vec![vec![12, 4], vec![8, 2]]);
}

#[test]
fn vector_keeps_single_row_through_all_mutators() {
    let mut v = vector(&[1, 2, 3]);
    v.set(1, 2, 5).unwrap();
    v.set_item(3, 7).unwrap();
    v.set_row(1, &vector(&[3, 2, 1])).unwrap();
    v.set_col(2, &vector(&[9])).unwrap();
    v.swap_cols(1, 3).unwrap();
    v.add_scalar(1).unwrap();
    v.subtract_scalar(2).unwrap();
    v.multiply_scalar(10).unwrap();
    assert!(v.set(2, 1, 0).is_err());
    assert!(v.set_col(1, &vector(&[1, 2])).is_err());

    assert_eq!(v.shape(), (1, 3));
    assert_eq!(v.to_vec(), vec![0, 80, 20]);
}
