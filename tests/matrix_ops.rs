//! Integration tests for matrix arithmetic and structural transforms.

use dense_linalg::{FormatOptions, LinalgError, Matrix};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn random_matrix(rng: &mut StdRng, height: usize, width: usize) -> Matrix<i64> {
    let data = (0..height * width).map(|_| rng.gen_range(-50..50)).collect();
    Matrix::from_shape_vec((height, width), data).unwrap()
}

fn sample() -> Matrix<i32> {
    Matrix::from_rows(vec![vec![1, 2, 3], vec![4, 5, 6], vec![7, 8, 9]]).unwrap()
}

// ---------------------------------------------------------------------------
// Construction and access
// ---------------------------------------------------------------------------

#[test]
fn matrix_from_rows_matches_input() {
    let values = vec![vec![1, 22, 3], vec![4, 5, 6434], vec![7, 824, 9]];
    let m = Matrix::from_rows(values.clone()).unwrap();
    for i in 0..3 {
        for j in 0..3 {
            assert_eq!(m[(i, j)], values[i][j]);
        }
    }
    assert_eq!(m.to_nested(), values);
}

#[test]
fn matrix_cells_can_be_modified() {
    let mut m = Matrix::from_rows(vec![vec![1, 1, 1], vec![1, 1, 1], vec![1, 1, 1]]).unwrap();
    m[(2, 0)] = 56;
    assert_eq!(m[(2, 0)], 56);

    m.set(1, 1, 7).unwrap();
    assert_eq!(m.get(1, 1), Ok(7));
    assert!(matches!(
        m.set(3, 0, 1),
        Err(LinalgError::IndexOutOfRange { .. })
    ));
}

#[test]
fn matrix_from_literal_array() {
    let m = Matrix::try_from([[1.0, 2.0], [3.0, 4.0]]).unwrap();
    assert_eq!(m.shape(), (2, 2));
    assert!(m.is_square());
}

#[test]
fn identity_has_ones_on_diagonal() {
    let id = Matrix::<f64>::identity(4).unwrap();
    for i in 0..4 {
        for j in 0..4 {
            assert_eq!(id[(i, j)], if i == j { 1.0 } else { 0.0 });
        }
    }
    assert_eq!(Matrix::<f64>::identity(0), Err(LinalgError::EmptyShape));
}

// ---------------------------------------------------------------------------
// Arithmetic
// ---------------------------------------------------------------------------

#[test]
fn add_is_elementwise() {
    let first = sample();
    let second =
        Matrix::from_rows(vec![vec![12, 21, 31], vec![42, 51, 61], vec![72, 81, 91]]).unwrap();
    let result = first.add(&second).unwrap();
    for i in 0..result.height() {
        for j in 0..result.width() {
            assert_eq!(result[(i, j)], first[(i, j)] + second[(i, j)]);
        }
    }
    assert_eq!(&first + &second, result);
    assert_eq!(second.add(&first).unwrap(), result);
}

#[test]
fn add_rejects_different_shapes() {
    let a = sample();
    let b = Matrix::<i32>::zeros(3, 4).unwrap();
    assert_eq!(
        a.add(&b),
        Err(LinalgError::ShapeMismatch {
            left: (3, 3),
            right: (3, 4),
        })
    );
    assert!(a.sub(&b).is_err());
}

#[test]
#[should_panic(expected = "matrix addition failed")]
fn add_operator_panics_on_shape_mismatch() {
    let a = sample();
    let b = Matrix::<i32>::zeros(2, 2).unwrap();
    let _sum = &a + &b;
}

#[test]
fn sub_undoes_add() {
    let a = sample();
    let b = Matrix::from_rows(vec![vec![9, 8, 7], vec![6, 5, 4], vec![3, 2, 1]]).unwrap();
    let round = a.add(&b).unwrap().sub(&b).unwrap();
    assert_eq!(round, a);
    assert_eq!(&(&a - &a), &Matrix::zeros(3, 3).unwrap());
}

#[test]
fn scale_multiplies_every_cell() {
    let m = sample();
    let result = m.scale(3);
    for i in 0..3 {
        for j in 0..3 {
            assert_eq!(result[(i, j)], m[(i, j)] * 3);
        }
    }
    assert_eq!(&m * 3, result);
}

#[test]
fn div_scalar_divides_every_cell() {
    let m = Matrix::from_rows(vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]]).unwrap();
    let result = m.div_scalar(3.0);
    for i in 0..2 {
        for j in 0..3 {
            assert_eq!(result[(i, j)], m[(i, j)] / 3.0);
        }
    }
    assert_eq!(&m / 3.0, result);
}

#[test]
fn add_scalar_shifts_every_cell() {
    let m = sample();
    let shifted = m.add_scalar(10);
    assert_eq!(shifted[(0, 0)], 11);
    assert_eq!(shifted[(2, 1)], 18);
}

#[test]
fn negation_flips_signs() {
    let m = sample();
    let neg = -&m;
    assert_eq!(neg[(1, 2)], -6);
    assert_eq!(m.add(&neg).unwrap(), Matrix::zeros(3, 3).unwrap());
}

#[test]
fn multiply_matches_triple_sum() {
    let a = Matrix::from_rows(vec![vec![1, 2, 3], vec![4, 5, 6]]).unwrap();
    let b = Matrix::from_rows(vec![vec![7, 8], vec![9, 10], vec![11, 12]]).unwrap();
    let c = a.multiply(&b).unwrap();

    assert_eq!(c.shape(), (2, 2));
    for i in 0..2 {
        for j in 0..2 {
            let cell: i32 = (0..3).map(|k| a[(i, k)] * b[(k, j)]).sum();
            assert_eq!(c[(i, j)], cell);
        }
    }
    assert_eq!(c.to_nested(), vec![vec![58, 64], vec![139, 154]]);
}

#[test]
fn multiply_by_identity_on_the_right() {
    let m = sample();
    let id = Matrix::identity(3).unwrap();
    assert_eq!(m.multiply(&id).unwrap(), m);
    assert_eq!(&m * &id, m);
}

#[test]
fn multiply_rejects_incompatible_inner_dimensions() {
    let a = Matrix::<i32>::zeros(2, 3).unwrap();
    assert_eq!(
        a.multiply(&a),
        Err(LinalgError::DimensionMismatch {
            left: (2, 3),
            right: (2, 3),
        })
    );
}

#[test]
fn multiply_is_not_commutative() {
    let a = Matrix::from_rows(vec![vec![1, 2], vec![3, 4]]).unwrap();
    let b = Matrix::from_rows(vec![vec![0, 1], vec![1, 0]]).unwrap();
    assert_ne!(a.multiply(&b).unwrap(), b.multiply(&a).unwrap());
}

#[test]
fn identity_is_a_left_identity_for_random_matrices() {
    let mut rng = StdRng::seed_from_u64(7);
    for n in 1..6 {
        let a = random_matrix(&mut rng, n, n);
        let id = Matrix::identity(n).unwrap();
        assert_eq!(id.multiply(&a).unwrap(), a);
    }
}

#[test]
fn addition_is_commutative_and_associative_for_random_matrices() {
    let mut rng = StdRng::seed_from_u64(11);
    for _ in 0..10 {
        let (h, w) = (rng.gen_range(1..5), rng.gen_range(1..5));
        let a = random_matrix(&mut rng, h, w);
        let b = random_matrix(&mut rng, h, w);
        let c = random_matrix(&mut rng, h, w);
        assert_eq!(a.add(&b).unwrap(), b.add(&a).unwrap());
        assert_eq!(
            a.add(&b).unwrap().add(&c).unwrap(),
            a.add(&b.add(&c).unwrap()).unwrap()
        );
    }
}

// ---------------------------------------------------------------------------
// Transpose
// ---------------------------------------------------------------------------

#[test]
fn transpose_swaps_indices() {
    let m = Matrix::from_rows(vec![vec![1, 2, 3, 2], vec![4, 5, 6, 5], vec![7, 8, 9, 5]]).unwrap();
    let t = m.transpose();
    assert_eq!(t.shape(), (4, 3));
    for i in 0..m.height() {
        for j in 0..m.width() {
            assert_eq!(m[(i, j)], t[(j, i)]);
        }
    }
}

#[test]
fn transpose_is_an_involution() {
    let mut rng = StdRng::seed_from_u64(3);
    for _ in 0..10 {
        let (h, w) = (rng.gen_range(1..6), rng.gen_range(1..6));
        let a = random_matrix(&mut rng, h, w);
        assert_eq!(a.transpose().transpose(), a);
    }
}

// ---------------------------------------------------------------------------
// Rendering
// ---------------------------------------------------------------------------

#[test]
fn display_prints_whitespace_separated_rows() {
    let m = Matrix::from_rows(vec![vec![1, 2], vec![3, 4]]).unwrap();
    assert_eq!(m.to_string(), "1 2\n3 4");
}

#[test]
fn render_honours_format_options() {
    let m = Matrix::from_rows(vec![vec![1.0, 0.5], vec![-2.25, 3.0]]).unwrap();
    let options = FormatOptions {
        precision: Some(2),
        column_separator: ", ".to_string(),
        row_separator: "; ".to_string(),
    };
    assert_eq!(m.render(&options), "1.00, 0.50; -2.25, 3.00");
}
