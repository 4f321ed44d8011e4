use super::*;

#[test]
fn test_output_shape() {
    let x = Matrix::from_vec(3, 4, vec![
        1.0, 0.0, 2.0, 0.0,
        0.0, 3.0, 0.0, 1.0,
        2.0, 1.0, 1.0, 1.0,
    ])
    .unwrap();
    let mut svd = TruncatedSvd::new(2);
    let latent = svd.fit_transform(&x).unwrap();
    assert_eq!(latent.shape(), (3, 2));
}

#[test]
fn test_singular_values_descending() {
    let x = Matrix::from_vec(4, 3, vec![
        5.0, 0.0, 0.0,
        4.0, 1.0, 0.0,
        0.0, 0.0, 5.0,
        0.0, 1.0, 4.0,
    ])
    .unwrap();
    let mut svd = TruncatedSvd::new(3);
    svd.fit_transform(&x).unwrap();
    let sv = svd.singular_values().unwrap();
    assert_eq!(sv.len(), 3);
    for w in sv.windows(2) {
        assert!(w[0] >= w[1]);
    }
    assert!(sv.iter().all(|&s| s >= 0.0));
}

#[test]
fn test_full_rank_reproduces_gram() {
    // With r = n the latent rows must reproduce X·Xᵀ exactly.
    let x = Matrix::from_vec(3, 3, vec![
        2.0, 0.0, 1.0,
        0.0, 3.0, 0.0,
        1.0, 1.0, 1.0,
    ])
    .unwrap();
    let mut svd = TruncatedSvd::new(3);
    let latent = svd.fit_transform(&x).unwrap();

    let gram = x.matmul(&x.transpose()).unwrap();
    let approx = latent.matmul(&latent.transpose()).unwrap();
    for i in 0..3 {
        for j in 0..3 {
            assert!(
                (gram.get(i, j) - approx.get(i, j)).abs() < 1e-3,
                "gram mismatch at ({i}, {j})"
            );
        }
    }
}

#[test]
fn test_rank_deficient_input_zero_tail() {
    // Rows are all multiples of one another: rank 1.
    let x = Matrix::from_vec(3, 3, vec![
        1.0, 2.0, 3.0,
        2.0, 4.0, 6.0,
        3.0, 6.0, 9.0,
    ])
    .unwrap();
    let mut svd = TruncatedSvd::new(2);
    svd.fit_transform(&x).unwrap();
    let sv = svd.singular_values().unwrap();
    assert!(sv[0] > 1.0);
    assert!(sv[1].abs() < 1e-3);
}

#[test]
fn test_more_components_than_rows_pads() {
    let x = Matrix::from_vec(2, 2, vec![1.0, 0.0, 0.0, 1.0]).unwrap();
    let mut svd = TruncatedSvd::new(5);
    let latent = svd.fit_transform(&x).unwrap();
    assert_eq!(latent.shape(), (2, 5));
    // Components beyond the row count are zero-valued.
    for i in 0..2 {
        for c in 2..5 {
            assert_eq!(latent.get(i, c), 0.0);
        }
    }
}

#[test]
fn test_single_row() {
    let x = Matrix::from_vec(1, 4, vec![1.0, 2.0, 3.0, 4.0]).unwrap();
    let mut svd = TruncatedSvd::new(1);
    let latent = svd.fit_transform(&x).unwrap();
    assert_eq!(latent.shape(), (1, 1));
    // The single singular value is the row norm.
    let expected = (1.0_f32 + 4.0 + 9.0 + 16.0).sqrt();
    assert!((latent.get(0, 0).abs() - expected).abs() < 1e-4);
}

#[test]
fn test_zero_components_rejected() {
    let x = Matrix::from_vec(2, 2, vec![1.0, 0.0, 0.0, 1.0]).unwrap();
    let mut svd = TruncatedSvd::new(0);
    assert!(svd.fit_transform(&x).is_err());
}

#[test]
fn test_empty_matrix_rejected() {
    let x = Matrix::zeros(0, 0);
    let mut svd = TruncatedSvd::new(1);
    assert!(svd.fit_transform(&x).is_err());
}

#[test]
fn test_deterministic_across_runs() {
    let x = Matrix::from_vec(3, 3, vec![
        1.0, 0.5, 0.0,
        0.5, 2.0, 1.0,
        0.0, 1.0, 3.0,
    ])
    .unwrap();
    let a = TruncatedSvd::new(2).fit_transform(&x).unwrap();
    let b = TruncatedSvd::new(2).fit_transform(&x).unwrap();
    assert_eq!(a, b);
}
