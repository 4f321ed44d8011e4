use super::*;

fn sample() -> Matrix<f32> {
    Matrix::from_vec(2, 3, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]).unwrap()
}

#[test]
fn test_from_vec_valid() {
    let m = sample();
    assert_eq!(m.shape(), (2, 3));
    assert_eq!(m.n_rows(), 2);
    assert_eq!(m.n_cols(), 3);
}

#[test]
fn test_from_vec_wrong_length() {
    let result = Matrix::from_vec(2, 3, vec![1.0_f32, 2.0]);
    assert!(result.is_err());
}

#[test]
fn test_get_set() {
    let mut m = Matrix::zeros(2, 2);
    m.set(0, 1, 7.0);
    m.set(1, 0, -1.0);
    assert_eq!(m.get(0, 1), 7.0);
    assert_eq!(m.get(1, 0), -1.0);
    assert_eq!(m.get(0, 0), 0.0);
}

#[test]
fn test_row() {
    let m = sample();
    let r = m.row(1);
    assert_eq!(r.as_slice(), &[4.0, 5.0, 6.0]);
}

#[test]
fn test_column() {
    let m = sample();
    let c = m.column(2);
    assert_eq!(c.as_slice(), &[3.0, 6.0]);
}

#[test]
fn test_transpose() {
    let m = sample();
    let t = m.transpose();
    assert_eq!(t.shape(), (3, 2));
    assert_eq!(t.get(0, 1), 4.0);
    assert_eq!(t.get(2, 0), 3.0);
}

#[test]
fn test_transpose_twice_is_identity() {
    let m = sample();
    assert_eq!(m.transpose().transpose(), m);
}

#[test]
fn test_matmul() {
    // [1 2] [5 6]   [19 22]
    // [3 4] [7 8] = [43 50]
    let a = Matrix::from_vec(2, 2, vec![1.0, 2.0, 3.0, 4.0]).unwrap();
    let b = Matrix::from_vec(2, 2, vec![5.0, 6.0, 7.0, 8.0]).unwrap();
    let c = a.matmul(&b).unwrap();
    assert_eq!(c.as_slice(), &[19.0, 22.0, 43.0, 50.0]);
}

#[test]
fn test_matmul_dimension_mismatch() {
    let a = Matrix::from_vec(2, 3, vec![0.0; 6]).unwrap();
    let b = Matrix::from_vec(2, 2, vec![0.0; 4]).unwrap();
    assert!(a.matmul(&b).is_err());
}

#[test]
fn test_gram_is_symmetric() {
    let x = Matrix::from_vec(3, 2, vec![1.0, 0.0, 0.5, 2.0, -1.0, 1.5]).unwrap();
    let gram = x.matmul(&x.transpose()).unwrap();
    assert_eq!(gram.shape(), (3, 3));
    for i in 0..3 {
        for j in 0..3 {
            assert!((gram.get(i, j) - gram.get(j, i)).abs() < 1e-6);
        }
    }
}
