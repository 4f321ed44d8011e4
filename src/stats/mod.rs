//! Pearson correlation over latent item vectors.
//!
//! The collaborative filter scores item similarity as the linear correlation
//! between latent item rows. Rows whose entries are (near-)constant have no
//! defined correlation; they score 0.0 against everything instead of
//! erroring, so one degenerate item never poisons a build.

use crate::primitives::{Matrix, Vector};
use rayon::prelude::*;

/// Variance floor below which a row is treated as constant.
const VARIANCE_EPS: f32 = 1e-10;

/// Computes the Pearson correlation coefficient between two vectors.
///
/// Returns a value in [-1, 1], or 0.0 when either vector is empty or has
/// (near-)zero variance.
///
/// # Examples
///
/// ```
/// use sugerir::stats::corr;
/// use sugerir::primitives::Vector;
///
/// let x = Vector::from_slice(&[1.0, 2.0, 3.0, 4.0]);
/// let y = Vector::from_slice(&[2.0, 4.0, 6.0, 8.0]);
/// let correlation = corr(&x, &y);
/// assert!((correlation - 1.0).abs() < 1e-6);
///
/// let flat = Vector::from_slice(&[5.0, 5.0, 5.0, 5.0]);
/// assert_eq!(corr(&x, &flat), 0.0);
/// ```
///
/// # Panics
///
/// Panics if the vectors have different lengths.
#[must_use]
pub fn corr(x: &Vector<f32>, y: &Vector<f32>) -> f32 {
    let n = x.len();
    assert_eq!(n, y.len(), "Vectors must have same length for correlation");

    if n == 0 {
        return 0.0;
    }

    let x_mean = x.mean();
    let y_mean = y.mean();

    let mut cov_sum = 0.0;
    let mut x_var_sum = 0.0;
    let mut y_var_sum = 0.0;

    for (&xi, &yi) in x.as_slice().iter().zip(y.as_slice().iter()) {
        let x_diff = xi - x_mean;
        let y_diff = yi - y_mean;
        cov_sum += x_diff * y_diff;
        x_var_sum += x_diff * x_diff;
        y_var_sum += y_diff * y_diff;
    }

    let x_std = (x_var_sum / n as f32).sqrt();
    let y_std = (y_var_sum / n as f32).sqrt();

    if x_std < VARIANCE_EPS || y_std < VARIANCE_EPS {
        return 0.0;
    }

    (cov_sum / n as f32) / (x_std * y_std)
}

/// Computes the Pearson correlation matrix between all row pairs of `data`.
///
/// Returns an n×n symmetric matrix for an n-row input; entry (i, j) is the
/// correlation between row i and row j, the diagonal is 1.0. Rows with
/// (near-)zero variance correlate 0.0 with every other row.
///
/// Row pairs are independent, so the fill is parallelized; this runs once
/// at build time over the full item universe.
///
/// # Examples
///
/// ```
/// use sugerir::stats::row_corr_matrix;
/// use sugerir::primitives::Matrix;
///
/// // Row 1 is a scaled copy of row 0, row 2 runs opposite.
/// let data = Matrix::from_vec(3, 3, vec![
///     1.0, 2.0, 3.0,
///     2.0, 4.0, 6.0,
///     3.0, 2.0, 1.0,
/// ]).expect("valid matrix");
///
/// let corr = row_corr_matrix(&data);
/// assert!((corr.get(0, 1) - 1.0).abs() < 1e-5);
/// assert!((corr.get(0, 2) + 1.0).abs() < 1e-5);
/// assert!((corr.get(2, 2) - 1.0).abs() < 1e-6);
/// ```
#[must_use]
pub fn row_corr_matrix(data: &Matrix<f32>) -> Matrix<f32> {
    let (n, p) = data.shape();
    if n == 0 {
        return Matrix::zeros(0, 0);
    }

    let (means, stds) = row_stats(data, n, p);

    let corr_rows: Vec<Vec<f32>> = (0..n)
        .into_par_iter()
        .map(|i| {
            let mut row = vec![0.0_f32; n];
            row[i] = 1.0;
            if stds[i] < VARIANCE_EPS {
                return row;
            }
            for (j, out) in row.iter_mut().enumerate() {
                if j == i || stds[j] < VARIANCE_EPS {
                    continue;
                }
                let cov_sum: f32 = (0..p)
                    .map(|k| (data.get(i, k) - means[i]) * (data.get(j, k) - means[j]))
                    .sum();
                *out = cov_sum / (p as f32 * stds[i] * stds[j]);
            }
            row
        })
        .collect();

    let flat: Vec<f32> = corr_rows.into_iter().flatten().collect();
    Matrix::from_vec(n, n, flat).expect("correlation matrix dimensions are consistent")
}

/// Per-row mean and standard deviation (population form).
fn row_stats(data: &Matrix<f32>, n: usize, p: usize) -> (Vec<f32>, Vec<f32>) {
    let mut means = vec![0.0_f32; n];
    let mut stds = vec![0.0_f32; n];

    for i in 0..n {
        let sum: f32 = (0..p).map(|k| data.get(i, k)).sum();
        let mean = if p == 0 { 0.0 } else { sum / p as f32 };
        means[i] = mean;

        let var_sum: f32 = (0..p).map(|k| (data.get(i, k) - mean).powi(2)).sum();
        stds[i] = if p == 0 {
            0.0
        } else {
            (var_sum / p as f32).sqrt()
        };
    }

    (means, stds)
}

#[cfg(test)]
#[path = "stats_tests.rs"]
mod tests;
