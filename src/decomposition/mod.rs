//! Truncated singular value decomposition for latent rank reduction.
//!
//! Projects high-dimensional rating vectors onto the small number of
//! dominant directions that capture shared co-rating structure, discarding
//! noise dimensions. The decomposition goes through the row Gram matrix:
//! for X = U·Σ·Vᵀ, X·Xᵀ = U·Σ²·Uᵀ, so the top eigenpairs of the Gram matrix
//! yield the latent representation U_r·Σ_r directly. No right singular
//! vectors are ever materialized, and surplus components simply come out
//! with zero singular values when the input is rank-deficient.

use crate::error::{Result, SugerirError};
use crate::primitives::Matrix;

/// Truncated SVD over matrix rows.
///
/// # Examples
///
/// ```
/// use sugerir::decomposition::TruncatedSvd;
/// use sugerir::primitives::Matrix;
///
/// let x = Matrix::from_vec(4, 3, vec![
///     5.0, 0.0, 0.0,
///     4.0, 1.0, 0.0,
///     0.0, 0.0, 5.0,
///     0.0, 1.0, 4.0,
/// ]).expect("valid matrix");
///
/// let mut svd = TruncatedSvd::new(2);
/// let latent = svd.fit_transform(&x).expect("decomposition succeeds");
/// assert_eq!(latent.shape(), (4, 2));
/// ```
#[derive(Debug, Clone)]
pub struct TruncatedSvd {
    /// Number of latent dimensions to retain.
    n_components: usize,
    /// Singular values from the last fit, descending.
    singular_values: Option<Vec<f32>>,
}

impl TruncatedSvd {
    /// Creates a new decomposition with the given target rank.
    #[must_use]
    pub fn new(n_components: usize) -> Self {
        Self {
            n_components,
            singular_values: None,
        }
    }

    /// Returns the singular values from the last fit, descending.
    #[must_use]
    pub fn singular_values(&self) -> Option<&[f32]> {
        self.singular_values.as_deref()
    }

    /// Decomposes `x` and returns the latent row representation `U_r · Σ_r`
    /// (one row per input row, `n_components` columns).
    ///
    /// The effective rank is capped at the number of rows; requesting more
    /// components than the matrix can support pads with zero-valued
    /// dimensions rather than failing.
    ///
    /// # Errors
    ///
    /// Returns an error if `n_components` is zero or `x` has no rows.
    pub fn fit_transform(&mut self, x: &Matrix<f32>) -> Result<Matrix<f32>> {
        use nalgebra::{DMatrix, SymmetricEigen};

        if self.n_components == 0 {
            return Err(SugerirError::InvalidHyperparameter {
                param: "n_components".to_string(),
                value: "0".to_string(),
                constraint: "n_components > 0".to_string(),
            });
        }

        let (n, _) = x.shape();
        if n == 0 {
            return Err("cannot decompose a matrix with no rows".into());
        }

        let gram = x.matmul(&x.transpose()).map_err(SugerirError::from)?;
        let gram = DMatrix::from_row_slice(n, n, gram.as_slice());
        let eigen = SymmetricEigen::new(gram);

        let eigenvalues = eigen.eigenvalues;
        let eigenvectors = eigen.eigenvectors;

        // Sort eigenpairs by descending eigenvalue.
        let mut indices: Vec<usize> = (0..n).collect();
        indices.sort_by(|&a, &b| {
            eigenvalues[b]
                .partial_cmp(&eigenvalues[a])
                .unwrap_or(std::cmp::Ordering::Equal)
        });

        let r = self.n_components;
        let k = r.min(n);
        let mut latent = vec![0.0_f32; n * r];
        let mut singular_values = vec![0.0_f32; r];

        for (c, &idx) in indices.iter().take(k).enumerate() {
            // Tiny negative eigenvalues are floating-point noise.
            let sigma = eigenvalues[idx].max(0.0).sqrt();
            singular_values[c] = sigma;
            for i in 0..n {
                latent[i * r + c] = eigenvectors[(i, idx)] * sigma;
            }
        }

        self.singular_values = Some(singular_values);
        Matrix::from_vec(n, r, latent).map_err(Into::into)
    }
}

#[cfg(test)]
#[path = "decomposition_tests.rs"]
mod tests;
