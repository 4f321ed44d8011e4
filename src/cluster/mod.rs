//! Clustering algorithms.
//!
//! Includes K-Means clustering with seeded k-means++ initialization, used
//! to partition the term-weighted catalog matrix and to classify free-text
//! queries against the retained centroids.

use crate::error::{Result, SugerirError};
use crate::primitives::{Matrix, Vector};
use crate::traits::UnsupervisedEstimator;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

/// K-Means clustering algorithm.
///
/// Uses Lloyd's algorithm with k-means++ initialization. A single
/// initialization run is performed from the configured seed, so a fixed
/// seed and fixed input give identical centroids and labels on every fit.
///
/// # Algorithm
///
/// 1. Initialize centroids k-means++ style (seeded first pick, then
///    farthest-point selection)
/// 2. Assign each sample to its nearest centroid
/// 3. Update centroids as the mean of assigned samples
/// 4. Repeat until convergence or max iterations
///
/// # Examples
///
/// ```
/// use sugerir::prelude::*;
///
/// let data = Matrix::from_vec(6, 2, vec![
///     1.0, 2.0,
///     1.5, 1.8,
///     5.0, 8.0,
///     8.0, 8.0,
///     1.0, 0.6,
///     9.0, 11.0,
/// ]).expect("valid matrix dimensions and data length");
///
/// let mut kmeans = KMeans::new(2).with_random_state(42);
/// kmeans.fit(&data).expect("fit succeeds with valid data");
///
/// let labels = kmeans.predict(&data);
/// assert_eq!(labels.len(), 6);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KMeans {
    /// Number of clusters.
    n_clusters: usize,
    /// Maximum iterations.
    max_iter: usize,
    /// Convergence tolerance.
    tol: f32,
    /// Random seed for initialization.
    random_state: u64,
    /// Cluster centroids after fitting.
    centroids: Option<Matrix<f32>>,
    /// Labels for training data.
    labels: Option<Vec<usize>>,
    /// Sum of squared distances (inertia).
    inertia: f32,
    /// Number of iterations run.
    n_iter: usize,
}

impl Default for KMeans {
    fn default() -> Self {
        Self::new(8)
    }
}

impl KMeans {
    /// Creates a new K-Means with the specified number of clusters.
    #[must_use]
    pub fn new(n_clusters: usize) -> Self {
        Self {
            n_clusters,
            max_iter: 300,
            tol: 1e-4,
            random_state: 42,
            centroids: None,
            labels: None,
            inertia: 0.0,
            n_iter: 0,
        }
    }

    /// Sets the maximum number of iterations.
    #[must_use]
    pub fn with_max_iter(mut self, max_iter: usize) -> Self {
        self.max_iter = max_iter;
        self
    }

    /// Sets the convergence tolerance.
    #[must_use]
    pub fn with_tol(mut self, tol: f32) -> Self {
        self.tol = tol;
        self
    }

    /// Sets the random seed for reproducibility.
    #[must_use]
    pub fn with_random_state(mut self, seed: u64) -> Self {
        self.random_state = seed;
        self
    }

    /// Returns the cluster centroids.
    ///
    /// # Panics
    ///
    /// Panics if the model is not fitted.
    #[must_use]
    pub fn centroids(&self) -> &Matrix<f32> {
        self.centroids
            .as_ref()
            .expect("Model not fitted. Call fit() first.")
    }

    /// Returns the training-data labels.
    ///
    /// # Panics
    ///
    /// Panics if the model is not fitted.
    #[must_use]
    pub fn labels(&self) -> &[usize] {
        self.labels
            .as_deref()
            .expect("Model not fitted. Call fit() first.")
    }

    /// Returns the inertia (within-cluster sum of squares).
    #[must_use]
    pub fn inertia(&self) -> f32 {
        self.inertia
    }

    /// Returns the number of iterations run.
    #[must_use]
    pub fn n_iter(&self) -> usize {
        self.n_iter
    }

    /// Returns true if the model has been fitted.
    #[must_use]
    pub fn is_fitted(&self) -> bool {
        self.centroids.is_some()
    }

    /// Predicts the cluster of a single point.
    ///
    /// # Panics
    ///
    /// Panics if the model is not fitted.
    #[must_use]
    pub fn predict_one(&self, point: &Vector<f32>) -> usize {
        let centroids = self
            .centroids
            .as_ref()
            .expect("Model not fitted. Call fit() first.");
        Self::nearest_centroid(point, centroids)
    }

    /// Index of the centroid nearest to `point`.
    fn nearest_centroid(point: &Vector<f32>, centroids: &Matrix<f32>) -> usize {
        let mut min_dist = f32::INFINITY;
        let mut min_cluster = 0;

        for k in 0..centroids.n_rows() {
            let centroid = centroids.row(k);
            let dist = (point - &centroid).norm_squared();
            if dist < min_dist {
                min_dist = dist;
                min_cluster = k;
            }
        }

        min_cluster
    }

    /// Initializes centroids k-means++ style: the first centroid is drawn
    /// from the seeded RNG, each subsequent one is the sample farthest from
    /// every centroid chosen so far.
    fn kmeans_plusplus_init(&self, x: &Matrix<f32>, rng: &mut SmallRng) -> Matrix<f32> {
        let (n_samples, n_features) = x.shape();
        let mut centroids_data = Vec::with_capacity(self.n_clusters * n_features);

        let first_idx = rng.gen_range(0..n_samples);
        for j in 0..n_features {
            centroids_data.push(x.get(first_idx, j));
        }

        for _ in 1..self.n_clusters {
            let n_current = centroids_data.len() / n_features;
            let mut min_distances = vec![f32::INFINITY; n_samples];

            for (i, min_dist) in min_distances.iter_mut().enumerate() {
                for c in 0..n_current {
                    let mut dist_sq = 0.0;
                    for j in 0..n_features {
                        let diff = x.get(i, j) - centroids_data[c * n_features + j];
                        dist_sq += diff * diff;
                    }
                    if dist_sq < *min_dist {
                        *min_dist = dist_sq;
                    }
                }
            }

            // Farthest point wins; duplicate points leave max_dist at zero
            // and fall back to index 0, producing a duplicate centroid.
            let mut max_dist = 0.0;
            let mut max_idx = 0;
            for (i, &dist) in min_distances.iter().enumerate() {
                if dist > max_dist {
                    max_dist = dist;
                    max_idx = i;
                }
            }

            for j in 0..n_features {
                centroids_data.push(x.get(max_idx, j));
            }
        }

        Matrix::from_vec(self.n_clusters, n_features, centroids_data)
            .expect("Internal error: centroid matrix creation failed")
    }

    /// Assigns each sample to the nearest centroid.
    fn assign_labels(x: &Matrix<f32>, centroids: &Matrix<f32>) -> Vec<usize> {
        (0..x.n_rows())
            .map(|i| Self::nearest_centroid(&x.row(i), centroids))
            .collect()
    }

    /// Updates centroids as the mean of assigned samples. Clusters that
    /// lost every sample keep their previous centroid.
    fn update_centroids(&self, x: &Matrix<f32>, labels: &[usize], old: &Matrix<f32>) -> Matrix<f32> {
        let (_, n_features) = x.shape();
        let mut new_centroids = vec![0.0; self.n_clusters * n_features];
        let mut counts = vec![0usize; self.n_clusters];

        for (i, &label) in labels.iter().enumerate() {
            counts[label] += 1;
            for j in 0..n_features {
                new_centroids[label * n_features + j] += x.get(i, j);
            }
        }

        for k in 0..self.n_clusters {
            if counts[k] > 0 {
                for j in 0..n_features {
                    new_centroids[k * n_features + j] /= counts[k] as f32;
                }
            } else {
                for j in 0..n_features {
                    new_centroids[k * n_features + j] = old.get(k, j);
                }
            }
        }

        Matrix::from_vec(self.n_clusters, n_features, new_centroids)
            .expect("Internal error: centroid update failed")
    }

    /// Checks if centroids have converged.
    fn centroids_converged(&self, old: &Matrix<f32>, new: &Matrix<f32>) -> bool {
        let (n_clusters, n_features) = old.shape();

        for k in 0..n_clusters {
            let mut dist_sq = 0.0;
            for j in 0..n_features {
                let diff = old.get(k, j) - new.get(k, j);
                dist_sq += diff * diff;
            }
            if dist_sq > self.tol * self.tol {
                return false;
            }
        }

        true
    }

    /// Within-cluster sum of squared distances.
    fn compute_inertia(x: &Matrix<f32>, centroids: &Matrix<f32>, labels: &[usize]) -> f32 {
        labels
            .iter()
            .enumerate()
            .map(|(i, &label)| (&x.row(i) - &centroids.row(label)).norm_squared())
            .sum()
    }
}

impl UnsupervisedEstimator for KMeans {
    type Labels = Vec<usize>;

    /// Fits the K-Means model to data.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `n_clusters` is zero
    /// - Data is empty
    /// - Data has fewer samples than clusters
    fn fit(&mut self, x: &Matrix<f32>) -> Result<()> {
        let n_samples = x.n_rows();

        if self.n_clusters == 0 {
            return Err(SugerirError::InvalidHyperparameter {
                param: "n_clusters".to_string(),
                value: "0".to_string(),
                constraint: "n_clusters > 0".to_string(),
            });
        }
        if n_samples == 0 {
            return Err("cannot fit with zero samples".into());
        }
        if n_samples < self.n_clusters {
            return Err(SugerirError::InvalidHyperparameter {
                param: "n_clusters".to_string(),
                value: self.n_clusters.to_string(),
                constraint: format!("n_clusters <= {n_samples} samples"),
            });
        }

        let mut rng = SmallRng::seed_from_u64(self.random_state);
        let mut centroids = self.kmeans_plusplus_init(x, &mut rng);
        let mut labels = vec![0; n_samples];

        for iter in 0..self.max_iter {
            labels = Self::assign_labels(x, &centroids);
            let new_centroids = self.update_centroids(x, &labels, &centroids);

            let converged = self.centroids_converged(&centroids, &new_centroids);
            centroids = new_centroids;
            self.n_iter = iter + 1;
            if converged {
                break;
            }
        }

        self.inertia = Self::compute_inertia(x, &centroids, &labels);
        self.labels = Some(labels);
        self.centroids = Some(centroids);

        Ok(())
    }

    /// Predicts cluster labels for data.
    ///
    /// # Panics
    ///
    /// Panics if the model is not fitted.
    fn predict(&self, x: &Matrix<f32>) -> Vec<usize> {
        let centroids = self
            .centroids
            .as_ref()
            .expect("Model not fitted. Call fit() first.");
        Self::assign_labels(x, centroids)
    }
}

#[cfg(test)]
#[path = "kmeans_tests.rs"]
mod tests;
