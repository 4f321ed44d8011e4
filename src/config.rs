//! Engine configuration.
//!
//! Every constant the recommendation pipeline depends on is an explicit,
//! documented option here. The defaults reproduce the behavior of the
//! reference data set this engine was tuned on; small catalogs are handled
//! by clamping at build time, never by failing.

use serde::{Deserialize, Serialize};

/// Configuration for [`Engine::build`](crate::recommend::Engine::build).
///
/// Constructed with [`EngineConfig::default`] and refined with the `with_*`
/// setters.
///
/// # Examples
///
/// ```
/// use sugerir::config::EngineConfig;
///
/// let config = EngineConfig::default()
///     .with_latent_rank(5)
///     .with_text_clusters(4)
///     .with_random_state(7);
/// assert_eq!(config.latent_rank, 5);
/// assert_eq!(config.max_interactions_sampled, 10_000);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Number of interaction-log rows pivoted into the utility matrix.
    ///
    /// The prefix cap bounds build memory at the cost of discarding training
    /// signal beyond it, a bias/variance trade-off rather than a hidden
    /// constant.
    pub max_interactions_sampled: usize,

    /// Upper bound on the truncated-SVD rank. The effective rank is
    /// `min(latent_rank, n_items - 1)`, or 1 when a single item exists.
    pub latent_rank: usize,

    /// Upper bound on the number of text clusters. The effective count is
    /// `min(text_clusters, n_catalog_items)`.
    pub text_clusters: usize,

    /// Iteration bound for the K-Means fit.
    pub kmeans_max_iter: usize,

    /// Maximum number of item ids returned by a free-text query.
    pub text_results_cap: usize,

    /// Seed for the K-Means initialization. Fixed seed + fixed input gives
    /// an identical engine on rebuild.
    pub random_state: u64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            max_interactions_sampled: 10_000,
            latent_rank: 10,
            text_clusters: 10,
            kmeans_max_iter: 100,
            text_results_cap: 10,
            random_state: 42,
        }
    }
}

impl EngineConfig {
    /// Sets the interaction-log prefix cap.
    #[must_use]
    pub fn with_max_interactions_sampled(mut self, cap: usize) -> Self {
        self.max_interactions_sampled = cap;
        self
    }

    /// Sets the truncated-SVD rank bound.
    #[must_use]
    pub fn with_latent_rank(mut self, rank: usize) -> Self {
        self.latent_rank = rank;
        self
    }

    /// Sets the text cluster count bound.
    #[must_use]
    pub fn with_text_clusters(mut self, k: usize) -> Self {
        self.text_clusters = k;
        self
    }

    /// Sets the K-Means iteration bound.
    #[must_use]
    pub fn with_kmeans_max_iter(mut self, max_iter: usize) -> Self {
        self.kmeans_max_iter = max_iter;
        self
    }

    /// Sets the free-text result cap.
    #[must_use]
    pub fn with_text_results_cap(mut self, cap: usize) -> Self {
        self.text_results_cap = cap;
        self
    }

    /// Sets the initialization seed.
    #[must_use]
    pub fn with_random_state(mut self, seed: u64) -> Self {
        self.random_state = seed;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = EngineConfig::default();
        assert_eq!(config.max_interactions_sampled, 10_000);
        assert_eq!(config.latent_rank, 10);
        assert_eq!(config.text_clusters, 10);
        assert_eq!(config.kmeans_max_iter, 100);
        assert_eq!(config.text_results_cap, 10);
        assert_eq!(config.random_state, 42);
    }

    #[test]
    fn test_builder_chain() {
        let config = EngineConfig::default()
            .with_max_interactions_sampled(100)
            .with_latent_rank(3)
            .with_text_clusters(2)
            .with_kmeans_max_iter(10)
            .with_text_results_cap(5)
            .with_random_state(1);
        assert_eq!(config.max_interactions_sampled, 100);
        assert_eq!(config.latent_rank, 3);
        assert_eq!(config.text_clusters, 2);
        assert_eq!(config.kmeans_max_iter, 10);
        assert_eq!(config.text_results_cap, 5);
        assert_eq!(config.random_state, 1);
    }
}
