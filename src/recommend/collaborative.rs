//! Item-item collaborative filtering over a bounded interaction sample.
//!
//! A bounded prefix of the interaction log is pivoted into an items×users
//! utility matrix (zero where unobserved: "never rated" and "rated zero"
//! are deliberately indistinguishable, a precision loss inherited from the
//! source behavior), reduced to a low-rank latent item representation, and
//! scored into a full item×item Pearson correlation matrix. Queries rank
//! every other item by correlation; there is no similarity threshold.

use crate::config::EngineConfig;
use crate::corpus::Interaction;
use crate::decomposition::TruncatedSvd;
use crate::error::{Result, SugerirError};
use crate::primitives::Matrix;
use crate::stats::row_corr_matrix;
use std::collections::HashMap;
use tracing::{debug, info};

/// Item-item similarity model.
///
/// Built once from an interaction log; read-only afterwards. An empty log
/// produces an unbuilt filter whose queries all return empty sequences.
///
/// # Examples
///
/// ```
/// use sugerir::config::EngineConfig;
/// use sugerir::corpus::Interaction;
/// use sugerir::recommend::CollaborativeFilter;
///
/// let log = vec![
///     Interaction::new("u1", "a", 5.0, 0),
///     Interaction::new("u1", "b", 5.0, 1),
///     Interaction::new("u2", "a", 4.0, 2),
///     Interaction::new("u2", "b", 4.0, 3),
///     Interaction::new("u3", "c", 1.0, 4),
/// ];
/// let filter = CollaborativeFilter::build(&log, &EngineConfig::default());
///
/// let similar = filter.get_similar("a", 2).unwrap();
/// assert_eq!(similar.len(), 2);
/// assert!(!similar.contains(&"a".to_string()));
/// ```
#[derive(Debug, Clone)]
pub struct CollaborativeFilter {
    /// Canonical item order (utility-matrix row order).
    item_ids: Vec<String>,
    /// item id → row index.
    index: HashMap<String, usize>,
    /// Item×item Pearson correlations; `None` when the filter could not be
    /// built (empty interaction log).
    correlation: Option<Matrix<f32>>,
}

impl CollaborativeFilter {
    /// Builds the filter from the first `max_interactions_sampled` rows of
    /// the interaction log.
    ///
    /// The prefix cap trades training signal for bounded memory. The
    /// effective latent rank is `min(latent_rank, n_items − 1)`, or 1 when
    /// a single item exists.
    #[must_use]
    pub fn build(interactions: &[Interaction], config: &EngineConfig) -> Self {
        if interactions.is_empty() {
            debug!("empty interaction log; collaborative filter left unbuilt");
            return Self {
                item_ids: Vec::new(),
                index: HashMap::new(),
                correlation: None,
            };
        }

        let cap = config.max_interactions_sampled.min(interactions.len());
        let sample = &interactions[..cap];

        let (item_ids, index, utility) = pivot(sample);
        let n_items = utility.n_rows();

        let rank = if n_items > 1 {
            config.latent_rank.min(n_items - 1)
        } else {
            1
        };

        let mut svd = TruncatedSvd::new(rank);
        let correlation = match svd.fit_transform(&utility) {
            Ok(latent) => Some(row_corr_matrix(&latent)),
            Err(e) => {
                debug!(error = %e, "latent decomposition failed; filter left unbuilt");
                None
            }
        };

        info!(
            sampled = cap,
            items = n_items,
            rank,
            "built collaborative filter"
        );

        Self {
            item_ids,
            index,
            correlation,
        }
    }

    /// Returns up to `limit` item ids most correlated with `item_id`,
    /// descending; the queried item itself is always excluded.
    ///
    /// Returns an empty sequence if `item_id` is outside the build-time
    /// item universe or the filter could not be built. Correlation ties
    /// break by ascending utility-row index, so results are deterministic
    /// for a fixed build.
    ///
    /// # Errors
    ///
    /// Returns an error if `limit` is zero.
    pub fn get_similar(&self, item_id: &str, limit: usize) -> Result<Vec<String>> {
        if limit == 0 {
            return Err(SugerirError::InvalidHyperparameter {
                param: "limit".to_string(),
                value: "0".to_string(),
                constraint: "limit > 0".to_string(),
            });
        }

        let (correlation, &idx) = match (&self.correlation, self.index.get(item_id)) {
            (Some(c), Some(idx)) => (c, idx),
            _ => {
                debug!(item_id, "similarity query outside item universe");
                return Ok(Vec::new());
            }
        };

        let mut scored: Vec<(usize, f32)> = (0..self.item_ids.len())
            .filter(|&j| j != idx)
            .map(|j| (j, correlation.get(idx, j)))
            .collect();
        scored.sort_by(|a, b| {
            b.1.partial_cmp(&a.1)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then_with(|| a.0.cmp(&b.0))
        });

        Ok(scored
            .into_iter()
            .take(limit)
            .map(|(j, _)| self.item_ids[j].clone())
            .collect())
    }

    /// The build-time item universe, in utility-matrix row order.
    #[must_use]
    pub fn item_ids(&self) -> &[String] {
        &self.item_ids
    }

    /// The item×item correlation matrix, if the filter was built.
    #[must_use]
    pub fn correlation(&self) -> Option<&Matrix<f32>> {
        self.correlation.as_ref()
    }

    /// Returns true if the filter was built from a non-empty log.
    #[must_use]
    pub fn is_built(&self) -> bool {
        self.correlation.is_some()
    }
}

/// Pivots interactions into a zero-filled items×users utility matrix.
///
/// Row/column order is first-appearance order in the sample. A duplicate
/// (user, item) observation overwrites the cell, keeping the last rating.
fn pivot(sample: &[Interaction]) -> (Vec<String>, HashMap<String, usize>, Matrix<f32>) {
    let mut item_ids: Vec<String> = Vec::new();
    let mut item_index: HashMap<String, usize> = HashMap::new();
    let mut user_index: HashMap<&str, usize> = HashMap::new();

    for interaction in sample {
        if !item_index.contains_key(&interaction.item_id) {
            item_index.insert(interaction.item_id.clone(), item_ids.len());
            item_ids.push(interaction.item_id.clone());
        }
        let next_user = user_index.len();
        user_index.entry(&interaction.user_id).or_insert(next_user);
    }

    let mut utility = Matrix::zeros(item_ids.len(), user_index.len());
    for interaction in sample {
        let row = item_index[&interaction.item_id];
        let col = user_index[interaction.user_id.as_str()];
        utility.set(row, col, interaction.rating);
    }

    (item_ids, item_index, utility)
}

#[cfg(test)]
#[path = "collaborative_tests.rs"]
mod tests;
