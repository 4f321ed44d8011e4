//! Popularity ranking from raw interaction counts.

use crate::corpus::Interaction;
use crate::error::{Result, SugerirError};
use std::collections::HashMap;

/// Global popularity ranking over the interaction log.
///
/// Items are ordered by descending interaction count. The sort is stable,
/// so ties keep their first-appearance order in the log: callers must not
/// assume any particular tie order unless the log's row order is itself
/// deterministic.
///
/// # Examples
///
/// ```
/// use sugerir::corpus::Interaction;
/// use sugerir::recommend::PopularityRanker;
///
/// let log = vec![
///     Interaction::new("u1", "b", 4.0, 0),
///     Interaction::new("u2", "a", 5.0, 1),
///     Interaction::new("u3", "a", 3.0, 2),
/// ];
/// let ranker = PopularityRanker::build(&log);
/// assert_eq!(ranker.get_popular(2).unwrap(), vec!["a", "b"]);
/// ```
#[derive(Debug, Clone)]
pub struct PopularityRanker {
    /// (item id, interaction count), descending by count.
    ranked: Vec<(String, usize)>,
}

impl PopularityRanker {
    /// Counts interactions per item and ranks items by descending count.
    #[must_use]
    pub fn build(interactions: &[Interaction]) -> Self {
        let mut order: Vec<String> = Vec::new();
        let mut counts: HashMap<String, usize> = HashMap::new();

        for interaction in interactions {
            let entry = counts.entry(interaction.item_id.clone()).or_insert(0);
            if *entry == 0 {
                order.push(interaction.item_id.clone());
            }
            *entry += 1;
        }

        let mut ranked: Vec<(String, usize)> = order
            .into_iter()
            .map(|id| {
                let count = counts[&id];
                (id, count)
            })
            .collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1));

        Self { ranked }
    }

    /// Returns up to `limit` item ids, most interacted-with first.
    ///
    /// The result length is `min(limit, distinct_item_count)`, zero for an
    /// empty interaction log.
    ///
    /// # Errors
    ///
    /// Returns an error if `limit` is zero (caller bug, not a data
    /// condition).
    pub fn get_popular(&self, limit: usize) -> Result<Vec<String>> {
        if limit == 0 {
            return Err(SugerirError::InvalidHyperparameter {
                param: "limit".to_string(),
                value: "0".to_string(),
                constraint: "limit > 0".to_string(),
            });
        }

        Ok(self
            .ranked
            .iter()
            .take(limit)
            .map(|(id, _)| id.clone())
            .collect())
    }

    /// (item id, interaction count) pairs, descending by count.
    #[must_use]
    pub fn counts(&self) -> &[(String, usize)] {
        &self.ranked
    }

    /// Number of distinct items seen in the log.
    #[must_use]
    pub fn len(&self) -> usize {
        self.ranked.len()
    }

    /// Returns true if the log contained no interactions.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ranked.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn log() -> Vec<Interaction> {
        vec![
            Interaction::new("u1", "a", 5.0, 0),
            Interaction::new("u2", "b", 4.0, 1),
            Interaction::new("u3", "b", 3.0, 2),
            Interaction::new("u1", "c", 2.0, 3),
            Interaction::new("u2", "b", 5.0, 4),
            Interaction::new("u3", "c", 1.0, 5),
        ]
    }

    #[test]
    fn test_ranking_by_count() {
        let ranker = PopularityRanker::build(&log());
        // b: 3, c: 2, a: 1
        assert_eq!(ranker.get_popular(3).unwrap(), vec!["b", "c", "a"]);
    }

    #[test]
    fn test_limit_truncates() {
        let ranker = PopularityRanker::build(&log());
        assert_eq!(ranker.get_popular(1).unwrap(), vec!["b"]);
    }

    #[test]
    fn test_limit_beyond_universe() {
        let ranker = PopularityRanker::build(&log());
        assert_eq!(ranker.get_popular(100).unwrap().len(), 3);
    }

    #[test]
    fn test_empty_log() {
        let ranker = PopularityRanker::build(&[]);
        assert!(ranker.is_empty());
        assert_eq!(ranker.len(), 0);
        assert!(ranker.get_popular(5).unwrap().is_empty());
    }

    #[test]
    fn test_zero_limit_is_an_error() {
        let ranker = PopularityRanker::build(&log());
        assert!(ranker.get_popular(0).is_err());
    }

    #[test]
    fn test_ties_keep_log_order() {
        let interactions = vec![
            Interaction::new("u1", "x", 5.0, 0),
            Interaction::new("u2", "y", 5.0, 1),
            Interaction::new("u3", "z", 5.0, 2),
        ];
        let ranker = PopularityRanker::build(&interactions);
        // All counts equal: stable sort preserves first-appearance order.
        assert_eq!(ranker.get_popular(3).unwrap(), vec!["x", "y", "z"]);
    }

    #[test]
    fn test_counts_accessor() {
        let ranker = PopularityRanker::build(&log());
        let counts = ranker.counts();
        assert_eq!(counts[0], ("b".to_string(), 3));
        assert_eq!(counts[1], ("c".to_string(), 2));
    }
}
