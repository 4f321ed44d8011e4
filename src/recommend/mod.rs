//! Recommendation engine: three ranking signals behind one facade.
//!
//! [`Engine::build`] constructs the popularity ranker, the collaborative
//! filter, and the content clusterer once from a [`Corpus`] snapshot. The
//! result is an immutable value: no query mutates any internal structure,
//! so any number of threads may read concurrently without locking. A data
//! refresh is a full rebuild: construct a new `Engine` and swap the
//! reference the serving layer holds (typically an `Arc<Engine>`); a
//! rebuild is abandoned by simply dropping the new value unpublished.

pub mod collaborative;
pub mod content;
pub mod popularity;

pub use collaborative::CollaborativeFilter;
pub use content::ContentClusterer;
pub use popularity::PopularityRanker;

use crate::config::EngineConfig;
use crate::corpus::{CatalogEntry, Corpus};
use crate::error::Result;
use std::collections::HashMap;
use tracing::info;

/// The recommendation facade.
///
/// Returns item ids only: resolving ids to titles/images and substituting
/// fallback display values for unknown ids is the caller's job, via
/// [`Engine::catalog`] and [`Engine::lookup`].
///
/// # Examples
///
/// ```
/// use sugerir::prelude::*;
///
/// let interactions = vec![
///     Interaction::new("u1", "p1", 5.0, 1_369_699_200),
///     Interaction::new("u2", "p1", 4.0, 1_369_699_201),
///     Interaction::new("u1", "p2", 3.0, 1_369_699_202),
/// ];
/// let catalog = vec![
///     CatalogEntry::new("p1", "Red Lipstick", "long lasting red lipstick", ""),
///     CatalogEntry::new("p2", "Engine Oil", "synthetic car engine oil", ""),
/// ];
///
/// let engine = Engine::build(&Corpus::new(interactions, catalog), &EngineConfig::default());
///
/// assert_eq!(engine.get_popular(1).unwrap(), vec!["p1"]);
/// assert_eq!(engine.get_by_text("lipstick"), vec!["p1"]);
/// assert!(engine.lookup("p1").is_some());
/// assert!(engine.lookup("unknown").is_none());
/// ```
pub struct Engine {
    catalog: Vec<CatalogEntry>,
    catalog_index: HashMap<String, usize>,
    popularity: PopularityRanker,
    collaborative: CollaborativeFilter,
    content: ContentClusterer,
}

impl Engine {
    /// Builds all three ranking components from a corpus snapshot.
    ///
    /// Never fails: empty or degraded source tables produce an engine
    /// whose queries return empty sequences. The build is a one-shot batch
    /// computation; run it off any request-serving path.
    #[must_use]
    pub fn build(corpus: &Corpus, config: &EngineConfig) -> Self {
        let popularity = PopularityRanker::build(corpus.interactions());
        let collaborative = CollaborativeFilter::build(corpus.interactions(), config);
        let content = ContentClusterer::build(corpus.catalog(), config);

        let catalog = corpus.catalog().to_vec();
        let catalog_index = catalog
            .iter()
            .enumerate()
            .map(|(i, entry)| (entry.item_id.clone(), i))
            .collect();

        info!(
            interactions = corpus.interactions().len(),
            catalog = catalog.len(),
            "recommendation engine built"
        );

        Self {
            catalog,
            catalog_index,
            popularity,
            collaborative,
            content,
        }
    }

    /// Up to `limit` item ids by descending global interaction count.
    ///
    /// # Errors
    ///
    /// Returns an error if `limit` is zero.
    pub fn get_popular(&self, limit: usize) -> Result<Vec<String>> {
        self.popularity.get_popular(limit)
    }

    /// Up to `limit` item ids most similar to `item_id` by co-rating
    /// structure; empty for ids outside the sampled item universe.
    ///
    /// # Errors
    ///
    /// Returns an error if `limit` is zero.
    pub fn get_similar(&self, item_id: &str, limit: usize) -> Result<Vec<String>> {
        self.collaborative.get_similar(item_id, limit)
    }

    /// Up to 10 item ids whose descriptions best match a free-text query
    /// (the cap is [`EngineConfig::text_results_cap`]).
    #[must_use]
    pub fn get_by_text(&self, query: &str) -> Vec<String> {
        self.content.get_by_text(query)
    }

    /// The full catalog table, for id → display resolution.
    #[must_use]
    pub fn catalog(&self) -> &[CatalogEntry] {
        &self.catalog
    }

    /// Looks up one catalog entry by item id.
    #[must_use]
    pub fn lookup(&self, item_id: &str) -> Option<&CatalogEntry> {
        self.catalog_index.get(item_id).map(|&i| &self.catalog[i])
    }

    /// The popularity ranker.
    #[must_use]
    pub fn popularity(&self) -> &PopularityRanker {
        &self.popularity
    }

    /// The collaborative filter.
    #[must_use]
    pub fn collaborative(&self) -> &CollaborativeFilter {
        &self.collaborative
    }

    /// The content clusterer.
    #[must_use]
    pub fn content(&self) -> &ContentClusterer {
        &self.content
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::corpus::Interaction;

    fn corpus() -> Corpus {
        let interactions = vec![
            Interaction::new("u1", "p1", 5.0, 0),
            Interaction::new("u2", "p1", 4.0, 1),
            Interaction::new("u1", "p2", 3.0, 2),
            Interaction::new("u2", "p2", 5.0, 3),
            Interaction::new("u3", "p3", 2.0, 4),
        ];
        let catalog = vec![
            CatalogEntry::new("p1", "Red Lipstick", "long lasting red lipstick", "http://img/1"),
            CatalogEntry::new("p2", "Engine Oil", "synthetic car engine oil", "http://img/2"),
        ];
        Corpus::new(interactions, catalog)
    }

    #[test]
    fn test_build_and_query_all_signals() {
        let engine = Engine::build(&corpus(), &EngineConfig::default());

        let popular = engine.get_popular(2).unwrap();
        assert_eq!(popular.len(), 2);

        let similar = engine.get_similar("p1", 5).unwrap();
        assert!(!similar.contains(&"p1".to_string()));

        let by_text = engine.get_by_text("lipstick");
        assert_eq!(by_text, vec!["p1"]);
    }

    #[test]
    fn test_lookup() {
        let engine = Engine::build(&corpus(), &EngineConfig::default());
        assert_eq!(engine.lookup("p2").unwrap().title, "Engine Oil");
        assert!(engine.lookup("missing").is_none());
        assert_eq!(engine.catalog().len(), 2);
    }

    #[test]
    fn test_empty_corpus_degrades() {
        let engine = Engine::build(&Corpus::default(), &EngineConfig::default());
        assert!(engine.get_popular(10).unwrap().is_empty());
        assert!(engine.get_similar("p1", 10).unwrap().is_empty());
        assert!(engine.get_by_text("anything").is_empty());
        assert!(engine.catalog().is_empty());
    }

    #[test]
    fn test_engine_is_shareable_across_threads() {
        let engine = std::sync::Arc::new(Engine::build(&corpus(), &EngineConfig::default()));

        let handles: Vec<_> = (0..4)
            .map(|_| {
                let engine = std::sync::Arc::clone(&engine);
                std::thread::spawn(move || {
                    let popular = engine.get_popular(2).unwrap();
                    let similar = engine.get_similar("p1", 2).unwrap();
                    (popular, similar)
                })
            })
            .collect();

        let first = handles
            .into_iter()
            .map(|h| h.join().unwrap())
            .collect::<Vec<_>>();
        assert!(first.windows(2).all(|w| w[0] == w[1]));
    }
}
