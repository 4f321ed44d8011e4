//! Content-based ranking via TF-IDF clustering of catalog descriptions.
//!
//! Descriptions are vectorized into a term-weighted space and partitioned
//! into a fixed number of clusters; a free-text query is classified against
//! the retained centroids and answered with the catalog items sharing its
//! predicted cluster, in catalog order.

use crate::cluster::KMeans;
use crate::config::EngineConfig;
use crate::corpus::CatalogEntry;
use crate::text::TfidfVectorizer;
use crate::traits::UnsupervisedEstimator;
use tracing::{debug, info};

/// Fitted text model: vectorizer, clustering, and per-item labels.
struct ContentModel {
    item_ids: Vec<String>,
    vectorizer: TfidfVectorizer,
    kmeans: KMeans,
    labels: Vec<usize>,
}

/// Free-text item search over description clusters.
///
/// Built once from the catalog; read-only afterwards. An empty catalog (or
/// one whose descriptions dissolve entirely into stop words) produces an
/// unbuilt clusterer whose queries all return empty sequences.
///
/// # Examples
///
/// ```
/// use sugerir::config::EngineConfig;
/// use sugerir::corpus::CatalogEntry;
/// use sugerir::recommend::ContentClusterer;
///
/// let catalog = vec![
///     CatalogEntry::new("p1", "Lipstick", "long lasting red lipstick", ""),
///     CatalogEntry::new("p2", "Oil", "synthetic car engine oil", ""),
/// ];
/// let clusterer = ContentClusterer::build(&catalog, &EngineConfig::default());
///
/// let hits = clusterer.get_by_text("red lipstick");
/// assert_eq!(hits, vec!["p1"]);
/// assert!(clusterer.get_by_text("").is_empty());
/// ```
pub struct ContentClusterer {
    model: Option<ContentModel>,
    results_cap: usize,
}

impl ContentClusterer {
    /// Vectorizes catalog descriptions and fits the cluster partition.
    ///
    /// The effective cluster count is `min(text_clusters, n_items)`, so
    /// tiny catalogs degrade to fewer clusters instead of failing.
    #[must_use]
    pub fn build(catalog: &[CatalogEntry], config: &EngineConfig) -> Self {
        if catalog.is_empty() {
            debug!("empty catalog; content clusterer left unbuilt");
            return Self {
                model: None,
                results_cap: config.text_results_cap,
            };
        }

        let descriptions: Vec<&str> = catalog.iter().map(|e| e.description.as_str()).collect();

        let mut vectorizer = TfidfVectorizer::new().with_stop_words_english();
        let tfidf = match vectorizer.fit_transform(&descriptions) {
            Ok(m) => m,
            Err(e) => {
                debug!(error = %e, "no usable vocabulary; content clusterer left unbuilt");
                return Self {
                    model: None,
                    results_cap: config.text_results_cap,
                };
            }
        };

        let k = config.text_clusters.min(catalog.len()).max(1);
        let mut kmeans = KMeans::new(k)
            .with_max_iter(config.kmeans_max_iter)
            .with_random_state(config.random_state);
        if let Err(e) = kmeans.fit(&tfidf) {
            debug!(error = %e, "cluster fit failed; content clusterer left unbuilt");
            return Self {
                model: None,
                results_cap: config.text_results_cap,
            };
        }

        let labels = kmeans.labels().to_vec();
        info!(
            items = catalog.len(),
            vocabulary = vectorizer.vocabulary_size(),
            clusters = k,
            "built content clusterer"
        );

        Self {
            model: Some(ContentModel {
                item_ids: catalog.iter().map(|e| e.item_id.clone()).collect(),
                vectorizer,
                kmeans,
                labels,
            }),
            results_cap: config.text_results_cap,
        }
    }

    /// Returns up to `text_results_cap` item ids whose description cluster
    /// best matches `query`, in catalog order.
    ///
    /// Empty sequences come from an unbuilt clusterer or an empty/
    /// whitespace-only query. A non-empty query with no known terms still
    /// classifies as the cluster nearest the zero vector, a known
    /// low-precision edge case kept from the source behavior.
    #[must_use]
    pub fn get_by_text(&self, query: &str) -> Vec<String> {
        let Some(model) = &self.model else {
            return Vec::new();
        };
        if query.trim().is_empty() {
            return Vec::new();
        }

        let vector = match model.vectorizer.transform_one(query) {
            Ok(v) => v,
            Err(_) => return Vec::new(),
        };
        let cluster = model.kmeans.predict_one(&vector);
        debug!(cluster, "text query classified");

        model
            .labels
            .iter()
            .enumerate()
            .filter(|(_, &label)| label == cluster)
            .take(self.results_cap)
            .map(|(i, _)| model.item_ids[i].clone())
            .collect()
    }

    /// The `n` highest-weighted vocabulary terms of a cluster centroid.
    ///
    /// Returns an empty sequence for an unbuilt clusterer or an
    /// out-of-range cluster index.
    #[must_use]
    pub fn top_terms(&self, cluster: usize, n: usize) -> Vec<String> {
        let Some(model) = &self.model else {
            return Vec::new();
        };
        let centroids = model.kmeans.centroids();
        if cluster >= centroids.n_rows() {
            return Vec::new();
        }

        let centroid = centroids.row(cluster);
        let mut weighted: Vec<(usize, f32)> = (0..centroid.len())
            .map(|t| (t, centroid[t]))
            .collect();
        weighted.sort_by(|a, b| {
            b.1.partial_cmp(&a.1)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then_with(|| a.0.cmp(&b.0))
        });

        weighted
            .into_iter()
            .take(n)
            .map(|(t, _)| model.vectorizer.terms()[t].clone())
            .collect()
    }

    /// Per-item cluster labels, in catalog order (empty when unbuilt).
    #[must_use]
    pub fn labels(&self) -> &[usize] {
        self.model.as_ref().map_or(&[], |m| &m.labels)
    }

    /// Returns true if the clusterer was built from a non-empty catalog.
    #[must_use]
    pub fn is_built(&self) -> bool {
        self.model.is_some()
    }
}

#[cfg(test)]
#[path = "content_tests.rs"]
mod tests;
