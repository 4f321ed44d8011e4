//! Sugerir: a product recommendation engine.
//!
//! Sugerir ranks items for a user from three independent signals:
//!
//! - **Popularity**: global interaction counts over the full log.
//! - **Item-item similarity**: a bounded sample of the interaction log is
//!   pivoted into a utility matrix, reduced to a low-rank latent item
//!   representation by truncated SVD, and scored into a full item×item
//!   Pearson correlation matrix.
//! - **Free-text relevance**: catalog descriptions are TF-IDF vectorized
//!   (after stop-word removal) and partitioned with K-Means; queries are
//!   classified against the retained centroids.
//!
//! Everything is built once from an immutable [`corpus::Corpus`] snapshot
//! by [`recommend::Engine::build`] and is strictly read-only afterwards:
//! concurrent queries need no locking, and a data refresh is a wholesale
//! rebuild-and-swap. Queries return item ids only; joining ids back to
//! titles and images is the serving layer's job.
//!
//! # Quick Start
//!
//! ```
//! use sugerir::prelude::*;
//!
//! let interactions = vec![
//!     Interaction::new("u1", "p1", 5.0, 1_369_699_200),
//!     Interaction::new("u2", "p1", 4.0, 1_369_699_260),
//!     Interaction::new("u1", "p2", 3.0, 1_369_699_320),
//! ];
//! let catalog = vec![
//!     CatalogEntry::new("p1", "Red Lipstick", "long lasting red lipstick", ""),
//!     CatalogEntry::new("p2", "Engine Oil", "synthetic car engine oil", ""),
//! ];
//!
//! let corpus = Corpus::new(interactions, catalog);
//! let engine = Engine::build(&corpus, &EngineConfig::default());
//!
//! // Most interacted-with items first.
//! assert_eq!(engine.get_popular(2).unwrap(), vec!["p1", "p2"]);
//!
//! // Items co-rated with p1 (p1 itself is excluded).
//! let similar = engine.get_similar("p1", 5).unwrap();
//! assert!(!similar.contains(&"p1".to_string()));
//!
//! // Items whose description matches a free-text query.
//! assert_eq!(engine.get_by_text("red lipstick"), vec!["p1"]);
//! ```
//!
//! # Modules
//!
//! - [`corpus`]: Source tables (interaction log, item catalog) + CSV loading
//! - [`recommend`]: The three rankers and the [`recommend::Engine`] facade
//! - [`config`]: Build-time configuration with documented defaults
//! - [`primitives`]: Core Vector and Matrix types
//! - [`decomposition`]: Truncated SVD for latent rank reduction
//! - [`stats`]: Pearson correlation over latent item vectors
//! - [`text`]: Tokenization, stop words, TF-IDF vectorization
//! - [`cluster`]: K-Means clustering
//! - [`error`]: Crate error type and `Result` alias

#![warn(missing_docs)]
#![deny(unsafe_code)]

pub mod cluster;
pub mod config;
pub mod corpus;
pub mod decomposition;
pub mod error;
pub mod prelude;
pub mod primitives;
pub mod recommend;
pub mod stats;
pub mod text;
pub mod traits;

pub use error::{Result, SugerirError};
