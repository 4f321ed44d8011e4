//! Convenience re-exports for common usage.
//!
//! # Usage
//!
//! ```
//! use sugerir::prelude::*;
//! ```

pub use crate::cluster::KMeans;
pub use crate::config::EngineConfig;
pub use crate::corpus::{CatalogEntry, Corpus, Interaction};
pub use crate::error::{Result, SugerirError};
pub use crate::primitives::{Matrix, Vector};
pub use crate::recommend::Engine;
pub use crate::text::TfidfVectorizer;
pub use crate::traits::UnsupervisedEstimator;
