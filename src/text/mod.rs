//! Text processing for the content-based ranker.
//!
//! Catalog descriptions and free-text queries pass through the same
//! pipeline: tokenization, stop-word removal, and TF-IDF weighting into the
//! term space fixed at build time.

pub mod stopwords;
pub mod tokenize;
pub mod vectorize;

pub use stopwords::StopWordsFilter;
pub use tokenize::WordTokenizer;
pub use vectorize::TfidfVectorizer;

use crate::error::Result;

/// Trait for text tokenization strategies.
pub trait Tokenizer: Send + Sync {
    /// Splits text into tokens.
    ///
    /// # Errors
    ///
    /// Returns an error if tokenization fails.
    fn tokenize(&self, text: &str) -> Result<Vec<String>>;
}
