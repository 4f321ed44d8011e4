//! TF-IDF vectorization of catalog descriptions.

use crate::error::{Result, SugerirError};
use crate::primitives::{Matrix, Vector};
use crate::text::stopwords::StopWordsFilter;
use crate::text::tokenize::WordTokenizer;
use crate::text::Tokenizer;
use std::collections::{HashMap, HashSet};

/// TF-IDF vectorizer converting text to a term-weighted matrix.
///
/// **TF-IDF formula:**
/// ```text
/// tfidf(t, d) = tf(t, d) × idf(t)
/// tf(t, d) = count of term t in document d
/// idf(t) = ln(N / df(t))
/// where N = total documents, df(t) = documents containing term t
/// ```
///
/// Rows are L2-normalized so that description length does not dominate
/// distances in the cluster space. The vocabulary is fixed at fit time:
/// transforming text with unseen terms drops those terms rather than
/// growing the term space.
///
/// # Examples
///
/// ```
/// use sugerir::text::vectorize::TfidfVectorizer;
///
/// let docs = vec!["red lipstick long lasting", "car engine oil"];
///
/// let mut vectorizer = TfidfVectorizer::new().with_stop_words_english();
/// let matrix = vectorizer.fit_transform(&docs).expect("fit_transform should succeed");
///
/// assert_eq!(matrix.n_rows(), 2);
/// assert_eq!(matrix.n_cols(), vectorizer.vocabulary_size());
/// ```
#[allow(missing_debug_implementations)]
pub struct TfidfVectorizer {
    tokenizer: Box<dyn Tokenizer>,
    stop_words: Option<StopWordsFilter>,
    lowercase: bool,
    /// term → column index
    vocabulary: HashMap<String, usize>,
    /// column index → term
    terms: Vec<String>,
    /// per-column inverse document frequency
    idf: Vec<f32>,
}

impl TfidfVectorizer {
    /// Create a new vectorizer with a [`WordTokenizer`] and lowercasing on.
    #[must_use]
    pub fn new() -> Self {
        Self {
            tokenizer: Box::new(WordTokenizer::new()),
            stop_words: None,
            lowercase: true,
            vocabulary: HashMap::new(),
            terms: Vec::new(),
            idf: Vec::new(),
        }
    }

    /// Use English stop words (removes common words like "the", "and", "is").
    #[must_use]
    pub fn with_stop_words_english(mut self) -> Self {
        self.stop_words = Some(StopWordsFilter::english());
        self
    }

    /// Set the tokenizer to use.
    #[must_use]
    pub fn with_tokenizer(mut self, tokenizer: Box<dyn Tokenizer>) -> Self {
        self.tokenizer = tokenizer;
        self
    }

    /// Set whether to convert tokens to lowercase.
    #[must_use]
    pub fn with_lowercase(mut self, lowercase: bool) -> Self {
        self.lowercase = lowercase;
        self
    }

    /// Learn the vocabulary and idf weights from documents.
    ///
    /// Vocabulary columns are assigned in lexicographic term order, so a
    /// given corpus always produces the same term space.
    ///
    /// # Errors
    ///
    /// Returns an error if `documents` is empty.
    pub fn fit<S: AsRef<str>>(&mut self, documents: &[S]) -> Result<()> {
        if documents.is_empty() {
            return Err("cannot fit on empty documents".into());
        }

        let n_docs = documents.len();
        let mut doc_freq: HashMap<String, usize> = HashMap::new();

        for doc in documents {
            let tokens = self.process_tokens(doc.as_ref())?;
            let doc_terms: HashSet<String> = tokens.into_iter().collect();
            for term in doc_terms {
                *doc_freq.entry(term).or_insert(0) += 1;
            }
        }

        let mut terms: Vec<String> = doc_freq.keys().cloned().collect();
        terms.sort();

        self.vocabulary = terms
            .iter()
            .enumerate()
            .map(|(idx, term)| (term.clone(), idx))
            .collect();
        self.idf = terms
            .iter()
            .map(|term| (n_docs as f32 / doc_freq[term] as f32).ln())
            .collect();
        self.terms = terms;

        Ok(())
    }

    /// Transform documents into the fitted term space.
    ///
    /// # Errors
    ///
    /// Returns an error if the vocabulary is empty (not fitted, or every
    /// fitted token was a stop word).
    pub fn transform<S: AsRef<str>>(&self, documents: &[S]) -> Result<Matrix<f32>> {
        if self.vocabulary.is_empty() {
            return Err("vocabulary is empty; call fit() first".into());
        }

        let vocab_size = self.vocabulary.len();
        let mut data = vec![0.0_f32; documents.len() * vocab_size];

        for (doc_idx, doc) in documents.iter().enumerate() {
            let row = &mut data[doc_idx * vocab_size..(doc_idx + 1) * vocab_size];
            self.fill_row(doc.as_ref(), row)?;
        }

        Matrix::from_vec(documents.len(), vocab_size, data).map_err(SugerirError::from)
    }

    /// Fit on documents, then transform them.
    ///
    /// # Errors
    ///
    /// Returns an error if fitting fails or the resulting vocabulary is
    /// empty.
    pub fn fit_transform<S: AsRef<str>>(&mut self, documents: &[S]) -> Result<Matrix<f32>> {
        self.fit(documents)?;
        self.transform(documents)
    }

    /// Transform a single text into a term-weighted vector.
    ///
    /// Terms outside the fitted vocabulary are dropped; a text with no
    /// known terms yields the zero vector.
    ///
    /// # Errors
    ///
    /// Returns an error if the vocabulary is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use sugerir::text::vectorize::TfidfVectorizer;
    ///
    /// let mut vectorizer = TfidfVectorizer::new();
    /// vectorizer.fit(&["red lipstick", "engine oil"]).expect("fit should succeed");
    ///
    /// let v = vectorizer.transform_one("glitter lipstick").expect("transform should succeed");
    /// assert_eq!(v.len(), vectorizer.vocabulary_size());
    /// assert!(v.norm() > 0.0);
    ///
    /// let unknown = vectorizer.transform_one("zzz").expect("transform should succeed");
    /// assert_eq!(unknown.norm(), 0.0);
    /// ```
    pub fn transform_one(&self, text: &str) -> Result<Vector<f32>> {
        if self.vocabulary.is_empty() {
            return Err("vocabulary is empty; call fit() first".into());
        }

        let mut row = vec![0.0_f32; self.vocabulary.len()];
        self.fill_row(text, &mut row)?;
        Ok(Vector::from_vec(row))
    }

    /// Tokenize, lowercase, and stop-filter one text.
    fn process_tokens(&self, text: &str) -> Result<Vec<String>> {
        let tokens = self.tokenizer.tokenize(text)?;
        let tokens: Vec<String> = if self.lowercase {
            tokens.into_iter().map(|t| t.to_lowercase()).collect()
        } else {
            tokens
        };
        Ok(match &self.stop_words {
            Some(filter) => filter.filter_owned(tokens),
            None => tokens,
        })
    }

    /// Write one text's L2-normalized TF-IDF weights into `row`.
    fn fill_row(&self, text: &str, row: &mut [f32]) -> Result<()> {
        for token in self.process_tokens(text)? {
            if let Some(&idx) = self.vocabulary.get(&token) {
                row[idx] += 1.0;
            }
        }
        for (idx, value) in row.iter_mut().enumerate() {
            *value *= self.idf[idx];
        }

        let norm: f32 = row.iter().map(|v| v * v).sum::<f32>().sqrt();
        if norm > 0.0 {
            for value in row.iter_mut() {
                *value /= norm;
            }
        }
        Ok(())
    }

    /// The learned vocabulary (term → column index).
    #[must_use]
    pub fn vocabulary(&self) -> &HashMap<String, usize> {
        &self.vocabulary
    }

    /// Number of terms in the learned vocabulary.
    #[must_use]
    pub fn vocabulary_size(&self) -> usize {
        self.vocabulary.len()
    }

    /// Vocabulary terms in column order.
    #[must_use]
    pub fn terms(&self) -> &[String] {
        &self.terms
    }
}

impl Default for TfidfVectorizer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "vectorize_tests.rs"]
mod tests;
