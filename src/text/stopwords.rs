//! Stop words filtering for text preprocessing.
//!
//! Stop words are common words (like "the", "is", "at") that carry little
//! semantic meaning; removing them before TF-IDF weighting keeps the
//! vocabulary focused on the terms that actually distinguish one product
//! description from another.

use std::collections::HashSet;

/// Stop words filter backed by a `HashSet` for O(1) lookup.
///
/// Matching is case-insensitive; stored words are lowercased once at
/// construction.
///
/// # Examples
///
/// ```
/// use sugerir::text::stopwords::StopWordsFilter;
///
/// let filter = StopWordsFilter::english();
/// let tokens = vec!["the".to_string(), "cat".to_string(), "is".to_string(), "happy".to_string()];
/// let filtered = filter.filter_owned(tokens);
/// assert_eq!(filtered, vec!["cat", "happy"]);
///
/// let custom = StopWordsFilter::new(vec!["foo", "bar"]);
/// assert!(custom.is_stop_word("FOO"));
/// assert!(!custom.is_stop_word("baz"));
/// ```
#[derive(Debug, Clone)]
pub struct StopWordsFilter {
    stop_words: HashSet<String>,
}

impl StopWordsFilter {
    /// Create a filter with custom stop words (lowercased on insertion).
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let stop_words = words
            .into_iter()
            .map(|s| s.as_ref().to_lowercase())
            .collect();

        Self { stop_words }
    }

    /// Create a filter with the fixed English stop word list.
    ///
    /// # Examples
    ///
    /// ```
    /// use sugerir::text::stopwords::StopWordsFilter;
    ///
    /// let filter = StopWordsFilter::english();
    /// assert!(filter.is_stop_word("the"));
    /// assert!(!filter.is_stop_word("lipstick"));
    /// ```
    #[must_use]
    pub fn english() -> Self {
        Self::new(ENGLISH_STOP_WORDS)
    }

    /// Check if a word is a stop word (case-insensitive).
    #[must_use]
    pub fn is_stop_word(&self, word: &str) -> bool {
        self.stop_words.contains(&word.to_lowercase())
    }

    /// Retain the non-stop-word tokens from an owned token list.
    #[must_use]
    pub fn filter_owned(&self, tokens: Vec<String>) -> Vec<String> {
        tokens
            .into_iter()
            .filter(|t| !self.is_stop_word(t))
            .collect()
    }

    /// Number of stop words in this filter.
    #[must_use]
    pub fn len(&self) -> usize {
        self.stop_words.len()
    }

    /// Returns true if the filter has no stop words.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.stop_words.is_empty()
    }
}

/// Fixed English stop word list (common words from the NLTK/sklearn lists).
pub const ENGLISH_STOP_WORDS: &[&str] = &[
    "a", "an", "the", "i", "me", "my", "myself", "we", "our", "ours", "ourselves", "you", "your",
    "yours", "yourself", "yourselves", "he", "him", "his", "himself", "she", "her", "hers",
    "herself", "it", "its", "itself", "they", "them", "their", "theirs", "themselves", "what",
    "which", "who", "whom", "whose", "why", "when", "where", "how", "about", "above", "across",
    "after", "against", "along", "among", "around", "at", "before", "behind", "below", "beneath",
    "beside", "between", "beyond", "by", "down", "during", "for", "from", "in", "inside", "into",
    "near", "of", "off", "on", "onto", "out", "outside", "over", "through", "throughout", "to",
    "toward", "under", "underneath", "until", "up", "upon", "with", "within", "without", "and",
    "as", "because", "but", "if", "or", "since", "so", "than", "that", "though", "unless",
    "while", "am", "is", "are", "was", "were", "be", "been", "being", "have", "has", "had",
    "having", "do", "does", "did", "doing", "would", "should", "could", "ought", "can", "may",
    "might", "must", "will", "shall", "all", "any", "both", "each", "every", "few", "more",
    "most", "much", "neither", "no", "none", "not", "one", "other", "same", "several", "some",
    "such", "very", "too", "only", "own", "then", "there", "these", "this", "those", "just",
    "now", "here", "again", "also", "another", "back", "even", "ever", "get", "give", "go",
    "got", "made", "make", "say", "see", "take", "way",
];

#[cfg(test)]
#[path = "stopwords_tests.rs"]
mod tests;
