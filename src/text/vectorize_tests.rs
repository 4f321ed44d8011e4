use super::*;

#[test]
fn test_fit_builds_sorted_vocabulary() {
    let mut v = TfidfVectorizer::new();
    v.fit(&["zebra apple", "apple mango"]).unwrap();
    assert_eq!(v.terms(), &["apple", "mango", "zebra"]);
    assert_eq!(v.vocabulary()["apple"], 0);
    assert_eq!(v.vocabulary()["zebra"], 2);
}

#[test]
fn test_fit_empty_documents_rejected() {
    let mut v = TfidfVectorizer::new();
    let docs: Vec<&str> = vec![];
    assert!(v.fit(&docs).is_err());
}

#[test]
fn test_transform_before_fit_rejected() {
    let v = TfidfVectorizer::new();
    assert!(v.transform(&["anything"]).is_err());
    assert!(v.transform_one("anything").is_err());
}

#[test]
fn test_fit_transform_shape() {
    let mut v = TfidfVectorizer::new();
    let m = v
        .fit_transform(&["red lipstick", "car engine oil", "red car"])
        .unwrap();
    assert_eq!(m.n_rows(), 3);
    assert_eq!(m.n_cols(), v.vocabulary_size());
}

#[test]
fn test_rows_are_l2_normalized() {
    let mut v = TfidfVectorizer::new();
    let m = v.fit_transform(&["red lipstick", "engine oil grease"]).unwrap();
    for i in 0..m.n_rows() {
        let norm = m.row(i).norm();
        assert!((norm - 1.0).abs() < 1e-5, "row {i} norm was {norm}");
    }
}

#[test]
fn test_shared_term_has_zero_idf() {
    // "red" appears in every document, so ln(N/df) = ln(1) = 0.
    let mut v = TfidfVectorizer::new();
    let m = v.fit_transform(&["red lipstick", "red car"]).unwrap();
    let red_idx = v.vocabulary()["red"];
    for i in 0..2 {
        assert_eq!(m.get(i, red_idx), 0.0);
    }
}

#[test]
fn test_rare_term_outweighs_common_term() {
    let mut v = TfidfVectorizer::new();
    let m = v
        .fit_transform(&["cream face cream", "cream hand", "oil hand"])
        .unwrap();
    // In doc 0, "cream" (df=2) appears twice but "face" (df=1) is rarer.
    let cream = v.vocabulary()["cream"];
    let face = v.vocabulary()["face"];
    assert!(m.get(0, face) > 0.0);
    assert!(m.get(0, cream) > 0.0);
    // tf=2 × ln(3/2) vs tf=1 × ln(3/1)
    assert!(m.get(0, face) > m.get(0, cream));
}

#[test]
fn test_stop_words_removed() {
    let mut v = TfidfVectorizer::new().with_stop_words_english();
    v.fit(&["the red lipstick is here", "the engine oil"]).unwrap();
    assert!(!v.vocabulary().contains_key("the"));
    assert!(!v.vocabulary().contains_key("is"));
    assert!(v.vocabulary().contains_key("lipstick"));
}

#[test]
fn test_lowercase_folds_case() {
    let mut v = TfidfVectorizer::new();
    v.fit(&["Red LIPSTICK", "red lipstick"]).unwrap();
    assert_eq!(v.vocabulary_size(), 2);
}

#[test]
fn test_lowercase_disabled() {
    let mut v = TfidfVectorizer::new().with_lowercase(false);
    v.fit(&["Red red"]).unwrap();
    assert_eq!(v.vocabulary_size(), 2);
}

#[test]
fn test_transform_one_unseen_terms_dropped() {
    let mut v = TfidfVectorizer::new();
    v.fit(&["red lipstick", "engine oil"]).unwrap();
    let q = v.transform_one("red spaceship").unwrap();
    assert_eq!(q.len(), v.vocabulary_size());
    // "spaceship" is outside the vocabulary; only "red" contributes.
    assert!(q[v.vocabulary()["red"]] > 0.0);
}

#[test]
fn test_transform_one_all_unknown_is_zero_vector() {
    let mut v = TfidfVectorizer::new();
    v.fit(&["red lipstick", "engine oil"]).unwrap();
    let q = v.transform_one("quantum flux capacitor").unwrap();
    assert_eq!(q.norm(), 0.0);
}

#[test]
fn test_transform_matches_fit_transform() {
    let docs = ["red lipstick gloss", "engine oil filter"];
    let mut v = TfidfVectorizer::new();
    let a = v.fit_transform(&docs).unwrap();
    let b = v.transform(&docs).unwrap();
    assert_eq!(a, b);
}
