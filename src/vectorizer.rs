//! TF-IDF vectorization against a fixed vocabulary.
//!
//! Unlike a trainable vectorizer, this one never fits: the vocabulary and
//! idf weights come from the model artifact, and the job is to reproduce
//! the training-time transform exactly. Raw term counts are multiplied by
//! idf and the result is L2-normalized, matching a scikit-learn
//! `TfidfVectorizer` with `norm="l2"` and `sublinear_tf=False`.

use std::sync::Arc;

use ahash::AHashMap;

use crate::model::SentimentModel;

/// TF-IDF vectorizer over a fixed vocabulary.
#[derive(Debug, Clone)]
pub struct TfIdfVectorizer {
    model: Arc<SentimentModel>,
}

impl TfIdfVectorizer {
    /// Create a vectorizer backed by the given model.
    pub fn new(model: Arc<SentimentModel>) -> Self {
        Self { model }
    }

    /// Transform a token sequence into a dense feature vector.
    ///
    /// Out-of-vocabulary tokens are silently ignored. The returned vector
    /// has unit L2 norm whenever at least one token is in vocabulary;
    /// otherwise it is all-zero. The zero-norm divisor defaults to 1, so
    /// degenerate input never divides by zero.
    pub fn vectorize(&self, tokens: &[String]) -> Vec<f64> {
        let mut features = vec![0.0; self.model.vocabulary_size()];

        // Term frequency per distinct token. Tokens are already case-folded
        // and normalized, so exact string equality is the right match.
        let mut counts: AHashMap<&str, f64> = AHashMap::new();
        for token in tokens {
            *counts.entry(token.as_str()).or_insert(0.0) += 1.0;
        }

        for (token, count) in counts {
            if let Some(index) = self.model.term_index(token) {
                features[index] = count * self.model.idf[index];
            }
        }

        let norm = features.iter().map(|value| value * value).sum::<f64>().sqrt();
        let norm = if norm == 0.0 { 1.0 } else { norm };
        for value in &mut features {
            *value /= norm;
        }

        features
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_model() -> Arc<SentimentModel> {
        Arc::new(
            SentimentModel::new(
                vec!["negative".to_string(), "positive".to_string()],
                vec!["good".to_string(), "bad".to_string(), "fine".to_string()],
                vec![1.0, 2.0, 1.5],
                vec![vec![-1.0, 1.0, 0.0], vec![1.0, -1.0, 0.0]],
                vec![0.0, 0.0],
            )
            .unwrap(),
        )
    }

    fn to_tokens(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn test_unit_norm() {
        let vectorizer = TfIdfVectorizer::new(test_model());
        let features = vectorizer.vectorize(&to_tokens(&["good", "bad", "fine"]));

        let norm = features.iter().map(|v| v * v).sum::<f64>().sqrt();
        assert!((norm - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_single_term_normalizes_to_one() {
        let vectorizer = TfIdfVectorizer::new(test_model());
        // Repeats collapse under L2 normalization of a single nonzero slot.
        let features = vectorizer.vectorize(&to_tokens(&["good", "good"]));

        assert_eq!(features, vec![1.0, 0.0, 0.0]);
    }

    #[test]
    fn test_all_oov_yields_zero_vector() {
        let vectorizer = TfIdfVectorizer::new(test_model());
        let features = vectorizer.vectorize(&to_tokens(&["meh", "whatever"]));

        assert_eq!(features, vec![0.0, 0.0, 0.0]);
    }

    #[test]
    fn test_empty_tokens_yield_zero_vector() {
        let vectorizer = TfIdfVectorizer::new(test_model());
        let features = vectorizer.vectorize(&[]);

        assert_eq!(features, vec![0.0, 0.0, 0.0]);
    }

    #[test]
    fn test_idf_weighting() {
        let vectorizer = TfIdfVectorizer::new(test_model());
        let features = vectorizer.vectorize(&to_tokens(&["good", "bad"]));

        // Pre-normalization weights: good = 1*1.0, bad = 1*2.0.
        let norm = (1.0_f64 + 4.0).sqrt();
        assert!((features[0] - 1.0 / norm).abs() < 1e-12);
        assert!((features[1] - 2.0 / norm).abs() < 1e-12);
        assert_eq!(features[2], 0.0);
    }

    #[test]
    fn test_repeat_counts_weighted() {
        let vectorizer = TfIdfVectorizer::new(test_model());
        let features = vectorizer.vectorize(&to_tokens(&["good", "good", "bad"]));

        // good = 2*1.0, bad = 1*2.0; equal weight after idf.
        assert!((features[0] - features[1]).abs() < 1e-12);
    }

    #[test]
    fn test_oov_mixed_with_known() {
        let vectorizer = TfIdfVectorizer::new(test_model());
        let features = vectorizer.vectorize(&to_tokens(&["good", "zzz"]));

        assert_eq!(features, vec![1.0, 0.0, 0.0]);
    }
}
