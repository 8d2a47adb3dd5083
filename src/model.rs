//! The sentiment model artifact.
//!
//! A [`SentimentModel`] is the immutable, externally trained description of
//! a TF-IDF + logistic-regression classifier: class names, vocabulary, idf
//! weights, one coefficient row per class, and per-class intercepts. It is
//! validated once at load time and never mutated afterwards, so it can be
//! shared across any number of concurrent inference calls.
//!
//! The on-disk form is the JSON document the training side exports:
//! `classes`, `vocabulary`, `idf`, `coef`, `intercept`, and
//! `meta.n_features`. Extra `meta` keys (analyzer settings and the like)
//! are tolerated and ignored.

use std::fs;
use std::path::Path;

use ahash::{AHashMap, AHashSet};
use serde::{Deserialize, Serialize};

use crate::error::{Result, SentiraError};

/// Model metadata carried alongside the weight tables.
///
/// Only `n_features` is load-bearing: it declares the feature-space width
/// and bounds the dot-product loop during scoring.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelMeta {
    /// Declared number of features (must equal the vocabulary length).
    pub n_features: usize,
}

/// A validated, immutable sentiment model.
///
/// # Examples
///
/// ```
/// use sentira::model::SentimentModel;
///
/// let model = SentimentModel::new(
///     vec!["negative".to_string(), "positive".to_string()],
///     vec!["bad".to_string(), "good".to_string()],
///     vec![1.0, 1.0],
///     vec![vec![1.0, -1.0], vec![-1.0, 1.0]],
///     vec![0.0, 0.0],
/// )
/// .unwrap();
///
/// assert_eq!(model.num_classes(), 2);
/// assert_eq!(model.term_index("good"), Some(1));
/// assert_eq!(model.term_index("meh"), None);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SentimentModel {
    /// Ordered class names; position defines the index-to-label mapping.
    pub classes: Vec<String>,
    /// Ordered vocabulary terms; position is the feature index.
    pub vocabulary: Vec<String>,
    /// Inverse document frequency per vocabulary term.
    pub idf: Vec<f64>,
    /// Coefficient matrix, one row per class.
    pub coef: Vec<Vec<f64>>,
    /// Per-class bias terms.
    pub intercept: Vec<f64>,
    /// Model metadata.
    pub meta: ModelMeta,
    /// Term -> feature index map, built once at load.
    #[serde(skip)]
    vocab_index: AHashMap<String, usize>,
}

impl SentimentModel {
    /// Build a model from its parts, validating the shape invariants.
    ///
    /// The declared feature count is taken from the vocabulary length.
    pub fn new(
        classes: Vec<String>,
        vocabulary: Vec<String>,
        idf: Vec<f64>,
        coef: Vec<Vec<f64>>,
        intercept: Vec<f64>,
    ) -> Result<Self> {
        let meta = ModelMeta {
            n_features: vocabulary.len(),
        };
        let mut model = SentimentModel {
            classes,
            vocabulary,
            idf,
            coef,
            intercept,
            meta,
            vocab_index: AHashMap::new(),
        };
        model.validate()?;
        model.build_index();
        Ok(model)
    }

    /// Load and validate a model from a JSON string.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let mut model: SentimentModel = serde_json::from_str(json)
            .map_err(|e| SentiraError::invalid_model(format!("malformed model document: {e}")))?;
        model.validate()?;
        model.build_index();
        Ok(model)
    }

    /// Load and validate a model from a JSON file.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let json = fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// Number of classes.
    pub fn num_classes(&self) -> usize {
        self.classes.len()
    }

    /// Size of the vocabulary.
    pub fn vocabulary_size(&self) -> usize {
        self.vocabulary.len()
    }

    /// Declared feature-space width; bounds the scoring loop.
    pub fn feature_count(&self) -> usize {
        self.meta.n_features
    }

    /// Feature index of a term, or `None` if out of vocabulary.
    pub fn term_index(&self, term: &str) -> Option<usize> {
        self.vocab_index.get(term).copied()
    }

    /// Check every shape invariant. Called once at load; inference assumes
    /// a validated model and never re-checks.
    fn validate(&self) -> Result<()> {
        let c = self.classes.len();
        let v = self.vocabulary.len();

        if c < 2 {
            return Err(SentiraError::invalid_model(format!(
                "expected at least 2 classes, got {c}"
            )));
        }
        if self.intercept.len() != c {
            return Err(SentiraError::invalid_model(format!(
                "intercept length {} != class count {c}",
                self.intercept.len()
            )));
        }
        if self.coef.len() != c {
            return Err(SentiraError::invalid_model(format!(
                "coef has {} rows but {c} classes",
                self.coef.len()
            )));
        }
        if self.idf.len() != v {
            return Err(SentiraError::invalid_model(format!(
                "idf length {} != vocabulary length {v}",
                self.idf.len()
            )));
        }
        if self.meta.n_features != v {
            return Err(SentiraError::invalid_model(format!(
                "meta.n_features {} != vocabulary length {v}",
                self.meta.n_features
            )));
        }
        for (row_index, row) in self.coef.iter().enumerate() {
            if row.len() != v {
                return Err(SentiraError::invalid_model(format!(
                    "coef row {row_index} has length {} but vocabulary length is {v}",
                    row.len()
                )));
            }
        }

        let mut seen = AHashSet::with_capacity(v);
        for term in &self.vocabulary {
            if !seen.insert(term.as_str()) {
                return Err(SentiraError::invalid_model(format!(
                    "duplicate vocabulary term: {term:?}"
                )));
            }
        }

        Ok(())
    }

    fn build_index(&mut self) {
        self.vocab_index = self
            .vocabulary
            .iter()
            .enumerate()
            .map(|(index, term)| (term.clone(), index))
            .collect();
    }
}
