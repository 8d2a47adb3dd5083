//! Token-level attribution for the predicted class.
//!
//! For a linear model the per-feature contribution to the winning logit is
//! exactly `feature_value * weight`, so ranking tokens by that product is
//! an exact local explanation, not a heuristic. That exactness does not
//! transfer to non-linear backends; substitutes are only bound to the
//! output shape, not to these semantics.

use std::sync::Arc;

use ahash::AHashSet;
use serde::{Deserialize, Serialize};

use crate::model::SentimentModel;

/// Number of cues returned when the caller does not ask for a limit.
pub const DEFAULT_CUE_LIMIT: usize = 6;

/// A token and its signed contribution to the winning class's logit.
///
/// Positive scores pushed the decision toward the predicted class,
/// negative scores away from it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cue {
    /// The contributing token.
    pub token: String,
    /// Signed contribution, `features[j] * coef[winner][j]`.
    pub score: f64,
}

/// Extracts ranked token cues from a scored feature vector.
#[derive(Debug, Clone)]
pub struct CueExtractor {
    model: Arc<SentimentModel>,
}

impl CueExtractor {
    /// Create a cue extractor backed by the given model.
    pub fn new(model: Arc<SentimentModel>) -> Self {
        Self { model }
    }

    /// Rank tokens by their contribution to `class_index`'s score.
    ///
    /// Each distinct token is considered once regardless of repeat count.
    /// Tokens contributing exactly zero are dropped, which also removes all
    /// out-of-vocabulary tokens. The result is sorted descending by
    /// absolute score and truncated to `limit`; an empty result means "no
    /// strong signal", not failure.
    pub fn top_cues(
        &self,
        features: &[f64],
        tokens: &[String],
        class_index: usize,
        limit: usize,
    ) -> Vec<Cue> {
        let coef_row = &self.model.coef[class_index];

        // Distinct tokens in first-occurrence order, so equal-score ties
        // rank deterministically under the stable sort below.
        let mut seen: AHashSet<&str> = AHashSet::new();
        let mut cues = Vec::new();
        for token in tokens {
            if !seen.insert(token.as_str()) {
                continue;
            }
            let Some(index) = self.model.term_index(token) else {
                continue;
            };
            let score = features[index] * coef_row[index];
            if score != 0.0 {
                cues.push(Cue {
                    token: token.clone(),
                    score,
                });
            }
        }

        cues.sort_by(|a, b| b.score.abs().total_cmp(&a.score.abs()));
        cues.truncate(limit);
        cues
    }
}
