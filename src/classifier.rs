//! Linear scoring and probability normalization.
//!
//! Scores a feature vector against the model's per-class coefficient rows
//! and intercepts, then normalizes the logits into a probability
//! distribution with a numerically stable softmax.

use std::sync::Arc;

use crate::model::SentimentModel;

/// Logistic-regression-style linear classifier.
///
/// Assumes a validated model; shape invariants are checked at load time,
/// not per call.
#[derive(Debug, Clone)]
pub struct LinearClassifier {
    model: Arc<SentimentModel>,
}

impl LinearClassifier {
    /// Create a classifier backed by the given model.
    pub fn new(model: Arc<SentimentModel>) -> Self {
        Self { model }
    }

    /// Compute per-class logits: `intercept[c] + coef[c] . features`.
    ///
    /// The inner product is bounded by the declared feature count rather
    /// than any array length.
    pub fn logits(&self, features: &[f64]) -> Vec<f64> {
        let n_features = self.model.feature_count();

        self.model
            .coef
            .iter()
            .zip(&self.model.intercept)
            .map(|(row, bias)| {
                let dot: f64 = row
                    .iter()
                    .zip(features)
                    .take(n_features)
                    .map(|(weight, value)| weight * value)
                    .sum();
                dot + bias
            })
            .collect()
    }

    /// Score a feature vector into `(probabilities, winning_index)`.
    ///
    /// Probabilities sum to 1 within floating-point tolerance. Ties on the
    /// maximum probability resolve to the lowest index.
    pub fn classify(&self, features: &[f64]) -> (Vec<f64>, usize) {
        let probabilities = softmax(&self.logits(features));
        let winner = argmax(&probabilities);
        (probabilities, winner)
    }
}

/// Numerically stable softmax: subtract the maximum before exponentiating
/// so large logits cannot overflow.
fn softmax(logits: &[f64]) -> Vec<f64> {
    let max = logits.iter().fold(f64::NEG_INFINITY, |a, &b| a.max(b));
    let exp: Vec<f64> = logits.iter().map(|&x| (x - max).exp()).collect();
    let sum: f64 = exp.iter().sum();
    exp.iter().map(|&x| x / sum).collect()
}

/// Stable argmax: the first index among exact ties wins.
fn argmax(values: &[f64]) -> usize {
    let mut winner = 0;
    for (index, &value) in values.iter().enumerate() {
        if value > values[winner] {
            winner = index;
        }
    }
    winner
}
