//! Inference facade and backend contract.
//!
//! [`LinearPipeline`] composes the tokenizer, vectorizer, classifier, and
//! cue extractor into a single call: text in, prediction with probabilities
//! and cues out. The [`SentimentBackend`] trait is the substitution seam: a
//! heavier backend (a transformer pipeline, say) can replace the linear
//! path wholesale as long as it produces the same result shape. Its cue
//! scores may follow a different heuristic; only the shape is contractual.
//!
//! A [`SentimentSession`] owns exactly one backend, chosen at construction.
//! Switching models or backends means building a new session, so there is
//! no shared mutable "current model" slot to race on.

use std::sync::Arc;

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::analysis::WordTokenizer;
use crate::attribution::{Cue, CueExtractor, DEFAULT_CUE_LIMIT};
use crate::classifier::LinearClassifier;
use crate::error::{Result, SentiraError};
use crate::model::SentimentModel;
use crate::vectorizer::TfIdfVectorizer;

/// The outcome of one inference call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InferenceResult {
    /// Name of the winning class.
    pub predicted_class: String,
    /// Probability of the winning class, in `[0, 1]`.
    pub confidence: f64,
    /// Per-class probabilities, aligned to the model's class order.
    pub probabilities: Vec<f64>,
    /// Ranked token cues for the winning class; may be empty.
    pub cues: Vec<Cue>,
}

/// The substitutable inference contract.
///
/// Implementations must be safe to call concurrently; the linear pipeline
/// achieves this by holding only immutable state. A backend backed by a
/// one-time warm-up may block inside `infer`, but the result shape is the
/// same either way.
pub trait SentimentBackend: Send + Sync {
    /// Classify `text`, returning prediction, probabilities, and cues.
    ///
    /// Fails with [`SentiraError::EmptyInput`] when the trimmed text is
    /// empty. Degenerate non-empty input (all punctuation, all
    /// out-of-vocabulary) must produce a result, not an error.
    fn infer(&self, text: &str) -> Result<InferenceResult>;

    /// Get the name of this backend for debugging and logging.
    fn name(&self) -> &str;
}

/// The deterministic TF-IDF + logistic-regression pipeline.
///
/// Holds an immutable model and stateless stages, so a single pipeline can
/// serve any number of concurrent calls without coordination.
#[derive(Debug, Clone)]
pub struct LinearPipeline {
    model: Arc<SentimentModel>,
    tokenizer: WordTokenizer,
    vectorizer: TfIdfVectorizer,
    classifier: LinearClassifier,
    cue_extractor: CueExtractor,
    cue_limit: usize,
}

impl LinearPipeline {
    /// Create a pipeline over a validated model with the default cue limit.
    pub fn new(model: Arc<SentimentModel>) -> Result<Self> {
        Self::with_cue_limit(model, DEFAULT_CUE_LIMIT)
    }

    /// Create a pipeline returning at most `cue_limit` cues per call.
    pub fn with_cue_limit(model: Arc<SentimentModel>, cue_limit: usize) -> Result<Self> {
        Ok(Self {
            tokenizer: WordTokenizer::new()?,
            vectorizer: TfIdfVectorizer::new(Arc::clone(&model)),
            classifier: LinearClassifier::new(Arc::clone(&model)),
            cue_extractor: CueExtractor::new(Arc::clone(&model)),
            model,
            cue_limit,
        })
    }

    /// The model this pipeline scores against.
    pub fn model(&self) -> &SentimentModel {
        &self.model
    }

    /// Classify a batch of texts in parallel.
    ///
    /// Results are returned in input order, one per text; each entry fails
    /// or succeeds independently.
    pub fn infer_batch(&self, texts: &[String]) -> Vec<Result<InferenceResult>> {
        texts.par_iter().map(|text| self.infer(text)).collect()
    }
}

impl SentimentBackend for LinearPipeline {
    fn infer(&self, text: &str) -> Result<InferenceResult> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Err(SentiraError::EmptyInput);
        }

        // Tokenize once; vectorization and attribution share the sequence.
        let tokens = self.tokenizer.tokenize(trimmed);
        let features = self.vectorizer.vectorize(&tokens);
        let (probabilities, winner) = self.classifier.classify(&features);
        let cues = self
            .cue_extractor
            .top_cues(&features, &tokens, winner, self.cue_limit);

        Ok(InferenceResult {
            predicted_class: self.model.classes[winner].clone(),
            confidence: probabilities[winner],
            probabilities,
            cues,
        })
    }

    fn name(&self) -> &str {
        "linear"
    }
}

/// An inference session bound to one backend.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
///
/// use sentira::inference::SentimentSession;
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
/// let session = SentimentSession::linear(Arc::new(model)).unwrap();
/// assert_eq!(session.backend_name(), "linear");
/// ```
pub struct SentimentSession {
    backend: Box<dyn SentimentBackend>,
}

impl SentimentSession {
    /// Create a session over the linear pipeline.
    pub fn linear(model: Arc<SentimentModel>) -> Result<Self> {
        Ok(Self {
            backend: Box::new(LinearPipeline::new(model)?),
        })
    }

    /// Create a session over an arbitrary backend.
    pub fn with_backend(backend: Box<dyn SentimentBackend>) -> Self {
        Self { backend }
    }

    /// Classify `text` with this session's backend.
    pub fn infer(&self, text: &str) -> Result<InferenceResult> {
        self.backend.infer(text)
    }

    /// Name of the active backend.
    pub fn backend_name(&self) -> &str {
        self.backend.name()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_model() -> Arc<SentimentModel> {
        Arc::new(
            SentimentModel::new(
                vec!["negative".to_string(), "positive".to_string()],
                vec!["bad".to_string(), "good".to_string()],
                vec![1.0, 1.0],
                vec![vec![1.0, -1.0], vec![-1.0, 1.0]],
                vec![0.0, 0.0],
            )
            .unwrap(),
        )
    }

    #[test]
    fn test_infer_positive() {
        let pipeline = LinearPipeline::new(test_model()).unwrap();
        let result = pipeline.infer("a really good film").unwrap();

        assert_eq!(result.predicted_class, "positive");
        assert_eq!(result.probabilities.len(), 2);
        assert_eq!(result.confidence, result.probabilities[1]);
        assert_eq!(result.cues.len(), 1);
        assert_eq!(result.cues[0].token, "good");
        assert!(result.cues[0].score > 0.0);
    }

    #[test]
    fn test_empty_input_rejected() {
        let pipeline = LinearPipeline::new(test_model()).unwrap();

        assert!(matches!(pipeline.infer(""), Err(SentiraError::EmptyInput)));
        assert!(matches!(
            pipeline.infer("   \t\n"),
            Err(SentiraError::EmptyInput)
        ));
    }

    #[test]
    fn test_degenerate_input_still_produces_result() {
        let pipeline = LinearPipeline::new(test_model()).unwrap();

        // Punctuation-only is non-empty after trimming, so it classifies.
        let result = pipeline.infer("?!?!").unwrap();
        assert!(result.cues.is_empty());
        let sum: f64 = result.probabilities.iter().sum();
        assert!((sum - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_cue_limit_respected() {
        let pipeline = LinearPipeline::with_cue_limit(test_model(), 1).unwrap();
        let result = pipeline.infer("good but bad").unwrap();

        assert_eq!(result.cues.len(), 1);
    }

    #[test]
    fn test_infer_batch_preserves_order() {
        let pipeline = LinearPipeline::new(test_model()).unwrap();
        let texts = vec![
            "so good".to_string(),
            "".to_string(),
            "very bad".to_string(),
        ];

        let results = pipeline.infer_batch(&texts);

        assert_eq!(results.len(), 3);
        assert_eq!(results[0].as_ref().unwrap().predicted_class, "positive");
        assert!(matches!(results[1], Err(SentiraError::EmptyInput)));
        assert_eq!(results[2].as_ref().unwrap().predicted_class, "negative");
    }

    #[test]
    fn test_session_delegates_to_backend() {
        let session = SentimentSession::linear(test_model()).unwrap();

        assert_eq!(session.backend_name(), "linear");
        let result = session.infer("good good").unwrap();
        assert_eq!(result.predicted_class, "positive");
    }

    #[test]
    fn test_custom_backend_substitution() {
        struct ConstantBackend;

        impl SentimentBackend for ConstantBackend {
            fn infer(&self, text: &str) -> Result<InferenceResult> {
                if text.trim().is_empty() {
                    return Err(SentiraError::EmptyInput);
                }
                Ok(InferenceResult {
                    predicted_class: "neutral".to_string(),
                    confidence: 1.0,
                    probabilities: vec![0.0, 1.0, 0.0],
                    cues: Vec::new(),
                })
            }

            fn name(&self) -> &str {
                "constant"
            }
        }

        let session = SentimentSession::with_backend(Box::new(ConstantBackend));
        assert_eq!(session.backend_name(), "constant");
        assert_eq!(
            session.infer("anything").unwrap().predicted_class,
            "neutral"
        );
    }
}
