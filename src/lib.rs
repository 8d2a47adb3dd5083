//! # Sentira
//!
//! A deterministic text-sentiment inference library for Rust.
//!
//! Sentira evaluates a pre-trained TF-IDF + logistic-regression model over
//! raw text and returns a prediction, a per-class probability distribution,
//! and ranked token cues explaining the decision.
//!
//! ## Features
//!
//! - Pure Rust implementation
//! - Exact reproduction of a scikit-learn-style TF-IDF pipeline
//! - Numerically stable linear scoring with softmax normalization
//! - Token-level attribution for the predicted class
//! - Pluggable inference backends behind one trait
//!
//! ## Example
//!
//! ```
//! use std::sync::Arc;
//!
//! use sentira::inference::SentimentSession;
//! use sentira::model::SentimentModel;
//!
//! let model = SentimentModel::new(
//!     vec!["negative".to_string(), "positive".to_string()],
//!     vec!["bad".to_string(), "good".to_string()],
//!     vec![1.0, 1.0],
//!     vec![vec![1.0, -1.0], vec![-1.0, 1.0]],
//!     vec![0.0, 0.0],
//! )
//! .unwrap();
//!
//! let session = SentimentSession::linear(Arc::new(model)).unwrap();
//! let result = session.infer("such a good movie").unwrap();
//! assert_eq!(result.predicted_class, "positive");
//! ```

pub mod analysis;
pub mod attribution;
pub mod classifier;
pub mod cli;
pub mod error;
pub mod inference;
pub mod model;
pub mod vectorizer;

pub mod prelude {}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
