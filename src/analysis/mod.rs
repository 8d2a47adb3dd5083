//! Text analysis for sentiment inference.
//!
//! Analysis is deliberately thin: a single word tokenizer whose output must
//! match, token for token, the analyzer the model was trained with. Any
//! drift here silently degrades every downstream score, so the rules are
//! fixed rather than configurable.

pub mod tokenizer;

pub use tokenizer::WordTokenizer;
