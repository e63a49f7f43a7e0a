//! Model wrapper for the Thai sentiment classifier.
//!
//! Loads a serialized TF-IDF + linear-model artifact produced by an external
//! training run, validates it once at startup, and exposes a single
//! `classify(text) -> Prediction` operation. The artifact is immutable after
//! load and safe to share across request handlers.

pub mod artifact;
pub mod error;
pub mod wrapper;

mod linear;
mod vectorizer;

pub use artifact::{Analyzer, ModelArtifact};
pub use error::ModelError;
pub use wrapper::{SentimentModel, MAX_TEXT_CHARS};
