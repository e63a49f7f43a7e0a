use std::path::Path;

use thaisent_core::{Prediction, Sentiment};

use crate::artifact::{Analyzer, ModelArtifact};
use crate::error::ModelError;
use crate::linear;
use crate::vectorizer;

/// Input longer than this is silently truncated before classification.
pub const MAX_TEXT_CHARS: usize = 500;

/// The loaded classifier. Immutable after construction; share behind an
/// `Arc` across request handlers.
#[derive(Debug, Clone)]
pub struct SentimentModel {
    artifact: ModelArtifact,
    labels: Vec<Sentiment>,
}

impl SentimentModel {
    /// Load and validate the classifier artifact from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns `ModelError` if the file cannot be read, parsed, or validated.
    /// A load failure is fatal at startup: the process must not serve without
    /// a model.
    pub fn load(path: &Path) -> Result<Self, ModelError> {
        let artifact = ModelArtifact::load(path)?;
        let model = Self::from_artifact(artifact)?;
        tracing::info!(
            path = %path.display(),
            classes = model.labels.len(),
            vocabulary = model.artifact.vocabulary.len(),
            "loaded sentiment model"
        );
        Ok(model)
    }

    /// Build a model from an already-deserialized artifact.
    ///
    /// # Errors
    ///
    /// Returns `ModelError::Invalid` if the artifact fails validation.
    pub fn from_artifact(artifact: ModelArtifact) -> Result<Self, ModelError> {
        artifact.validate()?;
        // Validation guarantees every label parses.
        let labels = artifact
            .classes
            .iter()
            .map(|label| label.parse::<Sentiment>())
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| ModelError::Invalid(e.to_string()))?;
        Ok(Self { artifact, labels })
    }

    /// Labels this model can produce, in artifact order.
    #[must_use]
    pub fn labels(&self) -> &[Sentiment] {
        &self.labels
    }

    /// Analyzer the artifact was trained with.
    #[must_use]
    pub fn analyzer(&self) -> &Analyzer {
        &self.artifact.analyzer
    }

    /// Number of terms in the artifact vocabulary.
    #[must_use]
    pub fn vocabulary_size(&self) -> usize {
        self.artifact.vocabulary.len()
    }

    /// Classify one text.
    ///
    /// Trims surrounding whitespace and truncates to [`MAX_TEXT_CHARS`]
    /// characters. Empty input short-circuits to Neutral with zero
    /// confidence without touching the classifier. Otherwise returns the
    /// predicted label with the maximum class probability, rounded to 4
    /// decimal places. Infallible for any well-formed string.
    #[must_use]
    pub fn classify(&self, text: &str) -> Prediction {
        let text = truncate_chars(text.trim(), MAX_TEXT_CHARS);
        if text.is_empty() {
            return Prediction {
                sentiment: Sentiment::Neutral,
                confidence: 0.0,
            };
        }

        let features = vectorizer::vectorize(&self.artifact, text);
        let proba = linear::probabilities(&self.artifact, &features);
        let (best, confidence) = proba
            .iter()
            .copied()
            .enumerate()
            .fold((0, f64::NEG_INFINITY), |acc, (idx, p)| {
                if p > acc.1 {
                    (idx, p)
                } else {
                    acc
                }
            });

        Prediction {
            sentiment: self.labels[best],
            confidence: round4(confidence),
        }
    }
}

fn truncate_chars(text: &str, max: usize) -> &str {
    match text.char_indices().nth(max) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

fn round4(x: f64) -> f64 {
    (x * 10_000.0).round() / 10_000.0
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;
    use crate::artifact::Analyzer;

    fn word_model() -> SentimentModel {
        SentimentModel::from_artifact(ModelArtifact {
            analyzer: Analyzer::Word,
            vocabulary: HashMap::from([("good".to_string(), 0), ("bad".to_string(), 1)]),
            idf: vec![1.0, 1.0],
            classes: vec![
                "Positive".to_string(),
                "Negative".to_string(),
                "Neutral".to_string(),
            ],
            coefficients: vec![vec![3.0, -3.0], vec![-3.0, 3.0], vec![-0.5, -0.5]],
            intercepts: vec![0.0, 0.0, 0.2],
        })
        .expect("word model")
    }

    fn thai_char_model() -> SentimentModel {
        SentimentModel::from_artifact(ModelArtifact {
            analyzer: Analyzer::Char {
                ngram_min: 2,
                ngram_max: 3,
            },
            vocabulary: HashMap::from([
                ("ดี".to_string(), 0),
                ("มาก".to_string(), 1),
                ("แย่".to_string(), 2),
                ("ไม่".to_string(), 3),
            ]),
            idf: vec![1.2, 1.1, 1.3, 1.0],
            classes: vec![
                "Positive".to_string(),
                "Negative".to_string(),
                "Neutral".to_string(),
            ],
            coefficients: vec![
                vec![2.5, 1.5, -2.0, -1.0],
                vec![-2.0, -0.5, 2.5, 1.5],
                vec![-0.5, -0.5, -0.5, -0.5],
            ],
            intercepts: vec![0.0, 0.0, 0.3],
        })
        .expect("thai model")
    }

    #[test]
    fn empty_text_is_neutral_with_zero_confidence() {
        let prediction = word_model().classify("");
        assert_eq!(prediction.sentiment, Sentiment::Neutral);
        assert_eq!(prediction.confidence, 0.0);
    }

    #[test]
    fn whitespace_only_text_is_neutral_with_zero_confidence() {
        let prediction = word_model().classify("  \t\n  ");
        assert_eq!(prediction.sentiment, Sentiment::Neutral);
        assert_eq!(prediction.confidence, 0.0);
    }

    #[test]
    fn positive_text_classifies_positive() {
        let prediction = word_model().classify("good good good");
        assert_eq!(prediction.sentiment, Sentiment::Positive);
        assert!(prediction.confidence > 0.5);
    }

    #[test]
    fn negative_text_classifies_negative() {
        let prediction = word_model().classify("bad bad");
        assert_eq!(prediction.sentiment, Sentiment::Negative);
    }

    #[test]
    fn thai_text_classifies_positive() {
        let prediction = thai_char_model().classify("ดีมากเลย");
        assert_eq!(prediction.sentiment, Sentiment::Positive);
        assert!(prediction.confidence > 0.0 && prediction.confidence <= 1.0);
    }

    #[test]
    fn thai_negative_text_classifies_negative() {
        let prediction = thai_char_model().classify("แย่มาก ไม่ชอบ");
        assert_eq!(prediction.sentiment, Sentiment::Negative);
    }

    #[test]
    fn confidence_is_in_unit_interval_and_rounded() {
        let model = word_model();
        for text in ["good", "bad", "good bad", "nothing known here", "ดี"] {
            let prediction = model.classify(text);
            assert!(
                (0.0..=1.0).contains(&prediction.confidence),
                "confidence {} out of range for {text:?}",
                prediction.confidence
            );
            let scaled = prediction.confidence * 10_000.0;
            assert!(
                (scaled - scaled.round()).abs() < 1e-9,
                "confidence {} not rounded to 4 decimals",
                prediction.confidence
            );
        }
    }

    #[test]
    fn long_input_truncates_to_first_500_chars() {
        let model = word_model();
        // 500 chars of noise, then a strong negative tail that must be ignored.
        let head: String = "x".repeat(499) + " ";
        let long = format!("{head}bad bad bad bad");
        assert_eq!(model.classify(&long), model.classify(&head));
    }

    #[test]
    fn truncation_matches_explicit_prefix() {
        let model = word_model();
        let text = "good ".repeat(200);
        let prefix: String = text.chars().take(MAX_TEXT_CHARS).collect();
        assert_eq!(model.classify(&text), model.classify(&prefix));
    }

    #[test]
    fn classify_never_panics_on_odd_input() {
        let model = thai_char_model();
        for text in ["", " ", "🎉🎉🎉", "a", "ดี", "mixed ไทย text 123 !@#", "\u{0}"] {
            let prediction = model.classify(text);
            assert!((0.0..=1.0).contains(&prediction.confidence));
        }
    }

    #[test]
    fn unknown_text_still_returns_a_known_label() {
        let model = word_model();
        let prediction = model.classify("completely unseen words");
        assert!(model.labels().contains(&prediction.sentiment));
    }

    #[test]
    fn model_exposes_analyzer_and_vocabulary_size() {
        let model = thai_char_model();
        assert_eq!(model.vocabulary_size(), 4);
        assert!(matches!(
            model.analyzer(),
            Analyzer::Char {
                ngram_min: 2,
                ngram_max: 3
            }
        ));
    }

    #[test]
    fn truncate_chars_respects_multibyte_boundaries() {
        let text = "ดี".repeat(300);
        let cut = truncate_chars(&text, MAX_TEXT_CHARS);
        assert_eq!(cut.chars().count(), MAX_TEXT_CHARS);
    }

    #[test]
    fn round4_rounds_half_up() {
        assert_eq!(round4(0.123_45), 0.1235);
        assert_eq!(round4(0.999_999), 1.0);
        assert_eq!(round4(0.0), 0.0);
    }
}
