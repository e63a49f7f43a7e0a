use std::collections::HashMap;
use std::path::Path;

use serde::Deserialize;
use thaisent_core::Sentiment;

use crate::error::ModelError;

/// How the vectorizer splits text into terms.
///
/// `char` n-grams are the usual choice for Thai, which has no word
/// boundaries; `word` splits on whitespace and suits pre-segmented corpora.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Analyzer {
    Word,
    Char { ngram_min: usize, ngram_max: usize },
}

impl std::fmt::Display for Analyzer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Analyzer::Word => write!(f, "word"),
            Analyzer::Char {
                ngram_min,
                ngram_max,
            } => write!(f, "char {ngram_min}..={ngram_max}"),
        }
    }
}

/// Deserialized classifier artifact: a TF-IDF vectorizer plus a linear model.
///
/// The JSON layout is an external contract with the training process. For a
/// multinomial model `coefficients` holds one row per entry in `classes`; a
/// binary model may instead ship a single row whose sigmoid score is the
/// probability of `classes[1]`.
#[derive(Debug, Clone, Deserialize)]
pub struct ModelArtifact {
    pub analyzer: Analyzer,
    /// Term → feature column index.
    pub vocabulary: HashMap<String, usize>,
    /// Inverse document frequency weight per feature column.
    pub idf: Vec<f64>,
    /// Ordered label strings; each must be a known sentiment label.
    pub classes: Vec<String>,
    pub coefficients: Vec<Vec<f64>>,
    pub intercepts: Vec<f64>,
}

impl ModelArtifact {
    /// Read and validate an artifact from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns `ModelError` if the file cannot be read, is not valid JSON for
    /// this layout, or fails dimensional/label validation.
    pub fn load(path: &Path) -> Result<Self, ModelError> {
        let content = std::fs::read_to_string(path).map_err(|e| ModelError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        let artifact: ModelArtifact = serde_json::from_str(&content)?;
        artifact.validate()?;
        Ok(artifact)
    }

    /// Check internal consistency of the artifact dimensions and labels.
    ///
    /// # Errors
    ///
    /// Returns `ModelError::Invalid` describing the first violation found.
    pub fn validate(&self) -> Result<(), ModelError> {
        if self.classes.is_empty() {
            return Err(ModelError::Invalid("classes must not be empty".to_string()));
        }
        for label in &self.classes {
            label
                .parse::<Sentiment>()
                .map_err(|e| ModelError::Invalid(e.to_string()))?;
        }

        if let Analyzer::Char {
            ngram_min,
            ngram_max,
        } = self.analyzer
        {
            if ngram_min == 0 || ngram_min > ngram_max {
                return Err(ModelError::Invalid(format!(
                    "char analyzer needs 1 <= ngram_min <= ngram_max, got {ngram_min}..={ngram_max}"
                )));
            }
        }

        let n_features = self.idf.len();
        if self.vocabulary.len() != n_features {
            return Err(ModelError::Invalid(format!(
                "vocabulary has {} terms but idf has {} weights",
                self.vocabulary.len(),
                n_features
            )));
        }
        for (term, &col) in &self.vocabulary {
            if col >= n_features {
                return Err(ModelError::Invalid(format!(
                    "term {term:?} maps to column {col}, out of range for {n_features} features"
                )));
            }
        }

        let expected_rows = if self.classes.len() == 2 && self.coefficients.len() == 1 {
            1
        } else {
            self.classes.len()
        };
        if self.coefficients.len() != expected_rows {
            return Err(ModelError::Invalid(format!(
                "expected {expected_rows} coefficient rows for {} classes, got {}",
                self.classes.len(),
                self.coefficients.len()
            )));
        }
        if self.intercepts.len() != self.coefficients.len() {
            return Err(ModelError::Invalid(format!(
                "{} coefficient rows but {} intercepts",
                self.coefficients.len(),
                self.intercepts.len()
            )));
        }
        for (row_idx, row) in self.coefficients.iter().enumerate() {
            if row.len() != n_features {
                return Err(ModelError::Invalid(format!(
                    "coefficient row {row_idx} has {} weights, expected {n_features}",
                    row.len()
                )));
            }
        }

        Ok(())
    }
}
