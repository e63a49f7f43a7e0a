//! TF-IDF feature extraction matching the training-side vectorizer.

use std::collections::HashMap;

use crate::artifact::{Analyzer, ModelArtifact};

/// Sparse feature vector: (column, weight) pairs, L2-normalized.
pub(crate) type Features = Vec<(usize, f64)>;

/// Map text to TF-IDF features using the artifact's vocabulary.
///
/// Terms outside the vocabulary are dropped. Counts are scaled by the
/// per-column idf weight and the resulting vector is L2-normalized; an
/// all-unknown text yields an empty vector.
pub(crate) fn vectorize(artifact: &ModelArtifact, text: &str) -> Features {
    let mut counts: HashMap<usize, f64> = HashMap::new();
    for term in terms(&artifact.analyzer, text) {
        if let Some(&col) = artifact.vocabulary.get(term.as_str()) {
            *counts.entry(col).or_insert(0.0) += 1.0;
        }
    }

    let mut features: Features = counts
        .into_iter()
        .map(|(col, count)| (col, count * artifact.idf[col]))
        .collect();

    let norm = features
        .iter()
        .map(|&(_, w)| w * w)
        .sum::<f64>()
        .sqrt();
    if norm > 0.0 {
        for (_, w) in &mut features {
            *w /= norm;
        }
    }
    features
}

fn terms(analyzer: &Analyzer, text: &str) -> Vec<String> {
    match analyzer {
        Analyzer::Word => text
            .split_whitespace()
            .map(str::to_lowercase)
            .collect(),
        Analyzer::Char {
            ngram_min,
            ngram_max,
        } => {
            let chars: Vec<char> = text.to_lowercase().chars().collect();
            let mut out = Vec::new();
            for n in *ngram_min..=*ngram_max {
                if n > chars.len() {
                    break;
                }
                for window in chars.windows(n) {
                    out.push(window.iter().collect::<String>());
                }
            }
            out
        }
    }
}
