//! Probability computation for the linear model rows of an artifact.

use crate::artifact::ModelArtifact;
use crate::vectorizer::Features;

/// Class probability distribution for one feature vector.
///
/// Multinomial models (one coefficient row per class) go through softmax; a
/// binary model shipped as a single row goes through the logistic sigmoid,
/// where the sigmoid score is the probability of `classes[1]`.
pub(crate) fn probabilities(artifact: &ModelArtifact, features: &Features) -> Vec<f64> {
    let scores: Vec<f64> = artifact
        .coefficients
        .iter()
        .zip(&artifact.intercepts)
        .map(|(row, &intercept)| {
            intercept
                + features
                    .iter()
                    .map(|&(col, weight)| row[col] * weight)
                    .sum::<f64>()
        })
        .collect();

    if artifact.coefficients.len() == 1 && artifact.classes.len() == 2 {
        let p_positive = sigmoid(scores[0]);
        vec![1.0 - p_positive, p_positive]
    } else {
        softmax(&scores)
    }
}

fn sigmoid(x: f64) -> f64 {
    1.0 / (1.0 + (-x).exp())
}

fn softmax(scores: &[f64]) -> Vec<f64> {
    // Shift by the max score so exp() cannot overflow.
    let max = scores.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let exps: Vec<f64> = scores.iter().map(|&s| (s - max).exp()).collect();
    let sum: f64 = exps.iter().sum();
    exps.into_iter().map(|e| e / sum).collect()
}
