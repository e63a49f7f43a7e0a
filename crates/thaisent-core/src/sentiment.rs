use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The three labels the classifier artifact can produce.
///
/// Serialized with capitalized variant names (`"Positive"` etc.) to match the
/// label strings stored in the artifact and returned on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Sentiment {
    Positive,
    Negative,
    Neutral,
}

impl std::fmt::Display for Sentiment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Sentiment::Positive => write!(f, "Positive"),
            Sentiment::Negative => write!(f, "Negative"),
            Sentiment::Neutral => write!(f, "Neutral"),
        }
    }
}

#[derive(Debug, Error)]
pub enum ParseSentimentError {
    #[error("unknown sentiment label: {0}")]
    Unknown(String),
}

impl std::str::FromStr for Sentiment {
    type Err = ParseSentimentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Positive" => Ok(Sentiment::Positive),
            "Negative" => Ok(Sentiment::Negative),
            "Neutral" => Ok(Sentiment::Neutral),
            other => Err(ParseSentimentError::Unknown(other.to_string())),
        }
    }
}

/// One classification result. Exists only for the duration of a single
/// request/response cycle; never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    pub sentiment: Sentiment,
    /// Maximum class probability, in `[0.0, 1.0]`, rounded to 4 decimals.
    pub confidence: f64,
}
