//! Error types
//!
//! [`SentenceError`] covers the two ways a single annotated sentence can be rejected.
//! [`BuildError`] wraps it together with the I/O and YAML failures of building a whole dataset.

use std::path::PathBuf;
use thiserror::Error;

/// A sentence could not be turned into a [`ParsedSentence`](crate::cerebro::ParsedSentence).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SentenceError {
    /// The sentence, wrapped in a synthetic root element, is not acceptable markup.
    #[error("malformed entity markup in {sentence:?}: {reason}")]
    MalformedMarkup { sentence: String, reason: String },

    /// The text captured by an entity marker does not occur in the stripped text.
    #[error("entity {kind:?} value {value:?} not found in plain text of {sentence:?}")]
    EntityOffsetNotFound {
        sentence: String,
        kind: String,
        value: String,
    },
}

impl SentenceError {
    pub(crate) fn malformed(sentence: &str, reason: impl Into<String>) -> Self {
        SentenceError::MalformedMarkup {
            sentence: sentence.to_string(),
            reason: reason.into(),
        }
    }
}

/// Failure while reading intents or assembling the data model.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("failed to read {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid manifest {path}")]
    Manifest {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("invalid intent file {path}")]
    IntentFile {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    /// Only raised when the loader runs in strict mode.
    #[error("intent {name:?} is listed in the manifest but has no file")]
    MissingIntent { name: String },

    #[error("intent {intent:?} contains an invalid sentence")]
    Sentence {
        intent: String,
        #[source]
        source: SentenceError,
    },

    #[error("failed to serialize data model")]
    Serialize(#[from] serde_json::Error),
}
