//! Dataset assembly
//!
//! Turns parsed sentences into [`DataEntry`] values. Each entry carries exactly one category,
//! the name of the intent the sentence came from.

use crate::cerebro::entities::parse_sentence;
use crate::cerebro::error::SentenceError;
use crate::cerebro::model::{DataEntry, ParsedSentence};
use crate::cerebro::normalizing::NormalizedSentence;

/// A normalized sentence tagged with the intent it belongs to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntentSentence {
    pub intent: String,
    pub sentence: NormalizedSentence,
}

impl IntentSentence {
    pub fn new(intent: impl Into<String>, sentence: NormalizedSentence) -> Self {
        IntentSentence {
            intent: intent.into(),
            sentence,
        }
    }
}

/// Parse `sentence` and wrap the result as an entry of `intent`.
pub fn build_entry(intent: &str, sentence: &NormalizedSentence) -> Result<DataEntry, SentenceError> {
    parse_sentence(sentence).map(|parsed| into_entry(intent, parsed))
}

pub fn into_entry(intent: &str, parsed: ParsedSentence) -> DataEntry {
    DataEntry {
        text: parsed.plain_text,
        categories: vec![intent.to_string()],
        entities: parsed.entities,
    }
}
