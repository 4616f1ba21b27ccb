//! Data model
//!
//! Types shared by the parser and the dataset builder. [`DataModel`] serializes to the JSON
//! array the Cerebro backend loads: one object per training sentence,
//!
//! ```text
//! {"text": "I live in Paris", "categories": ["move"], "entities": [{"start": 10, "end": 15, "kind": "city"}]}
//! ```

use serde::{Deserialize, Serialize};
use std::io;

/// A typed entity occurrence: the half-open character range `[start, end)` of the plain text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntitySpan {
    pub start: usize,
    pub end: usize,
    pub kind: String,
}

impl EntitySpan {
    pub fn new(start: usize, end: usize, kind: impl Into<String>) -> Self {
        EntitySpan {
            start,
            end,
            kind: kind.into(),
        }
    }

    /// Length of the span in characters.
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// A sentence with its entity markers removed.
///
/// `entities` follow the order of the opening tags in the source sentence, whatever offsets they
/// resolved to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedSentence {
    pub plain_text: String,
    pub entities: Vec<EntitySpan>,
}

impl ParsedSentence {
    /// The characters of `plain_text` covered by `span`, or `None` when it is out of bounds.
    pub fn text_of(&self, span: &EntitySpan) -> Option<&str> {
        if span.start > span.end {
            return None;
        }
        let mut boundaries = self
            .plain_text
            .char_indices()
            .map(|(i, _)| i)
            .chain(std::iter::once(self.plain_text.len()));
        let start = boundaries.nth(span.start)?;
        let end = if span.end == span.start {
            start
        } else {
            boundaries.nth(span.end - span.start - 1)?
        };
        Some(&self.plain_text[start..end])
    }
}

/// One training example of the dataset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataEntry {
    pub text: String,
    /// Always exactly one intent name.
    pub categories: Vec<String>,
    pub entities: Vec<EntitySpan>,
}

/// The whole dataset, in build order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DataModel(Vec<DataEntry>);

impl DataModel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, entry: DataEntry) {
        self.0.push(entry);
    }

    pub fn entries(&self) -> &[DataEntry] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Serialize to JSON, compact unless `pretty` is set.
    pub fn to_json(&self, pretty: bool) -> Result<String, serde_json::Error> {
        if pretty {
            serde_json::to_string_pretty(self)
        } else {
            serde_json::to_string(self)
        }
    }

    /// Stream the JSON form into `writer`.
    pub fn write_to<W: io::Write>(&self, writer: W, pretty: bool) -> Result<(), serde_json::Error> {
        if pretty {
            serde_json::to_writer_pretty(writer, self)
        } else {
            serde_json::to_writer(writer, self)
        }
    }
}

impl FromIterator<DataEntry> for DataModel {
    fn from_iter<T: IntoIterator<Item = DataEntry>>(iter: T) -> Self {
        DataModel(iter.into_iter().collect())
    }
}

impl IntoIterator for DataModel {
    type Item = DataEntry;
    type IntoIter = std::vec::IntoIter<DataEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

/// Selection of the intents that go into a build.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Manifest {
    #[serde(default)]
    pub intents: Vec<String>,
}

impl Manifest {
    pub fn new(intents: Vec<String>) -> Self {
        Manifest { intents }
    }

    pub fn contains(&self, intent: &str) -> bool {
        self.intents.iter().any(|name| name == intent)
    }
}

/// The raw content of one intent file: its name (the file stem) and its sentence blocks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HumanIntent {
    pub name: String,
    pub sentences: Vec<String>,
}

impl HumanIntent {
    pub fn new(name: impl Into<String>, sentences: Vec<String>) -> Self {
        HumanIntent {
            name: name.into(),
            sentences,
        }
    }
}
