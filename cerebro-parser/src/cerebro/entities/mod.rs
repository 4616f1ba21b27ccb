//! Entity-tag parsing
//!
//!     Training sentences mark entities inline:
//!
//!         I live in <entity kind="city">Paris</entity>
//!
//!     Parsing produces the plain text (`I live in Paris`) and one [`EntitySpan`] per marker,
//!     with character offsets into the plain text (`10..15`, kind `city`).
//!
//!     The three steps are:
//!
//!         1. Markup check: the sentence wrapped in a root element must read as XML whose only
//!            child elements are flat `entity` elements ([`markup`]).
//!         2. Tag stripping: entity tags are cut out of the raw sentence ([`stripping`]).
//!         3. Offsets: each entity value is searched for in the plain text.
//!
//!     The offset of a value is the FIRST place it occurs in the whole plain text. A value that
//!     repeats text found earlier in the sentence resolves to that earlier occurrence:
//!
//!         <entity kind="X">b</entity> a <entity kind="Y">b</entity>   →   both spans at 0..1
//!
//!     Datasets built so far depend on these offsets, so the search is kept as is.

pub(crate) mod markup;
pub mod stripping;

#[cfg(test)]
mod tests;

use crate::cerebro::error::SentenceError;
use crate::cerebro::model::{EntitySpan, ParsedSentence};
use crate::cerebro::normalizing::NormalizedSentence;
use markup::MarkedEntity;

pub use stripping::strip_entity_tags;

/// Parse one normalized sentence into its plain text and entity spans.
///
/// Fails as a whole: either every entity resolves or no result is produced.
pub fn parse_sentence(sentence: &NormalizedSentence) -> Result<ParsedSentence, SentenceError> {
    let source = sentence.as_str();
    let marked = markup::scan_entities(source)?;
    let plain_text = strip_entity_tags(source);

    let entities = marked
        .into_iter()
        .map(|entity| locate(source, &plain_text, entity))
        .collect::<Result<Vec<_>, _>>()?;

    tracing::trace!(sentence = source, entities = entities.len(), "parsed sentence");
    Ok(ParsedSentence {
        plain_text,
        entities,
    })
}

fn locate(source: &str, plain_text: &str, entity: MarkedEntity) -> Result<EntitySpan, SentenceError> {
    let Some(byte_start) = plain_text.find(&entity.value) else {
        return Err(SentenceError::EntityOffsetNotFound {
            sentence: source.to_string(),
            kind: entity.kind,
            value: entity.value,
        });
    };

    let start = plain_text[..byte_start].chars().count();
    let end = start + entity.value.chars().count();
    Ok(EntitySpan::new(start, end, entity.kind))
}
