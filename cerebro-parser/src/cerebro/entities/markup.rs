//! Well-formedness check and entity extraction.
//!
//! The sentence is wrapped in a synthetic `<sentence>` root and read with quick-xml. Only
//! `entity` elements are accepted below the root, they may not nest, and each must carry a
//! `kind` attribute and a non-empty text value.

use crate::cerebro::error::SentenceError;
use quick_xml::events::{BytesStart, BytesText, Event};
use quick_xml::reader::Reader;

const ROOT: &str = "sentence";
const ENTITY: &str = "entity";
const KIND: &str = "kind";

/// An entity element as found in the markup, before offsets are resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct MarkedEntity {
    pub kind: String,
    pub value: String,
}

enum Scope {
    Document,
    Root,
    Entity(MarkedEntity),
    Closed,
}

/// Read every entity element of `sentence`, in document order.
pub(crate) fn scan_entities(sentence: &str) -> Result<Vec<MarkedEntity>, SentenceError> {
    let wrapped = format!("<{ROOT}>{sentence}</{ROOT}>");
    let mut reader = Reader::from_str(&wrapped);
    let mut entities = Vec::new();
    let mut scope = Scope::Document;

    loop {
        let event = reader
            .read_event()
            .map_err(|e| SentenceError::malformed(sentence, e.to_string()))?;

        scope = match (scope, event) {
            (Scope::Document, Event::Start(start)) if start.name().as_ref() == ROOT.as_bytes() => {
                Scope::Root
            }
            (Scope::Root, Event::Start(start)) => Scope::Entity(open_entity(sentence, &start)?),
            (Scope::Root, Event::Text(text)) => {
                unescape(sentence, &text)?;
                Scope::Root
            }
            (Scope::Root, Event::End(_)) => Scope::Closed,
            (Scope::Entity(mut entity), Event::Text(text)) => {
                entity.value.push_str(&unescape(sentence, &text)?);
                Scope::Entity(entity)
            }
            (Scope::Entity(entity), Event::End(_)) => {
                if entity.value.is_empty() {
                    return Err(SentenceError::malformed(
                        sentence,
                        format!("entity of kind {:?} has no value", entity.kind),
                    ));
                }
                entities.push(entity);
                Scope::Root
            }
            (Scope::Entity(_), Event::Start(start)) => {
                return Err(SentenceError::malformed(
                    sentence,
                    format!("nested element <{}> inside entity", element_name(&start)),
                ));
            }
            (Scope::Closed, Event::Eof) => break,
            (_, Event::Empty(empty)) => {
                return Err(SentenceError::malformed(
                    sentence,
                    format!("self-closing element <{}/>", element_name(&empty)),
                ));
            }
            (_, Event::Eof) => {
                return Err(SentenceError::malformed(sentence, "unexpected end of input"));
            }
            (_, other) => {
                return Err(SentenceError::malformed(
                    sentence,
                    format!("unsupported markup {:?}", other),
                ));
            }
        };
    }

    Ok(entities)
}

fn open_entity(sentence: &str, start: &BytesStart<'_>) -> Result<MarkedEntity, SentenceError> {
    if start.name().as_ref() != ENTITY.as_bytes() {
        return Err(SentenceError::malformed(
            sentence,
            format!("unexpected element <{}>", element_name(start)),
        ));
    }

    let mut kind = None;
    for attribute in start.attributes() {
        let attribute = attribute.map_err(|e| SentenceError::malformed(sentence, e.to_string()))?;
        if attribute.key.as_ref() == KIND.as_bytes() {
            let value = attribute
                .unescape_value()
                .map_err(|e| SentenceError::malformed(sentence, e.to_string()))?;
            kind = Some(value.into_owned());
        }
    }

    let kind = kind.ok_or_else(|| SentenceError::malformed(sentence, "entity without kind attribute"))?;
    Ok(MarkedEntity {
        kind,
        value: String::new(),
    })
}

fn unescape(sentence: &str, text: &BytesText<'_>) -> Result<String, SentenceError> {
    text.unescape()
        .map(|text| text.into_owned())
        .map_err(|e| SentenceError::malformed(sentence, e.to_string()))
}

fn element_name(start: &BytesStart<'_>) -> String {
    String::from_utf8_lossy(start.name().as_ref()).into_owned()
}
