//! Property-based tests for normalization and entity parsing
//!
//! Sentences are generated as alternating runs of plain words and entity markers, so every
//! generated input is well-formed and its expected plain text is known up front.

use cerebro_parser::cerebro::{normalize_lines, parse_sentence, NormalizedSentence};
use proptest::prelude::*;

#[derive(Debug, Clone)]
enum Piece {
    Text(String),
    Entity { kind: String, value: String },
}

fn piece() -> impl Strategy<Value = Piece> {
    prop_oneof![
        "[a-zA-Zéü ,.!?0-9]{0,12}".prop_map(Piece::Text),
        ("[a-z_]{1,8}", "[a-zA-Zéü0-9][a-zA-Zéü 0-9]{0,10}")
            .prop_map(|(kind, value)| Piece::Entity { kind, value }),
    ]
}

fn render(pieces: &[Piece]) -> (String, String, Vec<(String, String)>) {
    let mut source = String::new();
    let mut plain = String::new();
    let mut entities = Vec::new();
    for piece in pieces {
        match piece {
            Piece::Text(text) => {
                source.push_str(text);
                plain.push_str(text);
            }
            Piece::Entity { kind, value } => {
                source.push_str(&format!(r#"<entity kind="{kind}">{value}</entity>"#));
                plain.push_str(value);
                entities.push((kind.clone(), value.clone()));
            }
        }
    }
    (source, plain, entities)
}

fn char_slice(text: &str, start: usize, end: usize) -> String {
    text.chars().skip(start).take(end - start).collect()
}

proptest! {
    #[test]
    fn stripped_text_has_no_entity_tags(pieces in prop::collection::vec(piece(), 0..8)) {
        let (source, plain, _) = render(&pieces);
        let parsed = parse_sentence(&NormalizedSentence::from_line(&source)).unwrap();

        prop_assert_eq!(&parsed.plain_text, &plain);
        prop_assert!(!parsed.plain_text.contains("<entity"));
        prop_assert!(!parsed.plain_text.contains("</entity>"));
    }

    #[test]
    fn spans_are_valid_and_ordered(pieces in prop::collection::vec(piece(), 0..8)) {
        let (source, plain, expected) = render(&pieces);
        let parsed = parse_sentence(&NormalizedSentence::from_line(&source)).unwrap();
        let length = plain.chars().count();

        prop_assert_eq!(parsed.entities.len(), expected.len());
        for (span, (kind, value)) in parsed.entities.iter().zip(&expected) {
            prop_assert_eq!(&span.kind, kind);
            prop_assert!(span.start < span.end && span.end <= length);
            prop_assert_eq!(char_slice(&plain, span.start, span.end), value.clone());
            // First-match search: no earlier occurrence of the value exists.
            let first = plain.find(value.as_str()).unwrap();
            prop_assert_eq!(plain[..first].chars().count(), span.start);
        }
    }

    #[test]
    fn normalized_sentences_have_no_newlines(
        lines in prop::collection::vec("[ \t]{0,2}[a-z]{0,5}(\r?\n)?", 0..10)
    ) {
        for sentence in normalize_lines(&lines) {
            prop_assert!(!sentence.as_str().contains('\n'));
            prop_assert!(!sentence.as_str().contains('\r'));
            prop_assert!(!sentence.as_str().is_empty());
        }
    }
}
