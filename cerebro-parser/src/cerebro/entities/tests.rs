use super::*;
use rstest::rstest;

fn parse(sentence: &str) -> Result<ParsedSentence, SentenceError> {
    parse_sentence(&NormalizedSentence::from_line(sentence))
}

#[test]
fn test_sentence_without_entities() {
    let parsed = parse("hello world").unwrap();
    assert_eq!(parsed.plain_text, "hello world");
    assert!(parsed.entities.is_empty());
}

#[test]
fn test_multi_entity_sentence() {
    let parsed = parse(
        r#"I live in <entity kind="city">Paris</entity> near <entity kind="landmark">the tower</entity>"#,
    )
    .unwrap();

    assert_eq!(parsed.plain_text, "I live in Paris near the tower");
    assert_eq!(
        parsed.entities,
        vec![
            EntitySpan::new(10, 15, "city"),
            EntitySpan::new(21, 30, "landmark"),
        ]
    );
    assert_eq!(parsed.text_of(&parsed.entities[1]), Some("the tower"));
}

#[test]
fn test_repeated_value_resolves_to_first_occurrence() {
    let parsed = parse(r#"<entity kind="X">b</entity> a <entity kind="Y">b</entity>"#).unwrap();

    assert_eq!(parsed.plain_text, "b a b");
    assert_eq!(
        parsed.entities,
        vec![EntitySpan::new(0, 1, "X"), EntitySpan::new(0, 1, "Y")]
    );
}

#[test]
fn test_value_matching_earlier_word_resolves_to_earlier_word() {
    let parsed = parse(r#"paris is not <entity kind="city">paris</entity>"#).unwrap();
    assert_eq!(parsed.entities, vec![EntitySpan::new(0, 5, "city")]);
}

#[test]
fn test_order_follows_opening_tags_not_offsets() {
    let parsed =
        parse(r#"go <entity kind="first">home</entity> from <entity kind="second">go</entity>"#)
            .unwrap();

    let kinds: Vec<&str> = parsed.entities.iter().map(|e| e.kind.as_str()).collect();
    assert_eq!(kinds, vec!["first", "second"]);
    assert_eq!(parsed.entities[1].start, 0);
}

#[test]
fn test_offsets_count_characters() {
    let parsed = parse(r#"réserve à <entity kind="city">Zürich</entity>"#).unwrap();
    assert_eq!(parsed.plain_text, "réserve à Zürich");
    assert_eq!(parsed.entities, vec![EntitySpan::new(10, 16, "city")]);
}

#[rstest]
#[case::unterminated(r#"<entity kind="X">unterminated"#)]
#[case::stray_closing_tag("hello</entity>")]
#[case::mismatched_tags(r#"<entity kind="X">a</other>"#)]
#[case::unescaped_ampersand("fish & chips")]
#[case::unescaped_less_than("1 < 2")]
#[case::unquoted_attribute("<entity kind=X>a</entity>")]
#[case::missing_kind("<entity>a</entity>")]
#[case::foreign_element("<b>bold</b>")]
fn test_malformed_markup(#[case] sentence: &str) {
    let err = parse(sentence).unwrap_err();
    assert!(
        matches!(err, SentenceError::MalformedMarkup { .. }),
        "expected malformed markup for {sentence:?}, got {err:?}"
    );
}

#[test]
fn test_escaped_value_is_not_found_in_plain_text() {
    let err = parse(r#"<entity kind="company">AT&amp;T</entity>"#).unwrap_err();
    assert_eq!(
        err,
        SentenceError::EntityOffsetNotFound {
            sentence: r#"<entity kind="company">AT&amp;T</entity>"#.to_string(),
            kind: "company".to_string(),
            value: "AT&T".to_string(),
        }
    );
}

#[test]
fn test_entity_value_keeps_inner_whitespace() {
    let parsed = parse(r#"call <entity kind="name"> Bob </entity>"#).unwrap();
    assert_eq!(parsed.plain_text, "call  Bob ");
    assert_eq!(parsed.entities, vec![EntitySpan::new(5, 10, "name")]);
}
