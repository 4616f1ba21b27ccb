//! Removal of entity tags from the raw sentence.

use once_cell::sync::Lazy;
use regex::Regex;

/// Matches a closing `</entity>` tag or an opening `<entity ...>` tag up to its own `>`.
/// Quoted attribute values may contain `>`.
static ENTITY_TAG: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"</entity\s*>|<entity(?:\s+[^\s=/>]+\s*=\s*(?:"[^"]*"|'[^']*'))*\s*>"#)
        .expect("entity tag pattern is valid")
});

/// Drop every entity tag from `sentence`, keeping all other characters in place.
pub fn strip_entity_tags(sentence: &str) -> String {
    ENTITY_TAG.replace_all(sentence, "").into_owned()
}
