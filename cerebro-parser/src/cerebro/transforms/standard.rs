//! Standard transform definitions
//!
//! Pre-built pipelines, defined as statics with `once_cell::sync::Lazy`.

use crate::cerebro::assembling::IntentSentence;
use crate::cerebro::model::{DataModel, HumanIntent};
use crate::cerebro::transforms::stages::{AssembleEntries, NormalizeIntents};
use crate::cerebro::transforms::Transform;
use once_cell::sync::Lazy;

/// Intents → normalized sentences tagged with their intent.
pub static NORMALIZATION: Lazy<Transform<Vec<HumanIntent>, Vec<IntentSentence>>> =
    Lazy::new(|| Transform::from_fn(Ok).then(NormalizeIntents));

/// Intents → data model: normalization, entity parsing, entry assembly.
pub static BUILD_DATA_MODEL: Lazy<Transform<Vec<HumanIntent>, DataModel>> = Lazy::new(|| {
    Transform::from_fn(Ok)
        .then(NormalizeIntents)
        .then(AssembleEntries)
});

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cerebro::model::EntitySpan;

    #[test]
    fn build_data_model_runs_all_stages() {
        let model = BUILD_DATA_MODEL
            .run(vec![HumanIntent::new(
                "weather",
                vec!["weather in\n  <entity kind=\"city\">Oslo</entity>".into()],
            )])
            .unwrap();

        assert_eq!(model.len(), 1);
        let entry = &model.entries()[0];
        assert_eq!(entry.text, "weather in Oslo");
        assert_eq!(entry.categories, vec!["weather"]);
        assert_eq!(entry.entities, vec![EntitySpan::new(11, 15, "city")]);
    }

    #[test]
    fn normalization_alone_skips_parsing() {
        let sentences = NORMALIZATION
            .run(vec![HumanIntent::new("x", vec!["<not parsed".into()])])
            .unwrap();
        assert_eq!(sentences[0].sentence.as_str(), "<not parsed");
    }
}
