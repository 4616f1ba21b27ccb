//! Individual transformation stages

use crate::cerebro::assembling::{build_entry, IntentSentence};
use crate::cerebro::error::BuildError;
use crate::cerebro::model::{DataModel, HumanIntent};
use crate::cerebro::normalizing::normalize_block;
use crate::cerebro::transforms::Runnable;

/// Splits every raw block of every intent into normalized sentences, keeping intent order.
pub struct NormalizeIntents;

impl Runnable<Vec<HumanIntent>, Vec<IntentSentence>> for NormalizeIntents {
    fn run(&self, input: Vec<HumanIntent>) -> Result<Vec<IntentSentence>, BuildError> {
        let mut sentences = Vec::new();
        for intent in input {
            let before = sentences.len();
            for block in &intent.sentences {
                sentences.extend(
                    normalize_block(block)
                        .into_iter()
                        .map(|sentence| IntentSentence::new(intent.name.clone(), sentence)),
                );
            }
            tracing::debug!(
                intent = %intent.name,
                blocks = intent.sentences.len(),
                sentences = sentences.len() - before,
                "normalized intent"
            );
        }
        Ok(sentences)
    }
}

/// Parses each sentence and collects one entry per sentence. The first invalid sentence aborts
/// the stage.
pub struct AssembleEntries;

impl Runnable<Vec<IntentSentence>, DataModel> for AssembleEntries {
    fn run(&self, input: Vec<IntentSentence>) -> Result<DataModel, BuildError> {
        input
            .iter()
            .map(|item| {
                build_entry(&item.intent, &item.sentence).map_err(|source| BuildError::Sentence {
                    intent: item.intent.clone(),
                    source,
                })
            })
            .collect()
    }
}
