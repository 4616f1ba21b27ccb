//! Main module for cerebro library functionality

pub mod assembling;
pub mod entities;
pub mod error;
pub mod loader;
pub mod model;
pub mod normalizing;
pub mod transforms;

pub use entities::parse_sentence;
pub use error::{BuildError, SentenceError};
pub use loader::{IntentLoader, LoaderOptions};
pub use model::{DataEntry, DataModel, EntitySpan, HumanIntent, Manifest, ParsedSentence};
pub use normalizing::{normalize_block, normalize_lines, NormalizedSentence};
