//! # cerebro-parser
//!
//! Turns human-authored intent files into the dataset consumed by the Cerebro NLU backend.
//!
//! Intent files hold training sentences with inline entity annotations:
//!
//! ```text
//! - I live in <entity kind="city">Paris</entity>
//! - take me to
//!     <entity kind="landmark">the tower</entity>
//! ```
//!
//! File Layout
//!
//!     src/cerebro
//!       ├── normalizing    Folds indented continuation lines into single-line sentences
//!       ├── entities       Strips entity markers and computes character offsets
//!       ├── model          Dataset entries and their serialized shape
//!       ├── assembling     One dataset entry per parsed sentence
//!       ├── transforms     Composable pipeline: intents → normalized sentences → data model
//!       └── loader         Manifest and intent file reading
//!
//! The two core stages (normalizing and entities) are pure functions over a single input; the
//! loader is the only part that touches the file system.

pub mod cerebro;
