//! Sentence normalization
//!
//!     Intent files may spread one training sentence over several source lines. A line that
//!     starts at column zero opens a new sentence; a line with leading whitespace continues the
//!     sentence before it:
//!
//!         take me to
//!             <entity kind="landmark">the tower</entity>
//!         book a table
//!
//!     folds into `take me to <entity kind="landmark">the tower</entity>` and `book a table`.
//!
//!     Normalization is a fold over the lines of one block; nothing is kept between calls.

use std::fmt;

/// A single logical sentence. Never contains a newline character.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NormalizedSentence(String);

impl NormalizedSentence {
    /// Build a sentence from a single line, replacing any embedded line break with a space.
    pub fn from_line(line: &str) -> Self {
        NormalizedSentence(flatten(strip_line_ending(line)))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl AsRef<str> for NormalizedSentence {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NormalizedSentence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Fold the raw lines of one block into its sentences.
///
/// Blank lines are skipped. Empty input yields no sentences.
pub fn normalize_lines<S: AsRef<str>>(lines: &[S]) -> Vec<NormalizedSentence> {
    let mut sentences = Vec::new();
    let pending = lines
        .iter()
        .map(|line| strip_line_ending(line.as_ref()))
        .filter(|line| !line.trim().is_empty())
        .fold(String::new(), |mut pending, line| {
            if is_continuation(line) {
                if !pending.is_empty() {
                    pending.push(' ');
                }
                pending.push_str(&flatten(line.trim_start()));
            } else {
                if !pending.is_empty() {
                    sentences.push(NormalizedSentence(std::mem::take(&mut pending)));
                }
                pending.push_str(&flatten(line));
            }
            pending
        });

    if !pending.is_empty() {
        sentences.push(NormalizedSentence(pending));
    }
    sentences
}

/// Split `block` into lines and fold them with [`normalize_lines`].
pub fn normalize_block(block: &str) -> Vec<NormalizedSentence> {
    let lines: Vec<&str> = block.split_inclusive('\n').collect();
    normalize_lines(&lines)
}

fn is_continuation(line: &str) -> bool {
    line.chars().next().is_some_and(char::is_whitespace)
}

fn strip_line_ending(line: &str) -> &str {
    line.strip_suffix('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .unwrap_or(line)
}

fn flatten(text: &str) -> String {
    text.replace("\r\n", " ").replace(['\n', '\r'], " ")
}
