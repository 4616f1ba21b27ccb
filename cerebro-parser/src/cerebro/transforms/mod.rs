//! Transform pipeline infrastructure
//!
//! Dataset building is a chain of typed stages:
//!
//! ```rust,ignore
//! let pipeline = Transform::from_fn(Ok)
//!     .then(NormalizeIntents)   // Vec<HumanIntent> → Vec<IntentSentence>
//!     .then(AssembleEntries);   // Vec<IntentSentence> → DataModel
//! ```
//!
//! The compiler checks that each stage's input is the previous stage's output. The standard
//! chain is pre-built as a static in [`standard`].
//!
//! - [`stages`]: individual stages, each implementing [`Runnable`]
//! - [`standard`]: pre-built pipelines

pub mod stages;
pub mod standard;

use crate::cerebro::error::BuildError;

/// Anything that can transform an input into an output.
pub trait Runnable<I, O> {
    fn run(&self, input: I) -> Result<O, BuildError>;
}

/// A composable transformation from `I` to `O`.
pub struct Transform<I, O> {
    run_fn: Box<dyn Fn(I) -> Result<O, BuildError> + Send + Sync>,
}

impl<I, O> Transform<I, O> {
    /// Create a transform from a function
    pub fn from_fn<F>(f: F) -> Self
    where
        F: Fn(I) -> Result<O, BuildError> + Send + Sync + 'static,
    {
        Transform {
            run_fn: Box::new(f),
        }
    }

    /// Chain `stage` after this transform.
    pub fn then<O2, S>(self, stage: S) -> Transform<I, O2>
    where
        S: Runnable<O, O2> + Send + Sync + 'static,
        I: 'static,
        O: 'static,
        O2: 'static,
    {
        let prev_run = self.run_fn;
        Transform {
            run_fn: Box::new(move |input| {
                let intermediate = prev_run(input)?;
                stage.run(intermediate)
            }),
        }
    }

    /// Execute this transform on the given input
    pub fn run(&self, input: I) -> Result<O, BuildError> {
        (self.run_fn)(input)
    }
}

impl<I, O> Runnable<I, O> for Transform<I, O>
where
    I: 'static,
    O: 'static,
{
    fn run(&self, input: I) -> Result<O, BuildError> {
        Transform::run(self, input)
    }
}
