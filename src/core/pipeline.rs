//! Pipeline executor - chains steps left-to-right

use crate::core::step::Step;
use std::fmt;
use tracing::trace;

/// A boxed homogeneous step, as accepted by [`compose`]
pub type BoxStep<T, E> = Box<dyn Fn(T) -> Result<T, E> + Send + Sync>;

/// An ordered, immutable sequence of steps
///
/// A pipeline is built once and then invoked any number of times. Each run
/// threads one input value through the steps in the order they were added:
/// the first step consumes the run's argument, its output becomes the next
/// step's input, and so on. The first step to return `Err` aborts the
/// remaining steps and that error is returned to the caller untouched - the
/// pipeline never catches, wraps, or logs step failures.
///
/// Running takes `&self` and keeps no per-run state, so a pipeline shared
/// behind an `Arc` can be run from several threads at once.
pub struct Pipeline<I, O, E> {
    // steps are folded into one chain at construction time
    chain: Box<dyn Fn(I) -> Result<O, E> + Send + Sync>,
    len: usize,
}

impl<I, E> Pipeline<I, I, E>
where
    I: 'static,
    E: 'static,
{
    /// Create an empty pipeline
    ///
    /// With zero steps the pipeline is the identity function: running it
    /// returns the input unchanged.
    pub fn new() -> Self {
        Pipeline {
            chain: Box::new(Ok),
            len: 0,
        }
    }
}

impl<I, E> Default for Pipeline<I, I, E>
where
    I: 'static,
    E: 'static,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<I, O, E> Pipeline<I, O, E>
where
    I: 'static,
    O: 'static,
    E: 'static,
{
    /// Append a fallible step
    ///
    /// The step consumes this pipeline's output type and decides the new
    /// output type, so mismatched adjacent steps fail to compile.
    pub fn then<S, N>(self, step: S) -> Pipeline<I, N, E>
    where
        S: Step<O, N, E> + Send + Sync + 'static,
        N: 'static,
    {
        let chain = self.chain;
        Pipeline {
            chain: Box::new(move |input| chain(input).and_then(|value| step.apply(value))),
            len: self.len + 1,
        }
    }

    /// Append an infallible step
    pub fn then_map<F, N>(self, f: F) -> Pipeline<I, N, E>
    where
        F: Fn(O) -> N + Send + Sync + 'static,
        N: 'static,
    {
        let chain = self.chain;
        Pipeline {
            chain: Box::new(move |input| chain(input).map(&f)),
            len: self.len + 1,
        }
    }

    /// Run the pipeline on one input value
    ///
    /// Returns the output of the last step, or the input itself for an
    /// empty pipeline, or the first step failure encountered.
    pub fn run(&self, input: I) -> Result<O, E> {
        trace!(steps = self.len, "running pipeline");
        (self.chain)(input)
    }

    /// Number of steps, fixed at construction
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the pipeline has zero steps
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

// The step chain is an opaque closure; report the step count.
impl<I, O, E> fmt::Debug for Pipeline<I, O, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Pipeline").field("steps", &self.len).finish()
    }
}

/// Compose an ordered sequence of same-typed steps into one pipeline
///
/// Accepts any number of boxed steps `T -> Result<T, E>`, including zero;
/// an empty sequence composes to the identity pipeline. Application order
/// is left-to-right: the first step listed runs first.
pub fn compose<T, E>(steps: impl IntoIterator<Item = BoxStep<T, E>>) -> Pipeline<T, T, E>
where
    T: 'static,
    E: 'static,
{
    let mut pipeline = Pipeline::new();
    for step in steps {
        pipeline = pipeline.then(step);
    }
    trace!(steps = pipeline.len, "composed pipeline");
    pipeline
}
