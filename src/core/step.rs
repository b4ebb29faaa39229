//! Step domain model

/// A single step in a pipeline
///
/// A step is a unary fallible transform: it consumes one input value and
/// produces either the next value or an error. Every closure and function
/// of the shape `Fn(I) -> Result<O, E>` is a step via the blanket impl, so
/// hand-written step types are only needed when a step carries state.
///
/// Adjacent steps must agree on their value types; the pipeline builder
/// checks this at construction time.
pub trait Step<I, O, E> {
    /// Apply the step to one input value
    fn apply(&self, input: I) -> Result<O, E>;
}

impl<F, I, O, E> Step<I, O, E> for F
where
    F: Fn(I) -> Result<O, E>,
{
    fn apply(&self, input: I) -> Result<O, E> {
        self(input)
    }
}
