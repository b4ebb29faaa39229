//! compose - a left-to-right function pipeline executor

pub mod core;

// Re-export commonly used types
pub use core::{compose, trust, BoxStep, Pipeline, Step, StepError, Trust};
