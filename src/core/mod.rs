//! Core domain models for the pipeline executor
//!
//! This module defines the step abstraction, the pipeline that chains
//! steps left-to-right, and the trust predicate steps use to gate input.

pub mod error;
pub mod pipeline;
pub mod step;
pub mod trust;

pub use error::*;
pub use pipeline::*;
pub use step::*;
pub use trust::*;
