//! Trust predicate - gates values before they enter a pipeline
//!
//! Step functions call [`trust`] to decide whether an input counts as
//! present and non-empty. The pipeline executor itself never consults it.

/// Types that can vouch for their own presence
pub trait Trust {
    /// Whether the value should be treated as present/non-empty
    fn is_trusted(&self) -> bool;
}

impl Trust for str {
    fn is_trusted(&self) -> bool {
        !self.is_empty()
    }
}

impl Trust for String {
    fn is_trusted(&self) -> bool {
        !self.is_empty()
    }
}

impl<T: Trust> Trust for Option<T> {
    // absent values are never trusted
    fn is_trusted(&self) -> bool {
        self.as_ref().is_some_and(Trust::is_trusted)
    }
}

impl<T> Trust for [T] {
    fn is_trusted(&self) -> bool {
        !self.is_empty()
    }
}

impl<T> Trust for Vec<T> {
    fn is_trusted(&self) -> bool {
        !self.is_empty()
    }
}

impl<T: Trust + ?Sized> Trust for &T {
    fn is_trusted(&self) -> bool {
        (**self).is_trusted()
    }
}

/// Check whether a value should be treated as present/non-empty
pub fn trust<T: Trust + ?Sized>(value: &T) -> bool {
    value.is_trusted()
}
