//! Filtering trait.

/// Stateless filter: `detect` returns `true` for items to keep.
///
/// Detection only reads the filter, so the same input always gets the same answer
/// for the lifetime of a filter.
pub trait Filter<T>: Default {
    fn detect(&self, item: T) -> bool;
}
