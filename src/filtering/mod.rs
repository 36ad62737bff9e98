/*! Filtering utilities

Filters operate on documents or on their sorting keys, and implement [filter::Filter].

- [keys::SortingKeys] keeps documents whose sorting key is listed in a deduplicated key list.
! */
mod filter;
pub mod keys;

pub use filter::Filter;
pub use keys::SortingKeys;
