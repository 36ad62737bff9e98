/*! Content processing

Byte and sentence level helpers used by the pipelines, and offline key list generation.
!*/
pub mod bytes;
pub mod keys;
pub mod sentence;
