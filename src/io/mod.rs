/*!
# IO utilities

Writing of pipeline results.
Reading is done through [crate::sources].
!*/
pub mod writer;

pub use writer::{JsonlWriter, WriterTrait};
