/*!
# Output writing

Passages and documents are written as gzipped JSON Lines, through [WriterTrait] implementors.
!*/
mod jsonl;
mod writertrait;

pub use jsonl::JsonlWriter;
pub use writertrait::WriterTrait;
