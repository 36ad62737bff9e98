mod doc;
mod passage;
pub mod sorting_key;
mod text;

pub use doc::Doc;
pub use passage::Passage;
pub use sorting_key::sorting_key;
