//! Pipeline trait.
use crate::error::Error;

/// A runnable pipeline, reading its inputs and writing its outputs on `run`.
///
/// `T` is what a run reports back (eg. counts of processed items).
pub trait Pipeline<T> {
    fn run(&self) -> Result<T, Error>;
}
