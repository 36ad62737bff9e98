//! Pipelines.
//!
//! Pipelines are implemented here, and the module
//! provides a light [pipeline::Pipeline] trait that enables easy and flexible pipeline creation.
pub mod newscrawl;
#[allow(clippy::module_inception)]
pub mod pipeline;

pub use newscrawl::{NewsCrawlDocs, NewsCrawlPassages};
pub use pipeline::Pipeline;
