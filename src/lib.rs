pub mod core;
pub mod corpus;
pub mod error;
pub mod extract;
pub mod gpw;
pub mod pipeline;

// Re-exports
pub use crate::core::config::ScraperConfig;
pub use crate::corpus::{DocumentRecord, SummaryRecord};
pub use crate::error::ScrapeError;
pub use crate::pipeline::{ItemFailure, Pipeline, RunReport};
