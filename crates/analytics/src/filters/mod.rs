//! Filter implementations for the candidate pipeline.
//!
//! This module contains all the concrete filter implementations
//! that can be composed into a FilterPipeline.

pub mod already_rated;
pub mod known_average;

// Re-export for convenience
pub use already_rated::AlreadyRatedFilter;
pub use known_average::KnownAverageFilter;
