//! The FilterPipeline orchestrates multiple filters.
//!
//! This module provides the main FilterPipeline struct that chains
//! multiple filters together using the builder pattern.

use crate::traits::Filter;
use crate::types::Candidate;
use crate::user_profile::UserContext;
use tracing::debug;

/// Chains multiple filters together into a processing pipeline.
///
/// ## Usage
/// ```ignore
/// let pipeline = FilterPipeline::new()
///     .add_filter(AlreadyRatedFilter)
///     .add_filter(KnownAverageFilter);
///
/// let filtered = pipeline.apply(candidates, &context);
/// ```
pub struct FilterPipeline {
    filters: Vec<Box<dyn Filter>>,
}

impl FilterPipeline {
    /// Create a new empty FilterPipeline.
    pub fn new() -> Self {
        Self {
            filters: Vec::new(),
        }
    }

    /// Add a filter to the pipeline (builder pattern).
    pub fn add_filter(mut self, filter: impl Filter + 'static) -> Self {
        self.filters.push(Box::new(filter));
        self
    }

    /// Apply all filters in sequence to the candidates.
    ///
    /// Each stage logs its name with input and output counts at debug level.
    pub fn apply(&self, candidates: Vec<Candidate>, context: &UserContext) -> Vec<Candidate> {
        let mut current = candidates;
        for filter in &self.filters {
            let input_count = current.len();
            current = filter.apply(current, context);
            debug!(
                filter = filter.name(),
                input_count,
                output_count = current.len(),
                "Filter applied"
            );
        }
        current
    }
}

impl Default for FilterPipeline {
    fn default() -> Self {
        Self::new()
    }
}
