//! Core traits for the recommendation filters.
//!
//! This module defines the Filter trait that allows composable,
//! extensible filters to be applied to candidate sets.

use crate::types::Candidate;
use crate::user_profile::UserContext;

/// Core trait for filtering candidates.
///
/// All filters must implement this trait to be used in the FilterPipeline.
///
/// ## Design Note
/// - Filters take ownership of the Vec<Candidate> and return a filtered Vec
/// - Filters only remove candidates; survivors keep their relative order,
///   which the ranker relies on to break ties
pub trait Filter: Send + Sync {
    /// Returns the name of this filter (for logging/debugging)
    fn name(&self) -> &str;

    /// Apply this filter to a set of candidates.
    ///
    /// # Arguments
    /// * `candidates` - The candidates to filter (takes ownership)
    /// * `context` - The user being served
    fn apply(&self, candidates: Vec<Candidate>, context: &UserContext) -> Vec<Candidate>;
}
