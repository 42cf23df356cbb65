//! Filter to drop movies nobody has rated.
//!
//! A movie can carry a genre without appearing in the ratings file; it has
//! no average rating, so it can't be ranked.

use crate::traits::Filter;
use crate::types::Candidate;
use crate::user_profile::UserContext;

/// Keeps only candidates with an average rating.
pub struct KnownAverageFilter;

impl Filter for KnownAverageFilter {
    fn name(&self) -> &str {
        "KnownAverageFilter"
    }

    fn apply(&self, candidates: Vec<Candidate>, _context: &UserContext) -> Vec<Candidate> {
        candidates
            .into_iter()
            .filter(|candidate| candidate.avg_rating.is_some())
            .collect()
    }
}
