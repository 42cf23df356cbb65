//! Filter to remove movies the user has already rated.
//!
//! This is the first filter in the recommendation pipeline, as there's no
//! point in recommending movies the user has already seen.

use crate::traits::Filter;
use crate::types::Candidate;
use crate::user_profile::UserContext;

/// Removes candidates that the user has already rated.
///
/// ## Algorithm
/// Uses the HashSet in UserContext.rated_movies for O(1) lookups.
pub struct AlreadyRatedFilter;

impl Filter for AlreadyRatedFilter {
    fn name(&self) -> &str {
        "AlreadyRatedFilter"
    }

    fn apply(&self, candidates: Vec<Candidate>, context: &UserContext) -> Vec<Candidate> {
        candidates
            .into_iter()
            .filter(|candidate| !context.has_rated(&candidate.movie))
            .collect()
    }
}
