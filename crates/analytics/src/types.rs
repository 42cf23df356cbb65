//! Candidate type passed through the recommendation filters.

/// A movie under consideration for recommendation.
///
/// `avg_rating` is `None` when the movie has no ratings at all; such
/// movies can't be ranked and are dropped by
/// [`KnownAverageFilter`](crate::filters::KnownAverageFilter).
#[derive(Debug, Clone, PartialEq)]
pub struct Candidate {
    pub movie: String,
    pub avg_rating: Option<f64>,
}

impl Candidate {
    pub fn new(movie: impl Into<String>, avg_rating: Option<f64>) -> Self {
        Self {
            movie: movie.into(),
            avg_rating,
        }
    }
}
