//! Rating aggregation: movie → ratings becomes movie → average rating.

use data_loader::{AverageRating, MovieRatings};

/// Average every movie's ratings, rounded to one decimal place.
///
/// Movies keep the order of the input mapping.
pub fn average_ratings(ratings: &MovieRatings) -> AverageRating {
    ratings
        .iter()
        .map(|(movie, values)| (movie.clone(), round_to_tenth(mean(values))))
        .collect()
}

/// Arithmetic mean; an empty slice averages to `0.0` instead of failing.
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Round to one decimal place.
///
/// Rounds the exact binary value with ties to even, so `4.25` becomes `4.2`
/// and `1.45` (stored just below the half) becomes `1.4`.
pub fn round_to_tenth(value: f64) -> f64 {
    format!("{value:.1}").parse().unwrap_or(value)
}
