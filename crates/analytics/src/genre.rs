//! Genre-level analytics built on the aggregator, indexer and ranker.
//!
//! A genre's rating is the plain mean of its movies' *average* ratings,
//! so a movie with one rating counts as much as a movie with a hundred.

use crate::aggregator::mean;
use crate::ranker::top_n;
use data_loader::{AverageRating, GenreIndex, GenrePopularity, OrderedMap};

/// Mean of the average ratings of a genre's movies.
///
/// Movies without an average are skipped. An unknown genre, or one with no
/// rated movies, scores `0.0`.
pub fn genre_average(genre: &str, genre_index: &GenreIndex, avg_ratings: &AverageRating) -> f64 {
    let Some(movies) = genre_index.get(genre) else {
        return 0.0;
    };

    let rated: Vec<f64> = movies
        .iter()
        .filter_map(|movie| avg_ratings.get(movie.as_str()).copied())
        .collect();

    mean(&rated)
}

/// The `n` genres with the highest [`genre_average`], best first.
pub fn genre_popularity(
    genre_index: &GenreIndex,
    avg_ratings: &AverageRating,
    n: usize,
) -> GenrePopularity {
    let averages: GenrePopularity = genre_index
        .keys()
        .map(|genre| (genre.clone(), genre_average(genre, genre_index, avg_ratings)))
        .collect();

    top_n(&averages, n)
}

/// The `n` best-rated movies in one genre.
///
/// An unknown genre yields an empty mapping.
pub fn top_in_genre(
    genre: &str,
    genre_index: &GenreIndex,
    avg_ratings: &AverageRating,
    n: usize,
) -> OrderedMap<String, f64> {
    let Some(movies) = genre_index.get(genre) else {
        return OrderedMap::new();
    };

    let in_genre: OrderedMap<String, f64> = movies
        .iter()
        .filter_map(|movie| {
            avg_ratings
                .get(movie.as_str())
                .map(|&avg| (movie.clone(), avg))
        })
        .collect();

    top_n(&in_genre, n)
}
