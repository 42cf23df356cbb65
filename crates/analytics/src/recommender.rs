//! Genre-based movie recommendations.
//!
//! ## Algorithm
//! 1. Find the user's favorite genre
//! 2. Look up every movie in that genre
//! 3. Drop movies the user already rated, and movies with no average
//! 4. Return the best-rated few
//!
//! Any step that comes up empty ends the request with no recommendations.

use crate::filter_pipeline::FilterPipeline;
use crate::filters::{AlreadyRatedFilter, KnownAverageFilter};
use crate::genre_index::invert_genres;
use crate::ranker::top_n;
use crate::types::Candidate;
use crate::user_profile::{build_user_context, favorite_genre};
use data_loader::{AverageRating, MovieGenre, OrderedMap, UserId, UserRatings};
use tracing::{debug, instrument};

/// Number of movies returned by [`recommend`]
pub const RECOMMENDATION_LIMIT: usize = 3;

/// Recommend unrated movies from the user's favorite genre, best first.
#[instrument(skip(user_ratings, movie_to_genre, avg_ratings))]
pub fn recommend(
    user_id: UserId,
    user_ratings: &UserRatings,
    movie_to_genre: &MovieGenre,
    avg_ratings: &AverageRating,
) -> OrderedMap<String, f64> {
    // Step 1: favorite genre
    let Some(genre) = favorite_genre(user_id, user_ratings, movie_to_genre) else {
        debug!("No favorite genre");
        return OrderedMap::new();
    };

    // Step 2: movies in that genre
    let genre_index = invert_genres(movie_to_genre);
    let Some(movies) = genre_index.get(genre.as_str()) else {
        debug!(%genre, "Favorite genre has no movies");
        return OrderedMap::new();
    };

    // Step 3: what the user has already rated
    let context = build_user_context(user_id, user_ratings);

    // Step 4: filter and rank
    let candidates: Vec<Candidate> = movies
        .iter()
        .map(|movie| Candidate::new(movie.clone(), avg_ratings.get(movie.as_str()).copied()))
        .collect();

    let pipeline = FilterPipeline::new()
        .add_filter(AlreadyRatedFilter)
        .add_filter(KnownAverageFilter);

    let scores: OrderedMap<String, f64> = pipeline
        .apply(candidates, &context)
        .into_iter()
        .filter_map(|candidate| candidate.avg_rating.map(|avg| (candidate.movie, avg)))
        .collect();

    debug!(%genre, candidates = scores.len(), "Ranking recommendations");
    top_n(&scores, RECOMMENDATION_LIMIT)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregator::average_ratings;
    use crate::user_profile::group_by_user;
    use data_loader::{Dataset, RatingRecord};

    fn create_test_dataset() -> Dataset {
        let mut dataset = Dataset::new();

        for (movie, genre) in [
            ("Airplane", "Comedy"),
            ("Clue", "Comedy"),
            ("Spaceballs", "Comedy"),
            ("Tootsie", "Comedy"),
            ("Big", "Comedy"),
            ("Genre Only", "Comedy"),
            ("Heat", "Crime"),
            ("Fargo", "Crime"),
        ] {
            dataset.insert_genre(movie, genre);
        }

        // User 1 loves comedy
        dataset.insert_rating(RatingRecord::new("Airplane", 5.0, 1));
        dataset.insert_rating(RatingRecord::new("Heat", 2.0, 1));

        // Everyone else provides the averages
        dataset.insert_rating(RatingRecord::new("Clue", 3.0, 2));
        dataset.insert_rating(RatingRecord::new("Spaceballs", 4.0, 2));
        dataset.insert_rating(RatingRecord::new("Tootsie", 4.5, 2));
        dataset.insert_rating(RatingRecord::new("Big", 2.5, 2));
        dataset.insert_rating(RatingRecord::new("Fargo", 5.0, 2));

        dataset
    }

    fn run(user_id: UserId, dataset: &Dataset) -> OrderedMap<String, f64> {
        let user_ratings = group_by_user(dataset.records());
        let averages = average_ratings(dataset.movie_ratings());
        recommend(user_id, &user_ratings, dataset.movie_genres(), &averages)
    }

    #[test]
    fn test_recommends_top_unrated_in_favorite_genre() {
        let dataset = create_test_dataset();
        let recs = run(1, &dataset);

        let movies: Vec<_> = recs.iter().map(|(m, &r)| (m.as_str(), r)).collect();
        assert_eq!(
            movies,
            vec![("Tootsie", 4.5), ("Spaceballs", 4.0), ("Clue", 3.0)]
        );
    }

    #[test]
    fn test_never_recommends_rated_movies() {
        let dataset = create_test_dataset();
        let recs = run(1, &dataset);

        assert!(!recs.contains_key("Airplane"));
        assert!(!recs.contains_key("Genre Only"));
        assert!(recs.len() <= RECOMMENDATION_LIMIT);
    }

    #[test]
    fn test_unknown_user_gets_nothing() {
        let dataset = create_test_dataset();
        assert!(run(99, &dataset).is_empty());
    }

    #[test]
    fn test_user_without_genre_mapped_ratings_gets_nothing() {
        let mut dataset = create_test_dataset();
        dataset.insert_rating(RatingRecord::new("Obscure Film", 5.0, 7));

        assert!(run(7, &dataset).is_empty());
    }

    #[test]
    fn test_everything_rated_gives_empty_result() {
        let mut dataset = Dataset::new();
        dataset.insert_genre("Heat", "Crime");
        dataset.insert_rating(RatingRecord::new("Heat", 4.0, 1));

        assert!(run(1, &dataset).is_empty());
    }
}
