//! Per-user views of the rating stream.
//!
//! This module regroups the flat ratings by user and derives what we know
//! about a user's taste:
//! - Genre preferences (average rating the user gives each genre)
//! - Favorite genre (the best of those averages)
//! - A `UserContext` with the set of movies already rated, used by the
//!   recommender's filters

use data_loader::{MovieGenre, OrderedMap, RatingRecord, UserId, UserRatings};
use std::collections::HashSet;

/// Group the rating stream by user.
///
/// Users appear in first-seen order and each user's `(movie, rating)`
/// pairs keep the order of the stream.
pub fn group_by_user(records: &[RatingRecord]) -> UserRatings {
    let mut user_ratings = UserRatings::new();
    for record in records {
        user_ratings
            .get_or_insert_with(record.user_id, Vec::new)
            .push((record.movie.clone(), record.rating));
    }
    user_ratings
}

/// Average rating a user gives each genre.
///
/// Genres appear in the order the user first rated a movie in them. Movies
/// with no known genre are skipped. Returns `None` if the user is unknown
/// or none of their movies have a genre.
pub fn genre_preferences(
    user_id: UserId,
    user_ratings: &UserRatings,
    movie_to_genre: &MovieGenre,
) -> Option<OrderedMap<String, f64>> {
    let rated = user_ratings.get(&user_id)?;

    // (sum, count) per genre
    let mut genre_stats: OrderedMap<String, (f64, u32)> = OrderedMap::new();
    for (movie, rating) in rated {
        if let Some(genre) = movie_to_genre.get(movie.as_str()) {
            let entry = genre_stats.get_or_insert_with(genre.clone(), || (0.0, 0));
            entry.0 += *rating;
            entry.1 += 1;
        }
    }

    if genre_stats.is_empty() {
        return None;
    }

    // Convert to averages
    Some(
        genre_stats
            .into_iter()
            .map(|(genre, (sum, count))| (genre, sum / f64::from(count)))
            .collect(),
    )
}

/// The genre the user rates highest on average.
///
/// On a tie the genre the user reached first wins.
pub fn favorite_genre(
    user_id: UserId,
    user_ratings: &UserRatings,
    movie_to_genre: &MovieGenre,
) -> Option<String> {
    let preferences = genre_preferences(user_id, user_ratings, movie_to_genre)?;

    let mut best: Option<(&String, f64)> = None;
    for (genre, &avg) in &preferences {
        match best {
            Some((_, top)) if avg <= top => {}
            _ => best = Some((genre, avg)),
        }
    }

    best.map(|(genre, _)| genre.clone())
}

/// What the filters need to know about the user being served
#[derive(Debug, Clone, Default)]
pub struct UserContext {
    pub user_id: UserId,
    /// Every movie the user has rated, for O(1) exclusion checks
    pub rated_movies: HashSet<String>,
}

impl UserContext {
    pub fn new(user_id: UserId) -> Self {
        Self {
            user_id,
            rated_movies: HashSet::new(),
        }
    }

    pub fn has_rated(&self, movie: &str) -> bool {
        self.rated_movies.contains(movie)
    }
}

/// Build a UserContext from the grouped ratings.
///
/// An unknown user gets an empty rated set.
pub fn build_user_context(user_id: UserId, user_ratings: &UserRatings) -> UserContext {
    let mut context = UserContext::new(user_id);

    if let Some(rated) = user_ratings.get(&user_id) {
        context.rated_movies = rated.iter().map(|(movie, _)| movie.clone()).collect();
    }

    context
}
