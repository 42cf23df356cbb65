//! Core domain types for the ratings and genre datasets.
//!
//! Every mapping in the system is an [`OrderedMap`] so that iteration order
//! (and therefore tie-breaking in rankings) follows the order in which the
//! source files introduced each key.

use crate::ordered_map::OrderedMap;

// =============================================================================
// Type Aliases
// =============================================================================
// These name the shapes passed between the loader and the analytics core

/// Identifier of the user who submitted a rating
pub type UserId = i64;

/// Movie title → every rating it received, in file order.
///
/// Invariant: the list is non-empty for any key present.
pub type MovieRatings = OrderedMap<String, Vec<f64>>;

/// Movie title → its single genre label (last line seen wins)
pub type MovieGenre = OrderedMap<String, String>;

/// Genre label → movie titles in that genre, first-seen order
pub type GenreIndex = OrderedMap<String, Vec<String>>;

/// Movie title → mean rating rounded to one decimal place
pub type AverageRating = OrderedMap<String, f64>;

/// User → the `(movie, rating)` pairs they submitted, in file order
pub type UserRatings = OrderedMap<UserId, Vec<(String, f64)>>;

/// Genre label → mean of the per-movie averages in that genre
pub type GenrePopularity = OrderedMap<String, f64>;

// =============================================================================
// Rating Record
// =============================================================================

/// One line of the ratings file: `movie|rating|user`
#[derive(Debug, Clone, PartialEq)]
pub struct RatingRecord {
    pub movie: String,
    /// Rating value; the scale (typically 1-5) is not validated
    pub rating: f64,
    pub user_id: UserId,
}

impl RatingRecord {
    pub fn new(movie: impl Into<String>, rating: f64, user_id: UserId) -> Self {
        Self {
            movie: movie.into(),
            rating,
            user_id,
        }
    }
}

// =============================================================================
// Dataset - The Loaded Snapshot
// =============================================================================

/// Everything read from the two input files.
///
/// Holds the raw rating stream (needed to regroup by user) next to the two
/// mappings the analytics core consumes directly. Getters hand out
/// references; the analytics functions borrow and never mutate.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    /// Flat rating stream in file order
    pub(crate) records: Vec<RatingRecord>,
    /// Ratings grouped by movie, movies in first-seen order
    pub(crate) movie_ratings: MovieRatings,
    pub(crate) movie_genres: MovieGenre,
}

impl Dataset {
    /// Creates a new, empty Dataset
    pub fn new() -> Self {
        Self::default()
    }

    pub fn records(&self) -> &[RatingRecord] {
        &self.records
    }

    pub fn movie_ratings(&self) -> &MovieRatings {
        &self.movie_ratings
    }

    pub fn movie_genres(&self) -> &MovieGenre {
        &self.movie_genres
    }

    /// All ratings a movie received (empty slice if never rated)
    pub fn ratings_for(&self, movie: &str) -> &[f64] {
        self.movie_ratings
            .get(movie)
            .map(|ratings| ratings.as_slice())
            .unwrap_or(&[])
    }

    pub fn genre_of(&self, movie: &str) -> Option<&str> {
        self.movie_genres.get(movie).map(String::as_str)
    }

    /// Record a rating and update the per-movie index
    pub fn insert_rating(&mut self, record: RatingRecord) {
        self.movie_ratings
            .get_or_insert_with(record.movie.clone(), Vec::new)
            .push(record.rating);
        self.records.push(record);
    }

    /// Tag a movie with a genre, replacing any earlier genre for it
    pub fn insert_genre(&mut self, movie: impl Into<String>, genre: impl Into<String>) {
        self.movie_genres.insert(movie.into(), genre.into());
    }

    /// Get counts for debugging/validation:
    /// (movies rated, movies with a genre, rating records)
    pub fn counts(&self) -> (usize, usize, usize) {
        (
            self.movie_ratings.len(),
            self.movie_genres.len(),
            self.records.len(),
        )
    }
}
