//! Dataset building logic.
//!
//! Turns parsed records into the mappings the analytics consume:
//! - movie → ratings, movies in first-seen order
//! - movie → genre, as parsed
//!
//! The flat rating stream is kept as well so callers can regroup it by
//! user.

use crate::error::Result;
use crate::parser;
use crate::types::{Dataset, MovieGenre, RatingRecord};
use std::path::Path;
use tracing::{info, instrument};

impl Dataset {
    /// Load both input files and build the Dataset.
    ///
    /// Steps:
    /// 1. Parse ratings and genres in parallel
    /// 2. Group ratings by movie
    /// 3. Attach the genre mapping
    #[instrument(skip_all, fields(ratings = %ratings_path.display(), genres = %genres_path.display()))]
    pub fn load_from_files(ratings_path: &Path, genres_path: &Path) -> Result<Self> {
        // Rayon's `join` runs the two parsers in parallel
        let (records, movie_genres) = rayon::join(
            || parser::parse_ratings(ratings_path),
            || parser::parse_genres(genres_path),
        );

        // Handle errors from parallel parsing
        let records = records?;
        let movie_genres = movie_genres?;

        let dataset = Self::from_parts(records, movie_genres);

        let (movies, genre_tagged, ratings) = dataset.counts();
        info!(movies, genre_tagged, ratings, "Dataset loaded");

        Ok(dataset)
    }

    /// Build a Dataset from already-parsed records and genre mapping
    pub fn from_parts(records: Vec<RatingRecord>, movie_genres: MovieGenre) -> Self {
        let mut dataset = Self {
            records: Vec::with_capacity(records.len()),
            movie_genres,
            ..Self::default()
        };

        for record in records {
            dataset.insert_rating(record);
        }

        dataset
    }
}
