//! # Analytics Crate
//!
//! Read-only aggregate queries over a loaded
//! [`Dataset`](data_loader::Dataset): top-rated movies, genre rankings,
//! favorite genres and genre-based recommendations.
//!
//! ## Architecture
//! Every function borrows its inputs and returns a freshly built mapping.
//! Components, leaves first:
//! 1. **aggregator**: movie → ratings becomes movie → average rating
//! 2. **genre_index**: movie → genre becomes genre → movies
//! 3. **ranker**: top-N and threshold selection with stable tie-breaks
//! 4. **genre**: per-genre averages and per-genre top movies
//! 5. **user_profile**: ratings grouped by user, genre preferences
//! 6. **recommender**: favorite genre → candidate filters → ranker
//!
//! Nothing in this crate fails: unknown genres and users resolve to empty
//! mappings, `None` or `0.0`.
//!
//! ## Example Usage
//! ```ignore
//! use analytics::{average_ratings, group_by_user, recommend, top_n, DEFAULT_TOP_N};
//!
//! let averages = average_ratings(dataset.movie_ratings());
//! let best = top_n(&averages, DEFAULT_TOP_N);
//!
//! let user_ratings = group_by_user(dataset.records());
//! let recs = recommend(1, &user_ratings, dataset.movie_genres(), &averages);
//! ```

pub mod aggregator;
pub mod filter_pipeline;
pub mod filters;
pub mod genre;
pub mod genre_index;
pub mod ranker;
pub mod recommender;
pub mod traits;
pub mod types;
pub mod user_profile;

// Re-export main operations
pub use aggregator::average_ratings;
pub use filter_pipeline::FilterPipeline;
pub use genre::{genre_average, genre_popularity, top_in_genre};
pub use genre_index::invert_genres;
pub use ranker::{filter_above, top_n, DEFAULT_GENRE_TOP_N, DEFAULT_THRESHOLD, DEFAULT_TOP_N};
pub use recommender::{recommend, RECOMMENDATION_LIMIT};
pub use traits::Filter;
pub use types::Candidate;
pub use user_profile::{
    build_user_context, favorite_genre, genre_preferences, group_by_user, UserContext,
};
