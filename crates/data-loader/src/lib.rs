//! # Data Loader Crate
//!
//! This crate loads the two pipe-delimited input files (movie ratings and
//! movie genres) into in-memory, insertion-ordered mappings.
//!
//! ## Main Components
//!
//! - **ordered_map**: `OrderedMap`, the insertion-ordered map behind every mapping
//! - **types**: Domain types (RatingRecord, Dataset) and mapping aliases
//! - **parser**: Parse the ratings and genre files
//! - **index**: Assemble a Dataset from parsed records
//! - **error**: Error types for data loading
//!
//! ## Example Usage
//!
//! ```ignore
//! use data_loader::Dataset;
//! use std::path::Path;
//!
//! let dataset = Dataset::load_from_files(
//!     Path::new("data/movieRatingSample.txt"),
//!     Path::new("data/genreMovieSample.txt"),
//! )?;
//!
//! let ratings = dataset.ratings_for("Toy Story (1995)");
//! println!("{} ratings", ratings.len());
//! ```

// Public modules
pub mod error;
pub mod index;
pub mod ordered_map;
pub mod parser;
pub mod types;

// Re-export commonly used types for convenience
pub use error::{DataLoadError, Result};
pub use ordered_map::OrderedMap;
pub use types::{
    // Type aliases
    AverageRating,
    GenreIndex,
    GenrePopularity,
    MovieGenre,
    MovieRatings,
    UserId,
    UserRatings,
    // Core types
    Dataset,
    RatingRecord,
};
