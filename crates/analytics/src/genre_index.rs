//! Inverts movie → genre into genre → movies.

use data_loader::{GenreIndex, MovieGenre};

/// Group movies under their genre.
///
/// Genres appear in the order their first movie does, and each genre's
/// movies keep the order of the input mapping.
pub fn invert_genres(movie_to_genre: &MovieGenre) -> GenreIndex {
    let mut genre_index = GenreIndex::new();
    for (movie, genre) in movie_to_genre {
        genre_index
            .get_or_insert_with(genre.clone(), Vec::new)
            .push(movie.clone());
    }
    genre_index
}
