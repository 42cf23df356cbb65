//! Parsers for the two pipe-delimited input files.
//!
//! - ratings: `movie|rating|user`
//! - genres:  `genre|ignored|movie`
//!
//! The two formats get different treatment for bad lines. A ratings line
//! that can't be parsed fails the whole load (a rating or user id that is
//! not a number means the file is wrong). A genre line that doesn't split
//! into exactly three fields is skipped.

use crate::error::{DataLoadError, Result};
use crate::types::{MovieGenre, RatingRecord, UserId};
use std::fs;
use std::io::ErrorKind;
use std::path::Path;
use tracing::debug;

/// Read a whole file as text.
///
/// Invalid UTF-8 is replaced rather than rejected; titles are only
/// compared with each other so a replacement character is harmless.
fn read_to_string_lossy(path: &Path) -> Result<String> {
    let bytes = fs::read(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => DataLoadError::FileNotFound {
            path: path.display().to_string(),
        },
        _ => DataLoadError::IoError(e),
    })?;

    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Name used in parse errors: the file name if there is one
fn source_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// Parse the ratings file
///
/// Format: movie|rating|user
pub fn parse_ratings(path: &Path) -> Result<Vec<RatingRecord>> {
    let content = read_to_string_lossy(path)?;
    parse_ratings_str(&content, &source_name(path))
}

/// Parse ratings from in-memory text. `source` names the input in errors.
pub fn parse_ratings_str(content: &str, source: &str) -> Result<Vec<RatingRecord>> {
    let mut records = Vec::new();

    for (idx, line) in content.lines().enumerate() {
        let line_no = idx + 1;
        let line_trimmed = line.trim();
        if line_trimmed.is_empty() {
            continue; // Skip empty lines
        }

        let parse_error = |reason: String| DataLoadError::ParseError {
            file: source.to_string(),
            line: line_no,
            reason,
        };

        // Split by "|"
        let mut parts = line_trimmed.split('|');

        let movie = parts
            .next()
            .ok_or_else(|| parse_error("Missing movie".to_string()))?;
        let rating = parts
            .next()
            .ok_or_else(|| parse_error("Missing rating".to_string()))?;
        let user_id = parts
            .next()
            .ok_or_else(|| parse_error("Missing user id".to_string()))?;

        let record = RatingRecord {
            movie: movie.to_string(),
            rating: rating
                .trim()
                .parse::<f64>()
                .map_err(|e| parse_error(format!("Invalid rating '{}': {}", rating.trim(), e)))?,
            user_id: user_id
                .trim()
                .parse::<UserId>()
                .map_err(|e| parse_error(format!("Invalid user id '{}': {}", user_id.trim(), e)))?,
        };

        records.push(record);
    }

    Ok(records)
}

/// Parse the genre file
///
/// Format: genre|ignored|movie
pub fn parse_genres(path: &Path) -> Result<MovieGenre> {
    let content = read_to_string_lossy(path)?;
    Ok(parse_genres_str(&content))
}

/// Parse genre lines from in-memory text.
///
/// Lines without exactly three fields are skipped. A movie listed twice
/// keeps the genre from its last line.
pub fn parse_genres_str(content: &str) -> MovieGenre {
    let mut movie_genres = MovieGenre::new();

    for (idx, line) in content.lines().enumerate() {
        let fields: Vec<&str> = line.trim().split('|').collect();
        let [genre, _, movie] = fields.as_slice() else {
            debug!(
                line = idx + 1,
                fields = fields.len(),
                "Skipping genre line without exactly 3 fields"
            );
            continue;
        };

        movie_genres.insert(movie.trim().to_string(), genre.trim().to_string());
    }

    movie_genres
}
