//! Integration tests for the analytics crate.
//!
//! These tests run every query against a Dataset parsed from text, the
//! same way the CLI does after loading the files.

use analytics::*;
use data_loader::parser::{parse_genres_str, parse_ratings_str};
use data_loader::{Dataset, MovieRatings, OrderedMap};

const RATINGS: &str = "\
Toy Story|5|1
Heat|4|1
Airplane|5|1
Toy Story|3|2
Fargo|5|2
Heat|2|2
Clue|4|3
Spaceballs|3|3
Toy Story|4|3
Alien|5|4
Airplane|4|4
Fargo|4|4
";

const GENRES: &str = "\
Animation|1995|Toy Story
Crime|1995|Heat
Comedy|1980|Airplane
Crime|1996|Fargo
Comedy|1985|Clue
Comedy|1987|Spaceballs
Horror|1979|Alien
malformed line
Horror|1982|The Thing
";

fn create_test_dataset() -> Dataset {
    let records = parse_ratings_str(RATINGS, "ratings").unwrap();
    let genres = parse_genres_str(GENRES);
    Dataset::from_parts(records, genres)
}

fn entries(map: &OrderedMap<String, f64>) -> Vec<(&str, f64)> {
    map.iter().map(|(k, &v)| (k.as_str(), v)).collect()
}

#[test]
fn test_averages_and_top_movies() {
    let dataset = create_test_dataset();
    let averages = average_ratings(dataset.movie_ratings());

    assert_eq!(averages.get("Toy Story"), Some(&4.0));
    assert_eq!(averages.get("Heat"), Some(&3.0));
    assert_eq!(averages.get("Fargo"), Some(&4.5));

    let top = top_n(&averages, 3);
    // Alien (5.0), then Fargo and Airplane tie at 4.5: Airplane was seen first
    assert_eq!(entries(&top), vec![("Alien", 5.0), ("Airplane", 4.5), ("Fargo", 4.5)]);
}

#[test]
fn test_filter_above_default_threshold() {
    let dataset = create_test_dataset();
    let averages = average_ratings(dataset.movie_ratings());

    let filtered = filter_above(&averages, DEFAULT_THRESHOLD);

    // Every movie averages at least 3.0 here
    assert_eq!(filtered.len(), averages.len());
    assert_eq!(filtered.first().map(|(k, _)| k.as_str()), Some("Alien"));
    assert_eq!(filtered.keys().last().map(String::as_str), Some("Spaceballs"));
}

#[test]
fn test_genre_queries() {
    let dataset = create_test_dataset();
    let averages = average_ratings(dataset.movie_ratings());
    let genre_index = invert_genres(dataset.movie_genres());

    let comedy = top_in_genre("Comedy", &genre_index, &averages, DEFAULT_GENRE_TOP_N);
    assert_eq!(
        entries(&comedy),
        vec![("Airplane", 4.5), ("Clue", 4.0), ("Spaceballs", 3.0)]
    );

    // Horror only has Alien rated; The Thing is skipped
    assert_eq!(genre_average("Horror", &genre_index, &averages), 5.0);

    let popularity = genre_popularity(&genre_index, &averages, DEFAULT_GENRE_TOP_N);
    let genres: Vec<_> = popularity.keys().map(String::as_str).collect();
    assert_eq!(genres, vec!["Horror", "Animation", "Comedy", "Crime"]);
}

#[test]
fn test_user_profile_and_recommendations() {
    let dataset = create_test_dataset();
    let averages = average_ratings(dataset.movie_ratings());
    let user_ratings = group_by_user(dataset.records());

    // User 3 rated Clue 4, Spaceballs 3 (Comedy 3.5) and Toy Story 4 (Animation 4.0)
    assert_eq!(
        favorite_genre(3, &user_ratings, dataset.movie_genres()).as_deref(),
        Some("Animation")
    );

    // User 1: Animation 5, Crime 4, Comedy 5; Animation was reached first
    assert_eq!(
        favorite_genre(1, &user_ratings, dataset.movie_genres()).as_deref(),
        Some("Animation")
    );

    // User 4: Horror (5.0) is the favorite
    let recs = recommend(4, &user_ratings, dataset.movie_genres(), &averages);
    assert!(recs.is_empty(), "Alien is rated and The Thing has no ratings");

    // User 2: Animation 3, Crime (5 + 2) / 2 = 3.5 → Crime, but both are rated
    assert!(recommend(2, &user_ratings, dataset.movie_genres(), &averages).is_empty());
}

#[test]
fn test_recommendation_from_favorite_genre() {
    let mut dataset = create_test_dataset();
    // User 5 loves crime and has only seen Heat
    dataset.insert_rating(data_loader::RatingRecord::new("Heat", 5.0, 5));
    dataset.insert_rating(data_loader::RatingRecord::new("Clue", 1.0, 5));

    let averages = average_ratings(dataset.movie_ratings());
    let user_ratings = group_by_user(dataset.records());

    let recs = recommend(5, &user_ratings, dataset.movie_genres(), &averages);
    assert_eq!(entries(&recs), vec![("Fargo", 4.5)]);
}

#[test]
fn test_end_to_end_first_seen_tie_break() {
    let ratings: MovieRatings = [("A", vec![5.0, 3.0]), ("B", vec![4.0, 4.0, 4.0])]
        .into_iter()
        .map(|(movie, values)| (movie.to_string(), values))
        .collect();

    let averages = average_ratings(&ratings);
    assert_eq!(entries(&averages), vec![("A", 4.0), ("B", 4.0)]);

    let top = top_n(&averages, 1);
    assert_eq!(entries(&top), vec![("A", 4.0)]);
}

#[test]
fn test_padded_movie_name_does_not_match_genre() {
    let records = parse_ratings_str("Heat |4|1\nHeat|3|2\n", "ratings").unwrap();
    let genres = parse_genres_str("Crime|x|Heat\n");
    let dataset = Dataset::from_parts(records, genres);
    let user_ratings = group_by_user(dataset.records());

    assert_eq!(favorite_genre(1, &user_ratings, dataset.movie_genres()), None);
    assert_eq!(
        favorite_genre(2, &user_ratings, dataset.movie_genres()).as_deref(),
        Some("Crime")
    );
}
