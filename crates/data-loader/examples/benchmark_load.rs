use data_loader::Dataset;
use std::path::Path;
use std::time::Instant;

fn main() {
    let ratings_path = Path::new("data/movieRatingSample.txt");
    let genres_path = Path::new("data/genreMovieSample.txt");

    println!("Loading ratings and genres...\n");

    let start = Instant::now();
    let dataset = Dataset::load_from_files(ratings_path, genres_path)
        .expect("Failed to load dataset");
    let elapsed = start.elapsed();

    let (movies, genre_tagged, ratings) = dataset.counts();

    println!("\n=== Load Complete ===");
    println!("Time taken: {:?}", elapsed);
    println!("Movies rated: {}", movies);
    println!("Movies with a genre: {}", genre_tagged);
    println!("Ratings: {}", ratings);
    println!("\nPerformance: {:.0} ratings/second",
             ratings as f64 / elapsed.as_secs_f64());
}
