use analytics::{
    average_ratings, favorite_genre, filter_above, genre_popularity, genre_preferences,
    group_by_user, invert_genres, recommend, top_in_genre, top_n, DEFAULT_GENRE_TOP_N,
    DEFAULT_THRESHOLD, DEFAULT_TOP_N,
};
use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use data_loader::{AverageRating, Dataset, OrderedMap, UserId};
use serde::Serialize;
use std::path::PathBuf;
use std::time::Instant;
use tracing_subscriber::EnvFilter;

/// movie-stats - Movie rating statistics and genre-based recommendations
#[derive(Parser)]
#[command(name = "movie-stats")]
#[command(about = "Movie rating statistics and genre-based recommendations", long_about = None)]
struct Cli {
    /// Ratings file, one `movie|rating|user` record per line
    #[arg(long, default_value = "data/movieRatingSample.txt")]
    ratings: PathBuf,

    /// Genre file, one `genre|ignored|movie` record per line
    #[arg(long, default_value = "data/genreMovieSample.txt")]
    genres: PathBuf,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the highest-rated movies
    Top {
        /// Number of movies to show
        #[arg(long, default_value_t = DEFAULT_TOP_N)]
        limit: usize,
    },

    /// Show every movie rated at or above a threshold
    Filter {
        /// Minimum average rating
        #[arg(long, default_value_t = DEFAULT_THRESHOLD)]
        threshold: f64,
    },

    /// Show the highest-rated movies in one genre
    Genre {
        /// Genre name (exact match)
        #[arg(long)]
        name: String,

        /// Number of movies to show
        #[arg(long, default_value_t = DEFAULT_GENRE_TOP_N)]
        limit: usize,
    },

    /// Rank genres by the average rating of their movies
    Genres {
        /// Number of genres to show
        #[arg(long, default_value_t = DEFAULT_GENRE_TOP_N)]
        limit: usize,
    },

    /// Show a user's favorite genre and per-genre averages
    Favorite {
        /// User ID to inspect
        #[arg(long, allow_negative_numbers = true)]
        user_id: UserId,
    },

    /// Recommend unrated movies from a user's favorite genre
    Recommend {
        /// User ID to get recommendations for
        #[arg(long, allow_negative_numbers = true)]
        user_id: UserId,
    },
}

fn main() -> Result<()> {
    // Logs go to stderr so JSON on stdout stays parseable
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let start = Instant::now();
    let dataset = Dataset::load_from_files(&cli.ratings, &cli.genres).with_context(|| {
        format!(
            "Failed to load ratings from {} and genres from {}",
            cli.ratings.display(),
            cli.genres.display()
        )
    })?;
    tracing::info!(elapsed = ?start.elapsed(), "Dataset ready");

    let averages = average_ratings(dataset.movie_ratings());
    let format = cli.format;

    // Dispatch to appropriate command handler
    match cli.command {
        Commands::Top { limit } => print_ranking(
            &format!("Top {} movies", limit),
            &top_n(&averages, limit),
            1,
            format,
        ),
        Commands::Filter { threshold } => print_ranking(
            &format!("Movies rated {:.1} or higher", threshold),
            &filter_above(&averages, threshold),
            1,
            format,
        ),
        Commands::Genre { name, limit } => handle_genre(&dataset, &averages, &name, limit, format),
        Commands::Genres { limit } => {
            let genre_index = invert_genres(dataset.movie_genres());
            print_ranking(
                &format!("Top {} genres by average rating", limit),
                &genre_popularity(&genre_index, &averages, limit),
                2,
                format,
            )
        }
        Commands::Favorite { user_id } => handle_favorite(&dataset, user_id, format),
        Commands::Recommend { user_id } => handle_recommend(&dataset, &averages, user_id, format),
    }
}

/// Handle the 'genre' command
fn handle_genre(
    dataset: &Dataset,
    averages: &AverageRating,
    name: &str,
    limit: usize,
    format: OutputFormat,
) -> Result<()> {
    let genre_index = invert_genres(dataset.movie_genres());
    if !genre_index.contains_key(name) {
        tracing::warn!(genre = name, "Unknown genre");
    }

    print_ranking(
        &format!("Top {} {} movies", limit, name),
        &top_in_genre(name, &genre_index, averages, limit),
        1,
        format,
    )
}

/// JSON shape of the 'favorite' command
#[derive(Serialize)]
struct FavoriteReport<'a> {
    user_id: UserId,
    favorite_genre: Option<&'a str>,
    genre_averages: Option<&'a OrderedMap<String, f64>>,
}

/// Handle the 'favorite' command
fn handle_favorite(dataset: &Dataset, user_id: UserId, format: OutputFormat) -> Result<()> {
    let user_ratings = group_by_user(dataset.records());
    let favorite = favorite_genre(user_id, &user_ratings, dataset.movie_genres());
    let preferences = genre_preferences(user_id, &user_ratings, dataset.movie_genres());

    if format == OutputFormat::Json {
        let report = FavoriteReport {
            user_id,
            favorite_genre: favorite.as_deref(),
            genre_averages: preferences.as_ref(),
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("{}", format!("User ID: {}", user_id).bold().blue());
    match (favorite, preferences) {
        (Some(genre), Some(preferences)) => {
            println!("{}Favorite genre: {}", "• ".green(), genre.bold());
            println!("Genre averages:");
            for (genre, avg) in &preferences {
                println!("  - {}: {:.2}", genre, avg);
            }
        }
        _ => println!("{}", "  No ratings in any known genre".dimmed()),
    }
    Ok(())
}

/// Handle the 'recommend' command
fn handle_recommend(
    dataset: &Dataset,
    averages: &AverageRating,
    user_id: UserId,
    format: OutputFormat,
) -> Result<()> {
    let user_ratings = group_by_user(dataset.records());
    let recommendations = recommend(user_id, &user_ratings, dataset.movie_genres(), averages);

    print_ranking(
        &format!("Recommendations for user {}", user_id),
        &recommendations,
        1,
        format,
    )
}

/// Print a ranked mapping as a numbered list or as a JSON object
fn print_ranking(
    title: &str,
    ranking: &OrderedMap<String, f64>,
    precision: usize,
    format: OutputFormat,
) -> Result<()> {
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(ranking)?),
        OutputFormat::Text => {
            println!("{}", title.bold().blue());
            if ranking.is_empty() {
                println!("{}", "  (no results)".dimmed());
            }
            for (idx, (name, score)) in ranking.iter().enumerate() {
                println!(
                    "{}. {}  {:.*}",
                    (idx + 1).to_string().green(),
                    name,
                    precision,
                    score
                );
            }
        }
    }
    Ok(())
}
