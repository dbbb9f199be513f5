//! Management CLI for the review trust engine.
//!
//! Covers schema management, datapack ingestion and quick read-side checks.
//! Results print as JSON so output can be piped into other tooling.

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use engine_core::domains::chains::Chain;
use engine_core::domains::ingest::{upload_places, upload_reviews};
use engine_core::domains::places::{Place, PlaceView};
use engine_core::domains::reviews::Review;
use engine_core::domains::search::search_by_name;
use engine_core::domains::users::User;
use engine_core::kernel::EngineDeps;
use engine_core::Config;

#[derive(Parser)]
#[command(name = "engine_cli")]
#[command(about = "Review trust engine management CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Apply pending database migrations
    Migrate,

    /// Drop all engine tables and the migration ledger
    Reset,

    /// Ingest a places datapack (JSON array)
    UploadPlaces { path: PathBuf },

    /// Score and ingest a reviews datapack (JSON array)
    UploadReviews { path: PathBuf },

    /// Fuzzy-search stored places by name
    Search {
        query: String,
        /// Only consider places whose address mentions this city
        #[arg(long)]
        city: Option<String>,
        #[arg(long, default_value_t = 10)]
        limit: usize,
    },

    /// Print the detail view of one place
    ShowPlace {
        id: String,
        /// Review page size; defaults to REVIEW_LIMIT_DEFAULT
        #[arg(long)]
        reviews: Option<i64>,
    },

    /// Print row counts per table
    Tables,
}

#[derive(Serialize)]
struct TableCounts {
    chains: i64,
    places: i64,
    users: i64,
    reviews: i64,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,engine_core=debug,sqlx=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();
    let config = Config::from_env().context("Failed to load configuration")?;

    match cli.command {
        Commands::Migrate => cmd_migrate(&config).await,
        Commands::Reset => cmd_reset(&config).await,
        Commands::UploadPlaces { path } => cmd_upload_places(&config, &path).await,
        Commands::UploadReviews { path } => cmd_upload_reviews(&config, &path).await,
        Commands::Search { query, city, limit } => {
            cmd_search(&config, &query, city.as_deref(), limit).await
        }
        Commands::ShowPlace { id, reviews } => cmd_show_place(&config, &id, reviews).await,
        Commands::Tables => cmd_tables(&config).await,
    }
}

async fn get_pool(config: &Config) -> Result<PgPool> {
    PgPoolOptions::new()
        .max_connections(10)
        .connect(&config.database_url)
        .await
        .context("Failed to connect to database")
}

async fn cmd_migrate(config: &Config) -> Result<()> {
    let pool = get_pool(config).await?;
    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .context("Failed to run migrations")?;
    tracing::info!("Migrations complete");
    Ok(())
}

async fn cmd_reset(config: &Config) -> Result<()> {
    let pool = get_pool(config).await?;
    for table in ["reviews", "places", "chains", "users", "_sqlx_migrations"] {
        sqlx::query(&format!("DROP TABLE IF EXISTS {} CASCADE", table))
            .execute(&pool)
            .await
            .with_context(|| format!("Failed to drop table {}", table))?;
    }
    tracing::info!("All tables dropped");
    Ok(())
}

async fn cmd_upload_places(config: &Config, path: &Path) -> Result<()> {
    let pool = get_pool(config).await?;
    let deps = EngineDeps::from_config(config, &pool)?;
    let report = upload_places(path, &deps).await?;
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

async fn cmd_upload_reviews(config: &Config, path: &Path) -> Result<()> {
    let pool = get_pool(config).await?;
    let deps = EngineDeps::from_config(config, &pool)?;
    let report = upload_reviews(path, &deps).await?;
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

async fn cmd_search(config: &Config, query: &str, city: Option<&str>, limit: usize) -> Result<()> {
    let pool = get_pool(config).await?;
    let results = search_by_name(query, city, limit, &pool).await?;
    println!("{}", serde_json::to_string_pretty(&results)?);
    Ok(())
}

async fn cmd_show_place(config: &Config, id: &str, reviews: Option<i64>) -> Result<()> {
    let pool = get_pool(config).await?;
    let limit = reviews.unwrap_or(config.review_limit_default);
    match PlaceView::project(id, limit, &pool).await? {
        Some(view) => {
            println!("{}", serde_json::to_string_pretty(&view)?);
            Ok(())
        }
        None => bail!("place not found: {}", id),
    }
}

async fn cmd_tables(config: &Config) -> Result<()> {
    let pool = get_pool(config).await?;
    let counts = TableCounts {
        chains: Chain::count(&pool).await?,
        places: Place::count(&pool).await?,
        users: User::count(&pool).await?,
        reviews: Review::count(&pool).await?,
    };
    println!("{}", serde_json::to_string_pretty(&counts)?);
    Ok(())
}
