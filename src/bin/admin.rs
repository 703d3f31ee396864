//! CLI administration tool for shortlink.
//!
//! Runs the shortening service and inspection queries directly against the
//! database, without going through the HTTP API.
//!
//! # Usage
//!
//! ```bash
//! # Shorten a URL
//! cargo run --bin admin -- shorten https://example.com/some/long/path
//!
//! # Resolve a key
//! cargo run --bin admin -- resolve NGVmMjk
//!
//! # Show the most recent mappings
//! cargo run --bin admin -- recent --limit 20
//!
//! # Check database connection
//! cargo run --bin admin -- db check
//! ```
//!
//! # Environment Variables
//!
//! Same as the server; see [`shortlink::config`].

use shortlink::AppError;
use shortlink::config::{self, Config};
use shortlink::infrastructure::persistence::PgUrlMappingRepository;
use shortlink::server::{build_state, connect_pool};

use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::*;
use sqlx::PgPool;
use std::sync::Arc;

/// CLI tool for managing shortlink.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level command groups.
#[derive(Subcommand)]
enum Commands {
    /// Shorten a long URL
    Shorten {
        /// Absolute URL to shorten
        long_url: String,
    },

    /// Resolve an encoded key to its long URL
    Resolve {
        /// Encoded key, e.g. NGVmMjk
        encoded_key: String,
    },

    /// List the most recently created mappings
    Recent {
        /// Number of mappings to show
        #[arg(short, long, default_value_t = 10)]
        limit: i64,
    },

    /// Show mapping count
    Stats,

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check database connection
    Check,

    /// Show database info
    Info,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = config::load_from_env()?;
    let pool = Arc::new(connect_pool(&config).await?);

    match cli.command {
        Commands::Shorten { long_url } => shorten(pool, &config, &long_url).await?,
        Commands::Resolve { encoded_key } => resolve(pool, &config, &encoded_key).await?,
        Commands::Recent { limit } => recent(repository(pool, &config), limit).await?,
        Commands::Stats => stats(repository(pool, &config)).await?,
        Commands::Db { action } => handle_db_action(action, &pool).await?,
    }

    Ok(())
}

fn repository(pool: Arc<PgPool>, config: &Config) -> PgUrlMappingRepository {
    PgUrlMappingRepository::new(pool, config.query_timeout())
}

/// Shortens a URL through the same service the HTTP API uses.
async fn shorten(pool: Arc<PgPool>, config: &Config, long_url: &str) -> Result<()> {
    let state = build_state(pool, config);

    let short_url = state
        .shortener_service
        .shorten(long_url)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to shorten URL: {}", e))?;

    println!("{}", "✅ Short URL ready".green().bold());
    println!("  Long:  {}", long_url.cyan());
    println!("  Short: {}", short_url.as_str().bright_yellow().bold());

    Ok(())
}

/// Looks up the long URL for a key.
async fn resolve(pool: Arc<PgPool>, config: &Config, encoded_key: &str) -> Result<()> {
    let state = build_state(pool, config);

    match state.shortener_service.retrieve(encoded_key).await {
        Ok(long_url) => {
            println!("  {} → {}", encoded_key.cyan(), long_url.as_str().bright_white());
        }
        Err(AppError::NotFound { .. }) => {
            println!("{}", format!("⚠️  Key {} not found", encoded_key).yellow());
        }
        Err(e) => anyhow::bail!("Failed to resolve key: {}", e),
    }

    Ok(())
}

/// Prints the newest mappings.
///
/// # Output Format
///
/// ```text
///   Key      Long URL
///   ──────────────────────────────────────
///   NGVmMjk  https://example.com/some/long/path
/// ```
async fn recent(repo: PgUrlMappingRepository, limit: i64) -> Result<()> {
    let mappings = repo
        .recent(limit)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to list mappings: {}", e))?;

    if mappings.is_empty() {
        println!("{}", "  No mappings found".yellow());
        return Ok(());
    }

    println!(
        "  {:<8} {}",
        "Key".bright_white().bold(),
        "Long URL".bright_white().bold()
    );
    println!("  {}", "─".repeat(60).bright_black());

    for mapping in &mappings {
        println!("  {:<8} {}", mapping.encoded_key.cyan(), mapping.long_url);
    }

    println!();

    Ok(())
}

/// Displays the number of stored mappings.
async fn stats(repo: PgUrlMappingRepository) -> Result<()> {
    let count = repo
        .count()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to count mappings: {}", e))?;

    println!("{}", "📊 Statistics".bright_blue().bold());
    println!();
    println!("  Mappings: {}", count.to_string().bright_green().bold());
    println!();

    Ok(())
}

/// Handles database diagnostic commands.
async fn handle_db_action(action: DbAction, pool: &PgPool) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "🔍 Checking database connection...".bright_blue());

            sqlx::query("SELECT 1").fetch_one(pool).await?;

            println!("{}", "✅ Database connection OK".green().bold());
        }
        DbAction::Info => {
            let version: String = sqlx::query_scalar("SELECT version()")
                .fetch_one(pool)
                .await?;

            println!("  PostgreSQL: {}", version.bright_white());
        }
    }

    Ok(())
}
