//! CLI administration tool for link-shortener.
//!
//! Manages links and inspects the database without going through the HTTP API.
//!
//! # Usage
//!
//! ```bash
//! # List links, newest first
//! cargo run --bin admin -- links list
//!
//! # Create a link (random code, or --code for a custom one)
//! cargo run --bin admin -- links create https://example.com --code promo
//!
//! # Show one link with its click stats
//! cargo run --bin admin -- links show promo
//!
//! # Delete a link
//! cargo run --bin admin -- links delete promo
//!
//! # Totals and database checks
//! cargo run --bin admin -- stats
//! cargo run --bin admin -- db check
//! ```
//!
//! # Environment Variables
//!
//! Same database settings as the server (`DATABASE_URL` or `DB_*`).

use link_shortener::application::services::LinkService;
use link_shortener::config;
use link_shortener::domain::entities::Link;
use link_shortener::infrastructure::persistence::PgLinkRepository;
use link_shortener::server::connect_pool;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Confirm;
use sqlx::PgPool;
use std::sync::Arc;

/// CLI tool for managing link-shortener.
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
    /// Manage links
    Links {
        #[command(subcommand)]
        action: LinkAction,
    },

    /// Show totals
    Stats,

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// Link management subcommands.
#[derive(Subcommand)]
enum LinkAction {
    /// List all links, newest first
    List,

    /// Create a new link
    Create {
        /// Destination URL (absolute)
        url: String,

        /// Custom short code (random if omitted)
        #[arg(short, long)]
        code: Option<String>,
    },

    /// Show a single link with its click stats
    Show {
        /// Short code
        code: String,
    },

    /// Delete a link permanently
    Delete {
        /// Short code
        code: String,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
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
    let pool = connect_pool(&config).await?;

    let service = LinkService::new(Arc::new(PgLinkRepository::new(Arc::new(pool.clone()))))
        .with_code_length(config.code_length)
        .with_max_attempts(config.code_generation_attempts);

    match cli.command {
        Commands::Links { action } => handle_link_action(action, &service).await?,
        Commands::Stats => handle_stats(&service).await?,
        Commands::Db { action } => handle_db_action(action, &pool).await?,
    }

    Ok(())
}

/// Dispatches link management commands.
async fn handle_link_action(action: LinkAction, service: &LinkService) -> Result<()> {
    match action {
        LinkAction::List => list_links(service).await,
        LinkAction::Create { url, code } => create_link(service, url, code).await,
        LinkAction::Show { code } => show_link(service, &code).await,
        LinkAction::Delete { code, yes } => delete_link(service, &code, yes).await,
    }
}

/// Lists all links.
///
/// # Output Format
///
/// ```text
/// 🔗 Links
///
///   Code       Clicks   Last click         URL
///   ──────────────────────────────────────────────────────────────
///   promo      12       2025-01-15 10:30   https://example.com
///   aZ3kQ9     0        never              https://rust-lang.org
/// ```
async fn list_links(service: &LinkService) -> Result<()> {
    println!("{}", "🔗 Links".bright_blue().bold());
    println!();

    let links = service
        .list_links()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to list links: {}", e))?;

    if links.is_empty() {
        println!("{}", "  No links found".yellow());
        println!();
        println!(
            "  Create one with: {} admin links create <url>",
            "cargo run --bin".bright_cyan()
        );
        return Ok(());
    }

    println!(
        "  {:<12} {:<8} {:<18} {}",
        "Code".bright_white().bold(),
        "Clicks".bright_white().bold(),
        "Last click".bright_white().bold(),
        "URL".bright_white().bold()
    );
    println!("  {}", "─".repeat(75).bright_black());

    for link in &links {
        println!(
            "  {:<12} {:<8} {:<18} {}",
            link.code.cyan(),
            link.clicks.to_string().bright_green(),
            format_last_clicked(link).bright_black(),
            link.url
        );
    }

    println!();
    println!("  Total: {}", links.len().to_string().bright_white().bold());
    println!();

    Ok(())
}

/// Creates a link after checking that the URL is absolute.
async fn create_link(service: &LinkService, url: String, code: Option<String>) -> Result<()> {
    println!("{}", "✨ Create Link".bright_blue().bold());
    println!();

    url::Url::parse(&url).with_context(|| format!("Invalid URL format: {url}"))?;
    if url.chars().any(char::is_control) {
        anyhow::bail!("Invalid URL format: contains control characters");
    }

    let link = service
        .create_link(url, code)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to create link: {}", e))?;

    println!("{}", "✅ Link created successfully!".green().bold());
    println!();
    print_link(&link);

    Ok(())
}

/// Shows a single link with its click statistics.
async fn show_link(service: &LinkService, code: &str) -> Result<()> {
    let link = service
        .get_link(code)
        .await
        .map_err(|e| anyhow::anyhow!("Link '{}': {}", code, e))?;

    print_link(&link);

    Ok(())
}

/// Deletes a link, asking for confirmation unless `skip_confirm` is set.
async fn delete_link(service: &LinkService, code: &str, skip_confirm: bool) -> Result<()> {
    println!("{}", "🗑️  Delete Link".bright_blue().bold());
    println!();

    let link = service
        .get_link(code)
        .await
        .map_err(|e| anyhow::anyhow!("Link '{}': {}", code, e))?;

    print_link(&link);

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt("Delete this link? Its click history is lost.")
            .default(false)
            .interact()?;

        if !confirmed {
            println!("{}", "❌ Cancelled".red());
            return Ok(());
        }
    }

    service
        .delete_link(code)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to delete link: {}", e))?;

    println!();
    println!("{}", "✅ Link deleted".green().bold());
    println!();

    Ok(())
}

/// Displays link and click totals.
async fn handle_stats(service: &LinkService) -> Result<()> {
    println!("{}", "📊 Statistics".bright_blue().bold());
    println!();

    let (links, clicks) = service
        .totals()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to load totals: {}", e))?;

    println!("  Links:  {}", links.to_string().bright_green().bold());
    println!("  Clicks: {}", clicks.to_string().bright_green().bold());
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
            println!("{}", "ℹ️  Database Information".bright_blue().bold());
            println!();

            let version: String = sqlx::query_scalar("SELECT version()")
                .fetch_one(pool)
                .await?;

            println!("  PostgreSQL: {}", version.bright_white());
            println!();
        }
    }

    Ok(())
}

fn print_link(link: &Link) {
    println!("  Code:       {}", link.code.cyan().bold());
    println!("  URL:        {}", link.url.bright_white());
    println!("  Clicks:     {}", link.clicks.to_string().bright_green());
    println!("  Last click: {}", format_last_clicked(link));
    println!(
        "  Created:    {}",
        link.created_at.format("%Y-%m-%d %H:%M").to_string().bright_black()
    );
    println!();
}

fn format_last_clicked(link: &Link) -> String {
    link.last_clicked
        .map(|t| t.format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_else(|| "never".to_string())
}
