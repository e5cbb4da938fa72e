//! CLI administration tool for company-registry.
//!
//! Provides commands for inspecting and managing companies and checking the
//! database without going through the HTTP API.
//!
//! # Usage
//!
//! ```bash
//! # List companies with their employee counts
//! cargo run --bin admin -- company list
//!
//! # Create a company
//! cargo run --bin admin -- company create --name "OOCL"
//!
//! # Delete a company (asks for confirmation)
//! cargo run --bin admin -- company delete 3
//!
//! # View statistics
//! cargo run --bin admin -- stats
//!
//! # Check database connection
//! cargo run --bin admin -- db check
//! ```
//!
//! # Environment Variables
//!
//! Same database variables as the server (`DATABASE_URL` or `DB_*`).

use company_registry::AppState;
use company_registry::config::{self, mask_connection_string};
use company_registry::server::{build_state, connect_pool};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::{Confirm, Input};
use sqlx::PgPool;

/// CLI tool for managing company-registry.
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
    /// Manage companies
    Company {
        #[command(subcommand)]
        action: CompanyAction,
    },

    /// Show statistics
    Stats,

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// Company management subcommands.
#[derive(Subcommand)]
enum CompanyAction {
    /// List all companies
    List,

    /// Create a company
    Create {
        /// Company name (prompted if omitted)
        #[arg(short, long)]
        name: Option<String>,
    },

    /// Delete a company; its employees are kept without a company
    Delete {
        /// Company ID
        id: i64,

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
    let pool = connect_pool(&config).await.with_context(|| {
        format!(
            "Cannot reach {}",
            mask_connection_string(&config.database_url)
        )
    })?;

    match cli.command {
        Commands::Company { action } => handle_company_action(action, build_state(pool)).await?,
        Commands::Stats => handle_stats(build_state(pool)).await?,
        Commands::Db { action } => handle_db_action(action, &pool).await?,
    }

    Ok(())
}

/// Dispatches company management commands.
async fn handle_company_action(action: CompanyAction, state: AppState) -> Result<()> {
    match action {
        CompanyAction::List => list_companies(&state).await,
        CompanyAction::Create { name } => create_company(&state, name).await,
        CompanyAction::Delete { id, yes } => delete_company(&state, id, yes).await,
    }
}

/// Prints all companies.
///
/// # Output Format
///
/// ```text
/// Companies
///
///   ID    Name                                     Employees
///   ───────────────────────────────────────────────────────────
///   1     OOCL                                     2
///   2     Thoughtworks                             0
/// ```
async fn list_companies(state: &AppState) -> Result<()> {
    println!("{}", "Companies".bright_blue().bold());
    println!();

    let companies = state
        .company_service
        .list_companies(None)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to list companies: {}", e))?;

    if companies.is_empty() {
        println!("{}", "  No companies found".yellow());
        println!();
        println!(
            "  Create one with: {} admin company create",
            "cargo run --bin".bright_cyan()
        );
        return Ok(());
    }

    println!(
        "  {:<5} {:<40} {:<10}",
        "ID".bright_white().bold(),
        "Name".bright_white().bold(),
        "Employees".bright_white().bold()
    );
    println!("  {}", "─".repeat(59).bright_black());

    for summary in &companies {
        println!(
            "  {:<5} {:<40} {}",
            summary.company.id.to_string().bright_black(),
            summary.company.name.cyan(),
            summary.employees_count.to_string().bright_green()
        );
    }

    println!();
    println!(
        "  Total: {}",
        companies.len().to_string().bright_white().bold()
    );
    println!();

    Ok(())
}

/// Creates a company, prompting for the name when not given.
async fn create_company(state: &AppState, name: Option<String>) -> Result<()> {
    let name = match name {
        Some(n) => n,
        None => Input::new().with_prompt("Company name").interact_text()?,
    };

    let summary = state
        .company_service
        .create_company(name)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to create company: {}", e))?;

    println!(
        "{} {} (id {})",
        "Created".green().bold(),
        summary.company.name.cyan(),
        summary.company.id.to_string().bright_white()
    );

    Ok(())
}

/// Deletes a company after confirmation (default: No).
async fn delete_company(state: &AppState, id: i64, skip_confirm: bool) -> Result<()> {
    let details = state
        .company_service
        .get_company(id)
        .await
        .map_err(|e| anyhow::anyhow!("{}", e))?;

    println!("  Company:   {}", details.company.name.cyan());
    println!("  ID:        {}", details.company.id.to_string().bright_black());
    println!(
        "  Employees: {}",
        details.employees.len().to_string().bright_white()
    );
    println!();

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt("Delete this company?")
            .default(false)
            .interact()?;

        if !confirmed {
            println!("{}", "Cancelled".red());
            return Ok(());
        }
    }

    state
        .company_service
        .delete_company(id)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to delete company: {}", e))?;

    println!("{}", "Company deleted".green().bold());

    Ok(())
}

/// Displays company and employee counts.
async fn handle_stats(state: AppState) -> Result<()> {
    println!("{}", "Statistics".bright_blue().bold());
    println!();

    let (companies, active, inactive) = tokio::try_join!(
        state.company_service.count_companies(),
        state.employee_service.count_employees(true),
        state.employee_service.count_employees(false),
    )
    .map_err(|e| anyhow::anyhow!("Failed to load statistics: {}", e))?;

    println!(
        "  Companies:          {}",
        companies.to_string().bright_green().bold()
    );
    println!(
        "  Active employees:   {}",
        active.to_string().bright_green().bold()
    );
    println!(
        "  Deleted employees:  {}",
        inactive.to_string().bright_black()
    );
    println!();

    Ok(())
}

/// Handles database diagnostic commands.
async fn handle_db_action(action: DbAction, pool: &PgPool) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "Checking database connection...".bright_blue());

            sqlx::query("SELECT 1").fetch_one(pool).await?;

            println!("{}", "Database connection OK".green().bold());
        }
        DbAction::Info => {
            println!("{}", "Database Information".bright_blue().bold());
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
