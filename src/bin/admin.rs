//! CLI administration tool for the delivery service.
//!
//! Runs maintenance operations directly against the database, without
//! going through the HTTP API.
//!
//! # Usage
//!
//! ```bash
//! # Check database connection
//! cargo run --bin admin -- db check
//!
//! # Row counts per table
//! cargo run --bin admin -- db info
//!
//! # Price a delivery without storing it
//! cargo run --bin admin -- quote --distance 300 --weight 60 --rate-km 2 --rate-kg 1 --urgent
//!
//! # Delete a client (asks for confirmation)
//! cargo run --bin admin -- client remove 42
//!
//! # Recompute the prices of every delivery of an order
//! cargo run --bin admin -- order reprice 7
//! ```
//!
//! # Environment Variables
//!
//! - `DATABASE_URL` (or the `DB_*` components): PostgreSQL connection

use delivery_service::config::{Config, mask_connection_string};
use delivery_service::prelude::*;
use delivery_service::server::connect_pool;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Confirm;
use rust_decimal::Decimal;
use sqlx::PgPool;
use std::sync::Arc;

/// CLI tool for managing the delivery service.
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
    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },

    /// Price a delivery from raw inputs (nothing is stored)
    Quote {
        /// Distance in km
        #[arg(long)]
        distance: Decimal,

        /// Cargo weight in kg
        #[arg(long)]
        weight: Decimal,

        /// Base rate per km
        #[arg(long)]
        rate_km: Decimal,

        /// Base rate per kg
        #[arg(long)]
        rate_kg: Decimal,

        /// Urgent delivery (20% surcharge)
        #[arg(long)]
        urgent: bool,
    },

    /// Client maintenance
    Client {
        #[command(subcommand)]
        action: ClientAction,
    },

    /// Order maintenance
    Order {
        #[command(subcommand)]
        action: OrderAction,
    },
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check database connection
    Check,

    /// Show server version and row counts
    Info,
}

#[derive(Subcommand)]
enum ClientAction {
    /// Delete a client that has no orders
    Remove {
        id: i64,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },
}

#[derive(Subcommand)]
enum OrderAction {
    /// Recompute every delivery of an order from its stored fields
    Reprice { id: i64 },
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    if let Commands::Quote {
        distance,
        weight,
        rate_km,
        rate_kg,
        urgent,
    } = cli.command
    {
        let delivery_type = if urgent {
            DeliveryType::Urgent
        } else {
            DeliveryType::Normal
        };
        return print_quote(PricingInput {
            distance_km: distance,
            weight_kg: weight,
            rate_per_km: rate_km,
            rate_per_kg: rate_kg,
            delivery_type,
        });
    }

    let config = Config::from_env()?;
    let pool = connect_pool(&config).await?;

    match cli.command {
        Commands::Db { action } => handle_db_action(action, &pool, &config).await?,
        Commands::Client { action } => handle_client_action(action, &pool).await?,
        Commands::Order { action } => handle_order_action(action, &pool).await?,
        Commands::Quote { .. } => {}
    }

    pool.close().await;
    Ok(())
}

/// Prints the cost breakdown of a delivery.
fn print_quote(input: PricingInput) -> Result<()> {
    let quote = quote(&input).context("Cannot price delivery")?;

    println!("{}", "Delivery quote".bright_blue().bold());
    println!();
    println!("  Type:          {}", input.delivery_type.to_string().cyan());
    print_breakdown(&quote);
    println!();

    Ok(())
}

fn print_breakdown(quote: &Quote) {
    println!("  Distance cost: {}", quote.distance_cost);
    println!("  Weight cost:   {}", quote.weight_cost);
    println!("  Surcharge:     {}", quote.surcharge);
    println!("  Discount:      {}", quote.discount);
    println!("  Flat fee:      {}", quote.flat_fee);
    println!(
        "  Total:         {}",
        quote.total.to_string().bright_green().bold()
    );
}

/// Handles database diagnostic commands.
async fn handle_db_action(action: DbAction, pool: &PgPool, config: &Config) -> Result<()> {
    match action {
        DbAction::Check => {
            println!(
                "{} {}",
                "Checking database connection:".bright_blue(),
                mask_connection_string(&config.database_url).bright_black()
            );

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

            for (label, table) in [
                ("Clients", "cliente"),
                ("Orders", "pedidos"),
                ("Deliveries", "entregas"),
            ] {
                let count: i64 = sqlx::query_scalar(&format!("SELECT COUNT(*) FROM {table}"))
                    .fetch_one(pool)
                    .await
                    .with_context(|| format!("Failed to count {table}; are migrations applied?"))?;
                println!(
                    "  {:<12} {}",
                    format!("{label}:"),
                    count.to_string().bright_green().bold()
                );
            }
            println!();
        }
    }

    Ok(())
}

/// Dispatches client maintenance commands.
async fn handle_client_action(action: ClientAction, pool: &PgPool) -> Result<()> {
    let state = AppState::new(Arc::new(pool.clone()));

    match action {
        ClientAction::Remove { id, yes } => {
            let client = state.client_service.get_client(id).await?;

            println!("  Client: {}", client.name.cyan());
            println!("  CPF:    {}", client.tax_id.bright_black());
            println!();

            let confirmed = yes
                || Confirm::new()
                    .with_prompt("Delete this client?")
                    .default(false)
                    .interact()?;

            if !confirmed {
                println!("{}", "Cancelled".red());
                return Ok(());
            }

            state.client_service.delete_client(id).await?;
            println!("{}", "Client deleted".green().bold());
        }
    }

    Ok(())
}

/// Dispatches order maintenance commands.
async fn handle_order_action(action: OrderAction, pool: &PgPool) -> Result<()> {
    let state = AppState::new(Arc::new(pool.clone()));

    match action {
        OrderAction::Reprice { id } => {
            let repriced = state.order_service.reprice_order(id).await?;

            println!(
                "{} {}",
                "Repriced deliveries of order".bright_blue().bold(),
                repriced.order.id.to_string().cyan()
            );
            println!();

            if repriced.deliveries.is_empty() {
                println!("  {}", "No deliveries".bright_black());
            }
            for delivery in &repriced.deliveries {
                println!(
                    "  Delivery {} ({})",
                    delivery.id.to_string().cyan(),
                    delivery.delivery_type
                );
                print_breakdown(&delivery.quote());
                println!();
            }
        }
    }

    Ok(())
}
