//! Seeds the clients table with synthetic contact records.
//!
//! Run with:
//! ```
//! cargo run -p seed-data --bin seed -- 25
//! ```

use clap::Parser;
use seed_data::config::DatabaseConfig;
use seed_data::db::{self, Seeder};
use seed_data::generators::ClientGenerator;
use tracing_subscriber::EnvFilter;

/// Inserts synthetic client and supplier records into the clients table.
#[derive(Parser)]
#[command(name = "seed")]
struct Args {
    /// Number of records to insert.
    #[arg(default_value_t = 10)]
    count: usize,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    dotenvy::dotenv().ok();

    let args = Args::parse();
    let config = DatabaseConfig::from_env()?;

    let pool = db::connect(&config).await?;

    let mut rng = rand::thread_rng();
    let clients = ClientGenerator::new().generate_batch(args.count, &mut rng);

    let seeder = Seeder::new(pool);
    let inserted = seeder.seed_clients(&clients).await?;

    tracing::info!("Seed completed!");
    tracing::info!("  Clients: {}", inserted);

    Ok(())
}
