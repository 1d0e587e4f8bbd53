//! Synthetic contact data seeding for the clients table.
//!
//! This crate generates realistic company contact records (clients and
//! suppliers) and inserts them into the database in a single transaction.
//! It exists to populate development and demo environments; it never reads
//! or mutates existing rows.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use seed_data::{ClientGenerator, DatabaseConfig, Seeder, db};
//!
//! let config = DatabaseConfig::from_env()?;
//! let pool = db::connect(&config).await?;
//!
//! let mut rng = rand::thread_rng();
//! let clients = ClientGenerator::new().generate_batch(25, &mut rng);
//!
//! let inserted = Seeder::new(pool).seed_clients(&clients).await?;
//! ```

pub mod config;
pub mod db;
pub mod generators;

pub use config::DatabaseConfig;
pub use db::{SeedError, Seeder};
pub use generators::{ClientGenConfig, ClientGenerator, ContactType, GeneratedClient};
