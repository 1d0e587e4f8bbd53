//! Database integration for seeding contact data.
//!
//! [`connect`] acquires the connection pool and the [`Seeder`] inserts
//! generated records in a single transaction.

mod seeder;

pub use seeder::{SeedError, Seeder, connect};
