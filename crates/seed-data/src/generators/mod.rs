//! Entity generators for seed data.
//!
//! [`ClientGenerator`] produces company contact records ready for
//! insertion into the clients table.

pub mod client;

pub use client::{ClientGenConfig, ClientGenerator, ContactType, GeneratedClient};
