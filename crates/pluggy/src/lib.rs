//! Pluggy API client for Rust.
//!
//! This crate provides a typed client for the [Pluggy](https://pluggy.ai)
//! financial-data aggregation API: connector catalog, item (connection)
//! lifecycle, and account, transaction, investment, identity and category
//! retrieval from banking institutions.
//!
//! # Usage
//!
//! ```rust,ignore
//! use pluggy::{ConnectorFilters, PluggyClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = PluggyClient::from_env()?;
//!
//!     // Browse the connector catalog
//!     let connectors = client
//!         .fetch_connectors(Some(&ConnectorFilters {
//!             sandbox: Some(true),
//!             ..Default::default()
//!         }))
//!         .await?;
//!
//!     // Start a connection and retrieve its accounts
//!     let item = client.create_item(2, &credentials).await?;
//!     let accounts = client.fetch_accounts(&item.id, None).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Environment Variables
//!
//! [`PluggyClient::from_env`] reads `PLUGGY_API_KEY` from your environment
//! or `.env` file:
//!
//! ```bash
//! PLUGGY_API_KEY=your_api_key_here
//! ```
//!
//! # Errors
//!
//! Every call makes exactly one HTTP attempt. A non-200 status with a JSON
//! body surfaces as [`PluggyError::Api`] carrying that body verbatim; a
//! non-JSON body surfaces as [`PluggyError::InvalidResponse`] carrying the
//! raw text. Nothing is retried or cached.

mod client;
mod error;
mod query;
mod types;

pub use client::PluggyClient;
pub use error::PluggyError;
pub use types::*;

/// Result type for Pluggy operations.
pub type Result<T> = std::result::Result<T, PluggyError>;
