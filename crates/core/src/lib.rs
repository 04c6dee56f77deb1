//! `stockroom-core`: shared building blocks.
//!
//! Error model and configuration; no IO beyond reading environment variables.

pub mod config;
pub mod error;

pub use config::{ConfigError, InventoryConfig};
pub use error::{DomainError, DomainResult};
