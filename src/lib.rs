//! Hotel Service - booking administration backend
//!
//! A REST API over hotels, apartments, guests and bookings, built with
//! Axum and SeaORM.
//!
//! # Architecture Layers
//!
//! - **cli**: Command-line interface
//! - **commands**: CLI command implementations
//! - **config**: Application configuration and constants
//! - **services**: Application use cases (booking workflow, hotel lifecycle)
//! - **infra**: Database, migrations, repositories and the Unit of Work
//! - **api**: HTTP handlers, middleware, and routes
//! - **types**: Shared response types
//!
//! Domain entities live in the `domain` crate and the error type in `common`.
//!
//! # CLI Usage
//!
//! ```bash
//! # Start the server (applies pending migrations first)
//! cargo run -- serve
//!
//! # Run migrations
//! cargo run -- migrate up
//! ```

pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod infra;
pub mod services;
pub mod types;

// Re-export commonly used types at crate root
pub use api::AppState;
pub use common::{AppError, AppResult};
pub use config::Config;
