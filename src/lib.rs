//! Roomshare - room-rental marketplace core
//!
//! Users register, list rooms, request to rent, and owners accept or reject
//! requests. This crate is the persistence and lifecycle layer: an embedded
//! SQLite store with four indexed collections, the request/rental state
//! machines with their cross-entity transactions, and the pure availability
//! calculator used by search. Page rendering, geocoding and map surfaces
//! are external collaborators.
//!
//! # Architecture Layers
//!
//! - **cli**: Command-line interface
//! - **commands**: CLI command implementations
//! - **config**: Application configuration and constants
//! - **domain**: Core business entities and logic
//! - **services**: Application use cases and business logic
//! - **infra**: Infrastructure concerns (database, repositories, Unit of Work)
//! - **errors**: Centralized error handling
//!
//! # CLI Usage
//!
//! ```bash
//! # Apply migrations
//! cargo run -- migrate up
//!
//! # Load demo data
//! cargo run -- seed
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod domain;
pub mod errors;
pub mod infra;
pub mod services;

// Re-export commonly used types at crate root
pub use config::Config;
pub use domain::{
    availability, Availability, Rental, Request, RequestState, Room, Session, SessionHolder, User,
};
pub use errors::{AppError, AppResult};
pub use infra::{Database, Persistence, UnitOfWork};
pub use services::{ServiceContainer, Services};
