//! # Muster Infra
//!
//! Infrastructure layer: everything that touches the outside world.
//!
//! This crate contains:
//! - SQLite-backed implementation of the proposal repository port
//! - Database connection management (explicitly constructed, pooled)
//! - Short share-id generation
//! - Configuration loading
//! - Tracing initialisation

pub mod config;
pub mod database;
pub mod observability;
pub mod short_id;

// Re-export commonly used items
pub use database::manager::DbManager;
pub use database::proposal_repository::SqliteProposalRepository;
pub use observability::init_tracing;
pub use short_id::generate_short_id;
