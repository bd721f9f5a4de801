//! # Muster Domain
//!
//! Business domain types and models for Muster.
//!
//! This crate contains:
//! - Civil date/time primitives (CalendarDate, TimeOfDay, TimeSlot)
//! - Selection set aliases used by the interactive widgets
//! - Proposal types (NewProposal, Proposal, ShortId)
//! - Domain error types and Result definitions
//! - Configuration structures
//! - Domain constants
//!
//! ## Architecture
//! - No dependencies on other Muster crates
//! - Only external dependencies allowed
//! - Pure domain models and data structures

pub mod config;
pub mod constants;
pub mod errors;
pub mod types;

// Re-export commonly used items
pub use config::*;
pub use errors::*;
pub use types::*;
