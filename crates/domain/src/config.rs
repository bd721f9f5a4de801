//! Configuration structures
//!
//! Plain data carriers filled in by the infra config loader. Defaults match
//! the reference behaviour (30 minute slots, 21 character share ids).

use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_DB_POOL_SIZE, DEFAULT_SHORT_ID_LENGTH, DEFAULT_SLOT_DURATION_MINUTES,
};

/// Top-level application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub database: DatabaseConfig,
    #[serde(default)]
    pub proposal: ProposalConfig,
}

/// Database configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// Path to the SQLite database file
    pub path: String,
    /// Connection pool size
    #[serde(default = "default_pool_size")]
    pub pool_size: u32,
}

const fn default_pool_size() -> u32 {
    DEFAULT_DB_POOL_SIZE
}

/// Proposal composition configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProposalConfig {
    /// Length of generated share ids
    pub short_id_length: usize,
    /// Width of one selectable time slot, in minutes
    pub slot_duration_minutes: u32,
}

impl Default for ProposalConfig {
    fn default() -> Self {
        Self {
            short_id_length: DEFAULT_SHORT_ID_LENGTH,
            slot_duration_minutes: DEFAULT_SLOT_DURATION_MINUTES,
        }
    }
}
