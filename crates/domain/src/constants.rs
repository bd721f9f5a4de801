//! Application constants
//!
//! Centralized location for all domain-level constants used throughout the
//! application.

// Time slot configuration
pub const MINUTES_PER_DAY: u32 = 1440;
pub const DEFAULT_SLOT_DURATION_MINUTES: u32 = 30;

// Month grid layout (6 rows x 7 columns, Sunday first)
pub const DAYS_PER_WEEK: usize = 7;
pub const MONTH_GRID_ROWS: usize = 6;
pub const MONTH_GRID_CELLS: usize = MONTH_GRID_ROWS * DAYS_PER_WEEK;

// Database defaults
pub const DEFAULT_DB_POOL_SIZE: u32 = 4;

// Short shareable ids (nanoid-style, URL safe)
pub const SHORT_ID_ALPHABET: &str =
    "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789_-";
pub const DEFAULT_SHORT_ID_LENGTH: usize = 21;

// Proposal validation limits
pub const MAX_PROPOSAL_NAME_LENGTH: usize = 120;
