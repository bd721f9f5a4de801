//! Database access
//!
//! Connection management plus the SQLite implementation of the proposal
//! repository port. The database handle is always constructed explicitly
//! and injected; there is no process-wide connection singleton.

pub mod manager;
pub mod proposal_repository;

pub use manager::DbManager;
pub use proposal_repository::SqliteProposalRepository;
