//! Proposal composition
//!
//! Combines the two selectors' committed outputs into a persisted proposal
//! behind a short shareable id. Persistence itself sits behind the
//! [`ports::ProposalRepository`] trait; this module owns only validation,
//! normalization and orchestration.

pub mod ports;
pub mod service;

pub use ports::ProposalRepository;
pub use service::ProposalService;
