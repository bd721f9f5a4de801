//! Port interfaces for proposal persistence
//!
//! These traits define the boundaries between core business logic
//! and infrastructure implementations.

use async_trait::async_trait;
use muster_domain::{NewProposal, Proposal, Result, ShortId};

/// Trait for persisting and resolving proposals
#[async_trait]
pub trait ProposalRepository: Send + Sync {
    /// Persist a new proposal and return its freshly minted share id
    async fn create(&self, proposal: NewProposal) -> Result<ShortId>;

    /// Resolve a share id back to its proposal
    ///
    /// Returns `MusterError::NotFound` when no proposal carries the id.
    async fn find_by_short_id(&self, id: &ShortId) -> Result<Proposal>;
}
