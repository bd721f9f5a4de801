//! Proposal composition service - core business logic

use std::sync::Arc;

use muster_domain::constants::MAX_PROPOSAL_NAME_LENGTH;
use muster_domain::{
    DaySelection, MusterError, NewProposal, Proposal, Result, ShortId, SlotSelection,
};
use tracing::info;

use super::ports::ProposalRepository;

/// Proposal composition service
///
/// The thin composer over the two selection widgets: validates and
/// normalizes their committed outputs, then delegates persistence to the
/// injected repository.
pub struct ProposalService {
    repository: Arc<dyn ProposalRepository>,
}

impl ProposalService {
    /// Create a new proposal service
    pub fn new(repository: Arc<dyn ProposalRepository>) -> Self {
        Self { repository }
    }

    /// Persist a proposal composed from the committed selections.
    ///
    /// The day and slot sets arrive in ascending order by construction;
    /// the name is trimmed and must be non-empty and at least one candidate
    /// day must be selected. Time slots are optional (an all-day proposal).
    pub async fn create_proposal(
        &self,
        name: &str,
        days: &DaySelection,
        slots: &SlotSelection,
    ) -> Result<ShortId> {
        let name = name.trim();
        if name.is_empty() {
            return Err(MusterError::InvalidInput("proposal name must not be empty".into()));
        }
        if name.len() > MAX_PROPOSAL_NAME_LENGTH {
            return Err(MusterError::InvalidInput(format!(
                "proposal name exceeds {MAX_PROPOSAL_NAME_LENGTH} characters"
            )));
        }
        if days.is_empty() {
            return Err(MusterError::InvalidInput(
                "a proposal needs at least one candidate day".into(),
            ));
        }

        let proposal = NewProposal {
            name: name.to_owned(),
            days: days.iter().copied().collect(),
            slots: slots.iter().copied().collect(),
        };

        let short_id = self.repository.create(proposal).await?;
        info!(
            short_id = %short_id,
            days = days.len(),
            slots = slots.len(),
            "proposal created"
        );
        Ok(short_id)
    }

    /// Resolve a raw share token back to its proposal.
    ///
    /// The token format is checked before storage is consulted, so garbage
    /// input surfaces as `InvalidInput` rather than a spurious lookup miss.
    pub async fn get_proposal(&self, raw_id: &str) -> Result<Proposal> {
        let id = ShortId::new(raw_id)?;
        self.repository.find_by_short_id(&id).await
    }
}
