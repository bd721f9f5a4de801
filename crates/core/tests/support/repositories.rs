//! Mock repository implementations for testing
//!
//! Provides an in-memory mock of the proposal repository port, enabling
//! deterministic unit tests without database dependencies.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::Utc;
use muster_core::proposal::ports::ProposalRepository;
use muster_domain::{MusterError, NewProposal, Proposal, Result as DomainResult, ShortId};

/// In-memory mock for `ProposalRepository`.
///
/// Mints sequential ids and keeps proposals in a map guarded by a mutex.
#[derive(Default)]
pub struct MockProposalRepository {
    proposals: Mutex<HashMap<String, Proposal>>,
    next_id: AtomicUsize,
}

impl MockProposalRepository {
    /// Create an empty mock.
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Number of stored proposals.
    pub fn len(&self) -> usize {
        self.proposals.lock().unwrap().len()
    }
}

#[async_trait]
impl ProposalRepository for MockProposalRepository {
    async fn create(&self, proposal: NewProposal) -> DomainResult<ShortId> {
        let serial = self.next_id.fetch_add(1, Ordering::SeqCst);
        let short_id = ShortId::new(format!("mock-id-{serial:04}"))?;
        let stored = Proposal {
            short_id: short_id.clone(),
            name: proposal.name,
            days: proposal.days,
            slots: proposal.slots,
            created_at: Utc::now(),
        };
        self.proposals.lock().unwrap().insert(short_id.as_str().to_owned(), stored);
        Ok(short_id)
    }

    async fn find_by_short_id(&self, id: &ShortId) -> DomainResult<Proposal> {
        self.proposals
            .lock()
            .unwrap()
            .get(id.as_str())
            .cloned()
            .ok_or_else(|| MusterError::NotFound(format!("no proposal for id {id}")))
    }
}
