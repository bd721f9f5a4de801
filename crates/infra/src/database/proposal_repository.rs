//! SQLite-backed implementation of the ProposalRepository port.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use muster_core::proposal::ports::ProposalRepository;
use muster_domain::constants::DEFAULT_SHORT_ID_LENGTH;
use muster_domain::{CalendarDate, MusterError, NewProposal, Proposal, Result, ShortId, TimeSlot};
use rusqlite::{params, OptionalExtension};
use tracing::{debug, instrument, warn};

use super::manager::{map_sql_error, DbManager};
use crate::short_id::generate_short_id;

// Id collisions are vanishingly rare at 21 characters; a handful of
// retries covers shorter configured lengths.
const MAX_ID_ATTEMPTS: u32 = 3;

/// SQLite implementation of ProposalRepository
pub struct SqliteProposalRepository {
    db: Arc<DbManager>,
    id_length: usize,
}

impl SqliteProposalRepository {
    /// Create a new proposal repository over the given database handle.
    pub fn new(db: Arc<DbManager>) -> Self {
        Self { db, id_length: DEFAULT_SHORT_ID_LENGTH }
    }

    /// Override the generated share-id length.
    pub fn with_id_length(mut self, id_length: usize) -> Self {
        self.id_length = id_length;
        self
    }
}

#[async_trait]
impl ProposalRepository for SqliteProposalRepository {
    #[instrument(skip(self, proposal), fields(days = proposal.days.len(), slots = proposal.slots.len()))]
    async fn create(&self, proposal: NewProposal) -> Result<ShortId> {
        let conn = self.db.get_connection()?;

        let days_json = serde_json::to_string(&proposal.days)
            .map_err(|e| MusterError::Internal(format!("serialize days: {e}")))?;
        let slots_json = serde_json::to_string(&proposal.slots)
            .map_err(|e| MusterError::Internal(format!("serialize slots: {e}")))?;
        let created_at = Utc::now().timestamp();

        for attempt in 0..MAX_ID_ATTEMPTS {
            let short_id = ShortId::new(generate_short_id(self.id_length))?;
            let inserted = conn.execute(
                "INSERT INTO proposals (short_id, name, days_json, slots_json, created_at) \
                 VALUES (?1, ?2, ?3, ?4, ?5)",
                params![short_id.as_str(), proposal.name, days_json, slots_json, created_at],
            );
            match inserted {
                Ok(_) => {
                    debug!(short_id = %short_id, "proposal stored");
                    return Ok(short_id);
                }
                Err(e) if is_unique_violation(&e) => {
                    warn!(attempt, "share id collision, regenerating");
                }
                Err(e) => return Err(map_sql_error(e)),
            }
        }

        Err(MusterError::Database(format!(
            "could not mint a unique share id after {MAX_ID_ATTEMPTS} attempts"
        )))
    }

    #[instrument(skip(self), fields(short_id = %id))]
    async fn find_by_short_id(&self, id: &ShortId) -> Result<Proposal> {
        let conn = self.db.get_connection()?;

        let row = conn
            .query_row(
                "SELECT name, days_json, slots_json, created_at \
                 FROM proposals WHERE short_id = ?1",
                params![id.as_str()],
                |row| {
                    Ok((
                        row.get::<_, String>(0)?,
                        row.get::<_, String>(1)?,
                        row.get::<_, String>(2)?,
                        row.get::<_, i64>(3)?,
                    ))
                },
            )
            .optional()
            .map_err(map_sql_error)?;

        let Some((name, days_json, slots_json, created_at)) = row else {
            return Err(MusterError::NotFound(format!("no proposal for id {id}")));
        };

        let days: Vec<CalendarDate> = serde_json::from_str(&days_json)
            .map_err(|e| MusterError::Internal(format!("deserialize days: {e}")))?;
        let slots: Vec<TimeSlot> = serde_json::from_str(&slots_json)
            .map_err(|e| MusterError::Internal(format!("deserialize slots: {e}")))?;
        let created_at = DateTime::<Utc>::from_timestamp(created_at, 0)
            .ok_or_else(|| MusterError::Internal(format!("bad created_at: {created_at}")))?;

        Ok(Proposal { short_id: id.clone(), name, days, slots, created_at })
    }
}

fn is_unique_violation(err: &rusqlite::Error) -> bool {
    matches!(
        err,
        rusqlite::Error::SqliteFailure(e, _)
            if e.code == rusqlite::ErrorCode::ConstraintViolation
    )
}
