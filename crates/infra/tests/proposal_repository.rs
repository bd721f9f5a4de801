//! Integration tests for the SQLite proposal repository
//!
//! Exercises the real storage path end to end on a throwaway database:
//! migrations, create/resolve round-trips, and the NotFound contract.

use std::sync::Arc;

use muster_core::proposal::ports::ProposalRepository;
use muster_core::ProposalService;
use muster_domain::{
    CalendarDate, DaySelection, MusterError, NewProposal, ShortId, SlotSelection, TimeOfDay,
    TimeSlot,
};
use muster_infra::{DbManager, SqliteProposalRepository};
use tempfile::TempDir;

fn date(year: i32, month: u32, day: u32) -> CalendarDate {
    CalendarDate::new(year, month, day).unwrap()
}

fn slot(hour: u32, minute: u32) -> TimeSlot {
    TimeSlot::new(TimeOfDay::new(hour, minute).unwrap(), 30).unwrap()
}

fn setup() -> (TempDir, Arc<SqliteProposalRepository>) {
    let dir = TempDir::new().expect("temp dir created");
    let manager = DbManager::new(dir.path().join("muster.db"), 2).expect("manager created");
    manager.run_migrations().expect("migrations run");
    (dir, Arc::new(SqliteProposalRepository::new(Arc::new(manager))))
}

fn sample_proposal() -> NewProposal {
    NewProposal {
        name: "Planning poker".to_owned(),
        days: vec![date(2025, 1, 5), date(2025, 1, 10), date(2025, 1, 11)],
        slots: vec![slot(9, 0), slot(9, 30)],
    }
}

#[tokio::test]
async fn create_then_find_round_trip() {
    let (_dir, repository) = setup();

    let id = repository.create(sample_proposal()).await.expect("created");
    assert_eq!(id.as_str().len(), 21);

    let proposal = repository.find_by_short_id(&id).await.expect("found");
    assert_eq!(proposal.short_id, id);
    assert_eq!(proposal.name, "Planning poker");
    assert_eq!(proposal.days, vec![date(2025, 1, 5), date(2025, 1, 10), date(2025, 1, 11)]);
    assert_eq!(proposal.slots, vec![slot(9, 0), slot(9, 30)]);
    assert!(proposal.created_at.timestamp() > 0);
}

#[tokio::test]
async fn distinct_proposals_get_distinct_ids() {
    let (_dir, repository) = setup();

    let first = repository.create(sample_proposal()).await.expect("first");
    let second = repository.create(sample_proposal()).await.expect("second");
    assert_ne!(first, second);

    let resolved = repository.find_by_short_id(&second).await.expect("found");
    assert_eq!(resolved.short_id, second);
}

#[tokio::test]
async fn unknown_ids_surface_not_found() {
    let (_dir, repository) = setup();

    let id = ShortId::new("missing-id-0000000000").expect("valid format");
    let err = repository.find_by_short_id(&id).await.unwrap_err();
    assert!(matches!(err, MusterError::NotFound(_)));
}

#[tokio::test]
async fn configured_id_length_is_honoured() {
    let dir = TempDir::new().expect("temp dir created");
    let manager = DbManager::new(dir.path().join("muster.db"), 2).expect("manager created");
    manager.run_migrations().expect("migrations run");
    let repository = SqliteProposalRepository::new(Arc::new(manager)).with_id_length(10);

    let id = repository.create(sample_proposal()).await.expect("created");
    assert_eq!(id.as_str().len(), 10);
}

#[tokio::test]
async fn service_composes_over_the_real_repository() {
    let (_dir, repository) = setup();
    let service = ProposalService::new(repository);

    let days = DaySelection::from([date(2025, 3, 1), date(2025, 3, 2)]);
    let mut slots = SlotSelection::new();
    slots.insert(slot(14, 0));

    let id = service.create_proposal("Retro", &days, &slots).await.expect("created");
    let proposal = service.get_proposal(id.as_str()).await.expect("resolved");
    assert_eq!(proposal.name, "Retro");
    assert_eq!(proposal.days, vec![date(2025, 3, 1), date(2025, 3, 2)]);
    assert_eq!(proposal.slots, vec![slot(14, 0)]);
}

#[tokio::test]
async fn empty_slot_sets_survive_the_round_trip() {
    let (_dir, repository) = setup();

    let proposal = NewProposal {
        name: "All-day scouting".to_owned(),
        days: vec![date(2025, 6, 21)],
        slots: vec![],
    };
    let id = repository.create(proposal).await.expect("created");
    let resolved = repository.find_by_short_id(&id).await.expect("found");
    assert!(resolved.slots.is_empty());
}
