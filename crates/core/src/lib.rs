//! # Muster Core
//!
//! Pure business logic layer - no infrastructure dependencies.
//!
//! This crate contains:
//! - The interactive selection core: the pointer-gesture state machine,
//!   the month-grid day selector and the time-slot selector
//! - Port/adapter interfaces (traits) for proposal persistence
//! - The proposal composition service
//!
//! ## Architecture Principles
//! - Only depends on `muster-domain`
//! - No database, HTTP, or platform code
//! - All external dependencies via traits
//! - Pure, testable business logic

pub mod proposal;
pub mod selection;

// Re-export specific items to avoid ambiguity
pub use proposal::ports::ProposalRepository;
pub use proposal::ProposalService;
pub use selection::day_selector::{DaySelector, GridCell, MonthGrid, WEEKDAY_LABELS};
pub use selection::gesture::{
    expand_range, GestureOutcome, GesturePhase, GestureState, SelectionCell,
};
pub use selection::slot_selector::TimeSlotSelector;
