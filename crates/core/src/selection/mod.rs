//! Interactive range-selection core
//!
//! Two sibling widgets share one pointer interaction pattern: press starts a
//! pending selection, movement turns it into a drag, release resolves it as
//! either a single-cell toggle or an additive range union. The shared state
//! machine lives in [`gesture`]; [`day_selector`] applies it to a 2-D month
//! grid and [`slot_selector`] to the 1-D partition of a day.

pub mod day_selector;
pub mod gesture;
pub mod slot_selector;

pub use day_selector::{DaySelector, GridCell, MonthGrid, WEEKDAY_LABELS};
pub use gesture::{
    apply_outcome, expand_range, GestureOutcome, GesturePhase, GestureState, SelectionCell,
};
pub use slot_selector::TimeSlotSelector;
