//! Domain type definitions
//!
//! Civil date/time primitives, selection set aliases and proposal types.

use std::collections::BTreeSet;

pub mod date;
pub mod proposal;
pub mod time;

pub use date::{days_in_month, CalendarDate};
pub use proposal::{NewProposal, Proposal, ShortId};
pub use time::{generate_time_slots, TimeOfDay, TimeSlot};

/// Set of selected calendar days, iterated in ascending order.
pub type DaySelection = BTreeSet<CalendarDate>;

/// Set of selected time slots, iterated in ascending order of start.
pub type SlotSelection = BTreeSet<TimeSlot>;
