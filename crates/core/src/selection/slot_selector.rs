//! Time-of-day slot selector
//!
//! The 1-D sibling of the day selector: a fixed partition of the 24-hour
//! day into equal slots, selected with the same click-toggle / drag-union
//! gestures. For display the sequence is split into an AM and a PM half;
//! the split is purely cosmetic and drags cross it freely, since range
//! computation runs over the single unified order.

use muster_domain::constants::DEFAULT_SLOT_DURATION_MINUTES;
use muster_domain::{
    generate_time_slots, MusterError, Result, SlotSelection, TimeOfDay, TimeSlot,
};
use tracing::debug;

use super::gesture::{apply_outcome, GestureOutcome, GestureState};

type SelectionCallback = Box<dyn FnMut(&SlotSelection) + Send>;

/// Interactive slot-selection widget state.
pub struct TimeSlotSelector {
    slots: Vec<TimeSlot>,
    duration_minutes: u32,
    selection: SlotSelection,
    gesture: GestureState<TimeSlot>,
    on_change: Option<SelectionCallback>,
}

impl TimeSlotSelector {
    /// Create a selector over the reference 30-minute partition.
    pub fn new() -> Result<Self> {
        Self::with_duration(DEFAULT_SLOT_DURATION_MINUTES)
    }

    /// Create a selector over a custom slot width. The width must evenly
    /// divide 24 hours.
    pub fn with_duration(duration_minutes: u32) -> Result<Self> {
        Ok(Self {
            slots: generate_time_slots(duration_minutes)?,
            duration_minutes,
            selection: SlotSelection::new(),
            gesture: GestureState::idle(),
            on_change: None,
        })
    }

    /// Register the owner callback fired after every committed selection
    /// change with the full set in ascending start order.
    pub fn on_selection_change(
        mut self,
        callback: impl FnMut(&SlotSelection) + Send + 'static,
    ) -> Self {
        self.on_change = Some(Box::new(callback));
        self
    }

    /// The full ordered partition of the day.
    pub fn slots(&self) -> &[TimeSlot] {
        &self.slots
    }

    pub const fn duration_minutes(&self) -> u32 {
        self.duration_minutes
    }

    /// Display split: slots starting before noon, and the rest.
    pub fn halves(&self) -> (&[TimeSlot], &[TimeSlot]) {
        let noon = self.slots.partition_point(|slot| slot.start().minutes_from_midnight() < 720);
        self.slots.split_at(noon)
    }

    /// The committed selection, ascending by start.
    pub const fn selection(&self) -> &SlotSelection {
        &self.selection
    }

    /// Current gesture state, for hover/drag preview rendering.
    pub const fn gesture(&self) -> &GestureState<TimeSlot> {
        &self.gesture
    }

    /// Pointer pressed on the slot starting at `start`.
    pub fn pointer_down(&mut self, start: TimeOfDay) -> Result<()> {
        let slot = self.slot_at(start)?;
        self.gesture = self.gesture.pointer_down(slot);
        Ok(())
    }

    /// Pointer moved over the slot starting at `start`.
    pub fn pointer_move(&mut self, start: TimeOfDay) -> Result<()> {
        let slot = self.slot_at(start)?;
        self.gesture = self.gesture.pointer_move(slot);
        Ok(())
    }

    /// Pointer released on the slot starting at `start`; resolves the
    /// gesture.
    pub fn pointer_up(&mut self, start: TimeOfDay) -> Result<()> {
        let slot = self.slot_at(start)?;
        let (next, outcome) = self.gesture.pointer_up(slot);
        self.gesture = next;
        if let Some(outcome) = outcome {
            self.commit(outcome);
        }
        Ok(())
    }

    /// Pointer left the widget bounds; commits or aborts the open gesture.
    pub fn pointer_leave(&mut self) {
        let (next, outcome) = self.gesture.pointer_leave();
        self.gesture = next;
        if let Some(outcome) = outcome {
            self.commit(outcome);
        }
    }

    /// Resolve a slot by its start time. Starts that do not fall on the
    /// slot grid are a precondition violation in the calling surface.
    fn slot_at(&self, start: TimeOfDay) -> Result<TimeSlot> {
        let minutes = start.minutes_from_midnight();
        if minutes % self.duration_minutes != 0 {
            return Err(MusterError::InvalidInput(format!(
                "time {start} is not aligned to the {} minute slot grid",
                self.duration_minutes
            )));
        }
        let index = (minutes / self.duration_minutes) as usize;
        self.slots.get(index).copied().ok_or_else(|| {
            MusterError::InvalidInput(format!("time {start} has no slot"))
        })
    }

    fn commit(&mut self, outcome: GestureOutcome<TimeSlot>) {
        if apply_outcome(&mut self.selection, outcome) {
            debug!(selected = self.selection.len(), "slot selection committed");
            if let Some(callback) = self.on_change.as_mut() {
                callback(&self.selection);
            }
        }
    }
}
