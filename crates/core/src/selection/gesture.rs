//! Pointer-gesture state machine shared by both selectors
//!
//! One complete gesture is pointer-down, zero or more moves, pointer-up.
//! A gesture with no movement off the anchor cell resolves as a membership
//! toggle of that cell; once the pointer has visited any other cell the
//! gesture resolves as an additive union of the swept range. Drags never
//! deselect, so an imprecise sweep cannot wipe out an existing selection.
//!
//! Transitions are pure functions: each consumes the current state value and
//! returns the next one, with resolution outcomes handed back to the caller
//! instead of mutating shared state. Stray events while idle are no-ops.

use std::collections::BTreeSet;

use muster_domain::{CalendarDate, TimeSlot};

/// A selectable cell with a total order and a forward step.
///
/// `successor` returns the next cell in that order, or `None` at the end of
/// the domain. Range expansion relies on successors being strictly
/// increasing and stops at any that are not.
pub trait SelectionCell: Copy + Ord {
    fn successor(self) -> Option<Self>;
}

impl SelectionCell for CalendarDate {
    fn successor(self) -> Option<Self> {
        self.succ()
    }
}

impl SelectionCell for TimeSlot {
    // The final slot of the day has no successor, so a slot range can never
    // wrap past midnight back to the start of the day.
    fn successor(self) -> Option<Self> {
        self.next()
    }
}

/// Phase of the gesture lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GesturePhase {
    #[default]
    Idle,
    /// Pointer is down, no movement seen yet.
    Pending,
    /// Pointer is down and has moved.
    Dragging,
}

/// How a resolved gesture should be applied to the selection set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GestureOutcome<C> {
    /// Click without drag: flip membership of one cell.
    Toggle(C),
    /// Drag: union every cell from `lo` to `hi` inclusive.
    Range { lo: C, hi: C },
}

/// Per-widget gesture state. Created idle on mount, reset to idle at the
/// end of every resolution; anchor and cursor are only set while a gesture
/// is open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GestureState<C> {
    phase: GesturePhase,
    anchor: Option<C>,
    cursor: Option<C>,
    dragged: bool,
}

impl<C: SelectionCell> Default for GestureState<C> {
    fn default() -> Self {
        Self::idle()
    }
}

impl<C: SelectionCell> GestureState<C> {
    /// The resting state: no open gesture.
    pub const fn idle() -> Self {
        Self { phase: GesturePhase::Idle, anchor: None, cursor: None, dragged: false }
    }

    pub const fn phase(&self) -> GesturePhase {
        self.phase
    }

    pub const fn anchor(&self) -> Option<C> {
        self.anchor
    }

    pub const fn cursor(&self) -> Option<C> {
        self.cursor
    }

    pub const fn is_idle(&self) -> bool {
        matches!(self.phase, GesturePhase::Idle)
    }

    /// Open a gesture anchored at `cell`. If a gesture was already open
    /// (a pointer-up was lost), it is dropped unresolved and the new click
    /// takes over.
    #[must_use]
    pub fn pointer_down(self, cell: C) -> Self {
        Self { phase: GesturePhase::Pending, anchor: Some(cell), cursor: Some(cell), dragged: false }
    }

    /// Update the hover cursor. No-op while idle; repeated moves over the
    /// same cell are idempotent. The drag flag latches once the pointer
    /// visits any cell other than the anchor.
    #[must_use]
    pub fn pointer_move(self, cell: C) -> Self {
        if self.is_idle() {
            return self;
        }
        Self {
            phase: GesturePhase::Dragging,
            anchor: self.anchor,
            cursor: Some(cell),
            dragged: self.dragged || self.anchor != Some(cell),
        }
    }

    /// Resolve the gesture at `cell` and return to idle.
    #[must_use]
    pub fn pointer_up(self, cell: C) -> (Self, Option<GestureOutcome<C>>) {
        let outcome = match (self.phase, self.anchor) {
            (GesturePhase::Idle, _) | (_, None) => None,
            (_, Some(anchor)) => {
                if self.dragged {
                    Some(GestureOutcome::Range { lo: anchor.min(cell), hi: anchor.max(cell) })
                } else {
                    Some(GestureOutcome::Toggle(anchor))
                }
            }
        };
        (Self::idle(), outcome)
    }

    /// The pointer left the widget's bounds mid-gesture: synthesize a
    /// pointer-up at the last hovered cell (the anchor if no move occurred),
    /// so the gesture commits or aborts instead of leaking open.
    #[must_use]
    pub fn pointer_leave(self) -> (Self, Option<GestureOutcome<C>>) {
        if self.is_idle() {
            return (Self::idle(), None);
        }
        match self.cursor.or(self.anchor) {
            Some(cell) => self.pointer_up(cell),
            None => (Self::idle(), None),
        }
    }
}

/// Enumerate every cell from `lo` to `hi` inclusive by successor steps.
///
/// Defensive against non-monotonic successors: enumeration stops rather
/// than looping if a successor fails to advance.
pub fn expand_range<C: SelectionCell>(lo: C, hi: C) -> Vec<C> {
    let mut cells = vec![lo];
    let mut current = lo;
    while current < hi {
        match current.successor() {
            Some(next) if next > current && next <= hi => {
                cells.push(next);
                current = next;
            }
            _ => break,
        }
    }
    cells
}

/// Apply a resolved outcome to a selection set. Returns whether the set
/// actually changed, which is what gates the owner notification.
pub fn apply_outcome<C: SelectionCell>(
    selection: &mut BTreeSet<C>,
    outcome: GestureOutcome<C>,
) -> bool {
    match outcome {
        GestureOutcome::Toggle(cell) => {
            if !selection.remove(&cell) {
                selection.insert(cell);
            }
            true
        }
        GestureOutcome::Range { lo, hi } => {
            let before = selection.len();
            selection.extend(expand_range(lo, hi));
            selection.len() != before
        }
    }
}
