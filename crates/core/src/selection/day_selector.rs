//! Calendar day selector
//!
//! Renders one or more month grids and owns the set of selected calendar
//! days. Click toggles a single day, click-and-drag unions the swept range;
//! the owner is notified synchronously whenever the committed set changes.
//! Months are laid out as a fixed 6x7 matrix (42 cells) so panel height
//! never changes; column 0 is Sunday.

use muster_domain::constants::MONTH_GRID_CELLS;
use muster_domain::{CalendarDate, DaySelection, MusterError, Result};
use tracing::debug;

use super::gesture::{apply_outcome, GestureOutcome, GestureState};

/// Column headers, Sunday first.
pub const WEEKDAY_LABELS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

/// One cell of a rendered month matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridCell {
    /// Non-interactive placeholder before day 1 or after the last day.
    Empty,
    /// An interactive day cell.
    Day(CalendarDate),
}

/// A month rendered as a fixed 42-cell matrix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthGrid {
    year: i32,
    month: u32,
    cells: Vec<GridCell>,
}

impl MonthGrid {
    /// Lay out the given civil month. Day 1 lands at the column matching
    /// its weekday; everything before and after is an empty placeholder.
    pub fn new(year: i32, month: u32) -> Result<Self> {
        let first = CalendarDate::first_of_month(year, month)?;
        let offset = first.day_of_week() as usize;
        let mut cells = vec![GridCell::Empty; MONTH_GRID_CELLS];
        for day in 1..=first.days_in_month() {
            let index = offset + (day as usize) - 1;
            cells[index] = GridCell::Day(CalendarDate::new(year, month, day)?);
        }
        Ok(Self { year, month, cells })
    }

    pub const fn year(&self) -> i32 {
        self.year
    }

    pub const fn month(&self) -> u32 {
        self.month
    }

    /// All 42 cells in row-major order.
    pub fn cells(&self) -> &[GridCell] {
        &self.cells
    }

    /// Cell at `index`, failing fast on an out-of-range index.
    pub fn cell(&self, index: usize) -> Result<GridCell> {
        self.cells.get(index).copied().ok_or_else(|| {
            MusterError::InvalidInput(format!("grid index {index} out of range"))
        })
    }

    /// Interactive date at `index`; placeholders are a precondition
    /// violation for pointer handling, not a silent no-op.
    pub fn date_at(&self, index: usize) -> Result<CalendarDate> {
        match self.cell(index)? {
            GridCell::Day(date) => Ok(date),
            GridCell::Empty => Err(MusterError::InvalidInput(format!(
                "grid index {index} is not an interactive day cell"
            ))),
        }
    }

    /// Number of interactive (non-empty) cells.
    pub fn interactive_count(&self) -> usize {
        self.cells.iter().filter(|cell| matches!(cell, GridCell::Day(_))).count()
    }

    /// Whether `date` belongs to this panel's month.
    pub fn contains(&self, date: CalendarDate) -> bool {
        date.year() == self.year && date.month() == self.month
    }

    /// Panel heading, e.g. "January 2025".
    pub fn title(&self) -> String {
        CalendarDate::first_of_month(self.year, self.month)
            .map(|first| first.as_naive().format("%B %Y").to_string())
            .unwrap_or_default()
    }
}

type SelectionCallback = Box<dyn FnMut(&DaySelection) + Send>;

/// Interactive day-selection widget state.
///
/// Selection is keyed by absolute calendar date, so days selected in a
/// month that scrolls out of view survive navigation and reappear when the
/// month is shown again.
pub struct DaySelector {
    panels: Vec<MonthGrid>,
    selection: DaySelection,
    gesture: GestureState<CalendarDate>,
    on_change: Option<SelectionCallback>,
}

impl DaySelector {
    /// Create a selector showing a single month panel.
    pub fn new(year: i32, month: u32) -> Result<Self> {
        Ok(Self {
            panels: vec![MonthGrid::new(year, month)?],
            selection: DaySelection::new(),
            gesture: GestureState::idle(),
            on_change: None,
        })
    }

    /// Show `count` consecutive months starting from the current first
    /// panel. At least one panel is required.
    pub fn with_visible_months(mut self, count: usize) -> Result<Self> {
        if count == 0 {
            return Err(MusterError::InvalidInput("at least one month panel is required".into()));
        }
        let first = CalendarDate::first_of_month(self.first_panel_year(), self.first_panel_month())?;
        let mut panels = Vec::with_capacity(count);
        for offset in 0..count {
            #[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
            let shifted = first.add_months(offset as i32)?;
            panels.push(MonthGrid::new(shifted.year(), shifted.month())?);
        }
        self.panels = panels;
        Ok(self)
    }

    /// Register the owner callback fired after every committed selection
    /// change with the full set in ascending order.
    pub fn on_selection_change(
        mut self,
        callback: impl FnMut(&DaySelection) + Send + 'static,
    ) -> Self {
        self.on_change = Some(Box::new(callback));
        self
    }

    /// Visible month panels in display order.
    pub fn panels(&self) -> &[MonthGrid] {
        &self.panels
    }

    /// The committed selection, ascending.
    pub const fn selection(&self) -> &DaySelection {
        &self.selection
    }

    /// Current gesture state, for hover/drag preview rendering.
    pub const fn gesture(&self) -> &GestureState<CalendarDate> {
        &self.gesture
    }

    /// Shift every visible panel back one month. Selection and any open
    /// gesture are untouched.
    pub fn prev_month(&mut self) -> Result<()> {
        self.shift_panels(-1)
    }

    /// Shift every visible panel forward one month. Selection and any open
    /// gesture are untouched.
    pub fn next_month(&mut self) -> Result<()> {
        self.shift_panels(1)
    }

    /// Pointer pressed on a day cell.
    pub fn pointer_down(&mut self, date: CalendarDate) -> Result<()> {
        self.ensure_visible(date)?;
        self.gesture = self.gesture.pointer_down(date);
        Ok(())
    }

    /// Pointer moved over a day cell.
    pub fn pointer_move(&mut self, date: CalendarDate) -> Result<()> {
        self.ensure_visible(date)?;
        self.gesture = self.gesture.pointer_move(date);
        Ok(())
    }

    /// Pointer released on a day cell; resolves the gesture.
    pub fn pointer_up(&mut self, date: CalendarDate) -> Result<()> {
        self.ensure_visible(date)?;
        let (next, outcome) = self.gesture.pointer_up(date);
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

    fn first_panel_year(&self) -> i32 {
        self.panels.first().map_or(1970, MonthGrid::year)
    }

    fn first_panel_month(&self) -> u32 {
        self.panels.first().map_or(1, MonthGrid::month)
    }

    fn shift_panels(&mut self, months: i32) -> Result<()> {
        let mut shifted = Vec::with_capacity(self.panels.len());
        for panel in &self.panels {
            let first = CalendarDate::first_of_month(panel.year(), panel.month())?;
            let moved = first.add_months(months)?;
            shifted.push(MonthGrid::new(moved.year(), moved.month())?);
        }
        self.panels = shifted;
        Ok(())
    }

    fn ensure_visible(&self, date: CalendarDate) -> Result<()> {
        if self.panels.iter().any(|panel| panel.contains(date)) {
            Ok(())
        } else {
            Err(MusterError::InvalidInput(format!("date {date} is not on a visible panel")))
        }
    }

    fn commit(&mut self, outcome: GestureOutcome<CalendarDate>) {
        if apply_outcome(&mut self.selection, outcome) {
            debug!(selected = self.selection.len(), "day selection committed");
            if let Some(callback) = self.on_change.as_mut() {
                callback(&self.selection);
            }
        }
    }
}
