//! Shared read-only context passed to modules

use crate::config::WeekStart;
use crate::domain::{CalendarDay, EventStore};

use super::TrackerState;

/// What every module can see while handling input or rendering
#[derive(Debug, Clone, Copy)]
pub struct Context<'a> {
    pub state: &'a TrackerState,
    pub events: &'a EventStore,
    pub today: CalendarDay,
    pub week_start: WeekStart,
}

impl<'a> Context<'a> {
    pub fn new(
        state: &'a TrackerState,
        events: &'a EventStore,
        today: CalendarDay,
        week_start: WeekStart,
    ) -> Self {
        Self {
            state,
            events,
            today,
            week_start,
        }
    }

    pub fn selected_date(&self) -> CalendarDay {
        self.state.selected_date
    }
}
