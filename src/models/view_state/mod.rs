// View state module
// Immutable browsing state shared by the calendar and list surfaces

use chrono::NaiveDate;

use crate::utils::date::{first_of_month, shift_month};

/// Which surface the browser is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewMode {
    Calendar,
    List,
}

/// The complete browsing state: view mode, 1-based feed page, the month the
/// calendar grid displays, and the day whose events fill the side panel.
///
/// `ViewState` is a plain value. Every transition returns a replacement
/// state instead of mutating in place, which keeps the transition rules
/// testable on their own and makes "what changed" explicit at call sites.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewState {
    pub mode: ViewMode,
    pub page: u32,
    /// First day of the displayed month. Only explicit month navigation
    /// moves this; refetches never do.
    pub displayed_month: NaiveDate,
    pub selected_date: NaiveDate,
}

impl ViewState {
    /// State at mount: calendar mode, page 1, today's month, today selected.
    pub fn initial(today: NaiveDate) -> Self {
        Self {
            mode: ViewMode::Calendar,
            page: 1,
            displayed_month: first_of_month(today),
            selected_date: today,
        }
    }

    /// Switch surface. Resets the page to 1; the displayed month and the
    /// selected date survive the switch.
    pub fn with_mode(self, mode: ViewMode) -> Self {
        Self {
            mode,
            page: 1,
            ..self
        }
    }

    /// Set the feed page, clamped into `[1, last_page]`. A `last_page` of
    /// zero (empty feed) still pins the page at 1.
    pub fn with_page(self, page: u32, last_page: u32) -> Self {
        Self {
            page: page.clamp(1, last_page.max(1)),
            ..self
        }
    }

    /// Move the displayed month by whole months (±1 in practice).
    pub fn with_month_shifted(self, delta_months: i32) -> Self {
        Self {
            displayed_month: shift_month(self.displayed_month, delta_months),
            ..self
        }
    }

    /// Snap the displayed month back to the month containing `today`.
    pub fn with_current_month(self, today: NaiveDate) -> Self {
        Self {
            displayed_month: first_of_month(today),
            ..self
        }
    }

    /// Change which day the side panel details.
    pub fn with_selected_date(self, date: NaiveDate) -> Self {
        Self {
            selected_date: date,
            ..self
        }
    }
}
