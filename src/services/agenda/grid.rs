// Month grid builder
// Lays one month out as whole Sunday-through-Saturday weeks

use chrono::{Datelike, NaiveDate};

use crate::models::event::Event;
use crate::utils::date::{first_of_month, month_grid_span};

use super::bucket::DayBuckets;

/// Column headers for the grid. Always English and always Sunday-first;
/// localized month/day names are a formatting concern that lives with the
/// caller, not here.
pub const WEEKDAY_LABELS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

/// One day slot in the month grid.
#[derive(Debug, Clone, PartialEq)]
pub struct DayCell {
    pub date: NaiveDate,
    /// Whether the date belongs to the displayed month (leading and trailing
    /// cells come from the neighbor months).
    pub in_month: bool,
    pub is_today: bool,
    /// Events bucketed under this date, in fetch order.
    pub events: Vec<Event>,
}

/// The displayed month expanded into complete weeks.
///
/// Cells run from the Sunday on/before the 1st through the first Saturday
/// strictly after the last day, so a month whose final day is a Saturday
/// still gets a trailing week. The cell count is whatever that span yields,
/// 35 or 42 days depending on alignment; it is never padded to a fixed size.
#[derive(Debug, Clone, PartialEq)]
pub struct MonthGrid {
    month: NaiveDate,
    cells: Vec<DayCell>,
}

impl MonthGrid {
    /// Build the grid for the month containing `anchor`. `today` is passed
    /// in rather than sampled so rendering and tests agree on what "today"
    /// means; the comparison is by calendar day only.
    pub fn build(anchor: NaiveDate, today: NaiveDate, buckets: &DayBuckets) -> Self {
        let month = first_of_month(anchor);
        let (start, end) = month_grid_span(month);

        let mut cells = Vec::with_capacity(42);
        let mut cursor = start;
        while cursor <= end {
            cells.push(DayCell {
                date: cursor,
                in_month: cursor.year() == month.year() && cursor.month() == month.month(),
                is_today: cursor == today,
                events: buckets.events_on(cursor).to_vec(),
            });
            cursor = cursor.succ_opt().expect("grid span stays in range");
        }

        Self { month, cells }
    }

    /// First day of the displayed month.
    pub fn month(&self) -> NaiveDate {
        self.month
    }

    /// Display title, e.g. `March 2026`.
    pub fn title(&self) -> String {
        self.month.format("%B %Y").to_string()
    }

    pub fn cells(&self) -> &[DayCell] {
        &self.cells
    }

    /// The grid one complete week at a time.
    pub fn weeks(&self) -> impl Iterator<Item = &[DayCell]> {
        self.cells.chunks(7)
    }
}
