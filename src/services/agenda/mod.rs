// Agenda service module
// Turning a fetched page of events into calendar-shaped data

pub mod bucket;
pub mod grid;

pub use bucket::{DateBucketMap, DayBuckets};
pub use grid::{DayCell, MonthGrid, WEEKDAY_LABELS};
