// Property-based tests for the month grid and the day-bucket index

use chrono::{Datelike, NaiveDate, Weekday};
use proptest::prelude::*;

use agenda_browser::models::event::Event;
use agenda_browser::services::agenda::{DayBuckets, MonthGrid};
use agenda_browser::utils::date::last_of_month;

fn any_month() -> impl Strategy<Value = NaiveDate> {
    (1970i32..2100, 1u32..=12).prop_map(|(year, month)| {
        NaiveDate::from_ymd_opt(year, month, 1).unwrap()
    })
}

fn any_event() -> impl Strategy<Value = Event> {
    (
        "[a-z]{1,8}",
        proptest::option::of((2020i32..2030, 1u32..=12, 1u32..=28)),
    )
        .prop_map(|(id, date)| {
            let occurs_on =
                date.map(|(y, m, d)| NaiveDate::from_ymd_opt(y, m, d).unwrap());
            Event::new(id.clone(), format!("Event {}", id), occurs_on)
        })
}

proptest! {
    #[test]
    fn grid_spans_whole_weeks_without_gaps(month in any_month()) {
        let grid = MonthGrid::build(month, month, &DayBuckets::default());
        let cells = grid.cells();

        // Starts on a Sunday, ends on a Saturday
        prop_assert_eq!(cells.first().unwrap().date.weekday(), Weekday::Sun);
        prop_assert_eq!(cells.last().unwrap().date.weekday(), Weekday::Sat);

        // Whole weeks only; alignment makes that 5 or 6 of them
        prop_assert_eq!(cells.len() % 7, 0);
        prop_assert!(cells.len() == 35 || cells.len() == 42);

        // Strictly consecutive dates
        for pair in cells.windows(2) {
            prop_assert_eq!(pair[0].date.succ_opt().unwrap(), pair[1].date);
        }

        // The month itself is fully covered, nothing more
        let in_month = cells.iter().filter(|c| c.in_month).count() as u32;
        prop_assert_eq!(in_month, last_of_month(month).day());

        // Trailing cells always reach into the following month
        prop_assert!(cells.last().unwrap().date > last_of_month(month));
    }

    #[test]
    fn grid_is_a_pure_function_of_its_inputs(month in any_month(), day in 1u32..=28) {
        let today = month.with_day(day).unwrap();
        let first = MonthGrid::build(month, today, &DayBuckets::default());
        let second = MonthGrid::build(month, today, &DayBuckets::default());
        prop_assert_eq!(first, second);
    }

    #[test]
    fn exactly_one_today_cell_in_todays_month(month in any_month(), day in 1u32..=28) {
        let today = month.with_day(day).unwrap();
        let grid = MonthGrid::build(month, today, &DayBuckets::default());
        let today_cells = grid.cells().iter().filter(|c| c.is_today).count();
        prop_assert_eq!(today_cells, 1);
    }

    #[test]
    fn bucketing_is_idempotent_and_loses_nothing(events in proptest::collection::vec(any_event(), 0..40)) {
        let first = DayBuckets::build(&events);
        let second = DayBuckets::build(&events);
        prop_assert_eq!(&first, &second);

        // Every event is either bucketed or counted as undated
        let bucketed: usize = first.map().values().map(Vec::len).sum();
        prop_assert_eq!(bucketed + first.undated_count(), events.len());

        // Buckets hold only events that occur on their key date
        for (day, bucket) in first.map() {
            prop_assert!(bucket.iter().all(|e| e.occurs_on == Some(*day)));
        }
    }

    #[test]
    fn bucket_order_follows_fetch_order(events in proptest::collection::vec(any_event(), 0..40)) {
        let buckets = DayBuckets::build(&events);
        for (day, bucket) in buckets.map() {
            let expected: Vec<&str> = events
                .iter()
                .filter(|e| e.occurs_on == Some(*day))
                .map(|e| e.id.as_str())
                .collect();
            let actual: Vec<&str> = bucket.iter().map(|e| e.id.as_str()).collect();
            prop_assert_eq!(actual, expected);
        }
    }
}
