// Date utility functions
// Month-grid span math and feed date parsing

use chrono::{DateTime, Datelike, Duration, NaiveDate, Weekday};

/// Parse a raw feed date string into a calendar date.
///
/// The remote API is not consistent about date shapes, so three forms are
/// accepted, in order:
/// - RFC 3339 datetimes (`2026-03-05T18:30:00+03:00`), reduced to the UTC
///   calendar day
/// - naive datetimes (`2026-03-05T18:30:00`), taking the written day
/// - bare dates (`2026-03-05`)
///
/// Anything else returns `None`.
pub fn parse_feed_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    if let Ok(instant) = DateTime::parse_from_rfc3339(raw) {
        return Some(instant.naive_utc().date());
    }

    if let Ok(naive) = chrono::NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S") {
        return Some(naive.date());
    }

    NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()
}

/// Format a date as its `YYYY-MM-DD` day key.
pub fn day_key(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// First day of the month containing `date`.
pub fn first_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1).expect("day 1 exists in every month")
}

/// Last day of the month containing `date`.
pub fn last_of_month(date: NaiveDate) -> NaiveDate {
    let (next_year, next_month) = if date.month() == 12 {
        (date.year() + 1, 1)
    } else {
        (date.year(), date.month() + 1)
    };
    NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .expect("valid next month")
        .pred_opt()
        .expect("previous day exists")
}

/// Shift `anchor` by `delta_months` whole months, landing on the first day
/// of the resulting month.
pub fn shift_month(anchor: NaiveDate, delta_months: i32) -> NaiveDate {
    let total_months = (anchor.year() * 12) + (anchor.month() as i32 - 1) + delta_months;
    let new_year = total_months.div_euclid(12);
    let new_month = total_months.rem_euclid(12) + 1;
    NaiveDate::from_ymd_opt(new_year, new_month as u32, 1).expect("valid calendar date")
}

/// The Sunday on or before `date`.
pub fn sunday_on_or_before(date: NaiveDate) -> NaiveDate {
    let back = date.weekday().num_days_from_sunday() as i64;
    date - Duration::days(back)
}

/// The first Saturday strictly after `date`.
///
/// Note the asymmetry with [`sunday_on_or_before`]: a date that is already a
/// Saturday advances a full week. The month grid relies on this so its
/// trailing row always reaches into the following month.
pub fn saturday_strictly_after(date: NaiveDate) -> NaiveDate {
    let mut cursor = date + Duration::days(1);
    while cursor.weekday() != Weekday::Sat {
        cursor += Duration::days(1);
    }
    cursor
}

/// Inclusive day span covered by the month grid for the month containing
/// `anchor`: the Sunday on/before the 1st through the first Saturday strictly
/// after the last day.
pub fn month_grid_span(anchor: NaiveDate) -> (NaiveDate, NaiveDate) {
    let start = sunday_on_or_before(first_of_month(anchor));
    let end = saturday_strictly_after(last_of_month(anchor));
    (start, end)
}
