// Event module
// Canonical event record as served by the remote content API

use chrono::NaiveDate;

/// A downloadable file attached to an event. Order within an event's
/// attachment list is the order the API served them in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attachment {
    pub path: String,
    pub file_name: String,
}

/// Canonical event record.
///
/// Events are read-only to this application; they are produced by
/// normalizing the raw API payload. `occurs_on` is the single calendar date
/// the event is bucketed under; an event without one never appears in the
/// calendar grid but is still shown in the plain list.
#[derive(Debug, Clone, PartialEq)]
pub struct Event {
    pub id: String,
    pub title: String,
    /// The canonical occurrence date (UTC day), when resolvable.
    pub occurs_on: Option<NaiveDate>,
    /// Display-only time strings, shown verbatim and never parsed.
    pub start_time: Option<String>,
    pub end_time: Option<String>,
    pub location: Option<String>,
    pub category: Option<String>,
    pub status: Option<String>,
    pub target_audience: Option<String>,
    /// Numeric-as-string admission cost; see [`Event::is_free`].
    pub cost_amount: Option<String>,
    pub image: Option<String>,
    pub registration_link: Option<String>,
    pub google_map_location_link: Option<String>,
    pub attachments: Vec<Attachment>,
}

impl Event {
    /// Create a minimal event with the fields the browsing engine keys on.
    /// Everything else starts empty.
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        occurs_on: Option<NaiveDate>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            occurs_on,
            start_time: None,
            end_time: None,
            location: None,
            category: None,
            status: None,
            target_audience: None,
            cost_amount: None,
            image: None,
            registration_link: None,
            google_map_location_link: None,
            attachments: Vec::new(),
        }
    }

    /// Whether admission is free. A missing, empty, or numerically-zero
    /// `cost_amount` all mean free; an unparsable value is shown as-is and
    /// treated as paid.
    pub fn is_free(&self) -> bool {
        match self.cost_amount.as_deref().map(str::trim) {
            None | Some("") => true,
            Some(raw) => raw.parse::<f64>().map(|v| v == 0.0).unwrap_or(false),
        }
    }

    /// Combined time range label, e.g. `09:00 – 17:30`, when any time
    /// string is present.
    pub fn time_label(&self) -> Option<String> {
        match (self.start_time.as_deref(), self.end_time.as_deref()) {
            (Some(start), Some(end)) => Some(format!("{} – {}", start, end)),
            (Some(start), None) => Some(start.to_string()),
            (None, Some(end)) => Some(format!("until {}", end)),
            (None, None) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dated_event(cost: Option<&str>) -> Event {
        let mut event = Event::new(
            "ev-1",
            "Harvest open day",
            NaiveDate::from_ymd_opt(2026, 3, 5),
        );
        event.cost_amount = cost.map(|c| c.to_string());
        event
    }

    #[test]
    fn test_is_free_when_cost_absent() {
        assert!(dated_event(None).is_free());
    }

    #[test]
    fn test_is_free_when_cost_blank_or_zero() {
        assert!(dated_event(Some("")).is_free());
        assert!(dated_event(Some("  ")).is_free());
        assert!(dated_event(Some("0")).is_free());
        assert!(dated_event(Some("0.00")).is_free());
    }

    #[test]
    fn test_not_free_when_cost_positive_or_unparsable() {
        assert!(!dated_event(Some("250")).is_free());
        assert!(!dated_event(Some("12.50")).is_free());
        assert!(!dated_event(Some("TBD")).is_free());
    }

    #[test]
    fn test_time_label_combinations() {
        let mut event = dated_event(None);
        assert_eq!(event.time_label(), None);

        event.start_time = Some("09:00".to_string());
        assert_eq!(event.time_label().as_deref(), Some("09:00"));

        event.end_time = Some("17:30".to_string());
        assert_eq!(event.time_label().as_deref(), Some("09:00 – 17:30"));

        event.start_time = None;
        assert_eq!(event.time_label().as_deref(), Some("until 17:30"));
    }
}
