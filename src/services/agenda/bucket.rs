// Date-bucket index over one fetched page of events

use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::models::event::Event;

/// Calendar-day key to the events occurring that day, in fetch order.
pub type DateBucketMap = BTreeMap<NaiveDate, Vec<Event>>;

/// Per-day index over the events of the current page.
///
/// Bucketing is page-local: pagination happens on the server, so the index
/// only ever describes the page that was last fetched. It is rebuilt from
/// scratch whenever that page changes; building twice from the same slice
/// produces an equal index.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DayBuckets {
    map: DateBucketMap,
    undated_count: usize,
}

impl DayBuckets {
    /// Index `events` by their occurrence date. Events without one are
    /// skipped and counted; they still belong on the flat list surface.
    pub fn build(events: &[Event]) -> Self {
        let mut map = DateBucketMap::new();
        let mut undated_count = 0;

        for event in events {
            match event.occurs_on {
                Some(day) => map.entry(day).or_insert_with(Vec::new).push(event.clone()),
                None => undated_count += 1,
            }
        }

        if undated_count > 0 {
            log::debug!(
                "{} of {} events had no resolvable date and were left out of the day index",
                undated_count,
                events.len()
            );
        }

        Self { map, undated_count }
    }

    /// Events bucketed under `date`, in fetch order. Empty for days with
    /// no events.
    pub fn events_on(&self, date: NaiveDate) -> &[Event] {
        self.map.get(&date).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn map(&self) -> &DateBucketMap {
        &self.map
    }

    /// Number of distinct days holding at least one event.
    pub fn day_count(&self) -> usize {
        self.map.len()
    }

    /// Events skipped because no occurrence date could be resolved.
    pub fn undated_count(&self) -> usize {
        self.undated_count
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}
