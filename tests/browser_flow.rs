// Integration tests for the event browsing flow
// Drives the controller against a scripted feed, the way the UI shell does

use std::collections::VecDeque;
use std::sync::Mutex;

use chrono::NaiveDate;
use pretty_assertions::assert_eq;

use agenda_browser::models::view_state::ViewMode;
use agenda_browser::services::browser::EventBrowser;
use agenda_browser::services::feed::{EventFeed, FeedError, FeedMeta, FeedPage, RawEvent};

/// Feed that replays a fixed script of responses and records every page it
/// was asked for.
struct ScriptedFeed {
    responses: Mutex<VecDeque<Result<FeedPage, FeedError>>>,
    requested_pages: Mutex<Vec<u32>>,
}

impl ScriptedFeed {
    fn new(responses: Vec<Result<FeedPage, FeedError>>) -> Self {
        Self {
            responses: Mutex::new(responses.into()),
            requested_pages: Mutex::new(Vec::new()),
        }
    }

    fn requested_pages(&self) -> Vec<u32> {
        self.requested_pages.lock().unwrap().clone()
    }
}

impl EventFeed for ScriptedFeed {
    fn fetch_page(&self, page: u32) -> Result<FeedPage, FeedError> {
        self.requested_pages.lock().unwrap().push(page);
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .expect("scripted feed ran out of responses")
    }
}

/// Execute the browser's pending fetch, if any, against the feed.
fn drive(browser: &mut EventBrowser, feed: &dyn EventFeed) {
    if let Some(request) = browser.take_request() {
        let result = feed.fetch_page(request.page);
        browser.apply_response(request.seq, result);
    }
}

fn raw_event(id: &str, event_date: Option<&str>) -> RawEvent {
    RawEvent {
        id: Some(id.to_string()),
        title: Some(format!("Event {}", id)),
        event_date: event_date.map(|d| d.to_string()),
        ..RawEvent::default()
    }
}

fn page(events: Vec<RawEvent>, current_page: u32, last_page: u32, total: u64) -> FeedPage {
    FeedPage {
        data: events,
        meta: FeedMeta {
            current_page,
            last_page,
            total,
        },
    }
}

fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

#[test]
fn full_calendar_session() {
    let today = ymd(2026, 8, 21);
    let feed = ScriptedFeed::new(vec![Ok(page(
        vec![
            raw_event("open-day", Some("2026-08-21")),
            raw_event("agm", Some("2026-08-04")),
            raw_event("tba", None),
        ],
        1,
        2,
        15,
    ))]);

    let mut browser = EventBrowser::new(today);
    drive(&mut browser, &feed);

    // Mounted into calendar mode with today selected and loaded
    assert_eq!(browser.view_state().mode, ViewMode::Calendar);
    assert_eq!(browser.view_state().selected_date, today);
    assert_eq!(browser.selected_day_events().len(), 1);
    assert_eq!(browser.selected_day_events()[0].id, "open-day");

    // The grid buckets only the dated events
    let grid = browser.month_grid();
    let bucketed: usize = grid.cells().iter().map(|c| c.events.len()).sum();
    assert_eq!(bucketed, 2);
    assert_eq!(browser.undated_count(), 1);

    // Selecting another day filters locally; no request goes out
    browser.select_day(ymd(2026, 8, 4));
    assert_eq!(browser.selected_day_events()[0].id, "agm");
    browser.navigate_month(1);
    browser.go_to_today();
    assert_eq!(feed.requested_pages(), vec![1]);
}

#[test]
fn switching_views_and_paginating() {
    let today = ymd(2026, 8, 21);
    let feed = ScriptedFeed::new(vec![
        Ok(page(vec![raw_event("a", Some("2026-08-02"))], 1, 3, 30)),
        Ok(page(vec![raw_event("b", Some("2026-09-14"))], 2, 3, 30)),
        Ok(page(vec![raw_event("a", Some("2026-08-02"))], 1, 3, 30)),
    ]);

    let mut browser = EventBrowser::new(today);
    drive(&mut browser, &feed);

    browser.switch_mode(ViewMode::List);
    // Already on page 1: no refetch on the switch itself
    assert!(browser.take_request().is_none());

    browser.next_page();
    drive(&mut browser, &feed);
    assert_eq!(browser.view_state().page, 2);
    assert_eq!(browser.list_events()[0].id, "b");
    assert!(browser.can_go_previous_page());
    assert!(browser.can_go_next_page());

    // Switching back to calendar resets to page 1 and refetches
    browser.switch_mode(ViewMode::Calendar);
    drive(&mut browser, &feed);
    assert_eq!(browser.view_state().page, 1);
    assert_eq!(browser.view_state().selected_date, today);
    assert_eq!(feed.requested_pages(), vec![1, 2, 1]);
}

#[test]
fn empty_feed_is_an_empty_state_not_an_error() {
    let feed = ScriptedFeed::new(vec![Ok(page(vec![], 1, 1, 0))]);

    let mut browser = EventBrowser::new(ymd(2026, 8, 21));
    drive(&mut browser, &feed);

    assert!(browser.is_empty_result());
    assert!(!browser.is_loading());
    assert_eq!(browser.error(), None);
    assert!(browser.list_events().is_empty());
    assert!(browser
        .month_grid()
        .cells()
        .iter()
        .all(|c| c.events.is_empty()));
    // Pagination controls stay pinned on the single empty page
    assert!(!browser.can_go_previous_page());
    assert!(!browser.can_go_next_page());
}

#[test]
fn fetch_failure_then_retry_recovers() {
    let feed = ScriptedFeed::new(vec![
        Err(FeedError::Network("connection refused".to_string())),
        Ok(page(vec![raw_event("a", Some("2026-08-02"))], 1, 1, 1)),
    ]);

    let mut browser = EventBrowser::new(ymd(2026, 8, 21));
    drive(&mut browser, &feed);

    // Error panel state: not loading, not empty, nothing rendered
    assert!(matches!(browser.error(), Some(FeedError::Network(_))));
    assert!(!browser.is_loading());
    assert!(!browser.is_empty_result());
    assert!(browser.list_events().is_empty());

    // Retry re-issues the identical request and recovers
    browser.retry();
    drive(&mut browser, &feed);
    assert_eq!(browser.error(), None);
    assert_eq!(browser.list_events().len(), 1);
    assert_eq!(feed.requested_pages(), vec![1, 1]);
}

#[test]
fn http_status_failure_is_distinguishable() {
    let feed = ScriptedFeed::new(vec![Err(FeedError::Status(503))]);

    let mut browser = EventBrowser::new(ymd(2026, 8, 21));
    drive(&mut browser, &feed);

    assert_eq!(browser.error(), Some(&FeedError::Status(503)));
    assert_eq!(
        browser.error().unwrap().to_string(),
        "server responded with HTTP 503"
    );
}

#[test]
fn malformed_records_never_fail_the_page() {
    // A record with no usable date and junk metadata still loads
    let sparse: RawEvent = serde_json::from_str(
        r#"{"id": 99, "title": "Mystery", "eventDate": "soon", "attachments": null}"#,
    )
    .unwrap();
    let feed = ScriptedFeed::new(vec![Ok(page(
        vec![sparse, raw_event("ok", Some("2026-08-10"))],
        1,
        1,
        2,
    ))]);

    let mut browser = EventBrowser::new(ymd(2026, 8, 21));
    drive(&mut browser, &feed);

    assert_eq!(browser.error(), None);
    assert_eq!(browser.list_events().len(), 2);
    assert_eq!(browser.undated_count(), 1);
}
