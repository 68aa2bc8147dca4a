// Browser service module
// The view controller: browsing state plus the fetch lifecycle

use chrono::NaiveDate;

use crate::models::event::Event;
use crate::models::view_state::{ViewMode, ViewState};
use crate::services::agenda::{DayBuckets, MonthGrid};
use crate::services::feed::{FeedError, FeedMeta, FeedPage};

/// A page fetch the browser wants executed.
///
/// The browser never performs IO itself; it hands these to a driver (the UI
/// shell, or a test harness) which runs them against an
/// [`EventFeed`](crate::services::feed::EventFeed) and reports back through
/// [`EventBrowser::apply_response`]. `seq` increases with every issued
/// request and is echoed back so late responses from superseded requests can
/// be told apart from the current one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchRequest {
    pub seq: u64,
    pub page: u32,
}

/// A successfully loaded page, normalized and indexed.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadedPage {
    /// Normalized events in fetch order, undated ones included.
    pub events: Vec<Event>,
    /// Per-day index over `events`; undated events are counted, not indexed.
    pub buckets: DayBuckets,
    pub meta: FeedMeta,
}

/// Where the current page load stands. Loading and failure are distinct
/// states on purpose: skeletons follow `Loading`, the error panel follows
/// `Failed`, and neither is inferred from data being absent.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadPhase {
    Loading,
    Ready(LoadedPage),
    Failed { error: FeedError, page: u32 },
}

/// The event browsing controller.
///
/// Owns the [`ViewState`] and the load phase, and applies the transition
/// rules: switching surface resets the page, month navigation and day
/// selection only ever touch the calendar (no refetch), page changes are
/// clamped to the server's reported page count and trigger a refetch.
///
/// A failed fetch replaces the page contents with an error panel; nothing
/// stale stays visible underneath it, and recovery is the explicit
/// [`retry`](Self::retry) action re-issuing the identical request.
pub struct EventBrowser {
    state: ViewState,
    today: NaiveDate,
    phase: LoadPhase,
    /// Sequence number of the most recently issued request. Responses
    /// carrying an older sequence are discarded.
    issued_seq: u64,
    pending: Option<FetchRequest>,
    /// Pagination metadata from the last successful fetch; page moves are
    /// ignored until the server has told us how many pages exist.
    known_meta: Option<FeedMeta>,
}

impl EventBrowser {
    /// Create the browser in its mount state (calendar view, page 1, today
    /// selected) with the first page fetch already queued.
    pub fn new(today: NaiveDate) -> Self {
        let mut browser = Self {
            state: ViewState::initial(today),
            today,
            phase: LoadPhase::Loading,
            issued_seq: 0,
            pending: None,
            known_meta: None,
        };
        browser.issue_fetch();
        browser
    }

    fn issue_fetch(&mut self) {
        self.issued_seq += 1;
        let request = FetchRequest {
            seq: self.issued_seq,
            page: self.state.page,
        };
        log::debug!("Issuing fetch #{} for page {}", request.seq, request.page);
        self.pending = Some(request);
        self.phase = LoadPhase::Loading;
    }

    /// The fetch the driver should execute next, if any. Taking it marks it
    /// in flight; the browser stays in the loading phase until the matching
    /// response arrives.
    pub fn take_request(&mut self) -> Option<FetchRequest> {
        self.pending.take()
    }

    /// Feed back the outcome of a fetch issued earlier.
    ///
    /// A response whose sequence is not the latest issued one belongs to a
    /// superseded request and is dropped, so a slow page-2 response can
    /// never overwrite the page-3 data the user asked for afterwards.
    pub fn apply_response(&mut self, seq: u64, result: Result<FeedPage, FeedError>) {
        if seq != self.issued_seq {
            log::debug!(
                "Discarding stale fetch response #{} (latest issued is #{})",
                seq,
                self.issued_seq
            );
            return;
        }

        match result {
            Ok(page) => {
                let events: Vec<Event> = page
                    .data
                    .into_iter()
                    .map(|raw| raw.into_event())
                    .collect();
                let buckets = DayBuckets::build(&events);
                log::debug!(
                    "Fetch #{} loaded {} events over {} days (page {}/{})",
                    seq,
                    events.len(),
                    buckets.day_count(),
                    page.meta.current_page,
                    page.meta.last_page
                );
                self.known_meta = Some(page.meta);
                self.phase = LoadPhase::Ready(LoadedPage {
                    events,
                    buckets,
                    meta: page.meta,
                });
            }
            Err(error) => {
                log::warn!("Fetch #{} failed: {}", seq, error);
                self.phase = LoadPhase::Failed {
                    error,
                    page: self.state.page,
                };
            }
        }
    }

    /// Re-issue the request that just failed. Only meaningful from the
    /// failed phase; a no-op otherwise.
    pub fn retry(&mut self) {
        if matches!(self.phase, LoadPhase::Failed { .. }) {
            self.issue_fetch();
        }
    }

    /// Switch between the calendar and list surfaces. Resets the page to 1;
    /// the displayed month and selected day are left alone. Refetches only
    /// when the page actually changed, since the feed query depends on
    /// nothing but the page number.
    pub fn switch_mode(&mut self, mode: ViewMode) {
        if self.state.mode == mode {
            return;
        }
        let previous_page = self.state.page;
        self.state = self.state.with_mode(mode);
        if self.state.page != previous_page {
            self.issue_fetch();
        }
    }

    /// Show the previous/next month. Calendar mode only; purely a display
    /// change, never a fetch.
    pub fn navigate_month(&mut self, delta_months: i32) {
        if self.state.mode != ViewMode::Calendar {
            log::debug!("Ignoring month navigation outside calendar mode");
            return;
        }
        self.state = self.state.with_month_shifted(delta_months);
    }

    /// Jump the calendar back to the current month.
    pub fn go_to_today(&mut self) {
        if self.state.mode != ViewMode::Calendar {
            log::debug!("Ignoring today-jump outside calendar mode");
            return;
        }
        self.state = self.state.with_current_month(self.today);
    }

    /// Pick the day whose events fill the side panel. Calendar mode only; a
    /// display filter over the already-fetched page, never a fetch.
    pub fn select_day(&mut self, date: NaiveDate) {
        if self.state.mode != ViewMode::Calendar {
            log::debug!("Ignoring day selection outside calendar mode");
            return;
        }
        self.state = self.state.with_selected_date(date);
    }

    /// Move to a different feed page, clamped into `[1, last_page]`.
    /// Ignored until a successful fetch has reported the page count.
    pub fn go_to_page(&mut self, page: u32) {
        let Some(meta) = self.known_meta else {
            log::debug!("Ignoring page change before pagination metadata is known");
            return;
        };
        let previous_page = self.state.page;
        self.state = self.state.with_page(page, meta.last_page);
        if self.state.page != previous_page {
            self.issue_fetch();
        }
    }

    pub fn next_page(&mut self) {
        self.go_to_page(self.state.page.saturating_add(1));
    }

    pub fn previous_page(&mut self) {
        self.go_to_page(self.state.page.saturating_sub(1));
    }

    // --- derived render surfaces ---

    pub fn view_state(&self) -> &ViewState {
        &self.state
    }

    pub fn phase(&self) -> &LoadPhase {
        &self.phase
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.phase, LoadPhase::Loading)
    }

    /// The failure behind the error panel, when there is one.
    pub fn error(&self) -> Option<&FeedError> {
        match &self.phase {
            LoadPhase::Failed { error, .. } => Some(error),
            _ => None,
        }
    }

    fn loaded(&self) -> Option<&LoadedPage> {
        match &self.phase {
            LoadPhase::Ready(page) => Some(page),
            _ => None,
        }
    }

    /// Whether the current page loaded fine and holds zero events. Distinct
    /// from both the loading and error states.
    pub fn is_empty_result(&self) -> bool {
        self.loaded().is_some_and(|page| page.events.is_empty())
    }

    /// Events of the loaded page in fetch order, for the list surface.
    /// Includes undated events; those simply never appear in the grid.
    pub fn list_events(&self) -> &[Event] {
        self.loaded().map(|page| page.events.as_slice()).unwrap_or(&[])
    }

    /// Events bucketed under the selected day, for the side panel.
    pub fn selected_day_events(&self) -> &[Event] {
        self.loaded()
            .map(|page| page.buckets.events_on(self.state.selected_date))
            .unwrap_or(&[])
    }

    /// Number of loaded events that resolved no occurrence date.
    pub fn undated_count(&self) -> usize {
        self.loaded()
            .map(|page| page.buckets.undated_count())
            .unwrap_or(0)
    }

    /// Build the grid for the displayed month over the loaded page's
    /// buckets. An empty grid while loading or failed keeps the calendar
    /// chrome stable.
    pub fn month_grid(&self) -> MonthGrid {
        match self.loaded() {
            Some(page) => MonthGrid::build(self.state.displayed_month, self.today, &page.buckets),
            None => {
                MonthGrid::build(self.state.displayed_month, self.today, &DayBuckets::default())
            }
        }
    }

    pub fn meta(&self) -> Option<FeedMeta> {
        self.known_meta
    }

    /// Whether the previous-page control should be enabled.
    pub fn can_go_previous_page(&self) -> bool {
        self.known_meta.is_some() && self.state.page > 1
    }

    /// Whether the next-page control should be enabled.
    pub fn can_go_next_page(&self) -> bool {
        self.known_meta
            .is_some_and(|meta| self.state.page < meta.last_page)
    }
}
