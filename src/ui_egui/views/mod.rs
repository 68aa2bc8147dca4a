mod calendar_view;
mod day_panel;
mod event_card;
mod list_view;

pub use calendar_view::CalendarView;
pub use day_panel::DayPanel;
pub use event_card::render_event_card;
pub use list_view::ListView;

/// Open an external link in the system browser. Failures are logged and
/// otherwise ignored; a dead link must not disturb the view.
pub fn open_external_link(url: &str) {
    if let Err(err) = webbrowser::open(url) {
        log::warn!("Failed to open {} in the system browser: {}", url, err);
    }
}
