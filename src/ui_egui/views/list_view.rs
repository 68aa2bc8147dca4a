// List surface
// Flat card list of the current feed page

use egui::{RichText, ScrollArea, Ui};

use crate::models::event::Event;
use crate::ui_egui::theme::BrowserTheme;

use super::render_event_card;

pub struct ListView;

impl ListView {
    /// Render the fetched page as cards in fetch order. Undated events are
    /// shown here too; only the calendar grid leaves them out.
    pub fn render(ui: &mut Ui, theme: &BrowserTheme, events: &[Event]) {
        ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                for event in events {
                    render_event_card(ui, theme, event);
                    ui.add_space(6.0);
                }
            });
    }

    /// Empty state for a page that loaded fine but holds no events.
    pub fn render_empty(ui: &mut Ui, theme: &BrowserTheme) {
        ui.vertical_centered(|ui| {
            ui.add_space(40.0);
            ui.label(RichText::new("No events to show").heading().color(theme.muted_text));
            ui.label(RichText::new("Check back later for upcoming events.").color(theme.muted_text));
        });
    }
}
