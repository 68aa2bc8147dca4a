// Selected-day side panel
// Details for the day picked in the calendar grid

use chrono::NaiveDate;
use egui::{RichText, ScrollArea, Ui};

use crate::models::event::Event;
use crate::ui_egui::theme::BrowserTheme;

use super::render_event_card;

/// What fills the panel below the date header. The loading hint follows the
/// fetch-in-flight flag, never the mere absence of events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PanelBody {
    Loading,
    Empty,
    Events,
}

fn body_for(is_loading: bool, event_count: usize) -> PanelBody {
    if is_loading {
        PanelBody::Loading
    } else if event_count == 0 {
        PanelBody::Empty
    } else {
        PanelBody::Events
    }
}

pub struct DayPanel;

impl DayPanel {
    pub fn render(
        ui: &mut Ui,
        theme: &BrowserTheme,
        date: NaiveDate,
        events: &[Event],
        is_loading: bool,
    ) {
        ui.label(RichText::new(date.format("%A").to_string()).strong());
        ui.label(
            RichText::new(date.format("%-d %B %Y").to_string()).color(theme.muted_text),
        );
        ui.separator();

        match body_for(is_loading, events.len()) {
            PanelBody::Loading => {
                ui.horizontal(|ui| {
                    ui.spinner();
                    ui.label(RichText::new("Loading events…").color(theme.muted_text));
                });
            }
            PanelBody::Empty => {
                ui.label(RichText::new("No events on this day.").color(theme.muted_text));
            }
            PanelBody::Events => {
                ScrollArea::vertical()
                    .auto_shrink([false, false])
                    .show(ui, |ui| {
                        for event in events {
                            render_event_card(ui, theme, event);
                            ui.add_space(6.0);
                        }
                    });
            }
        }
    }
}
