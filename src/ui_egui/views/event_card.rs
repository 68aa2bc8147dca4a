// Shared event card rendering
// Used by both the list surface and the selected-day panel

use egui::{RichText, Ui};

use crate::models::event::Event;
use crate::ui_egui::theme::BrowserTheme;

use super::open_external_link;

/// Render one event as a card: title, date/time line, metadata, admission,
/// attachments, and the external link buttons.
pub fn render_event_card(ui: &mut Ui, theme: &BrowserTheme, event: &Event) {
    egui::Frame::group(ui.style())
        .inner_margin(egui::Margin::same(8.0))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());

            ui.label(RichText::new(&event.title).strong().size(15.0));

            let mut when = match event.occurs_on {
                Some(date) => date.format("%A, %-d %B %Y").to_string(),
                None => "Date to be announced".to_string(),
            };
            if let Some(times) = event.time_label() {
                when.push_str(" · ");
                when.push_str(&times);
            }
            ui.label(RichText::new(when).color(theme.muted_text));

            if let Some(location) = &event.location {
                ui.label(format!("📍 {}", location));
            }

            ui.horizontal_wrapped(|ui| {
                if let Some(category) = &event.category {
                    ui.label(RichText::new(category).small().color(theme.event_marker));
                }
                if let Some(status) = &event.status {
                    ui.label(RichText::new(status).small().color(theme.muted_text));
                }
                if let Some(audience) = &event.target_audience {
                    ui.label(
                        RichText::new(format!("For: {}", audience))
                            .small()
                            .color(theme.muted_text),
                    );
                }
            });

            if event.is_free() {
                ui.label(RichText::new("Free admission").small());
            } else if let Some(cost) = &event.cost_amount {
                ui.label(RichText::new(format!("Admission: {}", cost)).small());
            }

            if !event.attachments.is_empty() {
                ui.label(
                    RichText::new(format!(
                        "Attachments: {}",
                        event
                            .attachments
                            .iter()
                            .map(|a| a.file_name.as_str())
                            .collect::<Vec<_>>()
                            .join(", ")
                    ))
                    .small()
                    .color(theme.muted_text),
                );
            }

            ui.horizontal(|ui| {
                if let Some(link) = &event.registration_link {
                    if ui.small_button("Register").clicked() {
                        open_external_link(link);
                    }
                }
                if let Some(link) = &event.google_map_location_link {
                    if ui.small_button("Map").clicked() {
                        open_external_link(link);
                    }
                }
            });
        });
}
