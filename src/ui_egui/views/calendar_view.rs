// Calendar surface
// Month grid of day cells; clicking a cell selects it for the side panel

use chrono::{Datelike, NaiveDate};
use egui::{Align2, FontId, RichText, Sense, Stroke, Ui, Vec2};

use crate::services::agenda::{DayCell, MonthGrid, WEEKDAY_LABELS};
use crate::ui_egui::theme::BrowserTheme;

const CELL_HEIGHT: f32 = 64.0;
const HEADER_HEIGHT: f32 = 22.0;

pub struct CalendarView;

impl CalendarView {
    /// Render the grid. Returns the date of a clicked cell, if any; the
    /// click is a display selection only, never a fetch.
    pub fn render(
        ui: &mut Ui,
        theme: &BrowserTheme,
        grid: &MonthGrid,
        selected_date: NaiveDate,
    ) -> Option<NaiveDate> {
        let mut clicked = None;

        ui.label(RichText::new(grid.title()).heading());
        ui.add_space(4.0);

        let column_width =
            (ui.available_width() - ui.spacing().item_spacing.x * 6.0).max(7.0) / 7.0;

        ui.horizontal(|ui| {
            for label in WEEKDAY_LABELS {
                let (rect, _) = ui.allocate_exact_size(
                    Vec2::new(column_width, HEADER_HEIGHT),
                    Sense::hover(),
                );
                ui.painter().text(
                    rect.center(),
                    Align2::CENTER_CENTER,
                    label,
                    FontId::proportional(13.0),
                    theme.muted_text,
                );
            }
        });

        for week in grid.weeks() {
            ui.horizontal(|ui| {
                for cell in week {
                    if Self::render_cell(ui, theme, cell, selected_date, column_width) {
                        clicked = Some(cell.date);
                    }
                }
            });
        }

        clicked
    }

    /// Render one day cell; true when it was clicked.
    fn render_cell(
        ui: &mut Ui,
        theme: &BrowserTheme,
        cell: &DayCell,
        selected_date: NaiveDate,
        width: f32,
    ) -> bool {
        let (rect, mut response) =
            ui.allocate_exact_size(Vec2::new(width, CELL_HEIGHT), Sense::click());
        let painter = ui.painter();

        let fill = if cell.date == selected_date {
            theme.selected_fill
        } else if cell.in_month {
            theme.cell_in_month
        } else {
            theme.cell_out_of_month
        };
        painter.rect_filled(rect, 3.0, fill);

        if cell.is_today {
            painter.rect_stroke(rect.shrink(1.0), 3.0, Stroke::new(2.0, theme.today_outline));
        }

        let day_color = if cell.in_month {
            ui.visuals().text_color()
        } else {
            theme.muted_text
        };
        painter.text(
            rect.left_top() + Vec2::new(6.0, 4.0),
            Align2::LEFT_TOP,
            cell.date.day().to_string(),
            FontId::proportional(13.0),
            day_color,
        );

        if !cell.events.is_empty() {
            painter.text(
                rect.left_bottom() + Vec2::new(6.0, -4.0),
                Align2::LEFT_BOTTOM,
                format!("● {}", cell.events.len()),
                FontId::proportional(11.0),
                theme.event_marker,
            );
            response = response.on_hover_text(
                cell.events
                    .iter()
                    .map(|e| e.title.as_str())
                    .collect::<Vec<_>>()
                    .join("\n"),
            );
        }

        response.clicked()
    }
}
