// Application shell
// Wires the browsing controller to egui surfaces and the fetch worker

use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use chrono::Local;
use egui::{RichText, Ui};

use crate::models::settings::AppSettings;
use crate::models::view_state::ViewMode;
use crate::services::browser::EventBrowser;
use crate::services::feed::{EventFeed, HttpEventFeed};

use super::fetch::{spawn_fetch, FetchOutcome};
use super::theme::BrowserTheme;
use super::views::{CalendarView, DayPanel, ListView};

pub struct BrowserApp {
    browser: EventBrowser,
    feed: Arc<dyn EventFeed>,
    fetch_tx: Sender<FetchOutcome>,
    fetch_rx: Receiver<FetchOutcome>,
    theme: BrowserTheme,
    visuals_applied: bool,
}

impl BrowserApp {
    pub fn new(settings: &AppSettings) -> Result<Self> {
        let feed = Arc::new(HttpEventFeed::new(settings)?);
        let (fetch_tx, fetch_rx) = mpsc::channel();

        Ok(Self {
            browser: EventBrowser::new(Local::now().date_naive()),
            feed,
            fetch_tx,
            fetch_rx,
            theme: BrowserTheme::from_system(),
            visuals_applied: false,
        })
    }

    /// Drain finished fetches and dispatch any newly issued request.
    /// Called once per frame before rendering.
    fn pump_fetches(&mut self, ctx: &egui::Context) {
        while let Ok((seq, result)) = self.fetch_rx.try_recv() {
            self.browser.apply_response(seq, result);
            ctx.request_repaint();
        }

        if let Some(request) = self.browser.take_request() {
            spawn_fetch(Arc::clone(&self.feed), request, self.fetch_tx.clone());
        }

        if self.browser.is_loading() {
            ctx.request_repaint_after(Duration::from_millis(100));
        }
    }

    fn render_top_bar(&mut self, ui: &mut Ui) {
        ui.horizontal(|ui| {
            let mode = self.browser.view_state().mode;
            if ui
                .selectable_label(mode == ViewMode::Calendar, "📅 Calendar")
                .clicked()
            {
                self.browser.switch_mode(ViewMode::Calendar);
            }
            if ui.selectable_label(mode == ViewMode::List, "☰ List").clicked() {
                self.browser.switch_mode(ViewMode::List);
            }

            ui.separator();

            ui.add_enabled_ui(mode == ViewMode::Calendar, |ui| {
                if ui.button("◀").clicked() {
                    self.browser.navigate_month(-1);
                }
                if ui.button("Today").clicked() {
                    self.browser.go_to_today();
                }
                if ui.button("▶").clicked() {
                    self.browser.navigate_month(1);
                }
            });

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui
                    .add_enabled(self.browser.can_go_next_page(), egui::Button::new("Next ▶"))
                    .clicked()
                {
                    self.browser.next_page();
                }
                if let Some(meta) = self.browser.meta() {
                    ui.label(format!(
                        "Page {} of {}",
                        self.browser.view_state().page,
                        meta.last_page
                    ));
                }
                if ui
                    .add_enabled(
                        self.browser.can_go_previous_page(),
                        egui::Button::new("◀ Prev"),
                    )
                    .clicked()
                {
                    self.browser.previous_page();
                }
            });
        });
    }

    fn render_status_bar(&self, ui: &mut Ui) {
        ui.horizontal(|ui| {
            if let Some(meta) = self.browser.meta() {
                ui.label(
                    RichText::new(format!("{} events total", meta.total))
                        .small()
                        .color(self.theme.muted_text),
                );
            }
            let undated = self.browser.undated_count();
            if undated > 0 {
                ui.label(
                    RichText::new(format!("{} without a date (list only)", undated))
                        .small()
                        .color(self.theme.muted_text),
                );
            }
            if self.browser.is_loading() {
                ui.spinner();
            }
        });
    }

    fn render_error_panel(&mut self, ui: &mut Ui) {
        let message = self
            .browser
            .error()
            .map(|err| err.to_string())
            .unwrap_or_default();

        ui.vertical_centered(|ui| {
            ui.add_space(40.0);
            ui.label(RichText::new("Could not load events").heading());
            ui.label(RichText::new(message).color(self.theme.muted_text));
            ui.add_space(8.0);
            if ui.button("Retry").clicked() {
                self.browser.retry();
            }
        });
    }

    fn render_loading_skeleton(&self, ui: &mut Ui) {
        ui.vertical_centered(|ui| {
            ui.add_space(40.0);
            ui.spinner();
            ui.label(RichText::new("Loading events…").color(self.theme.muted_text));
        });
    }

    fn render_central(&mut self, ui: &mut Ui) {
        if self.browser.error().is_some() {
            self.render_error_panel(ui);
            return;
        }
        if self.browser.is_loading() {
            self.render_loading_skeleton(ui);
            return;
        }

        match self.browser.view_state().mode {
            ViewMode::Calendar => {
                let grid = self.browser.month_grid();
                let selected = self.browser.view_state().selected_date;
                if let Some(date) = CalendarView::render(ui, &self.theme, &grid, selected) {
                    self.browser.select_day(date);
                }
            }
            ViewMode::List => {
                if self.browser.is_empty_result() {
                    ListView::render_empty(ui, &self.theme);
                } else {
                    ListView::render(ui, &self.theme, self.browser.list_events());
                }
            }
        }
    }
}

impl eframe::App for BrowserApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if !self.visuals_applied {
            ctx.set_visuals(self.theme.visuals());
            self.visuals_applied = true;
        }

        self.pump_fetches(ctx);

        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            self.render_top_bar(ui);
        });

        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            self.render_status_bar(ui);
        });

        let show_day_panel = self.browser.view_state().mode == ViewMode::Calendar
            && self.browser.error().is_none();
        if show_day_panel {
            egui::SidePanel::right("day_panel")
                .default_width(280.0)
                .show(ctx, |ui| {
                    let date = self.browser.view_state().selected_date;
                    let events = self.browser.selected_day_events().to_vec();
                    let is_loading = self.browser.is_loading();
                    DayPanel::render(ui, &self.theme, date, &events, is_loading);
                });
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            self.render_central(ui);
        });
    }
}
