// Theme selection
// Follows the system dark/light preference at startup

use egui::{Color32, Visuals};

/// Palette shared by the calendar and list surfaces.
#[derive(Debug, Clone, Copy)]
pub struct BrowserTheme {
    pub is_dark: bool,
    /// Fill for cells belonging to the displayed month.
    pub cell_in_month: Color32,
    /// Fill for leading/trailing cells from neighbor months.
    pub cell_out_of_month: Color32,
    /// Outline for the cell holding today's date.
    pub today_outline: Color32,
    /// Fill for the selected day's cell.
    pub selected_fill: Color32,
    /// Marker color for days that have events.
    pub event_marker: Color32,
    pub muted_text: Color32,
}

impl BrowserTheme {
    pub fn light() -> Self {
        Self {
            is_dark: false,
            cell_in_month: Color32::from_rgb(252, 252, 252),
            cell_out_of_month: Color32::from_rgb(238, 238, 238),
            today_outline: Color32::from_rgb(0, 110, 200),
            selected_fill: Color32::from_rgb(212, 230, 248),
            event_marker: Color32::from_rgb(0, 140, 90),
            muted_text: Color32::from_rgb(120, 120, 120),
        }
    }

    pub fn dark() -> Self {
        Self {
            is_dark: true,
            cell_in_month: Color32::from_rgb(38, 38, 42),
            cell_out_of_month: Color32::from_rgb(28, 28, 31),
            today_outline: Color32::from_rgb(110, 170, 240),
            selected_fill: Color32::from_rgb(45, 65, 92),
            event_marker: Color32::from_rgb(90, 200, 150),
            muted_text: Color32::from_rgb(150, 150, 150),
        }
    }

    /// Pick light or dark from the OS preference, defaulting to light when
    /// the platform reports nothing useful.
    pub fn from_system() -> Self {
        match dark_light::detect() {
            dark_light::Mode::Dark => Self::dark(),
            dark_light::Mode::Light | dark_light::Mode::Default => Self::light(),
        }
    }

    pub fn visuals(&self) -> Visuals {
        if self.is_dark {
            Visuals::dark()
        } else {
            Visuals::light()
        }
    }
}
