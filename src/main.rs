// Agenda Browser
// Main entry point

use agenda_browser::models::settings::AppSettings;
use agenda_browser::services::settings;
use agenda_browser::ui_egui::BrowserApp;

fn main() -> eframe::Result<()> {
    // Initialize logging
    env_logger::init();

    log::info!("Starting Agenda Browser");

    let settings = match settings::load() {
        Ok(settings) => settings,
        Err(err) => {
            log::error!(
                "Failed to load settings: {:#}; continuing with defaults",
                err
            );
            AppSettings::default()
        }
    };
    log::info!("Event feed: {}", settings.feed_url);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1150.0, 780.0])
            .with_min_inner_size([800.0, 600.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Agenda Browser",
        options,
        Box::new(move |_cc| {
            let app = BrowserApp::new(&settings)
                .map_err(|err| -> Box<dyn std::error::Error + Send + Sync> { err.into() })?;
            Ok(Box::new(app) as Box<dyn eframe::App>)
        }),
    )
}
