mod app;
mod fetch;
pub mod theme;
mod views;

pub use app::BrowserApp;
