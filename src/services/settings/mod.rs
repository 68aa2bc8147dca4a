// Settings service module
// Loads and persists AppSettings as a TOML file in the platform config dir

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use directories::ProjectDirs;

use crate::models::settings::AppSettings;

/// Environment variable overriding the feed URL, e.g. for pointing a dev
/// build at a staging API without touching the config file.
pub const FEED_URL_ENV: &str = "AGENDA_BROWSER_URL";

const CONFIG_FILE_NAME: &str = "settings.toml";

/// Path of the settings file under the platform config directory.
pub fn settings_path() -> Result<PathBuf> {
    let dirs = ProjectDirs::from("", "", "agenda-browser")
        .ok_or_else(|| anyhow!("Could not determine a config directory for this platform"))?;
    Ok(dirs.config_dir().join(CONFIG_FILE_NAME))
}

/// Load settings for startup: read the config file under the platform
/// config directory, then apply the environment override.
pub fn load() -> Result<AppSettings> {
    load_with_env(&settings_path()?)
}

/// Load settings from `path` (writing one with defaults on first run),
/// then apply the environment override and validate the result.
pub fn load_with_env(path: &Path) -> Result<AppSettings> {
    let mut settings = load_from(path)?;

    if let Ok(url) = std::env::var(FEED_URL_ENV) {
        if !url.trim().is_empty() {
            log::info!("Feed URL overridden by {}", FEED_URL_ENV);
            settings.feed_url = url.trim().to_string();
        }
    }

    settings
        .validate()
        .map_err(|e| anyhow!("Invalid settings in {}: {}", path.display(), e))?;
    Ok(settings)
}

/// Read settings from `path`, creating the file with defaults when it does
/// not exist yet.
pub fn load_from(path: &Path) -> Result<AppSettings> {
    if !path.exists() {
        let defaults = AppSettings::default();
        save_to(path, &defaults)?;
        log::info!("Wrote default settings to {}", path.display());
        return Ok(defaults);
    }

    let raw = fs::read_to_string(path)
        .with_context(|| format!("Failed to read settings file {}", path.display()))?;
    let settings: AppSettings = toml::from_str(&raw)
        .with_context(|| format!("Failed to parse settings file {}", path.display()))?;
    Ok(settings)
}

/// Persist settings to `path`, creating parent directories as needed.
pub fn save_to(path: &Path, settings: &AppSettings) -> Result<()> {
    settings
        .validate()
        .map_err(|e| anyhow!("Refusing to save invalid settings: {}", e))?;

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create config directory {}", parent.display()))?;
    }

    let raw = toml::to_string_pretty(settings).context("Failed to serialize settings")?;
    fs::write(path, raw)
        .with_context(|| format!("Failed to write settings file {}", path.display()))?;
    Ok(())
}
