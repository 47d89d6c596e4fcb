use client::Settings;
use log::Level;
use web_sys::window;

const STORAGE_API_BASE_URL: &str = "prophet_api_base_url";
const STORAGE_ENABLE_MOCK: &str = "prophet_enable_mock";
const STORAGE_LOG_LEVEL: &str = "prophet_log_level";

/// Build-time defaults, overridable at build time through the environment.
fn build_settings() -> Settings {
    let mut settings = Settings {
        // same-origin unless configured
        api_base_url: String::new(),
        ..Settings::default()
    };

    if let Some(base_url) = option_env!("PROPHET_API_BASE_URL") {
        settings.api_base_url = base_url.to_string();
    }
    if let Some(environment) = option_env!("PROPHET_ENV") {
        settings.environment = environment.to_string();
    }
    if let Some(enable_mock) = option_env!("PROPHET_ENABLE_MOCK") {
        settings.enable_mock = parse_flag(enable_mock);
    }
    if let Some(dsn) = option_env!("PROPHET_ERROR_REPORTING_DSN") {
        settings.error_reporting_dsn = Some(dsn.to_string());
    }

    settings
}

fn parse_flag(value: &str) -> bool {
    matches!(value.trim().to_lowercase().as_str(), "true" | "1" | "yes")
}

fn parse_level(value: &str) -> Option<Level> {
    match value.to_lowercase().as_str() {
        "error" => Some(Level::Error),
        "warn" => Some(Level::Warn),
        "info" => Some(Level::Info),
        "debug" => Some(Level::Debug),
        "trace" => Some(Level::Trace),
        _ => None,
    }
}

/// Reads the console settings once at startup.
///
/// Build-time values come first; a developer can then override the API
/// base URL, mock mode and log level from localStorage.
pub fn load_settings() -> Settings {
    let mut settings = build_settings();

    let Some(window) = window() else {
        return settings;
    };

    // In development, use more verbose logging
    if let Ok(hostname) = window.location().hostname() {
        if hostname == "localhost" || hostname == "127.0.0.1" {
            settings.log_level = Level::Debug;
        }
    }

    if let Ok(Some(storage)) = window.local_storage() {
        if let Ok(Some(base_url)) = storage.get_item(STORAGE_API_BASE_URL) {
            settings.api_base_url = base_url;
        }

        if let Ok(Some(enable_mock)) = storage.get_item(STORAGE_ENABLE_MOCK) {
            settings.enable_mock = parse_flag(&enable_mock);
        }

        if let Ok(Some(log_level)) = storage.get_item(STORAGE_LOG_LEVEL) {
            if let Some(level) = parse_level(&log_level) {
                settings.log_level = level;
            }
        }
    }

    settings
}
