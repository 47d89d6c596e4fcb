use log::Level;
use serde::Deserialize;

/// Console configuration, read once at startup and passed to constructors.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Origin the `/api/v1/...` endpoints are resolved against
    /// (e.g. "http://localhost:8000"); empty means same-origin.
    pub api_base_url: String,

    /// Environment label shown in the top bar (e.g. "development")
    #[serde(alias = "env")]
    pub environment: String,

    /// Serve every request from the in-process mock API
    pub enable_mock: bool,

    /// Error-reporting endpoint (DSN), if one is configured
    pub error_reporting_dsn: Option<String>,

    /// Default log level for the application
    pub log_level: Level,

    /// Maximum number of query results kept in the cache
    pub cache_capacity: usize,

    /// Age in seconds after which a cached result is refetched
    pub stale_after_secs: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_base_url: "http://localhost:8000".to_string(),
            environment: "development".to_string(),
            enable_mock: false,
            error_reporting_dsn: None,
            log_level: Level::Info,
            cache_capacity: 256,
            stale_after_secs: 300,
        }
    }
}

impl Settings {
    /// Get the full API URL for an endpoint
    pub fn api_url(&self, endpoint: &str) -> String {
        format!("{}{}", self.api_base_url.trim_end_matches('/'), endpoint)
    }

    /// Upper-cased environment label for display
    pub fn environment_label(&self) -> String {
        self.environment.to_uppercase()
    }

    /// Saturates at `TimeDelta::MAX` for values chrono cannot represent.
    pub fn stale_after(&self) -> chrono::TimeDelta {
        i64::try_from(self.stale_after_secs)
            .ok()
            .and_then(chrono::TimeDelta::try_seconds)
            .unwrap_or(chrono::TimeDelta::MAX)
    }

    pub fn error_reporting_enabled(&self) -> bool {
        self.error_reporting_dsn
            .as_deref()
            .is_some_and(|dsn| !dsn.trim().is_empty())
    }
}
