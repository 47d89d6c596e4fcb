use ::config::{Config, Environment, File};
use client::Settings;
use log::Level;
use std::path::PathBuf;
use thiserror::Error;

/// Optional config file, looked up as `prophet-console.toml` (or any other
/// format the `config` crate recognises) in the working directory.
pub const CONFIG_FILE: &str = "prophet-console";
pub const ENV_PREFIX: &str = "PROPHET";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read configuration: {0}")]
    Load(#[from] ::config::ConfigError),

    #[error("invalid api_base_url '{0}': expected an http:// or https:// URL")]
    InvalidBaseUrl(String),
}

/// Command-line values that take precedence over file and environment.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub api_base_url: Option<String>,
    pub mock: bool,
    pub environment: Option<String>,
    pub log_level: Option<Level>,
}

/// Settings together with where they were read from. Loading happens
/// before tracing is installed, so the sources are reported afterwards.
#[derive(Debug)]
pub struct LoadedSettings {
    pub settings: Settings,
    pub env_file: Option<PathBuf>,
}

impl LoadedSettings {
    pub fn sources(&self) -> String {
        let env_file = match &self.env_file {
            Some(path) => path.display().to_string(),
            None => "no .env file".to_string(),
        };
        format!(
            "{} (optional), {}_* variables, {}",
            CONFIG_FILE, ENV_PREFIX, env_file
        )
    }
}

/// Reads the console settings once: defaults, then the optional config
/// file, then `PROPHET_*` variables (after `.env` is loaded), then flags.
pub fn load_settings(overrides: &Overrides) -> Result<LoadedSettings, ConfigError> {
    let env_file = dotenvy::dotenv().ok();
    let settings = load_from(CONFIG_FILE, Environment::with_prefix(ENV_PREFIX), overrides)?;
    Ok(LoadedSettings { settings, env_file })
}

fn load_from(file: &str, env: Environment, overrides: &Overrides) -> Result<Settings, ConfigError> {
    let mut settings: Settings = Config::builder()
        .add_source(File::with_name(file).required(false))
        .add_source(env.try_parsing(true))
        .build()?
        .try_deserialize()?;

    if let Some(api_base_url) = &overrides.api_base_url {
        settings.api_base_url = api_base_url.clone();
    }
    if overrides.mock {
        settings.enable_mock = true;
    }
    if let Some(environment) = &overrides.environment {
        settings.environment = environment.clone();
    }
    if let Some(level) = overrides.log_level {
        settings.log_level = level;
    }

    validate(&settings)?;
    Ok(settings)
}

fn validate(settings: &Settings) -> Result<(), ConfigError> {
    // the base URL is never used in mock mode
    if settings.enable_mock {
        return Ok(());
    }
    let url = settings.api_base_url.trim();
    if url.starts_with("http://") || url.starts_with("https://") {
        Ok(())
    } else {
        Err(ConfigError::InvalidBaseUrl(settings.api_base_url.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    const NO_FILE: &str = "does-not-exist/prophet-console";

    fn env(vars: &[(&str, &str)]) -> Environment {
        let source: HashMap<String, String> = vars
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect();
        Environment::with_prefix(ENV_PREFIX).source(Some(source))
    }

    #[test]
    fn test_defaults_without_sources() {
        let settings = load_from(NO_FILE, env(&[]), &Overrides::default()).unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_environment_variables() {
        let settings = load_from(
            NO_FILE,
            env(&[
                ("PROPHET_API_BASE_URL", "https://analytics.example.gov.au"),
                ("PROPHET_ENV", "staging"),
                ("PROPHET_ENABLE_MOCK", "true"),
                ("PROPHET_LOG_LEVEL", "debug"),
            ]),
            &Overrides::default(),
        )
        .unwrap();

        assert_eq!(settings.api_base_url, "https://analytics.example.gov.au");
        assert_eq!(settings.environment, "staging");
        assert!(settings.enable_mock);
        assert_eq!(settings.log_level, Level::Debug);
    }

    #[test]
    fn test_flags_override_environment() {
        let overrides = Overrides {
            api_base_url: Some("http://127.0.0.1:9000".to_string()),
            environment: Some("ci".to_string()),
            ..Overrides::default()
        };
        let settings = load_from(
            NO_FILE,
            env(&[("PROPHET_API_BASE_URL", "https://analytics.example.gov.au")]),
            &overrides,
        )
        .unwrap();

        assert_eq!(settings.api_base_url, "http://127.0.0.1:9000");
        assert_eq!(settings.environment, "ci");
    }

    #[test]
    fn test_invalid_base_url_is_rejected() {
        let overrides = Overrides {
            api_base_url: Some("analytics.example".to_string()),
            ..Overrides::default()
        };
        let result = load_from(NO_FILE, env(&[]), &overrides);
        assert!(matches!(result, Err(ConfigError::InvalidBaseUrl(_))));
    }

    #[test]
    fn test_mock_mode_ignores_base_url() {
        let overrides = Overrides {
            api_base_url: Some(String::new()),
            mock: true,
            ..Overrides::default()
        };
        let settings = load_from(NO_FILE, env(&[]), &overrides).unwrap();
        assert!(settings.enable_mock);
    }

    #[test]
    fn test_huge_stale_after_loads() {
        let settings = load_from(
            NO_FILE,
            env(&[("PROPHET_STALE_AFTER_SECS", "9000000000000000000")]),
            &Overrides::default(),
        )
        .unwrap();
        assert_eq!(settings.stale_after_secs, 9_000_000_000_000_000_000);
        assert!(settings.stale_after().num_days() > 365);
    }

    #[test]
    fn test_loaded_sources() {
        let mut loaded = LoadedSettings {
            settings: Settings::default(),
            env_file: None,
        };
        assert_eq!(
            loaded.sources(),
            "prophet-console (optional), PROPHET_* variables, no .env file"
        );

        loaded.env_file = Some(PathBuf::from("/srv/console/.env"));
        assert!(loaded.sources().ends_with("PROPHET_* variables, /srv/console/.env"));
    }
}
