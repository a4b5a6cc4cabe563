use std::env;
use std::fs;
use serde::Deserialize;
use crate::errors::ConfigError;
use crate::forecast::TemperatureUnit;
use crate::summary::DayWindow;

const CONFIG_ENV: &str = "WEATHERCARDS_CONFIG";
const DEFAULT_CONFIG_PATH: &str = "config.toml";

#[derive(Deserialize, Debug)]
pub struct WebServer {
    pub bind_address: String,
    pub bind_port: u16,
}

#[derive(Deserialize, Debug, Clone)]
pub struct YrConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    pub lat: f64,
    pub long: f64,
    pub user_agent: String,
    #[serde(default = "default_refresh_secs")]
    pub refresh_secs: u64,
}

#[derive(Deserialize, Debug)]
#[serde(default)]
pub struct Cards {
    pub count: usize,
    pub start_offset_days: i64,
    pub unit: TemperatureUnit,
    pub daytime_after_hour: u32,
    pub daytime_before_hour: u32,
}

impl Default for Cards {
    fn default() -> Self {
        let window = DayWindow::default();
        Cards {
            count: 5,
            start_offset_days: 0,
            unit: TemperatureUnit::Celsius,
            daytime_after_hour: window.after_hour,
            daytime_before_hour: window.before_hour,
        }
    }
}

impl Cards {
    pub fn window(&self) -> DayWindow {
        DayWindow { after_hour: self.daytime_after_hour, before_hour: self.daytime_before_hour }
    }
}

#[derive(Deserialize, Debug)]
#[serde(default)]
pub struct Log {
    pub level: String,
    pub file: Option<String>,
}

impl Default for Log {
    fn default() -> Self {
        Log { level: "info".to_string(), file: None }
    }
}

#[derive(Deserialize, Debug)]
pub struct Config {
    pub web_server: WebServer,
    pub yr: YrConfig,
    #[serde(default)]
    pub cards: Cards,
    #[serde(default)]
    pub log: Log,
}

fn default_base_url() -> String {
    "https://api.met.no/weatherapi/locationforecast/2.0".to_string()
}

fn default_refresh_secs() -> u64 {
    3600
}

/// Loads the configuration file given as first argument, in the WEATHERCARDS_CONFIG
/// environment variable or config.toml in the working directory, in that order.
///
pub fn config() -> Result<Config, ConfigError> {
    let path = env::args().nth(1)
        .or_else(|| env::var(CONFIG_ENV).ok())
        .unwrap_or_else(|| DEFAULT_CONFIG_PATH.to_string());

    let toml = fs::read_to_string(&path)
        .map_err(|e| ConfigError::Read { path: path.clone(), reason: e.to_string() })?;

    parse_config(&toml)
}

/// Parses and validates a toml configuration
///
/// # Arguments
///
/// * 'toml' - configuration document
pub fn parse_config(toml: &str) -> Result<Config, ConfigError> {
    let config: Config = toml::from_str(toml)?;

    if config.cards.count == 0 {
        return Err(ConfigError::Invalid("cards.count must be at least 1".to_string()));
    }
    let window = config.cards.window();
    if window.before_hour > 24 || window.after_hour >= window.before_hour {
        return Err(ConfigError::Invalid(format!(
            "daytime window {}..{} is empty or outside the day", window.after_hour, window.before_hour
        )));
    }
    if config.yr.refresh_secs == 0 {
        return Err(ConfigError::Invalid("yr.refresh_secs must be at least 1".to_string()));
    }

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    const MINIMAL: &str = r#"
        [web_server]
        bind_address = "127.0.0.1"
        bind_port = 8080

        [yr]
        lat = 59.9139
        long = 10.7522
        user_agent = "weathercards/0.1 someone@example.com"
    "#;

    #[test]
    fn test_defaults() {
        let config = parse_config(MINIMAL).unwrap();
        assert_eq!(config.cards.count, 5);
        assert_eq!(config.cards.start_offset_days, 0);
        assert_eq!(config.cards.unit, TemperatureUnit::Celsius);
        assert_eq!(config.cards.window(), DayWindow::default());
        assert_eq!(config.yr.refresh_secs, 3600);
        assert_eq!(config.log.level, "info");
        assert!(config.yr.base_url.starts_with("https://api.met.no/"));
    }

    #[test]
    fn test_cards_section() {
        let toml = format!("{}\n[cards]\ncount = 3\nunit = \"F\"\ndaytime_before_hour = 20\n", MINIMAL);
        let config = parse_config(&toml).unwrap();
        assert_eq!(config.cards.count, 3);
        assert_eq!(config.cards.unit, TemperatureUnit::Fahrenheit);
        assert_eq!(config.cards.window(), DayWindow { after_hour: 10, before_hour: 20 });
    }

    #[test]
    fn test_rejects_empty_window() {
        let toml = format!("{}\n[cards]\ndaytime_after_hour = 20\ndaytime_before_hour = 20\n", MINIMAL);
        assert!(parse_config(&toml).is_err());
    }

    #[test]
    fn test_rejects_zero_count() {
        let toml = format!("{}\n[cards]\ncount = 0\n", MINIMAL);
        assert!(parse_config(&toml).is_err());
    }

    #[test]
    fn test_missing_yr_section() {
        let err = parse_config("[web_server]\nbind_address = \"0.0.0.0\"\nbind_port = 80\n").unwrap_err();
        assert!(err.to_string().starts_with("ConfigError"));
    }
}
