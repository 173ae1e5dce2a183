use chrono::Weekday;
use chrono::format::{Item, StrftimeItems};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::app::ViewType;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),
    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),
    #[error("Failed to serialize config: {0}")]
    SerializeError(#[from] toml::ser::Error),
    #[error("Invalid config value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    pub ui: UiConfig,
    pub calendar: CalendarConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct UiConfig {
    pub default_view: String,
    pub theme: String,
    pub show_weekends: bool,
    pub date_format: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct CalendarConfig {
    /// Weekday on which selections are refused and cells are dimmed.
    pub disabled_weekday: String,
    pub slot_min_hour: u32,
    pub slot_max_hour: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default filter directive; `RUST_LOG` takes precedence.
    pub level: String,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            default_view: "Month".to_string(),
            theme: "default".to_string(),
            show_weekends: true,
            date_format: "%Y-%m-%d".to_string(),
        }
    }
}

impl Default for CalendarConfig {
    fn default() -> Self {
        Self {
            disabled_weekday: "Sunday".to_string(),
            slot_min_hour: 8,
            slot_max_hour: 20,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

impl Config {
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load_or_create() -> Result<Self, ConfigError> {
        let config_path = Self::config_path();

        if config_path.exists() {
            Self::load_from(&config_path)
        } else {
            let config = Self::default();
            config.save_to(&config_path)?;
            Ok(config)
        }
    }

    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    pub fn config_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("eventcal")
    }

    pub fn config_path() -> PathBuf {
        Self::config_dir().join("config.toml")
    }

    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;

        Ok(())
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.disabled_weekday()?;
        self.default_view()?;

        if StrftimeItems::new(&self.ui.date_format).any(|item| matches!(item, Item::Error)) {
            return Err(ConfigError::InvalidValue {
                field: "ui.date_format",
                reason: format!("'{}' is not a valid date format", self.ui.date_format),
            });
        }

        let CalendarConfig { slot_min_hour, slot_max_hour, .. } = self.calendar;
        if slot_min_hour >= slot_max_hour || slot_max_hour > 24 {
            return Err(ConfigError::InvalidValue {
                field: "calendar.slot_min_hour/slot_max_hour",
                reason: format!("{}..{} is not a valid hour range", slot_min_hour, slot_max_hour),
            });
        }

        Ok(())
    }

    pub fn disabled_weekday(&self) -> Result<Weekday, ConfigError> {
        self.calendar
            .disabled_weekday
            .parse::<Weekday>()
            .map_err(|_| ConfigError::InvalidValue {
                field: "calendar.disabled_weekday",
                reason: format!("unknown weekday '{}'", self.calendar.disabled_weekday),
            })
    }

    pub fn default_view(&self) -> Result<ViewType, ConfigError> {
        ViewType::from_name(&self.ui.default_view).ok_or_else(|| ConfigError::InvalidValue {
            field: "ui.default_view",
            reason: format!("unknown view '{}'", self.ui.default_view),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn default_config_disables_sunday() {
        let config = Config::default();
        assert_eq!(config.disabled_weekday().unwrap(), Weekday::Sun);
    }

    #[test]
    fn default_config_shows_eight_to_eight() {
        let config = Config::default();
        assert_eq!(config.calendar.slot_min_hour, 8);
        assert_eq!(config.calendar.slot_max_hour, 20);
    }

    #[test]
    fn default_config_is_valid() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn parse_valid_toml_config() {
        let toml_content = r#"
            [ui]
            default_view = "Week"
            theme = "nord"
            show_weekends = false
            date_format = "%d/%m/%Y"

            [calendar]
            disabled_weekday = "Saturday"
            slot_min_hour = 7
            slot_max_hour = 19

            [logging]
            level = "debug"
        "#;

        let config = Config::from_toml(toml_content).unwrap();

        assert_eq!(config.default_view().unwrap(), ViewType::Week);
        assert_eq!(config.ui.theme, "nord");
        assert!(!config.ui.show_weekends);
        assert_eq!(config.disabled_weekday().unwrap(), Weekday::Sat);
        assert_eq!(config.calendar.slot_min_hour, 7);
        assert_eq!(config.logging.level, "debug");
    }

    #[test]
    fn missing_sections_fall_back_to_defaults() {
        let config = Config::from_toml("[ui]\ntheme = \"gruvbox\"\n").unwrap();

        assert_eq!(config.ui.theme, "gruvbox");
        assert_eq!(config.ui.default_view, "Month");
        assert_eq!(config.calendar, CalendarConfig::default());
    }

    #[test]
    fn parse_invalid_toml_returns_error() {
        let result = Config::from_toml("this is not valid toml");
        assert!(matches!(result, Err(ConfigError::ParseError(_))));
    }

    #[test]
    fn unknown_weekday_is_rejected() {
        let result = Config::from_toml("[calendar]\ndisabled_weekday = \"Funday\"\n");
        assert!(matches!(
            result,
            Err(ConfigError::InvalidValue { field: "calendar.disabled_weekday", .. })
        ));
    }

    #[test]
    fn inverted_hour_range_is_rejected() {
        let result = Config::from_toml("[calendar]\nslot_min_hour = 20\nslot_max_hour = 8\n");
        assert!(matches!(result, Err(ConfigError::InvalidValue { .. })));
    }

    #[test]
    fn unknown_view_is_rejected() {
        let result = Config::from_toml("[ui]\ndefault_view = \"Year\"\n");
        assert!(matches!(result, Err(ConfigError::InvalidValue { field: "ui.default_view", .. })));
    }

    #[test]
    fn malformed_date_format_is_rejected() {
        let result = Config::from_toml("[ui]\ndate_format = \"%Y-%\"\n");
        assert!(matches!(result, Err(ConfigError::InvalidValue { field: "ui.date_format", .. })));
    }

    #[test]
    fn saved_config_loads_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");
        let mut config = Config::default();
        config.ui.theme = "gruvbox".to_string();
        config.calendar.disabled_weekday = "Saturday".to_string();

        config.save_to(&path).unwrap();
        let loaded = Config::load_from(&path).unwrap();

        assert_eq!(loaded, config);
    }

    #[test]
    fn loading_missing_file_is_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = Config::load_from(&dir.path().join("absent.toml"));
        assert!(matches!(result, Err(ConfigError::ReadError(_))));
    }
}
