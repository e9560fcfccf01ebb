use crate::consts;
use ratatui::style::Style;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Program configuration read from a configuration file
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq)]
pub(crate) struct Config {
    /// Styles used to draw the board
    #[serde(default)]
    pub(crate) styles: Palette,

    /// Settings about auxiliary files
    #[serde(default)]
    pub(crate) files: FileConfig,
}

impl Config {
    /// Return the default configuration file path
    pub(crate) fn default_path() -> Result<PathBuf, ConfigError> {
        dirs::config_local_dir()
            .map(|p| p.join("gridsnake").join("config.toml"))
            .ok_or(ConfigError::NoPath)
    }

    /// Read configuration from a file on disk.  If the file does not exist and
    /// `allow_missing` is true, a default `Config` value is returned.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the file could not be read or if the file's contents
    /// could not be deserialized.
    pub(crate) fn load(path: &Path, allow_missing: bool) -> Result<Config, ConfigError> {
        let content = match fs_err::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound && allow_missing => {
                return Ok(Config::default())
            }
            Err(e) => return Err(ConfigError::Read(e)),
        };
        toml::from_str(&content).map_err(Into::into)
    }
}

/// The styles for each kind of board cell
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq)]
#[serde(from = "RawPalette")]
pub(crate) struct Palette {
    pub(crate) snake: Style,
    pub(crate) food: Style,
    pub(crate) background_even: Style,
    pub(crate) background_odd: Style,
}

impl Default for Palette {
    fn default() -> Palette {
        Palette {
            snake: consts::SNAKE_STYLE,
            food: consts::FOOD_STYLE,
            background_even: consts::BACKGROUND_EVEN_STYLE,
            background_odd: consts::BACKGROUND_ODD_STYLE,
        }
    }
}

/// Style strings as written in the configuration file, e.g., `"on #08a3ef"`
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
struct RawPalette {
    snake: Option<parse_style::Style>,
    food: Option<parse_style::Style>,
    background_even: Option<parse_style::Style>,
    background_odd: Option<parse_style::Style>,
}

impl From<RawPalette> for Palette {
    fn from(value: RawPalette) -> Palette {
        let defaults = Palette::default();
        let pick = |s: Option<parse_style::Style>, default: Style| s.map_or(default, Style::from);
        Palette {
            snake: pick(value.snake, defaults.snake),
            food: pick(value.food, defaults.food),
            background_even: pick(value.background_even, defaults.background_even),
            background_odd: pick(value.background_odd, defaults.background_odd),
        }
    }
}

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq)]
#[serde(default, rename_all = "kebab-case")]
pub(crate) struct FileConfig {
    /// Path to write diagnostic logs to.  If unset, nothing is logged.
    pub(crate) log_file: Option<PathBuf>,
}

#[derive(Debug, Error)]
pub(crate) enum ConfigError {
    #[error("failed to determine path to local configuration directory")]
    NoPath,
    #[error("failed to read configuration file")]
    Read(#[from] std::io::Error),
    #[error("failed to parse configuration file")]
    Parse(#[from] toml::de::Error),
}
