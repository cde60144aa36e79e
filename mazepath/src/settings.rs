use std::{
    fs, io,
    path::{Path, PathBuf},
};

use ron::extensions::Extensions;
use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("Cannot read settings file {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Error reading settings file ({path:?}), {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: ron::error::SpannedError,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum LogLevel {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    /// Raises the level by `steps`, saturating at [`LogLevel::Trace`].
    pub fn raised(self, steps: u8) -> Self {
        use LogLevel::*;
        const ORDER: [LogLevel; 6] = [Off, Error, Warn, Info, Debug, Trace];

        let idx = ORDER.iter().position(|&l| l == self).unwrap_or(0);
        ORDER[(idx + steps as usize).min(ORDER.len() - 1)]
    }

    pub fn to_filter(self) -> log::LevelFilter {
        match self {
            LogLevel::Off => log::LevelFilter::Off,
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Charset {
    pub wall: char,
    pub passage: char,
    pub path: char,
}

impl Default for Charset {
    fn default() -> Self {
        Self {
            wall: '#',
            passage: ' ',
            path: '*',
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub rows: usize,
    pub cols: usize,
    pub seed: Option<u64>,
    pub color: bool,
    pub log_level: LogLevel,
    pub charset: Charset,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            rows: 11,
            cols: 11,
            seed: None,
            color: true,
            log_level: LogLevel::Warn,
            charset: Charset::default(),
        }
    }
}

/// Values given on the command line, they take precedence over the settings file.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub rows: Option<usize>,
    pub cols: Option<usize>,
    pub seed: Option<u64>,
    pub no_color: bool,
}

impl Settings {
    pub fn with_overrides(mut self, overrides: &Overrides) -> Self {
        if let Some(rows) = overrides.rows {
            self.rows = rows;
        }
        if let Some(cols) = overrides.cols {
            self.cols = cols;
        }
        if overrides.seed.is_some() {
            self.seed = overrides.seed;
        }
        if overrides.no_color {
            self.color = false;
        }
        self
    }

    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("mazepath")
            .join("settings.ron")
    }

    /// Loads settings from `path`, a missing file means default settings.
    pub fn load(path: &Path) -> Result<Self, SettingsError> {
        match fs::read_to_string(path) {
            Ok(content) => Self::from_ron(&content).map_err(|source| SettingsError::Parse {
                path: path.to_path_buf(),
                source,
            }),
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                log::info!("No settings file at {:?}, using defaults", path);
                Ok(Self::default())
            }
            Err(source) => Err(SettingsError::Io {
                path: path.to_path_buf(),
                source,
            }),
        }
    }

    pub fn from_ron(content: &str) -> Result<Self, ron::error::SpannedError> {
        let options = ron::Options::default().with_default_extension(Extensions::IMPLICIT_SOME);
        options.from_str(content)
    }
}
