use std::{fs, path::Path, path::PathBuf};

use ron::{extensions::Extensions, ser::PrettyConfig};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::Dims;

const DEFAULT_COLS: i32 = 50;
const DEFAULT_ROWS: i32 = 30;

#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("IO error; {0}")]
    Io(#[from] std::io::Error),
    #[error("Settings parse error; {0}")]
    Parse(#[from] ron::error::SpannedError),
    #[error("Settings serialize error; {0}")]
    Serialize(#[from] ron::Error),
    #[error("No preference directory on this platform")]
    NoPreferenceDir,
}

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MazeSettings {
    #[serde(default)]
    pub cols: Option<i32>,
    #[serde(default)]
    pub rows: Option<i32>,
    #[serde(default)]
    pub start: Option<Dims>,
    #[serde(default)]
    pub end: Option<Dims>,
    #[serde(default)]
    pub seed: Option<u64>,
}

impl MazeSettings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fields set in `other` win over the ones in `self`.
    pub fn merge(self, other: MazeSettings) -> Self {
        MazeSettings {
            cols: other.cols.or(self.cols),
            rows: other.rows.or(self.rows),
            start: other.start.or(self.start),
            end: other.end.or(self.end),
            seed: other.seed.or(self.seed),
        }
    }

    pub fn set_cols(mut self, value: i32) -> Self {
        self.cols = Some(value);
        self
    }

    pub fn get_cols(&self) -> i32 {
        self.cols.unwrap_or(DEFAULT_COLS)
    }

    pub fn set_rows(mut self, value: i32) -> Self {
        self.rows = Some(value);
        self
    }

    pub fn get_rows(&self) -> i32 {
        self.rows.unwrap_or(DEFAULT_ROWS)
    }

    pub fn set_start(mut self, value: Dims) -> Self {
        self.start = Some(value);
        self
    }

    pub fn get_start(&self) -> Dims {
        self.start.unwrap_or(Dims::ZERO)
    }

    pub fn set_end(mut self, value: Dims) -> Self {
        self.end = Some(value);
        self
    }

    /// Defaults to the bottom-right cell.
    pub fn get_end(&self) -> Dims {
        self.end
            .unwrap_or_else(|| Dims(self.get_cols(), self.get_rows()) - Dims::ONE)
    }

    pub fn set_seed(mut self, value: u64) -> Self {
        self.seed = Some(value);
        self
    }

    pub fn get_seed(&self) -> Option<u64> {
        self.seed
    }

    pub fn default_path() -> Result<PathBuf, SettingsError> {
        dirs::preference_dir()
            .map(|dir| dir.join("gridmaze").join("settings.ron"))
            .ok_or(SettingsError::NoPreferenceDir)
    }

    fn options() -> ron::Options {
        ron::Options::default().with_default_extension(Extensions::IMPLICIT_SOME)
    }

    pub fn from_ron(text: &str) -> Result<Self, SettingsError> {
        Ok(Self::options().from_str(text)?)
    }

    pub fn to_ron(&self) -> Result<String, SettingsError> {
        Ok(Self::options().to_string_pretty(self, PrettyConfig::default())?)
    }

    /// Loads settings from `path`, writing the default file there first if it does not exist.
    pub fn load(path: &Path) -> Result<Self, SettingsError> {
        let default_settings_string = include_str!("./default_settings.ron");

        if !path.exists() {
            log::info!("Writing default settings to {:?}", path);
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::write(path, default_settings_string)?;
        }

        let settings = Self::from_ron(&fs::read_to_string(path)?)?;
        if settings.get_cols() <= 0 || settings.get_rows() <= 0 {
            log::warn!(
                "Settings file {:?} has a non-positive maze size; {}x{}",
                path,
                settings.get_cols(),
                settings.get_rows()
            );
        }

        Ok(settings)
    }

    pub fn save(&self, path: &Path) -> Result<(), SettingsError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, self.to_ron()?)?;
        Ok(())
    }

    pub fn reset_config(path: &Path) -> Result<(), SettingsError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, include_str!("./default_settings.ron"))?;
        Ok(())
    }
}
