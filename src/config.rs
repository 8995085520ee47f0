use crate::grid::Style;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Default location of the configuration file, if the user has a config directory.
pub fn path() -> Option<PathBuf> {
    Some(dirs::config_dir()?.join("grid-dfs").join("config.toml"))
}

/// Settings for the random walks run by the `grid-dfs` binary.
///
/// Every field has a default, so a partial file is fine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Rows of a randomly sampled grid.
    pub rows: usize,
    /// Columns of a randomly sampled grid.
    pub cols: usize,
    /// Seed for layouts and starts. Fresh entropy when absent.
    pub seed: Option<u64>,
    /// Wait for enter between printed steps.
    pub pause: bool,
    /// Color the glyphs of printed steps.
    pub color: bool,
    /// Duration of each animation frame, in milliseconds.
    pub frame_millis: u64,
    pub style: Style,
    /// Where animations are written.
    pub gif_output: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            rows: 10,
            cols: 10,
            seed: None,
            pause: false,
            color: false,
            frame_millis: 250,
            style: Style::default(),
            gif_output: PathBuf::from("sim.gif"),
        }
    }
}

impl Config {
    pub fn save(&self) -> Result<(), Error> {
        self.save_to(&path().ok_or(Error::NoConfigDir)?)
    }

    pub fn save_to(&self, path: &Path) -> Result<(), Error> {
        if let Some(parent) = path.parent() {
            if !parent.exists() {
                std::fs::create_dir_all(parent)?;
            }
        }
        let serialized = toml::to_string_pretty(self)?;
        std::fs::write(path, serialized.as_bytes()).map_err(Into::into)
    }

    pub fn load() -> Result<Self, Error> {
        Self::load_from(&path().ok_or(Error::NoConfigDir)?)
    }

    pub fn load_from(path: &Path) -> Result<Self, Error> {
        let data = std::fs::read_to_string(path)?;
        toml::from_str(&data).map_err(Into::into)
    }

    /// Load the configuration, falling back to defaults if there is no file.
    ///
    /// A file which exists but cannot be parsed is still an error.
    pub fn load_or_default() -> Result<Self, Error> {
        match Self::load() {
            Err(Error::CouldNotLoad(err)) if err.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!("no configuration file; using defaults");
                Ok(Self::default())
            }
            Err(Error::NoConfigDir) => Ok(Self::default()),
            result => result,
        }
    }

    pub fn frame_duration(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.frame_millis)
    }
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("no configuration directory for this user")]
    NoConfigDir,
    #[error("configuration could not be loaded")]
    CouldNotLoad(#[from] std::io::Error),
    #[error("malformed configuration")]
    Malformed(#[from] toml::de::Error),
    #[error("failed to serialize")]
    CouldNotSerialize(#[from] toml::ser::Error),
}
