//! Runtime configuration for the automaton.

use std::path::Path;

use crate::rule::Ruleset;

/// How the initial generation is placed on the grid when seeding.
#[derive(Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[cfg_attr(any(test, debug_assertions), derive(Debug))]
#[serde(rename_all = "snake_case")]
pub enum SeedMode {
    /// Every cell on the grid takes part in the random draw.
    FullGrid,
    /// Only a square of the given side length, centred on the grid, takes
    /// part in the draw; everything outside it starts fully dead.
    Square { size: i32 },
}

/// The tuning knobs of an [`Automaton`](crate::Automaton).
///
/// All values are plain data validated by contract rather than at runtime.
#[derive(Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[cfg_attr(any(test, debug_assertions), derive(Debug))]
#[serde(default)]
pub struct Config {
    /// Calls to [`step`](crate::Automaton::step) between generations.
    /// A rate of 0 advances on every call.
    pub tick_rate: u32,
    /// The birth & survival rules evaluated each generation.
    pub ruleset: Ruleset,
    /// Intensity a fading cell loses per generation it stays dead.
    pub fade_amount: u8,
    /// The % chance (0-100) of a cell starting alive when seeding.
    pub seed_ratio: u32,
    /// Where the random seed is placed on the grid.
    pub seed_mode: SeedMode,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tick_rate: 0,
            ruleset: Ruleset::default(),
            fade_amount: 1,
            seed_ratio: 25,
            seed_mode: SeedMode::FullGrid,
        }
    }
}

/// The errors that can occur when reading or writing a configuration file.
#[derive(thiserror::Error, Debug)]
#[cfg_attr(test, derive(kinded::Kinded))]
pub enum ConfigError {
    /// Unable to read or write the file.
    #[error("unable to access config file: {0}")]
    Io(#[from] std::io::Error),
    /// The file contents are not a valid configuration.
    #[error("file is not a valid config: {0}")]
    InvalidData(#[from] serde_json::Error),
}

impl Config {
    /// Reads a configuration from the JSON file at the given path.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let file = std::fs::File::open(path)?;
        let config = serde_json::from_reader(std::io::BufReader::new(file))?;
        log::debug!("loaded config from {}", path.display());
        Ok(config)
    }

    /// Writes this configuration as JSON to the given path, replacing any
    /// existing file.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let file = std::fs::File::create(path)?;
        serde_json::to_writer_pretty(file, self)?;
        log::debug!("saved config to {}", path.display());
        Ok(())
    }
}
