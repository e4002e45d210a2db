use chrono::Duration;
use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::error::GolfError;
use crate::model::Multipliers;

/// Tunables the engine reads; everything has a sensible default.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub finished_after_hours: i64,
    pub default_multipliers: Multipliers,
    pub default_max_skins: Option<u32>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            finished_after_hours: 24,
            default_multipliers: Multipliers::default(),
            default_max_skins: None,
        }
    }
}

impl EngineConfig {
    /// The finished window. Values too large for a duration saturate;
    /// `validate` rejects them at load.
    #[must_use]
    pub fn finished_after(&self) -> Duration {
        Duration::try_hours(self.finished_after_hours).unwrap_or(Duration::MAX)
    }

    /// # Errors
    ///
    /// Will return `Err` if the toml is malformed or holds invalid values
    pub fn from_toml_str(contents: &str) -> Result<Self, GolfError> {
        let config: EngineConfig = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// # Errors
    ///
    /// Will return `Err` if the file is unreadable or not a valid config
    pub fn from_toml_file(path: &Path) -> Result<Self, GolfError> {
        let contents = fs::read_to_string(path)
            .map_err(|e| GolfError::Io(format!("read config toml {}: {e}", path.display())))?;
        Self::from_toml_str(&contents)
    }

    /// # Errors
    ///
    /// Will return `Err` if the finished window is not positive or does not
    /// fit in a duration
    pub fn validate(&self) -> Result<(), GolfError> {
        if self.finished_after_hours <= 0 {
            return Err(GolfError::InvalidConfig(
                "finished_after_hours must be positive".to_string(),
            ));
        }
        if Duration::try_hours(self.finished_after_hours).is_none() {
            return Err(GolfError::InvalidConfig(format!(
                "finished_after_hours {} is out of range",
                self.finished_after_hours
            )));
        }
        Ok(())
    }
}
