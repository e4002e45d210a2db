use chrono::Utc;

use super::types::{Args, CleanArgs, Mode};
use super::validation::require_id;
use crate::config::EngineConfig;
use crate::error::GolfError;

impl Args {
    /// Check the inputs each mode needs and fold the optional config file and
    /// the command line overrides into one engine config.
    ///
    /// # Errors
    ///
    /// Will return `Err` if a required input is missing or the config is invalid
    pub fn validate(self) -> Result<CleanArgs, GolfError> {
        match self.mode {
            Mode::Scorecard | Mode::Games | Mode::Summary => {
                if self.round_json.is_none() {
                    return Err(GolfError::InvalidConfig(
                        "--round-json is required for this mode".to_string(),
                    ));
                }
            }
            Mode::HeadToHead => {
                if self.history_json.is_none() {
                    return Err(GolfError::InvalidConfig(
                        "--history-json is required for head-to-head".to_string(),
                    ));
                }
                require_id(self.player.as_ref(), "player").map_err(GolfError::InvalidConfig)?;
                require_id(self.opponent.as_ref(), "opponent")
                    .map_err(GolfError::InvalidConfig)?;
            }
        }

        let mut config = match self.config_toml.as_ref() {
            Some(path) => EngineConfig::from_toml_file(path)?,
            None => EngineConfig::default(),
        };
        if let Some(hours) = self.finished_after_hours {
            config.finished_after_hours = hours;
        }
        config.validate()?;

        Ok(CleanArgs {
            mode: self.mode,
            round_json: self.round_json,
            history_json: self.history_json,
            players_json: self.players_json,
            player: self.player.map(|p| p.trim().to_string()),
            opponent: self.opponent.map(|p| p.trim().to_string()),
            now: self.now.unwrap_or_else(Utc::now),
            config,
            pretty: self.pretty,
            verbose: self.verbose,
        })
    }
}
