// Game configuration. Defaults reproduce the classic five-round game; JS may override
// any subset of fields through `start_game_with_config` (feature = "serde_json").

use crate::error::ConfigError;

pub const DEFAULT_AVATAR_BASE_URL: &str = "https://avatar.iran.liara.run/public";

/// What happens to the case list when the player restarts from the game-over screen.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum RestartPolicy {
    /// Draw a fresh set of cases.
    #[default]
    Regenerate,
    /// Replay the identical cases.
    Reuse,
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GameConfig {
    pub total_cases: usize,
    /// Chance that a generated case is a stroke case.
    pub stroke_probability: f64,
    pub tick_interval_ms: u32,
    pub restart: RestartPolicy,
    pub avatar_base_url: String,
    /// One of `off`, `error`, `warn`, `info`, `debug`, `trace`.
    pub log_level: String,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            total_cases: 5,
            stroke_probability: 0.5,
            tick_interval_ms: 1000,
            restart: RestartPolicy::Regenerate,
            avatar_base_url: DEFAULT_AVATAR_BASE_URL.to_string(),
            log_level: "info".to_string(),
        }
    }
}

impl GameConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.total_cases == 0 {
            return Err(ConfigError::NoCases);
        }
        if !(0.0..=1.0).contains(&self.stroke_probability) {
            return Err(ConfigError::InvalidProbability(self.stroke_probability));
        }
        if self.tick_interval_ms == 0 {
            return Err(ConfigError::ZeroTickInterval);
        }
        Ok(())
    }

    /// Parsed `log_level`; unknown names fall back to `Info`.
    pub fn level_filter(&self) -> log::LevelFilter {
        self.log_level.parse().unwrap_or(log::LevelFilter::Info)
    }

    /// Parse a (possibly partial) JSON object and validate it.
    #[cfg(feature = "serde_json")]
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let cfg: GameConfig =
            serde_json::from_str(json).map_err(|e| ConfigError::Parse(e.to_string()))?;
        cfg.validate()?;
        Ok(cfg)
    }
}
