use crate::{
    describe_errors, Action, Total, TransitionErrors, DEFAULT_MAX_SCORE, DEFAULT_NAME_PREFIX,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

/// Describes why a [GameConfig] could not be read.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The text is not a JSON object of known fields.
    #[error("configuration is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
    /// The configured max score is not positive.
    #[error("default max score must be positive, got {default_max_score}")]
    NonPositiveMaxScore {
        /// The configured max score.
        default_max_score: Total,
    },
}

/// Decides what happens to a refused transition.
///
/// # See Also
///
/// * [GameConfig::policy]
/// * [GameSession::dispatch](crate::GameSession::dispatch)
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorPolicy {
    /// Refused transitions are logged and treated as no-ops, the way a host driven by taps and
    /// keystrokes expects.
    #[default]
    Permissive,
    /// Refused transitions are reported to the caller.
    Strict,
}

impl ErrorPolicy {
    /// Applies this policy to the result of a transition. The state is unchanged either way
    /// when the transition was refused.
    ///
    /// # Errors
    ///
    /// The errors in `result` under [ErrorPolicy::Strict]. Never under
    /// [ErrorPolicy::Permissive].
    pub fn enforce(self, result: Result<(), TransitionErrors>) -> Result<(), TransitionErrors> {
        match (self, result) {
            (ErrorPolicy::Permissive, Err(errors)) => {
                warn!(reasons = %describe_errors(&errors), "ignored refused transition");
                Ok(())
            }
            (_, result) => result,
        }
    }
}

/// Runtime settings for a [GameSession](crate::GameSession). Every field has a default, so an
/// empty JSON object is a valid configuration.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GameConfig {
    /// What happens to refused transitions.
    pub policy: ErrorPolicy,
    /// Players are named `"{name_prefix} {n}"` when a game starts.
    pub name_prefix: String,
    /// The max score a host offers when setting up a game.
    pub default_max_score: Total,
}

impl Default for GameConfig {
    fn default() -> GameConfig {
        GameConfig {
            policy: ErrorPolicy::default(),
            name_prefix: DEFAULT_NAME_PREFIX.to_owned(),
            default_max_score: DEFAULT_MAX_SCORE,
        }
    }
}

impl GameConfig {
    /// Parses a JSON configuration, filling missing fields with their defaults.
    ///
    /// # Errors
    ///
    /// * [ConfigError::Json] When `text` is not a JSON object of known fields.
    /// * [ConfigError::NonPositiveMaxScore] When `default_max_score` is not positive.
    pub fn from_json_str(text: &str) -> Result<GameConfig, ConfigError> {
        let config: GameConfig = serde_json::from_str(text)?;
        if config.default_max_score <= 0 {
            return Err(ConfigError::NonPositiveMaxScore {
                default_max_score: config.default_max_score,
            });
        }
        Ok(config)
    }

    /// # Returns
    ///
    /// An [Action::StartGame] for `player_count` players with the
    /// [default max score](GameConfig::default_max_score).
    #[inline]
    pub fn start_action(&self, player_count: usize) -> Action {
        Action::StartGame {
            max_score: self.default_max_score,
            player_count,
        }
    }
}
