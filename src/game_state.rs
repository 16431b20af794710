use crate::{Player, Players, Total, TransitionErrors, DEFAULT_MAX_SCORE};
use itertools::Itertools;
use map_macro::hash_set;
use num_derive::FromPrimitive;
use thiserror::Error;

pub use game_view::*;
pub use score_edit::parse_points;

mod dialog;
mod game_view;
mod name_edit;
mod player_avatar;
mod round;
mod score_edit;
mod start_game;
#[cfg(test)]
mod test_setup;

/// Owns the state of one game of Rami and implements every transition. Created from
/// [GameState::new] or [GameState::default] in the [Idle](Phase::Idle) phase.
///
/// Every transition either succeeds or returns the reasons it was refused and leaves the
/// state exactly as it was.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct GameState {
    /// Whether a game has been [started](GameState::start_game) since the last reset.
    started: bool,
    /// A player is eliminated once their total reaches this score.
    max_score: Total,
    /// A vector of every player in seating order. Empty unless `started`.
    players: Players,
    /// The dialog the host is currently showing, if any.
    dialog: Option<Dialog>,
}

/// The single dialog that may be open on top of a started game, along with the player it is
/// about and the text being edited.
///
/// # See Also
///
/// * [GameState::dialog]
/// * [Phase]
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum Dialog {
    /// Renaming a player.
    NameEditor {
        /// The index of the player being renamed.
        player: usize,
        /// The name typed so far.
        pending: String,
    },
    /// Entering a player's points for a round.
    ScoreEditor {
        /// The index of the player being scored.
        player: usize,
        /// The points typed so far, not yet parsed.
        pending: String,
    },
    /// Reading a player's points for every round.
    History {
        /// The index of the player whose history is shown.
        player: usize,
    },
}

/// The phases of the game, derived from whether a game is started and which dialog is open.
///
/// # See Also
///
/// * [GameState::phase]
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, FromPrimitive)]
pub enum Phase {
    /// `0`. No game has been started.
    Idle = 0,
    /// `1`. A game is started and no dialog is open.
    Playing = 1,
    /// `2`. A player is being renamed.
    EditingName = 2,
    /// `3`. Points are being entered for a player.
    EditingScore = 3,
    /// `4`. A player's history is shown.
    ViewingHistory = 4,
}

impl Phase {
    /// The number of [Phase] variants. 5 phases.
    pub const PHASES_LEN: usize = 5;

    /// # Returns
    ///
    /// An array of all [Phase] variants in order.
    #[inline]
    pub fn phases() -> [Phase; Phase::PHASES_LEN] {
        [
            Phase::Idle,
            Phase::Playing,
            Phase::EditingName,
            Phase::EditingScore,
            Phase::ViewingHistory,
        ]
    }
}

/// Describes a reason why a transition of [GameState] was refused.
#[derive(Debug, Clone, Eq, PartialEq, Hash, Error)]
pub enum TransitionError {
    /// Attempting to address a player that does not exist.
    #[error("player index {index} is out of range for {players_len} players")]
    InvalidIndex {
        /// The requested index.
        index: usize,
        /// The number of players in the game.
        players_len: usize,
    },
    /// Attempting a transition that is not allowed in the current phase.
    #[error("expected one of {expected:?} but the game is in {actual:?}")]
    InvalidState {
        /// The phases the transition is allowed in.
        expected: &'static [Phase],
        /// The phase the game is in.
        actual: Phase,
    },
    /// Attempting to enter points for a player who has already been eliminated.
    #[error("player {index} has already been eliminated")]
    PlayerEliminated {
        /// The index of the eliminated player.
        index: usize,
    },
    /// Attempting [to start](GameState::start_game) with too few or too many players.
    #[error(
        "cannot start with {player_count} players, expected between {min} and {max}",
        min = crate::MIN_PLAYERS,
        max = crate::MAX_PLAYERS
    )]
    PlayerCountOutOfRange {
        /// The requested number of players.
        player_count: usize,
    },
    /// Attempting [to start](GameState::start_game) with a max score that is not positive.
    #[error("max score must be positive, got {max_score}")]
    NonPositiveMaxScore {
        /// The requested max score.
        max_score: Total,
    },
}

/// # Returns
///
/// Every error in `errors` as one line, sorted so that the same errors always read the same.
pub(crate) fn describe_errors(errors: &TransitionErrors) -> String {
    errors.iter().map(ToString::to_string).sorted().join("; ")
}

impl Default for GameState {
    fn default() -> GameState {
        GameState {
            started: false,
            max_score: DEFAULT_MAX_SCORE,
            players: Players::new(),
            dialog: None,
        }
    }
}

impl GameState {
    /// # Returns
    ///
    /// A [GameState] in the [Idle](Phase::Idle) phase with no players and the
    /// [default max score](DEFAULT_MAX_SCORE).
    #[inline]
    pub fn new() -> GameState {
        GameState::default()
    }

    /// Rebuilds a state from parts that have already been checked against every invariant.
    pub(crate) fn from_parts(
        started: bool,
        max_score: Total,
        players: Players,
        dialog: Option<Dialog>,
    ) -> GameState {
        GameState {
            started,
            max_score,
            players,
            dialog,
        }
    }

    /// Whether a game has been started since the last reset.
    #[inline]
    pub fn started(&self) -> bool {
        self.started
    }

    /// A player is eliminated once their total reaches this score.
    #[inline]
    pub fn max_score(&self) -> Total {
        self.max_score
    }

    /// Every player in seating order. Empty before a game is started.
    #[inline]
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// # Returns
    ///
    /// The player at `index` or [None] if out of bounds.
    #[inline]
    pub fn player(&self, index: usize) -> Option<&Player> {
        self.players.get(index)
    }

    /// The dialog currently open, if any.
    #[inline]
    pub fn dialog(&self) -> Option<&Dialog> {
        self.dialog.as_ref()
    }

    /// # Returns
    ///
    /// The [Phase] derived from whether the game is started and which dialog is open.
    pub fn phase(&self) -> Phase {
        match (&self.dialog, self.started) {
            (Some(Dialog::NameEditor { .. }), _) => Phase::EditingName,
            (Some(Dialog::ScoreEditor { .. }), _) => Phase::EditingScore,
            (Some(Dialog::History { .. }), _) => Phase::ViewingHistory,
            (None, true) => Phase::Playing,
            (None, false) => Phase::Idle,
        }
    }

    /// Whether the name editor is open.
    #[inline]
    pub fn name_editor_open(&self) -> bool {
        matches!(self.dialog, Some(Dialog::NameEditor { .. }))
    }

    /// Whether the score editor is open.
    #[inline]
    pub fn score_editor_open(&self) -> bool {
        matches!(self.dialog, Some(Dialog::ScoreEditor { .. }))
    }

    /// Whether a player's history is shown.
    #[inline]
    pub fn history_viewer_open(&self) -> bool {
        matches!(self.dialog, Some(Dialog::History { .. }))
    }

    /// The index of the player being renamed or scored, if an editor is open.
    pub fn editing_player_index(&self) -> Option<usize> {
        match self.dialog {
            Some(Dialog::NameEditor { player, .. } | Dialog::ScoreEditor { player, .. }) => {
                Some(player)
            }
            _ => None,
        }
    }

    /// The index of the player whose history is shown, if the history viewer is open.
    pub fn history_player_index(&self) -> Option<usize> {
        match self.dialog {
            Some(Dialog::History { player }) => Some(player),
            _ => None,
        }
    }

    /// The text typed into the open editor, if an editor is open.
    pub fn pending_text(&self) -> Option<&str> {
        match &self.dialog {
            Some(Dialog::NameEditor { pending, .. } | Dialog::ScoreEditor { pending, .. }) => {
                Some(pending)
            }
            _ => None,
        }
    }

    /// # Errors
    ///
    /// * [TransitionError::InvalidIndex] When `index` does not address a player.
    fn check_index(&self, index: usize) -> Result<(), TransitionErrors> {
        if index >= self.players.len() {
            return Err(hash_set! { TransitionError::InvalidIndex {
                index,
                players_len: self.players.len(),
            }});
        }
        Ok(())
    }

    /// # Errors
    ///
    /// * [TransitionError::InvalidState] When the current phase is not in `expected`.
    fn check_phase(&self, expected: &'static [Phase]) -> Result<(), TransitionErrors> {
        let actual = self.phase();
        if !expected.contains(&actual) {
            return Err(hash_set! { TransitionError::InvalidState { expected, actual } });
        }
        Ok(())
    }
}
