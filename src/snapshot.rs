//! The JSON form of [GameState] handed to whoever stores the game.

use crate::{
    AvatarRef, Dialog, GameState, History, Player, Players, Total, DEFAULT_MAX_SCORE, MAX_PLAYERS,
    MIN_PLAYERS, PLAYER_CAPACITY,
};
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use thiserror::Error;
use tracing::warn;

/// Every field of [GameState] in a flat, serializable shape. Optional fields are left out of
/// the JSON when absent.
///
/// # See Also
///
/// * [GameState::serialize]
/// * [GameState::deserialize]
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameSnapshot {
    /// Whether a game has been started since the last reset.
    pub started: bool,
    /// A player is eliminated once their total reaches this score.
    pub max_score: Total,
    /// Every player in seating order.
    pub players: SmallVec<[PlayerSnapshot; PLAYER_CAPACITY]>,
    /// Whether the name editor is open.
    #[serde(default)]
    pub name_editor_open: bool,
    /// Whether the score editor is open.
    #[serde(default)]
    pub score_editor_open: bool,
    /// Whether a player's history is shown.
    #[serde(default)]
    pub history_viewer_open: bool,
    /// The index of the player being renamed or scored.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub editing_player_index: Option<usize>,
    /// The index of the player whose history is shown.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub history_player_index: Option<usize>,
    /// The text typed into the open editor.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pending_text: Option<String>,
}

/// Every field of [Player] in a serializable shape.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerSnapshot {
    /// The label shown for this player.
    pub name: String,
    /// The sum of `history`.
    pub total: Total,
    /// The points scored in each round, oldest first.
    pub history: History,
    /// Whether `total` has reached the max score.
    pub eliminated: bool,
    /// The reference to this player's avatar image.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar_image_reference: Option<AvatarRef>,
}

/// Describes why a snapshot could not be turned back into a [GameState].
#[derive(Debug, Error)]
pub enum SnapshotError {
    /// The text is not a JSON snapshot.
    #[error("snapshot is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
    /// Players exist without a started game, or a started game has no players.
    #[error("started is {started} but there are {players_len} players")]
    StartedMismatch {
        /// Whether the snapshot says the game is started.
        started: bool,
        /// The number of players in the snapshot.
        players_len: usize,
    },
    /// A started game with an unsupported number of players.
    #[error(
        "{players_len} players is outside of {min}..={max}",
        min = MIN_PLAYERS,
        max = MAX_PLAYERS
    )]
    PlayerCountOutOfRange {
        /// The number of players in the snapshot.
        players_len: usize,
    },
    /// The max score is not positive.
    #[error("max score must be positive, got {max_score}")]
    NonPositiveMaxScore {
        /// The max score in the snapshot.
        max_score: Total,
    },
    /// A game that is not started keeps the default max score, since only starting a game
    /// changes it.
    #[error(
        "a game that is not started has max score {max_score}, expected {default}",
        default = DEFAULT_MAX_SCORE
    )]
    IdleMaxScore {
        /// The max score in the snapshot.
        max_score: Total,
    },
    /// A player's total is not the sum of their history.
    #[error("player {index} has total {total} but their history sums to {sum}")]
    TotalMismatch {
        /// The index of the player.
        index: usize,
        /// The total in the snapshot.
        total: Total,
        /// The sum of the history in the snapshot.
        sum: Total,
    },
    /// A player was scored again after their total reached the max score.
    #[error("player {index} was eliminated in round {round} but has {rounds} rounds")]
    ScoredAfterElimination {
        /// The index of the player.
        index: usize,
        /// The round, counting from `1`, in which the total first reached the max score.
        round: usize,
        /// The number of rounds in the history.
        rounds: usize,
    },
    /// A player's elimination does not follow from their total.
    #[error(
        "player {index} has eliminated {eliminated} with total {total} and max score {max_score}"
    )]
    EliminationMismatch {
        /// The index of the player.
        index: usize,
        /// Whether the snapshot says the player is eliminated.
        eliminated: bool,
        /// The total of the player.
        total: Total,
        /// The max score in the snapshot.
        max_score: Total,
    },
    /// More than one dialog is open.
    #[error("more than one dialog is open")]
    MultipleDialogs,
    /// The fields of the open dialog, or of a closed one, are inconsistent.
    #[error("dialog fields are inconsistent: {0}")]
    InconsistentDialog(&'static str),
    /// A dialog refers to a player that does not exist.
    #[error("dialog refers to player {index} but there are {players_len} players")]
    IndexOutOfRange {
        /// The index in the snapshot.
        index: usize,
        /// The number of players in the snapshot.
        players_len: usize,
    },
    /// The score editor is open for a player who has been eliminated.
    #[error("score editor is open for eliminated player {index}")]
    ScoringEliminatedPlayer {
        /// The index of the player.
        index: usize,
    },
}

impl From<&GameState> for GameSnapshot {
    fn from(game_state: &GameState) -> GameSnapshot {
        GameSnapshot {
            started: game_state.started(),
            max_score: game_state.max_score(),
            players: game_state.players().iter().map(PlayerSnapshot::from).collect(),
            name_editor_open: game_state.name_editor_open(),
            score_editor_open: game_state.score_editor_open(),
            history_viewer_open: game_state.history_viewer_open(),
            editing_player_index: game_state.editing_player_index(),
            history_player_index: game_state.history_player_index(),
            pending_text: game_state.pending_text().map(str::to_owned),
        }
    }
}

impl From<&Player> for PlayerSnapshot {
    fn from(player: &Player) -> PlayerSnapshot {
        PlayerSnapshot {
            name: player.name().to_owned(),
            total: player.total(),
            history: player.history().to_vec(),
            eliminated: player.eliminated(),
            avatar_image_reference: player.avatar().cloned(),
        }
    }
}

impl TryFrom<GameSnapshot> for GameState {
    type Error = SnapshotError;

    /// Checks every invariant of [GameState] against `snapshot`.
    ///
    /// # Errors
    ///
    /// The first [SnapshotError] found, checking the game, then each player, then the dialog.
    fn try_from(snapshot: GameSnapshot) -> Result<GameState, SnapshotError> {
        let GameSnapshot {
            started,
            max_score,
            players,
            name_editor_open,
            score_editor_open,
            history_viewer_open,
            editing_player_index,
            history_player_index,
            pending_text,
        } = snapshot;

        let players_len = players.len();
        if started == (players_len == 0) {
            return Err(SnapshotError::StartedMismatch {
                started,
                players_len,
            });
        }
        if started && !(MIN_PLAYERS..=MAX_PLAYERS).contains(&players_len) {
            return Err(SnapshotError::PlayerCountOutOfRange { players_len });
        }
        if max_score <= 0 {
            return Err(SnapshotError::NonPositiveMaxScore { max_score });
        }
        if !started && max_score != DEFAULT_MAX_SCORE {
            return Err(SnapshotError::IdleMaxScore { max_score });
        }

        let players = players
            .into_iter()
            .enumerate()
            .map(|(index, player)| player.into_player(index, max_score))
            .collect::<Result<Players, SnapshotError>>()?;

        let open = [name_editor_open, score_editor_open, history_viewer_open]
            .into_iter()
            .filter(|&open| open)
            .count();
        if open > 1 {
            return Err(SnapshotError::MultipleDialogs);
        }

        let dialog = match (
            name_editor_open,
            score_editor_open,
            history_viewer_open,
            editing_player_index,
            history_player_index,
            pending_text,
        ) {
            (false, false, false, None, None, None) => None,
            (true, _, _, Some(player), None, Some(pending)) => {
                Some(Dialog::NameEditor { player, pending })
            }
            (_, true, _, Some(player), None, Some(pending)) => {
                Some(Dialog::ScoreEditor { player, pending })
            }
            (_, _, true, None, Some(player), None) => Some(Dialog::History { player }),
            (false, false, false, ..) => {
                return Err(SnapshotError::InconsistentDialog(
                    "no dialog is open but an index or pending text is present",
                ))
            }
            (_, _, true, ..) => {
                return Err(SnapshotError::InconsistentDialog(
                    "the history viewer needs only a history player index",
                ))
            }
            _ => {
                return Err(SnapshotError::InconsistentDialog(
                    "an editor needs only an editing player index and pending text",
                ))
            }
        };

        match &dialog {
            Some(
                Dialog::NameEditor { player, .. }
                | Dialog::ScoreEditor { player, .. }
                | Dialog::History { player },
            ) if *player >= players_len => {
                return Err(SnapshotError::IndexOutOfRange {
                    index: *player,
                    players_len,
                });
            }
            Some(Dialog::ScoreEditor { player, .. }) if players[*player].eliminated() => {
                return Err(SnapshotError::ScoringEliminatedPlayer { index: *player });
            }
            _ => {}
        }

        Ok(GameState::from_parts(started, max_score, players, dialog))
    }
}

impl PlayerSnapshot {
    /// # Errors
    ///
    /// * [SnapshotError::TotalMismatch] When `total` is not the sum of `history`.
    /// * [SnapshotError::ScoredAfterElimination] When `history` goes on after the round in
    /// which the running total reached `max_score`.
    /// * [SnapshotError::EliminationMismatch] When `eliminated` does not follow from `total`.
    fn into_player(self, index: usize, max_score: Total) -> Result<Player, SnapshotError> {
        let sum: Total = self.history.iter().copied().map(Total::from).sum();
        if sum != self.total {
            return Err(SnapshotError::TotalMismatch {
                index,
                total: self.total,
                sum,
            });
        }
        let eliminated_in = self
            .history
            .iter()
            .scan(0, |running: &mut Total, &points| {
                *running += Total::from(points);
                Some(*running)
            })
            .position(|running| running >= max_score);
        if let Some(round) = eliminated_in.map(|position| position + 1) {
            let rounds = self.history.len();
            if round < rounds {
                return Err(SnapshotError::ScoredAfterElimination {
                    index,
                    round,
                    rounds,
                });
            }
        }
        if self.eliminated != (self.total >= max_score) {
            return Err(SnapshotError::EliminationMismatch {
                index,
                eliminated: self.eliminated,
                total: self.total,
                max_score,
            });
        }

        Ok(Player::from_parts(
            self.name,
            self.history,
            self.eliminated,
            self.avatar_image_reference,
        ))
    }
}

impl GameState {
    /// # Returns
    ///
    /// A [GameSnapshot] copying every field of this state.
    #[inline]
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot::from(self)
    }

    /// # Returns
    ///
    /// This state as a JSON [GameSnapshot].
    pub fn serialize(&self) -> String {
        serde_json::to_string(&self.snapshot()).unwrap_or_else(|error| {
            unreachable!("a snapshot only holds strings, integers, and booleans: {error}")
        })
    }

    /// Parses a JSON [GameSnapshot] produced by [GameState::serialize] and checks it against
    /// every invariant of [GameState].
    ///
    /// # Errors
    ///
    /// * [SnapshotError::Json] When `text` is not a JSON snapshot.
    /// * Any other [SnapshotError] when the snapshot describes a state that cannot be reached.
    pub fn deserialize(text: &str) -> Result<GameState, SnapshotError> {
        let snapshot: GameSnapshot = serde_json::from_str(text)?;
        GameState::try_from(snapshot).map_err(|error| {
            warn!(%error, "rejected snapshot");
            error
        })
    }
}
