use crate::{Dialog, GameState, Phase, Points, TransitionError, TransitionErrors, SCORE_SEED};
use map_macro::hash_set;
use tracing::{debug, info};

impl GameState {
    /// Opens the score editor for the player at `index` with [SCORE_SEED] as the pending text.
    /// Replaces any dialog already open.
    ///
    /// # Errors
    ///
    /// * [TransitionError::InvalidIndex] When `index` does not address a player.
    /// * [TransitionError::PlayerEliminated] When the player has already been eliminated.
    pub fn begin_edit_score(&mut self, index: usize) -> Result<(), TransitionErrors> {
        self.check_index(index)?;
        if self.players[index].eliminated() {
            return Err(hash_set! { TransitionError::PlayerEliminated { index } });
        }

        self.dialog = Some(Dialog::ScoreEditor {
            player: index,
            pending: SCORE_SEED.to_owned(),
        });

        debug!(index, "began editing score");
        Ok(())
    }

    /// Parses the pending text into [points](Points), treating anything unparsable as `0`,
    /// appends them to the history of the player being scored, and closes the editor.
    /// The player is eliminated once their total reaches the max score.
    ///
    /// # Errors
    ///
    /// * [TransitionError::InvalidState] When the score editor is not open.
    pub fn confirm_score_edit(&mut self) -> Result<(), TransitionErrors> {
        let (player, pending) = match self.dialog.take() {
            Some(Dialog::ScoreEditor { player, pending }) => (player, pending),
            other => {
                self.dialog = other;
                return self.check_phase(&[Phase::EditingScore]);
            }
        };

        let points = parse_points(&pending);
        let max_score = self.max_score;
        let eliminated = self.players[player].record(points, max_score);
        debug!(
            index = player,
            points,
            total = self.players[player].total(),
            "confirmed score"
        );

        if eliminated {
            info!(index = player, max_score, "player eliminated");
        }
        self.check_eliminations();
        Ok(())
    }
}

/// Parses `text` as [points](Points) the way a number field would, with an optional sign and no
/// surrounding whitespace.
///
/// # Returns
///
/// The parsed points, or `0` when `text` is not an integer in range.
pub fn parse_points(text: &str) -> Points {
    text.parse().unwrap_or_else(|_| {
        debug!(text, "score is not an integer, using 0");
        0
    })
}
