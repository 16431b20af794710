use crate::{GameState, Phase, Player, TransitionErrors};
use itertools::Itertools;
use tracing::{debug, info};

impl GameState {
    /// Marks the end of a round. Players and dialogs are left untouched; the call exists so
    /// that whoever persists the game knows a round was committed.
    ///
    /// # Errors
    ///
    /// * [TransitionError::InvalidState](crate::TransitionError::InvalidState) When the game
    /// is not started or a dialog is open.
    pub fn advance_round(&mut self) -> Result<(), TransitionErrors> {
        self.check_phase(&[Phase::Playing])?;

        debug!(rounds = self.rounds_played(), "advanced round");
        Ok(())
    }

    /// # Returns
    ///
    /// The number of players who have not been eliminated.
    pub fn remaining_players(&self) -> usize {
        self.players.iter().filter(|player| !player.eliminated()).count()
    }

    /// # Returns
    ///
    /// The index of the only player left once every other player has been eliminated, or
    /// [None] while more than one player remains (or before a game is started).
    pub fn winner(&self) -> Option<usize> {
        self.players
            .iter()
            .positions(|player| !player.eliminated())
            .exactly_one()
            .ok()
    }

    /// # Returns
    ///
    /// The length of the longest history, which is the number of rounds at least one player
    /// has been scored in.
    pub fn rounds_played(&self) -> usize {
        self.players
            .iter()
            .map(|player| player.history().len())
            .max()
            .unwrap_or(0)
    }

    /// Runs after every confirmed score to report how many players remain and whether one of
    /// them has won. Never changes state.
    pub(super) fn check_eliminations(&self) {
        let remaining = self.remaining_players();
        match self.winner() {
            Some(index) => {
                let name = self.players.get(index).map(Player::name).unwrap_or_default();
                info!(index, name, "one player remains");
            }
            None => debug!(remaining, "players remaining"),
        }
    }
}
