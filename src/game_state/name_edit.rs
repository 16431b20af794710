use crate::{Dialog, GameState, Phase, TransitionErrors};
use tracing::debug;

impl GameState {
    /// Opens the name editor for the player at `index`, with the player's current name as the
    /// pending text. Replaces any dialog already open.
    ///
    /// # Errors
    ///
    /// * [TransitionError::InvalidIndex](crate::TransitionError::InvalidIndex) When `index`
    /// does not address a player.
    pub fn begin_edit_name(&mut self, index: usize) -> Result<(), TransitionErrors> {
        self.check_index(index)?;

        let pending = self.players[index].name().to_owned();
        self.dialog = Some(Dialog::NameEditor {
            player: index,
            pending,
        });

        debug!(index, "began editing name");
        Ok(())
    }

    /// Renames the player being edited to the pending text verbatim, then closes the editor.
    ///
    /// # Errors
    ///
    /// * [TransitionError::InvalidState](crate::TransitionError::InvalidState) When the name
    /// editor is not open.
    pub fn confirm_name_edit(&mut self) -> Result<(), TransitionErrors> {
        match self.dialog.take() {
            Some(Dialog::NameEditor { player, pending }) => {
                debug!(index = player, name = %pending, "confirmed name");
                self.players[player].rename(pending);
                Ok(())
            }
            other => {
                self.dialog = other;
                self.check_phase(&[Phase::EditingName])
            }
        }
    }
}
