use crate::{Dialog, GameState, Phase, TransitionErrors};
use tracing::debug;

impl GameState {
    /// Replaces the text typed into the open name or score editor. The text is kept verbatim
    /// and only interpreted when the edit is confirmed.
    ///
    /// # Errors
    ///
    /// * [TransitionError::InvalidState](crate::TransitionError::InvalidState) When neither
    /// editor is open.
    pub fn update_pending_text(
        &mut self,
        text: impl Into<String>,
    ) -> Result<(), TransitionErrors> {
        if let Some(Dialog::NameEditor { pending, .. } | Dialog::ScoreEditor { pending, .. }) =
            &mut self.dialog
        {
            *pending = text.into();
            return Ok(());
        }
        self.check_phase(&[Phase::EditingName, Phase::EditingScore])
    }

    /// Shows the points of every round for the player at `index`. Replaces any dialog
    /// already open.
    ///
    /// # Errors
    ///
    /// * [TransitionError::InvalidIndex](crate::TransitionError::InvalidIndex) When `index`
    /// does not address a player.
    pub fn open_history(&mut self, index: usize) -> Result<(), TransitionErrors> {
        self.check_index(index)?;

        self.dialog = Some(Dialog::History { player: index });

        debug!(index, "opened history");
        Ok(())
    }

    /// Closes whichever dialog is open and drops any pending text. Does nothing when no dialog
    /// is open.
    pub fn dismiss_dialog(&mut self) {
        if self.dialog.take().is_some() {
            debug!("dismissed dialog");
        }
    }
}
