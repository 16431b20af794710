use crate::{AvatarRef, GameState, Total, TransitionErrors};

/// One input to [GameState], so a host can queue, log, or replay transitions as values.
///
/// # See Also
///
/// * [GameState::apply]
/// * [GameSession::dispatch](crate::GameSession::dispatch)
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum Action {
    /// [GameState::start_game_named]. The session fills in its configured name prefix.
    StartGame {
        /// A player is eliminated once their total reaches this score.
        max_score: Total,
        /// The number of players in the game.
        player_count: usize,
    },
    /// [GameState::reset_game].
    ResetGame,
    /// [GameState::begin_edit_name].
    BeginEditName(usize),
    /// [GameState::begin_edit_score].
    BeginEditScore(usize),
    /// [GameState::update_pending_text].
    UpdatePendingText(String),
    /// [GameState::confirm_name_edit].
    ConfirmNameEdit,
    /// [GameState::confirm_score_edit].
    ConfirmScoreEdit,
    /// [GameState::open_history].
    OpenHistory(usize),
    /// [GameState::dismiss_dialog].
    DismissDialog,
    /// [GameState::advance_round].
    AdvanceRound,
    /// [GameState::set_avatar].
    SetAvatar(usize, Option<AvatarRef>),
}

impl Action {
    /// Whether the game should be saved after this action succeeds: starting a game,
    /// confirming an edit, and committing a round.
    pub fn is_persisted(&self) -> bool {
        matches!(
            self,
            Action::StartGame { .. }
                | Action::ConfirmNameEdit
                | Action::ConfirmScoreEdit
                | Action::AdvanceRound
        )
    }
}

impl GameState {
    /// Applies `action` with players named `"{name_prefix} {n}"` when a game starts.
    ///
    /// # Errors
    ///
    /// The errors of the transition `action` names.
    pub fn apply_named(
        &mut self,
        action: Action,
        name_prefix: &str,
    ) -> Result<(), TransitionErrors> {
        match action {
            Action::StartGame {
                max_score,
                player_count,
            } => self.start_game_named(max_score, player_count, name_prefix),
            Action::ResetGame => {
                self.reset_game();
                Ok(())
            }
            Action::BeginEditName(index) => self.begin_edit_name(index),
            Action::BeginEditScore(index) => self.begin_edit_score(index),
            Action::UpdatePendingText(text) => self.update_pending_text(text),
            Action::ConfirmNameEdit => self.confirm_name_edit(),
            Action::ConfirmScoreEdit => self.confirm_score_edit(),
            Action::OpenHistory(index) => self.open_history(index),
            Action::DismissDialog => {
                self.dismiss_dialog();
                Ok(())
            }
            Action::AdvanceRound => self.advance_round(),
            Action::SetAvatar(index, avatar) => self.set_avatar(index, avatar),
        }
    }

    /// Applies `action` with the [default name prefix](crate::DEFAULT_NAME_PREFIX).
    ///
    /// # Errors
    ///
    /// The errors of the transition `action` names.
    #[inline]
    pub fn apply(&mut self, action: Action) -> Result<(), TransitionErrors> {
        self.apply_named(action, crate::DEFAULT_NAME_PREFIX)
    }

    /// # Returns
    ///
    /// A copy of this state with `action` applied, or the reasons it was refused. `self` is
    /// never changed.
    ///
    /// # Errors
    ///
    /// The errors of the transition `action` names.
    pub fn transition(&self, action: Action) -> Result<GameState, TransitionErrors> {
        let mut next = self.clone();
        next.apply(action)?;
        Ok(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Phase, TransitionError};
    use map_macro::hash_set;

    #[test]
    fn apply_scenario() {
        let mut game_state = GameState::new();

        for action in [
            Action::StartGame {
                max_score: 501,
                player_count: 2,
            },
            Action::BeginEditScore(0),
            Action::UpdatePendingText("50".to_owned()),
            Action::ConfirmScoreEdit,
            Action::BeginEditName(1),
            Action::UpdatePendingText("Bea".to_owned()),
            Action::ConfirmNameEdit,
            Action::AdvanceRound,
        ] {
            game_state.apply(action).unwrap();
        }

        assert_eq!(&[50], game_state.players()[0].history());
        assert_eq!("Bea", game_state.players()[1].name());
        assert_eq!(Phase::Playing, game_state.phase());
    }

    #[test]
    fn apply_named_start() {
        let mut game_state = GameState::new();

        game_state
            .apply_named(
                Action::StartGame {
                    max_score: 300,
                    player_count: 2,
                },
                "Joueur",
            )
            .unwrap();

        assert_eq!("Joueur 2", game_state.players()[1].name());
    }

    #[test]
    fn apply_reset_and_dismiss_never_fail() {
        let mut game_state = GameState::new();

        game_state.apply(Action::DismissDialog).unwrap();
        game_state.apply(Action::ResetGame).unwrap();

        assert_eq!(GameState::new(), game_state);
    }

    #[test]
    fn transition_leaves_original() {
        let game_state = GameState::playing_state(2);

        let next = game_state.transition(Action::OpenHistory(1)).unwrap();

        assert_eq!(Phase::Playing, game_state.phase());
        assert_eq!(Phase::ViewingHistory, next.phase());
    }

    #[test]
    fn transition_refused() {
        let game_state = GameState::new();

        let actual_error = game_state.transition(Action::ConfirmNameEdit).unwrap_err();

        let expected_error = hash_set! { TransitionError::InvalidState {
            expected: &[Phase::EditingName],
            actual: Phase::Idle,
        }};
        assert_eq!(expected_error, actual_error);
    }

    #[test]
    fn persisted_actions() {
        assert!(Action::StartGame {
            max_score: 1,
            player_count: 2
        }
        .is_persisted());
        assert!(Action::ConfirmNameEdit.is_persisted());
        assert!(Action::ConfirmScoreEdit.is_persisted());
        assert!(Action::AdvanceRound.is_persisted());
        assert!(!Action::BeginEditScore(0).is_persisted());
        assert!(!Action::UpdatePendingText(String::new()).is_persisted());
        assert!(!Action::DismissDialog.is_persisted());
        assert!(!Action::ResetGame.is_persisted());
    }
}
