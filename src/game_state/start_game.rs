use crate::{
    GameState, Player, Players, Total, TransitionError, TransitionErrors, DEFAULT_NAME_PREFIX,
    MAX_PLAYERS, MIN_PLAYERS,
};
use std::collections::HashSet;
use tracing::{debug, info};

impl GameState {
    /// Checks that `player_count` is between [MIN_PLAYERS] and [MAX_PLAYERS] and that
    /// `max_score` is positive. If so, replaces any previous game with a new one of
    /// `player_count` players named `"Player 1"`, `"Player 2"`, and so on, each with no points.
    ///
    /// # Arguments
    ///
    /// * `max_score`: A player is eliminated once their total reaches this score.
    /// * `player_count`: The number of players in the game.
    ///
    /// # Errors
    ///
    /// * [TransitionError::PlayerCountOutOfRange] Attempting to start with too few or too
    /// many players.
    /// * [TransitionError::NonPositiveMaxScore] Attempting to start with a max score that is
    /// not positive.
    ///
    /// # See Also
    ///
    /// * [GameState::start_game_named]
    #[inline]
    pub fn start_game(
        &mut self,
        max_score: Total,
        player_count: usize,
    ) -> Result<(), TransitionErrors> {
        self.start_game_named(max_score, player_count, DEFAULT_NAME_PREFIX)
    }

    /// Same as [GameState::start_game] but players are named `"{name_prefix} {n}"`.
    ///
    /// # Errors
    ///
    /// * [TransitionError::PlayerCountOutOfRange] Attempting to start with too few or too
    /// many players.
    /// * [TransitionError::NonPositiveMaxScore] Attempting to start with a max score that is
    /// not positive.
    pub fn start_game_named(
        &mut self,
        max_score: Total,
        player_count: usize,
        name_prefix: &str,
    ) -> Result<(), TransitionErrors> {
        GameState::check_start(max_score, player_count)?;

        let players: Players = (1..=player_count)
            .map(|n| Player::new(format!("{name_prefix} {n}")))
            .collect();
        *self = GameState::from_parts(true, max_score, players, None);

        info!(max_score, player_count, "started game");
        Ok(())
    }

    /// Discards every player and returns to a state equal to [GameState::default].
    pub fn reset_game(&mut self) {
        *self = GameState::default();
        debug!("reset game");
    }

    /// # Errors
    ///
    /// * [TransitionError::PlayerCountOutOfRange] Attempting to start with too few or too
    /// many players.
    /// * [TransitionError::NonPositiveMaxScore] Attempting to start with a max score that is
    /// not positive.
    fn check_start(max_score: Total, player_count: usize) -> Result<(), TransitionErrors> {
        let mut errors = HashSet::with_capacity(2);
        if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&player_count) {
            errors.insert(TransitionError::PlayerCountOutOfRange { player_count });
        }
        if max_score <= 0 {
            errors.insert(TransitionError::NonPositiveMaxScore { max_score });
        }

        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(())
    }
}
