use crate::{Dialog, GameState, Phase, Player, Points, Total};

/// Immutably borrows what a host needs to draw the game from [GameState].
#[derive(Debug)]
pub struct GameView<'a> {
    /// The phase derived from the state.
    pub phase: Phase,
    /// A player is eliminated once their total reaches this score.
    pub max_score: Total,
    /// Every player in seating order.
    pub players: &'a [Player],
    /// The dialog currently open, if any.
    pub dialog: Option<&'a Dialog>,
    /// The index of the only player left, if exactly one remains.
    pub winner: Option<usize>,
}

/// Immutably borrows the player whose history is shown.
#[derive(Debug)]
pub struct HistoryView<'a> {
    /// The index of the player.
    pub index: usize,
    /// The player.
    pub player: &'a Player,
}

impl<'a> HistoryView<'a> {
    /// # Returns
    ///
    /// Each round's points paired with its round number, counting from `1`.
    pub fn rounds(&self) -> impl Iterator<Item = (usize, Points)> + 'a {
        let history: &'a [Points] = self.player.history();
        history.iter().copied().enumerate().map(|(round, points)| (round + 1, points))
    }
}

impl<'a> GameState {
    /// # Returns
    ///
    /// A new [GameView] struct, which immutably borrows properties from [GameState].
    pub fn view(&'a self) -> GameView<'a> {
        GameView {
            phase: self.phase(),
            max_score: self.max_score,
            players: &self.players,
            dialog: self.dialog.as_ref(),
            winner: self.winner(),
        }
    }

    /// # Returns
    ///
    /// A new [HistoryView] of the player whose history is shown, or [None] when the history
    /// viewer is closed.
    pub fn history_view(&'a self) -> Option<HistoryView<'a>> {
        let index = self.history_player_index()?;
        let player = self.players.get(index)?;
        Some(HistoryView { index, player })
    }
}
