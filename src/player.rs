use crate::{AvatarRef, History, Points, Total};

/// One seat at the table: a name, a running total built from each round's points, and
/// whether the running total has reached the max score.
///
/// `total` always equals the sum of `history`, and `eliminated` is only ever set by
/// [recording](Player::record) points, so neither can be changed independently.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Player {
    /// The label shown for this player. Not required to be unique.
    name: String,
    /// The sum of `history`.
    total: Total,
    /// The points scored in each round, oldest first.
    history: History,
    /// Whether `total` has reached the max score.
    eliminated: bool,
    /// An opaque reference to an externally stored avatar image.
    avatar: Option<AvatarRef>,
}

impl Player {
    /// # Arguments
    ///
    /// * `name`: The label shown for this player.
    ///
    /// # Returns
    ///
    /// A [Player] with no points, an empty history, and no avatar.
    pub(crate) fn new(name: impl Into<String>) -> Player {
        Player {
            name: name.into(),
            total: 0,
            history: History::new(),
            eliminated: false,
            avatar: None,
        }
    }

    /// Rebuilds a player from already validated parts.
    pub(crate) fn from_parts(
        name: String,
        history: History,
        eliminated: bool,
        avatar: Option<AvatarRef>,
    ) -> Player {
        let total = history.iter().copied().map(Total::from).sum();
        Player {
            name,
            total,
            history,
            eliminated,
            avatar,
        }
    }

    /// The label shown for this player.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The sum of every round's points.
    #[inline]
    pub fn total(&self) -> Total {
        self.total
    }

    /// The points scored in each round, oldest first.
    #[inline]
    pub fn history(&self) -> &[Points] {
        &self.history
    }

    /// Whether the running total has reached the max score.
    #[inline]
    pub fn eliminated(&self) -> bool {
        self.eliminated
    }

    /// The reference to this player's avatar image, if one was chosen.
    #[inline]
    pub fn avatar(&self) -> Option<&AvatarRef> {
        self.avatar.as_ref()
    }

    pub(crate) fn rename(&mut self, name: String) {
        self.name = name;
    }

    pub(crate) fn set_avatar(&mut self, avatar: Option<AvatarRef>) {
        self.avatar = avatar;
    }

    /// Appends `points` to the history, adds them to the total, and re-derives elimination
    /// against `max_score`.
    ///
    /// # Returns
    ///
    /// Whether this call eliminated the player.
    pub(crate) fn record(&mut self, points: Points, max_score: Total) -> bool {
        let was_eliminated = self.eliminated;
        self.history.push(points);
        self.total += Total::from(points);
        self.eliminated = self.total >= max_score;
        self.eliminated && !was_eliminated
    }
}
