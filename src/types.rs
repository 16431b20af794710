use crate::{Player, PLAYER_CAPACITY};
use smallvec::SmallVec;
use std::collections::HashSet;

/// The points scored by one player in one round. Negative points are allowed.
///
/// # See Also
///
/// * [History]
/// * [GameState::confirm_score_edit](crate::GameState::confirm_score_edit)
pub type Points = i32;
/// The cumulative score of one player, and the type of the max score it is compared against.
///
/// # See Also
///
/// * [Player::total]
/// * [GameState::max_score](crate::GameState::max_score)
pub type Total = i64;
/// The points scored by one player in each round, in the order the rounds were scored.
///
/// # See Also
///
/// * [Points]
/// * [Player::history]
pub type History = Vec<Points>;
/// A vector of every [player](Player) in the game, in seating order.
///
/// # See Also
///
/// * [PLAYER_CAPACITY]
/// * [GameState](crate::GameState)
pub type Players = SmallVec<[Player; PLAYER_CAPACITY]>;
/// Every reason a transition was refused.
///
/// # See Also
///
/// * [TransitionError](crate::TransitionError)
pub type TransitionErrors = HashSet<crate::TransitionError>;
