use konst::primitive::{parse_i64, parse_usize};
use konst::{option, result};

/// The smallest number of players allowed [to start](crate::GameState::start_game) a game.
/// `2` players.
pub const MIN_PLAYERS: usize = 2;
/// The largest number of players allowed [to start](crate::GameState::start_game) a game.
/// If the environment variable named `MAX_PLAYERS` is present at compile time and is able to be
/// parsed into a `usize`, set to the value of the environment variable. Otherwise, it is set
/// to `4`.
///
/// # See Also
///
/// * [MIN_PLAYERS]
/// * [PLAYER_CAPACITY]
pub const MAX_PLAYERS: usize = option::unwrap_or!(
    option::and_then!(option_env!("MAX_PLAYERS"), |str| result::ok!(
        parse_usize(str)
    )),
    4
);
const _: () = assert!(MAX_PLAYERS >= MIN_PLAYERS);
/// All players will be stored inline until the number of players becomes greater than
/// `PLAYER_CAPACITY`. When there are more than `PLAYER_CAPACITY` players, players will be heap
/// allocated. If the environment variable named `PLAYER_CAPACITY` is present at compile time
/// and is able to be parsed into a `usize`, set to the value of the environment variable.
/// Otherwise, it is set to [MAX_PLAYERS].
///
/// # See Also
///
/// * [Players](crate::Players)
pub const PLAYER_CAPACITY: usize = option::unwrap_or!(
    option::and_then!(option_env!("PLAYER_CAPACITY"), |str| result::ok!(
        parse_usize(str)
    )),
    MAX_PLAYERS
);
/// The max score used before a game is started and when no other max score is configured.
/// If the environment variable named `DEFAULT_MAX_SCORE` is present at compile time and is able
/// to be parsed into an `i64`, set to the value of the environment variable. Otherwise, it is
/// set to `501`.
///
/// # See Also
///
/// * [GameState::start_game](crate::GameState::start_game)
/// * [GameConfig](crate::GameConfig)
pub const DEFAULT_MAX_SCORE: i64 = option::unwrap_or!(
    option::and_then!(option_env!("DEFAULT_MAX_SCORE"), |str| result::ok!(
        parse_i64(str)
    )),
    501
);
const _: () = assert!(DEFAULT_MAX_SCORE > 0);
/// Players are named `"{DEFAULT_NAME_PREFIX} {n}"` when a game starts, where `n` counts from `1`.
pub const DEFAULT_NAME_PREFIX: &str = "Player";
/// The pending text a score editor opens with.
///
/// # See Also
///
/// * [GameState::begin_edit_score](crate::GameState::begin_edit_score)
pub const SCORE_SEED: &str = "0";
