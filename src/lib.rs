//! A state machine to keep score in a game of Rami, with a serializable snapshot of the game
//! and a session that applies actions, notifies observers, and saves the game.
//!
//! ## Summary
//!
//! Implemented through `5` different [phases](Phase) of the game: `Idle`, `Playing`,
//! `EditingName`, `EditingScore`, and `ViewingHistory`. The game starts `Idle`, becomes
//! `Playing` once [started](GameState::start_game), and opens at most one dialog at a time on
//! top of `Playing`. Every round, each player's points are [entered](GameState::confirm_score_edit)
//! and added to their total. A player is eliminated once their total reaches the max score.
//! The last player standing is the [winner](GameState::winner).
//!
//! ## What are the phases of the game?
//!
//! * `Idle`: No game has been started, or the game was [reset](GameState::reset_game).
//! * `Playing`: A game is started and no dialog is open.
//! * `EditingName`: A [name editor](Dialog::NameEditor) is open for one player.
//! * `EditingScore`: A [score editor](Dialog::ScoreEditor) is open for one player.
//! * `ViewingHistory`: The [history](Dialog::History) of one player is shown.
//!
//! The phase is never stored. It is derived from whether the game is started and which
//! [dialog](Dialog) is open, so two dialogs can never be open at once.
//!
//! ## How is the game advanced?
//!
//! * [GameState::start_game] creates between [MIN_PLAYERS] and [MAX_PLAYERS] players named
//! `"Player 1"`, `"Player 2"`, and so on, each with a total of `0`.
//! * [GameState::begin_edit_name] and [GameState::begin_edit_score] open an editor seeded with
//! the player's name or [SCORE_SEED], [GameState::update_pending_text] replaces the text being
//! edited, and [GameState::confirm_name_edit] or [GameState::confirm_score_edit] commit it.
//! * [GameState::open_history] shows the points a player scored in each round.
//! * [GameState::dismiss_dialog] closes any dialog without committing anything.
//! * [GameState::advance_round] marks the end of a round.
//! * [GameState::reset_game] returns to `Idle` from anywhere.
//!
//! Each transition is also available as an [Action] value through [GameState::apply].
//!
//! ## How are refused transitions handled?
//!
//! A transition that is not allowed in the current phase, or that names a player who does not
//! exist, returns [TransitionErrors] and leaves the state unchanged. A [GameSession] decides
//! through its [ErrorPolicy] whether the caller hears about it or it is only logged.
//!
//! ## How is the game saved?
//!
//! [GameState::serialize] writes a JSON [GameSnapshot] and [GameState::deserialize] reads one
//! back, refusing any snapshot that describes a state no sequence of transitions could reach.
//! A [GameSession] saves to its [SnapshotStore] after every action that
//! [should be persisted](Action::is_persisted).
//!
//! ## How is the game viewed?
//!
//! [GameState::view] borrows everything a host needs to draw the game, and
//! [GameState::history_view] borrows the history being shown. Hosts that keep avatars as
//! references resolve them through an [ImageResolver].
//!
//! ## How are game states tested when properties are private?
//!
//! The `test` build configuration adds methods to build states for common scenarios and to
//! generate random states in any phase.

// Document!
#![forbid(
    rustdoc::broken_intra_doc_links,
    rustdoc::private_intra_doc_links,
    missing_docs,
    rustdoc::missing_crate_level_docs,
    rustdoc::invalid_codeblock_attributes,
    rustdoc::invalid_html_tags,
    rustdoc::bare_urls
)]
// Don't leave a build in a half finished state!
#![deny(
    warnings,
    future_incompatible,
    nonstandard_style,
    rust_2018_compatibility,
    rust_2018_idioms,
    rust_2021_compatibility,
    unused,
    single_use_lifetimes,
    unreachable_pub,
    missing_debug_implementations,
    unsafe_code
)]

pub use action::*;
pub use avatar::*;
pub use config::*;
pub use consts::*;
pub use game_state::*;
pub use player::*;
pub use session::*;
pub use snapshot::*;
pub use store::*;
pub use types::*;

mod action;
mod avatar;
mod config;
mod consts;
mod game_state;
mod player;
#[cfg(test)]
mod random;
mod session;
mod snapshot;
mod store;
#[cfg(test)]
mod test_logging;
#[cfg(test)]
mod tests_props;
mod types;
