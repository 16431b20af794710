//! Properties that hold for every sequence of transitions, refused or not.

use crate::{Action, GameState, Phase, Points, Total, MAX_PLAYERS, MIN_PLAYERS};
use proptest::prelude::*;

fn config() -> ProptestConfig {
    ProptestConfig {
        cases: 128,
        ..ProptestConfig::default()
    }
}

/// Indexes that sometimes address no player.
fn index() -> impl Strategy<Value = usize> {
    0..MAX_PLAYERS + 2
}

/// Text typed into an editor: mostly numbers, sometimes anything.
fn pending_text() -> impl Strategy<Value = String> {
    prop_oneof![
        3 => (-150..400).prop_map(|points: Points| points.to_string()),
        1 => "[a-zA-Z ]{0,8}",
    ]
}

fn action() -> impl Strategy<Value = Action> {
    prop_oneof![
        1 => (1..600 as Total, 0..MAX_PLAYERS + 2).prop_map(|(max_score, player_count)| {
            Action::StartGame {
                max_score,
                player_count,
            }
        }),
        1 => Just(Action::ResetGame),
        1 => index().prop_map(Action::BeginEditName),
        3 => index().prop_map(Action::BeginEditScore),
        3 => pending_text().prop_map(Action::UpdatePendingText),
        1 => Just(Action::ConfirmNameEdit),
        3 => Just(Action::ConfirmScoreEdit),
        1 => index().prop_map(Action::OpenHistory),
        1 => Just(Action::DismissDialog),
        1 => Just(Action::AdvanceRound),
        1 => (index(), proptest::option::of("[a-z]{1,6}"))
            .prop_map(|(index, avatar)| Action::SetAvatar(index, avatar.map(Into::into))),
    ]
}

/// A state reached from a fresh game by applying `actions`, ignoring refusals.
fn reached(actions: Vec<Action>) -> GameState {
    let mut game_state = GameState::new();
    for action in actions {
        let _ = game_state.apply(action);
    }
    game_state
}

fn assert_consistent(game_state: &GameState) -> Result<(), TestCaseError> {
    prop_assert_eq!(game_state.started(), !game_state.players().is_empty());
    for player in game_state.players() {
        let sum: Total = player.history().iter().copied().map(Total::from).sum();
        prop_assert_eq!(sum, player.total());
        prop_assert_eq!(player.total() >= game_state.max_score(), player.eliminated());

        let mut running: Total = 0;
        for &points in player.history().split_last().map_or(&[][..], |(_, rest)| rest) {
            running += Total::from(points);
            prop_assert!(running < game_state.max_score());
        }
    }
    if let Some(index) = game_state
        .editing_player_index()
        .or(game_state.history_player_index())
    {
        prop_assert!(index < game_state.players().len());
    }
    if game_state.score_editor_open() {
        let index = game_state.editing_player_index().unwrap_or_default();
        prop_assert!(!game_state.players()[index].eliminated());
    }
    Ok(())
}

proptest! {
    #![proptest_config(config())]

    #[test]
    fn prop_start_creates_fresh_players(
        max_score in 1..10_000 as Total,
        player_count in MIN_PLAYERS..=MAX_PLAYERS,
        before in proptest::collection::vec(action(), 0..20),
    ) {
        let mut game_state = reached(before);

        game_state.start_game(max_score, player_count).unwrap();

        prop_assert!(game_state.started());
        prop_assert_eq!(Phase::Playing, game_state.phase());
        prop_assert_eq!(max_score, game_state.max_score());
        prop_assert_eq!(player_count, game_state.players().len());
        for (index, player) in game_state.players().iter().enumerate() {
            prop_assert_eq!(format!("Player {}", index + 1), player.name());
            prop_assert_eq!(0, player.total());
            prop_assert!(player.history().is_empty());
            prop_assert!(!player.eliminated());
        }
    }

    #[test]
    fn prop_total_is_sum_of_history(
        deltas in proptest::collection::vec(-200..200 as Points, 0..15),
    ) {
        let mut game_state = GameState::new();
        game_state.start_game(1_000_000, 2).unwrap();

        for delta in &deltas {
            game_state.begin_edit_score(1).unwrap();
            game_state.update_pending_text(delta.to_string()).unwrap();
            game_state.confirm_score_edit().unwrap();
        }

        let player = &game_state.players()[1];
        prop_assert_eq!(deltas.as_slice(), player.history());
        prop_assert_eq!(deltas.iter().copied().map(Total::from).sum::<Total>(), player.total());
        prop_assert!(game_state.players()[0].history().is_empty());
    }

    #[test]
    fn prop_eliminated_once_max_score_reached(
        max_score in 50..600 as Total,
        deltas in proptest::collection::vec(-50..200 as Points, 1..20),
    ) {
        let mut game_state = GameState::new();
        game_state.start_game(max_score, 3).unwrap();

        for delta in deltas {
            if game_state.begin_edit_score(0).is_err() {
                prop_assert!(game_state.players()[0].eliminated());
                break;
            }
            game_state.update_pending_text(delta.to_string()).unwrap();
            game_state.confirm_score_edit().unwrap();

            let player = &game_state.players()[0];
            prop_assert_eq!(player.total() >= max_score, player.eliminated());
        }
    }

    #[test]
    fn prop_every_reached_state_is_consistent(
        actions in proptest::collection::vec(action(), 0..60),
    ) {
        let mut game_state = GameState::new();
        for action in actions {
            let before = game_state.clone();
            if game_state.apply(action).is_err() {
                prop_assert_eq!(&before, &game_state);
            }
            assert_consistent(&game_state)?;
        }
    }

    #[test]
    fn prop_reset_returns_to_idle(actions in proptest::collection::vec(action(), 0..40)) {
        let mut game_state = reached(actions);

        game_state.reset_game();

        prop_assert_eq!(GameState::default(), game_state);
    }

    #[test]
    fn prop_dismiss_is_idempotent(actions in proptest::collection::vec(action(), 0..40)) {
        let mut once = reached(actions);
        once.dismiss_dialog();
        let mut twice = once.clone();
        twice.dismiss_dialog();

        prop_assert_eq!(&once, &twice);
        prop_assert!(matches!(once.phase(), Phase::Idle | Phase::Playing));
    }

    #[test]
    fn prop_snapshot_restores_reached_state(
        actions in proptest::collection::vec(action(), 0..60),
    ) {
        let game_state = reached(actions);

        let restored = GameState::deserialize(&game_state.serialize()).unwrap();

        prop_assert_eq!(game_state, restored);
    }
}
