use crate::random::{random_history, random_name, random_player_count};
use crate::{Dialog, GameState, Phase, Player, Players, DEFAULT_MAX_SCORE, SCORE_SEED};
use rand::Rng;

impl GameState {
    /// Generates a started [GameState] with `player_count` default players and the
    /// [default max score](DEFAULT_MAX_SCORE), skipping the checks of
    /// [start_game](GameState::start_game).
    pub(crate) fn playing_state(player_count: usize) -> GameState {
        let players: Players = (1..=player_count)
            .map(|n| Player::new(format!("Player {n}")))
            .collect();
        GameState::from_parts(true, DEFAULT_MAX_SCORE, players, None)
    }

    /// Generates a [GameState] in a random phase. Started games hold a random number of
    /// players with random names, histories, and avatars. A history stops at the round in
    /// which the player was eliminated.
    pub(crate) fn random_state<R: Rng + ?Sized>(rng: &mut R) -> GameState {
        let phase: Phase = rng.gen();
        if phase == Phase::Idle {
            return GameState::default();
        }

        let max_score = rng.gen_range(100..=600);
        let players: Players = (0..random_player_count(rng))
            .map(|index| {
                let mut history = random_history(rng);
                let mut running = 0;
                let eliminated_in = history.iter().position(|&points| {
                    running += i64::from(points);
                    running >= max_score
                });
                if let Some(position) = eliminated_in {
                    history.truncate(position + 1);
                }
                let total: i64 = history.iter().copied().map(i64::from).sum();
                let avatar = rng
                    .gen_bool(0.5)
                    .then(|| format!("content://avatars/{index}").into());
                Player::from_parts(random_name(rng), history, total >= max_score, avatar)
            })
            .collect();

        let player = rng.gen_range(0..players.len());
        let dialog = match phase {
            Phase::EditingName => Some(Dialog::NameEditor {
                player,
                pending: random_name(rng),
            }),
            Phase::EditingScore => players
                .iter()
                .position(|player| !player.eliminated())
                .map(|player| Dialog::ScoreEditor {
                    player,
                    pending: SCORE_SEED.to_owned(),
                }),
            Phase::ViewingHistory => Some(Dialog::History { player }),
            Phase::Idle | Phase::Playing => None,
        };

        GameState::from_parts(true, max_score, players, dialog)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn playing_state() {
        let game_state = GameState::playing_state(3);

        assert_eq!(Phase::Playing, game_state.phase());
        assert_eq!(3, game_state.players().len());
        assert_eq!("Player 3", game_state.players()[2].name());
    }

    #[test]
    fn random_state_is_consistent() {
        let mut rng = rand::thread_rng();
        for _ in 0..100 {
            let game_state = GameState::random_state(&mut rng);

            assert_eq!(game_state.started(), !game_state.players().is_empty());
            for player in game_state.players() {
                let sum: i64 = player.history().iter().copied().map(i64::from).sum();
                assert_eq!(sum, player.total());
                assert_eq!(player.total() >= game_state.max_score(), player.eliminated());

                let mut running = 0;
                for &points in player.history().split_last().map_or(&[][..], |(_, rest)| rest) {
                    running += i64::from(points);
                    assert!(running < game_state.max_score());
                }
            }
            if let Some(index) = game_state
                .editing_player_index()
                .or(game_state.history_player_index())
            {
                assert!(index < game_state.players().len());
            }
        }
    }
}
