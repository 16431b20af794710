use crate::{History, Phase, Points, MAX_PLAYERS, MIN_PLAYERS};
use rand::distributions::{Distribution, Standard, Uniform};
use rand::Rng;
use tap::Tap;

/// A random number of players between [MIN_PLAYERS] and [MAX_PLAYERS] inclusive.
pub(crate) fn random_player_count<R: Rng + ?Sized>(rng: &mut R) -> usize {
    rng.gen_range(MIN_PLAYERS..=MAX_PLAYERS)
}

/// Points typical of one round, sometimes negative.
pub(crate) fn random_points<R: Rng + ?Sized>(rng: &mut R) -> Points {
    Uniform::from(-20..=120).sample(rng)
}

/// A random, small number of rounds of [random points](random_points).
///
/// # Returns
///
/// The history, oldest first.
pub(crate) fn random_history<R: Rng + ?Sized>(rng: &mut R) -> History {
    let rounds = rng.gen_range(0..8);
    History::with_capacity(rounds).tap_mut(|history| {
        history.extend((0..rounds).map(|_| random_points(rng)));
    })
}

/// A random name that is never empty.
pub(crate) fn random_name<R: Rng + ?Sized>(rng: &mut R) -> String {
    const NAMES: [&str; 6] = ["Ana", "Bea", "Chloé", "Dris", "Élie", "Farid"];
    let name = NAMES[rng.gen_range(0..NAMES.len())];
    format!("{name} {}", rng.gen_range(1..100))
}

impl Distribution<Phase> for Standard {
    #[inline]
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Phase {
        let index = rng.gen_range(0..Phase::PHASES_LEN);
        num_traits::FromPrimitive::from_usize(index).unwrap_or_else(|| {
            dbg!(index, Phase::PHASES_LEN);
            unreachable!(
                "index ({:?}) should be matched since phases cover all indexes \
                in range 0..Phase::PHASES_LEN (0..{:?}).",
                index,
                Phase::PHASES_LEN
            );
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn random_player_count_in_range() {
        let mut rng = rand::thread_rng();
        for _ in 0..100 {
            let player_count = random_player_count(&mut rng);
            assert!((MIN_PLAYERS..=MAX_PLAYERS).contains(&player_count));
        }
    }

    #[test]
    fn random_history_points_in_range() {
        let mut rng = rand::thread_rng();
        for _ in 0..100 {
            for points in random_history(&mut rng) {
                assert!((-20..=120).contains(&points));
            }
        }
    }

    #[test]
    fn random_phase_covers_every_phase() {
        let mut rng = rand::thread_rng();
        let mut counts = [0; Phase::PHASES_LEN];
        for _ in 0..1_000 {
            counts[rng.gen::<Phase>() as usize] += 1;
        }

        for count in counts {
            assert!(count > 0);
        }
    }
}
