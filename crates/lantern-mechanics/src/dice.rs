//! Die rolls.
//!
//! Every roll draws from a caller-owned [`StdRng`] so each session (and each
//! test) controls its own randomness.

use rand::Rng;
use rand::rngs::StdRng;

/// Faces on the check die.
pub const D20: u32 = 20;

/// Roll one die with `sides` faces, uniformly in `1..=sides`.
///
/// A zero-sided die is treated as a one-sided one.
pub fn roll_die(rng: &mut StdRng, sides: u32) -> u32 {
    rng.random_range(1..=sides.max(1))
}

/// Roll the check die.
pub fn roll_d20(rng: &mut StdRng) -> u32 {
    roll_die(rng, D20)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::SeedableRng;

    #[test]
    fn d20_hits_both_ends() {
        let mut rng = StdRng::seed_from_u64(7);
        let rolls: Vec<u32> = (0..2000).map(|_| roll_d20(&mut rng)).collect();
        assert!(rolls.contains(&1));
        assert!(rolls.contains(&20));
    }

    #[test]
    fn zero_sided_die_rolls_one() {
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(roll_die(&mut rng, 0), 1);
    }

    #[test]
    fn same_seed_same_rolls() {
        let mut a = StdRng::seed_from_u64(99);
        let mut b = StdRng::seed_from_u64(99);
        let first: Vec<u32> = (0..10).map(|_| roll_d20(&mut a)).collect();
        let second: Vec<u32> = (0..10).map(|_| roll_d20(&mut b)).collect();
        assert_eq!(first, second);
    }

    proptest! {
        #[test]
        fn rolls_stay_on_the_die(seed in any::<u64>(), sides in 1u32..=100) {
            let mut rng = StdRng::seed_from_u64(seed);
            let value = roll_die(&mut rng, sides);
            prop_assert!((1..=sides).contains(&value));
        }
    }
}
