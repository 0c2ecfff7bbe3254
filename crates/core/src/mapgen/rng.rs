//! Sampling helpers over the injected ChaCha stream.
//!
//! One bound convention everywhere: `sample_range` is half-open `[lo, hi)`
//! for geometry (sizes, positions, rotations), and configuration count
//! ranges are inclusive, widened by one only inside `sample_count`.

use rand_chacha::ChaCha8Rng;
use rand_chacha::rand_core::Rng;

use crate::config::CountRange;

/// Uniform draw from `[lo, hi)`. An empty range yields `lo`, which is what
/// degenerate placements (min == max sizes, rooms as wide as the grid) rely
/// on.
pub(super) fn sample_range(rng: &mut ChaCha8Rng, lo: i32, hi: i32) -> i32 {
    if hi <= lo {
        return lo;
    }
    let span = (hi - lo) as u64;
    lo + (rng.next_u64() % span) as i32
}

/// Uniform draw from an inclusive configuration count range.
pub(super) fn sample_count(rng: &mut ChaCha8Rng, range: CountRange) -> u32 {
    sample_range(rng, range.min as i32, range.max as i32 + 1) as u32
}

pub(super) fn choose<'a, T>(rng: &mut ChaCha8Rng, slice: &'a [T]) -> &'a T {
    &slice[rng.next_u64() as usize % slice.len()]
}

#[cfg(test)]
mod tests {
    use rand_chacha::rand_core::SeedableRng;

    use super::*;

    #[test]
    fn sample_range_stays_inside_half_open_bounds() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        for _ in 0..200 {
            let value = sample_range(&mut rng, 3, 11);
            assert!((3..11).contains(&value));
        }
    }

    #[test]
    fn sample_range_returns_lo_for_empty_range() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        assert_eq!(sample_range(&mut rng, 4, 4), 4);
        assert_eq!(sample_range(&mut rng, 4, -2), 4);
    }

    #[test]
    fn sample_count_covers_both_inclusive_endpoints() {
        let mut rng = ChaCha8Rng::seed_from_u64(99);
        let range = CountRange { min: 1, max: 3 };
        let mut seen = [false; 4];
        for _ in 0..200 {
            let value = sample_count(&mut rng, range);
            assert!((1..=3).contains(&value));
            seen[value as usize] = true;
        }
        assert!(seen[1] && seen[2] && seen[3], "all endpoints should be reachable");
    }

    #[test]
    fn choose_is_deterministic_for_a_fixed_seed() {
        let pool = ["a", "b", "c"];
        let mut first = ChaCha8Rng::seed_from_u64(1234);
        let mut second = ChaCha8Rng::seed_from_u64(1234);
        for _ in 0..50 {
            assert_eq!(choose(&mut first, &pool), choose(&mut second, &pool));
        }
    }
}
