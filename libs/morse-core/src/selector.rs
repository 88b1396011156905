//! Error-weighted symbol selection.

use crate::curriculum::Curriculum;

/// Uniform random integers, seeded once at startup by the front end.
pub trait RandomSource {
    /// A uniformly distributed value in `[0, bound)`.
    fn next_below(&mut self, bound: u32) -> u32;
}

/// Pick a symbol index from the active prefix, with probability
/// proportional to `error + 1`.
///
/// The `+ 1` keeps fully mastered symbols in rotation instead of
/// starving them out once their score reaches zero.
pub fn select(curriculum: &Curriculum, rng: &mut dyn RandomSource) -> usize {
    let active = curriculum.active_count();
    let total: u32 = (0..active)
        .map(|i| u32::from(curriculum.error_of(i)) + 1)
        .sum();

    let mut remainder = i64::from(rng.next_below(total));
    for index in (0..active).rev() {
        remainder -= i64::from(curriculum.error_of(index)) + 1;
        if remainder <= 0 {
            return index;
        }
    }
    // The weights sum past any draw, so the walk always lands above.
    0
}
