//! Curriculum growth policy.

use crate::curriculum::Curriculum;
use crate::types::BAD;

/// Widening requires the overall score at or below three tenths of worst.
const OVERALL_CEILING: u8 = (BAD as u16 * 3 / 10) as u8;

/// ...and every active symbol at or below four tenths of worst.
const SYMBOL_CEILING: u8 = (BAD as u16 * 4 / 10) as u8;

/// Post-drill check: widen the active prefix by exactly one symbol once
/// the student has demonstrated mastery both overall and on every active
/// symbol. Returns whether the prefix grew.
///
/// The two ceilings are tuned values carried over from the original
/// teaching machine; loosening them introduces new symbols early enough
/// to stall the whole session at worst scores.
pub fn review(curriculum: &mut Curriculum) -> bool {
    if curriculum.overall_error() > OVERALL_CEILING {
        return false;
    }
    let active = curriculum.active_count();
    if (0..active).any(|i| curriculum.error_of(i) > SYMBOL_CEILING) {
        return false;
    }
    curriculum.widen()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Outcome;
    use pretty_assertions::assert_eq;

    /// Answer every active symbol correctly until its score drops to the
    /// given level or below.
    fn grind_down(curriculum: &mut Curriculum, ceiling: u8) {
        for index in 0..curriculum.active_count() {
            while curriculum.error_of(index) > ceiling {
                curriculum.record_outcome(index, Outcome::Good);
            }
        }
    }

    #[test]
    fn widens_by_exactly_one_once_mastered() {
        let mut curriculum = Curriculum::new();
        grind_down(&mut curriculum, 20);

        assert!(curriculum.overall_error() <= OVERALL_CEILING);
        assert!(review(&mut curriculum));
        assert_eq!(curriculum.active_count(), 3);
    }

    #[test]
    fn high_overall_score_blocks_widening() {
        let mut curriculum = Curriculum::new();
        // Fresh curriculum: overall is still at worst.
        assert!(!review(&mut curriculum));
        assert_eq!(curriculum.active_count(), 2);
    }

    #[test]
    fn one_weak_symbol_blocks_widening() {
        let mut curriculum = Curriculum::new();
        grind_down(&mut curriculum, 20);
        assert!(review(&mut curriculum));

        // The freshly added symbol is still at worst, so growth stops
        // until it is drilled down too.
        assert!(!review(&mut curriculum));
        assert_eq!(curriculum.active_count(), 3);
    }

    #[test]
    fn never_widens_past_the_alphabet() {
        let mut curriculum = Curriculum::new();
        curriculum.set_active_count(curriculum.len());
        grind_down(&mut curriculum, 20);

        assert!(!review(&mut curriculum));
        assert_eq!(curriculum.active_count(), curriculum.len());
    }
}
