//! Exponential error-rate estimation.

use crate::types::BAD;

/// Height of a full error bar on the display board.
pub const BAR_HEIGHT: u8 = 19;

/// Weighted moving average with a 7/8 smoothing factor.
///
/// Feeding a stream of GOOD/BAD sentinels yields a slowly decaying
/// estimate of recent error frequency. The `+ 4` rounds half-up.
pub fn smooth(previous: u8, sample: u8) -> u8 {
    ((7 * u16::from(previous) + u16::from(sample) + 4) / 8) as u8
}

/// The same filter over millisecond quantities, used for the adaptive
/// response window.
pub fn smooth_ms(previous: u64, sample: u64) -> u64 {
    (7 * previous + sample + 4) / 8
}

/// Linear scaling of an error score into `[0, BAR_HEIGHT]` bar rows.
pub fn bar_height(score: u8) -> u8 {
    ((u16::from(score) * u16::from(BAR_HEIGHT) + u16::from(BAD) / 2) / u16::from(BAD)) as u8
}
