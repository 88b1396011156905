//! Tone output through the terminal bell.

use std::io::{stdout, Write};
use std::thread;
use std::time::Duration;

use morse_core::Sounder;

/// Sounder backed by the terminal bell. The bell marks each tone's
/// onset; the blocking sleeps carry the actual dit/dah durations, which
/// is what makes the code speed real.
pub struct TerminalTone;

impl Sounder for TerminalTone {
    fn tone(&mut self, ms: u64) {
        let mut out = stdout();
        let _ = out.write_all(b"\x07");
        let _ = out.flush();
        thread::sleep(Duration::from_millis(ms));
    }

    fn rest(&mut self, ms: u64) {
        thread::sleep(Duration::from_millis(ms));
    }
}
