//! The per-symbol drill: present the stimulus, await the answer, grade.

use crate::alphabet::Pattern;
use crate::curriculum::Curriculum;
use crate::estimator;
use crate::types::{Mark, Outcome, Tempo, BAD};

/// Upper bound on the adaptive response window.
pub const WINDOW_CEILING_MS: u64 = 6000;

/// Response window before any drill has been graded.
pub const INITIAL_WINDOW_MS: u64 = 3500;

/// Pause after the correct glyph is revealed.
const REVEAL_PAUSE_MS: u64 = 250;

/// Overall score below which a symbol's own score gets an extra update.
const ACCELERATE_BELOW: u8 = BAD / 10;

/// Tone and silence output. Implementations must block for the requested
/// real time; stimulus timing is what carries the code speed.
pub trait Sounder {
    fn tone(&mut self, ms: u64);
    fn rest(&mut self, ms: u64);
}

/// A pressed key, as seen by the drill loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Glyph(char),
    /// The dedicated break key; aborts the current drill without grading.
    Break,
}

/// Non-blocking key input. `None` means no key is currently buffered.
pub trait KeySource {
    fn poll(&mut self) -> Option<Key>;
}

/// Stateful stopwatch: each call returns the milliseconds since the
/// previous call and resets the reference point.
pub trait Stopwatch {
    fn lap_ms(&mut self) -> u64;
}

/// Answer feedback: shows the correct glyph. The same hook doubles as
/// the hint after a timeout.
pub trait Feedback {
    fn reveal(&mut self, glyph: char);
}

/// How a drill ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrillOutcome {
    Completed(DrillReport),
    /// The student pressed the break key; nothing was graded.
    Interrupted,
}

/// Grading details for a completed drill.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DrillReport {
    pub outcome: Outcome,
    /// Response time of the presentation that was finally answered.
    pub response_ms: u64,
    /// How many times the stimulus was sent before the correct key.
    pub presentations: u32,
}

/// Drives one symbol through present/await/grade. Owns the tempo and
/// the adaptive response window, both shared across all symbols.
#[derive(Debug, Clone)]
pub struct DrillSession {
    tempo: Tempo,
    window_ms: u64,
}

impl DrillSession {
    pub fn new(tempo: Tempo) -> Self {
        Self {
            tempo,
            window_ms: INITIAL_WINDOW_MS,
        }
    }

    pub fn tempo(&self) -> Tempo {
        self.tempo
    }

    pub fn set_tempo(&mut self, tempo: Tempo) {
        self.tempo = tempo;
    }

    /// Current response window in milliseconds.
    pub fn window_ms(&self) -> u64 {
        self.window_ms
    }

    /// Run one drill for the symbol at `index`.
    ///
    /// Sends the stimulus and waits for the matching key, revealing the
    /// answer and resending on every timeout until the student gets it
    /// right or requests a break. A completed drill updates the response
    /// window and the curriculum scores; an interrupted one changes
    /// nothing.
    pub fn run(
        &mut self,
        curriculum: &mut Curriculum,
        index: usize,
        sounder: &mut dyn Sounder,
        keys: &mut dyn KeySource,
        clock: &mut dyn Stopwatch,
        feedback: &mut dyn Feedback,
    ) -> DrillOutcome {
        let glyph = curriculum.symbol(index).glyph;
        let pattern = curriculum.symbol(index).pattern;
        let mut outcome = Outcome::Good;
        let mut presentations = 0u32;

        loop {
            presentations += 1;
            self.send(pattern, sounder);

            // Drain typeahead; a queued break is honored before grading.
            while let Some(key) = keys.poll() {
                if key == Key::Break {
                    return DrillOutcome::Interrupted;
                }
            }

            clock.lap_ms(); // reset the stopwatch
            let mut elapsed = 0u64;
            let answered = loop {
                match keys.poll() {
                    Some(Key::Glyph(c)) if c == glyph => break true,
                    Some(Key::Break) => return DrillOutcome::Interrupted,
                    // Wrong guesses and empty polls just cost time.
                    _ => {}
                }
                elapsed += clock.lap_ms();
                if elapsed > self.window_ms {
                    break false;
                }
            };

            feedback.reveal(glyph);
            sounder.rest(REVEAL_PAUSE_MS);

            if answered {
                self.window_ms =
                    estimator::smooth_ms(self.window_ms, 2 * elapsed).min(WINDOW_CEILING_MS);
                let overall = curriculum.record_outcome(index, outcome);
                if overall < ACCELERATE_BELOW {
                    curriculum.accelerate(index, outcome);
                }
                return DrillOutcome::Completed(DrillReport {
                    outcome,
                    response_ms: elapsed,
                    presentations,
                });
            }
            // Timed out: the reveal above was the hint, and the grade is
            // pinned to BAD for the rest of the drill.
            outcome = Outcome::Bad;
        }
    }

    /// Emit the pattern: a unit tone per dit, a triple per dah, a unit
    /// of silence between marks.
    fn send(&self, pattern: Pattern, sounder: &mut dyn Sounder) {
        let unit = self.tempo.unit_ms();
        for mark in pattern.marks() {
            let ms = match mark {
                Mark::Dit => unit,
                Mark::Dah => 3 * unit,
            };
            sounder.tone(ms);
            sounder.rest(unit);
        }
    }
}
