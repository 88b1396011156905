//! Curriculum state: the alphabet, per-symbol scores, the overall score,
//! and the active prefix.

use crate::alphabet::{self, Symbol};
use crate::estimator;
use crate::types::{Outcome, BAD};

/// How many symbols a fresh curriculum starts with.
const SEED_ACTIVE: usize = 2;

/// The student's gradebook. Symbols live in a fixed teaching order; only
/// the prefix `0..active_count()` is eligible for drilling. The overall
/// score tracks performance across all drilled symbols and gates both
/// curriculum growth and per-symbol acceleration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Curriculum {
    symbols: Vec<Symbol>,
    overall: u8,
    active: usize,
}

impl Curriculum {
    /// A fresh curriculum: every score at worst, two symbols active.
    pub fn new() -> Self {
        Self {
            symbols: alphabet::symbols(),
            overall: BAD,
            active: SEED_ACTIVE,
        }
    }

    /// Total number of symbols in the alphabet.
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    pub fn symbols(&self) -> &[Symbol] {
        &self.symbols
    }

    pub fn symbol(&self, index: usize) -> &Symbol {
        &self.symbols[index]
    }

    pub fn error_of(&self, index: usize) -> u8 {
        self.symbols[index].error
    }

    /// Smoothed error estimate across all drilled symbols.
    pub fn overall_error(&self) -> u8 {
        self.overall
    }

    pub fn active_count(&self) -> usize {
        self.active
    }

    pub fn is_active(&self, index: usize) -> bool {
        index < self.active
    }

    /// Set the active prefix length, clamped to `[1, len]`.
    pub fn set_active_count(&mut self, count: usize) {
        self.active = count.clamp(1, self.symbols.len());
    }

    /// Grow the active prefix by one symbol. Returns false when the whole
    /// alphabet is already in play.
    pub fn widen(&mut self) -> bool {
        if self.active < self.symbols.len() {
            self.active += 1;
            true
        } else {
            false
        }
    }

    /// Shrink the active prefix by one symbol, never below one.
    pub fn narrow(&mut self) -> bool {
        if self.active > 1 {
            self.active -= 1;
            true
        } else {
            false
        }
    }

    /// Fold one graded drill into the symbol's score and then the overall
    /// score. Returns the new overall so the caller can decide whether to
    /// accelerate this symbol's convergence.
    pub fn record_outcome(&mut self, index: usize, outcome: Outcome) -> u8 {
        let sample = outcome.score();
        let symbol = &mut self.symbols[index];
        symbol.error = estimator::smooth(symbol.error, sample);
        self.overall = estimator::smooth(self.overall, sample);
        self.overall
    }

    /// One extra smoothing step for a single symbol, leaving the overall
    /// score alone.
    pub fn accelerate(&mut self, index: usize, outcome: Outcome) {
        let symbol = &mut self.symbols[index];
        symbol.error = estimator::smooth(symbol.error, outcome.score());
    }
}

impl Default for Curriculum {
    fn default() -> Self {
        Self::new()
    }
}
