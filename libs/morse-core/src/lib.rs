//! Adaptive Morse code drill engine.
//!
//! Provides:
//! - Exponential error-rate estimation and bar-graph scaling
//! - Curriculum state with an error-weighted symbol selector
//! - The present/await/grade drill state machine with its adaptive
//!   response window
//! - The curriculum growth policy
//!
//! All hardware concerns (tone, keyboard, stopwatch, randomness, screen)
//! sit behind traits, so the engine is synchronous, single-threaded, and
//! fully testable with scripted collaborators.

pub mod alphabet;
pub mod controller;
pub mod curriculum;
pub mod error;
pub mod estimator;
pub mod selector;
pub mod session;
pub mod types;

pub use alphabet::{Marks, Pattern, Symbol};
pub use curriculum::Curriculum;
pub use error::{Result, TempoError};
pub use estimator::{bar_height, BAR_HEIGHT};
pub use selector::{select, RandomSource};
pub use session::{
    DrillOutcome, DrillReport, DrillSession, Feedback, Key, KeySource, Sounder, Stopwatch,
};
pub use types::{Mark, Outcome, Tempo, BAD, GOOD};
