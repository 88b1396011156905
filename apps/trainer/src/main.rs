//! Morse Tutor: adaptive Morse code drills in the terminal.
//!
//! The engine in `morse-core` picks symbols, grades responses, and grows
//! the practice alphabet; this binary wires it to the keyboard, the
//! terminal bell, and a bar-graph board.

mod audio;
mod input;
mod screen;
mod summary;

use std::path::PathBuf;
use std::time::Instant;

use anyhow::Result;
use chrono::Utc;
use clap::Parser;
use morse_core::{
    controller, select, Curriculum, DrillOutcome, DrillSession, Key, KeySource, Outcome,
    RandomSource, Sounder, Stopwatch, Tempo,
};
use rand::rngs::ThreadRng;
use rand::Rng;
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use audio::TerminalTone;
use input::{Keyboard, RawModeGuard};
use screen::Screen;
use summary::SessionSummary;

/// Pause on the welcome banner before drilling starts.
const BANNER_PAUSE_MS: u64 = 3000;
/// Breathing room between a menu visit and the next run of drills.
const BREATH_MS: u64 = 600;

#[derive(Parser, Debug)]
#[command(name = "morse-tutor", about = "Adaptive Morse code trainer", version)]
struct Args {
    /// Starting code speed: slow (10 wpm), medium (15 wpm), or fast (20 wpm)
    #[arg(short, long, default_value = "fast")]
    tempo: String,

    /// Start with this many symbols in the practice alphabet
    #[arg(short, long)]
    active: Option<usize>,

    /// Write a JSON session summary to this path on exit
    #[arg(long)]
    summary_json: Option<PathBuf>,
}

/// Stopwatch over a monotonic clock; each lap resets the reference.
struct LapTimer {
    last: Instant,
}

impl LapTimer {
    fn new() -> Self {
        Self {
            last: Instant::now(),
        }
    }
}

impl Stopwatch for LapTimer {
    fn lap_ms(&mut self) -> u64 {
        let now = Instant::now();
        let ms = now.duration_since(self.last).as_millis() as u64;
        self.last = now;
        ms
    }
}

/// Thread-local RNG behind the engine's RandomSource seam.
struct DiceCup(ThreadRng);

impl RandomSource for DiceCup {
    fn next_below(&mut self, bound: u32) -> u32 {
        self.0.gen_range(0..bound)
    }
}

enum MenuChoice {
    Continue,
    Quit,
}

fn main() -> Result<()> {
    let args = Args::parse();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "warn".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let tempo: Tempo = args.tempo.parse()?;
    let mut curriculum = Curriculum::new();
    if let Some(active) = args.active {
        curriculum.set_active_count(active);
    }
    let mut session = DrillSession::new(tempo);

    let raw = RawModeGuard::enter()?;
    let mut keyboard = Keyboard::new();
    let mut sounder = TerminalTone;
    let mut clock = LapTimer::new();
    let mut rng = DiceCup(rand::thread_rng());
    let mut screen = Screen::new();

    let started_at = Utc::now();
    let mut drills = 0u32;
    let mut first_try = 0u32;

    screen.banner()?;
    sounder.rest(BANNER_PAUSE_MS);
    screen.draw_board(&curriculum)?;

    info!(tempo = %session.tempo(), active = curriculum.active_count(), "session started");

    'session: loop {
        screen.clear_prompt()?;
        sounder.rest(BREATH_MS);

        // Drill until the student asks for a break.
        loop {
            let index = select(&curriculum, &mut rng);
            let outcome = session.run(
                &mut curriculum,
                index,
                &mut sounder,
                &mut keyboard,
                &mut clock,
                &mut screen,
            );

            match outcome {
                DrillOutcome::Completed(report) => {
                    drills += 1;
                    if report.outcome == Outcome::Good {
                        first_try += 1;
                    }
                    debug!(
                        glyph = %curriculum.symbol(index).glyph,
                        outcome = ?report.outcome,
                        response_ms = report.response_ms,
                        presentations = report.presentations,
                        "drill graded"
                    );
                    screen.draw_symbol(&curriculum, index)?;
                    screen.draw_overall(curriculum.overall_error())?;
                    if controller::review(&mut curriculum) {
                        let active = curriculum.active_count();
                        info!(active, "widened the practice alphabet");
                        screen.draw_symbol(&curriculum, active - 1)?;
                    }
                }
                DrillOutcome::Interrupted => break,
            }
        }

        match menu(
            &mut session,
            &mut curriculum,
            &mut keyboard,
            &mut screen,
        )? {
            MenuChoice::Continue => continue 'session,
            MenuChoice::Quit => break 'session,
        }
    }

    screen.finish()?;
    drop(raw);

    let summary = SessionSummary {
        started_at,
        finished_at: Utc::now(),
        drills,
        first_try,
        retried: drills - first_try,
        final_active: curriculum.active_count(),
        final_overall_error: curriculum.overall_error(),
        tempo: session.tempo(),
    };
    println!("{summary}");

    if let Some(path) = &args.summary_json {
        summary.write_json(path)?;
        info!(path = %path.display(), "session summary written");
    }
    Ok(())
}

/// Break menu: tempo changes, manual alphabet sizing, continue or quit.
/// Unlisted keys are ignored.
fn menu(
    session: &mut DrillSession,
    curriculum: &mut Curriculum,
    keyboard: &mut Keyboard,
    screen: &mut Screen,
) -> Result<MenuChoice> {
    screen.show_menu(session.tempo())?;
    loop {
        let Some(Key::Glyph(choice)) = keyboard.poll() else {
            continue;
        };
        match choice {
            'S' => retune(session, screen, Tempo::Slow)?,
            'M' => retune(session, screen, Tempo::Medium)?,
            'F' => retune(session, screen, Tempo::Fast)?,
            'A' => {
                if curriculum.widen() {
                    let added = curriculum.active_count() - 1;
                    info!(active = curriculum.active_count(), "symbol added by hand");
                    screen.draw_symbol(curriculum, added)?;
                }
            }
            'R' => {
                if curriculum.narrow() {
                    let removed = curriculum.active_count();
                    info!(active = curriculum.active_count(), "symbol removed by hand");
                    screen.draw_symbol(curriculum, removed)?;
                }
            }
            'C' => return Ok(MenuChoice::Continue),
            'Q' => return Ok(MenuChoice::Quit),
            _ => {}
        }
    }
}

fn retune(session: &mut DrillSession, screen: &mut Screen, tempo: Tempo) -> Result<()> {
    session.set_tempo(tempo);
    info!(tempo = %tempo, "tempo changed");
    screen.show_menu(tempo)?;
    Ok(())
}
