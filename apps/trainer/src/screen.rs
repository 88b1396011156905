//! Bar-graph board and answer feedback rendering.
//!
//! The board shows one column per symbol in teaching order, bar height
//! proportional to that symbol's error score. Active symbols get solid
//! bright bars; symbols not yet introduced are dimmed. Column zero is
//! the overall score, labelled `*`.

use std::io::{self, stdout, Write};

use crossterm::{
    cursor, execute,
    style::{Color, Print, ResetColor, SetForegroundColor},
    terminal::{self, ClearType},
};
use morse_core::{bar_height, Curriculum, Feedback, Tempo, BAR_HEIGHT};

const LABEL_ROW: u16 = BAR_HEIGHT as u16;
const ECHO_ROW: u16 = LABEL_ROW + 2;
const MENU_ROW: u16 = LABEL_ROW + 2;
const PROMPT_ROWS: u16 = 5;
const ECHO_WIDTH: u16 = 72;

const SOLID_BAR: char = '█';
const DIM_BAR: char = '░';

pub struct Screen {
    echo_col: u16,
}

impl Screen {
    pub fn new() -> Self {
        Self { echo_col: 0 }
    }

    /// Welcome text shown before the board takes over.
    pub fn banner(&mut self) -> io::Result<()> {
        let mut out = stdout();
        execute!(
            out,
            terminal::Clear(ClearType::All),
            cursor::Hide,
            cursor::MoveTo(20, 6),
            SetForegroundColor(Color::Cyan),
            Print("Morse Code Training"),
            ResetColor,
            cursor::MoveTo(12, 8),
            Print("Try to type each character before the computer does."),
            cursor::MoveTo(12, 9),
            Print("Press Enter at any time to take a break."),
        )?;
        out.flush()
    }

    /// Draw the whole board: overall column plus every symbol.
    pub fn draw_board(&mut self, curriculum: &Curriculum) -> io::Result<()> {
        execute!(stdout(), terminal::Clear(ClearType::All))?;
        self.draw_overall(curriculum.overall_error())?;
        for index in 0..curriculum.len() {
            self.draw_symbol(curriculum, index)?;
        }
        Ok(())
    }

    /// Redraw the overall score column.
    pub fn draw_overall(&mut self, overall: u8) -> io::Result<()> {
        Self::draw_column(0, '*', bar_height(overall), true)
    }

    /// Redraw one symbol's column.
    pub fn draw_symbol(&mut self, curriculum: &Curriculum, index: usize) -> io::Result<()> {
        let symbol = curriculum.symbol(index);
        let col = (index as u16 + 1) * 2;
        Self::draw_column(
            col,
            symbol.glyph,
            bar_height(symbol.error()),
            curriculum.is_active(index),
        )
    }

    fn draw_column(col: u16, glyph: char, height: u8, active: bool) -> io::Result<()> {
        let mut out = stdout();
        let (bar_color, bar_char, glyph_color) = if active {
            (Color::Cyan, SOLID_BAR, Color::White)
        } else {
            (Color::DarkGrey, DIM_BAR, Color::DarkGrey)
        };

        let first_bar_row = LABEL_ROW - u16::from(height);
        for row in 0..LABEL_ROW {
            let cell = if row >= first_bar_row { bar_char } else { ' ' };
            execute!(
                out,
                cursor::MoveTo(col, row),
                SetForegroundColor(bar_color),
                Print(cell),
            )?;
        }
        execute!(
            out,
            cursor::MoveTo(col, LABEL_ROW),
            SetForegroundColor(glyph_color),
            Print(glyph),
            ResetColor,
        )?;
        out.flush()
    }

    /// Clear the prompt area below the board and rearm the echo line.
    pub fn clear_prompt(&mut self) -> io::Result<()> {
        let mut out = stdout();
        for row in 0..PROMPT_ROWS {
            execute!(
                out,
                cursor::MoveTo(0, ECHO_ROW + row),
                terminal::Clear(ClearType::CurrentLine),
            )?;
        }
        self.echo_col = 0;
        out.flush()
    }

    /// Show the break menu; the `<` marks the current tempo.
    pub fn show_menu(&mut self, tempo: Tempo) -> io::Result<()> {
        self.clear_prompt()?;
        let mut out = stdout();
        let marker = |t: Tempo| if t == tempo { " <" } else { "" };
        execute!(
            out,
            cursor::MoveTo(0, MENU_ROW),
            SetForegroundColor(Color::Cyan),
            Print("Code speed            Practice alphabet       Training"),
            ResetColor,
            cursor::MoveTo(0, MENU_ROW + 1),
            Print(format!(
                "  S(low - 10 wpm){:<6}A(dd another symbol)    C(ontinue)",
                marker(Tempo::Slow)
            )),
            cursor::MoveTo(0, MENU_ROW + 2),
            Print(format!(
                "  M(edium - 15 wpm){:<4}R(emove last symbol)    Q(uit)",
                marker(Tempo::Medium)
            )),
            cursor::MoveTo(0, MENU_ROW + 3),
            Print(format!("  F(ast - 20 wpm){:<6}", marker(Tempo::Fast))),
            cursor::MoveTo(0, MENU_ROW + 4),
            Print("Your choice? (SMFARCQ) "),
        )?;
        out.flush()
    }

    /// Park the cursor below the board so the shell prompt lands clean.
    pub fn finish(&mut self) -> io::Result<()> {
        let mut out = stdout();
        execute!(
            out,
            cursor::MoveTo(0, ECHO_ROW + PROMPT_ROWS + 1),
            cursor::Show,
        )?;
        out.flush()
    }

    fn echo_glyph(&mut self, glyph: char) -> io::Result<()> {
        if self.echo_col >= ECHO_WIDTH {
            self.echo_col = 0;
            execute!(
                stdout(),
                cursor::MoveTo(0, ECHO_ROW),
                terminal::Clear(ClearType::CurrentLine),
            )?;
        }
        let mut out = stdout();
        execute!(
            out,
            cursor::MoveTo(self.echo_col, ECHO_ROW),
            Print(glyph),
            Print(' '),
        )?;
        self.echo_col += 2;
        out.flush()
    }
}

impl Feedback for Screen {
    fn reveal(&mut self, glyph: char) {
        // Best effort; a failed echo should never sink a drill.
        let _ = self.echo_glyph(glyph);
    }
}

impl Default for Screen {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for Screen {
    fn drop(&mut self) {
        let _ = execute!(stdout(), cursor::Show);
    }
}
