//! Line-mode board presenter
//!
//! Prints the board with the newest round on top, like a physical Mastermind board
//! seen from the code breaker's side. With redraw on, the screen is cleared first so
//! the board stays in place between guesses.

use super::formatters::{round_line, spaced_code};
use crate::game::{BoardView, GameStatus, GuessError, Presenter};
use colored::Colorize;
use crossterm::{
    cursor::MoveTo,
    queue,
    terminal::{Clear, ClearType},
};
use std::io::{self, Write};

/// Presenter writing plain lines to any writer
///
/// Write errors never stop the game; the most recent one is kept for the caller.
pub struct TerminalPresenter<W: Write> {
    out: W,
    redraw: bool,
    failure: Option<io::Error>,
}

impl<W: Write> TerminalPresenter<W> {
    pub const fn new(out: W, redraw: bool) -> Self {
        Self {
            out,
            redraw,
            failure: None,
        }
    }

    /// Last write error, if any output was lost
    #[must_use]
    pub const fn failure(&self) -> Option<&io::Error> {
        self.failure.as_ref()
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn draw(&mut self, view: &BoardView<'_>) -> io::Result<()> {
        if self.redraw {
            queue!(self.out, Clear(ClearType::All), MoveTo(0, 0))?;
        }

        let positions = view.positions();
        let solution = spaced_code(view.solution, positions);
        let solution = match view.status {
            GameStatus::Won(_) => solution.green().bold(),
            GameStatus::Lost => solution.red().bold(),
            _ => solution.normal(),
        };
        writeln!(
            self.out,
            "{}\t{solution}\t\toptions: {}",
            "sol:".bold(),
            view.alphabet.to_string().cyan()
        )?;

        for round in view.rounds.iter().rev() {
            let line = round_line(round, positions);
            let line = if !round.is_played() {
                line.bright_black()
            } else if round.feedback().is_perfect() {
                line.bright_green().bold()
            } else {
                line.normal()
            };
            writeln!(self.out, "{line}")?;
        }

        match view.status {
            GameStatus::Won(round) => writeln!(
                self.out,
                "{}",
                format!("Cracked it in round {round}!").green().bold()
            )?,
            GameStatus::Lost => writeln!(self.out, "{}", "Out of rounds.".red().bold())?,
            _ => {}
        }

        self.out.flush()
    }
}

impl TerminalPresenter<io::Stdout> {
    #[must_use]
    pub fn stdout(redraw: bool) -> Self {
        Self::new(io::stdout(), redraw)
    }
}

impl<W: Write> Presenter for TerminalPresenter<W> {
    fn render(&mut self, view: &BoardView<'_>) {
        if let Err(e) = self.draw(view) {
            self.failure = Some(e);
        }
    }

    fn reject(&mut self, _round: usize, error: &GuessError) {
        if let Err(e) = writeln!(
            self.out,
            "{}",
            format!("input not okay: {error}").bright_red()
        ) {
            self.failure = Some(e);
        }
    }
}
