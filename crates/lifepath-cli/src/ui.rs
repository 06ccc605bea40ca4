//! Terminal rendering for the LifePath client.
//!
//! Implements the quiz display boundary as plain lines of (optionally
//! coloured) text written to any `io::Write`.

use std::io::{self, Write};

use lifepath_logic::display::QuizDisplay;
use lifepath_logic::error::QuizError;
use lifepath_logic::outcome::{EndSummary, OutcomeTier};
use lifepath_logic::quiz::{ChallengeView, FeedbackView};
use lifepath_logic::stats::StatSet;
use owo_colors::{OwoColorize, Style};

const PROGRESS_WIDTH: usize = 30;

pub struct TerminalDisplay<W: Write> {
    out: W,
    color: bool,
    show_stats: bool,
    /// First write failure; rendering stops after it and the caller collects it.
    error: Option<io::Error>,
}

impl<W: Write> TerminalDisplay<W> {
    pub fn new(out: W, color: bool, show_stats: bool) -> Self {
        Self {
            out,
            color,
            show_stats,
            error: None,
        }
    }

    /// Surface a write failure from an earlier render call.
    pub fn take_error(&mut self) -> io::Result<()> {
        match self.error.take() {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    pub fn intro(&mut self) {
        let title = self.paint(
            "LifePath: A Journey Through Human Development",
            Style::new().bold().cyan(),
        );
        self.line(&title);
        self.line("Guide a life from before birth to old age. Each choice shapes who they become.");
        self.line(crate::input::HELP);
        self.line("");
    }

    pub fn hint(&mut self, text: &str) {
        let dim = self.paint(text, Style::new().dimmed());
        self.line(&dim);
    }

    fn paint(&self, text: &str, style: Style) -> String {
        if self.color {
            text.style(style).to_string()
        } else {
            text.to_string()
        }
    }

    fn line(&mut self, text: &str) {
        if self.error.is_some() {
            return;
        }
        if let Err(e) = writeln!(self.out, "{text}").and_then(|_| self.out.flush()) {
            self.error = Some(e);
        }
    }
}

/// `[#########.....................]  30%`
pub fn progress_bar(fraction: f64) -> String {
    let clamped = fraction.clamp(0.0, 1.0);
    let filled = (clamped * PROGRESS_WIDTH as f64).round() as usize;
    format!(
        "[{}{}] {:>3}%",
        "#".repeat(filled),
        ".".repeat(PROGRESS_WIDTH - filled),
        (clamped * 100.0).round() as u32
    )
}

impl<W: Write> QuizDisplay for TerminalDisplay<W> {
    fn render_challenge(&mut self, view: &ChallengeView) {
        let header = format!("== {} ==  ({})", view.stage_title, view.theme);
        let header = self.paint(&header, Style::new().bold().magenta());
        self.line("");
        self.line(&header);
        self.line(&view.prompt);
        for (i, option) in view.options.iter().enumerate() {
            self.line(&format!("  {}. {}", i + 1, option));
        }
    }

    fn render_feedback(&mut self, feedback: &FeedbackView) {
        let verdict = if feedback.is_correct {
            self.paint("✅ Correct!", Style::new().bold().green())
        } else {
            self.paint("❌ Incorrect.", Style::new().bold().red())
        };
        self.line(&format!("{} {}", verdict, feedback.feedback));
        self.hint(&format!(
            "{} {:+} -> {}   (press Enter to continue)",
            feedback.change.kind.label(),
            feedback.change.delta,
            feedback.change.value
        ));
    }

    fn render_progress(&mut self, fraction: f64) {
        let bar = self.paint(&progress_bar(fraction), Style::new().blue());
        self.line(&bar);
    }

    fn render_end(&mut self, summary: &EndSummary) {
        let style = match summary.tier {
            OutcomeTier::Excellent => Style::new().bold().green(),
            OutcomeTier::Good => Style::new().bold().yellow(),
            OutcomeTier::NeedsReview => Style::new().bold().red(),
        };
        let score = self.paint(
            &format!("Your final score: {}/{}", summary.final_score, summary.max_score),
            style,
        );
        self.line("");
        self.line(&score);
        self.line(&summary.message);
        self.render_stats(&summary.stats);
        self.hint("r = play again, q = quit");
    }

    fn render_stats(&mut self, stats: &StatSet) {
        if !self.show_stats {
            return;
        }
        let panel = stats
            .iter()
            .map(|(kind, value)| format!("{}: {}", kind.label(), value))
            .collect::<Vec<_>>()
            .join(" | ");
        self.hint(&panel);
    }

    fn render_farewell(&mut self, message: &str) {
        let msg = self.paint(message, Style::new().italic());
        self.line(&msg);
    }

    fn render_rejected(&mut self, error: &QuizError) {
        self.hint(&format!("(ignored: {error})"));
    }
}
