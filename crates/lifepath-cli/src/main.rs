//! LifePath terminal client.
//!
//! Usage:
//!   cargo run -p lifepath-cli
//!   cargo run -p lifepath-cli -- --answers 1,1,2,1,1,3,1,1,1,1 --no-color

mod config;
mod input;
mod ui;

use std::io::{self, BufRead};

use anyhow::{Context, Result};
use lifepath_logic::catalog::Catalog;
use lifepath_logic::session::{Handled, Session};

use crate::config::CliConfig;
use crate::input::{parse_command, scripted_events, Command, HELP};
use crate::ui::TerminalDisplay;

fn main() -> Result<()> {
    let config = CliConfig::from_args();
    init_logging(&config.log_level);

    let catalog = Catalog::standard().context("Built-in content failed validation")?;
    let mut session = Session::new(catalog);

    let stdout = io::stdout();
    let mut display = TerminalDisplay::new(stdout.lock(), config.color, config.show_stats);

    match &config.answers {
        Some(answers) => run_scripted(&mut session, &mut display, answers),
        None => run_interactive(&mut session, &mut display, io::stdin().lock()),
    }
}

fn init_logging(default_filter: &str) {
    // Logs go to stderr so they never interleave with the quiz screen.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_filter)),
        )
        .with_writer(io::stderr)
        .init();
}

fn run_scripted<W: io::Write>(
    session: &mut Session,
    display: &mut TerminalDisplay<W>,
    answers: &[usize],
) -> Result<()> {
    log::info!("Scripted run with {} answers", answers.len());
    for event in scripted_events(answers) {
        // Rejections are already shown by the display; keep going.
        if let Ok(Handled::Finished) = session.handle(event, display) {
            break;
        }
        display.take_error().context("Failed to write to terminal")?;
    }
    display.take_error().context("Failed to write to terminal")?;

    if !matches!(
        session.quiz().phase(),
        lifepath_logic::Phase::Finished { .. }
    ) {
        log::warn!(
            "Scripted answers ended before the quiz finished ({} challenges)",
            session.quiz().catalog().total_challenges()
        );
    }
    Ok(())
}

fn run_interactive<W: io::Write, R: BufRead>(
    session: &mut Session,
    display: &mut TerminalDisplay<W>,
    reader: R,
) -> Result<()> {
    display.intro();
    for line in reader.lines() {
        let line = line.context("Failed to read input")?;
        match parse_command(&line) {
            Command::Event(event) => {
                if let Ok(Handled::Quit) = session.handle(event, display) {
                    display.take_error().context("Failed to write to terminal")?;
                    break;
                }
            }
            Command::Help => display.hint(HELP),
            Command::Unknown(text) => display.hint(&format!("Unknown command '{text}'. {HELP}")),
        }
        display.take_error().context("Failed to write to terminal")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(script: &str) -> (Session, String) {
        let mut session = Session::new(Catalog::standard().unwrap());
        let mut display = TerminalDisplay::new(Vec::new(), false, true);
        run_interactive(&mut session, &mut display, script.as_bytes()).unwrap();
        (session, String::from_utf8(display.into_inner()).unwrap())
    }

    #[test]
    fn interactive_session_to_the_end() {
        let script = "s\n".to_string() + &"1\n\n".repeat(10);
        let (session, out) = run(&script);
        assert_eq!(session.quiz().score(), 100);
        assert!(out.contains("Your final score: 100/100"));
    }

    #[test]
    fn quit_stops_reading_input() {
        let (session, out) = run("s\nq\n1\n");
        assert!(out.contains("Thank you for playing!"));
        assert_eq!(session.quiz().score(), 0);
        assert!(!session.quiz().state().answered);
    }

    #[test]
    fn unknown_command_prints_help() {
        let (_, out) = run("dance\n");
        assert!(out.contains("Unknown command 'dance'"));
    }

    #[test]
    fn scripted_run_with_mistakes() {
        let mut session = Session::new(Catalog::standard().unwrap());
        let mut display = TerminalDisplay::new(Vec::new(), false, false);
        let answers = [1, 2, 2, 1, 1, 1, 1, 1, 1, 1];
        run_scripted(&mut session, &mut display, &answers).unwrap();
        let out = String::from_utf8(display.into_inner()).unwrap();
        assert!(out.contains("Your final score: 80/100"));
        assert!(out.contains("Excellent!"));
    }

    #[test]
    fn short_script_leaves_quiz_unfinished() {
        let mut session = Session::new(Catalog::standard().unwrap());
        let mut display = TerminalDisplay::new(Vec::new(), false, false);
        run_scripted(&mut session, &mut display, &[1, 1]).unwrap();
        assert_eq!(session.quiz().score(), 20);
        assert!(matches!(
            session.quiz().phase(),
            lifepath_logic::Phase::AwaitingAnswer { stage: 1, challenge: 0 }
        ));
    }
}
