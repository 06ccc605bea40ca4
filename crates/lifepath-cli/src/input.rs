//! Player input handling: typed lines to quiz events.

use lifepath_logic::session::InputEvent;

/// One parsed line of player input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Event(InputEvent),
    Help,
    Unknown(String),
}

/// Players type option numbers 1-3; the quiz indexes options from 0.
/// `0` wraps to an index the quiz rejects as out of range.
pub fn option_index(number: usize) -> usize {
    number.wrapping_sub(1)
}

pub fn parse_command(line: &str) -> Command {
    let trimmed = line.trim().to_ascii_lowercase();
    match trimmed.as_str() {
        "s" | "start" => Command::Event(InputEvent::Start),
        "" | "c" | "continue" => Command::Event(InputEvent::Continue),
        "r" | "restart" => Command::Event(InputEvent::Restart),
        "q" | "quit" | "exit" => Command::Event(InputEvent::Quit),
        "h" | "help" | "?" => Command::Help,
        other => match other.parse::<usize>() {
            Ok(n) => Command::Event(InputEvent::SelectOption(option_index(n))),
            Err(_) => Command::Unknown(other.to_string()),
        },
    }
}

/// Event stream for a scripted run: start, then answer + continue per entry.
pub fn scripted_events(answers: &[usize]) -> Vec<InputEvent> {
    std::iter::once(InputEvent::Start)
        .chain(answers.iter().flat_map(|&n| {
            [
                InputEvent::SelectOption(option_index(n)),
                InputEvent::Continue,
            ]
        }))
        .collect()
}

pub const HELP: &str =
    "Commands: s = start, 1-3 = choose option, Enter/c = continue, r = restart, q = quit";
