//! Command-line configuration for the terminal client.

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "lifepath")]
#[command(version, about = "LifePath - walk through five stages of human development")]
pub struct Cli {
    /// Disable coloured output (also honoured: NO_COLOR)
    #[arg(long)]
    pub no_color: bool,

    /// Do not print the stat panel after each step
    #[arg(long)]
    pub hide_stats: bool,

    /// Play non-interactively with these option numbers (1-3), comma separated
    #[arg(long, value_delimiter = ',')]
    pub answers: Option<Vec<usize>>,

    /// Log filter used when RUST_LOG is not set
    #[arg(long, default_value = "warn")]
    pub log_level: String,
}

/// Resolved client settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliConfig {
    pub color: bool,
    pub show_stats: bool,
    /// 1-based option numbers for scripted play.
    pub answers: Option<Vec<usize>>,
    pub log_level: String,
}

impl CliConfig {
    pub fn from_cli(cli: Cli, no_color_env: bool) -> Self {
        Self {
            color: !cli.no_color && !no_color_env,
            show_stats: !cli.hide_stats,
            answers: cli.answers,
            log_level: cli.log_level,
        }
    }

    pub fn from_args() -> Self {
        Self::from_cli(Cli::parse(), std::env::var_os("NO_COLOR").is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> CliConfig {
        let cli = Cli::try_parse_from(std::iter::once("lifepath").chain(args.iter().copied()))
            .expect("valid args");
        CliConfig::from_cli(cli, false)
    }

    #[test]
    fn defaults() {
        let c = parse(&[]);
        assert!(c.color);
        assert!(c.show_stats);
        assert_eq!(c.answers, None);
        assert_eq!(c.log_level, "warn");
    }

    #[test]
    fn flags_and_scripted_answers() {
        let c = parse(&[
            "--no-color",
            "--hide-stats",
            "--answers",
            "1,2,3",
            "--log-level",
            "debug",
        ]);
        assert!(!c.color);
        assert!(!c.show_stats);
        assert_eq!(c.answers, Some(vec![1, 2, 3]));
        assert_eq!(c.log_level, "debug");
    }

    #[test]
    fn no_color_env_disables_color() {
        let cli = Cli::try_parse_from(["lifepath"]).unwrap();
        assert!(!CliConfig::from_cli(cli, true).color);
    }

    #[test]
    fn rejects_non_numeric_answers() {
        assert!(Cli::try_parse_from(["lifepath", "--answers", "a,b"]).is_err());
    }
}
