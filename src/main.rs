use std::env;
use std::io;

use log::{error, info, warn, LevelFilter};

mod constants;
mod entities;
mod game;
mod rendering;
mod terminal_io;
mod types;

use constants::LOG_FILE_NAME;
use game::{BoostPolicy, Game, Strategy};
use terminal_io::is_end_of_input;

#[derive(Debug, PartialEq)]
struct Settings {
    boost: BoostPolicy,
    log_level: LevelFilter,
    log_file: Option<String>,
    max_turns: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            boost: BoostPolicy::OneShot,
            log_level: LevelFilter::Info,
            log_file: None,
            max_turns: None,
        }
    }
}

impl Settings {
    /// Unknown or malformed arguments are collected as warnings rather than rejected.
    fn from_args(args: impl IntoIterator<Item = String>) -> (Self, Vec<String>) {
        let mut settings = Settings::default();
        let mut warnings = Vec::new();
        let mut args = args.into_iter().peekable();

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--always-boost" => settings.boost = BoostPolicy::Always,
                "--debug" => settings.log_level = LevelFilter::Debug,
                "--log-file" => {
                    let path = args.next_if(|next| !next.starts_with("--"));
                    settings.log_file = Some(path.unwrap_or_else(|| LOG_FILE_NAME.to_string()));
                }
                "--max-turns" => match args.next().map(|n| n.parse::<u64>()) {
                    Some(Ok(limit)) => settings.max_turns = Some(limit),
                    _ => warnings.push("--max-turns expects a number, ignoring".to_string()),
                },
                other => warnings.push(format!("Ignoring unknown argument {:?}", other)),
            }
        }
        (settings, warnings)
    }
}

fn init_logging(settings: &Settings) -> io::Result<()> {
    match &settings.log_file {
        Some(path) => simple_logging::log_to_file(path, settings.log_level),
        None => {
            // stdout carries the referee commands
            simple_logging::log_to_stderr(settings.log_level);
            Ok(())
        }
    }
}

fn main() -> io::Result<()> {
    let (settings, warnings) = Settings::from_args(env::args().skip(1));
    init_logging(&settings)?;
    info!("Starting pod-racer.");
    for warning in warnings {
        warn!("{}", warning);
    }

    let strategy = Strategy::DriftCompensation { boost: settings.boost };
    let mut game = Game::new(io::stdin().lock(), io::stdout().lock(), strategy, settings.max_turns);

    match game.run() {
        Ok(()) => Ok(()),
        Err(e) if is_end_of_input(&e) => {
            info!("No more input after {} turns", game.turns_played());
            Ok(())
        }
        Err(e) => {
            error!("Race aborted: {}", e);
            Err(e)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> (Settings, Vec<String>) {
        Settings::from_args(args.iter().map(|arg| arg.to_string()))
    }

    #[test]
    fn defaults_without_arguments() {
        let (settings, warnings) = parse(&[]);
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.boost, BoostPolicy::OneShot);
        assert!(warnings.is_empty());
    }

    #[test]
    fn parses_every_flag() {
        let (settings, warnings) = parse(&["--always-boost", "--debug", "--log-file", "race.log", "--max-turns", "12"]);
        assert!(warnings.is_empty());
        assert_eq!(
            settings,
            Settings {
                boost: BoostPolicy::Always,
                log_level: LevelFilter::Debug,
                log_file: Some("race.log".to_string()),
                max_turns: Some(12),
            }
        );
    }

    #[test]
    fn log_file_falls_back_to_default_name() {
        let (settings, _) = parse(&["--log-file", "--debug"]);
        assert_eq!(settings.log_file.as_deref(), Some(LOG_FILE_NAME));
        assert_eq!(settings.log_level, LevelFilter::Debug);
    }

    #[test]
    fn bad_arguments_become_warnings() {
        let (settings, warnings) = parse(&["--max-turns", "lots", "--fast"]);
        assert_eq!(settings.max_turns, None);
        assert_eq!(warnings.len(), 2);
        assert!(warnings[1].contains("--fast"));
    }
}
