//! Line commands read from stdin.

use std::path::PathBuf;
use std::str::FromStr;

use ui::settings::SettingKey;
use ui::{Command, Tab};

/// One parsed input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    /// Forward to the shell.
    Shell(Command),
    /// Print the current view.
    Show,
    /// Render the e-paper frame to a PNG file.
    Snapshot(PathBuf),
    /// Print the command list.
    Help,
    /// End the session.
    Quit,
}

/// Why a line could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseCommandError {
    /// Blank line.
    Empty,
    /// First word is not a command.
    Unknown(String),
    /// Command needs an argument that was not given.
    MissingArgument(&'static str),
    /// Argument is not one of the accepted values.
    BadArgument {
        /// Command the argument belongs to.
        command: &'static str,
        /// What was given.
        given: String,
    },
}

impl core::fmt::Display for ParseCommandError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Empty => write!(f, "empty command"),
            Self::Unknown(word) => write!(f, "unknown command '{word}' (try 'help')"),
            Self::MissingArgument(command) => write!(f, "'{command}' needs an argument"),
            Self::BadArgument { command, given } => {
                write!(f, "'{given}' is not a valid argument for '{command}'")
            }
        }
    }
}

impl std::error::Error for ParseCommandError {}

/// Help text listing every command.
pub const HELP: &str = "\
commands:
  scan                         start a scan (ANALIZZA ORA)
  reset                        back to the idle scanner (Riprova / Fatto)
  tab scan|history|settings    switch tab
  next | prev                  cycle tabs
  dismiss                      close the toast banner
  toggle auto|tips             flip a setting
  show                         print the current screen
  snapshot <file.png>          save the e-paper frame
  help                         this list
  quit                         leave";

fn parse_tab(arg: &str) -> Option<Tab> {
    Tab::ALL
        .into_iter()
        .find(|t| t.key().eq_ignore_ascii_case(arg) || t.label().eq_ignore_ascii_case(arg))
}

fn parse_setting(arg: &str) -> Option<SettingKey> {
    match arg.to_ascii_lowercase().as_str() {
        "auto" | "auto-connect" | "bluetooth" => Some(SettingKey::AutoConnect),
        "tips" | "notifiche" | "notifications" => Some(SettingKey::RecyclingTips),
        _ => None,
    }
}

impl FromStr for Input {
    type Err = ParseCommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut words = line.split_whitespace();
        let Some(head) = words.next() else {
            return Err(ParseCommandError::Empty);
        };
        let arg = words.next();
        match head.to_ascii_lowercase().as_str() {
            "scan" | "analizza" => Ok(Input::Shell(Command::StartScan)),
            "reset" | "riprova" | "fatto" => Ok(Input::Shell(Command::Reset)),
            "next" => Ok(Input::Shell(Command::NextTab)),
            "dismiss" | "ok" => Ok(Input::Shell(Command::DismissBanner)),
            "prev" | "previous" => Ok(Input::Shell(Command::PreviousTab)),
            "tab" => {
                let arg = arg.ok_or(ParseCommandError::MissingArgument("tab"))?;
                parse_tab(arg)
                    .map(|t| Input::Shell(Command::SelectTab(t)))
                    .ok_or_else(|| ParseCommandError::BadArgument {
                        command: "tab",
                        given: arg.to_owned(),
                    })
            }
            "toggle" => {
                let arg = arg.ok_or(ParseCommandError::MissingArgument("toggle"))?;
                parse_setting(arg)
                    .map(|k| Input::Shell(Command::ToggleSetting(k)))
                    .ok_or_else(|| ParseCommandError::BadArgument {
                        command: "toggle",
                        given: arg.to_owned(),
                    })
            }
            "show" => Ok(Input::Show),
            "snapshot" => arg
                .map(|p| Input::Snapshot(PathBuf::from(p)))
                .ok_or(ParseCommandError::MissingArgument("snapshot")),
            "help" | "?" => Ok(Input::Help),
            "quit" | "exit" | "q" => Ok(Input::Quit),
            _ => Err(ParseCommandError::Unknown(head.to_owned())),
        }
    }
}
