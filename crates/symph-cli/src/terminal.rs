//! Line-oriented command terminal.
//!
//! [`Terminal`] owns the scrollback, command history, theme and token
//! address. It interprets one line at a time and returns a
//! [`TerminalAction`] for the things it cannot do itself (audio, lookups).

use symph_spec::{validate_address, validate_signature};

/// Lines shown when the terminal opens.
pub const WELCOME: [&str; 2] = [
    "Welcome to Blockchain Symphony v1.0",
    "Type \"help\" for available commands",
];

const HELP: [&str; 9] = [
    "Available commands:",
    "  help               - Show this help message",
    "  clear              - Clear terminal",
    "  play               - Play current transaction melody",
    "  stop               - Stop playing melody",
    "  theme              - Toggle color theme",
    "  history            - Show command history",
    "  settoken <address> - Set the token address to follow",
    "  quantum <signature> - Play the quantum harmonics of a transaction",
];

/// Color theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }
}

/// A parsed command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TerminalCommand {
    Help,
    Clear,
    Play,
    Stop,
    Theme,
    History,
    SetToken(Option<String>),
    Quantum(Option<String>),
    /// Anything else, passed through verbatim.
    Other(String),
}

impl TerminalCommand {
    /// Parses a line. Keywords are case-insensitive; arguments are kept as
    /// typed. Returns `None` for a blank line.
    pub fn parse(line: &str) -> Option<Self> {
        let line = line.trim();
        let mut parts = line.split_whitespace();
        let keyword = parts.next()?.to_ascii_lowercase();
        let arg = parts.next().map(str::to_string);
        let has_extra = parts.next().is_some();

        let command = match (keyword.as_str(), &arg) {
            ("help", None) => Self::Help,
            ("clear", None) => Self::Clear,
            ("play", None) => Self::Play,
            ("stop", None) => Self::Stop,
            ("theme", None) => Self::Theme,
            ("history", None) => Self::History,
            ("settoken", _) if !has_extra => Self::SetToken(arg),
            ("quantum", _) if !has_extra => Self::Quantum(arg),
            _ => Self::Other(line.to_string()),
        };
        Some(command)
    }
}

/// Work the terminal hands back to its owner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TerminalAction {
    None,
    /// Play the current transaction.
    Play,
    Stop,
    /// Play the quantum harmonics of this signature.
    Quantum(String),
    /// Unrecognized command, for a generic handler.
    Fallthrough(String),
}

/// Terminal state.
#[derive(Debug, Clone)]
pub struct Terminal {
    output: Vec<String>,
    printed: usize,
    history: Vec<String>,
    recall: Option<usize>,
    theme: Theme,
    token_address: String,
}

impl Terminal {
    /// Opens a terminal following `token_address`.
    pub fn new(token_address: impl Into<String>) -> Self {
        Self {
            output: WELCOME.iter().map(|s| s.to_string()).collect(),
            printed: 0,
            history: Vec::new(),
            recall: None,
            theme: Theme::default(),
            token_address: token_address.into(),
        }
    }

    pub fn output(&self) -> &[String] {
        &self.output
    }

    pub fn history(&self) -> &[String] {
        &self.history
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn token_address(&self) -> &str {
        &self.token_address
    }

    /// Appends a line to the scrollback.
    pub fn print(&mut self, line: impl Into<String>) {
        self.output.push(line.into());
    }

    /// Lines added since the previous call.
    pub fn take_unprinted(&mut self) -> Vec<String> {
        let start = self.printed.min(self.output.len());
        self.printed = self.output.len();
        self.output[start..].to_vec()
    }

    /// Interprets one input line.
    pub fn handle(&mut self, line: &str) -> TerminalAction {
        let Some(command) = TerminalCommand::parse(line) else {
            return TerminalAction::None;
        };
        let line = line.trim().to_string();
        self.recall = None;

        if command == TerminalCommand::Clear {
            self.output.clear();
            self.printed = 0;
            return TerminalAction::None;
        }

        self.print(format!("$ {}", line));
        let action = match command {
            TerminalCommand::Help => {
                self.output.extend(HELP.iter().map(|s| s.to_string()));
                TerminalAction::None
            }
            TerminalCommand::History => {
                let past = self.history.clone();
                self.output.extend(past);
                TerminalAction::None
            }
            TerminalCommand::Theme => {
                self.theme = self.theme.toggled();
                self.print(format!("Theme toggled: {}", self.theme.as_str()));
                TerminalAction::None
            }
            TerminalCommand::Play => TerminalAction::Play,
            TerminalCommand::Stop => TerminalAction::Stop,
            TerminalCommand::SetToken(None) => {
                self.print("Usage: settoken <address>");
                TerminalAction::None
            }
            TerminalCommand::SetToken(Some(address)) => {
                match validate_address(&address) {
                    Ok(()) => {
                        self.print(format!("Token address set to {}", address));
                        self.token_address = address;
                    }
                    Err(e) => self.print(format!("Error: {}", e)),
                }
                TerminalAction::None
            }
            TerminalCommand::Quantum(None) => {
                self.print("Usage: quantum <signature>");
                TerminalAction::None
            }
            TerminalCommand::Quantum(Some(signature)) => match validate_signature(&signature) {
                Ok(()) => TerminalAction::Quantum(signature),
                Err(e) => {
                    self.print(format!("Error: {}", e));
                    TerminalAction::None
                }
            },
            TerminalCommand::Other(cmd) => TerminalAction::Fallthrough(cmd),
            TerminalCommand::Clear => TerminalAction::None,
        };
        self.history.push(line);
        action
    }

    /// Steps back through history (the up arrow). Stops at the oldest entry.
    pub fn recall_previous(&mut self) -> Option<&str> {
        if self.history.is_empty() {
            return None;
        }
        let next = match self.recall {
            None => 0,
            Some(i) if i + 1 < self.history.len() => i + 1,
            Some(i) => i,
        };
        self.recall = Some(next);
        self.history
            .get(self.history.len() - 1 - next)
            .map(String::as_str)
    }

    /// Steps forward through history (the down arrow). `None` past the
    /// newest entry.
    pub fn recall_next(&mut self) -> Option<&str> {
        match self.recall {
            Some(i) if i > 0 => {
                self.recall = Some(i - 1);
                self.history
                    .get(self.history.len() - i)
                    .map(String::as_str)
            }
            _ => {
                self.recall = None;
                None
            }
        }
    }
}
