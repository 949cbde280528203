//! Command string classification.
//!
//! Exactly four literal commands exist. Matching is exact and
//! whitespace-sensitive: `":w "` or `"w"` are unknown commands, not writes.
//! No side effects here; pure classification.

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsedCommand {
    /// `:w` - save.
    Write,
    /// `:q` - quit, discarding unsaved changes.
    Quit,
    /// `:qw` - save, then quit.
    WriteQuit,
    /// `:q!` - quit without saving.
    ForceQuit,
    Unknown(String),
}

pub struct CommandParser;

impl CommandParser {
    pub fn parse(raw: &str) -> ParsedCommand {
        match raw {
            ":w" => ParsedCommand::Write,
            ":q" => ParsedCommand::Quit,
            ":qw" => ParsedCommand::WriteQuit,
            ":q!" => ParsedCommand::ForceQuit,
            other => ParsedCommand::Unknown(other.to_string()),
        }
    }
}
