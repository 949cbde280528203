//! Pending command editing & execution (:w, :q, :qw, :q!).
//!
//! Every execution, recognised or not, ends with the pending command cleared
//! and the mode back in Insert. Quit commands only report `quit`; the runtime
//! performs the actual shutdown so terminal cleanup always runs.
//!
//! Saving with no bound file name binds the configured default path first
//! (with a warning) and keeps it bound for the rest of the session. A failed
//! save during `:qw` cancels the quit so unsaved work is not lost silently.

use super::DispatchResult;
use super::command_parser::{CommandParser, ParsedCommand};
use crate::Action;
use crate::io_ops::{WriteFileResult, write_file};
use core_config::Config;
use core_state::{EditorState, Mode, NoticeLevel};

pub(crate) fn handle_command_action(
    action: Action,
    state: &mut EditorState,
    config: &Config,
) -> DispatchResult {
    if !matches!(state.mode, Mode::Command) {
        return DispatchResult::clean();
    }
    match action {
        Action::CommandChar(ch) => {
            state.command_line.push_char(ch);
            DispatchResult::dirty()
        }
        Action::CommandExecute => execute_command(state, config),
        _ => unreachable!("non-command action routed to command handler"),
    }
}

fn execute_command(state: &mut EditorState, config: &Config) -> DispatchResult {
    let raw = state.command_line.take();
    tracing::info!(target: "runtime.command", command = raw.as_str(), "execute");
    let result = match CommandParser::parse(&raw) {
        ParsedCommand::Write => {
            handle_write(state, config);
            DispatchResult::dirty()
        }
        ParsedCommand::Quit => {
            tracing::info!(target: "runtime.command", discarded_changes = state.dirty, "quit");
            DispatchResult::quit()
        }
        ParsedCommand::WriteQuit => {
            if handle_write(state, config) {
                tracing::info!(target: "runtime.command", "quit_after_write");
                DispatchResult::quit()
            } else {
                tracing::error!(target: "runtime.command", "write_failed_quit_aborted");
                state.set_notice(NoticeLevel::Error, "Write failed, not quitting");
                DispatchResult::dirty()
            }
        }
        ParsedCommand::ForceQuit => {
            tracing::info!(target: "runtime.command", "quit_without_saving");
            DispatchResult::quit()
        }
        ParsedCommand::Unknown(cmd) => {
            tracing::info!(target: "runtime.command", command = cmd.as_str(), "unhandled_command");
            state.set_notice(NoticeLevel::Info, format!("Not a command: {cmd}"));
            DispatchResult::dirty()
        }
    };
    state.leave_command_mode();
    result
}

/// Save to the bound file, binding the default path first when unbound.
/// Returns true when the document reached disk.
fn handle_write(state: &mut EditorState, config: &Config) -> bool {
    if state.file_name.is_none() {
        let fallback = config.default_save_path().to_path_buf();
        tracing::warn!(target: "runtime.command", path = %fallback.display(), "write_no_filename_using_default");
        state.set_notice(
            NoticeLevel::Warn,
            format!("No file name, saving to {}", fallback.display()),
        );
        state.file_name = Some(fallback);
    }
    match write_file(state) {
        WriteFileResult::Success { lines, .. } => {
            if state.notice.is_none() {
                state.set_notice(NoticeLevel::Info, format!("Wrote {lines} lines"));
            }
            true
        }
        WriteFileResult::NoFilename => {
            tracing::error!(target: "runtime.command", "write_no_filename");
            state.set_notice(NoticeLevel::Error, "No file name");
            false
        }
        WriteFileResult::Error => {
            state.set_notice(NoticeLevel::Error, "Write failed");
            false
        }
    }
}
