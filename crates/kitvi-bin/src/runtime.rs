//! Control loop: read a key, dispatch it, repaint.
//!
//! Generic over the key source and the drawing surface so the same loop runs
//! against the terminal and against scripted input in tests. Terminal
//! lifecycle is not handled here; the caller holds the guard.

use anyhow::Result;
use core_actions::handle_key;
use core_config::Config;
use core_input::KeySource;
use core_render::{RenderOptions, render};
use core_state::EditorState;
use core_terminal::Surface;
use std::fmt;
use tracing::{error, info, trace};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShutdownReason {
    /// `:q`, `:q!` or a successful `:qw`.
    Command,
    /// The key source ran dry.
    InputClosed,
}

impl ShutdownReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            ShutdownReason::Command => "command_quit",
            ShutdownReason::InputClosed => "input_closed",
        }
    }
}

impl fmt::Display for ShutdownReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

pub fn log_shutdown_stage(reason: ShutdownReason, stage: &'static str) {
    info!(
        target: "runtime.shutdown",
        reason = reason.as_str(),
        stage = stage,
        "shutdown_stage"
    );
}

/// Drive the session until a quit command or the end of input.
///
/// Key source errors end the loop with an error. Paint errors are logged and
/// the loop keeps going; the next frame repaints everything anyway.
pub fn run_loop<K, S>(
    state: &mut EditorState,
    config: &Config,
    keys: &mut K,
    surface: &mut S,
) -> Result<ShutdownReason>
where
    K: KeySource + ?Sized,
    S: Surface + ?Sized,
{
    let opts = RenderOptions {
        status_last: config.status_paint_last(),
    };
    if let Err(e) = render(state, opts, surface) {
        error!(target: "render", ?e, "initial_render_error");
    }

    let loop_span = tracing::debug_span!(target: "runtime", "event_loop");
    let _enter = loop_span.enter();

    let reason = loop {
        let Some(key) = keys.next_key()? else {
            break ShutdownReason::InputClosed;
        };
        let result = handle_key(state, &key, config);
        trace!(
            target: "runtime",
            key = %key,
            dirty = result.dirty,
            quit = result.quit,
            mode = state.mode.as_str(),
            "key_handled"
        );
        if result.quit {
            break ShutdownReason::Command;
        }
        if let Err(e) = render(state, opts, surface) {
            error!(target: "render", ?e, "render_error");
        }
    };
    log_shutdown_stage(reason, "loop_exit");
    Ok(reason)
}
