//! Process startup: CLI arguments, logging, panic hook, initial session.

use anyhow::Result;
use clap::Parser;
use core_actions::io_ops::{OpenFileResult, open_file};
use core_config::Config;
use core_state::EditorState;
use std::path::{Path, PathBuf};
use std::sync::Once;
use tracing::info;
use tracing_appender::non_blocking::WorkerGuard;

/// CLI arguments.
#[derive(Parser, Debug)]
#[command(name = "kitvi", version, about = "Minimal modal terminal text editor")]
pub struct Args {
    /// File to edit. Bound as the save target even when it does not exist yet.
    pub path: Option<PathBuf>,
    /// Configuration file (overrides discovery of `kitvi.toml`).
    #[arg(long = "config")]
    pub config: Option<PathBuf>,
}

/// Send `tracing` output to `log_file` in the working directory, truncating
/// any previous log. Filtering follows `RUST_LOG`.
///
/// Returns `None` when a global subscriber is already installed.
pub fn configure_logging(log_file: &str) -> Result<Option<WorkerGuard>> {
    let log_dir = Path::new(".");
    let log_path = log_dir.join(log_file);
    if log_path.exists() {
        std::fs::remove_file(&log_path)?;
    }

    let file_appender = tracing_appender::rolling::never(log_dir, log_file);
    let (nb_writer, guard) = tracing_appender::non_blocking(file_appender);
    let installed = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(nb_writer)
        .with_ansi(false)
        .try_init()
        .is_ok();
    Ok(installed.then_some(guard))
}

pub fn install_panic_hook() {
    static HOOK: Once = Once::new();
    HOOK.call_once(|| {
        let default_panic = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |info| {
            tracing::error!(target: "runtime.panic", ?info, "panic");
            default_panic(info);
        }));
    });
}

/// Build the initial session from the optional startup path.
///
/// A path that cannot be read still becomes the save target; the session
/// starts with a single empty line.
pub fn load_session(path: Option<&Path>, config: &Config) -> EditorState {
    let mut open_failed = false;
    let state = match path {
        Some(p) => {
            let state = match open_file(p) {
                OpenFileResult::Success(opened) => EditorState::new(opened.document),
                OpenFileResult::Error => {
                    open_failed = true;
                    EditorState::default()
                }
            };
            state.with_file_name(p)
        }
        None => EditorState::default(),
    }
    .with_vertical_clamp(config.vertical_clamp());

    let path_str = path.map(|p| p.display().to_string());
    info!(
        target: "runtime.startup",
        path = path_str.as_deref(),
        lines = state.document.line_count(),
        open_failed,
        vertical_clamp = ?state.vertical_clamp,
        "session_loaded"
    );
    state
}
