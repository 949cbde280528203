//! kitvi entrypoint.
use anyhow::Result;
use clap::Parser;
use core_config::load_from;
use core_input::CrosstermKeySource;
use core_terminal::{CrosstermBackend, CrosstermSurface};
use kitvi::{
    Args, ShutdownReason, WINDOW_TITLE, configure_logging, install_panic_hook, load_session,
    log_shutdown_stage, run_loop,
};
use tracing::{error, info, warn};

fn main() -> Result<()> {
    let args = Args::parse();
    // Config decides where logs go, so it is read before the subscriber exists
    // and its load outcome is logged afterwards.
    let config = load_from(args.config.clone())?;
    let _log_guard = configure_logging(config.log_file())?;
    install_panic_hook();

    info!(target: "runtime", "startup");
    config.log_summary();

    let mut state = load_session(args.path.as_deref(), &config);

    let mut backend = CrosstermBackend::new();
    let mut guard = match backend.enter_guard() {
        Ok(guard) => guard,
        Err(e) => {
            error!(target: "runtime.startup", error = %e, "terminal_start_failed");
            return Ok(());
        }
    };
    if let Err(e) = guard.set_title(WINDOW_TITLE) {
        warn!(target: "runtime.startup", error = %e, "set_title_failed");
    }

    let mut keys = CrosstermKeySource::new();
    let mut surface = CrosstermSurface::new();
    let outcome = run_loop(&mut state, &config, &mut keys, &mut surface);

    // Restore the terminal before anything else is reported.
    drop(guard);
    match outcome {
        Ok(reason) => {
            log_shutdown_stage(reason, "complete");
            Ok(())
        }
        Err(e) => {
            error!(target: "runtime", error = %e, "input_error");
            log_shutdown_stage(ShutdownReason::InputClosed, "complete");
            Err(e)
        }
    }
}
