//! kitvi runtime: startup helpers and the key/paint control loop.
//!
//! `main.rs` wires these to the real terminal; tests drive the same code with
//! scripted keys and an in-memory surface.

pub mod runtime;
pub mod startup;

pub use runtime::{ShutdownReason, log_shutdown_stage, run_loop};
pub use startup::{Args, configure_logging, install_panic_hook, load_session};

/// Terminal window title set at startup.
pub const WINDOW_TITLE: &str = "kitvi";
