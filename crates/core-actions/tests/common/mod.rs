#![allow(dead_code)] // Shared across integration tests; each test binary uses a subset of helpers.

use core_actions::{DispatchResult, handle_key};
use core_config::Config;
use core_events::{KeyCode, KeyEvent};
use core_state::EditorState;
use std::io::Write;
use std::path::Path;
use std::sync::{Arc, Mutex, MutexGuard};
use tracing::Level;
use tracing::subscriber::with_default;
use tracing_subscriber::fmt::MakeWriter;

pub fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::plain(code)
}

pub fn press(state: &mut EditorState, cfg: &Config, code: KeyCode) -> DispatchResult {
    handle_key(state, &key(code), cfg)
}

/// Feed every character of `text` as a plain `Char` key.
pub fn type_str(state: &mut EditorState, cfg: &Config, text: &str) -> DispatchResult {
    let mut last = DispatchResult::clean();
    for ch in text.chars() {
        last = press(state, cfg, KeyCode::Char(ch));
    }
    last
}

/// Esc, the command text, Enter. Returns the result of Enter.
pub fn run_command(state: &mut EditorState, cfg: &Config, cmd: &str) -> DispatchResult {
    press(state, cfg, KeyCode::Esc);
    type_str(state, cfg, cmd);
    press(state, cfg, KeyCode::Enter)
}

/// Config whose default save path lives inside `dir`.
pub fn config_in(dir: &Path) -> Config {
    let mut cfg = Config::default();
    cfg.file.write.default_path = dir.join("output.txt");
    cfg
}

/// The reachable-state invariant: at least one line, cursor inside the document.
pub fn assert_invariants(state: &EditorState) {
    let doc = &state.document;
    assert!(doc.line_count() >= 1, "document must never be empty");
    assert!(
        state.cursor.row < doc.line_count(),
        "row {} out of range ({} lines)",
        state.cursor.row,
        doc.line_count()
    );
    assert!(
        state.cursor.col <= doc.line_len(state.cursor.row),
        "col {} past end of line {} (len {})",
        state.cursor.col,
        state.cursor.row,
        doc.line_len(state.cursor.row)
    );
}

#[derive(Clone)]
struct BufferWriter {
    inner: Arc<Mutex<Vec<u8>>>,
}

struct LockedWriter<'a> {
    guard: MutexGuard<'a, Vec<u8>>,
}

impl<'a> Write for LockedWriter<'a> {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.guard.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for BufferWriter {
    type Writer = LockedWriter<'a>;

    fn make_writer(&'a self) -> Self::Writer {
        LockedWriter {
            guard: self.inner.lock().expect("log buffer poisoned"),
        }
    }
}

/// Run `f` under a thread-local fmt subscriber and return its formatted output.
pub fn capture_logs<T>(f: impl FnOnce() -> T) -> (T, String) {
    let buf = Arc::new(Mutex::new(Vec::new()));
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(Level::DEBUG)
        .with_target(true)
        .with_ansi(false)
        .without_time()
        .with_writer(BufferWriter { inner: buf.clone() })
        .finish();
    let out = with_default(subscriber, f);
    let logs = String::from_utf8(buf.lock().unwrap().clone()).unwrap();
    (out, logs)
}
