//! File IO helpers used by startup and the command interpreter.
//!
//! Synchronous and minimal. These helpers isolate the persisted line format
//! and failure logging so the dispatcher focuses on command semantics.
//! Failures come back as outcome variants, already logged.

use core_state::EditorState;
use core_text::{Document, has_mixed_line_endings};
use std::path::{Path, PathBuf};

/// Result of attempting to open a file.
#[derive(Debug)]
pub enum OpenFileResult {
    Success(OpenSuccess),
    Error, // already logged; caller falls back to an empty document
}

#[derive(Debug)]
pub struct OpenSuccess {
    pub document: Document,
    pub file_name: PathBuf,
    pub mixed_line_endings: bool,
}

/// Read `path` line by line into a new `Document`, terminators stripped.
pub fn open_file(path: &Path) -> OpenFileResult {
    match std::fs::read_to_string(path) {
        Ok(content) => {
            let mixed = has_mixed_line_endings(&content);
            if mixed {
                tracing::warn!(target: "io", file=%path.display(), "mixed_line_endings_detected");
            }
            let document = Document::from_text(&content);
            tracing::debug!(target: "io", file=%path.display(), size_bytes=content.len(), line_count=document.line_count(), "file_read_ok");
            OpenFileResult::Success(OpenSuccess {
                document,
                file_name: path.to_path_buf(),
                mixed_line_endings: mixed,
            })
        }
        Err(e) => {
            tracing::warn!(target: "io", file=%path.display(), "file_open_failed_starting_empty");
            tracing::error!(target: "io", ?e, "file_open_error");
            OpenFileResult::Error
        }
    }
}

/// Result of a write attempt.
#[derive(Debug, PartialEq, Eq)]
pub enum WriteFileResult {
    Success { lines: usize, bytes: usize },
    NoFilename,
    Error,
}

/// Serialize the document to the bound file name, overwriting it.
pub fn write_file(state: &mut EditorState) -> WriteFileResult {
    let Some(path) = state.file_name.clone() else {
        return WriteFileResult::NoFilename;
    };
    let content = state.document.to_text();
    match std::fs::write(&path, content.as_bytes()) {
        Ok(_) => {
            state.dirty = false; // mark clean after successful write
            let lines = state.document.line_count();
            tracing::info!(target: "io", file=%path.display(), lines, bytes=content.len(), "file_written");
            WriteFileResult::Success {
                lines,
                bytes: content.len(),
            }
        }
        Err(e) => {
            tracing::error!(target: "io", file=%path.display(), ?e, "file_write_error");
            WriteFileResult::Error
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_file_strips_terminators() {
        use std::io::Write;
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sample.txt");
        {
            let mut f = std::fs::File::create(&path).unwrap();
            // Mixed line endings CRLF + LF + final CRLF
            write!(f, "line1\r\nline2\nline3\r\n").unwrap();
        }
        match open_file(&path) {
            OpenFileResult::Success(s) => {
                assert_eq!(s.document.lines(), &["line1", "line2", "line3"]);
                assert!(s.mixed_line_endings, "should detect mixed endings");
                assert_eq!(s.file_name, path);
            }
            other => panic!("expected success, got {other:?}"),
        }
    }

    #[test]
    fn open_missing_file_reports_error() {
        let dir = tempfile::tempdir().unwrap();
        let res = open_file(&dir.path().join("nope.txt"));
        assert!(matches!(res, OpenFileResult::Error));
    }

    #[test]
    fn write_file_terminates_every_line() {
        let mut state = EditorState::new(Document::from_lines(["a", "b"]));
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.txt");
        state.file_name = Some(path.clone());
        state.dirty = true;
        let res = write_file(&mut state);
        assert_eq!(res, WriteFileResult::Success { lines: 2, bytes: 4 });
        assert!(!state.dirty, "dirty cleared after write");
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "a\nb\n");
    }

    #[test]
    fn write_file_no_filename() {
        let mut state = EditorState::new(Document::from_lines(["x"]));
        state.dirty = true;
        let res = write_file(&mut state);
        assert_eq!(res, WriteFileResult::NoFilename);
        assert!(state.dirty, "dirty unchanged when no filename");
    }

    #[test]
    fn write_into_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let mut state = EditorState::new(Document::from_lines(["x"]));
        state.dirty = true;
        state.file_name = Some(dir.path().join("missing").join("out.txt"));
        assert_eq!(write_file(&mut state), WriteFileResult::Error);
        assert!(state.dirty);
    }

    #[test]
    fn round_trip_preserves_lines() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("rt.txt");
        std::fs::write(&path, "alpha\n\n  gamma\n").unwrap();
        let OpenFileResult::Success(s) = open_file(&path) else {
            panic!("open failed");
        };
        let mut state = EditorState::new(s.document).with_file_name(&path);
        assert!(matches!(
            write_file(&mut state),
            WriteFileResult::Success { .. }
        ));
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "alpha\n\n  gamma\n");
    }
}
