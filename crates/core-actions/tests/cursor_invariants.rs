//! Property tests: no key sequence can move the cursor outside the document
//! or leave it without lines.

mod common;
use common::*;

use core_config::VerticalClamp;
use core_events::KeyCode;
use core_state::{EditorState, Mode};
use core_text::Document;
use proptest::prelude::*;

fn key_code() -> impl Strategy<Value = KeyCode> {
    prop_oneof![
        4 => prop::sample::select(vec!['a', 'b', ' ', ':', 'w', 'q', '!']).prop_map(KeyCode::Char),
        2 => Just(KeyCode::Enter),
        2 => Just(KeyCode::Backspace),
        1 => Just(KeyCode::Tab),
        1 => Just(KeyCode::Esc),
        2 => Just(KeyCode::Up),
        2 => Just(KeyCode::Down),
        2 => Just(KeyCode::Left),
        2 => Just(KeyCode::Right),
    ]
}

fn start_lines() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("[a-c ]{0,6}", 0..4)
}

proptest! {
    #[test]
    fn eager_cursor_stays_in_bounds(
        lines in start_lines(),
        keys in prop::collection::vec(key_code(), 0..80),
    ) {
        let dir = tempfile::tempdir().unwrap();
        let cfg = config_in(dir.path());
        let mut st = EditorState::new(Document::from_lines(lines))
            .with_vertical_clamp(VerticalClamp::Eager);
        assert_invariants(&st);
        for code in keys {
            let res = press(&mut st, &cfg, code);
            assert_invariants(&st);
            if res.quit {
                break;
            }
        }
    }

    #[test]
    fn lazy_cursor_row_stays_in_bounds(
        lines in start_lines(),
        keys in prop::collection::vec(key_code(), 0..80),
    ) {
        let dir = tempfile::tempdir().unwrap();
        let cfg = config_in(dir.path());
        let mut st = EditorState::new(Document::from_lines(lines))
            .with_vertical_clamp(VerticalClamp::Lazy);
        for code in keys {
            let res = press(&mut st, &cfg, code);
            prop_assert!(st.document.line_count() >= 1);
            prop_assert!(st.cursor.row < st.document.line_count());
            prop_assert!(st.cursor.clamped(&st.document).is_within(&st.document));
            if res.quit {
                break;
            }
        }
    }

    #[test]
    fn command_mode_never_mutates_document(
        lines in start_lines(),
        typed in "[a-z:! ]{0,12}",
    ) {
        let cfg = config_in(tempfile::tempdir().unwrap().path());
        let mut st = EditorState::new(Document::from_lines(lines));
        let before = st.document.clone();
        let cursor = st.cursor;
        press(&mut st, &cfg, KeyCode::Esc);
        type_str(&mut st, &cfg, &typed);
        for code in [KeyCode::Backspace, KeyCode::Tab, KeyCode::Up, KeyCode::Right] {
            press(&mut st, &cfg, code);
        }
        prop_assert_eq!(st.mode, Mode::Command);
        prop_assert_eq!(st.command_line.buffer(), typed.as_str());
        prop_assert_eq!(&st.document, &before);
        prop_assert_eq!(st.cursor, cursor);
    }
}
