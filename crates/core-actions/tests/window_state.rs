//! Snapshot projection of a freshly constructed window.

mod common;

use common::{hello, window};
use core_window::Mode;

#[test]
fn initial_state_of_loaded_window() {
    let w = window(&hello(1));
    let s = w.state();
    assert_eq!(s.name, "test");
    assert_eq!(s.width, 16);
    assert_eq!(s.offset, 0);
    assert_eq!(s.cursor, 0);
    assert_eq!(s.size, 13);
    assert_eq!(s.length, 13);
    assert_eq!(s.mode, Mode::Normal);
    assert!(!s.pending);
    assert_eq!(s.pending_byte, 0);
    assert_eq!(s.edited_indices, Vec::<usize>::new());

    let mut expected = b"Hello, world!".to_vec();
    expected.resize(160, 0);
    assert_eq!(s.bytes, expected);
}

#[test]
fn initial_state_of_empty_window() {
    let w = window(b"");
    let s = w.state();
    assert_eq!(s.name, "test");
    assert_eq!(s.width, 16);
    assert_eq!(s.offset, 0);
    assert_eq!(s.cursor, 0);
    assert_eq!(s.size, 0);
    assert_eq!(s.length, 0);
    assert_eq!(s.mode, Mode::Normal);
    assert!(!s.pending);
    assert_eq!(s.pending_byte, 0);
    assert_eq!(s.edited_indices, Vec::<usize>::new());
    assert_eq!(s.bytes, vec![0u8; 160]);
}

#[test]
fn snapshot_is_independent_of_later_edits() {
    let mut w = window(&hello(1));
    let before = w.state();
    w.increment(1);
    assert_eq!(before.bytes[0], b'H', "snapshot taken earlier is unaffected");
    assert_eq!(w.state().bytes[0], b'I');
}
