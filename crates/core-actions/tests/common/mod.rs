#![allow(dead_code)] // Shared across the integration test binaries; each uses a subset.

use core_actions::{dispatch, Action, DispatchResult};
use core_window::{State, Window};

/// Standard 10x16 window over `data`, as a key-binding layer would
/// construct it.
pub fn window(data: &[u8]) -> Window {
    Window::new(data, "test", 10, 16).unwrap()
}

pub fn window_sized(data: &[u8], height: usize, width: usize) -> Window {
    Window::new(data, "test", height, width).unwrap()
}

/// Dispatch an operation by its command name, the way the embedding
/// dispatcher drives the core.
pub fn run(window: &mut Window, name: &str, count: u64) -> DispatchResult {
    let action =
        Action::parse(name, count).unwrap_or_else(|| panic!("unknown operation {name:?}"));
    dispatch(action, window)
}

/// Assert on cursor and offset in one go.
pub fn assert_position(state: &State, cursor: usize, offset: usize) {
    assert_eq!(state.cursor, cursor, "cursor");
    assert_eq!(state.offset, offset, "offset");
}

/// The repeated sample used by most scenarios: `"Hello, world!"`
/// tiled to `n` copies.
pub fn hello(n: usize) -> Vec<u8> {
    b"Hello, world!".repeat(n)
}
