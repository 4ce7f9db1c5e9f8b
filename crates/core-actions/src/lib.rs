//! Action surface over the window core.
//!
//! Commands arrive from a key-binding layer as operation names plus an
//! optional repeat count. This crate turns them into data
//! ([`Action`]) and routes them into [`core_window::Window`] methods
//! through a synchronous [`dispatch`] call, reporting whether anything
//! observable changed so the caller can decide to re-render.

mod dispatcher;

pub use dispatcher::{dispatch, DispatchResult};

/// Cursor motions: move the cursor, then keep it visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MotionKind {
    Up,
    Down,
    Left,
    Right,
    Prev,
    Next,
    Head,
    End,
}

/// Viewport motions: move the view, dragging the cursor only as far as
/// needed to keep it on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollKind {
    Up,
    Down,
    PageUp,
    PageDown,
    PageUpHalf,
    PageDownHalf,
    PageTop,
    PageEnd,
}

/// Normal-mode byte edits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditKind {
    DeleteByte,
    DeletePrevByte,
    Increment,
    Decrement,
}

/// Modal transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModeChange {
    EnterInsert,
    EnterInsertHead,
    EnterAppend,
    EnterReplace,
    Leave,
}

/// One dispatchable operation. Counts are raw repeat counts from user
/// input; `0` means "no count given" and is normalized to `1` by the
/// window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Motion { kind: MotionKind, count: u64 },
    Scroll { kind: ScrollKind, count: u64 },
    Edit { kind: EditKind, count: u64 },
    Mode(ModeChange),
    /// One hex keystroke carrying a 4-bit value.
    Nibble(u8),
}

impl Action {
    /// Classify an operation name into an [`Action`]. Pure and
    /// side-effect free; unknown names yield `None`. The sixteen hex
    /// keystrokes are spelled `insert0`..`insert9` and
    /// `insertA`..`insertF`.
    pub fn parse(name: &str, count: u64) -> Option<Action> {
        use Action::*;
        let action = match name {
            "cursor_up" => Motion { kind: MotionKind::Up, count },
            "cursor_down" => Motion { kind: MotionKind::Down, count },
            "cursor_left" => Motion { kind: MotionKind::Left, count },
            "cursor_right" => Motion { kind: MotionKind::Right, count },
            "cursor_prev" => Motion { kind: MotionKind::Prev, count },
            "cursor_next" => Motion { kind: MotionKind::Next, count },
            "cursor_head" => Motion { kind: MotionKind::Head, count },
            "cursor_end" => Motion { kind: MotionKind::End, count },
            "scroll_up" => Scroll { kind: ScrollKind::Up, count },
            "scroll_down" => Scroll { kind: ScrollKind::Down, count },
            "page_up" => Scroll { kind: ScrollKind::PageUp, count },
            "page_down" => Scroll { kind: ScrollKind::PageDown, count },
            "page_up_half" => Scroll { kind: ScrollKind::PageUpHalf, count },
            "page_down_half" => Scroll { kind: ScrollKind::PageDownHalf, count },
            "page_top" => Scroll { kind: ScrollKind::PageTop, count },
            "page_end" => Scroll { kind: ScrollKind::PageEnd, count },
            "delete_byte" => Edit { kind: EditKind::DeleteByte, count },
            "delete_prev_byte" => Edit { kind: EditKind::DeletePrevByte, count },
            "increment" => Edit { kind: EditKind::Increment, count },
            "decrement" => Edit { kind: EditKind::Decrement, count },
            "start_insert" => Mode(ModeChange::EnterInsert),
            "start_insert_head" => Mode(ModeChange::EnterInsertHead),
            "start_append" => Mode(ModeChange::EnterAppend),
            "start_replace" => Mode(ModeChange::EnterReplace),
            "exit_insert" => Mode(ModeChange::Leave),
            _ => return parse_nibble(name),
        };
        Some(action)
    }
}

fn parse_nibble(name: &str) -> Option<Action> {
    let digit = name.strip_prefix("insert")?;
    let value = match digit.as_bytes() {
        [b @ b'0'..=b'9'] => b - b'0',
        [b @ b'A'..=b'F'] => b - b'A' + 10,
        _ => return None,
    };
    Some(Action::Nibble(value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_motion_carries_count() {
        assert_eq!(
            Action::parse("cursor_down", 5),
            Some(Action::Motion { kind: MotionKind::Down, count: 5 })
        );
    }

    #[test]
    fn parse_all_nibble_names() {
        for (i, name) in [
            "insert0", "insert1", "insert2", "insert3", "insert4", "insert5", "insert6",
            "insert7", "insert8", "insert9", "insertA", "insertB", "insertC", "insertD",
            "insertE", "insertF",
        ]
        .iter()
        .enumerate()
        {
            assert_eq!(Action::parse(name, 0), Some(Action::Nibble(i as u8)));
        }
    }

    #[test]
    fn parse_mode_names() {
        assert_eq!(
            Action::parse("start_insert_head", 0),
            Some(Action::Mode(ModeChange::EnterInsertHead))
        );
        assert_eq!(
            Action::parse("exit_insert", 0),
            Some(Action::Mode(ModeChange::Leave))
        );
    }

    #[test]
    fn parse_rejects_unknown_names() {
        assert_eq!(Action::parse("insert", 0), None);
        assert_eq!(Action::parse("insertG", 0), None);
        assert_eq!(Action::parse("insertAA", 0), None);
        assert_eq!(Action::parse("inserta", 0), None, "hex letters are uppercase");
        assert_eq!(Action::parse("cursor_sideways", 0), None);
        assert_eq!(Action::parse("", 0), None);
    }
}
