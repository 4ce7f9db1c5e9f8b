//! Dispatcher applying an [`Action`] to a [`Window`].
//!
//! Routing is a plain synchronous match: every window operation runs
//! to completion before the dispatcher returns, so a snapshot taken
//! after a sequence of dispatches observes exactly the composed
//! effect. Mode gating for byte edits lives here (Normal mode only);
//! modal entry/exit and the nibble protocol gate themselves inside
//! the window.

use crate::{Action, EditKind, ModeChange, MotionKind, ScrollKind};
use core_window::{Mode, Window};

/// Result of dispatching a single [`Action`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DispatchResult {
    /// Observable state changed; the caller should re-render.
    pub dirty: bool,
}

impl DispatchResult {
    pub fn dirty() -> Self {
        Self { dirty: true }
    }
    pub fn clean() -> Self {
        Self { dirty: false }
    }
}

/// Cheap digest of everything a renderer can observe. Byte content is
/// covered by the byte under the cursor plus the edited-set size:
/// every mutating operation either moves the cursor, changes the
/// length, changes the byte it sits on, or touches the pending cell.
fn fingerprint(window: &Window) -> (usize, usize, usize, Mode, Option<u8>, usize, Option<u8>) {
    let state = window.state();
    (
        window.cursor(),
        window.offset(),
        window.len(),
        window.mode(),
        window.pending(),
        state.edited_indices.len(),
        state.bytes.get(window.cursor().wrapping_sub(window.offset())).copied(),
    )
}

/// Apply one action. Returns whether observable state changed.
pub fn dispatch(action: Action, window: &mut Window) -> DispatchResult {
    let before = fingerprint(window);

    match action {
        Action::Motion { kind, count } => match kind {
            MotionKind::Up => window.cursor_up(count),
            MotionKind::Down => window.cursor_down(count),
            MotionKind::Left => window.cursor_left(count),
            MotionKind::Right => window.cursor_right(count),
            MotionKind::Prev => window.cursor_prev(count),
            MotionKind::Next => window.cursor_next(count),
            MotionKind::Head => window.cursor_head(count),
            MotionKind::End => window.cursor_end(count),
        },
        Action::Scroll { kind, count } => match kind {
            ScrollKind::Up => window.scroll_up(count),
            ScrollKind::Down => window.scroll_down(count),
            ScrollKind::PageUp => window.page_up(),
            ScrollKind::PageDown => window.page_down(),
            ScrollKind::PageUpHalf => window.page_up_half(),
            ScrollKind::PageDownHalf => window.page_down_half(),
            ScrollKind::PageTop => window.page_top(),
            ScrollKind::PageEnd => window.page_end(),
        },
        Action::Edit { kind, count } => {
            // Byte edits are Normal-mode commands; in Insert/Replace
            // the same keystrokes mean something else entirely.
            if window.mode() != Mode::Normal {
                return DispatchResult::clean();
            }
            match kind {
                EditKind::DeleteByte => window.delete_byte(count),
                EditKind::DeletePrevByte => window.delete_prev_byte(count),
                EditKind::Increment => window.increment(count),
                EditKind::Decrement => window.decrement(count),
            }
        }
        Action::Mode(change) => match change {
            ModeChange::EnterInsert => window.start_insert(),
            ModeChange::EnterInsertHead => window.start_insert_head(),
            ModeChange::EnterAppend => window.start_append(),
            ModeChange::EnterReplace => window.start_replace(),
            ModeChange::Leave => window.exit_insert(),
        },
        Action::Nibble(value) => window.insert_nibble(value),
    }

    let after = fingerprint(window);
    if before != after {
        tracing::trace!(
            target: "actions.dispatch",
            action = ?action,
            cursor = window.cursor(),
            offset = window.offset(),
            length = window.len(),
            "dispatch"
        );
        DispatchResult::dirty()
    } else {
        DispatchResult::clean()
    }
}
