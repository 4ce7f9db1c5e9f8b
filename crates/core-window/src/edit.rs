//! Normal-mode byte editing: deletion and in-place arithmetic.
//!
//! Deletions re-home the edited set (indices inside the removed range
//! are dropped, later ones shift down) and clamp the cursor back onto
//! a real byte. Increment/decrement wrap modulo 256 and bootstrap a
//! single byte when the buffer is empty, so they are total for any
//! count up to `u64::MAX`.

use crate::Window;

impl Window {
    /// Delete `count` bytes starting at the cursor; fewer if the
    /// buffer runs out first.
    pub fn delete_byte(&mut self, count: u64) {
        let removed = self.buffer.remove_range(self.cursor, Self::norm(count));
        if removed == 0 {
            self.scroll_to_cursor();
            return;
        }
        self.edited.shift_for_delete(self.cursor, removed);
        self.cursor = self.cursor.min(self.last_byte());
        tracing::trace!(
            target: "window.edit",
            op = "delete_byte",
            removed,
            cursor = self.cursor,
            length = self.buffer.len(),
        );
        self.scroll_to_cursor();
    }

    /// Delete up to `count` bytes strictly before the cursor; the
    /// cursor retreats by the number actually removed.
    pub fn delete_prev_byte(&mut self, count: u64) {
        let n = Self::norm(count).min(self.cursor);
        if n == 0 {
            self.scroll_to_cursor();
            return;
        }
        let start = self.cursor - n;
        let removed = self.buffer.remove_range(start, n);
        debug_assert_eq!(removed, n, "range before cursor is in bounds");
        self.edited.shift_for_delete(start, removed);
        self.cursor = start;
        tracing::trace!(
            target: "window.edit",
            op = "delete_prev_byte",
            removed,
            cursor = self.cursor,
            length = self.buffer.len(),
        );
        self.scroll_to_cursor();
    }

    /// Add `count` (mod 256) to the byte under the cursor. On an empty
    /// buffer, bootstrap a single byte holding `count mod 256`.
    pub fn increment(&mut self, count: u64) {
        self.adjust_byte((count.max(1) % 256) as u8);
    }

    /// Subtract `count` (mod 256) from the byte under the cursor. On
    /// an empty buffer, bootstrap a single byte holding `-count mod 256`.
    pub fn decrement(&mut self, count: u64) {
        self.adjust_byte(0u8.wrapping_sub((count.max(1) % 256) as u8));
    }

    fn adjust_byte(&mut self, delta: u8) {
        if self.buffer.is_empty() {
            self.buffer.push(delta);
            self.edited.record(0);
            self.cursor = 0;
        } else if let Some(byte) = self.buffer.get(self.cursor) {
            self.buffer.set(self.cursor, byte.wrapping_add(delta));
            self.edited.record(self.cursor);
        }
        tracing::trace!(
            target: "window.edit",
            op = "adjust_byte",
            delta,
            cursor = self.cursor,
        );
        self.scroll_to_cursor();
    }
}
