//! Cursor motion and viewport scroll algebra.
//!
//! Two distinct families that must not be conflated:
//!
//! * **Motions** move the cursor inside the byte grid, then slide the
//!   viewport minimally so the cursor stays visible.
//! * **Scroll / page operations** move the viewport, touching the
//!   cursor only when it would otherwise leave the visible rectangle,
//!   and then only by whole rows with its column preserved.
//!
//! Vertical motions work in row units: a cursor in column `c` lands in
//! column `c` of the target row unless clamped onto a short final row.
//! All counts saturate; a count of `0` means `1`.

use crate::Window;

impl Window {
    /// Move up `count` rows, stopping at the top row.
    pub fn cursor_up(&mut self, count: u64) {
        let step = Self::norm(count).saturating_mul(self.width);
        self.cursor -= step.min(self.row() * self.width);
        self.scroll_to_cursor();
    }

    /// Move down `count` rows, stopping at the final row; a landing
    /// spot past the final byte clamps onto it.
    pub fn cursor_down(&mut self, count: u64) {
        let step = Self::norm(count).saturating_mul(self.width);
        let rows_below = self.last_row().saturating_sub(self.row()) * self.width;
        self.cursor += step.min(rows_below);
        self.cursor = self.cursor.min(self.last_byte());
        self.scroll_to_cursor();
    }

    /// Move left `count` cells within the current row.
    pub fn cursor_left(&mut self, count: u64) {
        self.cursor -= Self::norm(count).min(self.col());
        self.scroll_to_cursor();
    }

    /// Move right `count` cells within the current row, clamped to the
    /// row end and to the final byte.
    pub fn cursor_right(&mut self, count: u64) {
        let row_end = self.row() * self.width + self.width - 1;
        self.cursor = self
            .cursor
            .saturating_add(Self::norm(count))
            .min(row_end)
            .min(self.last_byte());
        self.scroll_to_cursor();
    }

    /// Move back `count` bytes, crossing row boundaries.
    pub fn cursor_prev(&mut self, count: u64) {
        self.cursor = self.cursor.saturating_sub(Self::norm(count));
        self.scroll_to_cursor();
    }

    /// Move forward `count` bytes, crossing row boundaries.
    pub fn cursor_next(&mut self, count: u64) {
        self.cursor = self
            .cursor
            .saturating_add(Self::norm(count))
            .min(self.last_byte());
        self.scroll_to_cursor();
    }

    /// Go to the start of the current row, or with a count to the start
    /// of the row `count - 1` rows down.
    pub fn cursor_head(&mut self, count: u64) {
        let target_row = self.row().saturating_add(Self::norm(count) - 1);
        self.cursor = target_row
            .saturating_mul(self.width)
            .min(self.last_byte());
        self.scroll_to_cursor();
    }

    /// Go to the end of the current row, or with a count to the end of
    /// the row `count - 1` rows down, clamped to the final byte.
    pub fn cursor_end(&mut self, count: u64) {
        let target_row = self.row().saturating_add(Self::norm(count));
        self.cursor = target_row
            .saturating_mul(self.width)
            .saturating_sub(1)
            .min(self.last_byte());
        self.scroll_to_cursor();
    }

    // ---- viewport scrolling ------------------------------------------

    /// Scroll the view up `count` rows; the cursor is dragged up onto
    /// the last visible row if it fell off the bottom.
    pub fn scroll_up(&mut self, count: u64) {
        let step = Self::norm(count).saturating_mul(self.width);
        self.offset = self.offset.saturating_sub(step);
        if self.cursor >= self.offset.saturating_add(self.window_cells()) {
            self.cursor = self.bottom_row_cell().min(self.last_byte());
        }
    }

    /// Scroll the view down `count` rows. The offset is not clamped
    /// against the buffer length, so the view may run past the data
    /// and render as zero padding; the cursor is dragged down onto the
    /// first visible row when it fell off the top, but never past the
    /// final byte.
    pub fn scroll_down(&mut self, count: u64) {
        let step = Self::norm(count).saturating_mul(self.width);
        self.offset = self.offset.saturating_add(step);
        // Saturation can land off the row grid; realign downward.
        self.offset -= self.offset % self.width;
        if self.cursor < self.offset {
            self.cursor = self
                .offset
                .saturating_add(self.col())
                .min(self.last_byte());
        }
    }

    /// Scroll back a whole page.
    pub fn page_up(&mut self) {
        self.page_back(self.height);
    }

    /// Scroll back half a page.
    pub fn page_up_half(&mut self) {
        self.page_back(self.height / 2);
    }

    /// Scroll forward a whole page.
    pub fn page_down(&mut self) {
        self.page_forward(self.height);
    }

    /// Scroll forward half a page.
    pub fn page_down_half(&mut self) {
        self.page_forward(self.height / 2);
    }

    /// Jump to the very top of the buffer.
    pub fn page_top(&mut self) {
        self.offset = 0;
        self.cursor = 0;
    }

    /// Scroll so the final buffer row sits on the last visible row and
    /// put the cursor at the start of that row.
    pub fn page_end(&mut self) {
        self.offset = self.max_offset();
        self.cursor = if self.buffer.is_empty() {
            0
        } else {
            self.last_byte() - self.last_byte() % self.width
        };
    }

    fn page_back(&mut self, rows: usize) {
        self.offset = self.offset.saturating_sub(rows * self.width);
        if self.cursor >= self.offset.saturating_add(self.window_cells()) {
            // At the very top the cursor snaps into row zero rather
            // than trailing on the last visible row.
            self.cursor = if self.offset == 0 {
                self.col().min(self.last_byte())
            } else {
                self.bottom_row_cell().min(self.last_byte())
            };
        }
    }

    fn page_forward(&mut self, rows: usize) {
        self.offset = self
            .offset
            .saturating_add(rows * self.width)
            .min(self.max_offset());
        if self.cursor < self.offset {
            self.cursor = (self.offset + self.col()).min(self.last_byte());
        }
    }

    /// The cursor's column carried onto the last visible row.
    fn bottom_row_cell(&self) -> usize {
        self.offset
            .saturating_add((self.height - 1) * self.width)
            .saturating_add(self.col())
    }
}
