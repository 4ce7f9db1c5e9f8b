//! Window: the editable byte view at the heart of the hex editor.
//!
//! A `Window` couples a mutable [`core_buffer::Buffer`] with a fixed
//! `height x width` viewport, an absolute byte cursor, and a modal
//! editing state machine (Normal / Insert / Replace with two-keystroke
//! hex entry). External collaborators drive it by invoking named
//! operations and render from the flat [`State`] snapshot it projects
//! on demand; the window itself never touches a terminal.
//!
//! Core invariants (must hold after every public call):
//! * `offset` is row-aligned (`offset % width == 0`) and non-negative.
//! * Normal mode keeps the cursor on a real byte: `cursor <= len - 1`
//!   when the buffer is non-empty, `cursor == 0` when it is empty.
//!   Insert and Replace additionally permit the one-past-end append
//!   position `cursor == len`.
//! * After any operation other than the scroll/page family the cursor
//!   is visible: `offset <= cursor < offset + height * width`. Scroll
//!   operations move the viewport first and drag the cursor by whole
//!   rows only as needed, preserving its column.
//! * A pending high nibble exists only in Insert or Replace mode.
//! * Every edited index lies inside the current buffer.
//!
//! Operations never fail: out-of-range counts saturate and cursors
//! clamp. Only construction can error (source read failure or
//! degenerate dimensions).

use std::io::Read;

use core_buffer::{Buffer, EditedIndices};
use thiserror::Error;

mod edit;
mod insert;
mod motion;

/// Construction failure. Operations after a successful construction
/// cannot fail.
#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to read byte source")]
    Io(#[from] std::io::Error),
    #[error("window dimensions must be at least 1x1, got {height}x{width}")]
    InvalidDimensions { height: usize, width: usize },
}

/// Editing mode. Insert and Replace share the two-nibble entry
/// protocol and differ only in how a completed byte is committed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Normal,
    Insert,
    Replace,
}

/// Flat snapshot of everything a renderer needs. Produced by copy;
/// independent of the window once returned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct State {
    pub name: String,
    pub width: usize,
    pub offset: usize,
    pub cursor: usize,
    /// Exactly `height * width` bytes starting at `offset`, zero-padded
    /// past the end of the buffer.
    pub bytes: Vec<u8>,
    pub size: usize,
    pub length: usize,
    pub mode: Mode,
    pub pending: bool,
    pub pending_byte: u8,
    pub edited_indices: Vec<usize>,
}

/// A modal window over an editable byte sequence.
#[derive(Debug)]
pub struct Window {
    buffer: Buffer,
    name: String,
    height: usize,
    width: usize,
    offset: usize,
    cursor: usize,
    mode: Mode,
    pending: Option<u8>,
    edited: EditedIndices,
}

impl Window {
    /// Create a window by draining `reader` to EOF.
    ///
    /// The cursor and viewport start at the top of the buffer in
    /// Normal mode with an empty edited set.
    pub fn new<R: Read>(
        reader: R,
        name: impl Into<String>,
        height: usize,
        width: usize,
    ) -> Result<Self, Error> {
        if height < 1 || width < 1 {
            return Err(Error::InvalidDimensions { height, width });
        }
        let buffer = Buffer::from_reader(reader)?;
        Ok(Self {
            buffer,
            name: name.into(),
            height,
            width,
            offset: 0,
            cursor: 0,
            mode: Mode::Normal,
            pending: None,
            edited: EditedIndices::new(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn width(&self) -> usize {
        self.width
    }

    /// Current buffer length.
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// The accumulated high nibble, if a hex keystroke is half-entered.
    pub fn pending(&self) -> Option<u8> {
        self.pending
    }

    /// Project the current view into a [`State`] snapshot.
    pub fn state(&self) -> State {
        debug_assert!(self.offset % self.width == 0, "offset row-aligned");
        debug_assert!(
            self.mode != Mode::Normal || self.pending.is_none(),
            "no pending nibble outside Insert/Replace"
        );
        let mut bytes = vec![0u8; self.height * self.width];
        self.buffer.copy_into(self.offset, &mut bytes);
        State {
            name: self.name.clone(),
            width: self.width,
            offset: self.offset,
            cursor: self.cursor,
            bytes,
            size: self.buffer.len(),
            length: self.buffer.len(),
            mode: self.mode,
            pending: self.pending.is_some(),
            pending_byte: self.pending.unwrap_or(0),
            edited_indices: self.edited.to_vec(),
        }
    }

    // ---- shared geometry helpers -------------------------------------

    /// Normalize a repeat count: dispatchers pass raw user counts where
    /// absence means "once", so `0` is treated as `1`.
    pub(crate) fn norm(count: u64) -> usize {
        usize::try_from(count.max(1)).unwrap_or(usize::MAX)
    }

    /// Index of the final byte (`0` for an empty buffer).
    pub(crate) fn last_byte(&self) -> usize {
        self.buffer.len().saturating_sub(1)
    }

    pub(crate) fn col(&self) -> usize {
        self.cursor % self.width
    }

    pub(crate) fn row(&self) -> usize {
        self.cursor / self.width
    }

    /// Row index of the final byte.
    pub(crate) fn last_row(&self) -> usize {
        self.last_byte() / self.width
    }

    /// Number of cells in the viewport.
    pub(crate) fn window_cells(&self) -> usize {
        self.height * self.width
    }

    /// Largest useful row-aligned offset: places the final buffer row
    /// on the last visible row.
    pub(crate) fn max_offset(&self) -> usize {
        let rows = self.buffer.len().div_ceil(self.width);
        rows.saturating_sub(self.height) * self.width
    }

    /// Slide the viewport minimally so the cursor is visible. Runs
    /// after every cursor motion and editing operation; scroll/page
    /// operations manage the cursor themselves instead.
    pub(crate) fn scroll_to_cursor(&mut self) {
        if self.cursor < self.offset {
            self.offset = self.cursor - self.col();
        } else if self.cursor >= self.offset + self.window_cells() {
            self.offset = (self.cursor - self.col()) - (self.height - 1) * self.width;
        }
        debug_assert!(self.offset % self.width == 0, "offset row-aligned");
    }

    #[cfg(test)]
    pub(crate) fn buffer_bytes(&self) -> &[u8] {
        self.buffer.as_slice()
    }
}
