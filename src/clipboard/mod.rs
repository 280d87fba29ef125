//! Clipboard access and the copy-with-feedback action
//!
//! `ClipboardWriter` is the seam between the copy action and the system
//! clipboard, so the action can be exercised without a display server.

pub mod copy;

pub use copy::{CopyAction, CopyOutcome, COPY_FEEDBACK};

use tracing::debug;

use crate::error::{NotaError, NotaResult};

/// Something that can receive text
pub trait ClipboardWriter {
    fn write_text(&mut self, text: &str) -> NotaResult<()>;
}

/// The system clipboard, opened on first write
#[derive(Default)]
pub struct SystemClipboard {
    inner: Option<arboard::Clipboard>,
}

impl SystemClipboard {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ClipboardWriter for SystemClipboard {
    fn write_text(&mut self, text: &str) -> NotaResult<()> {
        if self.inner.is_none() {
            let clipboard = arboard::Clipboard::new()
                .map_err(|e| NotaError::Clipboard(format!("Failed to open clipboard: {}", e)))?;
            self.inner = Some(clipboard);
        }

        if let Some(clipboard) = self.inner.as_mut() {
            clipboard
                .set_text(text)
                .map_err(|e| NotaError::Clipboard(format!("Failed to write clipboard: {}", e)))?;
        }

        debug!(chars = text.chars().count(), "clipboard written");
        Ok(())
    }
}

/// Clipboard that records writes in memory
#[derive(Debug, Clone, Default)]
pub struct MemoryClipboard {
    writes: Vec<String>,
    fail: bool,
}

impl MemoryClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// A clipboard whose writes always fail
    pub fn failing() -> Self {
        Self {
            writes: Vec::new(),
            fail: true,
        }
    }

    /// Last text written, if any
    pub fn contents(&self) -> Option<&str> {
        self.writes.last().map(String::as_str)
    }

    /// Number of successful writes
    pub fn write_count(&self) -> usize {
        self.writes.len()
    }
}

impl ClipboardWriter for MemoryClipboard {
    fn write_text(&mut self, text: &str) -> NotaResult<()> {
        if self.fail {
            return Err(NotaError::Clipboard("clipboard unavailable".into()));
        }
        self.writes.push(text.to_string());
        Ok(())
    }
}
