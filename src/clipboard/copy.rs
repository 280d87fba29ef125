//! Copy action with transient "copied" feedback
//!
//! A successful copy puts the action in the copied state until a deadline.
//! Copying again moves the deadline instead of stacking a second one, and
//! `teardown` drops any pending revert.

use std::time::{Duration, Instant};

use tracing::warn;

use super::ClipboardWriter;
use crate::error::NotaResult;

/// How long the copied state lasts by default
pub const COPY_FEEDBACK: Duration = Duration::from_millis(1000);

/// What a copy attempt did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyOutcome {
    /// Text was empty; nothing was written
    Skipped,
    /// Text was written to the clipboard
    Copied,
}

/// State of one copy button
#[derive(Debug, Clone)]
pub struct CopyAction {
    feedback: Duration,
    copied_until: Option<Instant>,
}

impl Default for CopyAction {
    fn default() -> Self {
        Self::new(COPY_FEEDBACK)
    }
}

impl CopyAction {
    pub fn new(feedback: Duration) -> Self {
        Self {
            feedback,
            copied_until: None,
        }
    }

    /// The action is disabled for empty text
    pub fn is_enabled(text: &str) -> bool {
        !text.is_empty()
    }

    /// Copy `text` now
    pub fn copy<C: ClipboardWriter>(
        &mut self,
        clipboard: &mut C,
        text: &str,
    ) -> NotaResult<CopyOutcome> {
        self.copy_at(clipboard, text, Instant::now())
    }

    /// Copy `text`, treating `now` as the current time
    pub fn copy_at<C: ClipboardWriter>(
        &mut self,
        clipboard: &mut C,
        text: &str,
        now: Instant,
    ) -> NotaResult<CopyOutcome> {
        if !Self::is_enabled(text) {
            return Ok(CopyOutcome::Skipped);
        }

        if let Err(e) = clipboard.write_text(text) {
            warn!(error = %e, "copy failed");
            self.copied_until = None;
            return Err(e);
        }

        self.copied_until = Some(now + self.feedback);
        Ok(CopyOutcome::Copied)
    }

    /// Whether the copied state is showing at `now`
    pub fn is_copied_at(&self, now: Instant) -> bool {
        self.copied_until.is_some_and(|until| now < until)
    }

    /// Whether the copied state is showing right now
    pub fn is_copied(&self) -> bool {
        self.is_copied_at(Instant::now())
    }

    /// Time left before the state reverts, `None` when not copied
    pub fn remaining_at(&self, now: Instant) -> Option<Duration> {
        self.copied_until
            .filter(|until| now < *until)
            .map(|until| until - now)
    }

    /// Clear an expired copied state
    pub fn tick(&mut self, now: Instant) {
        if !self.is_copied_at(now) {
            self.copied_until = None;
        }
    }

    /// Cancel any pending revert and leave the copied state
    pub fn teardown(&mut self) {
        self.copied_until = None;
    }

    /// Button label for the state at `now`
    pub fn label_at(&self, now: Instant) -> &'static str {
        if self.is_copied_at(now) {
            "Copiado"
        } else {
            "Copiar"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clipboard::MemoryClipboard;

    #[test]
    fn test_empty_text_is_noop() {
        let mut action = CopyAction::default();
        let mut clipboard = MemoryClipboard::new();
        let now = Instant::now();

        let outcome = action.copy_at(&mut clipboard, "", now).unwrap();

        assert_eq!(outcome, CopyOutcome::Skipped);
        assert!(!action.is_copied_at(now));
        assert_eq!(clipboard.write_count(), 0);
        assert!(!CopyAction::is_enabled(""));
    }

    #[test]
    fn test_copied_state_reverts_after_window() {
        let mut action = CopyAction::default();
        let mut clipboard = MemoryClipboard::new();
        let start = Instant::now();

        action.copy_at(&mut clipboard, "Recibo Julho/2024", start).unwrap();

        assert_eq!(clipboard.contents(), Some("Recibo Julho/2024"));
        assert!(action.is_copied_at(start + Duration::from_millis(999)));
        assert_eq!(action.label_at(start), "Copiado");
        assert!(!action.is_copied_at(start + COPY_FEEDBACK));
        assert_eq!(action.label_at(start + COPY_FEEDBACK), "Copiar");
    }

    #[test]
    fn test_repeat_copy_resets_window() {
        let mut action = CopyAction::default();
        let mut clipboard = MemoryClipboard::new();
        let start = Instant::now();

        action.copy_at(&mut clipboard, "a", start).unwrap();
        let second = start + Duration::from_millis(800);
        action.copy_at(&mut clipboard, "b", second).unwrap();

        assert!(action.is_copied_at(start + Duration::from_millis(1500)));
        assert_eq!(
            action.remaining_at(start + Duration::from_millis(1500)),
            Some(Duration::from_millis(300))
        );
        assert!(!action.is_copied_at(second + COPY_FEEDBACK));
        assert_eq!(clipboard.write_count(), 2);
    }

    #[test]
    fn test_teardown_cancels_pending_revert() {
        let mut action = CopyAction::default();
        let mut clipboard = MemoryClipboard::new();
        let now = Instant::now();

        action.copy_at(&mut clipboard, "texto", now).unwrap();
        action.teardown();

        assert!(!action.is_copied_at(now));
        assert_eq!(action.remaining_at(now), None);
    }

    #[test]
    fn test_failed_write_is_reported() {
        let mut action = CopyAction::default();
        let mut clipboard = MemoryClipboard::failing();
        let now = Instant::now();

        let result = action.copy_at(&mut clipboard, "texto", now);

        assert!(result.is_err());
        assert!(!action.is_copied_at(now));
    }

    #[test]
    fn test_tick_clears_expired_state() {
        let mut action = CopyAction::new(Duration::from_millis(10));
        let mut clipboard = MemoryClipboard::new();
        let now = Instant::now();

        action.copy_at(&mut clipboard, "x", now).unwrap();
        action.tick(now + Duration::from_millis(5));
        assert!(action.is_copied_at(now + Duration::from_millis(5)));

        action.tick(now + Duration::from_millis(10));
        assert_eq!(action.remaining_at(now), None);
    }
}
