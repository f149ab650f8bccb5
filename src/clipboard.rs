// src/clipboard.rs
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;

use clipboard::{ClipboardContext, ClipboardProvider};
use console::{style, Term};
use thiserror::Error;

/// How long the copy confirmation banner stays visible.
pub const CONFIRMATION_MILLIS: u64 = 1500;

#[derive(Debug, Error)]
pub enum ClipboardError {
    #[error("clipboard unavailable: {0}")]
    Unavailable(String),

    #[error("clipboard write failed: {0}")]
    WriteFailed(String),
}

fn write_to_clipboard(text: &str) -> Result<(), ClipboardError> {
    let mut ctx: ClipboardContext = ClipboardProvider::new()
        .map_err(|e| ClipboardError::Unavailable(e.to_string()))?;

    ctx.set_contents(text.to_string())
        .map_err(|e| ClipboardError::WriteFailed(e.to_string()))
}

/// Copies passwords to the system clipboard and flashes a confirmation
/// banner that is hidden again after [`CONFIRMATION_MILLIS`].
pub struct CopyNotifier {
    term: Term,
    banner_visible: Arc<AtomicBool>,
}

impl CopyNotifier {
    pub fn new() -> Self {
        Self {
            term: Term::stdout(),
            banner_visible: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Copy `password` to the clipboard and show the confirmation banner.
    ///
    /// A no-op when no password has been generated yet: the clipboard is
    /// untouched and no banner is shown. Clipboard failures are logged, not
    /// surfaced. Returns the hide timer's handle when the banner was shown;
    /// dropping it leaves the timer running detached.
    pub fn copy(&self, password: &str) -> Option<JoinHandle<()>> {
        if password.is_empty() {
            log::debug!("Copy requested with no password generated, ignoring");
            return None;
        }

        if let Err(e) = write_to_clipboard(password) {
            log::warn!("{}", e);
            return None;
        }

        Some(self.show_confirmation())
    }

    // Each trigger schedules its own hide timer. Timers are independent; the
    // visibility flag keeps an early timer from clearing lines twice.
    fn show_confirmation(&self) -> JoinHandle<()> {
        let banner = format!("{}", style("Password copied to clipboard!").green());
        if self.term.write_line(&banner).is_err() {
            log::warn!("Failed to draw the copy confirmation banner");
        }
        self.banner_visible.store(true, Ordering::SeqCst);

        let term = self.term.clone();
        let visible = Arc::clone(&self.banner_visible);
        thread::spawn(move || {
            thread::sleep(Duration::from_millis(CONFIRMATION_MILLIS));
            if visible.swap(false, Ordering::SeqCst) {
                let _ = term.clear_last_lines(1);
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn copy_is_a_noop_for_empty_password() {
        let notifier = CopyNotifier::new();
        assert!(notifier.copy("").is_none());
        assert!(!notifier.banner_visible.load(Ordering::SeqCst));
    }

    #[test]
    fn confirmation_window_is_fixed() {
        assert_eq!(CONFIRMATION_MILLIS, 1500);
    }
}
