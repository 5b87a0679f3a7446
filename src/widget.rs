use log::{debug, info};
use std::time::{Duration, Instant};

use crate::constants::{DEFAULT_PLACEHOLDER, HINT_PLACEHOLDER, PLACEHOLDER_HINT_DELAY_MS};
use crate::modal::ModalState;
use crate::timers::{TimerKey, TimerQueue};
use crate::transcript::Transcript;

/// The chat panel controller. Owns the transcript, the input buffer, the
/// modal visual state, and the one-shot timers; constructed once at
/// startup and driven by key events plus the tick handler.
pub struct ChatWidget {
    pub transcript: Transcript,
    pub input: String,
    pub placeholder: &'static str,
    pub modal: ModalState,
    /// Lines scrolled up from the bottom of the message area; 0 means
    /// the newest content is visible.
    pub scroll_offset: usize,
    timers: TimerQueue,
}

impl ChatWidget {
    pub fn new(now: Instant) -> Self {
        let mut timers = TimerQueue::new();
        timers.schedule(
            TimerKey::PlaceholderHint,
            Duration::from_millis(PLACEHOLDER_HINT_DELAY_MS),
            now,
        );

        Self {
            transcript: Transcript::canned(),
            input: String::new(),
            placeholder: DEFAULT_PLACEHOLDER,
            modal: ModalState::default(),
            scroll_offset: 0,
            timers,
        }
    }

    /// Sends the current input. Whitespace-only input is a strict no-op:
    /// neither the transcript nor the input field changes. Otherwise the
    /// whole transcript is replaced by a single echo of the trimmed text.
    pub fn submit(&mut self) {
        if self.input.trim().is_empty() {
            return;
        }

        let text = std::mem::take(&mut self.input);
        self.transcript.replace_with_echo(&text);
        self.scroll_to_bottom();
        info!("echoed user input ({} chars)", text.trim().chars().count());
    }

    /// Clears the input and rebuilds the canned trio. No confirmation,
    /// irreversible within the session.
    pub fn reset(&mut self) {
        self.input.clear();
        self.transcript.reset();
        self.scroll_to_bottom();
        info!("transcript reset to canned messages");
    }

    pub fn minimize(&mut self, now: Instant) {
        self.modal.minimize(&mut self.timers, now);
        debug!("minimize pulse");
    }

    pub fn close(&mut self, now: Instant) {
        self.modal.close(&mut self.timers, now);
        debug!("close pulse");
    }

    /// Advances the widget clock and fires due timers.
    pub fn tick(&mut self, now: Instant) {
        for key in self.timers.fire_due(now) {
            match key {
                TimerKey::RestoreMinimize | TimerKey::RestoreClose => self.modal.restore(),
                TimerKey::PlaceholderHint => self.placeholder = HINT_PLACEHOLDER,
            }
        }
    }

    pub fn push_char(&mut self, c: char) {
        self.input.push(c);
    }

    /// Shift+Enter: multi-line intent, never a submit.
    pub fn push_newline(&mut self) {
        self.input.push('\n');
    }

    pub fn backspace(&mut self) {
        self.input.pop();
    }

    pub fn scroll_up(&mut self) {
        // Clamped against the rendered line count at draw time
        self.scroll_offset += 1;
    }

    pub fn scroll_down(&mut self) {
        self.scroll_offset = self.scroll_offset.saturating_sub(1);
    }

    fn scroll_to_bottom(&mut self) {
        self.scroll_offset = 0;
    }
}
