use crate::constants::{CLOSE_RESTORE_MS, MINIMIZE_OPACITY, MINIMIZE_RESTORE_MS, MINIMIZE_SCALE};
use crate::timers::{TimerKey, TimerQueue};
use ratatui::layout::Rect;
use std::time::{Duration, Instant};

/// Visual state of the chat panel. Minimize and close are transient
/// pulses: both schedule a restore that brings the panel back to full
/// scale and opacity, so the panel is never left shrunk or hidden.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ModalState {
    pub scale: f32,
    pub opacity: f32,
}

impl Default for ModalState {
    fn default() -> Self {
        Self {
            scale: 1.0,
            opacity: 1.0,
        }
    }
}

impl ModalState {
    pub fn is_full(&self) -> bool {
        self.scale >= 1.0 && self.opacity >= 1.0
    }

    pub fn is_hidden(&self) -> bool {
        self.scale <= 0.0 || self.opacity <= 0.0
    }

    pub fn minimize(&mut self, timers: &mut TimerQueue, now: Instant) {
        self.scale = MINIMIZE_SCALE;
        self.opacity = MINIMIZE_OPACITY;
        timers.schedule(
            TimerKey::RestoreMinimize,
            Duration::from_millis(MINIMIZE_RESTORE_MS),
            now,
        );
    }

    pub fn close(&mut self, timers: &mut TimerQueue, now: Instant) {
        self.scale = 0.0;
        self.opacity = 0.0;
        timers.schedule(
            TimerKey::RestoreClose,
            Duration::from_millis(CLOSE_RESTORE_MS),
            now,
        );
    }

    pub fn restore(&mut self) {
        self.scale = 1.0;
        self.opacity = 1.0;
    }

    /// Shrinks `area` around its center by the current scale.
    pub fn scaled(&self, area: Rect) -> Rect {
        if self.scale >= 1.0 {
            return area;
        }

        let width = (area.width as f32 * self.scale).round() as u16;
        let height = (area.height as f32 * self.scale).round() as u16;
        let x = area.x + (area.width.saturating_sub(width)) / 2;
        let y = area.y + (area.height.saturating_sub(height)) / 2;

        Rect::new(x, y, width, height)
    }
}
