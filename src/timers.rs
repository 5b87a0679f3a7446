use std::time::{Duration, Instant};

/// The fire-once deadlines the widget schedules. Each key owns at most
/// one pending deadline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerKey {
    RestoreMinimize,
    RestoreClose,
    PlaceholderHint,
}

const KEY_COUNT: usize = 3;

impl TimerKey {
    fn index(self) -> usize {
        match self {
            TimerKey::RestoreMinimize => 0,
            TimerKey::RestoreClose => 1,
            TimerKey::PlaceholderHint => 2,
        }
    }

    fn from_index(i: usize) -> TimerKey {
        match i {
            0 => TimerKey::RestoreMinimize,
            1 => TimerKey::RestoreClose,
            _ => TimerKey::PlaceholderHint,
        }
    }
}

/// One-shot deadlines keyed by action, checked from the tick handler.
/// Scheduling a key that is already pending replaces its deadline, so a
/// repeated pulse re-arms its own restore instead of stacking timers.
#[derive(Debug, Default)]
pub struct TimerQueue {
    deadlines: [Option<Instant>; KEY_COUNT],
}

impl TimerQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn schedule(&mut self, key: TimerKey, delay: Duration, now: Instant) {
        self.deadlines[key.index()] = Some(now + delay);
    }

    pub fn cancel(&mut self, key: TimerKey) {
        self.deadlines[key.index()] = None;
    }

    pub fn is_pending(&self, key: TimerKey) -> bool {
        self.deadlines[key.index()].is_some()
    }

    /// Takes every deadline at or before `now` and returns its key.
    pub fn fire_due(&mut self, now: Instant) -> Vec<TimerKey> {
        let mut fired = Vec::new();
        for i in 0..KEY_COUNT {
            if let Some(deadline) = self.deadlines[i] {
                if deadline <= now {
                    self.deadlines[i] = None;
                    fired.push(TimerKey::from_index(i));
                }
            }
        }
        fired
    }
}
