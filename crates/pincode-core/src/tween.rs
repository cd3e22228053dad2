//! Linear value tweens for fades and colour blends

use std::time::{Duration, Instant};

/// A value moving linearly from `from` to `to` over `duration`
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tween {
    from: f32,
    to: f32,
    started_at: Instant,
    duration: Duration,
}

impl Tween {
    /// A tween already resting at `value`; later retargets take `duration`
    pub fn settled(value: f32, duration: Duration, now: Instant) -> Self {
        Self {
            from: value,
            to: value,
            started_at: now,
            duration,
        }
    }

    /// A tween starting at `from` and heading for `to`
    pub fn animate(from: f32, to: f32, duration: Duration, now: Instant) -> Self {
        Self {
            from,
            to,
            started_at: now,
            duration,
        }
    }

    /// Interpolated value at `now`
    pub fn value(&self, now: Instant) -> f32 {
        let elapsed = now.saturating_duration_since(self.started_at);
        if self.duration.is_zero() || elapsed >= self.duration {
            return self.to;
        }
        let t = elapsed.as_secs_f32() / self.duration.as_secs_f32();
        self.from + (self.to - self.from) * t
    }

    pub fn target(&self) -> f32 {
        self.to
    }

    pub fn is_settled(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.started_at) >= self.duration || self.from == self.to
    }

    /// Head for a new target from wherever the value is now
    pub fn retarget(&mut self, to: f32, now: Instant) {
        if self.to == to {
            return;
        }
        self.from = self.value(now);
        self.to = to;
        self.started_at = now;
    }
}
