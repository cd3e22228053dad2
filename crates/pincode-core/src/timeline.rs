//! Timed step driver
//!
//! A [`Sequence`] is an ordered list of `(delay, effect)` steps. The
//! [`Scheduler`] runs any number of sequences side by side: each one applies
//! its steps strictly in order, every step waiting its delay after the
//! previous step of the same sequence. Time is supplied by the caller, so
//! the driver never sleeps and can be stepped deterministically in tests.

use std::collections::VecDeque;
use std::time::{Duration, Instant};

use crate::session::StatePatch;

/// What a completion hands to the host
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Completion {
    /// The buffer as it was when the sequence was built
    Snapshot(String),
    /// The buffer as it is when the step runs
    CurrentBuffer,
}

/// Effect applied when a step comes due
#[derive(Clone, Debug, PartialEq)]
pub enum Effect {
    /// Update session state
    Patch(StatePatch),
    /// Start the shake sequence alongside the current one
    Shake,
    /// Hand the entered code to the host
    Complete(Completion),
    /// Ask the host to vibrate
    Vibrate(Duration),
    /// Nothing; holds the sequence open
    Idle,
}

/// One timed step
#[derive(Clone, Debug, PartialEq)]
pub struct Step {
    /// Wait before this step, measured from the previous step
    pub delay: Duration,
    pub effect: Effect,
}

/// Named, ordered list of steps
#[derive(Clone, Debug, PartialEq)]
pub struct Sequence {
    name: &'static str,
    steps: VecDeque<Step>,
}

impl Sequence {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            steps: VecDeque::new(),
        }
    }

    /// Append a step that runs `delay` after the previous one
    pub fn then(mut self, delay: Duration, effect: Effect) -> Self {
        self.steps.push_back(Step { delay, effect });
        self
    }

    /// Append a step that runs together with the previous one
    pub fn and(self, effect: Effect) -> Self {
        self.then(Duration::ZERO, effect)
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Sum of all step delays
    pub fn total_duration(&self) -> Duration {
        self.steps.iter().map(|s| s.delay).sum()
    }

    pub fn steps(&self) -> impl Iterator<Item = &Step> {
        self.steps.iter()
    }
}

/// A step that has come due
#[derive(Clone, Debug, PartialEq)]
pub struct Due {
    pub sequence: &'static str,
    /// When the step was scheduled to run
    pub at: Instant,
    pub effect: Effect,
}

#[derive(Debug)]
struct Running {
    sequence: Sequence,
    next_due: Instant,
    order: u64,
}

/// Runs sequences against caller-supplied time
#[derive(Debug, Default)]
pub struct Scheduler {
    running: Vec<Running>,
    next_order: u64,
}

impl Scheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a sequence; its first step runs after its own delay from `now`
    pub fn start(&mut self, sequence: Sequence, now: Instant) {
        let Some(first) = sequence.steps.front() else {
            return;
        };
        tracing::trace!(sequence = sequence.name, steps = sequence.len(), "sequence started");
        let next_due = now + first.delay;
        self.running.push(Running {
            sequence,
            next_due,
            order: self.next_order,
        });
        self.next_order += 1;
    }

    /// Pop the earliest step due at or before `now`
    ///
    /// Steps due at the same instant come out in the order their sequences
    /// were started.
    pub fn pop_due(&mut self, now: Instant) -> Option<Due> {
        let idx = self
            .running
            .iter()
            .enumerate()
            .filter(|(_, r)| r.next_due <= now)
            .min_by_key(|(_, r)| (r.next_due, r.order))
            .map(|(i, _)| i)?;

        let running = &mut self.running[idx];
        let step = running.sequence.steps.pop_front()?;
        let at = running.next_due;
        let name = running.sequence.name;

        match running.sequence.steps.front().map(|next| next.delay) {
            Some(delay) => running.next_due = at + delay,
            None => {
                self.running.remove(idx);
            }
        }

        Some(Due {
            sequence: name,
            at,
            effect: step.effect,
        })
    }

    /// When the next step comes due, if any sequence is running
    pub fn next_due(&self) -> Option<Instant> {
        self.running.iter().map(|r| r.next_due).min()
    }

    pub fn is_idle(&self) -> bool {
        self.running.is_empty()
    }

    /// Whether a sequence with this name is still running
    pub fn is_running(&self, name: &str) -> bool {
        self.running.iter().any(|r| r.sequence.name == name)
    }

    /// Drop every running sequence
    pub fn clear(&mut self) {
        self.running.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    fn drain(scheduler: &mut Scheduler, now: Instant) -> Vec<Due> {
        std::iter::from_fn(|| scheduler.pop_due(now)).collect()
    }

    #[test]
    fn test_steps_wait_for_their_delay() {
        let t0 = Instant::now();
        let mut scheduler = Scheduler::new();
        scheduler.start(
            Sequence::new("fade")
                .then(ms(100), Effect::Idle)
                .then(ms(200), Effect::Shake),
            t0,
        );

        assert!(scheduler.is_running("fade"));
        assert!(!scheduler.is_running("shake"));
        assert!(scheduler.pop_due(t0 + ms(99)).is_none());
        assert_eq!(scheduler.pop_due(t0 + ms(100)).unwrap().effect, Effect::Idle);
        assert!(scheduler.pop_due(t0 + ms(299)).is_none());
        assert!(scheduler.is_running("fade"));
        let due = scheduler.pop_due(t0 + ms(300)).unwrap();
        assert_eq!(due.effect, Effect::Shake);
        assert_eq!(due.at, t0 + ms(300));
        assert!(!scheduler.is_running("fade"));
        assert!(scheduler.is_idle());
    }

    #[test]
    fn test_late_tick_keeps_order_and_schedule() {
        let t0 = Instant::now();
        let mut scheduler = Scheduler::new();
        scheduler.start(
            Sequence::new("a")
                .then(ms(50), Effect::Vibrate(ms(1)))
                .then(ms(50), Effect::Vibrate(ms(2))),
            t0,
        );
        scheduler.start(Sequence::new("b").then(ms(75), Effect::Vibrate(ms(3))), t0);

        let effects: Vec<_> = drain(&mut scheduler, t0 + ms(1000))
            .into_iter()
            .map(|d| (d.sequence, d.at - t0))
            .collect();

        assert_eq!(effects, vec![("a", ms(50)), ("b", ms(75)), ("a", ms(100))]);
    }

    #[test]
    fn test_ties_run_in_start_order() {
        let t0 = Instant::now();
        let mut scheduler = Scheduler::new();
        scheduler.start(Sequence::new("first").then(ms(10), Effect::Idle), t0);
        scheduler.start(Sequence::new("second").then(ms(10), Effect::Idle), t0);

        let names: Vec<_> = drain(&mut scheduler, t0 + ms(10))
            .into_iter()
            .map(|d| d.sequence)
            .collect();
        assert_eq!(names, vec!["first", "second"]);
    }

    #[test]
    fn test_empty_sequence_is_ignored() {
        let mut scheduler = Scheduler::new();
        scheduler.start(Sequence::new("empty"), Instant::now());
        assert!(scheduler.is_idle());
        assert!(scheduler.next_due().is_none());
    }

    #[test]
    fn test_total_duration() {
        let seq = Sequence::new("x")
            .then(ms(300), Effect::Idle)
            .and(Effect::Shake)
            .then(ms(200), Effect::Idle);
        assert_eq!(seq.total_duration(), ms(500));
        assert_eq!(seq.len(), 3);
    }
}
