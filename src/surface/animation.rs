//! Repaint timer owned by a surface

use std::time::{Duration, Instant};

/// Fires at most once per `interval` when polled by the host's event loop.
///
/// The first poll after creation fires immediately. Missed frames are not
/// replayed: after firing, the next deadline is `now + interval`. An interval
/// too large to add to `now` fires once and then never again.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameTimer {
    interval: Duration,
    deadline: Deadline,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Deadline {
    Immediate,
    At(Instant),
    Never,
}

impl FrameTimer {
    pub fn new(interval: Duration) -> Self {
        Self { interval, deadline: Deadline::Immediate }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn next_due(&self) -> Option<Instant> {
        match self.deadline {
            Deadline::At(due) => Some(due),
            Deadline::Immediate | Deadline::Never => None,
        }
    }

    /// Returns true if a frame is due at `now`, re-arming the timer
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.deadline {
            Deadline::Never => false,
            Deadline::At(due) if now < due => false,
            Deadline::Immediate | Deadline::At(_) => {
                self.deadline = now.checked_add(self.interval).map_or(Deadline::Never, Deadline::At);
                true
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fires_once_per_interval() {
        let start = Instant::now();
        let mut timer = FrameTimer::new(Duration::from_millis(10));
        assert_eq!(timer.interval(), Duration::from_millis(10));
        assert_eq!(timer.next_due(), None);

        assert!(timer.poll(start));
        assert!(!timer.poll(start + Duration::from_millis(5)));
        assert!(timer.poll(start + Duration::from_millis(10)));
        assert_eq!(timer.next_due(), Some(start + Duration::from_millis(20)));
    }

    #[test]
    fn late_poll_does_not_burst() {
        let start = Instant::now();
        let mut timer = FrameTimer::new(Duration::from_millis(10));
        assert!(timer.poll(start));
        assert!(timer.poll(start + Duration::from_millis(95)));
        assert!(!timer.poll(start + Duration::from_millis(100)));
    }

    #[test]
    fn unreachable_deadline_fires_once() {
        let start = Instant::now();
        let mut timer = FrameTimer::new(Duration::MAX);
        assert!(timer.poll(start));
        assert_eq!(timer.next_due(), None);
        assert!(!timer.poll(start + Duration::from_secs(3600)));
    }
}
