//! Fixed-rate loop scheduling.
use fugit::{MicrosDurationU64, TimerInstantU64};

/// Microsecond timestamp.
pub type Instant = TimerInstantU64<1_000_000>;

/// Microsecond duration.
pub type Duration = MicrosDurationU64;

/// Keeps a polling loop on a fixed schedule.
///
/// Every poll advances the deadline by one period. If the loop has fallen
/// behind, or run ahead, by more than `max_runahead`, the schedule is restarted
/// from the current time instead of bursting to catch up.
#[derive(Copy, Clone, Debug)]
pub struct Pacer {
    period: Duration,
    max_runahead: Duration,
    deadline: Option<Instant>,
}

impl Pacer {
    pub fn new(period: Duration, max_runahead: Duration) -> Self {
        Self {
            period,
            max_runahead,
            deadline: None,
        }
    }

    /// Advance the schedule.
    ///
    /// # Args
    /// * `now` - The current time.
    ///
    /// # Returns
    /// The time to wait before the next iteration, if any.
    pub fn poll(&mut self, now: Instant) -> Option<Duration> {
        let deadline = match self.deadline {
            Some(deadline)
                if now + self.max_runahead >= deadline
                    && deadline + self.max_runahead >= now =>
            {
                deadline + self.period
            }
            _ => now,
        };
        self.deadline = Some(deadline);
        deadline
            .checked_duration_since(now)
            .filter(|wait| wait.ticks() != 0)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn at(ms: u64) -> Instant {
        Instant::from_ticks(ms * 1000)
    }

    fn pacer() -> Pacer {
        Pacer::new(Duration::millis(33), Duration::millis(1000))
    }

    #[test]
    fn first_poll_does_not_wait() {
        assert_eq!(pacer().poll(at(5000)), None);
    }

    #[test]
    fn keeps_schedule() {
        let mut p = pacer();
        p.poll(at(0));
        // Work took 3 ms.
        assert_eq!(p.poll(at(3)), Some(Duration::millis(30)));
        assert_eq!(p.poll(at(35)), Some(Duration::millis(31)));
        // Late by 10 ms: the next wait is shortened to catch up.
        assert_eq!(p.poll(at(109)), None);
        assert_eq!(p.poll(at(110)), Some(Duration::millis(22)));
    }

    #[test]
    fn resynchronizes_when_far_behind() {
        let mut p = pacer();
        p.poll(at(0));
        assert_eq!(p.poll(at(5000)), None);
        assert_eq!(p.poll(at(5001)), Some(Duration::millis(32)));
    }

    #[test]
    fn resynchronizes_when_far_ahead() {
        let mut p = pacer();
        p.poll(at(0));
        for _ in 0..31 {
            p.poll(at(1));
        }
        // 31 periods (1023 ms) ahead exceeds the run-ahead limit.
        assert_eq!(p.poll(at(2)), None);
        assert_eq!(p.poll(at(3)), Some(Duration::millis(32)));
    }
}
