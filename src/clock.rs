use std::num::NonZeroU32;
use std::thread::sleep;
use std::time::{Duration, Instant};

/// A rate limiter for the game loop
pub(crate) trait Clock {
    /// Block until it is time for the next tick
    fn tick(&mut self);
}

/// A clock that lets at most a fixed number of ticks happen per second.
/// Each call to `tick()` sleeps until one tick period has passed since the
/// previous call returned.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct FixedRateClock {
    period: Duration,
    last_tick: Option<Instant>,
}

impl FixedRateClock {
    pub(crate) fn new(ticks_per_second: NonZeroU32) -> FixedRateClock {
        FixedRateClock {
            period: Duration::from_secs(1) / ticks_per_second.get(),
            last_tick: None,
        }
    }

    pub(crate) fn period(&self) -> Duration {
        self.period
    }

    /// How long a tick at time `now` has to wait
    fn wait_time(&self, now: Instant) -> Duration {
        self.last_tick.map_or(Duration::ZERO, |last| {
            (last + self.period).saturating_duration_since(now)
        })
    }
}

impl Clock for FixedRateClock {
    fn tick(&mut self) {
        let wait = self.wait_time(Instant::now());
        if !wait.is_zero() {
            sleep(wait);
        }
        self.last_tick = Some(Instant::now());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(1, Duration::from_secs(1))]
    #[case(7, Duration::from_nanos(142_857_142))]
    #[case(10, Duration::from_millis(100))]
    fn test_period(#[case] rate: u32, #[case] period: Duration) {
        let rate = NonZeroU32::new(rate).expect("rate should be nonzero");
        assert_eq!(FixedRateClock::new(rate).period(), period);
    }

    #[test]
    fn first_tick_is_immediate() {
        let clock = FixedRateClock::new(NonZeroU32::MIN);
        assert_eq!(clock.wait_time(Instant::now()), Duration::ZERO);
    }

    #[test]
    fn wait_for_remainder_of_period() {
        let rate = NonZeroU32::new(10).expect("rate should be nonzero");
        let mut clock = FixedRateClock::new(rate);
        let start = Instant::now();
        clock.last_tick = Some(start);
        assert_eq!(clock.wait_time(start), Duration::from_millis(100));
        assert_eq!(
            clock.wait_time(start + Duration::from_millis(30)),
            Duration::from_millis(70)
        );
        assert_eq!(
            clock.wait_time(start + Duration::from_millis(250)),
            Duration::ZERO
        );
    }

    #[test]
    fn tick_sleeps() {
        let rate = NonZeroU32::new(50).expect("rate should be nonzero");
        let mut clock = FixedRateClock::new(rate);
        clock.tick();
        let start = Instant::now();
        clock.tick();
        clock.tick();
        assert!(start.elapsed() >= Duration::from_millis(20));
    }
}
