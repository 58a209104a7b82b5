use std::time::Duration;

/// Shortest and longest tick interval the speed controls allow
pub const MIN_INTERVAL_MS: u64 = 10;
pub const MAX_INTERVAL_MS: u64 = 2000;

/// Repeating timer driven by frame time.
/// Armed = scheduled, disarmed = cancelled. The simulation owns it, so it
/// cannot fire after the simulation is gone.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Ticker {
    elapsed: Option<Duration>,
}

impl Ticker {
    pub const fn new() -> Self {
        Self { elapsed: None }
    }

    /// Schedule the timer; the first tick is a full interval away
    pub fn arm(&mut self) {
        self.elapsed = Some(Duration::ZERO);
    }

    /// Cancel the timer, dropping any partially elapsed time
    pub fn disarm(&mut self) {
        self.elapsed = None;
    }

    pub const fn is_armed(&self) -> bool {
        self.elapsed.is_some()
    }

    /// Feed `dt` of wall time. Returns true when `interval` has been reached.
    /// Overshoot carries into the next interval so the average rate holds,
    /// but at most one fire per call: a backlog of a whole interval or more
    /// is dropped instead of replayed.
    pub fn advance(&mut self, dt: Duration, interval: Duration) -> bool {
        let Some(elapsed) = self.elapsed.as_mut() else {
            return false;
        };
        *elapsed += dt;
        if *elapsed < interval {
            return false;
        }
        *elapsed -= interval;
        if *elapsed >= interval {
            *elapsed = Duration::ZERO;
        }
        true
    }
}

/// How long to wait between steps
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IntervalPolicy {
    Fixed(Duration),
    /// Scales linearly with the live-cell ratio: an empty board ticks every
    /// `min`, a full one every `max`
    Adaptive { min: Duration, max: Duration },
}

impl Default for IntervalPolicy {
    fn default() -> Self {
        IntervalPolicy::Fixed(Duration::from_millis(100))
    }
}

fn shift(interval: Duration, delta_ms: i64) -> Duration {
    let ms = (interval.as_millis() as i64).saturating_add(delta_ms);
    Duration::from_millis(ms.clamp(MIN_INTERVAL_MS as i64, MAX_INTERVAL_MS as i64) as u64)
}

impl IntervalPolicy {
    /// Interval for a board with the given fraction of live cells
    pub fn interval(&self, live_ratio: f64) -> Duration {
        match *self {
            IntervalPolicy::Fixed(interval) => interval,
            IntervalPolicy::Adaptive { min, max } => {
                let span_ms = max.saturating_sub(min).as_millis() as f64;
                let extra_ms = (span_ms * live_ratio.clamp(0.0, 1.0)).round() as u64;
                min + Duration::from_millis(extra_ms)
            }
        }
    }

    /// Speed control: positive `delta_ms` slows down, negative speeds up.
    /// Results stay within [MIN_INTERVAL_MS, MAX_INTERVAL_MS].
    pub fn adjust(self, delta_ms: i64) -> Self {
        match self {
            IntervalPolicy::Fixed(interval) => IntervalPolicy::Fixed(shift(interval, delta_ms)),
            IntervalPolicy::Adaptive { min, max } => IntervalPolicy::Adaptive {
                min: shift(min, delta_ms),
                max: shift(max, delta_ms),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn test_disarmed_never_fires() {
        let mut ticker = Ticker::new();
        assert!(!ticker.advance(ms(10_000), ms(1)));
        assert!(!ticker.is_armed());
    }

    #[test]
    fn test_fires_once_per_interval() {
        let mut ticker = Ticker::new();
        ticker.arm();
        assert!(!ticker.advance(ms(60), ms(100)));
        assert!(ticker.advance(ms(40), ms(100)));
        assert!(!ticker.advance(ms(99), ms(100)));
        assert!(ticker.advance(ms(1), ms(100)));
    }

    #[test]
    fn test_slow_frame_fires_only_once() {
        let mut ticker = Ticker::new();
        ticker.arm();
        assert!(ticker.advance(ms(1000), ms(100)));
        assert!(!ticker.advance(ms(50), ms(100)));
    }

    #[test]
    fn test_overshoot_carries_over() {
        let mut ticker = Ticker::new();
        ticker.arm();
        let fired = (0..30).filter(|_| ticker.advance(ms(40), ms(100))).count();
        // 1200 ms of 40 ms frames at a 100 ms interval
        assert_eq!(fired, 12);

        let mut ticker = Ticker::new();
        ticker.arm();
        assert!(ticker.advance(ms(130), ms(100)));
        assert!(ticker.advance(ms(70), ms(100)));
    }

    #[test]
    fn test_disarm_drops_partial_progress() {
        let mut ticker = Ticker::new();
        ticker.arm();
        ticker.advance(ms(90), ms(100));
        ticker.disarm();
        ticker.arm();
        assert!(!ticker.advance(ms(20), ms(100)));
    }

    #[test]
    fn test_adaptive_interval_tracks_live_ratio() {
        let policy = IntervalPolicy::Adaptive { min: ms(50), max: ms(250) };
        assert_eq!(policy.interval(0.0), ms(50));
        assert_eq!(policy.interval(0.5), ms(150));
        assert_eq!(policy.interval(1.0), ms(250));
        assert_eq!(policy.interval(7.0), ms(250));
    }

    #[test]
    fn test_adjust_is_clamped() {
        assert_eq!(IntervalPolicy::Fixed(ms(100)).adjust(-10), IntervalPolicy::Fixed(ms(90)));
        assert_eq!(IntervalPolicy::Fixed(ms(15)).adjust(-10), IntervalPolicy::Fixed(ms(10)));
        assert_eq!(IntervalPolicy::Fixed(ms(1995)).adjust(10), IntervalPolicy::Fixed(ms(2000)));
        assert_eq!(
            IntervalPolicy::Adaptive { min: ms(50), max: ms(200) }.adjust(20),
            IntervalPolicy::Adaptive { min: ms(70), max: ms(220) }
        );
    }
}
