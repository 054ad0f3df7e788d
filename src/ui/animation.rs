//! Cosmetic animation for the countdown display.
//!
//! Nothing here feeds back into the countdown state: the pulse only picks a
//! text modifier, and the ring tween only smooths how the fill is drawn.

use std::time::{Duration, Instant};

use ratatui::style::Modifier;

/// Pulse of the main time readout: 2s period, emphasis 1 -> 0.8 -> 1.
pub const READOUT_PULSE: Pulse = Pulse::new(Duration::from_millis(2000), 0.8);

/// Fade of the footer time: 1.5s period, opacity 1 -> 0.5 -> 1.
pub const FOOTER_PULSE: Pulse = Pulse::new(Duration::from_millis(1500), 0.5);

/// Duration of the ring fill transition.
pub const RING_TRANSITION: Duration = Duration::from_millis(500);

/// Smoothstep easing on `[0, 1]`.
pub fn ease_in_out(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}

/// A repeating three-keyframe pulse `1 -> low -> 1` at times `0, 0.5, 1`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pulse {
    period: Duration,
    low: f64,
}

impl Pulse {
    pub const fn new(period: Duration, low: f64) -> Self {
        Self { period, low }
    }

    /// Level in `[low, 1]` after `elapsed` since the pulse began.
    pub fn level(&self, elapsed: Duration) -> f64 {
        let period = self.period.as_secs_f64();
        if period <= 0.0 {
            return 1.0;
        }
        let t = (elapsed.as_secs_f64() % period) / period;
        let (from, to, local) = if t < 0.5 {
            (1.0, self.low, t / 0.5)
        } else {
            (self.low, 1.0, (t - 0.5) / 0.5)
        };
        from + (to - from) * ease_in_out(local)
    }

    /// Terminal rendition of the level: bold near the peak, dim near the trough.
    pub fn modifier(&self, elapsed: Duration) -> Modifier {
        let level = self.level(elapsed);
        let span = 1.0 - self.low;
        if level >= 1.0 - span * 0.25 {
            Modifier::BOLD
        } else if level <= self.low + span * 0.5 {
            Modifier::DIM
        } else {
            Modifier::empty()
        }
    }
}

/// Linear transition of a value towards a target.
#[derive(Debug, Clone, Copy)]
pub struct Tween {
    from: f64,
    to: f64,
    started: Instant,
    duration: Duration,
}

impl Tween {
    /// A tween resting at `value`.
    pub fn new(value: f64, now: Instant, duration: Duration) -> Self {
        Self {
            from: value,
            to: value,
            started: now,
            duration,
        }
    }

    pub fn target(&self) -> f64 {
        self.to
    }

    /// Head towards `to`, starting from wherever the tween is at `now`.
    pub fn retarget(&mut self, to: f64, now: Instant) {
        self.from = self.value_at(now);
        self.to = to;
        self.started = now;
    }

    pub fn value_at(&self, now: Instant) -> f64 {
        let elapsed = now.saturating_duration_since(self.started);
        if self.duration.is_zero() || elapsed >= self.duration {
            return self.to;
        }
        let t = elapsed.as_secs_f64() / self.duration.as_secs_f64();
        self.from + (self.to - self.from) * t
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[rstest]
    #[case(0, 1.0)]
    #[case(1000, 0.8)]
    #[case(2000, 1.0)]
    #[case(3000, 0.8)]
    fn readout_pulse_keyframes(#[case] millis: u64, #[case] expected: f64) {
        let level = READOUT_PULSE.level(Duration::from_millis(millis));
        assert!(approx(level, expected), "{millis}ms -> {level}");
    }

    #[test]
    fn pulse_stays_between_low_and_one() {
        for millis in (0..3000).step_by(37) {
            let level = FOOTER_PULSE.level(Duration::from_millis(millis));
            assert!((0.5..=1.0).contains(&level), "{millis}ms -> {level}");
        }
    }

    #[test]
    fn pulse_modifier_follows_level() {
        assert_eq!(FOOTER_PULSE.modifier(Duration::ZERO), Modifier::BOLD);
        assert_eq!(FOOTER_PULSE.modifier(Duration::from_millis(750)), Modifier::DIM);
    }

    #[test]
    fn easing_endpoints() {
        assert_eq!(ease_in_out(0.0), 0.0);
        assert_eq!(ease_in_out(0.5), 0.5);
        assert_eq!(ease_in_out(1.0), 1.0);
        assert_eq!(ease_in_out(2.0), 1.0);
    }

    #[test]
    fn tween_moves_linearly_then_rests() {
        let start = Instant::now();
        let mut tween = Tween::new(0.0, start, RING_TRANSITION);
        tween.retarget(1.0, start);

        assert!(approx(tween.value_at(start), 0.0));
        assert!(approx(tween.value_at(start + Duration::from_millis(250)), 0.5));
        assert!(approx(tween.value_at(start + RING_TRANSITION), 1.0));
        assert!(approx(tween.value_at(start + Duration::from_secs(10)), 1.0));
    }

    #[test]
    fn retarget_midway_starts_from_current_value() {
        let start = Instant::now();
        let mut tween = Tween::new(0.0, start, RING_TRANSITION);
        tween.retarget(1.0, start);
        let midway = start + Duration::from_millis(250);
        tween.retarget(0.0, midway);

        assert!(approx(tween.value_at(midway), 0.5));
        assert!(approx(tween.value_at(midway + RING_TRANSITION), 0.0));
        assert_eq!(tween.target(), 0.0);
    }
}
