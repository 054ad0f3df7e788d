//! Countdown state management.
//!
//! The countdown is a two-state machine (`Stopped`, `Running`) over the number
//! of seconds left. `Expired` is not a separate state: it is `Stopped` with
//! nothing left, and the tick that reaches zero performs that transition.

mod clock;

pub use clock::{format_time, progress_fraction, TOTAL_DURATION_SECS};

/// Whether the countdown is currently decrementing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Stopped,
    Running,
}

/// Display status derived from the phase and the remaining time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Stopped with the full duration left.
    Ready,
    Running,
    /// Stopped part-way through.
    Paused,
    /// Stopped with nothing left.
    Expired,
}

impl Status {
    pub fn label(&self) -> &'static str {
        match self {
            Status::Ready => "READY",
            Status::Running => "RUNNING",
            Status::Paused => "PAUSED",
            Status::Expired => "EXPIRED",
        }
    }
}

/// Outcome of applying an operation to [`TimerState`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// Guard failed, nothing changed.
    None,
    /// Stopped -> Running.
    Started,
    /// Running -> Stopped by user request.
    Stopped,
    /// Back to the full duration, stopped.
    Reset,
    /// One second elapsed, still running.
    Ticked,
    /// The last second elapsed: Running -> Stopped at zero.
    Expired,
}

impl Transition {
    /// True when the countdown is guaranteed not to be running afterwards.
    pub fn leaves_running(&self) -> bool {
        matches!(self, Transition::Stopped | Transition::Reset | Transition::Expired)
    }

    pub fn is_change(&self) -> bool {
        !matches!(self, Transition::None)
    }
}

/// Remaining time and run state of the countdown.
///
/// Invariants: `remaining <= total`, and the phase is `Running` only while
/// `remaining > 0`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimerState {
    remaining: u32,
    total: u32,
    phase: Phase,
}

impl TimerState {
    /// A stopped countdown with the whole of `total` seconds left.
    pub fn new(total: u32) -> Self {
        Self {
            remaining: total,
            total,
            phase: Phase::Stopped,
        }
    }

    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    pub fn total(&self) -> u32 {
        self.total
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_running(&self) -> bool {
        self.phase == Phase::Running
    }

    pub fn is_expired(&self) -> bool {
        self.remaining == 0
    }

    pub fn status(&self) -> Status {
        match self.phase {
            Phase::Running => Status::Running,
            Phase::Stopped if self.remaining == 0 => Status::Expired,
            Phase::Stopped if self.remaining == self.total => Status::Ready,
            Phase::Stopped => Status::Paused,
        }
    }

    /// Elapsed fraction in `[0, 1]`.
    pub fn progress(&self) -> f64 {
        progress_fraction(self.remaining, self.total)
    }

    /// Remaining time as `HH:MM:SS`.
    pub fn formatted(&self) -> String {
        format_time(self.remaining)
    }

    pub fn can_start(&self) -> bool {
        self.phase == Phase::Stopped && self.remaining > 0
    }

    pub fn can_stop(&self) -> bool {
        self.phase == Phase::Running
    }

    pub fn start(&mut self) -> Transition {
        if !self.can_start() {
            return Transition::None;
        }
        self.phase = Phase::Running;
        Transition::Started
    }

    pub fn stop(&mut self) -> Transition {
        if !self.can_stop() {
            return Transition::None;
        }
        self.phase = Phase::Stopped;
        Transition::Stopped
    }

    pub fn reset(&mut self) -> Transition {
        self.phase = Phase::Stopped;
        self.remaining = self.total;
        Transition::Reset
    }

    /// Apply one elapsed second.
    pub fn tick(&mut self) -> Transition {
        if self.phase != Phase::Running || self.remaining == 0 {
            return Transition::None;
        }
        self.remaining = self.remaining.saturating_sub(1);
        if self.remaining == 0 {
            self.phase = Phase::Stopped;
            Transition::Expired
        } else {
            Transition::Ticked
        }
    }
}

impl Default for TimerState {
    fn default() -> Self {
        Self::new(TOTAL_DURATION_SECS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn running_with(remaining: u32) -> TimerState {
        let mut state = TimerState::default();
        state.remaining = remaining;
        state.start();
        state
    }

    #[test]
    fn starts_stopped_with_full_duration() {
        let state = TimerState::default();
        assert_eq!(state.remaining(), 28_800);
        assert_eq!(state.phase(), Phase::Stopped);
        assert_eq!(state.status(), Status::Ready);
    }

    #[test]
    fn each_tick_takes_exactly_one_second() {
        let mut state = running_with(10);
        let mut previous = state.remaining();
        while state.is_running() {
            state.tick();
            assert_eq!(state.remaining(), previous - 1);
            previous = state.remaining();
        }
        assert_eq!(state.remaining(), 0);
    }

    #[test]
    fn never_goes_below_zero() {
        let mut state = running_with(3);
        for _ in 0..100 {
            state.tick();
        }
        assert_eq!(state.remaining(), 0);
    }

    #[test]
    fn reaching_zero_stops_the_countdown() {
        let mut state = running_with(2);
        assert_eq!(state.tick(), Transition::Ticked);
        assert!(state.is_running());
        assert_eq!(state.tick(), Transition::Expired);
        assert!(!state.is_running());
        assert!(state.is_expired());
        assert_eq!(state.status(), Status::Expired);

        let before = state.clone();
        assert_eq!(state.tick(), Transition::None);
        assert_eq!(state, before);
    }

    #[rstest]
    #[case::fresh(TimerState::default())]
    #[case::running(running_with(500))]
    #[case::paused({ let mut s = running_with(500); s.stop(); s })]
    #[case::expired({ let mut s = running_with(1); s.tick(); s })]
    fn reset_from_any_state(#[case] mut state: TimerState) {
        assert_eq!(state.reset(), Transition::Reset);
        assert_eq!(state, TimerState::default());
        state.reset();
        assert_eq!(state, TimerState::default());
    }

    #[test]
    fn start_is_guarded() {
        let mut running = running_with(100);
        let before = running.clone();
        assert_eq!(running.start(), Transition::None);
        assert_eq!(running, before);

        let mut expired = running_with(1);
        expired.tick();
        let before = expired.clone();
        assert_eq!(expired.start(), Transition::None);
        assert_eq!(expired, before);
    }

    #[test]
    fn stop_is_guarded() {
        let mut state = TimerState::default();
        assert_eq!(state.stop(), Transition::None);
        assert_eq!(state, TimerState::default());
    }

    #[test]
    fn ticks_do_nothing_while_stopped() {
        let mut state = TimerState::default();
        assert_eq!(state.tick(), Transition::None);
        assert_eq!(state.remaining(), TOTAL_DURATION_SECS);
    }

    #[test]
    fn start_tick_stop_reset_scenario() {
        let mut state = TimerState::default();
        assert_eq!(state.start(), Transition::Started);
        assert!(state.is_running());

        for _ in 0..3 {
            state.tick();
        }
        assert_eq!(state.remaining(), 28_797);
        assert_eq!(state.formatted(), "07:59:57");

        assert_eq!(state.stop(), Transition::Stopped);
        assert_eq!(state.status(), Status::Paused);
        state.tick();
        state.tick();
        assert_eq!(state.remaining(), 28_797);

        state.reset();
        assert_eq!(state.remaining(), 28_800);
        assert!(!state.is_running());
    }

    #[test]
    fn transitions_that_leave_running() {
        assert!(Transition::Stopped.leaves_running());
        assert!(Transition::Reset.leaves_running());
        assert!(Transition::Expired.leaves_running());
        assert!(!Transition::Started.leaves_running());
        assert!(!Transition::Ticked.leaves_running());
        assert!(!Transition::None.is_change());
    }
}
