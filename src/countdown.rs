//! The countdown widget: timer state plus the recurring timer that drives it.
//!
//! Every operation goes through [`TimerState`] first and then brings the
//! scheduler in line with the resulting [`Transition`]: entering `Running`
//! arms it, any way out of `Running` disarms it, and dropping the widget
//! disarms it unconditionally.

use tracing::{debug, info};

use crate::state::{TimerState, Transition};
use crate::ticker::Scheduler;

/// The three user controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Control {
    Start,
    Stop,
    Reset,
}

impl Control {
    pub const ALL: [Control; 3] = [Control::Start, Control::Stop, Control::Reset];

    pub fn label(&self) -> &'static str {
        match self {
            Control::Start => "START",
            Control::Stop => "STOP",
            Control::Reset => "RESET",
        }
    }
}

/// Countdown state with its scoped timer.
pub struct CountdownWidget<S: Scheduler> {
    state: TimerState,
    scheduler: S,
    /// Generation of the currently armed timer; ticks tagged otherwise are stale
    generation: u64,
}

impl<S: Scheduler> CountdownWidget<S> {
    /// A stopped countdown of `total` seconds.
    pub fn new(total: u32, scheduler: S) -> Self {
        Self {
            state: TimerState::new(total),
            scheduler,
            generation: 0,
        }
    }

    pub fn state(&self) -> &TimerState {
        &self.state
    }

    /// Generation that fresh ticks must carry.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Whether activating `control` would change anything.
    pub fn is_enabled(&self, control: Control) -> bool {
        match control {
            Control::Start => self.state.can_start(),
            Control::Stop => self.state.can_stop(),
            Control::Reset => true,
        }
    }

    /// Apply a user control.
    pub fn activate(&mut self, control: Control) -> Transition {
        match control {
            Control::Start => self.start(),
            Control::Stop => self.stop(),
            Control::Reset => self.reset(),
        }
    }

    pub fn start(&mut self) -> Transition {
        let transition = self.state.start();
        self.apply(transition)
    }

    pub fn stop(&mut self) -> Transition {
        let transition = self.state.stop();
        self.apply(transition)
    }

    pub fn reset(&mut self) -> Transition {
        let transition = self.state.reset();
        self.apply(transition)
    }

    /// Apply one countdown tick produced under `generation`.
    pub fn tick(&mut self, generation: u64) -> Transition {
        if generation != self.generation || !self.scheduler.is_armed() {
            debug!(generation, current = self.generation, "ignoring stale tick");
            return Transition::None;
        }
        let transition = self.state.tick();
        self.apply(transition)
    }

    fn apply(&mut self, transition: Transition) -> Transition {
        match transition {
            Transition::Started => {
                self.generation += 1;
                self.scheduler.arm(self.generation);
                info!(remaining = self.state.remaining(), "countdown started");
            }
            Transition::Stopped => {
                self.scheduler.disarm();
                info!(remaining = self.state.remaining(), "countdown stopped");
            }
            Transition::Reset => {
                self.scheduler.disarm();
                info!(total = self.state.total(), "countdown reset");
            }
            Transition::Expired => {
                self.scheduler.disarm();
                info!("countdown expired");
            }
            Transition::Ticked => {
                debug!(remaining = self.state.remaining(), "tick");
            }
            Transition::None => {}
        }
        transition
    }
}

impl<S: Scheduler> Drop for CountdownWidget<S> {
    fn drop(&mut self) {
        self.scheduler.disarm();
    }
}
