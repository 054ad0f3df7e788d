//! Recurring one-second countdown timer.
//!
//! A [`Scheduler`] is armed when the countdown enters the running state and
//! disarmed on every way out of it. [`IntervalTicker`] is the tokio-backed
//! implementation used by the app; it turns each elapsed period into an
//! [`Event::Countdown`] on the app's event queue.

use std::time::Duration;

use tokio::sync::mpsc;
use tokio::time::{self, Instant};
use tokio_util::sync::{CancellationToken, DropGuard};
use tracing::debug;

use crate::event::Event;

/// Default countdown period.
pub const DEFAULT_PERIOD: Duration = Duration::from_secs(1);

/// A recurring timer that can be armed and disarmed.
#[cfg_attr(test, mockall::automock)]
pub trait Scheduler {
    /// Start producing ticks tagged with `generation`, replacing any timer
    /// that is already armed.
    fn arm(&mut self, generation: u64);

    /// Stop producing ticks. Does nothing when not armed.
    fn disarm(&mut self);

    fn is_armed(&self) -> bool;
}

/// Tokio interval that sends one [`Event::Countdown`] per period.
pub struct IntervalTicker {
    tx: mpsc::UnboundedSender<Event>,
    period: Duration,
    /// Held while armed; dropping it cancels the interval task
    active: Option<DropGuard>,
}

impl IntervalTicker {
    pub fn new(tx: mpsc::UnboundedSender<Event>) -> Self {
        Self::with_period(tx, DEFAULT_PERIOD)
    }

    pub fn with_period(tx: mpsc::UnboundedSender<Event>, period: Duration) -> Self {
        Self {
            tx,
            period,
            active: None,
        }
    }
}

impl Scheduler for IntervalTicker {
    fn arm(&mut self, generation: u64) {
        self.disarm();

        let token = CancellationToken::new();
        let cancelled = token.clone();
        let tx = self.tx.clone();
        let period = self.period;

        tokio::spawn(async move {
            // First tick one full period after arming, not immediately
            let mut interval = time::interval_at(Instant::now() + period, period);
            loop {
                tokio::select! {
                    _ = cancelled.cancelled() => break,
                    _ = interval.tick() => {
                        if tx.send(Event::Countdown(generation)).is_err() {
                            break;
                        }
                    }
                }
            }
        });

        debug!(generation, period = ?self.period, "countdown timer armed");
        self.active = Some(token.drop_guard());
    }

    fn disarm(&mut self) {
        if self.active.take().is_some() {
            debug!("countdown timer disarmed");
        }
    }

    fn is_armed(&self) -> bool {
        self.active.is_some()
    }
}
