//! Event queue for the countdown display.
//!
//! The handler owns a background pump that forwards terminal input and render
//! ticks into an unbounded channel. Other producers (the countdown ticker)
//! push into the same channel through [`EventHandler::sender`].

use std::pin::Pin;
use std::task::{Context, Poll};
use std::time::Duration;

use crossterm::event::EventStream;
use futures::{Stream, StreamExt};
use tokio::sync::mpsc;
use tokio_stream::wrappers::IntervalStream;
use tokio_util::sync::{CancellationToken, DropGuard};
use tracing::{debug, trace, warn};

use super::Event;

/// Event handler merging all event sources into one stream.
pub struct EventHandler {
    /// Sending half handed out to other producers
    event_tx: mpsc::UnboundedSender<Event>,
    /// Receiving half polled by the app loop
    event_rx: mpsc::UnboundedReceiver<Event>,
    /// Cancels the input pump when the handler goes away
    _pump_guard: Option<DropGuard>,
}

impl EventHandler {
    /// Create a handler that reads terminal input and emits a render tick
    /// every `tick_rate`.
    pub fn new(tick_rate: Duration) -> Self {
        let mut handler = Self::detached();
        let token = CancellationToken::new();
        tokio::spawn(pump(handler.event_tx.clone(), tick_rate, token.clone()));
        handler._pump_guard = Some(token.drop_guard());
        handler
    }

    /// A handler with no input pump; events only come through [`Self::sender`].
    pub fn detached() -> Self {
        let (event_tx, event_rx) = mpsc::unbounded_channel();
        Self {
            event_tx,
            event_rx,
            _pump_guard: None,
        }
    }

    /// A sender for producers other than the terminal.
    pub fn sender(&self) -> mpsc::UnboundedSender<Event> {
        self.event_tx.clone()
    }

    fn poll_event(&mut self, cx: &mut Context<'_>) -> Poll<Option<Event>> {
        Pin::new(&mut self.event_rx).poll_recv(cx)
    }
}

async fn pump(tx: mpsc::UnboundedSender<Event>, tick_rate: Duration, token: CancellationToken) {
    let mut reader = EventStream::new();
    let mut ticks = IntervalStream::new(tokio::time::interval(tick_rate));
    debug!(?tick_rate, "event pump started");

    loop {
        let event = tokio::select! {
            _ = token.cancelled() => break,
            Some(_) = ticks.next() => Event::Tick,
            input = reader.next() => match input {
                Some(Ok(raw)) => match Event::from_terminal(raw) {
                    Some(event) => event,
                    None => continue,
                },
                Some(Err(err)) => {
                    warn!(%err, "failed to read terminal event");
                    continue;
                }
                None => break,
            },
        };
        if !matches!(event, Event::Tick) {
            trace!(?event, "terminal event");
        }
        if tx.send(event).is_err() {
            break;
        }
    }

    debug!("event pump stopped");
}

// Stream for EventHandler
impl Stream for EventHandler {
    type Item = Event;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        self.poll_event(cx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn delivers_events_from_other_producers_in_order() {
        let mut handler = EventHandler::detached();
        let tx = handler.sender();
        tx.send(Event::Countdown(1)).unwrap();
        tx.send(Event::Tick).unwrap();
        tx.send(Event::Countdown(2)).unwrap();

        assert_eq!(handler.next().await, Some(Event::Countdown(1)));
        assert_eq!(handler.next().await, Some(Event::Tick));
        assert_eq!(handler.next().await, Some(Event::Countdown(2)));
    }
}
