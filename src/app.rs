//! Application state and logic.
//!
//! This module ties the countdown widget, the UI controller and the event
//! queue together in the main loop.

use std::time::{Duration, Instant};

use eyre::Result;
use futures::StreamExt;
use ratatui::backend::Backend;
use ratatui::Terminal;
use tracing::{debug, info};

use crate::countdown::CountdownWidget;
use crate::event::{Event, EventHandler, DEFAULT_TICK_RATE};
use crate::state::TOTAL_DURATION_SECS;
use crate::ticker::{IntervalTicker, Scheduler, DEFAULT_PERIOD};
use crate::ui::{Branding, Theme, Ui, UpdateKind};

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Interval between redraws
    pub tick_rate_ms: u64,
    /// Length of one countdown step
    pub countdown_period_ms: u64,
    /// Length of the whole countdown
    pub total_duration_secs: u32,
    /// Title and footer text
    pub branding: Branding,
    /// Colours and styles
    pub theme: Theme,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: DEFAULT_TICK_RATE.as_millis() as u64,
            countdown_period_ms: DEFAULT_PERIOD.as_millis() as u64,
            total_duration_secs: TOTAL_DURATION_SECS,
            branding: Branding::default(),
            theme: Theme::default(),
        }
    }
}

impl AppConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms)
    }

    pub fn countdown_period(&self) -> Duration {
        Duration::from_millis(self.countdown_period_ms)
    }
}

/// Main application.
pub struct App<S: Scheduler = IntervalTicker> {
    /// Countdown state and its timer
    countdown: CountdownWidget<S>,
    /// Current view controller
    ui: Ui,
    /// Should the application exit?
    should_quit: bool,
}

impl App<IntervalTicker> {
    /// Creates an application whose countdown ticks arrive on `events`.
    pub fn new(config: AppConfig, events: &EventHandler) -> Self {
        let ticker = IntervalTicker::with_period(events.sender(), config.countdown_period());
        Self::with_scheduler(config, ticker)
    }

    /// Runs the application main loop with Crossterm backend.
    pub async fn run_with_crossterm(&mut self, events: &mut EventHandler) -> Result<()> {
        use ratatui::backend::CrosstermBackend;

        let mut terminal = Terminal::new(CrosstermBackend::new(std::io::stdout()))?;
        terminal.clear()?;
        self.run(&mut terminal, events).await
    }
}

impl<S: Scheduler> App<S> {
    pub fn with_scheduler(config: AppConfig, scheduler: S) -> Self {
        let mut ui = Ui::new(config.branding, Instant::now());
        ui.set_theme(config.theme);
        Self {
            countdown: CountdownWidget::new(config.total_duration_secs, scheduler),
            ui,
            should_quit: false,
        }
    }

    pub fn countdown(&self) -> &CountdownWidget<S> {
        &self.countdown
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Runs the application main loop.
    pub async fn run(
        &mut self,
        terminal: &mut Terminal<impl Backend>,
        events: &mut EventHandler,
    ) -> Result<()> {
        info!(
            total = self.countdown.state().total(),
            "countdown display running"
        );

        while !self.should_quit {
            // Draw the UI
            let now = Instant::now();
            let ui = &mut self.ui;
            let timer = self.countdown.state();
            terminal.draw(|frame| ui.render(frame, timer, now))?;

            // Handle events
            match events.next().await {
                Some(event) => self.handle_event(event),
                None => break,
            }
        }

        info!(remaining = self.countdown.state().remaining(), "countdown display closed");
        Ok(())
    }

    /// Handles input, tick and countdown events.
    pub fn handle_event(&mut self, event: Event) {
        match event {
            Event::Key(key) => {
                let update = self.ui.handle_key_event(key);
                self.apply_update(update);
            }
            Event::Mouse(mouse) => {
                let update = self.ui.handle_mouse_event(mouse);
                self.apply_update(update);
            }
            Event::Resize(width, height) => self.ui.handle_resize(width, height),
            Event::Tick => self.ui.update_animations(self.countdown.state(), Instant::now()),
            Event::Countdown(generation) => {
                self.countdown.tick(generation);
            }
        }
    }

    fn apply_update(&mut self, update: UpdateKind) {
        match update {
            UpdateKind::Quit => self.should_quit = true,
            UpdateKind::ToggleHelp => self.ui.toggle_help(),
            UpdateKind::Activate(control) => {
                let transition = self.countdown.activate(control);
                if !transition.is_change() {
                    debug!(?control, "control disabled, ignored");
                }
            }
            UpdateKind::Other => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{Phase, TimerState};
    use crate::ticker::MockScheduler;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use pretty_assertions::assert_eq;

    fn press(c: char) -> Event {
        Event::Key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE))
    }

    fn scheduler() -> MockScheduler {
        let mut scheduler = MockScheduler::new();
        scheduler.expect_arm().return_const(());
        scheduler.expect_disarm().return_const(());
        scheduler.expect_is_armed().return_const(true);
        scheduler
    }

    fn app() -> App<MockScheduler> {
        App::with_scheduler(AppConfig::default(), scheduler())
    }

    #[test]
    fn keyboard_session() {
        let mut app = app();
        app.handle_event(press('s'));
        assert_eq!(app.countdown().state().phase(), Phase::Running);

        let generation = app.countdown().generation();
        for _ in 0..3 {
            app.handle_event(Event::Countdown(generation));
        }
        assert_eq!(app.countdown().state().remaining(), 28_797);

        app.handle_event(press('x'));
        app.handle_event(Event::Countdown(generation));
        assert_eq!(app.countdown().state().remaining(), 28_797);
        assert_eq!(app.countdown().state().phase(), Phase::Stopped);

        app.handle_event(press('r'));
        assert_eq!(app.countdown().state(), &TimerState::default());
        assert!(!app.should_quit());

        app.handle_event(press('q'));
        assert!(app.should_quit());
    }

    #[test]
    fn render_ticks_do_not_advance_the_countdown() {
        let mut app = app();
        app.handle_event(press('s'));
        for _ in 0..50 {
            app.handle_event(Event::Tick);
        }
        assert_eq!(app.countdown().state().remaining(), TOTAL_DURATION_SECS);
    }

    #[test]
    fn config_defaults() {
        let config = AppConfig::new();
        assert_eq!(config.tick_rate(), Duration::from_millis(100));
        assert_eq!(config.countdown_period(), Duration::from_secs(1));
        assert_eq!(config.total_duration_secs, 28_800);
    }

    #[test]
    fn configured_theme_reaches_the_screen() {
        use ratatui::backend::TestBackend;
        use ratatui::style::{Color, Style};

        let mut config = AppConfig::default();
        config.theme.status_ready = Style::default().fg(Color::Magenta);
        let mut app = App::with_scheduler(config, scheduler());

        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        let timer = app.countdown.state();
        let ui = &mut app.ui;
        terminal
            .draw(|frame| ui.render(frame, timer, Instant::now()))
            .unwrap();

        let status = terminal.backend().buffer().get(0, 23);
        assert_eq!(status.symbol(), "R");
        assert_eq!(status.fg, Color::Magenta);
    }

    #[tokio::test]
    async fn loop_exits_on_quit_key() {
        use ratatui::backend::TestBackend;

        let mut app = app();
        let mut events = EventHandler::detached();
        let tx = events.sender();
        tx.send(press('s')).unwrap();
        tx.send(Event::Countdown(1)).unwrap();
        tx.send(press('q')).unwrap();

        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        app.run(&mut terminal, &mut events).await.unwrap();
        assert!(app.should_quit());
        assert_eq!(app.countdown().state().remaining(), TOTAL_DURATION_SECS - 1);
    }
}
