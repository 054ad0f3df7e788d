//! UI components for the countdown display.
//!
//! [`Ui`] owns everything that is purely presentational: focus, the help
//! overlay, animation clocks and where the buttons were last drawn. It turns
//! input into [`UpdateKind`]s and leaves the countdown itself to the app.

pub mod animation;
pub mod countdown_view;
pub mod help;
pub mod theme;
pub mod widgets;

pub use countdown_view::{CountdownView, Look};
pub use help::HelpView;
pub use theme::Theme;

use std::time::Instant;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Rect;
use ratatui::style::Modifier;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::countdown::Control;
use crate::state::TimerState;
use animation::{Tween, FOOTER_PULSE, READOUT_PULSE, RING_TRANSITION};

/// The result of updating the UI in response to user input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateKind {
    /// Quit the application
    Quit,
    /// Toggle help overlay
    ToggleHelp,
    /// Press one of the countdown controls
    Activate(Control),
    /// Other update (no action needed)
    Other,
}

/// Static text of the title block and footer.
#[derive(Debug, Clone, PartialEq)]
pub struct Branding {
    pub heading: String,
    pub presents: String,
    pub name: String,
    /// Logo location; a terminal cannot display it
    pub logo_url: String,
    /// Shown in place of the logo
    pub logo_alt: String,
    /// Text in front of the footer time
    pub footer: String,
}

impl Default for Branding {
    fn default() -> Self {
        Self {
            heading: "SRM Institute of Science and Technology".to_string(),
            presents: "Presents".to_string(),
            name: "Pulse".to_string(),
            logo_url: "https://imgur.com/6sf3JKI.png".to_string(),
            logo_alt: "CloudCon x Pulse Logo".to_string(),
            footer: "Hackathon ends in".to_string(),
        }
    }
}

/// Main UI controller.
pub struct Ui {
    /// Whether to show help overlay
    show_help: bool,
    /// UI theme
    theme: Theme,
    /// Title and footer text
    branding: Branding,
    /// Button with keyboard focus
    focus: Control,
    /// Where the buttons were drawn last frame, in [`Control::ALL`] order
    button_areas: [Rect; 3],
    /// Drawn ring fill, easing towards the real progress
    ring: Tween,
    /// Origin of the pulse animations
    pulse_origin: Instant,
}

impl Ui {
    /// Create a new UI controller.
    pub fn new(branding: Branding, now: Instant) -> Self {
        Self {
            show_help: false,
            theme: Theme::default(),
            branding,
            focus: Control::Start,
            button_areas: [Rect::default(); 3],
            ring: Tween::new(0.0, now, RING_TRANSITION),
            pulse_origin: now,
        }
    }

    pub fn focus(&self) -> Control {
        self.focus
    }

    pub fn show_help(&self) -> bool {
        self.show_help
    }

    /// Toggle help overlay.
    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }

    /// Set the theme.
    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
    }

    /// Handle keyboard input.
    pub fn handle_key_event(&mut self, key: KeyEvent) -> UpdateKind {
        match key.code {
            KeyCode::Char('c') | KeyCode::Char('d')
                if key.modifiers.contains(KeyModifiers::CONTROL) =>
            {
                UpdateKind::Quit
            }
            // Esc closes the overlay before it quits
            KeyCode::Esc if self.show_help => UpdateKind::ToggleHelp,
            KeyCode::Char('q') | KeyCode::Esc => UpdateKind::Quit,
            KeyCode::F(1) | KeyCode::Char('?') => UpdateKind::ToggleHelp,
            KeyCode::Char('s') => UpdateKind::Activate(Control::Start),
            KeyCode::Char('x') => UpdateKind::Activate(Control::Stop),
            KeyCode::Char('r') => UpdateKind::Activate(Control::Reset),
            KeyCode::Right | KeyCode::Tab | KeyCode::Char('l') => {
                self.focus_next();
                UpdateKind::Other
            }
            KeyCode::Left | KeyCode::BackTab | KeyCode::Char('h') => {
                self.focus_prev();
                UpdateKind::Other
            }
            KeyCode::Enter | KeyCode::Char(' ') => UpdateKind::Activate(self.focus),
            _ => UpdateKind::Other,
        }
    }

    /// Handle mouse input: a left click on a button presses it.
    pub fn handle_mouse_event(&mut self, mouse: MouseEvent) -> UpdateKind {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return UpdateKind::Other;
        }
        let hit = Control::ALL
            .into_iter()
            .zip(self.button_areas)
            .find(|(_, area)| contains(*area, mouse.column, mouse.row));
        match hit {
            Some((control, _)) => {
                self.focus = control;
                UpdateKind::Activate(control)
            }
            None => UpdateKind::Other,
        }
    }

    /// Handle terminal resize events
    pub fn handle_resize(&mut self, width: u16, height: u16) {
        // Button areas are stale until the next draw
        self.button_areas = [Rect::default(); 3];
        tracing::debug!(width, height, "terminal resized");
    }

    /// Move the ring towards the current progress.
    pub fn update_animations(&mut self, timer: &TimerState, now: Instant) {
        let progress = timer.progress();
        if self.ring.target() != progress {
            self.ring.retarget(progress, now);
        }
    }

    /// Render the UI.
    pub fn render(&mut self, frame: &mut Frame, timer: &TimerState, now: Instant) {
        let area = frame.size();
        if area.height < 2 {
            return;
        }
        let view_area = Rect::new(area.x, area.y, area.width, area.height - 1);

        let look = self.look(timer, now);
        self.button_areas =
            CountdownView::render(frame, view_area, timer, &self.branding, &self.theme, &look);

        // Render help overlay if active (always on top)
        if self.show_help {
            HelpView::render(frame, view_area, &self.theme);
        }

        self.render_status_line(frame, area, timer);
    }

    fn look(&self, timer: &TimerState, now: Instant) -> Look {
        // Static unless counting down
        let (readout, footer) = if timer.is_running() {
            let elapsed = now.saturating_duration_since(self.pulse_origin);
            (READOUT_PULSE.modifier(elapsed), FOOTER_PULSE.modifier(elapsed))
        } else {
            (Modifier::BOLD, Modifier::empty())
        };
        Look {
            ring_progress: self.ring.value_at(now),
            readout,
            footer,
            focus: self.focus,
        }
    }

    fn render_status_line(&self, frame: &mut Frame, area: Rect, timer: &TimerState) {
        let status_area = Rect::new(area.x, area.bottom() - 1, area.width, 1);
        let status = timer.status();

        let status_line = Line::from(vec![
            Span::styled(status.label(), self.theme.status_style(status)),
            Span::styled(
                format!(" | {} | Press ? for help", timer.formatted()),
                self.theme.help_style,
            ),
        ]);

        frame.render_widget(Paragraph::new(status_line), status_area);
    }

    fn focus_next(&mut self) {
        self.focus = match self.focus {
            Control::Start => Control::Stop,
            Control::Stop => Control::Reset,
            Control::Reset => Control::Start,
        };
    }

    fn focus_prev(&mut self) {
        self.focus = match self.focus {
            Control::Start => Control::Reset,
            Control::Stop => Control::Start,
            Control::Reset => Control::Stop,
        };
    }
}

fn contains(area: Rect, column: u16, row: u16) -> bool {
    column >= area.left() && column < area.right() && row >= area.top() && row < area.bottom()
}
