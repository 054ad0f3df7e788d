//! UI theme definition.

use ratatui::style::{Color, Modifier, Style};

use crate::countdown::Control;
use crate::state::Status;

/// Theme for the application UI.
#[derive(Debug, Clone)]
pub struct Theme {
    // Basic styles
    pub normal_text: Style,
    pub block_style: Style,
    pub key_style: Style,
    pub help_style: Style,

    // Title block
    pub heading_style: Style,
    pub presents_style: Style,
    pub name_style: Style,
    pub logo_alt_style: Style,

    // Countdown
    pub readout_style: Style,
    pub expired_style: Style,
    pub footer_style: Style,
    pub ring_track: Color,
    pub ring_fill: Color,

    // Control styles
    pub start_style: Style,
    pub stop_style: Style,
    pub reset_style: Style,
    pub disabled_style: Style,

    // Status line styles
    pub status_ready: Style,
    pub status_running: Style,
    pub status_paused: Style,
    pub status_expired: Style,
}

impl Theme {
    pub fn control_style(&self, control: Control) -> Style {
        match control {
            Control::Start => self.start_style,
            Control::Stop => self.stop_style,
            Control::Reset => self.reset_style,
        }
    }

    pub fn status_style(&self, status: Status) -> Style {
        match status {
            Status::Ready => self.status_ready,
            Status::Running => self.status_running,
            Status::Paused => self.status_paused,
            Status::Expired => self.status_expired,
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            // Basic styles
            normal_text: Style::default().fg(Color::White),
            block_style: Style::default(),
            key_style: Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            help_style: Style::default().fg(Color::Gray),

            // Title block
            heading_style: Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            presents_style: Style::default().fg(Color::White),
            name_style: Style::default().fg(Color::LightMagenta).add_modifier(Modifier::BOLD),
            logo_alt_style: Style::default().fg(Color::Gray).add_modifier(Modifier::ITALIC),

            // Countdown
            readout_style: Style::default().fg(Color::White),
            expired_style: Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            footer_style: Style::default().fg(Color::Gray),
            ring_track: Color::DarkGray,
            ring_fill: Color::Rgb(0x00, 0xff, 0x88),

            // Control styles
            start_style: Style::default().fg(Color::Green),
            stop_style: Style::default().fg(Color::Red),
            reset_style: Style::default().fg(Color::Yellow),
            disabled_style: Style::default().fg(Color::DarkGray),

            // Status line styles
            status_ready: Style::default().fg(Color::Cyan),
            status_running: Style::default().fg(Color::Green),
            status_paused: Style::default().fg(Color::Yellow),
            status_expired: Style::default().fg(Color::Red),
        }
    }
}
