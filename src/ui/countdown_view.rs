//! The countdown screen: title block, progress ring with the time readout,
//! control buttons and the footer line.

use itertools::Itertools;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::countdown::Control;
use crate::state::TimerState;
use crate::ui::widgets::{Button, ProgressRing};
use crate::ui::{Branding, Theme};

/// Width of one control button, borders included.
const BUTTON_WIDTH: u16 = 11;
/// Gap between control buttons.
const BUTTON_GAP: u16 = 4;
/// Height of one control button, borders included.
const BUTTON_HEIGHT: u16 = 3;

/// Animation inputs for one frame.
#[derive(Debug, Clone, Copy)]
pub struct Look {
    /// Fill fraction to draw, possibly mid-transition
    pub ring_progress: f64,
    /// Pulse modifier for the readout inside the ring
    pub readout: Modifier,
    /// Fade modifier for the footer time
    pub footer: Modifier,
    /// Button with keyboard focus
    pub focus: Control,
}

/// Countdown screen.
pub struct CountdownView;

impl CountdownView {
    /// Render the screen and return where each control button was drawn, in
    /// [`Control::ALL`] order.
    pub fn render(
        frame: &mut Frame,
        area: Rect,
        timer: &TimerState,
        branding: &Branding,
        theme: &Theme,
        look: &Look,
    ) -> [Rect; 3] {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(5),             // Title block
                Constraint::Min(5),                // Ring
                Constraint::Length(BUTTON_HEIGHT), // Controls
                Constraint::Length(1),             // Footer
            ])
            .split(area);

        Self::render_title(frame, chunks[0], branding, theme);
        Self::render_ring(frame, chunks[1], timer, theme, look);
        let controls = Self::render_controls(frame, chunks[2], timer, theme, look);
        Self::render_footer(frame, chunks[3], timer, branding, theme, look);
        controls
    }

    fn render_title(frame: &mut Frame, area: Rect, branding: &Branding, theme: &Theme) {
        // The logo cannot be shown in a terminal, so its alt text stands in
        let lines = vec![
            Line::styled(branding.heading.as_str(), theme.heading_style),
            Line::styled(branding.presents.as_str(), theme.presents_style),
            Line::from(""),
            Line::styled(letter_spaced(&branding.name), theme.name_style),
            Line::styled(format!("[ {} ]", branding.logo_alt), theme.logo_alt_style),
        ];

        let title = Paragraph::new(lines).alignment(Alignment::Center);
        frame.render_widget(title, area);
    }

    fn render_ring(frame: &mut Frame, area: Rect, timer: &TimerState, theme: &Theme, look: &Look) {
        let ring_area = Self::ring_area(area);
        let ring = ProgressRing::new(look.ring_progress)
            .track_color(theme.ring_track)
            .fill_color(theme.ring_fill);
        frame.render_widget(ring, ring_area);

        let style = if timer.is_expired() {
            theme.expired_style
        } else {
            theme.readout_style.add_modifier(look.readout)
        };
        let readout_area = Rect::new(
            ring_area.x,
            ring_area.y + ring_area.height / 2,
            ring_area.width,
            1.min(ring_area.height),
        );
        let readout = Paragraph::new(Line::styled(timer.formatted(), style))
            .alignment(Alignment::Center);
        frame.render_widget(readout, readout_area);
    }

    fn render_controls(
        frame: &mut Frame,
        area: Rect,
        timer: &TimerState,
        theme: &Theme,
        look: &Look,
    ) -> [Rect; 3] {
        let areas = Self::control_areas(area);
        for (control, button_area) in Control::ALL.into_iter().zip(areas) {
            let enabled = match control {
                Control::Start => timer.can_start(),
                Control::Stop => timer.can_stop(),
                Control::Reset => true,
            };
            let button = Button::new(control.label())
                .style(theme.control_style(control))
                .disabled_style(theme.disabled_style)
                .enabled(enabled)
                .focused(control == look.focus);
            frame.render_widget(button, button_area);
        }
        areas
    }

    fn render_footer(
        frame: &mut Frame,
        area: Rect,
        timer: &TimerState,
        branding: &Branding,
        theme: &Theme,
        look: &Look,
    ) {
        let time_style = Style::default()
            .add_modifier(Modifier::BOLD)
            .add_modifier(look.footer);
        let footer = Paragraph::new(Line::from(vec![
            Span::raw(format!("{} ", branding.footer)),
            Span::styled(timer.formatted(), time_style),
        ]))
        .style(theme.footer_style)
        .alignment(Alignment::Center);
        frame.render_widget(footer, area);
    }

    /// Widest area centred in `area` that looks round on a terminal, where a
    /// cell is about twice as tall as it is wide.
    pub fn ring_area(area: Rect) -> Rect {
        let height = area.height.min(area.width / 2);
        let width = (height * 2).min(area.width);
        Rect::new(
            area.x + (area.width - width) / 2,
            area.y + (area.height - height) / 2,
            width,
            height,
        )
    }

    /// Button areas laid out as a centred row, in [`Control::ALL`] order.
    pub fn control_areas(area: Rect) -> [Rect; 3] {
        let row_width = BUTTON_WIDTH * 3 + BUTTON_GAP * 2;
        let left = area.x + area.width.saturating_sub(row_width) / 2;
        let height = BUTTON_HEIGHT.min(area.height);
        let mut areas = [Rect::default(); 3];
        for (i, slot) in areas.iter_mut().enumerate() {
            let x = left + (BUTTON_WIDTH + BUTTON_GAP) * i as u16;
            let right = area.right().min(x + BUTTON_WIDTH);
            *slot = Rect::new(x.min(right), area.y, right.saturating_sub(x), height);
        }
        areas
    }
}

/// `PULSE` -> `P U L S E`
fn letter_spaced(text: &str) -> String {
    text.to_uppercase().chars().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use ratatui::backend::TestBackend;
    use ratatui::buffer::Buffer;
    use ratatui::Terminal;

    fn screen_text(buf: &Buffer) -> String {
        (0..buf.area.height)
            .map(|y| {
                (0..buf.area.width)
                    .map(|x| buf.get(x, y).symbol())
                    .collect::<String>()
            })
            .join("\n")
    }

    #[test]
    fn buttons_form_a_centred_row() {
        let areas = CountdownView::control_areas(Rect::new(0, 10, 80, 3));
        assert_eq!(areas[0], Rect::new(19, 10, 11, 3));
        assert_eq!(areas[1], Rect::new(34, 10, 11, 3));
        assert_eq!(areas[2], Rect::new(49, 10, 11, 3));
    }

    #[test]
    fn buttons_clip_to_narrow_areas() {
        let area = Rect::new(0, 0, 20, 3);
        for button in CountdownView::control_areas(area) {
            assert!(button.right() <= area.right(), "{button:?}");
        }
    }

    #[test]
    fn ring_area_is_twice_as_wide_as_tall() {
        assert_eq!(CountdownView::ring_area(Rect::new(0, 0, 80, 10)), Rect::new(30, 0, 20, 10));
        assert_eq!(CountdownView::ring_area(Rect::new(0, 0, 10, 10)), Rect::new(0, 2, 10, 5));
    }

    #[test]
    fn letter_spacing() {
        assert_eq!(letter_spaced("Pulse"), "P U L S E");
    }

    #[test]
    fn renders_title_readout_controls_and_footer() {
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        let timer = TimerState::default();
        let look = Look {
            ring_progress: 0.0,
            readout: Modifier::empty(),
            footer: Modifier::empty(),
            focus: Control::Start,
        };
        let mut controls = [Rect::default(); 3];
        terminal
            .draw(|frame| {
                let area = frame.size();
                controls = CountdownView::render(
                    frame,
                    area,
                    &timer,
                    &Branding::default(),
                    &Theme::default(),
                    &look,
                );
            })
            .unwrap();

        let text = screen_text(terminal.backend().buffer());
        assert!(text.contains("SRM Institute of Science and Technology"));
        assert!(text.contains("P U L S E"));
        assert!(text.contains("[ CloudCon x Pulse Logo ]"));
        assert!(text.contains("08:00:00"));
        assert!(text.contains("START"));
        assert!(text.contains("STOP"));
        assert!(text.contains("RESET"));
        assert!(text.contains("Hackathon ends in 08:00:00"));
        assert_eq!(controls[0].y, 24 - 1 - 3);
    }
}
