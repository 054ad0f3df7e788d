//! Help overlay showing keyboard shortcuts and controls.

use ratatui::Frame;
use ratatui::layout::{Rect, Alignment};
use ratatui::widgets::{Block, Borders, Paragraph, Clear};
use ratatui::style::{Style, Modifier};
use ratatui::text::{Line, Span};

use crate::ui::Theme;

/// Key bindings listed in the overlay.
const BINDINGS: &[(&str, &str)] = &[
    ("s", "Start the countdown"),
    ("x", "Stop the countdown"),
    ("r", "Reset to the full duration"),
    ("←/→ Tab", "Move focus between buttons"),
    ("Enter Space", "Press the focused button"),
    ("click", "Press a button"),
    ("?  F1", "Toggle this help screen"),
    ("q  Esc", "Quit"),
];

/// Help overlay showing keyboard shortcuts and usage information.
pub struct HelpView;

impl HelpView {
    /// Render the help overlay
    pub fn render(frame: &mut Frame, area: Rect, theme: &Theme) {
        let popup_area = Self::centered_rect(60, 60, area);

        // Clear the background
        frame.render_widget(Clear, popup_area);

        let help_block = Block::default()
            .title("Pulse Timer Help")
            .borders(Borders::ALL)
            .style(theme.block_style);

        let mut help_text = vec![
            Line::from(vec![
                Span::styled("Controls", Style::default().add_modifier(Modifier::BOLD))
            ]),
            Line::from(""),
        ];
        help_text.extend(BINDINGS.iter().map(|(key, action)| {
            Line::from(vec![
                Span::styled(format!("{:>11}", key), theme.key_style),
                Span::raw(" - "),
                Span::styled(*action, theme.help_style),
            ])
        }));

        let help_widget = Paragraph::new(help_text)
            .block(help_block)
            .style(theme.normal_text)
            .alignment(Alignment::Left);

        frame.render_widget(help_widget, popup_area);
    }

    /// Helper function to create a centered rect using percentages
    fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
        let popup_width = percent_of(r.width, percent_x);
        let popup_height = percent_of(r.height, percent_y);

        let popup_x = r.width.saturating_sub(popup_width) / 2;
        let popup_y = r.height.saturating_sub(popup_height) / 2;

        Rect {
            x: r.x + popup_x,
            y: r.y + popup_y,
            width: popup_width,
            height: popup_height,
        }
    }
}

/// `percent`% of `len`, computed wide so large terminals cannot overflow.
fn percent_of(len: u16, percent: u16) -> u16 {
    let scaled = u32::from(len) * u32::from(percent.min(100)) / 100;
    u16::try_from(scaled).unwrap_or(len)
}
