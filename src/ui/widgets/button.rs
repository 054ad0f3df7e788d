//! Push button for the countdown controls.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    widgets::{Block, BorderType, Borders, Widget},
};
use unicode_width::UnicodeWidthStr;

/// A bordered, centred label that can be focused and disabled.
pub struct Button<'a> {
    label: &'a str,
    /// Style while enabled
    style: Style,
    /// Style while disabled
    disabled_style: Style,
    enabled: bool,
    focused: bool,
}

impl<'a> Button<'a> {
    pub fn new(label: &'a str) -> Self {
        Self {
            label,
            style: Style::default(),
            disabled_style: Style::default().add_modifier(Modifier::DIM),
            enabled: true,
            focused: false,
        }
    }

    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    pub fn disabled_style(mut self, style: Style) -> Self {
        self.disabled_style = style;
        self
    }

    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    fn current_style(&self) -> Style {
        if self.enabled {
            self.style
        } else {
            self.disabled_style
        }
    }
}

impl<'a> Widget for Button<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width < 1 || area.height < 1 {
            return;
        }
        let style = self.current_style();

        let border_type = if self.focused {
            BorderType::Double
        } else {
            BorderType::Rounded
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(border_type)
            .border_style(style);
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.width < 1 || inner.height < 1 {
            return;
        }

        let mut label_style = style.add_modifier(Modifier::BOLD);
        if self.focused {
            label_style = label_style.add_modifier(Modifier::UNDERLINED);
        }
        let width = (self.label.width() as u16).min(inner.width);
        let x = inner.left() + (inner.width - width) / 2;
        let y = inner.top() + (inner.height - 1) / 2;
        buf.set_stringn(x, y, self.label, width as usize, label_style);
    }
}
