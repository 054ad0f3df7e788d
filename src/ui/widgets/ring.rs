//! Circular progress ring.
//!
//! The ring is drawn on a braille canvas spanning a 200x200 coordinate box
//! centred on the origin, with a faint full-circle track and an arc that
//! starts at twelve o'clock and grows clockwise as time elapses.

use std::f64::consts::TAU;

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Color,
    symbols::Marker,
    widgets::{
        canvas::{Canvas, Painter, Shape},
        Widget,
    },
};

/// Radius of the ring in canvas units.
pub const RING_RADIUS: f64 = 90.0;

/// Half-extent of the canvas coordinate box.
const CANVAS_EXTENT: f64 = 100.0;

/// Stroke width of the ring in canvas units.
const STROKE_WIDTH: f64 = 8.0;

pub fn circumference(radius: f64) -> f64 {
    TAU * radius
}

/// Length of the undrawn part of the stroke: the full circumference at
/// progress 0, nothing at progress 1.
pub fn stroke_offset(progress: f64, radius: f64) -> f64 {
    circumference(radius) * (1.0 - progress.clamp(0.0, 1.0))
}

/// Angle in radians covered by the drawn part of the stroke.
pub fn sweep(progress: f64, radius: f64) -> f64 {
    let circumference = circumference(radius);
    if circumference <= 0.0 {
        return 0.0;
    }
    TAU * (circumference - stroke_offset(progress, radius)) / circumference
}

/// Circular arc from twelve o'clock, clockwise.
struct Arc {
    radius: f64,
    sweep: f64,
    color: Color,
}

impl Shape for Arc {
    fn draw(&self, painter: &mut Painter) {
        if self.sweep <= 0.0 {
            return;
        }
        // Two samples per canvas unit of arc length is dense enough for braille
        let steps = ((self.sweep * (self.radius + STROKE_WIDTH)) * 2.0).ceil() as usize;
        for band in [-STROKE_WIDTH / 2.0, 0.0, STROKE_WIDTH / 2.0] {
            let r = self.radius + band;
            for i in 0..=steps {
                let theta = self.sweep * i as f64 / steps as f64;
                if let Some((x, y)) = painter.get_point(r * theta.sin(), r * theta.cos()) {
                    painter.paint(x, y, self.color);
                }
            }
        }
    }
}

/// Progress ring widget.
pub struct ProgressRing {
    /// Elapsed fraction (0.0-1.0)
    progress: f64,
    radius: f64,
    /// Colour of the full-circle track
    track_color: Color,
    /// Colour of the elapsed arc
    fill_color: Color,
}

impl Default for ProgressRing {
    fn default() -> Self {
        Self {
            progress: 0.0,
            radius: RING_RADIUS,
            track_color: Color::DarkGray,
            fill_color: Color::Rgb(0x00, 0xff, 0x88),
        }
    }
}

impl ProgressRing {
    /// Create a ring showing the given elapsed fraction (0.0-1.0)
    pub fn new(progress: f64) -> Self {
        Self {
            progress: progress.clamp(0.0, 1.0),
            ..Default::default()
        }
    }

    pub fn track_color(mut self, color: Color) -> Self {
        self.track_color = color;
        self
    }

    pub fn fill_color(mut self, color: Color) -> Self {
        self.fill_color = color;
        self
    }

    pub fn stroke_offset(&self) -> f64 {
        stroke_offset(self.progress, self.radius)
    }
}

impl Widget for ProgressRing {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width < 1 || area.height < 1 {
            return;
        }

        let track = Arc {
            radius: self.radius,
            sweep: TAU,
            color: self.track_color,
        };
        let fill = Arc {
            radius: self.radius,
            sweep: sweep(self.progress, self.radius),
            color: self.fill_color,
        };

        Canvas::default()
            .marker(Marker::Braille)
            .x_bounds([-CANVAS_EXTENT, CANVAS_EXTENT])
            .y_bounds([-CANVAS_EXTENT, CANVAS_EXTENT])
            .paint(move |ctx| {
                ctx.draw(&track);
                ctx.layer();
                ctx.draw(&fill);
            })
            .render(area, buf);
    }
}
