//! Custom widgets for the countdown display.

pub mod button;
pub mod ring;

pub use button::Button;
pub use ring::ProgressRing;
