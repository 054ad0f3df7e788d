//! Pulse timer library
//!
//! Core components for the countdown display.

pub mod app;
pub mod countdown;
pub mod event;
pub mod state;
pub mod ticker;
pub mod ui;
