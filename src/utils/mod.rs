//! Utility Module
//!
//! - [`time::FrameTimer`]: wall-clock frame timing for the render loop

pub mod time;

pub use time::FrameTimer;
