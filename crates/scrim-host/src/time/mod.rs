//! Frame timing.
//!
//! One `FrameClock` per host; `tick()` once per frame yields a `FrameTime`
//! and updates the smoothed frame rate shown by the fps overlay.

mod frame_clock;

pub use frame_clock::{FrameClock, FrameTime};
