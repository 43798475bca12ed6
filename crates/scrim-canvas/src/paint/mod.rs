//! Paint model for canvas draws.
//!
//! Scope:
//! - packed ARGB colour values and the named palette
//! - fill / stroke style selection
//! - the mutable per-frame paint state read by every draw call

pub mod color;
pub mod state;
pub mod style;

pub use color::Color;
pub use state::PaintState;
pub use style::PaintStyle;
