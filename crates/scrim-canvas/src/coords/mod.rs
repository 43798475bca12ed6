//! Geometry types used by the canvas API.
//!
//! Canvas-local space:
//! - pixels, origin top-left
//! - +X right, +Y down
//!
//! The current frame transform (see [`Canvas::translate`](crate::Canvas::translate))
//! maps these coordinates onto the pixel buffer.

mod rect;
mod vec2;

pub use rect::Rect;
pub use vec2::{Point, Vec2};
