//! Scrim canvas crate.
//!
//! Immediate-mode 2D drawing surface handed to user draw callbacks once per
//! frame. Geometry and paint state live here; the window system and the
//! frame loop live in `scrim-host`.

pub mod coords;
pub mod paint;
pub mod path;
pub mod raster;
pub mod text;

mod canvas;
mod error;

pub use canvas::Canvas;
pub use coords::{Point, Rect, Vec2};
pub use error::CanvasError;
pub use paint::{Color, PaintState, PaintStyle};
pub use text::{FontFace, FontLoadError};
