//! CPU rasterization.
//!
//! - [`PixelBuffer`]: the canvas' backing store, readback and export
//! - `primitives`: stateless immediate draws reading the current paint state

mod buffer;
pub(crate) mod primitives;

pub use buffer::PixelBuffer;
