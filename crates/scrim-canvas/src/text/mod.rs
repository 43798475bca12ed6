//! Text support: font loading, measurement and glyph rasterization.

mod font;

pub use font::{FontFace, FontLoadError};
