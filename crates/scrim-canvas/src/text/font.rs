use std::fmt;

use fontdue::layout::{CoordinateSystem, Layout, LayoutSettings, TextStyle};

use crate::coords::{Point, Vec2};

/// Error returned by [`FontFace::from_bytes`].
#[derive(Debug, Clone)]
pub struct FontLoadError(pub String);

impl fmt::Display for FontLoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "font load error: {}", self.0)
    }
}

impl std::error::Error for FontLoadError {}

/// A single rasterized glyph positioned in canvas space.
pub(crate) struct GlyphBitmap {
    /// Top-left of the bitmap in canvas pixels.
    pub x: i32,
    pub y: i32,
    pub width: usize,
    pub height: usize,
    /// Row-major coverage, one byte per pixel.
    pub coverage: Vec<u8>,
}

/// A parsed font at a fixed pixel size.
///
/// The canvas draws all text with one face; size and family are chosen by
/// the host, not by draw calls.
pub struct FontFace {
    font: fontdue::Font,
    size: f32,
}

impl FontFace {
    pub const DEFAULT_SIZE: f32 = 18.0;

    /// Parses a TrueType or OpenType font from raw bytes.
    pub fn from_bytes(bytes: &[u8], size: f32) -> Result<Self, FontLoadError> {
        if !size.is_finite() || size <= 0.0 {
            return Err(FontLoadError(format!("font size must be positive, got {size}")));
        }
        let font = fontdue::Font::from_bytes(bytes, fontdue::FontSettings::default())
            .map_err(|e| FontLoadError(e.to_string()))?;
        Ok(Self { font, size })
    }

    #[inline]
    pub fn size(&self) -> f32 {
        self.size
    }

    /// Distance from the top of a line to its baseline.
    pub fn ascent(&self) -> f32 {
        self.font
            .horizontal_line_metrics(self.size)
            .map(|m| m.ascent)
            .unwrap_or(self.size * 0.8)
    }

    /// Distance from the baseline to the bottom of a line (non-negative).
    pub fn descent(&self) -> f32 {
        self.font
            .horizontal_line_metrics(self.size)
            .map(|m| -m.descent)
            .unwrap_or(self.size * 0.2)
    }

    /// Width of the laid-out string and the line height, in pixels.
    #[must_use]
    pub fn measure(&self, text: &str) -> Vec2 {
        let height = self.ascent() + self.descent();
        let layout = self.layout(text, 0.0, 0.0);
        let glyphs = layout.glyphs();
        if glyphs.is_empty() {
            return Vec2::new(0.0, height);
        }

        // Pen position after each glyph, not the bitmap edge: trailing
        // whitespace still advances.
        let w = glyphs
            .iter()
            .map(|g| {
                let m = self.font.metrics_indexed(g.key.glyph_index, self.size);
                (g.x - m.xmin as f32 + m.advance_width).max(0.0)
            })
            .fold(0.0f32, f32::max);
        Vec2::new(w, height)
    }

    /// Lays `text` out on a single line whose baseline passes through
    /// `baseline` and rasterizes each visible glyph.
    pub(crate) fn rasterize(&self, text: &str, baseline: Point) -> Vec<GlyphBitmap> {
        let layout = self.layout(text, baseline.x, baseline.y - self.ascent());
        layout
            .glyphs()
            .iter()
            .filter(|g| g.width > 0 && g.height > 0)
            .map(|g| {
                let (metrics, coverage) = self.font.rasterize_config(g.key);
                GlyphBitmap {
                    x: g.x.round() as i32,
                    y: g.y.round() as i32,
                    width: metrics.width,
                    height: metrics.height,
                    coverage,
                }
            })
            .collect()
    }

    fn layout(&self, text: &str, x: f32, y: f32) -> Layout<()> {
        let mut layout: Layout<()> = Layout::new(CoordinateSystem::PositiveYDown);
        layout.reset(&LayoutSettings { x, y, ..LayoutSettings::default() });
        layout.append(&[&self.font], &TextStyle::new(text, self.size, 0));
        layout
    }
}

impl fmt::Debug for FontFace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FontFace").field("size", &self.size).finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn garbage_bytes_fail_to_load() {
        let err =
            FontFace::from_bytes(b"definitely not a font", FontFace::DEFAULT_SIZE).unwrap_err();
        assert!(err.to_string().starts_with("font load error"));
    }

    #[test]
    fn non_positive_size_is_rejected_before_parsing() {
        let err = FontFace::from_bytes(&[], 0.0).unwrap_err();
        assert!(err.0.contains("positive"));
    }
}
