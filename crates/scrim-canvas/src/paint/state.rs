use super::{Color, PaintStyle};

/// Paint state read by every draw call.
///
/// Mutated only through the canvas setters; reset to [`PaintState::default`]
/// at the start of each frame.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PaintState {
    pub color: Color,
    pub style: PaintStyle,
    pub stroke_width: f32,
}

impl Default for PaintState {
    fn default() -> Self {
        Self {
            color: Color::BLACK,
            style: PaintStyle::Fill,
            stroke_width: 1.0,
        }
    }
}

impl PaintState {
    /// Solid anti-aliased paint in the current colour.
    pub(crate) fn paint(&self) -> tiny_skia::Paint<'static> {
        let mut paint = tiny_skia::Paint::default();
        paint.set_color(self.color.to_skia());
        paint.anti_alias = true;
        paint
    }

    /// Stroke parameters, or `None` when the width cannot produce coverage.
    ///
    /// tiny-skia treats a zero width as a hairline; here a width `<= 0`
    /// means an invisible stroke instead.
    pub(crate) fn stroke(&self) -> Option<tiny_skia::Stroke> {
        if !self.stroke_width.is_finite() || self.stroke_width <= 0.0 {
            return None;
        }
        Some(tiny_skia::Stroke {
            width: self.stroke_width,
            ..tiny_skia::Stroke::default()
        })
    }
}
