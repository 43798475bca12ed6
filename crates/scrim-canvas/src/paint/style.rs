use core::str::FromStr;

use crate::CanvasError;

/// How a primitive or flushed path covers pixels.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub enum PaintStyle {
    /// Paint the enclosed region.
    #[default]
    Fill,
    /// Paint the outline using the current stroke width.
    Stroke,
}

impl PaintStyle {
    pub const fn as_str(self) -> &'static str {
        match self {
            PaintStyle::Fill => "fill",
            PaintStyle::Stroke => "stroke",
        }
    }
}

impl FromStr for PaintStyle {
    type Err = CanvasError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "fill" => Ok(PaintStyle::Fill),
            "stroke" => Ok(PaintStyle::Stroke),
            other => Err(CanvasError::invalid(format!(
                "unknown paint style {other:?}, expected \"fill\" or \"stroke\""
            ))),
        }
    }
}
