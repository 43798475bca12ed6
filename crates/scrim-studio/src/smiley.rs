use std::path::PathBuf;

use scrim_canvas::{Canvas, CanvasError, Color};
use scrim_host::{Anchor, ConfigError, Layer, Margin, Script, WindowOptions};

/// Demo script: a smiley face sliding along the surface.
pub struct Smiley {
    options_path: Option<PathBuf>,
}

/// Horizontal offset of the face, advanced once per frame.
#[derive(Debug, Default)]
pub struct SmileyState {
    pub x: f32,
}

impl Smiley {
    const RADIUS: f32 = 40.0;
    const SPEED: f32 = 2.0;

    pub fn new(options_path: Option<PathBuf>) -> Self {
        Self { options_path }
    }

    fn default_options() -> WindowOptions {
        WindowOptions {
            exclusive_zone: Some(0),
            margin: Some(Margin { top: 8, left: 8, ..Margin::default() }),
            namespace: Some("scrim".into()),
            ..WindowOptions::new(256, 128, Layer::Overlay, Anchor::TOP | Anchor::LEFT)
        }
    }
}

impl Script for Smiley {
    type State = SmileyState;

    fn options(&self) -> Result<WindowOptions, ConfigError> {
        match &self.options_path {
            Some(path) => WindowOptions::from_path(path),
            None => Ok(Self::default_options()),
        }
    }

    fn draw(&self, state: &mut SmileyState, canvas: &mut Canvas) -> Result<(), CanvasError> {
        let w = canvas.width() as f32;
        let h = canvas.height() as f32;
        let r = Self::RADIUS.min(h / 2.0 - 4.0).max(1.0);
        let travel = (w - 2.0 * r).max(1.0);

        state.x = (state.x + Self::SPEED) % travel;
        let cx = r + state.x;
        let cy = h / 2.0;

        canvas.clear(Color::WHITE);

        // face
        canvas.set_paint_colour(Color::YELLOW);
        canvas.draw_circle((cx, cy), r)?;
        canvas.set_paint_colour(Color::BLACK);
        canvas.set_paint_style("stroke")?;
        canvas.set_stroke_width(3.0);
        canvas.draw_circle((cx, cy), r)?;

        // eyes
        canvas.set_paint_style("fill")?;
        canvas.draw_circle((cx - r * 0.35, cy - r * 0.3), r * 0.12)?;
        canvas.draw_circle((cx + r * 0.35, cy - r * 0.3), r * 0.12)?;

        // mouth
        canvas.path_begin_from((cx - r * 0.5, cy + r * 0.2));
        canvas.path_bezier_curve_to(
            (cx - r * 0.25, cy + r * 0.6),
            (cx + r * 0.25, cy + r * 0.6),
            (cx + r * 0.5, cy + r * 0.2),
        )?;
        canvas.draw_path_stroke()?;

        // ground line and caption
        canvas.set_paint_colour(Color::BLUE);
        canvas.set_stroke_width(2.0);
        canvas.draw_line((0.0, h - 2.0), (w, h - 2.0));
        canvas.draw_text((w - 56.0, h - 8.0), "scrim");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scrim_host::{FrameOutcome, Host, MemorySurface};

    #[test]
    fn built_in_options_are_valid() {
        let o = Smiley::new(None).options().unwrap();
        o.validate().unwrap();
        assert_eq!(o.anchor.bits(), 5);
        assert_eq!(o.layer, Layer::Overlay);
    }

    #[test]
    fn missing_options_file_fails_startup() {
        let script = Smiley::new(Some("/nonexistent/scrim/options.json".into()));
        assert!(Host::new(script, MemorySurface::new()).is_err());
    }

    #[test]
    fn face_moves_between_frames() {
        let mut host = Host::new(Smiley::new(None), MemorySurface::new()).unwrap();
        for _ in 0..3 {
            assert!(matches!(host.render_frame().unwrap(), FrameOutcome::Presented(_)));
        }
        assert_eq!(host.instance().state().x, 3.0 * Smiley::SPEED);

        let cy = host.canvas().height() / 2;
        let cx = (Smiley::RADIUS + 3.0 * Smiley::SPEED) as u32;
        assert_eq!(host.canvas().pixel(cx, cy + 10), Some(Color::YELLOW));
        assert_eq!(host.canvas().pixel(0, 0), Some(Color::WHITE));
    }
}
