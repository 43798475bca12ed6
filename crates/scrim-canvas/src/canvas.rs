use std::path::Path as FsPath;

use tiny_skia::Transform;

use crate::coords::{Point, Rect, Vec2};
use crate::paint::{Color, PaintState, PaintStyle};
use crate::path::PathBuilder;
use crate::raster::{primitives, PixelBuffer};
use crate::text::FontFace;
use crate::CanvasError;

/// Drawing handle passed to the per-frame draw callback.
///
/// Composes the paint state, the path builder and the primitive renderer
/// over one pixel buffer. The host creates it once per surface and calls
/// [`Canvas::begin_frame`] before every callback; pixels persist across
/// frames, paint state, path and transform do not.
pub struct Canvas {
    buffer: PixelBuffer,
    paint: PaintState,
    path: PathBuilder,
    transform: Transform,
    font: Option<FontFace>,
    warned_missing_font: bool,
}

impl Canvas {
    /// Creates a `width` x `height` canvas cleared to white.
    pub fn new(width: u32, height: u32) -> Result<Self, CanvasError> {
        let mut buffer = PixelBuffer::new(width, height)?;
        buffer.clear(Color::WHITE);
        Ok(Self {
            buffer,
            paint: PaintState::default(),
            path: PathBuilder::new(),
            transform: Transform::identity(),
            font: None,
            warned_missing_font: false,
        })
    }

    pub fn with_font(mut self, font: FontFace) -> Self {
        self.set_font(font);
        self
    }

    /// Replaces the face used by [`draw_text`](Self::draw_text).
    pub fn set_font(&mut self, font: FontFace) {
        self.font = Some(font);
        self.warned_missing_font = false;
    }

    #[inline]
    pub fn font(&self) -> Option<&FontFace> {
        self.font.as_ref()
    }

    /// Resets paint state, open path and transform. Pixels are kept.
    pub fn begin_frame(&mut self) {
        self.paint = PaintState::default();
        self.path.reset();
        self.transform = Transform::identity();
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.buffer.width()
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.buffer.height()
    }

    #[inline]
    pub fn paint_state(&self) -> &PaintState {
        &self.paint
    }

    #[inline]
    pub fn has_active_path(&self) -> bool {
        self.path.is_active()
    }

    #[inline]
    pub fn buffer(&self) -> &PixelBuffer {
        &self.buffer
    }

    // ── paint state ───────────────────────────────────────────────────────

    pub fn set_paint_colour(&mut self, colour: impl Into<Color>) {
        self.paint.color = colour.into();
    }

    /// Sets the style from its script name, `"fill"` or `"stroke"`.
    pub fn set_paint_style(&mut self, style: &str) -> Result<(), CanvasError> {
        self.paint.style = style.parse()?;
        Ok(())
    }

    pub fn set_style(&mut self, style: PaintStyle) {
        self.paint.style = style;
    }

    /// Widths `<= 0` are accepted; strokes drawn with them are invisible.
    pub fn set_stroke_width(&mut self, width: f32) {
        self.paint.stroke_width = width;
    }

    // ── transform ─────────────────────────────────────────────────────────

    pub fn translate(&mut self, d: impl Into<Vec2>) {
        let d = d.into();
        self.transform = self.transform.pre_translate(d.x, d.y);
    }

    pub fn scale(&mut self, s: impl Into<Vec2>) {
        let s = s.into();
        self.transform = self.transform.pre_scale(s.x, s.y);
    }

    // ── primitives ────────────────────────────────────────────────────────

    /// Fills the whole buffer with `colour`, ignoring the transform.
    pub fn clear(&mut self, colour: impl Into<Color>) {
        self.buffer.clear(colour.into());
    }

    /// Rectangle spanned by `origin` and `origin + size`; either size
    /// component may be negative.
    pub fn draw_rect(&mut self, origin: impl Into<Point>, size: impl Into<Vec2>) {
        let rect = Rect::from_origin_size(origin.into(), size.into());
        primitives::draw_rect(self.buffer.pixmap_mut(), &self.paint, self.transform, rect);
    }

    pub fn draw_circle(
        &mut self,
        center: impl Into<Point>,
        radius: f32,
    ) -> Result<(), CanvasError> {
        primitives::draw_circle(
            self.buffer.pixmap_mut(),
            &self.paint,
            self.transform,
            center.into(),
            radius,
        )
    }

    pub fn draw_line(&mut self, from: impl Into<Point>, to: impl Into<Point>) {
        primitives::draw_line(
            self.buffer.pixmap_mut(),
            &self.paint,
            self.transform,
            from.into(),
            to.into(),
        );
    }

    /// Draws `text` with its baseline starting at `origin`.
    ///
    /// Without a font this draws nothing.
    pub fn draw_text(&mut self, origin: impl Into<Point>, text: &str) {
        let Some(font) = self.font.as_ref() else {
            if !self.warned_missing_font {
                log::warn!("draw_text called with no font loaded; text is not rendered");
                self.warned_missing_font = true;
            }
            return;
        };
        primitives::draw_text(
            self.buffer.pixmap_mut(),
            self.paint.color,
            self.transform,
            font,
            origin.into(),
            text,
        );
    }

    /// Decodes the image at `path` and draws it stretched over the rectangle.
    pub fn draw_image(
        &mut self,
        origin: impl Into<Point>,
        size: impl Into<Vec2>,
        path: impl AsRef<FsPath>,
    ) -> Result<(), CanvasError> {
        let image = primitives::load_image(path.as_ref())?;
        let rect = Rect::from_origin_size(origin.into(), size.into());
        primitives::draw_image(self.buffer.pixmap_mut(), self.transform, rect, &image);
        Ok(())
    }

    /// Frame-rate label in the top-left corner: yellow box, black outline,
    /// `"{fps}fps"` text. Drawn in buffer space; paint state is restored.
    pub fn draw_fps(&mut self, fps: u32) {
        const PADDING: f32 = 4.0;
        const OUTLINE: f32 = 2.0;

        let Some(font) = self.font.as_ref() else {
            log::debug!("skipping fps overlay: no font loaded");
            return;
        };

        let label = format!("{fps}fps");
        let text = font.measure(&label);
        let offset = PADDING + OUTLINE / 2.0;
        let frame = Rect::new(
            offset - PADDING,
            offset - PADDING,
            text.x + PADDING * 2.0,
            text.y + PADDING * 2.0,
        );
        let baseline = Point::new(offset, offset + font.ascent());
        let saved = self.paint;
        let pixmap = self.buffer.pixmap_mut();
        let hud = Transform::identity();

        self.paint = PaintState {
            color: Color::YELLOW,
            style: PaintStyle::Fill,
            stroke_width: 1.0,
        };
        primitives::draw_rect(pixmap, &self.paint, hud, frame);

        self.paint = PaintState {
            color: Color::BLACK,
            style: PaintStyle::Stroke,
            stroke_width: OUTLINE,
        };
        primitives::draw_rect(pixmap, &self.paint, hud, frame);

        primitives::draw_text(pixmap, Color::BLACK, hud, font, baseline, &label);

        self.paint = saved;
    }

    // ── path ──────────────────────────────────────────────────────────────

    /// Starts a new path at `p`, dropping any unflushed one.
    pub fn path_begin_from(&mut self, p: impl Into<Point>) {
        self.path.begin_from(p.into());
    }

    pub fn path_line_to(&mut self, p: impl Into<Point>) -> Result<(), CanvasError> {
        self.path.line_to(p.into())
    }

    pub fn path_quad_to(
        &mut self,
        ctrl: impl Into<Point>,
        end: impl Into<Point>,
    ) -> Result<(), CanvasError> {
        self.path.quad_to(ctrl.into(), end.into())
    }

    pub fn path_bezier_curve_to(
        &mut self,
        ctrl1: impl Into<Point>,
        ctrl2: impl Into<Point>,
        end: impl Into<Point>,
    ) -> Result<(), CanvasError> {
        self.path.bezier_curve_to(ctrl1.into(), ctrl2.into(), end.into())
    }

    pub fn path_close(&mut self) -> Result<(), CanvasError> {
        self.path.close()
    }

    /// Strokes the open path with the current colour and width, whatever the
    /// style field holds, then discards the path.
    pub fn draw_path_stroke(&mut self) -> Result<(), CanvasError> {
        let path = self.path.take()?;
        primitives::stroke_path(self.buffer.pixmap_mut(), &self.paint, self.transform, &path);
        Ok(())
    }

    /// Fills the open path with the current colour, then discards the path.
    pub fn draw_path_fill(&mut self) -> Result<(), CanvasError> {
        let path = self.path.take()?;
        primitives::fill_path(self.buffer.pixmap_mut(), &self.paint, self.transform, &path);
        Ok(())
    }

    // ── readback ──────────────────────────────────────────────────────────

    #[inline]
    pub fn pixel(&self, x: u32, y: u32) -> Option<Color> {
        self.buffer.pixel(x, y)
    }

    pub fn to_argb_pixels(&self) -> Vec<u32> {
        self.buffer.to_argb_pixels()
    }

    pub fn write_argb8888(&self, out: &mut [u8]) -> Result<(), CanvasError> {
        self.buffer.write_argb8888(out)
    }

    pub fn encode_png(&self) -> Result<Vec<u8>, CanvasError> {
        self.buffer.encode_png()
    }
}

impl std::fmt::Debug for Canvas {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Canvas")
            .field("width", &self.width())
            .field("height", &self.height())
            .field("paint", &self.paint)
            .field("path", &self.path.current())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn canvas() -> Canvas {
        Canvas::new(32, 32).unwrap()
    }

    fn non_white(c: &Canvas) -> Vec<(u32, u32)> {
        let mut out = Vec::new();
        for y in 0..c.height() {
            for x in 0..c.width() {
                if c.pixel(x, y) != Some(Color::WHITE) {
                    out.push((x, y));
                }
            }
        }
        out
    }

    const SYSTEM_FONTS: &[&str] = &[
        "/usr/share/fonts/TTF/DejaVuSansMono.ttf",
        "/usr/share/fonts/truetype/dejavu/DejaVuSansMono.ttf",
        "/usr/share/fonts/dejavu/DejaVuSansMono.ttf",
        "/usr/share/fonts/TTF/DejaVuSans.ttf",
        "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
        "/usr/share/fonts/noto/NotoSans-Regular.ttf",
        "/usr/share/fonts/truetype/noto/NotoSans-Regular.ttf",
    ];

    /// First readable system font; text tests are skipped without one.
    fn system_font() -> Option<FontFace> {
        let bytes = SYSTEM_FONTS.iter().find_map(|p| std::fs::read(p).ok());
        if bytes.is_none() {
            eprintln!("no system font found; skipping");
        }
        FontFace::from_bytes(&bytes?, FontFace::DEFAULT_SIZE).ok()
    }

    /// Anti-aliased edges may land a step off the exact colour.
    fn painted(c: &Canvas, x: u32, y: u32, want: Color) -> bool {
        let Some(got) = c.pixel(x, y) else { return false };
        let near = |a: u8, b: u8| a.abs_diff(b) <= 2;
        near(got.alpha(), want.alpha())
            && near(got.red(), want.red())
            && near(got.green(), want.green())
            && near(got.blue(), want.blue())
    }

    // ── frame lifecycle ───────────────────────────────────────────────────

    #[test]
    fn new_canvas_is_white() {
        assert!(non_white(&canvas()).is_empty());
    }

    #[test]
    fn begin_frame_resets_state_but_keeps_pixels() {
        let mut c = canvas();
        c.set_paint_colour(Color::RED);
        c.draw_rect((0.0, 0.0), (4.0, 4.0));
        c.set_style(PaintStyle::Stroke);
        c.set_stroke_width(7.0);
        c.translate((10.0, 10.0));
        c.path_begin_from((1.0, 1.0));

        c.begin_frame();

        assert_eq!(*c.paint_state(), PaintState::default());
        assert!(!c.has_active_path());
        assert_eq!(c.pixel(1, 1), Some(Color::RED));

        c.draw_rect((20.0, 20.0), (2.0, 2.0));
        assert_eq!(c.pixel(20, 20), Some(Color::BLACK), "transform must be identity again");
    }

    // ── paint state ───────────────────────────────────────────────────────

    #[test]
    fn last_colour_wins() {
        let mut c = canvas();
        c.set_paint_colour(Color::RED);
        c.set_paint_colour(Color::GREEN);
        c.set_paint_colour(0xFF00_00FFu32);
        c.draw_rect((0.0, 0.0), (8.0, 8.0));
        assert_eq!(c.pixel(4, 4), Some(Color::BLUE));
    }

    #[test]
    fn paint_style_strings() {
        let mut c = canvas();
        c.set_paint_style("stroke").unwrap();
        assert_eq!(c.paint_state().style, PaintStyle::Stroke);
        assert!(matches!(c.set_paint_style("dotted"), Err(CanvasError::InvalidArgument(_))));
        assert_eq!(c.paint_state().style, PaintStyle::Stroke, "failed call must not change state");
    }

    #[test]
    fn non_positive_stroke_width_draws_nothing() {
        let mut c = canvas();
        c.set_style(PaintStyle::Stroke);
        for w in [0.0, -2.0] {
            c.set_stroke_width(w);
            c.draw_rect((4.0, 4.0), (10.0, 10.0));
            c.draw_line((0.0, 16.0), (32.0, 16.0));
        }
        assert!(non_white(&c).is_empty());
    }

    // ── primitives ────────────────────────────────────────────────────────

    #[test]
    fn blue_rect_on_white_touches_only_its_pixels() {
        let mut c = canvas();
        c.clear(Color::WHITE);
        c.set_paint_colour(Color::BLUE);
        c.draw_rect((0.0, 0.0), (10.0, 10.0));

        let touched = non_white(&c);
        assert_eq!(touched.len(), 100);
        for (x, y) in touched {
            assert!(x < 10 && y < 10, "({x}, {y}) outside rect");
            assert_eq!(c.pixel(x, y), Some(Color::BLUE));
        }
    }

    #[test]
    fn mirrored_rects_cover_the_same_pixels() {
        let mut a = canvas();
        let mut b = canvas();
        a.draw_rect((2.5, 3.25), (7.5, 4.5));
        b.draw_rect((10.0, 7.75), (-7.5, -4.5));
        assert_eq!(a.to_argb_pixels(), b.to_argb_pixels());

        a.set_style(PaintStyle::Stroke);
        b.set_style(PaintStyle::Stroke);
        a.draw_rect((14.0, 14.0), (12.0, 8.0));
        b.draw_rect((26.0, 14.0), (-12.0, 8.0));
        assert_eq!(a.to_argb_pixels(), b.to_argb_pixels());
    }

    #[test]
    fn stroked_rect_leaves_interior() {
        let mut c = canvas();
        c.set_style(PaintStyle::Stroke);
        c.set_stroke_width(2.0);
        c.draw_rect((4.0, 4.0), (20.0, 20.0));
        assert!(painted(&c, 4, 14, Color::BLACK));
        assert_eq!(c.pixel(14, 14), Some(Color::WHITE));
    }

    #[test]
    fn negative_radius_is_invalid() {
        let mut c = canvas();
        assert!(matches!(
            c.draw_circle((16.0, 16.0), -1.0),
            Err(CanvasError::InvalidArgument(_))
        ));
        assert!(matches!(
            c.draw_circle((16.0, 16.0), f32::NAN),
            Err(CanvasError::InvalidArgument(_))
        ));
        assert!(non_white(&c).is_empty());
    }

    #[test]
    fn zero_radius_draws_nothing() {
        let mut c = canvas();
        c.draw_circle((16.0, 16.0), 0.0).unwrap();
        c.set_style(PaintStyle::Stroke);
        c.draw_circle((16.0, 16.0), 0.0).unwrap();
        assert!(non_white(&c).is_empty());
    }

    #[test]
    fn filled_circle_covers_centre_not_corners() {
        let mut c = canvas();
        c.set_paint_colour(Color::RED);
        c.draw_circle((16.0, 16.0), 8.0).unwrap();
        assert!(painted(&c, 16, 16, Color::RED));
        assert_eq!(c.pixel(0, 0), Some(Color::WHITE));
        assert_eq!(c.pixel(31, 31), Some(Color::WHITE));
    }

    #[test]
    fn line_is_stroked_even_in_fill_style() {
        let mut c = canvas();
        c.set_style(PaintStyle::Fill);
        c.set_stroke_width(4.0);
        c.set_paint_colour(Color::GREEN);
        c.draw_line((2.0, 10.0), (30.0, 10.0));
        assert!(painted(&c, 16, 10, Color::GREEN));
        assert_eq!(c.pixel(16, 20), Some(Color::WHITE));
    }

    #[test]
    fn translate_moves_subsequent_draws() {
        let mut c = canvas();
        c.translate((10.0, 10.0));
        c.draw_rect((0.0, 0.0), (5.0, 5.0));
        assert!(painted(&c, 12, 12, Color::BLACK));
        assert_eq!(c.pixel(2, 2), Some(Color::WHITE));
    }

    #[test]
    fn scale_grows_subsequent_draws() {
        let mut c = canvas();
        c.scale((2.0, 2.0));
        c.draw_rect((0.0, 0.0), (5.0, 5.0));
        assert!(painted(&c, 8, 8, Color::BLACK));
        assert_eq!(c.pixel(12, 12), Some(Color::WHITE));
    }

    #[test]
    fn clear_ignores_transform() {
        let mut c = canvas();
        c.translate((100.0, 100.0));
        c.clear(Color::RED);
        assert_eq!(c.pixel(0, 0), Some(Color::RED));
    }

    #[test]
    fn text_without_font_is_a_no_op() {
        let mut c = canvas();
        c.draw_text((2.0, 20.0), "hello");
        c.draw_text((2.0, 20.0), "again");
        c.draw_fps(60);
        assert!(non_white(&c).is_empty());
    }

    #[test]
    fn zero_width_rect_fills_nothing_but_strokes_a_line() {
        let mut c = canvas();
        c.draw_rect((10.0, 4.0), (0.0, 20.0));
        assert!(non_white(&c).is_empty());

        c.set_style(PaintStyle::Stroke);
        c.set_stroke_width(2.0);
        c.draw_rect((10.0, 4.0), (0.0, 20.0));
        assert!(painted(&c, 10, 14, Color::BLACK));
        assert!(painted(&c, 9, 14, Color::BLACK));
        assert_eq!(c.pixel(14, 14), Some(Color::WHITE));
    }

    #[test]
    fn text_paints_above_baseline_in_current_colour() {
        let Some(font) = system_font() else { return };
        let mut c = Canvas::new(64, 32).unwrap().with_font(font);
        c.set_paint_colour(Color::RED);
        c.draw_text((2.0, 20.0), "Hi");

        let touched = non_white(&c);
        assert!(!touched.is_empty());
        for &(x, y) in &touched {
            assert!(y < 20 && x >= 2, "({x}, {y}) outside the text box");
            let px = c.pixel(x, y).unwrap();
            assert!(px.red() >= 250, "{px:?} is not a red tint");
            assert!(px.green().abs_diff(px.blue()) <= 1, "{px:?} is not a red tint");
        }
        assert!(touched.iter().any(|&(x, y)| c.pixel(x, y).unwrap().green() < 128));
    }

    #[test]
    fn measure_grows_with_text() {
        let Some(font) = system_font() else { return };
        let short = font.measure("Hi");
        let long = font.measure("Hi Hi");
        assert!(short.x > 0.0);
        assert!(long.x > short.x);
        assert_eq!(short.y, font.ascent() + font.descent());
        assert_eq!(font.measure("").x, 0.0);
    }

    #[test]
    fn fps_overlay_draws_yellow_box_and_restores_paint() {
        let Some(font) = system_font() else { return };
        let mut c = Canvas::new(96, 48).unwrap().with_font(font);
        c.set_paint_colour(Color::RED);
        c.set_style(PaintStyle::Stroke);
        c.set_stroke_width(3.0);
        c.translate((40.0, 40.0));

        c.draw_fps(60);

        assert!(painted(&c, 1, 1, Color::BLACK), "outline");
        assert_eq!(c.pixel(3, 3), Some(Color::YELLOW));
        assert_eq!(c.pixel(95, 47), Some(Color::WHITE));
        assert_eq!(
            *c.paint_state(),
            PaintState {
                color: Color::RED,
                style: PaintStyle::Stroke,
                stroke_width: 3.0,
            }
        );
    }

    #[test]
    fn image_is_stretched_over_its_rect() {
        let name = format!("scrim-canvas-{}-red.png", std::process::id());
        let path = std::env::temp_dir().join(name);
        image::RgbaImage::from_pixel(2, 2, image::Rgba([255, 0, 0, 255]))
            .save(&path)
            .unwrap();

        let mut c = canvas();
        let drawn = c.draw_image((4.0, 4.0), (10.0, 10.0), &path);
        let _ = std::fs::remove_file(&path);
        drawn.unwrap();

        for y in 5..13 {
            for x in 5..13 {
                assert!(painted(&c, x, y, Color::RED), "({x}, {y}) not covered");
            }
        }
        for (x, y) in non_white(&c) {
            assert!((3..=14).contains(&x) && (3..=14).contains(&y), "({x}, {y}) outside rect");
        }
        assert_eq!(c.pixel(20, 20), Some(Color::WHITE));
    }

    #[test]
    fn missing_image_reports_error() {
        let mut c = canvas();
        let err = c
            .draw_image((0.0, 0.0), (8.0, 8.0), "/nonexistent/scrim/image.png")
            .unwrap_err();
        assert!(matches!(err, CanvasError::Image(_)));
        assert!(non_white(&c).is_empty());
    }

    // ── path ──────────────────────────────────────────────────────────────

    #[test]
    fn bezier_without_begin_fails() {
        let mut c = canvas();
        let r = c.path_bezier_curve_to((0.0, 0.0), (1.0, 1.0), (2.0, 2.0));
        assert_eq!(r, Err(CanvasError::NoActivePath));
    }

    #[test]
    fn flush_discards_the_path() {
        let mut c = canvas();
        c.path_begin_from((4.0, 4.0));
        c.path_bezier_curve_to((4.0, 20.0), (20.0, 20.0), (20.0, 4.0)).unwrap();
        c.draw_path_stroke().unwrap();
        assert_eq!(
            c.path_bezier_curve_to((0.0, 0.0), (1.0, 1.0), (2.0, 2.0)),
            Err(CanvasError::NoActivePath)
        );

        c.path_begin_from((4.0, 4.0));
        c.path_line_to((20.0, 4.0)).unwrap();
        c.draw_path_fill().unwrap();
        assert_eq!(c.path_line_to((1.0, 1.0)), Err(CanvasError::NoActivePath));
    }

    #[test]
    fn second_flush_of_same_path_fails() {
        let mut c = canvas();
        c.path_begin_from((2.0, 2.0));
        c.path_line_to((30.0, 2.0)).unwrap();
        c.draw_path_stroke().unwrap();
        assert_eq!(c.draw_path_fill(), Err(CanvasError::NoActivePath));
    }

    #[test]
    fn flush_without_segments_is_a_successful_no_op() {
        let mut c = canvas();
        c.path_begin_from((16.0, 16.0));
        c.draw_path_fill().unwrap();
        c.path_begin_from((16.0, 16.0));
        c.draw_path_stroke().unwrap();
        assert!(non_white(&c).is_empty());
    }

    #[test]
    fn path_fill_covers_interior() {
        let mut c = canvas();
        c.set_paint_colour(Color::MAGENTA);
        c.path_begin_from((4.0, 4.0));
        c.path_line_to((28.0, 4.0)).unwrap();
        c.path_line_to((28.0, 28.0)).unwrap();
        c.path_line_to((4.0, 28.0)).unwrap();
        c.path_close().unwrap();
        c.draw_path_fill().unwrap();
        assert!(painted(&c, 16, 16, Color::MAGENTA));
        assert_eq!(c.pixel(1, 1), Some(Color::WHITE));
    }

    #[test]
    fn path_stroke_keeps_style_field() {
        let mut c = canvas();
        c.set_style(PaintStyle::Fill);
        c.set_stroke_width(4.0);
        c.path_begin_from((2.0, 16.0));
        c.path_quad_to((16.0, 16.0), (30.0, 16.0)).unwrap();
        c.draw_path_stroke().unwrap();
        assert_eq!(c.paint_state().style, PaintStyle::Fill);
        assert!(painted(&c, 16, 16, Color::BLACK));
    }

    #[test]
    fn failed_call_does_not_disturb_other_state() {
        let mut c = canvas();
        c.set_paint_colour(Color::RED);
        c.path_begin_from((0.0, 0.0));
        assert!(c.draw_circle((5.0, 5.0), -3.0).is_err());
        assert!(c.has_active_path());
        assert_eq!(c.paint_state().color, Color::RED);
    }
}
