//! Immediate draw operations.
//!
//! Each function renders straight into the pixmap using the paint state it
//! is given. None of them keep state between calls.

use std::path::Path as FsPath;

use tiny_skia::{FillRule, FilterQuality, IntSize, Pixmap, PixmapPaint, Transform};

use crate::coords::{Point, Rect};
use crate::paint::{Color, PaintState, PaintStyle};
use crate::path::Path;
use crate::text::FontFace;
use crate::CanvasError;

/// Rectangle, filled or stroked per `paint.style`. Negative sizes are normalized.
pub(crate) fn draw_rect(pixmap: &mut Pixmap, paint: &PaintState, transform: Transform, rect: Rect) {
    let Some(r) = rect.to_skia() else {
        return;
    };
    match paint.style {
        PaintStyle::Fill => pixmap.fill_rect(r, &paint.paint(), transform, None),
        PaintStyle::Stroke => {
            stroke_skia_path(pixmap, paint, transform, &tiny_skia::PathBuilder::from_rect(r))
        }
    }
}

/// Circle, filled or stroked per `paint.style`.
///
/// Negative or NaN radii are rejected; a zero radius draws nothing.
pub(crate) fn draw_circle(
    pixmap: &mut Pixmap,
    paint: &PaintState,
    transform: Transform,
    center: Point,
    radius: f32,
) -> Result<(), CanvasError> {
    if radius.is_nan() || radius < 0.0 {
        return Err(CanvasError::invalid(format!(
            "circle radius must be >= 0, got {radius}"
        )));
    }
    if radius == 0.0 {
        return Ok(());
    }
    let Some(path) = tiny_skia::PathBuilder::from_circle(center.x, center.y, radius) else {
        return Ok(());
    };
    match paint.style {
        PaintStyle::Fill => fill_skia_path(pixmap, paint, transform, &path),
        PaintStyle::Stroke => stroke_skia_path(pixmap, paint, transform, &path),
    }
    Ok(())
}

/// Line segment. Always stroked, whatever `paint.style` says.
pub(crate) fn draw_line(
    pixmap: &mut Pixmap,
    paint: &PaintState,
    transform: Transform,
    from: Point,
    to: Point,
) {
    let mut pb = tiny_skia::PathBuilder::new();
    pb.move_to(from.x, from.y);
    pb.line_to(to.x, to.y);
    if let Some(path) = pb.finish() {
        stroke_skia_path(pixmap, paint, transform, &path);
    }
}

/// Outline of an accumulated path. An empty path renders nothing.
pub(crate) fn stroke_path(
    pixmap: &mut Pixmap,
    paint: &PaintState,
    transform: Transform,
    path: &Path,
) {
    if let Some(path) = path.to_skia() {
        stroke_skia_path(pixmap, paint, transform, &path);
    }
}

/// Interior of an accumulated path (non-zero winding). An empty path renders nothing.
pub(crate) fn fill_path(
    pixmap: &mut Pixmap,
    paint: &PaintState,
    transform: Transform,
    path: &Path,
) {
    if let Some(path) = path.to_skia() {
        fill_skia_path(pixmap, paint, transform, &path);
    }
}

/// Text with its baseline starting at `origin`, in `color`.
pub(crate) fn draw_text(
    pixmap: &mut Pixmap,
    color: Color,
    transform: Transform,
    font: &FontFace,
    origin: Point,
    text: &str,
) {
    for glyph in font.rasterize(text, origin) {
        let Some(mut tile) = Pixmap::new(glyph.width as u32, glyph.height as u32) else {
            continue;
        };
        for (dst, &cov) in tile.pixels_mut().iter_mut().zip(&glyph.coverage) {
            *dst = color.premultiplied(cov);
        }
        pixmap.draw_pixmap(
            glyph.x,
            glyph.y,
            tile.as_ref(),
            &PixmapPaint::default(),
            transform,
            None,
        );
    }
}

/// Draws `image` stretched over `rect`.
pub(crate) fn draw_image(pixmap: &mut Pixmap, transform: Transform, rect: Rect, image: &Pixmap) {
    let Some(r) = rect.to_skia() else {
        return;
    };
    let sx = r.width() / image.width() as f32;
    let sy = r.height() / image.height() as f32;
    let paint = PixmapPaint {
        quality: FilterQuality::Bilinear,
        ..PixmapPaint::default()
    };
    let placed = transform.pre_translate(r.x(), r.y()).pre_scale(sx, sy);
    pixmap.draw_pixmap(0, 0, image.as_ref(), &paint, placed, None);
}

/// Reads and decodes an image file into a premultiplied pixmap.
pub(crate) fn load_image(path: &FsPath) -> Result<Pixmap, CanvasError> {
    let decoded = image::open(path)
        .map_err(|e| CanvasError::Image(format!("{}: {e}", path.display())))?
        .to_rgba8();
    let (w, h) = decoded.dimensions();
    let mut data = decoded.into_raw();

    for px in bytemuck::cast_slice_mut::<u8, [u8; 4]>(&mut data) {
        let a = px[3] as u16;
        for c in &mut px[..3] {
            *c = ((*c as u16 * a) / 255) as u8;
        }
    }

    IntSize::from_wh(w, h)
        .and_then(|size| Pixmap::from_vec(data, size))
        .ok_or_else(|| CanvasError::Image(format!("{}: empty image", path.display())))
}

fn fill_skia_path(
    pixmap: &mut Pixmap,
    paint: &PaintState,
    transform: Transform,
    path: &tiny_skia::Path,
) {
    pixmap.fill_path(path, &paint.paint(), FillRule::Winding, transform, None);
}

fn stroke_skia_path(
    pixmap: &mut Pixmap,
    paint: &PaintState,
    transform: Transform,
    path: &tiny_skia::Path,
) {
    let Some(stroke) = paint.stroke() else {
        return;
    };
    pixmap.stroke_path(path, &paint.paint(), &stroke, transform, None);
}
