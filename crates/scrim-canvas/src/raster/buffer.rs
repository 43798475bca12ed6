use tiny_skia::Pixmap;

use crate::paint::Color;
use crate::CanvasError;

/// Premultiplied RGBA pixel store backing a canvas.
pub struct PixelBuffer {
    pixmap: Pixmap,
}

impl PixelBuffer {
    /// Allocates a transparent buffer. Zero-sized buffers are rejected.
    pub fn new(width: u32, height: u32) -> Result<Self, CanvasError> {
        let pixmap = Pixmap::new(width, height).ok_or_else(|| {
            CanvasError::invalid(format!("cannot allocate a {width}x{height} pixel buffer"))
        })?;
        Ok(Self { pixmap })
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.pixmap.width()
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.pixmap.height()
    }

    /// Overwrites every pixel with `color`.
    pub fn clear(&mut self, color: Color) {
        self.pixmap.fill(color.to_skia());
    }

    /// Straight-alpha colour at `(x, y)`, or `None` outside the buffer.
    pub fn pixel(&self, x: u32, y: u32) -> Option<Color> {
        // Pixmap::pixel only checks the flat index, so x past the row end
        // would read from the next row.
        if x >= self.width() || y >= self.height() {
            return None;
        }
        self.pixmap.pixel(x, y).map(Color::from_premultiplied)
    }

    /// Straight-alpha ARGB values in row-major order.
    pub fn to_argb_pixels(&self) -> Vec<u32> {
        self.pixmap
            .pixels()
            .iter()
            .map(|&px| Color::from_premultiplied(px).argb())
            .collect()
    }

    /// Writes the buffer as little-endian premultiplied ARGB8888
    /// (`B, G, R, A` bytes per pixel), the layout of a `wl_shm` ARGB8888 pool.
    ///
    /// `out` must be exactly `width * height * 4` bytes.
    pub fn write_argb8888(&self, out: &mut [u8]) -> Result<(), CanvasError> {
        let expected = self.pixmap.data().len();
        if out.len() != expected {
            return Err(CanvasError::invalid(format!(
                "argb8888 destination is {} bytes, expected {expected}",
                out.len()
            )));
        }

        let src: &[[u8; 4]] = bytemuck::cast_slice(self.pixmap.data());
        let dst: &mut [[u8; 4]] = bytemuck::cast_slice_mut(out);
        for (d, &[r, g, b, a]) in dst.iter_mut().zip(src) {
            *d = [b, g, r, a];
        }
        Ok(())
    }

    /// Encodes the current contents as PNG.
    pub fn encode_png(&self) -> Result<Vec<u8>, CanvasError> {
        self.pixmap.encode_png().map_err(|e| CanvasError::Encode(e.to_string()))
    }

    #[inline]
    pub(crate) fn pixmap_mut(&mut self) -> &mut Pixmap {
        &mut self.pixmap
    }
}
