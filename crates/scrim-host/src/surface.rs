use anyhow::{ensure, Result};
use scrim_canvas::Canvas;

use crate::config::WindowOptions;
use crate::host::AppControl;
use crate::time::FrameTime;

/// A finished frame handed to the surface for presentation.
pub struct Frame<'a> {
    pub time: FrameTime,
    pub canvas: &'a Canvas,
}

/// Window backend seam.
///
/// A layer-shell client, an image sink or a test double implements this;
/// the host drives it. Both calls happen on the render thread.
pub trait Surface {
    /// Creates or reconfigures the window. Called once before the first frame.
    fn configure(&mut self, options: &WindowOptions) -> Result<()>;

    /// Presents a finished frame. Returning [`AppControl::Exit`] stops the host.
    fn present(&mut self, frame: &Frame<'_>) -> Result<AppControl>;
}

/// Headless surface that keeps the last presented frame as ARGB8888 bytes.
#[derive(Debug, Default)]
pub struct MemorySurface {
    options: Option<WindowOptions>,
    pixels: Vec<u8>,
    presented: u64,
    close_after: Option<u64>,
}

impl MemorySurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Asks the host to exit once `frames` frames were presented.
    pub fn close_after(mut self, frames: u64) -> Self {
        self.close_after = Some(frames);
        self
    }

    #[inline]
    pub fn options(&self) -> Option<&WindowOptions> {
        self.options.as_ref()
    }

    /// Last presented frame, `B, G, R, A` per pixel. Empty before the first present.
    #[inline]
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    #[inline]
    pub fn presented(&self) -> u64 {
        self.presented
    }
}

impl Surface for MemorySurface {
    fn configure(&mut self, options: &WindowOptions) -> Result<()> {
        self.pixels = vec![0; options.frame_len()];
        self.options = Some(options.clone());
        Ok(())
    }

    fn present(&mut self, frame: &Frame<'_>) -> Result<AppControl> {
        ensure!(self.options.is_some(), "present called before configure");
        frame.canvas.write_argb8888(&mut self.pixels)?;
        self.presented += 1;

        match self.close_after {
            Some(n) if self.presented >= n => Ok(AppControl::Exit),
            _ => Ok(AppControl::Continue),
        }
    }
}
