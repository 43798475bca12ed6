use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use scrim_host::{AppControl, Frame, Surface, WindowOptions};

/// Surface writing presented frames as numbered PNG files.
pub struct PngSequence {
    dir: PathBuf,
    every: u64,
    presented: u64,
    written: u64,
}

impl PngSequence {
    pub fn new(dir: &Path, every: u64) -> Result<Self> {
        fs::create_dir_all(dir).with_context(|| format!("cannot create {}", dir.display()))?;
        Ok(Self {
            dir: dir.to_path_buf(),
            every: every.max(1),
            presented: 0,
            written: 0,
        })
    }

    pub fn written(&self) -> u64 {
        self.written
    }
}

impl Surface for PngSequence {
    fn configure(&mut self, options: &WindowOptions) -> Result<()> {
        let margin = options.effective_margin();
        log::info!(
            "png surface {}x{} (layer {}, exclusive zone {}, margin {:?})",
            options.width,
            options.height,
            options.layer,
            options.effective_exclusive_zone(),
            <(i32, i32, i32, i32)>::from(margin),
        );
        Ok(())
    }

    fn present(&mut self, frame: &Frame<'_>) -> Result<AppControl> {
        let index = self.presented;
        self.presented += 1;
        if index % self.every != 0 {
            return Ok(AppControl::Continue);
        }

        let path = self.dir.join(format!("frame-{:05}.png", frame.time.frame_index));
        let png = frame.canvas.encode_png()?;
        fs::write(&path, png).with_context(|| format!("cannot write {}", path.display()))?;
        self.written += 1;
        log::trace!("wrote {}", path.display());
        Ok(AppControl::Continue)
    }
}
