use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use scrim_canvas::{Canvas, CanvasError, FontFace};

use crate::config::WindowOptions;
use crate::script::{Script, ScriptInstance};
use crate::surface::{Frame, Surface};
use crate::time::FrameClock;

/// Control directive returned by surfaces after presenting.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum AppControl {
    Continue,
    Exit,
}

/// Result of one [`Host::render_frame`] call.
#[derive(Debug, Clone, PartialEq)]
pub enum FrameOutcome {
    /// The script finished and the surface showed the frame.
    Presented(AppControl),
    /// The script failed; nothing was presented for this frame.
    Skipped(CanvasError),
}

/// Running totals kept by the host.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub struct FrameStats {
    pub presented: u64,
    pub skipped: u64,
}

/// Frame driver: owns the canvas, the script instance and the surface.
///
/// Per frame: reset canvas state, run the script, optionally draw the fps
/// overlay, present. A failing script skips presentation for that frame
/// only; the next frame starts from a clean paint state.
pub struct Host<S: Script, O: Surface> {
    instance: ScriptInstance<S>,
    surface: O,
    canvas: Canvas,
    options: WindowOptions,
    clock: FrameClock,
    stats: FrameStats,
    show_fps: bool,
    frame_interval: Option<Duration>,
}

impl<S: Script, O: Surface> Host<S, O> {
    /// Reads the script's options once, then configures the surface and
    /// allocates the canvas. Configuration errors abort here.
    pub fn new(script: S, mut surface: O) -> Result<Self> {
        let options = script.options().context("script options rejected")?;
        options.validate().context("script options rejected")?;

        surface
            .configure(&options)
            .context("failed to configure surface")?;
        let canvas = Canvas::new(options.width, options.height)
            .context("failed to allocate canvas")?;

        log::info!(
            "surface {}x{} on layer {} (anchor {:?}, namespace {:?})",
            options.width,
            options.height,
            options.layer,
            options.anchor.edges(),
            options.namespace,
        );

        Ok(Self {
            instance: ScriptInstance::new(script),
            surface,
            canvas,
            options,
            clock: FrameClock::new(),
            stats: FrameStats::default(),
            show_fps: false,
            frame_interval: None,
        })
    }

    /// Sets the face used by `draw_text` and the fps overlay.
    pub fn with_font(mut self, font: FontFace) -> Self {
        self.canvas.set_font(font);
        self
    }

    pub fn show_fps(mut self, show: bool) -> Self {
        self.show_fps = show;
        self
    }

    /// Minimum wall time between frames in [`run`](Self::run). `None` renders back to back.
    pub fn frame_interval(mut self, interval: Option<Duration>) -> Self {
        self.frame_interval = interval;
        self
    }

    #[inline]
    pub fn options(&self) -> &WindowOptions {
        &self.options
    }

    #[inline]
    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    #[inline]
    pub fn surface(&self) -> &O {
        &self.surface
    }

    #[inline]
    pub fn instance(&self) -> &ScriptInstance<S> {
        &self.instance
    }

    #[inline]
    pub fn stats(&self) -> FrameStats {
        self.stats
    }

    /// Renders and presents one frame.
    ///
    /// Script failures are reported in the outcome, not as `Err`; `Err`
    /// means the surface itself failed.
    pub fn render_frame(&mut self) -> Result<FrameOutcome> {
        let time = self.clock.tick();
        self.canvas.begin_frame();

        if let Err(err) = self.instance.draw(&mut self.canvas) {
            self.stats.skipped += 1;
            log::warn!("frame {} skipped: {err}", time.frame_index);
            return Ok(FrameOutcome::Skipped(err));
        }

        if self.show_fps {
            self.canvas.draw_fps(self.clock.fps().round() as u32);
        }

        let control = self
            .surface
            .present(&Frame { time, canvas: &self.canvas })
            .with_context(|| format!("failed to present frame {}", time.frame_index))?;
        self.stats.presented += 1;
        Ok(FrameOutcome::Presented(control))
    }

    /// Renders until the surface asks to exit or `max_frames` frames were
    /// attempted (skipped frames count).
    pub fn run(&mut self, max_frames: Option<u64>) -> Result<FrameStats> {
        let mut attempted = 0u64;
        loop {
            if max_frames.is_some_and(|max| attempted >= max) {
                break;
            }
            let started = Instant::now();
            attempted += 1;

            if let FrameOutcome::Presented(AppControl::Exit) = self.render_frame()? {
                log::info!("surface requested exit");
                break;
            }

            if let Some(interval) = self.frame_interval {
                if let Some(rest) = interval.checked_sub(started.elapsed()) {
                    std::thread::sleep(rest);
                }
            }
        }

        log::debug!(
            "host stopped: {} presented, {} skipped",
            self.stats.presented,
            self.stats.skipped
        );
        Ok(self.stats)
    }
}
