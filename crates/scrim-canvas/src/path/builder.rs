use crate::coords::Point;
use crate::CanvasError;

use super::{Path, PathSegment};

/// Holds the canvas' single in-progress path.
///
/// States: idle (no path) and open. `begin_from` opens (dropping any open
/// path), `take` flushes back to idle. Segment appends while idle fail with
/// [`CanvasError::NoActivePath`].
#[derive(Debug, Default)]
pub struct PathBuilder {
    current: Option<Path>,
}

impl PathBuilder {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a new path at `start`, discarding any unflushed one.
    pub fn begin_from(&mut self, start: Point) {
        if let Some(old) = self.current.replace(Path::new(start)) {
            if !old.is_empty() {
                log::trace!("dropping unflushed path with {} segment(s)", old.segments.len());
            }
        }
    }

    pub fn line_to(&mut self, p: Point) -> Result<(), CanvasError> {
        self.push(PathSegment::LineTo(p))
    }

    pub fn quad_to(&mut self, ctrl: Point, end: Point) -> Result<(), CanvasError> {
        self.push(PathSegment::QuadTo { ctrl, end })
    }

    pub fn bezier_curve_to(
        &mut self,
        ctrl1: Point,
        ctrl2: Point,
        end: Point,
    ) -> Result<(), CanvasError> {
        self.push(PathSegment::CubicTo { ctrl1, ctrl2, end })
    }

    pub fn close(&mut self) -> Result<(), CanvasError> {
        self.push(PathSegment::Close)
    }

    /// Removes and returns the open path for flushing.
    pub fn take(&mut self) -> Result<Path, CanvasError> {
        self.current.take().ok_or(CanvasError::NoActivePath)
    }

    #[inline]
    pub fn current(&self) -> Option<&Path> {
        self.current.as_ref()
    }

    #[inline]
    pub fn is_active(&self) -> bool {
        self.current.is_some()
    }

    /// Drops any open path without rendering it.
    #[inline]
    pub fn reset(&mut self) {
        self.current = None;
    }

    fn push(&mut self, seg: PathSegment) -> Result<(), CanvasError> {
        let path = self.current.as_mut().ok_or(CanvasError::NoActivePath)?;
        path.segments.push(seg);
        Ok(())
    }
}
