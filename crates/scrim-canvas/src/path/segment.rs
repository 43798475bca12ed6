use crate::coords::Point;

/// One drawing step after the path's start point.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum PathSegment {
    LineTo(Point),
    QuadTo { ctrl: Point, end: Point },
    CubicTo { ctrl1: Point, ctrl2: Point, end: Point },
    /// Closes the current contour back to its start.
    Close,
}

/// Accumulated geometry awaiting a stroke or fill flush.
#[derive(Debug, Clone, PartialEq)]
pub struct Path {
    pub start: Point,
    pub segments: Vec<PathSegment>,
}

impl Path {
    #[inline]
    pub fn new(start: Point) -> Self {
        Self { start, segments: Vec::new() }
    }

    /// True when nothing but the start point has been recorded.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Builds the rasterizer path. `None` when there is nothing to render.
    pub(crate) fn to_skia(&self) -> Option<tiny_skia::Path> {
        if self.is_empty() {
            return None;
        }

        let mut pb = tiny_skia::PathBuilder::new();
        pb.move_to(self.start.x, self.start.y);
        for seg in &self.segments {
            match *seg {
                PathSegment::LineTo(p) => pb.line_to(p.x, p.y),
                PathSegment::QuadTo { ctrl, end } => pb.quad_to(ctrl.x, ctrl.y, end.x, end.y),
                PathSegment::CubicTo { ctrl1, ctrl2, end } => {
                    pb.cubic_to(ctrl1.x, ctrl1.y, ctrl2.x, ctrl2.y, end.x, end.y)
                }
                PathSegment::Close => pb.close(),
            }
        }
        pb.finish()
    }
}
