use super::Vec2;

/// Axis-aligned rectangle given by an origin corner and a signed size.
///
/// The size may be negative on either axis; the rectangle is then the one
/// spanned by `origin` and `origin + size`. Use [`Rect::normalized`] to get
/// the canonical top-left / non-negative form.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Rect {
    pub origin: Vec2,
    pub size: Vec2,
}

impl Rect {
    #[inline]
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            origin: Vec2::new(x, y),
            size: Vec2::new(w, h),
        }
    }

    #[inline]
    pub const fn from_origin_size(origin: Vec2, size: Vec2) -> Self {
        Self { origin, size }
    }

    #[inline]
    pub fn min(self) -> Vec2 {
        self.normalized().origin
    }

    #[inline]
    pub fn max(self) -> Vec2 {
        let r = self.normalized();
        r.origin + r.size
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.size.x == 0.0 || self.size.y == 0.0
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.origin.is_finite() && self.size.is_finite()
    }

    /// Normalizes the rectangle so width/height are non-negative.
    #[inline]
    pub fn normalized(self) -> Self {
        let mut x = self.origin.x;
        let mut y = self.origin.y;
        let mut w = self.size.x;
        let mut h = self.size.y;

        if w < 0.0 {
            x += w;
            w = -w;
        }
        if h < 0.0 {
            y += h;
            h = -h;
        }

        Rect::new(x, y, w, h)
    }

    /// Half-open containment: [min, max).
    #[inline]
    pub fn contains(self, p: Vec2) -> bool {
        let r = self.normalized();
        p.x >= r.origin.x
            && p.y >= r.origin.y
            && p.x < (r.origin.x + r.size.x)
            && p.y < (r.origin.y + r.size.y)
    }

    /// Converts to the rasterizer rect. `None` for non-finite rects.
    ///
    /// Zero-width or zero-height rects convert: filling one covers nothing,
    /// stroking one draws a line.
    #[inline]
    pub(crate) fn to_skia(self) -> Option<tiny_skia::Rect> {
        let r = self.normalized();
        tiny_skia::Rect::from_xywh(r.origin.x, r.origin.y, r.size.x, r.size.y)
    }
}
