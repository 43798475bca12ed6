/// Packed 32-bit ARGB colour, byte order `0xAARRGGBB`.
///
/// Alpha lives in bits 24–31; `0xFF` is fully opaque. Colours are straight
/// (not premultiplied) and passed by value.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub struct Color(pub u32);

impl Color {
    pub const TRANSPARENT: Color = Color(0x0000_0000);
    pub const BLACK: Color = Color(0xFF00_0000);
    pub const WHITE: Color = Color(0xFFFF_FFFF);
    pub const RED: Color = Color(0xFFFF_0000);
    pub const GREEN: Color = Color(0xFF00_FF00);
    pub const BLUE: Color = Color(0xFF00_00FF);
    pub const YELLOW: Color = Color(0xFFFF_FF00);
    pub const CYAN: Color = Color(0xFF00_FFFF);
    pub const MAGENTA: Color = Color(0xFFFF_00FF);

    #[inline]
    pub const fn from_argb(a: u8, r: u8, g: u8, b: u8) -> Self {
        Self(((a as u32) << 24) | ((r as u32) << 16) | ((g as u32) << 8) | b as u32)
    }

    /// Opaque colour from RGB bytes.
    #[inline]
    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self::from_argb(0xFF, r, g, b)
    }

    #[inline]
    pub const fn alpha(self) -> u8 {
        (self.0 >> 24) as u8
    }

    #[inline]
    pub const fn red(self) -> u8 {
        (self.0 >> 16) as u8
    }

    #[inline]
    pub const fn green(self) -> u8 {
        (self.0 >> 8) as u8
    }

    #[inline]
    pub const fn blue(self) -> u8 {
        self.0 as u8
    }

    #[inline]
    pub const fn is_opaque(self) -> bool {
        self.alpha() == 0xFF
    }

    #[inline]
    pub const fn argb(self) -> u32 {
        self.0
    }

    #[inline]
    pub(crate) fn to_skia(self) -> tiny_skia::Color {
        tiny_skia::Color::from_rgba8(self.red(), self.green(), self.blue(), self.alpha())
    }

    /// Premultiplied form used when writing coverage straight into a pixmap.
    #[inline]
    pub(crate) fn premultiplied(self, coverage: u8) -> tiny_skia::PremultipliedColorU8 {
        let a = mul_u8(self.alpha(), coverage);
        let r = mul_u8(self.red(), a);
        let g = mul_u8(self.green(), a);
        let b = mul_u8(self.blue(), a);
        tiny_skia::PremultipliedColorU8::from_rgba(r, g, b, a)
            .unwrap_or(tiny_skia::PremultipliedColorU8::TRANSPARENT)
    }

    /// Reads a premultiplied pixel back into a straight ARGB colour.
    #[inline]
    pub(crate) fn from_premultiplied(px: tiny_skia::PremultipliedColorU8) -> Self {
        let c = px.demultiply();
        Self::from_argb(c.alpha(), c.red(), c.green(), c.blue())
    }
}

impl From<u32> for Color {
    #[inline]
    fn from(argb: u32) -> Self {
        Color(argb)
    }
}

impl From<Color> for u32 {
    #[inline]
    fn from(c: Color) -> Self {
        c.0
    }
}

/// `a * b / 255`, never larger than either operand.
#[inline]
fn mul_u8(a: u8, b: u8) -> u8 {
    ((a as u16 * b as u16) / 255) as u8
}
