use std::io;
use std::path::Path;

const SYSTEM_FONTS: &[&str] = &[
    "/usr/share/fonts/TTF/DejaVuSansMono.ttf",
    "/usr/share/fonts/truetype/dejavu/DejaVuSansMono.ttf",
    "/usr/share/fonts/dejavu/DejaVuSansMono.ttf",
    "/usr/share/fonts/TTF/DejaVuSans.ttf",
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/noto/NotoSans-Regular.ttf",
    "/usr/share/fonts/truetype/noto/NotoSans-Regular.ttf",
];

/// Reads `explicit` if given, otherwise the first readable system font.
///
/// An explicit path that cannot be read is an error; a missing system font is not.
pub fn load(explicit: Option<&Path>) -> io::Result<Option<Vec<u8>>> {
    if let Some(path) = explicit {
        return std::fs::read(path).map(Some);
    }
    Ok(SYSTEM_FONTS.iter().find_map(|p| std::fs::read(p).ok()))
}
