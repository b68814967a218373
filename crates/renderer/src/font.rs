//! TrueType font discovery for labels and titles.

use std::path::{Path, PathBuf};

use rusttype::Font;
use tracing::{debug, warn};

/// Locations tried when no font is configured.
const SYSTEM_FONT_CANDIDATES: &[&str] = &[
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/TTF/DejaVuSans.ttf",
    "/usr/share/fonts/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/dejavu-sans-fonts/DejaVuSans.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationSans-Regular.ttf",
    "/System/Library/Fonts/Supplemental/Arial.ttf",
    "/Library/Fonts/Arial.ttf",
    "C:\\Windows\\Fonts\\arial.ttf",
];

/// Load a font from `path`.
pub fn load_font_file(path: &Path) -> Option<Font<'static>> {
    let bytes = match std::fs::read(path) {
        Ok(b) => b,
        Err(e) => {
            debug!(path = %path.display(), error = %e, "Font not readable");
            return None;
        }
    };
    let font = Font::try_from_vec(bytes);
    if font.is_none() {
        warn!(path = %path.display(), "File is not a usable TrueType font");
    }
    font
}

/// Load the configured font, falling back to common system fonts.
///
/// Returns None when nothing can be loaded; callers then skip text.
pub fn load_font(configured: Option<&Path>) -> Option<Font<'static>> {
    if let Some(path) = configured {
        if let Some(font) = load_font_file(path) {
            debug!(path = %path.display(), "Loaded configured font");
            return Some(font);
        }
        warn!(path = %path.display(), "Configured font could not be loaded, trying system fonts");
    }

    let found = SYSTEM_FONT_CANDIDATES
        .iter()
        .map(PathBuf::from)
        .find_map(|path| load_font_file(&path).map(|font| (path, font)));

    match found {
        Some((path, font)) => {
            debug!(path = %path.display(), "Loaded system font");
            Some(font)
        }
        None => {
            warn!("No TrueType font found; labels and title will not be drawn");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_is_none() {
        assert!(load_font_file(Path::new("/nonexistent/font.ttf")).is_none());
    }

    #[test]
    fn test_garbage_file_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.ttf");
        std::fs::write(&path, b"not a font").unwrap();
        assert!(load_font_file(&path).is_none());
    }
}
