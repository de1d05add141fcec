//! Vertex label text
//!
//! Labels are laid out and rasterized with fontdue. Rasterized glyphs are
//! packed into a single-channel atlas on shelves; the draw pipeline copies
//! newly packed glyphs to the GPU before each frame.

use std::collections::HashMap;
use std::fmt;
use std::path::Path;

use fontdue::layout::{CoordinateSystem, GlyphRasterConfig, Layout, LayoutSettings, TextStyle};
use hyperview_math::Point2;

use crate::viewport::Viewport;

/// Side length of the square glyph atlas, in pixels
pub const ATLAS_SIZE: u32 = 512;

/// Pixels left empty between packed glyphs
const GLYPH_PADDING: u32 = 1;

/// Fonts tried when no font path is configured
pub const SYSTEM_FONT_PATHS: &[&str] = &[
    "/usr/share/fonts/TTF/DejaVuSans.ttf",
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/noto/NotoSans-Regular.ttf",
    "/usr/share/fonts/truetype/noto/NotoSans-Regular.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationSans-Regular.ttf",
    "/System/Library/Fonts/Supplemental/Arial.ttf",
    "C:\\Windows\\Fonts\\arial.ttf",
];

/// Error returned when a label font cannot be loaded
#[derive(Debug, Clone, PartialEq)]
pub enum FontError {
    /// The file could not be read
    Io { path: String, message: String },
    /// fontdue rejected the font data
    Parse(String),
    /// None of the system font paths exist
    NotFound,
}

impl fmt::Display for FontError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FontError::Io { path, message } => write!(f, "Failed to read font {}: {}", path, message),
            FontError::Parse(msg) => write!(f, "Invalid font data: {}", msg),
            FontError::NotFound => write!(f, "No system font found"),
        }
    }
}

impl std::error::Error for FontError {}

/// A parsed TrueType or OpenType font
pub struct LabelFont {
    font: fontdue::Font,
}

impl LabelFont {
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, FontError> {
        let font = fontdue::Font::from_bytes(bytes, fontdue::FontSettings::default())
            .map_err(|e| FontError::Parse(e.to_string()))?;
        Ok(Self { font })
    }

    pub fn from_path(path: &Path) -> Result<Self, FontError> {
        let bytes = std::fs::read(path).map_err(|e| FontError::Io {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        Self::from_bytes(&bytes)
    }

    /// First readable font among [`SYSTEM_FONT_PATHS`]
    pub fn from_system() -> Result<Self, FontError> {
        let bytes = SYSTEM_FONT_PATHS
            .iter()
            .find_map(|p| std::fs::read(p).ok())
            .ok_or(FontError::NotFound)?;
        Self::from_bytes(&bytes)
    }

    /// Configured font if given, system font otherwise
    pub fn load(path: Option<&Path>) -> Result<Self, FontError> {
        match path {
            Some(path) => Self::from_path(path),
            None => Self::from_system(),
        }
    }

    /// Distance from the top of a line to its baseline at `px`
    fn ascent(&self, px: f32) -> f32 {
        self.font
            .horizontal_line_metrics(px)
            .map(|m| m.ascent)
            .unwrap_or(px)
    }
}

impl fmt::Debug for LabelFont {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LabelFont").field("glyphs", &self.font.glyph_count()).finish()
    }
}

/// Texture coordinates of a packed glyph
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AtlasRect {
    pub uv_min: [f32; 2],
    pub uv_max: [f32; 2],
}

/// Glyph pixels waiting to be copied into the atlas texture
#[derive(Clone, Debug, PartialEq)]
pub struct AtlasUpload {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<u8>,
}

/// Shelf packer for rasterized glyphs
#[derive(Debug)]
pub struct GlyphAtlas {
    size: u32,
    cursor_x: u32,
    cursor_y: u32,
    row_height: u32,
    entries: HashMap<GlyphRasterConfig, AtlasRect>,
    pending: Vec<AtlasUpload>,
}

impl GlyphAtlas {
    pub fn new(size: u32) -> Self {
        Self {
            size,
            cursor_x: GLYPH_PADDING,
            cursor_y: GLYPH_PADDING,
            row_height: 0,
            entries: HashMap::new(),
            pending: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, key: &GlyphRasterConfig) -> Option<AtlasRect> {
        self.entries.get(key).copied()
    }

    /// Pack a `width`×`height` coverage bitmap. `None` when the atlas is full.
    pub fn insert(
        &mut self,
        key: GlyphRasterConfig,
        width: u32,
        height: u32,
        pixels: Vec<u8>,
    ) -> Option<AtlasRect> {
        if self.cursor_x + width + GLYPH_PADDING > self.size {
            self.cursor_y += self.row_height + GLYPH_PADDING;
            self.cursor_x = GLYPH_PADDING;
            self.row_height = 0;
        }
        if self.cursor_x + width + GLYPH_PADDING > self.size
            || self.cursor_y + height + GLYPH_PADDING > self.size
        {
            return None;
        }

        let (x, y) = (self.cursor_x, self.cursor_y);
        self.cursor_x += width + GLYPH_PADDING;
        self.row_height = self.row_height.max(height);

        let s = self.size as f32;
        let rect = AtlasRect {
            uv_min: [x as f32 / s, y as f32 / s],
            uv_max: [(x + width) as f32 / s, (y + height) as f32 / s],
        };
        self.entries.insert(key, rect);
        self.pending.push(AtlasUpload { x, y, width, height, pixels });
        Some(rect)
    }

    /// Forget every glyph; the texture contents are simply overwritten later
    pub fn clear(&mut self) {
        self.cursor_x = GLYPH_PADDING;
        self.cursor_y = GLYPH_PADDING;
        self.row_height = 0;
        self.entries.clear();
        self.pending.clear();
    }

    /// Uploads queued since the last call
    pub fn take_uploads(&mut self) -> Vec<AtlasUpload> {
        std::mem::take(&mut self.pending)
    }
}

/// A glyph placed on the projection plane
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GlyphQuad {
    /// Top-left corner in plane units
    pub min: Point2,
    /// Bottom-right corner in plane units
    pub max: Point2,
    pub uv: AtlasRect,
}

/// Lays out label strings and keeps their glyphs in an atlas
pub struct LabelText {
    font: Option<LabelFont>,
    atlas: GlyphAtlas,
    layout: Layout<()>,
    /// Pixel size the atlas currently holds glyphs for
    atlas_px: Option<f32>,
}

impl LabelText {
    pub fn new(font: Option<LabelFont>) -> Self {
        Self {
            font,
            atlas: GlyphAtlas::new(ATLAS_SIZE),
            layout: Layout::new(CoordinateSystem::PositiveYDown),
            atlas_px: None,
        }
    }

    /// No font: text commands produce no geometry
    pub fn disabled() -> Self {
        Self::new(None)
    }

    pub fn atlas_mut(&mut self) -> &mut GlyphAtlas {
        &mut self.atlas
    }

    /// Glyph quads for `text` with its baseline starting at `origin`.
    ///
    /// `size` is the glyph height in plane units. It is converted to pixels
    /// with the viewport factor so glyphs are rasterized at screen resolution.
    pub fn layout(
        &mut self,
        text: &str,
        origin: Point2,
        size: f64,
        viewport: &Viewport,
    ) -> Vec<GlyphQuad> {
        let Some(font) = &self.font else { return Vec::new() };
        let factor = viewport.factor();
        let px = (size * factor) as f32;
        if !px.is_finite() || px < 1.0 {
            return Vec::new();
        }

        // one label size at a time; a resize changes it
        if self.atlas_px != Some(px) {
            self.atlas.clear();
            self.atlas_px = Some(px);
        }

        self.layout.reset(&LayoutSettings::default());
        self.layout.append(&[&font.font], &TextStyle::new(text, px, 0));
        let ascent = font.ascent(px);

        let placed: Vec<_> = self
            .layout
            .glyphs()
            .iter()
            .filter(|g| g.char_data.rasterize() && g.width > 0 && g.height > 0)
            .map(|g| (g.key, g.x, g.y, g.width, g.height))
            .collect();

        let mut quads = Vec::with_capacity(placed.len());
        for (key, x, y, w, h) in placed {
            let uv = match self.atlas.get(&key) {
                Some(uv) => uv,
                None => {
                    let (metrics, bitmap) = font.font.rasterize_config(key);
                    if metrics.width == 0 || metrics.height == 0 {
                        continue;
                    }
                    match self.atlas.insert(key, metrics.width as u32, metrics.height as u32, bitmap) {
                        Some(uv) => uv,
                        None => {
                            log::warn!("Glyph atlas full at {:.1}px, dropping glyph", px);
                            continue;
                        }
                    }
                }
            };

            // plane y grows downward like the layout's pixel y
            let min = origin.offset(x as f64 / factor, (y - ascent) as f64 / factor);
            let max = min.offset(w as f64 / factor, h as f64 / factor);
            quads.push(GlyphQuad { min, max, uv });
        }

        quads
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(c: char, px: f32) -> GlyphRasterConfig {
        GlyphRasterConfig {
            glyph_index: c as u16,
            px,
            font_hash: 0,
        }
    }

    #[test]
    fn test_atlas_packs_along_shelf() {
        let mut atlas = GlyphAtlas::new(64);
        let a = atlas.insert(key('a', 10.0), 10, 12, vec![0; 120]).unwrap();
        let b = atlas.insert(key('b', 10.0), 10, 8, vec![0; 80]).unwrap();

        assert_eq!(a.uv_min, [1.0 / 64.0, 1.0 / 64.0]);
        assert_eq!(b.uv_min, [12.0 / 64.0, 1.0 / 64.0]);
        assert_eq!(atlas.len(), 2);
        assert_eq!(atlas.get(&key('a', 10.0)), Some(a));
    }

    #[test]
    fn test_atlas_starts_new_row() {
        let mut atlas = GlyphAtlas::new(32);
        atlas.insert(key('a', 20.0), 20, 10, vec![0; 200]).unwrap();
        let b = atlas.insert(key('b', 20.0), 20, 10, vec![0; 200]).unwrap();
        // second glyph drops below the tallest glyph of the first row
        assert_eq!(b.uv_min, [1.0 / 32.0, 12.0 / 32.0]);
    }

    #[test]
    fn test_atlas_full() {
        let mut atlas = GlyphAtlas::new(16);
        assert!(atlas.insert(key('a', 40.0), 20, 20, vec![0; 400]).is_none());
        assert!(atlas.is_empty());
    }

    #[test]
    fn test_uploads_drained_once() {
        let mut atlas = GlyphAtlas::new(64);
        atlas.insert(key('a', 10.0), 3, 2, vec![7; 6]).unwrap();

        let uploads = atlas.take_uploads();
        assert_eq!(uploads.len(), 1);
        assert_eq!((uploads[0].x, uploads[0].y, uploads[0].width, uploads[0].height), (1, 1, 3, 2));
        assert!(atlas.take_uploads().is_empty());
    }

    #[test]
    fn test_clear_resets_packing() {
        let mut atlas = GlyphAtlas::new(64);
        atlas.insert(key('a', 10.0), 10, 10, vec![0; 100]).unwrap();
        atlas.clear();
        assert!(atlas.is_empty());
        let again = atlas.insert(key('b', 10.0), 10, 10, vec![0; 100]).unwrap();
        assert_eq!(again.uv_min, [1.0 / 64.0, 1.0 / 64.0]);
    }

    #[test]
    fn test_disabled_text_lays_out_nothing() {
        let mut text = LabelText::disabled();
        let quads = text.layout("1.00", Point2::new(0.0, 0.0), 0.1, &Viewport::new(640, 480));
        assert!(quads.is_empty());
    }

    #[test]
    fn test_invalid_font_bytes() {
        assert!(matches!(LabelFont::from_bytes(b"not a font"), Err(FontError::Parse(_))));
    }

    #[test]
    fn test_missing_font_file() {
        let err = LabelFont::from_path(Path::new("/nonexistent/font.ttf")).unwrap_err();
        assert!(matches!(err, FontError::Io { .. }));
        assert!(format!("{}", err).contains("/nonexistent/font.ttf"));
    }

    #[test]
    fn test_system_font_glyphs_sit_on_baseline() {
        // Hosts without any of the listed fonts have nothing to lay out
        let Ok(font) = LabelFont::from_system() else { return };
        let mut text = LabelText::new(Some(font));
        let viewport = Viewport::new(640, 480);
        let origin = Point2::new(0.5, 0.25);

        let quads = text.layout("-1.00,0.50", origin, 0.1, &viewport);
        // '-', digits, points and commas all have ink
        assert_eq!(quads.len(), 10);

        for q in &quads {
            assert!(q.min.x >= origin.x - 0.02);
            assert!(q.max.x > q.min.x && q.max.y > q.min.y);
            // digits sit on the baseline and are at most one glyph height tall
            assert!(q.min.y >= origin.y - 0.1 - 1e-6);
        }
        // pen advances left to right
        assert!(quads.windows(2).all(|w| w[1].min.x > w[0].min.x));
        assert!(!text.atlas_mut().take_uploads().is_empty());
    }

    #[test]
    fn test_resize_restarts_atlas() {
        let Ok(font) = LabelFont::from_system() else { return };
        let mut text = LabelText::new(Some(font));

        text.layout("1", Point2::new(0.0, 0.0), 0.1, &Viewport::new(640, 480));
        assert_eq!(text.atlas_mut().len(), 1);
        text.layout("2", Point2::new(0.0, 0.0), 0.1, &Viewport::new(1280, 960));
        // the new pixel size drops glyphs rasterized for the old one
        assert_eq!(text.atlas_mut().len(), 1);
    }
}
