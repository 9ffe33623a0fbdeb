// File: crates/bargraph-core/src/text.rs
// Summary: Text shaper/renderer using Skia textlayout with family fallback.

use skia_safe as skia;
use skia::textlayout::{FontCollection, Paragraph, ParagraphBuilder, ParagraphStyle, TextAlign, TextStyle};
use tracing::{debug, warn};

use crate::geometry::RectI32;

pub struct TextShaper {
    fonts: FontCollection,
}

impl TextShaper {
    /// Build a shaper on the system font manager.
    ///
    /// When none of `families` is installed Skia falls back to the font
    /// manager's default typeface; that is logged once here.
    pub fn new(families: &[&[&str]]) -> Self {
        let mut fc = FontCollection::new();
        fc.set_default_font_manager(skia::FontMgr::default(), None);
        for list in families {
            let found = fc.find_typefaces(*list, skia::FontStyle::default());
            if found.is_empty() {
                warn!(families = ?list, "no preferred font family installed; using default typeface");
            } else {
                debug!(families = ?list, matched = found.len(), "font families resolved");
            }
        }
        Self { fonts: fc }
    }

    fn make_style(size: f32, color: skia::Color, families: &[&str]) -> TextStyle {
        let mut ts = TextStyle::new();
        ts.set_font_size(size.max(1.0));
        ts.set_color(color);
        ts.set_font_families(families);
        ts
    }

    pub fn layout(&self, text: &str, size: f32, color: skia::Color, families: &[&str]) -> Paragraph {
        let mut pstyle = ParagraphStyle::new();
        pstyle.set_text_align(TextAlign::Left);
        pstyle.set_max_lines(1);
        let mut builder = ParagraphBuilder::new(&pstyle, &self.fonts);
        let style = Self::make_style(size, color, families);
        builder.push_style(&style);
        builder.add_text(text);
        let mut paragraph = builder.build();
        // unconstrained width: a single line, never wrapped
        paragraph.layout(10_000.0);
        paragraph
    }

    /// Draw `text` with its baseline at `y`.
    pub fn draw_left(&self, canvas: &skia::Canvas, text: &str, x: f32, y: f32, size: f32, color: skia::Color, families: &[&str]) {
        let p = self.layout(text, size, color, families);
        // Paragraph draws from top-left; adjust baseline by glyph height approximation
        p.paint(canvas, (x, y - size * 0.8));
    }

    /// Draw `text` with its right edge at `bounds.right`, top-aligned in `bounds`.
    ///
    /// Text wider than `bounds` is drawn whole and overflows to the left.
    pub fn draw_right(&self, canvas: &skia::Canvas, text: &str, bounds: RectI32, size: f32, color: skia::Color, families: &[&str]) {
        if text.is_empty() {
            return;
        }
        let p = self.layout(text, size, color, families);
        p.paint(canvas, (bounds.right as f32 - p.longest_line(), bounds.top as f32));
    }
}
