// File: crates/bargraph-core/src/context.rs
// Summary: Explicit rendering context (theme, fonts, text switch) passed into every render call.

use crate::text::TextShaper;
use crate::theme::Theme;
use crate::types::{LABEL_FAMILIES, LABEL_HEIGHT, TITLE_FAMILIES, TITLE_HEIGHT};

/// Holds everything drawing needs besides the data itself. No process-wide
/// state is involved; build one and hand it to [`crate::Stack::render`].
pub struct RenderContext {
    pub theme: Theme,
    pub title_size: f32,
    pub label_size: f32,
    pub title_families: Vec<&'static str>,
    pub label_families: Vec<&'static str>,
    /// Disable to render bars only (deterministic across font setups).
    pub draw_labels: bool,
    pub(crate) shaper: TextShaper,
}

impl RenderContext {
    pub fn new(theme: Theme) -> Self {
        Self {
            theme,
            title_size: TITLE_HEIGHT as f32,
            label_size: LABEL_HEIGHT as f32,
            title_families: TITLE_FAMILIES.to_vec(),
            label_families: LABEL_FAMILIES.to_vec(),
            draw_labels: true,
            shaper: TextShaper::new(&[TITLE_FAMILIES, LABEL_FAMILIES]),
        }
    }

    pub fn without_labels(mut self) -> Self {
        self.draw_labels = false;
        self
    }
}

impl Default for RenderContext {
    fn default() -> Self { Self::new(Theme::default()) }
}
