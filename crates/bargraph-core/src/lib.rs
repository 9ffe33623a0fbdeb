// File: crates/bargraph-core/src/lib.rs
// Summary: Core library entry point; exports the stacked bar graph API and headless rendering.

pub mod canvas;
pub mod config;
pub mod context;
pub mod error;
pub mod geometry;
pub mod layout;
pub mod palette;
pub mod panel;
pub mod segment;
pub mod stack;
pub mod text;
pub mod theme;
pub mod types;

pub use canvas::Canvas;
pub use config::{GraphConfig, PanelConfig, SegmentConfig};
pub use context::RenderContext;
pub use error::{BarGraphError, Result};
pub use layout::{segment_spans, PanelLayout, SegmentLayout, Span};
pub use panel::Panel;
pub use segment::Segment;
pub use stack::Stack;
pub use theme::Theme;
