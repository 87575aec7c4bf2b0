//! Split QWERTY on-screen keyboard overlay generator.
//!
//! Turns declarative key grids into four overlay pages (landscape/portrait x primary/fn layer):
//! one transparent PNG per page plus a single overlay cfg mapping normalized screen rectangles to
//! key codes.
//!
//! - Describe pages with a [`PageSet`] (usually via [`Settings::page_set`])
//! - Call [`generate`] to write `img/<page>.png` and the cfg file
//! - Or use [`OverlayRenderer`] and [`CfgDocument`] directly for in-memory output
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod emit;
mod foundation;
mod generate;
mod layout;
mod pages;
mod render;
mod settings;

pub use crate::emit::cfg::{CfgDocument, PageBlock};
pub use crate::emit::descriptor::{Descriptor, page_descriptors};
pub use crate::foundation::core::{Canvas, Point, Rect, Rgba8, Size};
pub use crate::foundation::error::{OverlayError, OverlayResult};
pub use crate::generate::{GenerateOpts, GenerateReport, generate};
pub use crate::layout::config::OverlayConfig;
pub use crate::layout::geometry::{Geometry, NormRect, Toggle};
pub use crate::layout::grid::{
    Cell, GRID_COLS, GRID_ROWS, KeyGrid, Placement, Side, left_fn, left_primary, right_fn,
    right_primary,
};
pub use crate::layout::keycodes::{MENU_TOGGLE, OSK_TOGGLE, OVERLAY_NEXT};
pub use crate::pages::{Layer, Orientation, Page, PageSet, PageSpec};
pub use crate::render::cpu::OverlayRenderer;
pub use crate::render::fonts::{FONT_CANDIDATES, FontSource};
pub use crate::render::raster::RasterImage;
pub use crate::render::style::Style;
pub use crate::settings::Settings;

/// Key-code lookup for grid labels.
pub mod keycodes {
    pub use crate::layout::keycodes::{CARET, lookup, resolve};
}
