use crate::foundation::core::Canvas;
use crate::foundation::error::{OverlayError, OverlayResult};
use crate::layout::grid::{GRID_COLS, GRID_ROWS};

const COLS: i64 = GRID_COLS as i64;
const ROWS: i64 = GRID_ROWS as i64;

/// Geometry parameters for one orientation.
///
/// Key sizes are derived, never stored: both the rasterizer and the cfg emitter read them through
/// [`OverlayConfig::key_width`] and [`OverlayConfig::key_height`].
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OverlayConfig {
    /// Output image size.
    pub canvas: Canvas,
    /// Width of each keyboard panel.
    pub panel_width: u32,
    /// Height of each keyboard panel.
    pub panel_height: u32,
    /// Gap between a panel and the left/right canvas edge.
    pub margin_x: u32,
    /// Gap between the panels and the bottom canvas edge.
    pub margin_y: u32,
    /// Label size for short labels.
    pub font_size: f32,
    /// Label size for long labels and toggle buttons.
    pub font_size_small: f32,
    /// Inset from panel edge to the first key.
    pub key_padding: u32,
    /// Horizontal gap between keys.
    pub key_spacing: u32,
    /// Vertical gap between rows.
    pub row_spacing: u32,
    /// Vertical center of the toggle buttons as a fraction of canvas height.
    pub toggle_btn_y_norm: f64,
    /// Toggle button width.
    pub toggle_btn_width: u32,
    /// Toggle button height.
    pub toggle_btn_height: u32,
}

impl OverlayConfig {
    /// 1920x1080 preset. Panels span roughly 30%..95% of the screen height.
    pub fn landscape() -> Self {
        Self {
            canvas: Canvas::new(1920, 1080),
            panel_width: 440,
            panel_height: 680,
            margin_x: 10,
            margin_y: 50,
            font_size: 22.0,
            font_size_small: 17.0,
            key_padding: 12,
            key_spacing: 10,
            row_spacing: 12,
            toggle_btn_y_norm: 0.27,
            toggle_btn_width: 80,
            toggle_btn_height: 35,
        }
    }

    /// 1080x1920 preset.
    pub fn portrait() -> Self {
        Self {
            canvas: Canvas::new(1080, 1920),
            panel_width: 520,
            panel_height: 420,
            margin_x: 10,
            margin_y: 10,
            font_size: 20.0,
            font_size_small: 15.0,
            key_padding: 10,
            key_spacing: 8,
            row_spacing: 10,
            toggle_btn_y_norm: 0.755,
            toggle_btn_width: 90,
            toggle_btn_height: 40,
        }
    }

    /// Check that every derived quantity is positive and every panel fits on the canvas.
    pub fn validate(&self) -> OverlayResult<()> {
        let Canvas { width, height } = self.canvas;
        if width == 0 || height == 0 {
            return Err(OverlayError::validation("canvas must be non-empty"));
        }
        if width > u32::from(u16::MAX) || height > u32::from(u16::MAX) {
            return Err(OverlayError::validation(format!(
                "canvas {width}x{height} exceeds the {max}x{max} raster limit",
                max = u16::MAX
            )));
        }
        if u64::from(self.panel_width) + u64::from(self.margin_x) > u64::from(width) {
            return Err(OverlayError::validation("panel_width + margin_x exceeds canvas width"));
        }
        if u64::from(self.panel_height) + u64::from(self.margin_y) > u64::from(height) {
            return Err(OverlayError::validation(
                "panel_height + margin_y exceeds canvas height",
            ));
        }
        if usable_span(self.panel_width, self.key_padding, self.key_spacing, COLS) < COLS {
            return Err(OverlayError::validation(
                "key_padding/key_spacing leave no room for keys horizontally",
            ));
        }
        if usable_span(self.panel_height, self.key_padding, self.row_spacing, ROWS) < ROWS {
            return Err(OverlayError::validation(
                "key_padding/row_spacing leave no room for keys vertically",
            ));
        }
        if !(self.font_size.is_finite() && self.font_size > 0.0)
            || !(self.font_size_small.is_finite() && self.font_size_small > 0.0)
        {
            return Err(OverlayError::validation("font sizes must be finite and > 0"));
        }
        if !(0.0..=1.0).contains(&self.toggle_btn_y_norm) {
            return Err(OverlayError::validation("toggle_btn_y_norm must be within [0, 1]"));
        }
        if self.toggle_btn_width == 0 || self.toggle_btn_height == 0 {
            return Err(OverlayError::validation("toggle button must be non-empty"));
        }
        Ok(())
    }

    /// Width of a unit key, floored.
    pub fn key_width(&self) -> u32 {
        let usable = usable_span(self.panel_width, self.key_padding, self.key_spacing, COLS);
        u32::try_from(usable / COLS).unwrap_or(0)
    }

    /// Height of a key row, floored.
    pub fn key_height(&self) -> u32 {
        let usable = usable_span(self.panel_height, self.key_padding, self.row_spacing, ROWS);
        u32::try_from(usable / ROWS).unwrap_or(0)
    }

    /// Width of a key spanning `span` columns, including the gaps it swallows.
    pub fn span_width(&self, span: u32) -> u32 {
        let span = span.max(1);
        self.key_width() * span + self.key_spacing * (span - 1)
    }

    /// `width / height` of the canvas.
    pub fn aspect_ratio(&self) -> f64 {
        self.canvas.aspect_ratio()
    }
}

/// Panel extent left for `n` keys once padding and inter-key gaps are removed. Negative when the
/// gaps alone overflow the panel.
fn usable_span(panel: u32, padding: u32, gap: u32, n: i64) -> i64 {
    i64::from(panel) - 2 * i64::from(padding) - (n - 1) * i64::from(gap)
}

#[cfg(test)]
#[path = "../../tests/unit/layout/config.rs"]
mod tests;
