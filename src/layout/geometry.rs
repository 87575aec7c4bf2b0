//! Pixel and normalized geometry shared by the rasterizer and the cfg emitter.
//!
//! Every key position flows through [`Geometry::key_rect`]. The normalized hit target in the cfg
//! is derived from that same pixel rectangle, so the drawn key and the touch area never drift
//! apart.

use crate::foundation::core::{Canvas, Point, Rect};
use crate::layout::config::OverlayConfig;
use crate::layout::grid::{Placement, Side};

/// The two buttons drawn above the panels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Toggle {
    /// Returns to the gamepad overlay.
    Joypad,
    /// Opens the frontend menu.
    Menu,
}

impl Toggle {
    /// Draw order.
    pub const ALL: [Toggle; 2] = [Toggle::Joypad, Toggle::Menu];

    /// Horizontal center as a fraction of canvas width.
    pub fn x_norm(self) -> f64 {
        match self {
            Self::Joypad => 0.03,
            Self::Menu => 0.97,
        }
    }

    /// Text drawn on the button.
    pub fn label(self) -> &'static str {
        match self {
            Self::Joypad => "Joypad",
            Self::Menu => "Menu",
        }
    }
}

/// A hit rectangle in cfg coordinates: center as a canvas fraction, size as a half extent.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NormRect {
    /// Center x in `[0, 1]`.
    pub cx: f64,
    /// Center y in `[0, 1]`.
    pub cy: f64,
    /// Half width as a fraction of canvas width.
    pub hw: f64,
    /// Half height as a fraction of canvas height.
    pub hh: f64,
}

impl NormRect {
    /// Normalize a pixel rectangle against `canvas`.
    pub fn from_pixels(rect: Rect, canvas: Canvas) -> Self {
        let c = rect.center();
        Self {
            cx: canvas.norm_x(c.x),
            cy: canvas.norm_y(c.y),
            hw: canvas.norm_x(rect.width()) / 2.0,
            hh: canvas.norm_y(rect.height()) / 2.0,
        }
    }
}

/// Derived layout for one [`OverlayConfig`]. Pure: no allocation, no I/O.
#[derive(Clone, Copy, Debug)]
pub struct Geometry<'a> {
    config: &'a OverlayConfig,
}

impl<'a> Geometry<'a> {
    /// Wrap a config.
    pub fn new(config: &'a OverlayConfig) -> Self {
        Self { config }
    }

    /// The config this geometry was derived from.
    pub fn config(&self) -> &'a OverlayConfig {
        self.config
    }

    /// Top-left of a panel. Panels are bottom aligned and flush with their side margin.
    pub fn panel_origin(&self, side: Side) -> Point {
        let c = self.config;
        let y = f64::from(c.canvas.height) - f64::from(c.panel_height) - f64::from(c.margin_y);
        let x = match side {
            Side::Left => f64::from(c.margin_x),
            Side::Right => {
                f64::from(c.canvas.width) - f64::from(c.panel_width) - f64::from(c.margin_x)
            }
        };
        Point::new(x, y)
    }

    /// Panel background rectangle in pixels.
    pub fn panel_rect(&self, side: Side) -> Rect {
        let o = self.panel_origin(side);
        Rect::new(
            o.x,
            o.y,
            o.x + f64::from(self.config.panel_width),
            o.y + f64::from(self.config.panel_height),
        )
    }

    /// Pixel rectangle of a placed key.
    pub fn key_rect(&self, side: Side, p: &Placement<'_>) -> Rect {
        let c = self.config;
        let o = self.panel_origin(side);
        let step_x = f64::from(c.key_width() + c.key_spacing);
        let step_y = f64::from(c.key_height() + c.row_spacing);
        let x = o.x + f64::from(c.key_padding) + p.col as f64 * step_x;
        let y = o.y + f64::from(c.key_padding) + p.row as f64 * step_y;
        Rect::new(
            x,
            y,
            x + f64::from(c.span_width(p.span)),
            y + f64::from(c.key_height()),
        )
    }

    /// Normalized hit target of a placed key.
    pub fn key_target(&self, side: Side, p: &Placement<'_>) -> NormRect {
        NormRect::from_pixels(self.key_rect(side, p), self.config.canvas)
    }

    /// Pixel rectangle of a toggle button.
    ///
    /// The center snaps to whole pixels (truncation) and each half extent is floored, so odd
    /// button sizes lose one pixel.
    pub fn toggle_rect(&self, toggle: Toggle) -> Rect {
        let c = self.config;
        let cx = (toggle.x_norm() * f64::from(c.canvas.width)).trunc();
        let cy = (c.toggle_btn_y_norm * f64::from(c.canvas.height)).trunc();
        let hw = f64::from(c.toggle_btn_width / 2);
        let hh = f64::from(c.toggle_btn_height / 2);
        Rect::new(cx - hw, cy - hh, cx + hw, cy + hh)
    }

    /// Normalized hit target of a toggle button. Uses the configured fractions directly rather
    /// than the pixel-snapped center.
    pub fn toggle_target(&self, toggle: Toggle) -> NormRect {
        let c = self.config;
        NormRect {
            cx: toggle.x_norm(),
            cy: c.toggle_btn_y_norm,
            hw: c.canvas.norm_x(f64::from(c.toggle_btn_width)) / 2.0,
            hh: c.canvas.norm_y(f64::from(c.toggle_btn_height)) / 2.0,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layout/geometry.rs"]
mod tests;
