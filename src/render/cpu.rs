use std::collections::HashMap;

use vello_cpu::kurbo::Shape as _;

use crate::foundation::core::{Rect, Rgba8};
use crate::foundation::error::{OverlayError, OverlayResult};
use crate::layout::geometry::{Geometry, Toggle};
use crate::pages::PageSpec;
use crate::render::fonts::FontSource;
use crate::render::raster::RasterImage;
use crate::render::style::Style;
use crate::render::text::TextLayoutEngine;

const PATH_TOLERANCE: f64 = 0.1;

/// CPU rasterizer for overlay pages, powered by `vello_cpu`.
///
/// Holds the text engine and a font cache, so one renderer should be reused for every page
/// drawn on the same thread.
pub struct OverlayRenderer {
    style: Style,
    text: TextLayoutEngine,
    font_cache: HashMap<(u64, u32), vello_cpu::peniko::FontData>,
}

impl OverlayRenderer {
    /// Build a renderer drawing labels with `font`.
    pub fn new(style: Style, font: &FontSource) -> Self {
        Self {
            style,
            text: TextLayoutEngine::new(font),
            font_cache: HashMap::new(),
        }
    }

    /// Font stack labels are shaped with.
    pub fn font_stack(&self) -> &str {
        self.text.stack()
    }

    /// Draw toggles, panels and keys of one page onto a transparent canvas.
    #[tracing::instrument(skip(self, spec), fields(page = %spec.page.name()))]
    pub fn render_page(&mut self, spec: &PageSpec) -> OverlayResult<RasterImage> {
        let cfg = &spec.config;
        let width: u16 = cfg
            .canvas
            .width
            .try_into()
            .map_err(|_| OverlayError::render("canvas width exceeds u16"))?;
        let height: u16 = cfg
            .canvas
            .height
            .try_into()
            .map_err(|_| OverlayError::render("canvas height exceeds u16"))?;

        let geom = Geometry::new(cfg);
        let mut ctx = vello_cpu::RenderContext::new(width, height);

        for toggle in Toggle::ALL {
            let rect = geom.toggle_rect(toggle);
            self.draw_button(&mut ctx, rect, self.style.key_radius);
            self.draw_label(&mut ctx, rect, toggle.label(), cfg.font_size_small);
        }

        for grid in spec.grids() {
            let panel = geom.panel_rect(grid.side);
            fill_rounded(&mut ctx, panel, self.style.panel_radius, self.style.panel_fill);

            for p in grid.placements() {
                let rect = geom.key_rect(grid.side, &p);
                let size = if self.style.is_long_label(p.label) {
                    cfg.font_size_small
                } else {
                    cfg.font_size
                };
                self.draw_button(&mut ctx, rect, self.style.key_radius);
                self.draw_label(&mut ctx, rect, p.label, size);
            }
        }

        let mut pixmap = vello_cpu::Pixmap::new(width, height);
        ctx.flush();
        ctx.render_to_pixmap(&mut pixmap);

        RasterImage::from_premul(
            cfg.canvas.width,
            cfg.canvas.height,
            pixmap.data_as_u8_slice().to_vec(),
        )
    }

    fn draw_button(&self, ctx: &mut vello_cpu::RenderContext, rect: Rect, radius: f64) {
        fill_rounded(ctx, rect, radius, self.style.key_fill);

        let bw = self.style.border_width;
        if bw > 0.0 {
            // Keep the outline inside the key bounds.
            let inner = rect.inset(-bw / 2.0);
            ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
            ctx.set_stroke(vello_cpu::kurbo::Stroke::new(bw));
            ctx.set_paint(color(self.style.key_border));
            ctx.stroke_path(&rounded_path(inner, (radius - bw / 2.0).max(0.0)));
        }
    }

    /// Center `label` inside `rect`, snapping the text origin to whole pixels.
    fn draw_label(
        &mut self,
        ctx: &mut vello_cpu::RenderContext,
        rect: Rect,
        label: &str,
        size_px: f32,
    ) {
        let layout = self.text.layout_line(label, size_px, self.style.key_text);
        let x = rect.x0 + ((rect.width() - f64::from(layout.width())) / 2.0).floor();
        let y = rect.y0 + ((rect.height() - f64::from(layout.height())) / 2.0).floor();
        ctx.set_transform(vello_cpu::kurbo::Affine::translate((x, y)));

        for line in layout.lines() {
            for item in line.items() {
                let parley::layout::PositionedLayoutItem::GlyphRun(run) = item else {
                    continue;
                };
                let brush = run.style().brush;
                let font = self.font_for(run.run());
                ctx.set_paint(color(brush));
                // Layout-space positions: x includes the run offset, y is the baseline.
                let glyphs = run.positioned_glyphs().map(|g| vello_cpu::Glyph {
                    id: g.id,
                    x: g.x,
                    y: g.y,
                });
                ctx.glyph_run(&font)
                    .font_size(run.run().font_size())
                    .fill_glyphs(glyphs);
            }
        }
    }

    fn font_for(&mut self, run: &parley::layout::Run<'_, Rgba8>) -> vello_cpu::peniko::FontData {
        let font = run.font();
        self.font_cache
            .entry((font.data.id(), font.index))
            .or_insert_with(|| {
                vello_cpu::peniko::FontData::new(
                    vello_cpu::peniko::Blob::from(font.data.data().to_vec()),
                    font.index,
                )
            })
            .clone()
    }
}

fn fill_rounded(ctx: &mut vello_cpu::RenderContext, rect: Rect, radius: f64, fill: Rgba8) {
    ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
    ctx.set_paint(color(fill));
    ctx.fill_path(&rounded_path(rect, radius));
}

fn rounded_path(rect: Rect, radius: f64) -> vello_cpu::kurbo::BezPath {
    vello_cpu::kurbo::RoundedRect::new(rect.x0, rect.y0, rect.x1, rect.y1, radius)
        .to_path(PATH_TOLERANCE)
}

fn color(c: Rgba8) -> vello_cpu::peniko::Color {
    vello_cpu::peniko::Color::from_rgba8(c.r, c.g, c.b, c.a)
}

#[cfg(test)]
#[path = "../../tests/unit/render/cpu.rs"]
mod tests;
