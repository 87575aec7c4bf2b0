use std::borrow::Cow;

use crate::layout::geometry::{Geometry, NormRect, Toggle};
use crate::layout::keycodes::{self, MENU_TOGGLE, OSK_TOGGLE, OVERLAY_NEXT};
use crate::pages::PageSpec;

/// Size and position of the hidden orientation switch, in every axis.
const HIDDEN_EXTENT: f64 = 0.001;

/// One cfg hit area.
#[derive(Clone, Debug, PartialEq)]
pub struct Descriptor {
    /// Action or key code.
    pub code: Cow<'static, str>,
    /// Normalized hit rectangle.
    pub rect: NormRect,
    /// Page to switch to when pressed, for `overlay_next` descriptors.
    pub next_target: Option<String>,
}

impl Descriptor {
    /// Render as cfg lines: the descriptor itself, then its `_next_target` line if any.
    pub fn lines(&self, overlay: usize, index: usize) -> Vec<String> {
        let NormRect { cx, cy, hw, hh } = self.rect;
        let mut out = vec![format!(
            "overlay{overlay}_desc{index} = \"{code},{cx:.4},{cy:.4},rect,{hw:.4},{hh:.4}\"",
            code = self.code
        )];
        if let Some(target) = &self.next_target {
            out.push(format!("overlay{overlay}_desc{index}_next_target = {target}"));
        }
        out
    }
}

/// All descriptors of one page, in cfg order: toggles, left panel keys, right panel keys, then
/// the hidden orientation switch.
#[tracing::instrument(skip(spec), fields(page = %spec.page.name()))]
pub fn page_descriptors(spec: &PageSpec) -> Vec<Descriptor> {
    let geom = Geometry::new(&spec.config);
    let mut out = Vec::new();

    for toggle in Toggle::ALL {
        let code = match toggle {
            Toggle::Joypad => OSK_TOGGLE,
            Toggle::Menu => MENU_TOGGLE,
        };
        out.push(Descriptor {
            code: Cow::Borrowed(code),
            rect: geom.toggle_target(toggle),
            next_target: None,
        });
    }

    for grid in spec.grids() {
        for p in grid.placements() {
            let code = keycodes::resolve(p.label, grid.layer, p.row);
            let next_target = (code == OVERLAY_NEXT).then(|| spec.page.layer_sibling().name());
            tracing::debug!(label = p.label, row = p.row, col = p.col, %code, "key");
            out.push(Descriptor {
                code,
                rect: geom.key_target(grid.side, &p),
                next_target,
            });
        }
    }

    // Auto-rotate looks for an overlay_next aimed at the other orientation.
    out.push(Descriptor {
        code: Cow::Borrowed(OVERLAY_NEXT),
        rect: NormRect {
            cx: HIDDEN_EXTENT,
            cy: HIDDEN_EXTENT,
            hw: HIDDEN_EXTENT,
            hh: HIDDEN_EXTENT,
        },
        next_target: Some(spec.page.orientation_sibling().name()),
    });

    out
}

#[cfg(test)]
#[path = "../../tests/unit/emit/descriptor.rs"]
mod tests;
