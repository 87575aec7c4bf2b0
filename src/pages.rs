//! The four overlay pages (orientation x layer) and how they reference each other.

use crate::foundation::error::{OverlayError, OverlayResult};
use crate::layout::config::OverlayConfig;
use crate::layout::grid::{self, KeyGrid, Side};

/// Screen orientation an overlay page is laid out for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Orientation {
    /// 16:9.
    Landscape,
    /// 9:16.
    Portrait,
}

impl Orientation {
    /// Lowercase name used in page names and file names.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Landscape => "landscape",
            Self::Portrait => "portrait",
        }
    }

    /// The other orientation.
    pub fn flipped(self) -> Self {
        match self {
            Self::Landscape => Self::Portrait,
            Self::Portrait => Self::Landscape,
        }
    }
}

/// Shift layer of the keyboard.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Layer {
    /// Letters, digits and modifiers.
    Primary,
    /// Function keys, punctuation and navigation.
    Fn,
}

impl Layer {
    /// Lowercase name used in page names and file names.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::Fn => "fn",
        }
    }

    /// The other layer.
    pub fn flipped(self) -> Self {
        match self {
            Self::Primary => Self::Fn,
            Self::Fn => Self::Primary,
        }
    }
}

/// One selectable overlay state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Page {
    /// Orientation of the page.
    pub orientation: Orientation,
    /// Layer shown on the page.
    pub layer: Layer,
}

impl Page {
    /// All pages in overlay index order.
    pub const ALL: [Page; 4] = [
        Page::new(Orientation::Landscape, Layer::Primary),
        Page::new(Orientation::Landscape, Layer::Fn),
        Page::new(Orientation::Portrait, Layer::Primary),
        Page::new(Orientation::Portrait, Layer::Fn),
    ];

    /// Build a page.
    pub const fn new(orientation: Orientation, layer: Layer) -> Self {
        Self { orientation, layer }
    }

    /// Overlay index of this page in the cfg file.
    pub fn index(self) -> usize {
        let o = match self.orientation {
            Orientation::Landscape => 0,
            Orientation::Portrait => 2,
        };
        let l = match self.layer {
            Layer::Primary => 0,
            Layer::Fn => 1,
        };
        o + l
    }

    /// Page name, e.g. `landscape-primary`.
    pub fn name(self) -> String {
        format!("{}-{}", self.orientation.as_str(), self.layer.as_str())
    }

    /// Human title used as the section comment, e.g. `Landscape Primary`.
    pub fn title(self) -> String {
        self.name()
            .split('-')
            .map(|word| {
                let mut chars = word.chars();
                match chars.next() {
                    Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                    None => String::new(),
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Same orientation, other layer. Target of the `fn` key.
    pub fn layer_sibling(self) -> Self {
        Self::new(self.orientation, self.layer.flipped())
    }

    /// Other orientation, same layer. Target of the hidden auto-rotate descriptor.
    pub fn orientation_sibling(self) -> Self {
        Self::new(self.orientation.flipped(), self.layer)
    }

    /// Image path relative to the output root, as written into the cfg.
    pub fn image_rel_path(self) -> String {
        format!("img/{}.png", self.name())
    }
}

/// A page bound to the geometry and key grids it is generated from.
#[derive(Clone, Debug)]
pub struct PageSpec {
    /// Which page this is.
    pub page: Page,
    /// Geometry for the page's orientation.
    pub config: OverlayConfig,
    /// Grid drawn in the left panel.
    pub left: KeyGrid,
    /// Grid drawn in the right panel.
    pub right: KeyGrid,
}

impl PageSpec {
    /// Both grids in emission order (left, then right).
    pub fn grids(&self) -> [&KeyGrid; 2] {
        [&self.left, &self.right]
    }
}

/// The full set of pages that make up one cfg file.
#[derive(Clone, Debug)]
pub struct PageSet {
    specs: Vec<PageSpec>,
}

impl PageSet {
    /// Build the standard split-QWERTY page set from an orientation pair of configs.
    pub fn split_qwerty(landscape: OverlayConfig, portrait: OverlayConfig) -> OverlayResult<Self> {
        let specs = Page::ALL
            .iter()
            .map(|&page| {
                let config = match page.orientation {
                    Orientation::Landscape => landscape.clone(),
                    Orientation::Portrait => portrait.clone(),
                };
                let (left, right) = match page.layer {
                    Layer::Primary => (grid::left_primary(), grid::right_primary()),
                    Layer::Fn => (grid::left_fn(), grid::right_fn()),
                };
                PageSpec {
                    page,
                    config,
                    left,
                    right,
                }
            })
            .collect();
        Self::new(specs)
    }

    /// Validate and wrap page specs.
    ///
    /// Specs must be given in overlay index order and every grid must match its page's layer and
    /// its own panel side.
    pub fn new(specs: Vec<PageSpec>) -> OverlayResult<Self> {
        if specs.len() != Page::ALL.len() {
            return Err(OverlayError::validation(format!(
                "expected {} pages, got {}",
                Page::ALL.len(),
                specs.len()
            )));
        }
        for (i, spec) in specs.iter().enumerate() {
            if spec.page.index() != i {
                return Err(OverlayError::validation(format!(
                    "page '{}' must be at index {}, found at {i}",
                    spec.page.name(),
                    spec.page.index()
                )));
            }
            spec.config.validate()?;
            for (grid, side) in [(&spec.left, Side::Left), (&spec.right, Side::Right)] {
                grid.validate()?;
                if grid.side != side || grid.layer != spec.page.layer {
                    return Err(OverlayError::validation(format!(
                        "page '{}' has a {:?}/{:?} grid in its {:?} panel",
                        spec.page.name(),
                        grid.side,
                        grid.layer,
                        side
                    )));
                }
            }
        }
        Ok(Self { specs })
    }

    /// Pages in overlay index order.
    pub fn specs(&self) -> &[PageSpec] {
        &self.specs
    }
}

#[cfg(test)]
#[path = "../tests/unit/pages.rs"]
mod tests;
