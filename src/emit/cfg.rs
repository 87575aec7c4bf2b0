use crate::emit::descriptor::{Descriptor, page_descriptors};
use crate::pages::{Page, PageSet};

const HEADER: &[&str] = &[
    "# Split QWERTY Keyboard Overlay for RetroArch",
    "# Recreates the iOS soft keyboard removed in commit ef9dc83041",
    "#",
    "# Landscape and portrait versions with Fn layer toggle",
    "# osk_toggle button returns to joypad overlay",
    "# menu_toggle button opens RetroArch menu",
];

/// Everything the cfg says about one page.
#[derive(Clone, Debug)]
pub struct PageBlock {
    /// The page.
    pub page: Page,
    /// Canvas aspect ratio of the page's orientation.
    pub aspect_ratio: f64,
    /// Descriptors in emission order.
    pub descriptors: Vec<Descriptor>,
}

impl PageBlock {
    /// Number of descriptors declared by `overlay<i>_descs`.
    pub fn desc_count(&self) -> usize {
        self.descriptors.len()
    }

    fn push_lines(&self, out: &mut Vec<String>) {
        let i = self.page.index();
        let name = self.page.name();
        out.push(format!("# {}", self.page.title()));
        out.push(format!("overlay{i}_name = {name}"));
        out.push(format!("overlay{i}_normalized = true"));
        out.push(format!("overlay{i}_full_screen = true"));
        out.push(format!("overlay{i}_aspect_ratio = {:.6}", self.aspect_ratio));
        out.push(format!("overlay{i}_auto_x_separation = true"));
        out.push(format!("overlay{i}_overlay = {}", self.page.image_rel_path()));
        out.push(format!("overlay{i}_descs = {}", self.desc_count()));
        out.push(String::new());
        for (j, desc) in self.descriptors.iter().enumerate() {
            out.extend(desc.lines(i, j));
        }
        out.push(String::new());
    }
}

/// The overlay cfg file for a whole [`PageSet`].
#[derive(Clone, Debug)]
pub struct CfgDocument {
    /// Page blocks in overlay index order.
    pub pages: Vec<PageBlock>,
}

impl CfgDocument {
    /// Emit descriptors for every page.
    pub fn build(set: &PageSet) -> Self {
        let pages = set
            .specs()
            .iter()
            .map(|spec| PageBlock {
                page: spec.page,
                aspect_ratio: spec.config.aspect_ratio(),
                descriptors: page_descriptors(spec),
            })
            .collect();
        Self { pages }
    }

    /// All cfg lines, without separators.
    pub fn lines(&self) -> Vec<String> {
        let mut out: Vec<String> = HEADER.iter().map(|s| (*s).to_string()).collect();
        out.push(String::new());
        out.push(format!("overlays = {}", self.pages.len()));
        out.push(String::new());
        for block in &self.pages {
            block.push_lines(&mut out);
        }
        out
    }

    /// File contents: lines joined by `\n`.
    ///
    /// The last page's blank separator leaves exactly one trailing newline.
    pub fn to_text(&self) -> String {
        self.lines().join("\n")
    }
}

#[cfg(test)]
#[path = "../../tests/unit/emit/cfg.rs"]
mod tests;
