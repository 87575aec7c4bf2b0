use crate::foundation::core::Rgba8;

/// Colors and corner radii shared by every page.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Style {
    /// Panel background.
    pub panel_fill: Rgba8,
    /// Key and toggle button background.
    pub key_fill: Rgba8,
    /// Label color.
    pub key_text: Rgba8,
    /// Key and toggle button outline.
    pub key_border: Rgba8,
    /// Key and toggle button corner radius.
    pub key_radius: f64,
    /// Panel corner radius.
    pub panel_radius: f64,
    /// Outline width in pixels.
    pub border_width: f64,
    /// Labels longer than this many characters use the small font size.
    pub long_label_chars: usize,
}

impl Default for Style {
    fn default() -> Self {
        Self {
            panel_fill: Rgba8::new(30, 30, 30, 180),
            key_fill: Rgba8::new(80, 80, 80, 200),
            key_text: Rgba8::new(255, 255, 255, 255),
            key_border: Rgba8::new(60, 60, 60, 255),
            key_radius: 6.0,
            panel_radius: 12.0,
            border_width: 1.0,
            long_label_chars: 3,
        }
    }
}

impl Style {
    /// Whether `label` should be drawn with the small font size.
    pub fn is_long_label(&self, label: &str) -> bool {
        label.chars().count() > self.long_label_chars
    }
}
